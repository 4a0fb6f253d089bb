use std::env;
use std::fs;
use std::path::Path;

/// Variables que el bundle lee con `option_env!` (ver src/config.rs)
const CONFIG_KEYS: &[&str] = &["BACKEND_ADDRESS", "MAP_API_KEY"];

fn main() {
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=No .env file found. BACKEND_ADDRESS defaults to http://localhost:3000 and MAP_API_KEY is empty.");
        println!("cargo:rerun-if-changed=build.rs");
        return;
    }

    println!("cargo:rerun-if-changed=.env");

    if let Ok(contents) = fs::read_to_string(env_file) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            // El entorno del proceso gana sobre el .env
            if CONFIG_KEYS.contains(&key) && env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value);
            }
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
}
