// ============================================================================
// CODE DELIVERY - PAINEL DE DESPACHO (Yew + WASM)
// ============================================================================
// - Components: vistas Yew (navbar, panel, snackbars)
// - Hooks: inicializaciones al montar (catálogo, mapa, canal)
// - ViewModels: flujo "iniciar corrida" sin DOM
// - Services: HTTP, geolocalización, Socket.IO
// - Maps: trait de superficie + implementación web
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod maps;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use crate::components::{App, AppProps};
use crate::config::AppConfig;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::default());
    log::info!("🚀 Code Delivery - painel de despacho");

    let config = AppConfig::from_env()
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    log::info!("⚙️ Backend: {}", config.backend_address);

    yew::Renderer::<App>::with_props(AppProps { config: Rc::new(config) }).render();
    Ok(())
}
