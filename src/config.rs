// ============================================================================
// CONFIGURACIÓN - Construida una vez en la raíz de composición
// ============================================================================
// Se inyecta vía ContextProvider; no hay estáticos globales
// ============================================================================

use thiserror::Error;
use url::Url;

const DEFAULT_BACKEND_ADDRESS: &str = "http://localhost:3000";
const DEFAULT_MAP_ZOOM: f64 = 15.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("backend address is empty")]
    MissingBackendAddress,
    #[error("invalid backend address '{address}': {reason}")]
    InvalidBackendAddress { address: String, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base HTTP del backend (catálogo y canal en tiempo real)
    pub backend_address: String,
    /// API key del proveedor de mapas
    pub map_api_key: String,
    pub map_zoom: f64,
    /// Geolocalización con `enableHighAccuracy`
    pub high_accuracy: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_address: DEFAULT_BACKEND_ADDRESS.to_string(),
            map_api_key: String::new(),
            map_zoom: DEFAULT_MAP_ZOOM,
            high_accuracy: true,
        }
    }
}

impl AppConfig {
    pub fn new(backend_address: impl Into<String>, map_api_key: impl Into<String>) -> Self {
        Self {
            backend_address: backend_address.into(),
            map_api_key: map_api_key.into(),
            ..Self::default()
        }
    }

    /// Carga la configuración desde variables de entorno en tiempo de compilación
    /// (build.rs las toma del `.env` si existe)
    pub fn from_env() -> Self {
        Self::new(
            option_env!("BACKEND_ADDRESS").unwrap_or(DEFAULT_BACKEND_ADDRESS),
            option_env!("MAP_API_KEY").unwrap_or(""),
        )
    }

    /// Normaliza la dirección del backend y verifica que sea http(s)
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        let address = self.backend_address.trim().trim_end_matches('/').to_string();
        if address.is_empty() {
            return Err(ConfigError::MissingBackendAddress);
        }

        let parsed = Url::parse(&address).map_err(|e| ConfigError::InvalidBackendAddress {
            address: address.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBackendAddress {
                address,
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        if self.map_api_key.is_empty() {
            log::warn!("⚠️ MAP_API_KEY vacío, el proveedor de mapas puede rechazar la carga");
        }

        self.backend_address = address;
        Ok(self)
    }

    /// `GET {backend}/routes`
    pub fn routes_url(&self) -> String {
        format!("{}/routes", self.backend_address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_strips_trailing_slash() {
        let config = AppConfig::new("https://api.example.com/ ", "key").validate().unwrap();
        assert_eq!(config.backend_address, "https://api.example.com");
        assert_eq!(config.routes_url(), "https://api.example.com/routes");
    }

    #[test]
    fn validate_rejects_empty_and_non_http_addresses() {
        assert_eq!(
            AppConfig::new("  ", "").validate(),
            Err(ConfigError::MissingBackendAddress)
        );
        assert!(matches!(
            AppConfig::new("ftp://example.com", "").validate(),
            Err(ConfigError::InvalidBackendAddress { .. })
        ));
        assert!(matches!(
            AppConfig::new("not a url", "").validate(),
            Err(ConfigError::InvalidBackendAddress { .. })
        ));
    }

    #[test]
    fn defaults_use_zoom_15_and_high_accuracy() {
        let config = AppConfig::default();
        assert_eq!(config.map_zoom, 15.0);
        assert!(config.high_accuracy);
        assert_eq!(config.backend_address, "http://localhost:3000");
    }
}
