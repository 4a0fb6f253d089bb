// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================

use gloo_net::http::Request;
use thiserror::Error;
use crate::config::AppConfig;
use crate::models::RouteCatalog;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },
    #[error("Parse error: {0}")]
    Decode(String),
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, PartialEq, Debug)]
pub struct ApiClient {
    routes_url: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self { routes_url: config.routes_url() }
    }

    /// Catálogo de corridas (`GET /routes`), sin paginación
    pub async fn fetch_routes(&self) -> Result<RouteCatalog, ApiError> {
        log::info!("📋 Obteniendo corridas: {}", self.routes_url);

        let response = Request::get(&self.routes_url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Http {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let catalog = response
            .json::<RouteCatalog>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        log::info!("✅ {} corridas cargadas", catalog.len());
        Ok(catalog)
    }
}
