use futures::future::join;
use thiserror::Error;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use crate::config::AppConfig;
use crate::models::Position;
use crate::services::geolocation::{current_position, GeolocationError};
use crate::utils::map_ffi::{self, describe_js_error};
use crate::utils::MAP_CONTAINER_ID;
use super::{ActiveRouteSet, AddRouteOutcome, MapError, MapSurface, RouteMarkers};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapInitError {
    #[error("map library failed to load: {0}")]
    Library(String),
    #[error(transparent)]
    Geolocation(#[from] GeolocationError),
}

/// Mapa del navegador (vía static/map_bridge.js) + conjunto de corridas activas
pub struct WebMapSurface {
    map: JsValue,
    routes: ActiveRouteSet,
}

impl WebMapSurface {
    /// Carga la librería y pide la geolocalización en paralelo; con ambas
    /// listas crea el mapa centrado en el usuario
    pub async fn load(config: &AppConfig) -> Result<Self, MapInitError> {
        log::info!("🗺️ Cargando librería de mapas y geolocalización...");

        let library = JsFuture::from(map_ffi::load_map_library(&config.map_api_key));
        let (library, position) = join(library, current_position(config.high_accuracy)).await;

        library.map_err(|e| MapInitError::Library(describe_js_error(&e)))?;
        let position = position?;

        let map = map_ffi::create_map(MAP_CONTAINER_ID, position.lat, position.lng, config.map_zoom)
            .map_err(|e| MapInitError::Library(describe_js_error(&e)))?;

        log::info!(
            "✅ Mapa inicializado en ({}, {}) zoom {}",
            position.lat, position.lng, config.map_zoom
        );
        Ok(Self { map, routes: ActiveRouteSet::new() })
    }
}

impl MapSurface for WebMapSurface {
    fn add_route(&mut self, route_id: &str, markers: RouteMarkers) -> AddRouteOutcome {
        let markers_json = match serde_json::to_string(&markers) {
            Ok(json) => json,
            Err(e) => return AddRouteOutcome::Fault(MapError::Library(e.to_string())),
        };

        match self.routes.add_route(route_id, markers) {
            AddRouteOutcome::Added => {}
            other => return other,
        }

        if let Err(e) = map_ffi::add_route_markers(&self.map, route_id, &markers_json) {
            // El JS no dibujó nada: la corrida no queda activa
            let _ = self.routes.remove_route(route_id);
            return AddRouteOutcome::Fault(MapError::Library(describe_js_error(&e)));
        }

        log::info!("📍 Corrida {} agregada al mapa", route_id);
        AddRouteOutcome::Added
    }

    fn move_vehicle(&mut self, route_id: &str, position: Position) -> Result<(), MapError> {
        self.routes.move_vehicle(route_id, position)?;
        map_ffi::move_vehicle_marker(&self.map, route_id, position.lat, position.lng)
            .map_err(|e| MapError::Library(describe_js_error(&e)))
    }

    fn remove_route(&mut self, route_id: &str) -> Result<(), MapError> {
        self.routes.remove_route(route_id)?;
        map_ffi::remove_route_markers(&self.map, route_id)
            .map_err(|e| MapError::Library(describe_js_error(&e)))?;
        log::info!("🗑️ Corrida {} removida del mapa", route_id);
        Ok(())
    }

    fn is_active(&self, route_id: &str) -> bool {
        self.routes.is_active(route_id)
    }

    fn active_route_ids(&self) -> Vec<String> {
        self.routes.active_route_ids()
    }
}
