use serde::Serialize;
use thiserror::Error;
use crate::models::{Position, Route};

/// Tipo de marcador dentro de una corrida
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    /// Vehículo, arranca en la posición inicial y se mueve con `new-position`
    Vehicle,
    Destination,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct MarkerSpec {
    pub kind: MarkerKind,
    pub position: Position,
    pub color: String,
}

/// Par de marcadores que representa una corrida activa
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct RouteMarkers {
    pub vehicle: MarkerSpec,
    pub destination: MarkerSpec,
}

impl RouteMarkers {
    /// Vehículo en el origen y destino en el final, ambos con el mismo color
    pub fn for_route(route: &Route, color: &str) -> Self {
        Self {
            vehicle: MarkerSpec {
                kind: MarkerKind::Vehicle,
                position: route.start_position,
                color: color.to_string(),
            },
            destination: MarkerSpec {
                kind: MarkerKind::Destination,
                position: route.end_position,
                color: color.to_string(),
            },
        }
    }
}

/// Resultado de `MapSurface::add_route`
#[derive(Clone, PartialEq, Debug)]
pub enum AddRouteOutcome {
    Added,
    /// El id ya está activo; el conjunto no cambia
    AlreadyActive,
    Fault(MapError),
}

/// Error del mapa
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    #[error("Invalid coordinates ({lat}, {lng})")]
    InvalidCoordinates { lat: f64, lng: f64 },
    #[error("Route {0} is not active")]
    RouteNotActive(String),
    #[error("Map library error: {0}")]
    Library(String),
}

/// Superficie de mapa con su conjunto de corridas activas.
///
/// Un id está activo como máximo una vez: agregar un duplicado devuelve
/// `AlreadyActive` y no sobrescribe nada.
pub trait MapSurface {
    fn add_route(&mut self, route_id: &str, markers: RouteMarkers) -> AddRouteOutcome;

    fn move_vehicle(&mut self, route_id: &str, position: Position) -> Result<(), MapError>;

    fn remove_route(&mut self, route_id: &str) -> Result<(), MapError>;

    fn is_active(&self, route_id: &str) -> bool;

    fn active_route_ids(&self) -> Vec<String>;
}
