// Módulo de mapas: trait común + contabilidad en memoria + implementación web

pub mod traits;
pub mod active_routes;
pub mod web;

pub use traits::{AddRouteOutcome, MapError, MapSurface, MarkerKind, MarkerSpec, RouteMarkers};
pub use active_routes::ActiveRouteSet;
pub use web::{MapInitError, WebMapSurface};
