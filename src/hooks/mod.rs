pub mod use_notices;
pub mod use_route_catalog;
pub mod use_realtime;
pub mod use_map_surface;

pub use use_notices::{use_notices, UseNoticesHandle};
pub use use_route_catalog::use_route_catalog;
pub use use_realtime::{use_realtime, UseRealtimeHandle};
pub use use_map_surface::{use_map_surface, UseMapSurfaceHandle};
