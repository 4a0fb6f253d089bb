pub mod api_client;
pub mod geolocation;
pub mod realtime;

pub use api_client::{ApiClient, ApiError};
pub use geolocation::{current_position, GeolocationError};
pub use realtime::{DirectionEmitter, RealtimeChannel, RealtimeError};
