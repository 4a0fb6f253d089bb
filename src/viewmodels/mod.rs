pub mod dispatch_viewmodel;
pub mod palette;

pub use dispatch_viewmodel::{DispatchError, DispatchOutcome, DispatchPhase, DispatchViewModel};
pub use palette::pick_route_color;
