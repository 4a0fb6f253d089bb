pub mod route;
pub mod notice;
pub mod realtime;

pub use route::{Position, Route, RouteCatalog, Selection};
pub use notice::{Notice, NoticeSeverity};
pub use realtime::{NewDirection, PositionUpdate, ServerEvent};
