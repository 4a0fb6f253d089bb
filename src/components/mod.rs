pub mod app;
pub mod navbar;
pub mod notice_stack;
pub mod route_dispatch_panel;

pub use app::{App, AppProps};
pub use navbar::NavigationBar;
pub use notice_stack::NoticeStack;
pub use route_dispatch_panel::RouteDispatchPanel;
