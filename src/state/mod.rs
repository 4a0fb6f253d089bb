pub mod loadable;
pub mod notices;

pub use loadable::Loadable;
pub use notices::{NoticeAction, NoticeEntry, NoticeList};
