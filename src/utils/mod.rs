// Utils compartidos

pub mod constants;
pub mod map_ffi;

pub use constants::*;
