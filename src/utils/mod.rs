// Utils compartidos

pub mod constants;
#[cfg(target_arch = "wasm32")]
pub mod mapbox_ffi;

pub use constants::*;
