// ============================================================================
// DOM MODULE - Helpers para manipulación DOM
// ============================================================================

pub mod dataset;

#[cfg(target_arch = "wasm32")]
pub mod builder;
#[cfg(target_arch = "wasm32")]
pub mod element;
#[cfg(target_arch = "wasm32")]
pub mod events;

#[cfg(target_arch = "wasm32")]
pub use builder::*;
#[cfg(target_arch = "wasm32")]
pub use element::*;
#[cfg(target_arch = "wasm32")]
pub use events::*;
