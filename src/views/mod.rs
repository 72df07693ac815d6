#[cfg(target_arch = "wasm32")]
pub mod layers_control;
