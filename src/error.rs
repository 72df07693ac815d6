use wasm_bindgen::JsValue;

/// Errores de plataforma del widget.
///
/// Datos ausentes o geocodificaciones vacías no son errores: se registran y el
/// marcador simplemente no se coloca.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MapsError {
    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Mapbox GL error: {0}")]
    MapLibrary(String),

    #[error("Geocoding error: {0}")]
    Geocoding(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Spawn error: {0}")]
    Spawn(String),
}

pub type Result<T> = std::result::Result<T, MapsError>;

impl MapsError {
    /// Describe un valor lanzado por JavaScript
    pub fn describe(value: &JsValue) -> String {
        value.as_string().unwrap_or_else(|| format!("{:?}", value))
    }

    pub fn dom(value: JsValue) -> Self {
        Self::Dom(Self::describe(&value))
    }

    pub fn map_library(value: JsValue) -> Self {
        Self::MapLibrary(Self::describe(&value))
    }
}

impl From<MapsError> for JsValue {
    fn from(error: MapsError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for MapsError {
    fn from(error: serde_wasm_bindgen::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

impl From<futures::task::SpawnError> for MapsError {
    fn from(error: futures::task::SpawnError) -> Self {
        Self::Spawn(error.to_string())
    }
}
