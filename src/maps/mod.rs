// Módulo de mapas: traits de plataforma + implementación web (Mapbox GL JS)

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(test)]
pub mod fake;

use crate::error::Result;
use crate::models::LngLat;
use crate::viewmodels::layers_viewmodel::LayersControl;

/// Esquinas donde Mapbox GL coloca los controles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ControlPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlPosition::TopLeft => "top-left",
            ControlPosition::TopRight => "top-right",
            ControlPosition::BottomLeft => "bottom-left",
            ControlPosition::BottomRight => "bottom-right",
        }
    }
}

/// Controles que el widget sabe montar
#[derive(Debug, Clone)]
pub enum MapControl {
    Navigation,
    Scale { max_width: u32, unit: &'static str },
    Layers(LayersControl),
}

impl MapControl {
    pub fn name(&self) -> &'static str {
        match self {
            MapControl::Navigation => "navigation",
            MapControl::Scale { .. } => "scale",
            MapControl::Layers(_) => "layers",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopupSpec {
    pub html: String,
    pub offset: u32,
}

/// Todo lo necesario para pintar un marcador
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub at: LngLat,
    pub icon: Option<String>,
    /// Se abre en cuanto se crea el marcador
    pub popup: Option<PopupSpec>,
}

/// Vista de mapa sobre la que trabajan los viewmodels.
///
/// Los métodos toman `&self`: la vista se comparte entre los callbacks de
/// geocodificación y los controles, todo en el mismo hilo.
pub trait MapView {
    fn add_control(&self, control: MapControl, position: Option<ControlPosition>) -> Result<()>;

    fn add_marker(&self, marker: &MarkerSpec) -> Result<()>;

    /// Desplazamiento animado, usado tras colocar un marcador
    fn pan_to(&self, at: LngLat);

    /// Centrado inmediato de la instancia
    fn jump_to(&self, center: LngLat, zoom: f64);

    fn set_style(&self, style_url: &str);
}
