// ============================================================================
// MAP VIEWMODEL - Opciones del mapa y controles
// ============================================================================
// SOLO preparación de datos y decisiones; la vista concreta llega por MapView
// ============================================================================

use serde::Serialize;

use crate::config::MapsConfig;
use crate::error::Result;
use crate::maps::{ControlPosition, MapControl, MapView};
use crate::models::{LngLat, MapInstanceConfig, StyleRegistry};
use crate::utils::constants::{SCALE_MAX_WIDTH, SCALE_UNIT};
use crate::viewmodels::layers_viewmodel::LayersControl;

/// Opciones del constructor `mapboxgl.Map` (sin `container`, que pone la vista web)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub style: String,
    pub center: LngLat,
    pub zoom: f64,
    pub scroll_zoom: bool,
    pub double_click_zoom: bool,
    pub drag_pan: bool,
    pub keyboard: bool,
}

/// ViewModel del mapa - SOLO lógica de arranque
pub struct MapViewModel;

impl MapViewModel {
    pub fn zoom(config: &MapInstanceConfig, base: &MapsConfig) -> f64 {
        config.zoom.unwrap_or(base.default_zoom)
    }

    /// El mapa arranca en el centro por defecto; el centrado real llega después
    pub fn map_options(config: &MapInstanceConfig, registry: &StyleRegistry, base: &MapsConfig) -> MapOptions {
        let style = registry
            .initial(config.style.as_deref())
            .map(|entry| entry.url.to_string())
            .unwrap_or_default();

        MapOptions {
            style,
            center: base.default_center(),
            zoom: Self::zoom(config, base),
            scroll_zoom: config.interactions.scroll_wheel_zoom,
            double_click_zoom: config.interactions.double_click_zoom,
            drag_pan: config.interactions.dragging,
            keyboard: config.interactions.keyboard,
        }
    }

    /// Controles pedidos por el formulario, en posiciones fijas
    pub fn controls(config: &MapInstanceConfig, registry: &'static StyleRegistry) -> Vec<(MapControl, Option<ControlPosition>)> {
        let mut controls = Vec::new();

        if config.controls.layers {
            let initial = registry.initial(config.style.as_deref()).map(|entry| entry.key);
            controls.push((
                MapControl::Layers(LayersControl::new(registry, initial)),
                Some(ControlPosition::TopLeft),
            ));
        }
        if config.controls.wants_navigation() {
            controls.push((MapControl::Navigation, Some(ControlPosition::TopRight)));
        }
        if config.controls.scale_bar {
            controls.push((
                MapControl::Scale { max_width: SCALE_MAX_WIDTH, unit: SCALE_UNIT },
                None,
            ));
        }

        controls
    }

    pub fn attach_controls<V: MapView + ?Sized>(
        view: &V,
        config: &MapInstanceConfig,
        registry: &'static StyleRegistry,
    ) -> Result<()> {
        for (control, position) in Self::controls(config, registry) {
            log::debug!("🧭 Control {} en {:?}", control.name(), position.map(|p| p.as_str()));
            view.add_control(control, position)?;
        }
        Ok(())
    }
}
