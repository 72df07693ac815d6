// ============================================================================
// LAYERS VIEWMODEL - Selector de estilos del mapa
// ============================================================================
// Estado: un estilo seleccionado de entre los registrados (tipo radio).
// El DOM del control vive en views::layers_control.
// ============================================================================

use crate::maps::MapView;
use crate::models::{StyleEntry, StyleRegistry};

/// Opción visible del selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerOption {
    pub key: &'static str,
    pub checked: bool,
}

/// Máquina de estados del selector: siempre hay exactamente un estilo activo
#[derive(Debug, Clone)]
pub struct LayerSwitch {
    registry: &'static StyleRegistry,
    selected: usize,
}

impl LayerSwitch {
    pub fn new(registry: &'static StyleRegistry, initial: Option<&str>) -> Self {
        let selected = initial.and_then(|key| registry.position(key)).unwrap_or(0);
        Self { registry, selected }
    }

    pub fn selected(&self) -> Option<&'static StyleEntry> {
        self.registry.entries().get(self.selected)
    }

    pub fn options(&self) -> Vec<LayerOption> {
        self.registry
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| LayerOption {
                key: entry.key,
                checked: index == self.selected,
            })
            .collect()
    }

    /// Cambia la selección. Devuelve el estilo a aplicar, o `None` si la clave
    /// no existe o ya estaba seleccionada.
    pub fn select(&mut self, key: &str) -> Option<&'static StyleEntry> {
        let index = self.registry.position(key)?;
        if index == self.selected {
            return None;
        }
        self.selected = index;
        self.registry.entries().get(index)
    }
}

/// Descripción del control antes de montarse en un mapa
#[derive(Debug, Clone)]
pub struct LayersControl {
    registry: &'static StyleRegistry,
    initial: Option<String>,
}

/// Control montado: mapa y contenedor DOM viajan juntos hasta `on_remove`
#[derive(Debug)]
pub struct LayersMount<V, C> {
    view: V,
    container: C,
    switch: LayerSwitch,
}

impl LayersControl {
    pub fn new(registry: &'static StyleRegistry, initial: Option<&str>) -> Self {
        Self {
            registry,
            initial: initial.map(str::to_string),
        }
    }

    pub fn initial_switch(&self) -> LayerSwitch {
        LayerSwitch::new(self.registry, self.initial.as_deref())
    }

    pub fn on_add<V: MapView, C>(&self, view: V, container: C) -> LayersMount<V, C> {
        LayersMount {
            view,
            container,
            switch: self.initial_switch(),
        }
    }

    /// Desmonta el control: suelta el mapa y devuelve el contenedor para quitarlo del DOM
    pub fn on_remove<V, C>(&self, mount: LayersMount<V, C>) -> C {
        let LayersMount { container, .. } = mount;
        container
    }
}

impl<V: MapView, C> LayersMount<V, C> {
    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn options(&self) -> Vec<LayerOption> {
        self.switch.options()
    }

    /// Selección del usuario: un único `set_style` si cambia el estilo
    pub fn select(&mut self, key: &str) -> bool {
        match self.switch.select(key) {
            Some(entry) => {
                log::info!("🗺️ Cambiando estilo a {} ({})", entry.key, entry.url);
                self.view.set_style(entry.url);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::fake::FakeMapView;
    use crate::models::STYLES;

    #[test]
    fn first_style_starts_selected() {
        let switch = LayerSwitch::new(&STYLES, None);
        assert_eq!(switch.selected().unwrap().key, "default");
        assert_eq!(
            switch.options(),
            vec![
                LayerOption { key: "default", checked: true },
                LayerOption { key: "satellite", checked: false },
            ]
        );
    }

    #[test]
    fn selecting_satellite_restyles_once_and_unchecks_default() {
        let view = FakeMapView::default();
        let control = LayersControl::new(&STYLES, None);
        let mut mount = control.on_add(view.clone(), "container");

        assert!(mount.select("satellite"));
        assert_eq!(view.styles(), vec!["mapbox://styles/mapbox/satellite-streets-v11".to_string()]);

        let checked: Vec<_> = mount.options().into_iter().filter(|o| o.checked).collect();
        assert_eq!(checked, vec![LayerOption { key: "satellite", checked: true }]);
    }

    #[test]
    fn reselecting_or_unknown_keys_do_nothing() {
        let view = FakeMapView::default();
        let mut mount = LayersControl::new(&STYLES, None).on_add(view.clone(), ());

        assert!(!mount.select("default"));
        assert!(!mount.select("terrain"));
        assert!(view.styles().is_empty());

        assert!(mount.select("satellite"));
        assert!(mount.select("default"));
        assert_eq!(view.styles().len(), 2);
    }

    #[test]
    fn initial_key_from_instance_style() {
        let control = LayersControl::new(&STYLES, Some("satellite"));
        assert_eq!(control.initial_switch().selected().unwrap().key, "satellite");
    }

    #[test]
    fn remove_hands_back_the_container() {
        let control = LayersControl::new(&STYLES, None);
        let mount = control.on_add(FakeMapView::default(), String::from("div"));
        assert_eq!(mount.container(), "div");
        assert_eq!(control.on_remove(mount), "div");
    }
}
