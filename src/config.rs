use serde::{Deserialize, Serialize};

use crate::models::LngLat;

/// Configuración del widget fijada en tiempo de compilación
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapsConfig {
    pub container_selector: String,
    pub marker_selector: String,
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
    pub log_level: String,
}

impl Default for MapsConfig {
    fn default() -> Self {
        Self {
            container_selector: ".djangocms-maps-container".to_string(),
            marker_selector: ".js-marker".to_string(),
            // Suiza
            default_center_lat: 46.94708,
            default_center_lng: 7.445975,
            default_zoom: 13.0,
            log_level: "info".to_string(),
        }
    }
}

impl MapsConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            container_selector: option_env!("MAPS_CONTAINER_SELECTOR")
                .map(str::to_string)
                .unwrap_or(defaults.container_selector),
            marker_selector: option_env!("MAPS_MARKER_SELECTOR")
                .map(str::to_string)
                .unwrap_or(defaults.marker_selector),
            default_center_lat: option_env!("DEFAULT_MAP_CENTER_LAT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_center_lat),
            default_center_lng: option_env!("DEFAULT_MAP_CENTER_LNG")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_center_lng),
            default_zoom: option_env!("DEFAULT_MAP_ZOOM")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_zoom),
            log_level: option_env!("MAPS_LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
        }
    }

    pub fn default_center(&self) -> LngLat {
        LngLat::from_lat_lng(self.default_center_lat, self.default_center_lng)
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: MapsConfig = MapsConfig::from_env();
}

/// Opciones de `initMaps` pasadas desde JavaScript
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitOptions {
    /// Selector CSS de los contenedores de mapa
    pub container: Option<String>,
    /// Selector CSS de los marcadores dentro de cada contenedor
    pub marker: Option<String>,
}

/// Selectores efectivos después de aplicar las opciones sobre `CONFIG`
#[derive(Debug, Clone, PartialEq)]
pub struct Selectors {
    pub container: String,
    pub marker: String,
}

impl InitOptions {
    pub fn resolve(&self, base: &MapsConfig) -> Selectors {
        let pick = |value: &Option<String>, fallback: &str| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(fallback)
                .to_string()
        };
        Selectors {
            container: pick(&self.container, &base.container_selector),
            marker: pick(&self.marker, &base.marker_selector),
        }
    }
}
