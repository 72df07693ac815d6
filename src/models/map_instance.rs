use crate::dom::dataset::{read_flag, read_text, DataAttributes};
use crate::models::coordinates::{parse_coordinate, PositionSource};
use crate::utils::constants::attr;

/// Interacciones del usuario con el mapa
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Interactions {
    pub scroll_wheel_zoom: bool,
    pub double_click_zoom: bool,
    pub dragging: bool,
    pub keyboard: bool,
}

/// Controles visibles sobre el mapa
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Controls {
    pub pan: bool,
    pub zoom: bool,
    pub layers: bool,
    pub scale_bar: bool,
}

impl Controls {
    pub fn wants_navigation(&self) -> bool {
        self.pan || self.zoom
    }
}

/// Configuración de una instancia de mapa, leída de los `data-*` de su contenedor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapInstanceConfig {
    pub api_key: String,
    pub zoom: Option<f64>,
    pub interactions: Interactions,
    pub controls: Controls,
    pub style: Option<String>,
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub address: Option<String>,
    pub zipcode: Option<String>,
    pub city: Option<String>,
}

impl MapInstanceConfig {
    pub fn read<A: DataAttributes + ?Sized>(container: &A) -> Self {
        Self {
            api_key: read_text(container, attr::API_KEY).unwrap_or_default(),
            zoom: read_text(container, attr::ZOOM).as_deref().and_then(parse_coordinate),
            interactions: Interactions {
                scroll_wheel_zoom: read_flag(container, attr::SCROLLWHEEL),
                double_click_zoom: read_flag(container, attr::DOUBLE_CLICK_ZOOM),
                dragging: read_flag(container, attr::DRAGGABLE),
                keyboard: read_flag(container, attr::KEYBOARD_SHORTCUTS),
            },
            controls: Controls {
                pan: read_flag(container, attr::PAN_CONTROL),
                zoom: read_flag(container, attr::ZOOM_CONTROL),
                layers: read_flag(container, attr::LAYERS_CONTROL),
                scale_bar: read_flag(container, attr::SCALE_BAR),
            },
            style: read_text(container, attr::STYLE),
            lat: read_text(container, attr::LAT),
            lng: read_text(container, attr::LNG),
            address: read_text(container, attr::ADDRESS),
            zipcode: read_text(container, attr::ZIPCODE),
            city: read_text(container, attr::CITY),
        }
    }

    /// Texto de búsqueda para el geocoder: "calle, CP ciudad"
    pub fn address_query(&self) -> Option<String> {
        let locality = [self.zipcode.as_deref(), self.city.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");

        let parts: Vec<&str> = [self.address.as_deref(), Some(locality.as_str())]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }

    pub fn position(&self) -> PositionSource {
        PositionSource::from_fields(
            self.lat.as_deref(),
            self.lng.as_deref(),
            self.address_query().as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LngLat;
    use std::collections::HashMap;

    fn container(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn reads_flags_and_values() {
        let data = container(&[
            ("api_key", "pk.test"),
            ("zoom", "12"),
            ("scrollwheel", "true"),
            ("double_click_zoom", "false"),
            ("draggable", "true"),
            ("keyboard_shortcuts", "TRUE"),
            ("zoom_control", "true"),
            ("scale_bar", "true"),
            ("style", "satellite"),
        ]);
        let config = MapInstanceConfig::read(&data);

        assert_eq!(config.api_key, "pk.test");
        assert_eq!(config.zoom, Some(12.0));
        assert!(config.interactions.scroll_wheel_zoom);
        assert!(!config.interactions.double_click_zoom);
        assert!(config.interactions.dragging);
        assert!(config.interactions.keyboard);
        assert!(config.controls.zoom);
        assert!(!config.controls.pan);
        assert!(config.controls.wants_navigation());
        assert!(!config.controls.layers);
        assert!(config.controls.scale_bar);
        assert_eq!(config.style.as_deref(), Some("satellite"));
    }

    #[test]
    fn missing_flags_disable_everything() {
        let config = MapInstanceConfig::read(&container(&[]));
        assert_eq!(config.interactions, Interactions::default());
        assert_eq!(config.controls, Controls::default());
        assert!(!config.controls.wants_navigation());
        assert_eq!(config.zoom, None);
        assert_eq!(config.position(), PositionSource::Missing);
    }

    #[test]
    fn explicit_center_with_decimal_comma() {
        let config = MapInstanceConfig::read(&container(&[("lat", "46,5"), ("lng", "7,3")]));
        assert_eq!(config.position(), PositionSource::Explicit(LngLat::from_lat_lng(46.5, 7.3)));
    }

    #[test]
    fn address_query_joins_zipcode_and_city() {
        let config = MapInstanceConfig::read(&container(&[
            ("address", "Bundesplatz 3"),
            ("zipcode", "3005"),
            ("city", "Bern"),
            ("lat", ""),
            ("lng", ""),
        ]));
        assert_eq!(config.address_query().as_deref(), Some("Bundesplatz 3, 3005 Bern"));
        assert_eq!(
            config.position(),
            PositionSource::Address("Bundesplatz 3, 3005 Bern".into())
        );
    }

    #[test]
    fn city_alone_is_enough_for_a_query() {
        let config = MapInstanceConfig::read(&container(&[("city", "Zürich")]));
        assert_eq!(config.address_query().as_deref(), Some("Zürich"));
    }
}
