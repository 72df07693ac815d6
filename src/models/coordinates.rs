use serde::{Deserialize, Serialize};

/// Coordenada geográfica en el orden que espera Mapbox GL (`{lng, lat}`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    /// Argumentos en el orden del formulario del CMS: `(lat, lng)`
    pub fn from_lat_lng(lat: f64, lng: f64) -> Self {
        Self { lng, lat }
    }

    /// Desde el par `[lng, lat]` que devuelve el geocoder
    pub fn from_center(center: [f64; 2]) -> Option<Self> {
        let [lng, lat] = center;
        if lng.is_finite() && lat.is_finite() {
            Some(Self { lng, lat })
        } else {
            None
        }
    }
}

/// Parsear un número de coordenada tal como lo escribe el formulario del CMS.
///
/// El formulario puede usar coma decimal según el idioma del editor
/// ("46,5"), así que la primera coma se convierte en punto antes de parsear.
/// Cualquier valor que no sea un número finito se trata como ausente.
pub fn parse_coordinate(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replacen(',', ".", 1);
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Origen de la posición de un mapa o marcador.
///
/// Las coordenadas explícitas tienen prioridad sobre la dirección cuando
/// ambas vienen en el formulario.
#[derive(Debug, Clone, PartialEq)]
pub enum PositionSource {
    Explicit(LngLat),
    Address(String),
    Missing,
}

impl PositionSource {
    pub fn from_fields(lat: Option<&str>, lng: Option<&str>, address: Option<&str>) -> Self {
        let lat = lat.map(str::trim).filter(|s| !s.is_empty());
        let lng = lng.map(str::trim).filter(|s| !s.is_empty());

        if let (Some(lat), Some(lng)) = (lat, lng) {
            match (parse_coordinate(lat), parse_coordinate(lng)) {
                (Some(lat), Some(lng)) => return Self::Explicit(LngLat::from_lat_lng(lat, lng)),
                _ => log::warn!("⚠️ Coordenadas inválidas ({}, {}), se usa la dirección", lat, lng),
            }
        }

        match address.map(str::trim).filter(|s| !s.is_empty()) {
            Some(address) => Self::Address(address.to_string()),
            None => Self::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_comma_is_normalized() {
        let source = PositionSource::from_fields(Some("46,5"), Some("7,3"), None);
        assert_eq!(source, PositionSource::Explicit(LngLat { lat: 46.5, lng: 7.3 }));
    }

    #[test]
    fn dot_and_whitespace_are_accepted() {
        assert_eq!(parse_coordinate(" 46.94708 "), Some(46.94708));
        assert_eq!(parse_coordinate("-0,25"), Some(-0.25));
    }

    #[test]
    fn malformed_numbers_are_absent() {
        assert_eq!(parse_coordinate("abc"), None);
        assert_eq!(parse_coordinate("1,2,3"), None);
        assert_eq!(parse_coordinate("NaN"), None);
        assert_eq!(parse_coordinate("inf"), None);
        assert_eq!(parse_coordinate(""), None);
    }

    #[test]
    fn explicit_coordinates_win_over_address() {
        let source = PositionSource::from_fields(Some("1"), Some("2"), Some("Bundesplatz 3, Bern"));
        assert_eq!(source, PositionSource::Explicit(LngLat::from_lat_lng(1.0, 2.0)));
    }

    #[test]
    fn one_missing_coordinate_falls_back_to_address() {
        let source = PositionSource::from_fields(Some("46.9"), Some(""), Some("Bern"));
        assert_eq!(source, PositionSource::Address("Bern".into()));
    }

    #[test]
    fn malformed_coordinates_fall_back_to_address() {
        let source = PositionSource::from_fields(Some("north"), Some("7.4"), Some("Bern"));
        assert_eq!(source, PositionSource::Address("Bern".into()));
    }

    #[test]
    fn nothing_usable_is_missing() {
        assert_eq!(PositionSource::from_fields(None, None, Some("   ")), PositionSource::Missing);
        assert_eq!(PositionSource::from_fields(Some("x"), Some("y"), None), PositionSource::Missing);
    }

    #[test]
    fn from_lat_lng_matches_geocoder_center() {
        let point = LngLat::from_lat_lng(46.9465, 7.4439);
        assert_eq!(point.lat, 46.9465);
        assert_eq!(point.lng, 7.4439);
        assert_eq!(LngLat::from_center([7.4439, 46.9465]), Some(point));
    }

    #[test]
    fn geocoder_center_is_lng_first() {
        let point = LngLat::from_center([7.44, 46.95]).unwrap();
        assert_eq!(point.lng, 7.44);
        assert_eq!(point.lat, 46.95);
        assert!(LngLat::from_center([f64::NAN, 1.0]).is_none());
    }
}
