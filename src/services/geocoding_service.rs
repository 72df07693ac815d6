// ============================================================================
// GEOCODING SERVICE - SOLO consulta de direcciones (Stateless)
// ============================================================================
// La búsqueda real la hace el plugin MapboxGeocoder; aquí solo se define el
// contrato y el formato de la respuesta.
// ============================================================================

use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::LngLat;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeocodeQuery {
    pub text: String,
    pub limit: u32,
}

/// Respuesta del evento `results` del geocoder (GeoJSON FeatureCollection)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub features: Vec<GeocodeFeature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeFeature {
    /// `[lng, lat]`
    #[serde(default)]
    pub center: Option<[f64; 2]>,
    #[serde(default)]
    pub place_name: Option<String>,
}

impl GeocodeResponse {
    /// Coordenada del primer candidato, si la trae
    pub fn first_candidate(&self) -> Option<LngLat> {
        self.features
            .first()
            .and_then(|feature| feature.center)
            .and_then(LngLat::from_center)
    }
}

/// Servicio capaz de resolver una dirección en coordenadas
pub trait Geocoder {
    /// La consulta se emite al llamar; el future termina cuando llega la respuesta
    fn geocode(&self, query: GeocodeQuery) -> LocalBoxFuture<'static, Result<GeocodeResponse>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_feature_collection() {
        let json = r#"{
            "type": "FeatureCollection",
            "query": ["bundesplatz", "bern"],
            "features": [
                {"id": "address.1", "place_name": "Bundesplatz 3, 3005 Bern", "center": [7.4439, 46.9465]},
                {"id": "address.2", "center": [0.0, 0.0]}
            ]
        }"#;
        let response: GeocodeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_candidate(), Some(LngLat::from_lat_lng(46.9465, 7.4439)));
        assert_eq!(response.features[0].place_name.as_deref(), Some("Bundesplatz 3, 3005 Bern"));
    }

    #[test]
    fn no_features_means_no_candidate() {
        let response: GeocodeResponse = serde_json::from_str(r#"{"type": "FeatureCollection"}"#).unwrap();
        assert_eq!(response.first_candidate(), None);
    }

    #[test]
    fn first_feature_without_center_is_no_candidate() {
        let response: GeocodeResponse =
            serde_json::from_str(r#"{"features": [{"place_name": "?"}, {"center": [1.0, 2.0]}]}"#).unwrap();
        assert_eq!(response.first_candidate(), None);
    }
}
