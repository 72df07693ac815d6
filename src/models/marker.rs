use crate::dom::dataset::{read_flag, read_text, DataAttributes};
use crate::models::coordinates::PositionSource;
use crate::utils::constants::attr;

/// Configuración de un marcador, leída del elemento `.js-marker`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerConfig {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub address: Option<String>,
    pub show_popup: bool,
    pub title: Option<String>,
    pub info_content: Option<String>,
    pub icon: Option<String>,
}

impl MarkerConfig {
    pub fn read<A: DataAttributes + ?Sized>(element: &A) -> Self {
        Self {
            lat: read_text(element, attr::LAT),
            lng: read_text(element, attr::LNG),
            address: read_text(element, attr::ADDRESS),
            show_popup: read_flag(element, attr::SHOW_CONTENT),
            title: read_text(element, attr::TITLE),
            info_content: read_text(element, attr::INFO_CONTENT),
            icon: read_text(element, attr::ICON),
        }
    }

    pub fn position(&self) -> PositionSource {
        PositionSource::from_fields(self.lat.as_deref(), self.lng.as_deref(), self.address.as_deref())
    }

    /// Línea de dirección del popup (siempre presente, puede ser vacía)
    pub fn address_line(&self) -> &str {
        self.address.as_deref().unwrap_or("")
    }
}
