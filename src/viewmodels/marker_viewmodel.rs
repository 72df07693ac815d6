// ============================================================================
// MARKER VIEWMODEL - Marcadores y contenido del popup
// ============================================================================

use htmlize::escape_text;

use crate::error::Result;
use crate::maps::{MapView, MarkerSpec, PopupSpec};
use crate::models::{LngLat, MarkerConfig};
use crate::utils::constants::POPUP_OFFSET;

pub struct MarkerViewModel;

impl MarkerViewModel {
    /// HTML del popup: título, dirección e información, en ese orden.
    /// Las partes vacías no aportan marcado.
    pub fn popup_html(marker: &MarkerConfig) -> String {
        let mut html = String::new();

        if let Some(title) = marker.title.as_deref() {
            html.push_str("<h2>");
            html.push_str(&escape_text(title));
            html.push_str("</h2>");
        }

        html.push_str(&escape_text(marker.address_line()));

        if let Some(info) = marker.info_content.as_deref() {
            html.push_str("<br /><em>");
            html.push_str(&escape_text(info));
            html.push_str("</em>");
        }

        html
    }

    pub fn marker_spec(at: LngLat, marker: &MarkerConfig) -> MarkerSpec {
        MarkerSpec {
            at,
            icon: marker.icon.clone(),
            popup: marker.show_popup.then(|| PopupSpec {
                html: Self::popup_html(marker),
                offset: POPUP_OFFSET,
            }),
        }
    }

    /// Coloca el marcador y recentra el mapa sobre él
    pub fn place<V: MapView + ?Sized>(view: &V, at: LngLat, marker: &MarkerConfig) -> Result<()> {
        let spec = Self::marker_spec(at, marker);
        log::info!(
            "📍 Marcador en ({}, {}){}",
            at.lat,
            at.lng,
            if spec.popup.is_some() { " con popup" } else { "" }
        );
        view.add_marker(&spec)?;
        view.pan_to(at);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::fake::{FakeMapView, MapCall};

    fn marker(title: Option<&str>, address: Option<&str>, info: Option<&str>) -> MarkerConfig {
        MarkerConfig {
            show_popup: true,
            title: title.map(Into::into),
            address: address.map(Into::into),
            info_content: info.map(Into::into),
            ..MarkerConfig::default()
        }
    }

    #[test]
    fn popup_parts_in_fixed_order() {
        let html = MarkerViewModel::popup_html(&marker(Some("Office"), Some("Main St 1"), Some("Open 9-5")));
        assert_eq!(html, "<h2>Office</h2>Main St 1<br /><em>Open 9-5</em>");
    }

    #[test]
    fn absent_parts_add_no_separators() {
        assert_eq!(MarkerViewModel::popup_html(&marker(None, Some("Main St 1"), None)), "Main St 1");
        assert_eq!(
            MarkerViewModel::popup_html(&marker(None, Some("Main St 1"), Some("Ring twice"))),
            "Main St 1<br /><em>Ring twice</em>"
        );
        assert_eq!(MarkerViewModel::popup_html(&marker(Some("Office"), None, None)), "<h2>Office</h2>");
    }

    #[test]
    fn popup_text_is_escaped() {
        let html = MarkerViewModel::popup_html(&marker(Some("Fish & Chips"), Some("<b>Quay</b>"), None));
        assert_eq!(html, "<h2>Fish &amp; Chips</h2>&lt;b&gt;Quay&lt;/b&gt;");
    }

    #[test]
    fn no_popup_unless_requested() {
        let config = MarkerConfig { show_popup: false, title: Some("Office".into()), ..MarkerConfig::default() };
        let spec = MarkerViewModel::marker_spec(LngLat::from_lat_lng(1.0, 2.0), &config);
        assert_eq!(spec.popup, None);
    }

    #[test]
    fn placing_adds_marker_then_pans() {
        let view = FakeMapView::default();
        let at = LngLat::from_lat_lng(46.5, 7.3);
        let config = MarkerConfig { icon: Some("/static/pin.png".into()), ..marker(None, Some("Bern"), None) };

        MarkerViewModel::place(&view, at, &config).unwrap();

        let calls = view.calls();
        assert_eq!(calls.len(), 2);
        match &calls[0] {
            MapCall::Marker(spec) => {
                assert_eq!(spec.at, at);
                assert_eq!(spec.icon.as_deref(), Some("/static/pin.png"));
                assert_eq!(spec.popup, Some(PopupSpec { html: "Bern".into(), offset: 25 }));
            }
            other => panic!("unexpected call {other:?}"),
        }
        assert_eq!(calls[1], MapCall::PanTo(at));
    }
}
