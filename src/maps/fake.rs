// Implementaciones en memoria para los tests nativos

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::{FutureExt, LocalBoxFuture};

use super::{ControlPosition, MapControl, MapView, MarkerSpec};
use crate::error::{MapsError, Result};
use crate::models::LngLat;
use crate::services::geocoding_service::{GeocodeFeature, GeocodeQuery, GeocodeResponse, Geocoder};

#[derive(Debug, Clone, PartialEq)]
pub enum MapCall {
    Control(&'static str, Option<ControlPosition>),
    Marker(MarkerSpec),
    PanTo(LngLat),
    JumpTo(LngLat, f64),
    SetStyle(String),
}

/// Vista que solo registra las llamadas recibidas
#[derive(Debug, Clone, Default)]
pub struct FakeMapView {
    calls: Rc<RefCell<Vec<MapCall>>>,
}

impl FakeMapView {
    pub fn calls(&self) -> Vec<MapCall> {
        self.calls.borrow().clone()
    }

    pub fn markers(&self) -> Vec<MarkerSpec> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                MapCall::Marker(spec) => Some(spec.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn styles(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                MapCall::SetStyle(url) => Some(url.clone()),
                _ => None,
            })
            .collect()
    }
}

impl MapView for FakeMapView {
    fn add_control(&self, control: MapControl, position: Option<ControlPosition>) -> Result<()> {
        self.calls.borrow_mut().push(MapCall::Control(control.name(), position));
        Ok(())
    }

    fn add_marker(&self, marker: &MarkerSpec) -> Result<()> {
        self.calls.borrow_mut().push(MapCall::Marker(marker.clone()));
        Ok(())
    }

    fn pan_to(&self, at: LngLat) {
        self.calls.borrow_mut().push(MapCall::PanTo(at));
    }

    fn jump_to(&self, center: LngLat, zoom: f64) {
        self.calls.borrow_mut().push(MapCall::JumpTo(center, zoom));
    }

    fn set_style(&self, style_url: &str) {
        self.calls.borrow_mut().push(MapCall::SetStyle(style_url.to_string()));
    }
}

#[derive(Default)]
struct GeocoderState {
    queries: Vec<GeocodeQuery>,
    pending: Vec<(String, oneshot::Sender<Result<GeocodeResponse>>)>,
    live_hosts: usize,
}

/// Geocoder controlado por el test: cada consulta queda pendiente hasta `respond`
#[derive(Clone, Default)]
pub struct FakeGeocoder {
    state: Rc<RefCell<GeocoderState>>,
}

/// Equivalente al contenedor oculto del geocoder web
struct HostGuard(Rc<RefCell<GeocoderState>>);

impl Drop for HostGuard {
    fn drop(&mut self) {
        self.0.borrow_mut().live_hosts -= 1;
    }
}

impl FakeGeocoder {
    pub fn queries(&self) -> Vec<GeocodeQuery> {
        self.state.borrow().queries.clone()
    }

    pub fn live_hosts(&self) -> usize {
        self.state.borrow().live_hosts
    }

    /// Entrega la respuesta a la primera consulta pendiente con ese texto
    pub fn respond(&self, text: &str, response: Result<GeocodeResponse>) {
        let sender = {
            let mut state = self.state.borrow_mut();
            let index = state
                .pending
                .iter()
                .position(|(query, _)| query == text)
                .unwrap_or_else(|| panic!("no pending query for {text:?}"));
            state.pending.remove(index).1
        };
        let _ = sender.send(response);
    }

    pub fn found(lng: f64, lat: f64) -> Result<GeocodeResponse> {
        Ok(GeocodeResponse {
            features: vec![GeocodeFeature { center: Some([lng, lat]), place_name: None }],
        })
    }

    pub fn empty() -> Result<GeocodeResponse> {
        Ok(GeocodeResponse { features: Vec::new() })
    }
}

impl Geocoder for FakeGeocoder {
    fn geocode(&self, query: GeocodeQuery) -> LocalBoxFuture<'static, Result<GeocodeResponse>> {
        let (tx, rx) = oneshot::channel();
        {
            let mut state = self.state.borrow_mut();
            state.pending.push((query.text.clone(), tx));
            state.queries.push(query);
            state.live_hosts += 1;
        }
        let guard = HostGuard(self.state.clone());

        async move {
            let _guard = guard;
            rx.await
                .unwrap_or_else(|_| Err(MapsError::Geocoding("request dropped".into())))
        }
        .boxed_local()
    }
}
