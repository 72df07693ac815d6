// ============================================================================
// WEB - Plataforma del navegador: Mapbox GL JS + MapboxGeocoder
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::{FutureExt, LocalBoxFuture};
use futures::task::{LocalFutureObj, LocalSpawn, SpawnError};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::{ControlPosition, MapControl, MapView, MarkerSpec};
use crate::app::Platform;
use crate::dom::{self, DomRoot, ElementBuilder};
use crate::error::{MapsError, Result};
use crate::models::LngLat;
use crate::services::geocoding_service::{GeocodeQuery, GeocodeResponse, Geocoder};
use crate::utils::constants::{INITIALIZED_ATTRIBUTE, MARKER_ICON_CLASS};
use crate::utils::mapbox_ffi::{
    self, MapboxGeocoder, MapboxMap, MapboxMarker, MapboxPopup, NavigationControl, ScaleControl,
};
use crate::viewmodels::MapOptions;
use crate::views::layers_control;

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue> {
    Ok(serde_wasm_bindgen::to_value(value)?)
}

fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<()> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(MapsError::map_library)
}

/// Vista sobre una instancia `mapboxgl.Map`
#[derive(Clone)]
pub struct WebMapView {
    map: MapboxMap,
}

impl WebMapView {
    pub fn new(map: MapboxMap) -> Self {
        Self { map }
    }

    /// Envolver el mapa que Mapbox pasa a `onAdd`
    pub fn from_js(map: JsValue) -> Self {
        Self { map: map.unchecked_into() }
    }

    fn lng_lat(at: LngLat) -> JsValue {
        to_js(&at).unwrap_or(JsValue::UNDEFINED)
    }

    /// Pin propio: un `<img>` toma el tamaño de la imagen, sin CSS extra
    pub fn icon_element(url: &str) -> Result<HtmlElement> {
        let element = ElementBuilder::new("img")?
            .class(MARKER_ICON_CLASS)
            .attr("src", url)?
            .attr("alt", "")?
            .build();
        dom::as_html(element)
    }

    fn new_marker(icon: Option<&str>) -> Result<MapboxMarker> {
        let options = js_sys::Object::new();
        if let Some(url) = icon {
            set(&options, "element", &Self::icon_element(url)?)?;
        }
        Ok(MapboxMarker::new(&options))
    }
}

impl MapView for WebMapView {
    fn add_control(&self, control: MapControl, position: Option<ControlPosition>) -> Result<()> {
        let position = position.map(|p| p.as_str());
        match control {
            MapControl::Navigation => {
                self.map.add_control(&NavigationControl::new(), position);
            }
            MapControl::Scale { max_width, unit } => {
                let options = js_sys::Object::new();
                set(&options, "maxWidth", &JsValue::from(max_width))?;
                set(&options, "unit", &JsValue::from_str(unit))?;
                self.map.add_control(&ScaleControl::new(&options), position);
            }
            MapControl::Layers(layers) => {
                let control = layers_control::control_object(layers)?;
                self.map.add_control(&control, position);
            }
        }
        Ok(())
    }

    fn add_marker(&self, spec: &MarkerSpec) -> Result<()> {
        let marker = Self::new_marker(spec.icon.as_deref())?
            .set_lng_lat(&Self::lng_lat(spec.at))
            .add_to(&self.map);

        if let Some(popup) = &spec.popup {
            let options = js_sys::Object::new();
            set(&options, "offset", &JsValue::from(popup.offset))?;
            let popup = MapboxPopup::new(&options).set_html(&popup.html);
            marker.set_popup(&popup).toggle_popup();
        }
        Ok(())
    }

    fn pan_to(&self, at: LngLat) {
        self.map.pan_to(&Self::lng_lat(at));
    }

    fn jump_to(&self, center: LngLat, zoom: f64) {
        #[derive(Serialize)]
        struct JumpOptions {
            center: LngLat,
            zoom: f64,
        }
        match to_js(&JumpOptions { center, zoom }) {
            Ok(options) => self.map.jump_to(&options),
            Err(error) => log::error!("❌ jumpTo: {}", error),
        }
    }

    fn set_style(&self, style_url: &str) {
        self.map.set_style(style_url);
    }
}

/// Contenedor oculto que aloja el geocoder mientras dura la consulta.
/// Se quita del DOM al soltarse, pase lo que pase con la consulta.
struct HiddenHost {
    element: HtmlElement,
}

impl HiddenHost {
    fn attach(parent: &Element) -> Result<Self> {
        let element = ElementBuilder::new("div")?
            .attr("style", "display: none;")?
            .attr("aria-hidden", "true")?
            .build();
        dom::append_child(parent, &element)?;
        Ok(Self { element: dom::as_html(element)? })
    }
}

impl Drop for HiddenHost {
    fn drop(&mut self) {
        dom::detach(&self.element);
    }
}

type GeocodeSender = Rc<RefCell<Option<oneshot::Sender<std::result::Result<JsValue, String>>>>>;

/// Geocoder montado con sus listeners; al soltarse se desuscribe y libera el host
struct GeocoderSession {
    geocoder: MapboxGeocoder,
    on_results: Closure<dyn FnMut(JsValue)>,
    on_error: Closure<dyn FnMut(JsValue)>,
    _host: HiddenHost,
}

impl GeocoderSession {
    fn start(
        parent: &Element,
        access_token: &str,
        query: &GeocodeQuery,
    ) -> Result<(Self, oneshot::Receiver<std::result::Result<JsValue, String>>)> {
        let host = HiddenHost::attach(parent)?;

        let options = js_sys::Object::new();
        set(&options, "accessToken", &JsValue::from_str(access_token))?;
        set(&options, "mapboxgl", &mapbox_ffi::mapboxgl().map_err(MapsError::map_library)?)?;
        set(&options, "limit", &JsValue::from(query.limit))?;
        set(&options, "marker", &JsValue::FALSE)?;
        let geocoder = MapboxGeocoder::new(&options);
        geocoder.add_to(&host.element);

        let (tx, rx) = oneshot::channel();
        let sender: GeocodeSender = Rc::new(RefCell::new(Some(tx)));

        let on_results = {
            let sender = sender.clone();
            Closure::<dyn FnMut(JsValue)>::new(move |results: JsValue| {
                if let Some(tx) = sender.borrow_mut().take() {
                    let _ = tx.send(Ok(results));
                }
            })
        };
        let on_error = Closure::<dyn FnMut(JsValue)>::new(move |error: JsValue| {
            if let Some(tx) = sender.borrow_mut().take() {
                let _ = tx.send(Err(MapsError::describe(&error)));
            }
        });

        geocoder.on("results", on_results.as_ref().unchecked_ref());
        geocoder.on("error", on_error.as_ref().unchecked_ref());
        geocoder.query(&query.text);

        Ok((Self { geocoder, on_results, on_error, _host: host }, rx))
    }
}

impl Drop for GeocoderSession {
    fn drop(&mut self) {
        self.geocoder.off("results", self.on_results.as_ref().unchecked_ref());
        self.geocoder.off("error", self.on_error.as_ref().unchecked_ref());
    }
}

/// Geocoder del plugin MapboxGeocoder, uno por contenedor
pub struct WebGeocoder {
    parent: Element,
    access_token: String,
}

impl Geocoder for WebGeocoder {
    fn geocode(&self, query: GeocodeQuery) -> LocalBoxFuture<'static, Result<GeocodeResponse>> {
        let started = GeocoderSession::start(&self.parent, &self.access_token, &query);

        async move {
            let (_session, rx) = started?;
            match rx.await {
                Ok(Ok(results)) => Ok(serde_wasm_bindgen::from_value::<GeocodeResponse>(results)?),
                Ok(Err(message)) => Err(MapsError::Geocoding(message)),
                Err(_) => Err(MapsError::Geocoding("geocoder closed without results".to_string())),
            }
        }
        .boxed_local()
    }
}

/// Plataforma del navegador sobre una raíz del DOM
pub struct WebPlatform {
    root: DomRoot,
}

impl WebPlatform {
    pub fn new(root: DomRoot) -> Self {
        Self { root }
    }
}

impl Platform for WebPlatform {
    type Container = HtmlElement;
    type Marker = HtmlElement;
    type View = WebMapView;
    type Geocoder = WebGeocoder;

    fn containers(&self, selector: &str) -> Result<Vec<HtmlElement>> {
        self.root.query_all(selector)
    }

    fn markers(&self, container: &HtmlElement, selector: &str) -> Result<Vec<HtmlElement>> {
        dom::query_all_in(container, selector)
    }

    fn claim(&self, container: &HtmlElement) -> bool {
        if container.has_attribute(INITIALIZED_ATTRIBUTE) {
            return false;
        }
        if let Err(error) = dom::set_attribute(container, INITIALIZED_ATTRIBUTE, "true") {
            log::warn!("⚠️ No se pudo marcar el contenedor: {}", error);
        }
        true
    }

    fn release(&self, container: &HtmlElement) {
        if let Err(error) = container.remove_attribute(INITIALIZED_ATTRIBUTE) {
            log::warn!("⚠️ No se pudo desmarcar el contenedor: {}", MapsError::describe(&error));
        }
    }

    fn create_view(&self, container: &HtmlElement, api_key: &str, options: &MapOptions) -> Result<WebMapView> {
        mapbox_ffi::set_access_token(api_key).map_err(MapsError::map_library)?;

        let js_options = to_js(options)?;
        set(&js_options, "container", container)?;
        log::debug!(
            "🗺️ mapboxgl.Map({})",
            serde_json::to_string(options).unwrap_or_default()
        );

        let map = MapboxMap::new(&js_options).map_err(MapsError::map_library)?;
        Ok(WebMapView::new(map))
    }

    fn geocoder(&self, container: &HtmlElement, api_key: &str) -> WebGeocoder {
        WebGeocoder {
            parent: container.clone().into(),
            access_token: api_key.to_string(),
        }
    }
}

/// Ejecuta las tareas en el event loop del navegador
#[derive(Clone, Copy, Default)]
pub struct BrowserSpawner;

impl LocalSpawn for BrowserSpawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> std::result::Result<(), SpawnError> {
        wasm_bindgen_futures::spawn_local(future);
        Ok(())
    }
}
