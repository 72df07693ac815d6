// ============================================================================
// MAPBOX FFI - Foreign Function Interface para Mapbox GL JS y su geocoder
// ============================================================================
// Solo declaraciones de las clases JS - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl, js_name = Map)]
    pub type MapboxMap;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "Map", catch)]
    pub fn new(options: &JsValue) -> Result<MapboxMap, JsValue>;

    #[wasm_bindgen(method, js_name = addControl)]
    pub fn add_control(this: &MapboxMap, control: &JsValue, position: Option<&str>);

    #[wasm_bindgen(method, js_name = jumpTo)]
    pub fn jump_to(this: &MapboxMap, options: &JsValue);

    #[wasm_bindgen(method, js_name = panTo)]
    pub fn pan_to(this: &MapboxMap, lng_lat: &JsValue);

    #[wasm_bindgen(method, js_name = setStyle)]
    pub fn set_style(this: &MapboxMap, style: &str);

    #[wasm_bindgen(js_namespace = mapboxgl, js_name = Marker)]
    pub type MapboxMarker;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "Marker")]
    pub fn new(options: &JsValue) -> MapboxMarker;

    #[wasm_bindgen(method, js_name = setLngLat)]
    pub fn set_lng_lat(this: &MapboxMarker, lng_lat: &JsValue) -> MapboxMarker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &MapboxMarker, map: &MapboxMap) -> MapboxMarker;

    #[wasm_bindgen(method, js_name = setPopup)]
    pub fn set_popup(this: &MapboxMarker, popup: &MapboxPopup) -> MapboxMarker;

    #[wasm_bindgen(method, js_name = togglePopup)]
    pub fn toggle_popup(this: &MapboxMarker) -> MapboxMarker;

    #[wasm_bindgen(js_namespace = mapboxgl, js_name = Popup)]
    pub type MapboxPopup;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "Popup")]
    pub fn new(options: &JsValue) -> MapboxPopup;

    #[wasm_bindgen(method, js_name = setHTML)]
    pub fn set_html(this: &MapboxPopup, html: &str) -> MapboxPopup;

    #[wasm_bindgen(js_namespace = mapboxgl, js_name = NavigationControl)]
    pub type NavigationControl;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "NavigationControl")]
    pub fn new() -> NavigationControl;

    #[wasm_bindgen(js_namespace = mapboxgl, js_name = ScaleControl)]
    pub type ScaleControl;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "ScaleControl")]
    pub fn new(options: &JsValue) -> ScaleControl;

    /// Plugin `@mapbox/mapbox-gl-geocoder`, expuesto como global `MapboxGeocoder`
    pub type MapboxGeocoder;

    #[wasm_bindgen(constructor)]
    pub fn new(options: &JsValue) -> MapboxGeocoder;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &MapboxGeocoder, container: &web_sys::HtmlElement) -> MapboxGeocoder;

    #[wasm_bindgen(method)]
    pub fn query(this: &MapboxGeocoder, text: &str) -> MapboxGeocoder;

    #[wasm_bindgen(method)]
    pub fn on(this: &MapboxGeocoder, event: &str, callback: &js_sys::Function) -> MapboxGeocoder;

    #[wasm_bindgen(method)]
    pub fn off(this: &MapboxGeocoder, event: &str, callback: &js_sys::Function) -> MapboxGeocoder;
}

/// Objeto global `mapboxgl`
pub fn mapboxgl() -> Result<JsValue, JsValue> {
    let value = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("mapboxgl"))?;
    if value.is_undefined() {
        Err(JsValue::from_str("mapbox-gl.js is not loaded"))
    } else {
        Ok(value)
    }
}

/// `mapboxgl.accessToken = token`
pub fn set_access_token(token: &str) -> Result<(), JsValue> {
    js_sys::Reflect::set(&mapboxgl()?, &JsValue::from_str("accessToken"), &JsValue::from_str(token))?;
    Ok(())
}
