// Constantes compartidas del widget

/// Claves de `dataset` que escribe la plantilla del plugin
pub mod attr {
    pub const API_KEY: &str = "api_key";
    pub const ZOOM: &str = "zoom";
    pub const SCROLLWHEEL: &str = "scrollwheel";
    pub const DOUBLE_CLICK_ZOOM: &str = "double_click_zoom";
    pub const DRAGGABLE: &str = "draggable";
    pub const KEYBOARD_SHORTCUTS: &str = "keyboard_shortcuts";
    pub const PAN_CONTROL: &str = "pan_control";
    pub const ZOOM_CONTROL: &str = "zoom_control";
    pub const LAYERS_CONTROL: &str = "layers_control";
    pub const SCALE_BAR: &str = "scale_bar";
    pub const STYLE: &str = "style";
    pub const LAT: &str = "lat";
    pub const LNG: &str = "lng";
    pub const ADDRESS: &str = "address";
    pub const ZIPCODE: &str = "zipcode";
    pub const CITY: &str = "city";
    pub const TITLE: &str = "title";
    pub const SHOW_CONTENT: &str = "showContent";
    pub const INFO_CONTENT: &str = "infoContent";
    pub const ICON: &str = "icon";
}

/// Atributo que marca un contenedor ya inicializado
pub const INITIALIZED_ATTRIBUTE: &str = "data-maps-initialized";

pub const SCALE_MAX_WIDTH: u32 = 80;
pub const SCALE_UNIT: &str = "metric";
pub const POPUP_OFFSET: u32 = 25;
pub const GEOCODER_LIMIT: u32 = 1;

pub const LAYERS_CONTROL_CLASS: &str = "mapboxgl-ctrl-layers mapboxgl-ctrl-group mapboxgl-ctrl";
pub const LAYERS_RADIO_NAME: &str = "layers-toggle";
pub const LAYERS_INPUT_ID_PREFIX: &str = "layers_control_";
pub const MARKER_ICON_CLASS: &str = "djangocms-maps-marker";
