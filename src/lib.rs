// ============================================================================
// DJANGOCMS MAPS - Widgets Mapbox GL para los plugins de mapas del CMS
// ============================================================================
// Arquitectura MVVM:
// - Models: configuración leída de los data-* del plugin
// - Services: resolución de coordenadas y geocodificación
// - ViewModels: arranque del mapa, marcadores/popups, selector de capas
// - Views: DOM de los controles propios
// - Maps: traits de plataforma + implementación Mapbox GL JS
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod maps;
pub mod models;
pub mod services;
pub mod utils;
pub mod viewmodels;
pub mod views;

pub use app::{InitReport, MapsApp, Platform};
pub use config::{InitOptions, MapsConfig, CONFIG};
pub use error::MapsError;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;
    use web_sys::Element;

    use crate::app::MapsApp;
    use crate::config::{InitOptions, CONFIG};
    use crate::dom::DomRoot;
    use crate::maps::web::{BrowserSpawner, WebPlatform};
    use crate::services::{cancel_unfinished, CancelHandle};

    thread_local! {
        // Geocodificaciones en curso de todas las llamadas a init
        static PENDING: RefCell<Vec<CancelHandle>> = RefCell::new(Vec::new());
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
        log::info!("🚀 djangocms-maps listo");

        // Al cargar se inicializan todos los mapas de la página
        init(None, InitOptions::default())?;
        Ok(())
    }

    /// Inicializa los mapas bajo `root` (o todo el documento).
    /// Devuelve cuántos mapas nuevos se crearon.
    #[wasm_bindgen(js_name = initMaps)]
    pub fn init_maps(root: Option<Element>, options: JsValue) -> Result<u32, JsValue> {
        let options = if options.is_undefined() || options.is_null() {
            InitOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        init(root, options)
    }

    /// Retira el interés en las geocodificaciones que siguen en curso.
    /// Devuelve cuántas se cancelaron.
    #[wasm_bindgen(js_name = cancelPendingLookups)]
    pub fn cancel_pending_lookups() -> u32 {
        let handles = PENDING.with(|pending| std::mem::take(&mut *pending.borrow_mut()));
        let cancelled = cancel_unfinished(handles);
        log::info!("🛑 {} geocodificación(es) canceladas", cancelled);
        cancelled as u32
    }

    fn init(root: Option<Element>, options: InitOptions) -> Result<u32, JsValue> {
        let platform = WebPlatform::new(DomRoot::from_option(root)?);
        let app = MapsApp::new(platform, BrowserSpawner, CONFIG.clone());
        let report = app.init(&options)?;

        PENDING.with(|pending| {
            let mut pending = pending.borrow_mut();
            pending.retain(|handle| !handle.is_finished());
            pending.extend(report.pending);
        });
        Ok(report.initialized as u32)
    }
}
