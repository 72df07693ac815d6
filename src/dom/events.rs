// ============================================================================
// EVENT HANDLING - Listeners sobre elementos del DOM
// ============================================================================
// El closure de Rust vive dentro de EventListener. Al soltarlo se quita el
// listener del elemento y se libera el closure; quien lo crea decide cuánto vive.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use crate::error::{MapsError, Result};

/// Listener registrado en un elemento, activo mientras exista este valor
pub struct EventListener {
    element: Element,
    event_type: &'static str,
    closure: Closure<dyn FnMut(MouseEvent)>,
}

impl EventListener {
    /// Crear click listener
    pub fn click<F>(element: &Element, handler: F) -> Result<Self>
    where
        F: FnMut(MouseEvent) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
        element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(MapsError::dom)?;
        Ok(Self {
            element: element.clone(),
            event_type: "click",
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .element
            .remove_event_listener_with_callback(self.event_type, self.closure.as_ref().unchecked_ref());
    }
}
