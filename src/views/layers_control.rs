// ============================================================================
// LAYERS CONTROL VIEW - Control IControl de Mapbox con radios de estilos
// ============================================================================
// Mapbox llama a onAdd(map) y onRemove(); el estado del selector vive en
// LayersMount (viewmodel) y aquí solo se pinta y se conectan los clicks.
// Los listeners de los radios se sueltan junto con el montaje en onRemove.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{self, ElementBuilder, EventListener};
use crate::error::{MapsError, Result};
use crate::maps::web::WebMapView;
use crate::utils::constants::{LAYERS_CONTROL_CLASS, LAYERS_INPUT_ID_PREFIX, LAYERS_RADIO_NAME};
use crate::viewmodels::{LayersControl, LayersMount};

struct MountedControl {
    mount: LayersMount<WebMapView, Element>,
    listeners: Vec<EventListener>,
}

type SharedMount = Rc<RefCell<Option<MountedControl>>>;

thread_local! {
    // Los ids y el grupo de radios deben ser únicos si hay varios mapas en la página
    static NEXT_INSTANCE: Cell<u32> = Cell::new(0);
}

fn next_instance() -> u32 {
    NEXT_INSTANCE.with(|next| {
        let id = next.get();
        next.set(id.wrapping_add(1));
        id
    })
}

/// Objeto JS con `onAdd`/`onRemove` listo para `map.addControl`
pub fn control_object(control: LayersControl) -> Result<js_sys::Object> {
    let instance = next_instance();
    let mount: SharedMount = Rc::new(RefCell::new(None));
    let object = js_sys::Object::new();

    let on_add = {
        let control = control.clone();
        let mount = mount.clone();
        Closure::<dyn FnMut(JsValue) -> JsValue>::new(move |map: JsValue| -> JsValue {
            match render(&control, instance, WebMapView::from_js(map), &mount) {
                Ok(container) => container.into(),
                Err(error) => {
                    log::error!("❌ No se pudo pintar el control de capas: {}", error);
                    JsValue::UNDEFINED
                }
            }
        })
    };

    let on_remove = Closure::<dyn FnMut()>::new(move || {
        let taken = mount.borrow_mut().take();
        if let Some(MountedControl { mount: mounted, listeners }) = taken {
            drop(listeners);
            let container = control.on_remove(mounted);
            dom::detach(&container);
            log::debug!("🧹 Control de capas desmontado");
        }
    });

    js_sys::Reflect::set(&object, &JsValue::from_str("onAdd"), on_add.as_ref()).map_err(MapsError::dom)?;
    js_sys::Reflect::set(&object, &JsValue::from_str("onRemove"), on_remove.as_ref()).map_err(MapsError::dom)?;
    // Mapbox conserva el control mientras viva el mapa
    on_add.forget();
    on_remove.forget();

    Ok(object)
}

fn render(control: &LayersControl, instance: u32, view: WebMapView, mount: &SharedMount) -> Result<Element> {
    let container = ElementBuilder::new("div")?.class(LAYERS_CONTROL_CLASS).build();
    let mounted = control.on_add(view, container.clone());
    let radio_name = format!("{}-{}", LAYERS_RADIO_NAME, instance);
    let mut listeners = Vec::new();

    for option in mounted.options() {
        let id = format!("{}{}_{}", LAYERS_INPUT_ID_PREFIX, option.key, instance);

        let mut input = ElementBuilder::new("input")?
            .id(&id)?
            .attr("type", "radio")?
            .attr("name", &radio_name)?
            .attr("value", option.key)?;
        if option.checked {
            input = input.attr("checked", "checked")?;
        }
        let input = input.build();
        let label = ElementBuilder::new("label")?.attr("for", &id)?.text(option.key).build();

        dom::append_child(&container, &input)?;
        dom::append_child(&container, &label)?;

        let mount = mount.clone();
        let key = option.key;
        listeners.push(EventListener::click(&input, move |_| {
            if let Some(mounted) = mount.borrow_mut().as_mut() {
                mounted.mount.select(key);
            }
        })?);
    }

    *mount.borrow_mut() = Some(MountedControl { mount: mounted, listeners });
    Ok(container)
}
