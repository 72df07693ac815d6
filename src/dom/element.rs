// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList};

use crate::error::{MapsError, Result};

/// Obtener document
pub fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| MapsError::Dom("No document".to_string()))
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element> {
    document()?.create_element(tag).map_err(MapsError::dom)
}

/// Raíz de búsqueda: el documento completo o un subárbol
#[derive(Clone)]
pub enum DomRoot {
    Document(Document),
    Element(Element),
}

impl DomRoot {
    pub fn from_option(root: Option<Element>) -> Result<Self> {
        match root {
            Some(element) => Ok(DomRoot::Element(element)),
            None => Ok(DomRoot::Document(document()?)),
        }
    }

    pub fn query_all(&self, selector: &str) -> Result<Vec<HtmlElement>> {
        let list = match self {
            DomRoot::Document(doc) => doc.query_selector_all(selector),
            DomRoot::Element(el) => el.query_selector_all(selector),
        }
        .map_err(MapsError::dom)?;
        Ok(html_elements(&list))
    }
}

/// Buscar dentro de un elemento
pub fn query_all_in(parent: &Element, selector: &str) -> Result<Vec<HtmlElement>> {
    let list = parent.query_selector_all(selector).map_err(MapsError::dom)?;
    Ok(html_elements(&list))
}

fn html_elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Quitar el elemento de su padre (si lo tiene)
pub fn detach(element: &Element) {
    element.remove();
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<()> {
    element.set_attribute(name, value).map_err(MapsError::dom)
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<()> {
    parent.append_child(child).map(|_| ()).map_err(MapsError::dom)
}

/// Convertir un Element genérico a HtmlElement
pub fn as_html(element: Element) -> Result<HtmlElement> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| MapsError::Dom("Element is not an HtmlElement".to_string()))
}
