// ============================================================================
// DATASET - Lectura de atributos data-* generados por el plugin del CMS
// ============================================================================

use std::collections::HashMap;

/// Fuente de atributos `data-*` (el `dataset` de un elemento del DOM)
pub trait DataAttributes {
    /// Valor crudo del atributo, con la clave tal como aparece en `dataset`
    fn data(&self, key: &str) -> Option<String>;
}

impl DataAttributes for HashMap<String, String> {
    fn data(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

#[cfg(target_arch = "wasm32")]
impl DataAttributes for web_sys::HtmlElement {
    fn data(&self, key: &str) -> Option<String> {
        self.dataset().get(key)
    }
}

/// Texto no vacío (recortado)
pub fn read_text<A: DataAttributes + ?Sized>(source: &A, key: &str) -> Option<String> {
    source
        .data(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Booleano textual: solo "true" activa, la ausencia desactiva
pub fn read_flag<A: DataAttributes + ?Sized>(source: &A, key: &str) -> bool {
    source
        .data(key)
        .map(|value| value.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
