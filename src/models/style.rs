use lazy_static::lazy_static;

/// Un estilo registrado: clave legible y recurso de estilo de Mapbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleEntry {
    pub key: &'static str,
    pub url: &'static str,
}

/// Registro inmutable de estilos. El orden de inserción es el orden del
/// selector de capas y la primera entrada es el estilo por defecto.
#[derive(Debug)]
pub struct StyleRegistry {
    entries: Vec<StyleEntry>,
}

lazy_static! {
    pub static ref STYLES: StyleRegistry = StyleRegistry::new(vec![
        StyleEntry { key: "default", url: "mapbox://styles/mapbox/streets-v11" },
        StyleEntry { key: "satellite", url: "mapbox://styles/mapbox/satellite-streets-v11" },
    ]);
}

impl StyleRegistry {
    /// Las claves repetidas se descartan conservando la primera aparición
    pub fn new(entries: Vec<StyleEntry>) -> Self {
        let mut unique: Vec<StyleEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if !unique.iter().any(|e| e.key == entry.key) {
                unique.push(entry);
            }
        }
        Self { entries: unique }
    }

    pub fn entries(&self) -> &[StyleEntry] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&StyleEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    pub fn first(&self) -> Option<&StyleEntry> {
        self.entries.first()
    }

    /// Estilo inicial: la clave pedida si existe, si no la primera
    pub fn initial(&self, requested: Option<&str>) -> Option<&StyleEntry> {
        requested
            .map(str::trim)
            .and_then(|key| self.get(key))
            .or_else(|| self.first())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_order_is_stable() {
        let keys: Vec<_> = STYLES.entries().iter().map(|e| e.key).collect();
        assert_eq!(keys, ["default", "satellite"]);
        assert_eq!(STYLES.first().unwrap().url, "mapbox://styles/mapbox/streets-v11");
    }

    #[test]
    fn initial_style_falls_back_to_first() {
        assert_eq!(STYLES.initial(Some("satellite")).unwrap().key, "satellite");
        assert_eq!(STYLES.initial(Some("terrain")).unwrap().key, "default");
        assert_eq!(STYLES.initial(None).unwrap().key, "default");
    }

    #[test]
    fn duplicate_keys_keep_first() {
        let registry = StyleRegistry::new(vec![
            StyleEntry { key: "a", url: "one" },
            StyleEntry { key: "a", url: "two" },
        ]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("a").unwrap().url, "one");
    }
}
