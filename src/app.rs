// ============================================================================
// APP - Inicialización de todos los mapas de una página
// ============================================================================
// Recorre los contenedores, arranca cada mapa y lanza las geocodificaciones
// pendientes. Todo lo específico del navegador llega por `Platform`.
// ============================================================================

use std::rc::Rc;

use futures::task::{LocalSpawn, LocalSpawnExt};

use crate::config::{InitOptions, MapsConfig};
use crate::dom::dataset::DataAttributes;
use crate::error::Result;
use crate::maps::MapView;
use crate::models::{MapInstanceConfig, MarkerConfig, STYLES};
use crate::services::{CancelHandle, CoordinateResolver, Geocoder, Lookup, Resolution};
use crate::viewmodels::{MapOptions, MapViewModel, MarkerViewModel};

/// Todo lo que la app necesita del entorno (DOM + Mapbox GL)
pub trait Platform {
    type Container: DataAttributes;
    type Marker: DataAttributes;
    type View: MapView + 'static;
    type Geocoder: Geocoder + 'static;

    fn containers(&self, selector: &str) -> Result<Vec<Self::Container>>;

    fn markers(&self, container: &Self::Container, selector: &str) -> Result<Vec<Self::Marker>>;

    /// Marca el contenedor como inicializado; `false` si ya lo estaba
    fn claim(&self, container: &Self::Container) -> bool;

    /// Deshace `claim` para que una llamada posterior a `init` lo reintente
    fn release(&self, container: &Self::Container);

    fn create_view(&self, container: &Self::Container, api_key: &str, options: &MapOptions) -> Result<Self::View>;

    fn geocoder(&self, container: &Self::Container, api_key: &str) -> Self::Geocoder;
}

/// Resumen de una pasada de `init`
#[derive(Debug, Default)]
pub struct InitReport {
    pub initialized: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Geocodificaciones aún en curso, cancelables
    pub pending: Vec<CancelHandle>,
}

/// Mapa ya arrancado
pub struct LoadedMap<V> {
    pub view: Rc<V>,
    pub pending: Vec<CancelHandle>,
}

pub struct MapsApp<P, S> {
    platform: P,
    spawner: S,
    config: MapsConfig,
}

impl<P: Platform, S: LocalSpawn> MapsApp<P, S> {
    pub fn new(platform: P, spawner: S, config: MapsConfig) -> Self {
        Self { platform, spawner, config }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Arranca un mapa por cada contenedor que encaje con el selector.
    /// Un contenedor que falla no impide cargar los demás.
    pub fn init(&self, options: &InitOptions) -> Result<InitReport> {
        let selectors = options.resolve(&self.config);
        let containers = self.platform.containers(&selectors.container)?;
        log::info!("🗺️ {} contenedor(es) de mapa encontrados", containers.len());

        let mut report = InitReport::default();
        for container in containers {
            if !self.platform.claim(&container) {
                log::debug!("⏭️ Contenedor ya inicializado, se omite");
                report.skipped += 1;
                continue;
            }

            match self.load_map(&container, &selectors.marker) {
                Ok(loaded) => {
                    report.initialized += 1;
                    report.pending.extend(loaded.pending);
                }
                Err(error) => {
                    log::error!("❌ No se pudo cargar el mapa: {}", error);
                    report.failed += 1;
                }
            }
        }

        log::info!(
            "✅ Mapas: {} iniciados, {} omitidos, {} con error",
            report.initialized,
            report.skipped,
            report.failed
        );
        Ok(report)
    }

    pub fn load_map(&self, container: &P::Container, marker_selector: &str) -> Result<LoadedMap<P::View>> {
        let config = MapInstanceConfig::read(container);
        if config.api_key.is_empty() {
            log::warn!("⚠️ Mapa sin api key, Mapbox GL rechazará la carga");
        }

        let options = MapViewModel::map_options(&config, &STYLES, &self.config);
        // Sin vista no queda nada montado: se libera el contenedor para reintentarlo
        // (p. ej. si mapbox-gl.js aún no estaba cargado)
        let view = match self.platform.create_view(container, &config.api_key, &options) {
            Ok(view) => Rc::new(view),
            Err(error) => {
                self.platform.release(container);
                return Err(error);
            }
        };
        MapViewModel::attach_controls(&*view, &config, &STYLES)?;

        let resolver = CoordinateResolver::new(Rc::new(self.platform.geocoder(container, &config.api_key)));
        let mut pending = Vec::new();

        for element in self.platform.markers(container, marker_selector)? {
            let marker = MarkerConfig::read(&element);
            match resolver.resolve(marker.position()) {
                Resolution::Ready(at) => {
                    if let Err(error) = MarkerViewModel::place(&*view, at, &marker) {
                        log::error!("❌ Error colocando marcador: {}", error);
                    }
                }
                Resolution::Pending(lookup) => {
                    pending.push(lookup.cancel_handle());
                    let view = view.clone();
                    self.spawner.spawn_local(async move {
                        let query = lookup.query().to_string();
                        match lookup.await {
                            Lookup::Found(at) => {
                                if let Err(error) = MarkerViewModel::place(&*view, at, &marker) {
                                    log::error!("❌ Error colocando marcador: {}", error);
                                }
                            }
                            other => log_unplaced(&query, &other),
                        }
                    })?;
                }
                Resolution::Unresolved => {
                    log::warn!("⚠️ Marcador sin coordenadas ni dirección, se omite");
                }
            }
        }

        // Las coordenadas del formulario tienen prioridad sobre la dirección
        let zoom = MapViewModel::zoom(&config, &self.config);
        match resolver.resolve(config.position()) {
            Resolution::Ready(center) => view.jump_to(center, zoom),
            Resolution::Pending(lookup) => {
                pending.push(lookup.cancel_handle());
                let view = view.clone();
                self.spawner.spawn_local(async move {
                    let query = lookup.query().to_string();
                    match lookup.await {
                        Lookup::Found(center) => view.jump_to(center, zoom),
                        other => log_unplaced(&query, &other),
                    }
                })?;
            }
            Resolution::Unresolved => {
                log::info!("ℹ️ Mapa sin centro propio, se queda en el centro por defecto");
            }
        }

        Ok(LoadedMap { view, pending })
    }
}

fn log_unplaced(query: &str, lookup: &Lookup) {
    match lookup {
        Lookup::NotFound => log::info!("🔍 Sin resultados para '{}'", query),
        Lookup::Failed(error) => log::warn!("⚠️ Geocodificación de '{}' fallida: {}", query, error),
        Lookup::Cancelled => log::debug!("🛑 Geocodificación de '{}' cancelada", query),
        Lookup::Found(_) => {}
    }
}
