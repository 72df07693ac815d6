// ============================================================================
// COORDINATE RESOLVER - Coordenadas explícitas o geocodificación
// ============================================================================

use std::cell::Cell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use futures::future::{AbortHandle, Abortable, FutureExt, LocalBoxFuture};

use crate::error::MapsError;
use crate::models::{LngLat, PositionSource};
use crate::services::geocoding_service::{GeocodeQuery, Geocoder};
use crate::utils::constants::GEOCODER_LIMIT;

/// Resultado final de una geocodificación
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(LngLat),
    /// El servicio respondió sin candidatos
    NotFound,
    Failed(MapsError),
    Cancelled,
}

impl Lookup {
    pub fn coordinate(&self) -> Option<LngLat> {
        match self {
            Lookup::Found(at) => Some(*at),
            _ => None,
        }
    }
}

/// Permite retirar el interés en una geocodificación pendiente
#[derive(Debug, Clone)]
pub struct CancelHandle {
    abort: AbortHandle,
    finished: Rc<Cell<bool>>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.abort.abort();
    }

    /// La consulta ya terminó o se soltó: cancelarla no tiene efecto
    pub fn is_finished(&self) -> bool {
        self.finished.get()
    }
}

/// Cancela las consultas que siguen en curso y devuelve cuántas eran
pub fn cancel_unfinished<I>(handles: I) -> usize
where
    I: IntoIterator<Item = CancelHandle>,
{
    handles
        .into_iter()
        .filter(|handle| !handle.is_finished())
        .inspect(CancelHandle::cancel)
        .count()
}

/// Geocodificación en curso. Al cancelarla o soltarla se suelta también la
/// consulta subyacente, con sus recursos en el DOM.
pub struct PendingCoordinate {
    query: String,
    inner: Abortable<LocalBoxFuture<'static, Lookup>>,
    handle: AbortHandle,
    finished: Rc<Cell<bool>>,
}

impl PendingCoordinate {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            abort: self.handle.clone(),
            finished: self.finished.clone(),
        }
    }
}

impl Drop for PendingCoordinate {
    fn drop(&mut self) {
        self.finished.set(true);
    }
}

impl Future for PendingCoordinate {
    type Output = Lookup;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let lookup = match Pin::new(&mut self.inner).poll(cx) {
            Poll::Ready(Ok(lookup)) => lookup,
            Poll::Ready(Err(_aborted)) => Lookup::Cancelled,
            Poll::Pending => return Poll::Pending,
        };
        self.finished.set(true);
        Poll::Ready(lookup)
    }
}

impl std::fmt::Debug for PendingCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingCoordinate").field("query", &self.query).finish()
    }
}

#[derive(Debug)]
pub enum Resolution {
    /// Coordenadas del formulario, disponibles sin esperar
    Ready(LngLat),
    Pending(PendingCoordinate),
    /// Ni coordenadas ni dirección: no se coloca nada
    Unresolved,
}

pub struct CoordinateResolver<G: ?Sized> {
    geocoder: Rc<G>,
}

impl<G: Geocoder + ?Sized + 'static> CoordinateResolver<G> {
    pub fn new(geocoder: Rc<G>) -> Self {
        Self { geocoder }
    }

    pub fn resolve(&self, source: PositionSource) -> Resolution {
        match source {
            PositionSource::Explicit(at) => Resolution::Ready(at),
            PositionSource::Address(address) => Resolution::Pending(self.lookup(address)),
            PositionSource::Missing => Resolution::Unresolved,
        }
    }

    /// Una única consulta limitada a un resultado
    fn lookup(&self, address: String) -> PendingCoordinate {
        log::info!("🔍 Geocodificando: {}", address);
        let request = self.geocoder.geocode(GeocodeQuery {
            text: address.clone(),
            limit: GEOCODER_LIMIT,
        });

        let lookup = async move {
            match request.await {
                Ok(response) => match response.first_candidate() {
                    Some(at) => Lookup::Found(at),
                    None => Lookup::NotFound,
                },
                Err(error) => Lookup::Failed(error),
            }
        }
        .boxed_local();

        let (handle, registration) = AbortHandle::new_pair();
        PendingCoordinate {
            query: address,
            inner: Abortable::new(lookup, registration),
            handle,
            finished: Rc::new(Cell::new(false)),
        }
    }
}
