pub mod coordinate_resolver;
pub mod geocoding_service;

pub use coordinate_resolver::{cancel_unfinished, CancelHandle, CoordinateResolver, Lookup, PendingCoordinate, Resolution};
pub use geocoding_service::{GeocodeFeature, GeocodeQuery, GeocodeResponse, Geocoder};
