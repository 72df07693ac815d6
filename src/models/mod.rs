pub mod coordinates;
pub mod map_instance;
pub mod marker;
pub mod style;

pub use coordinates::{parse_coordinate, LngLat, PositionSource};
pub use map_instance::{Controls, Interactions, MapInstanceConfig};
pub use marker::MarkerConfig;
pub use style::{StyleEntry, StyleRegistry, STYLES};
