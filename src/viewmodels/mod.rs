pub mod layers_viewmodel;
pub mod map_viewmodel;
pub mod marker_viewmodel;

pub use layers_viewmodel::{LayerOption, LayerSwitch, LayersControl, LayersMount};
pub use map_viewmodel::{MapOptions, MapViewModel};
pub use marker_viewmodel::MarkerViewModel;
