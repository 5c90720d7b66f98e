//! PositionSelector core: catalogs, nearest-item resolution and the binding
//! controller. Nothing in here knows about the terminal.

mod axis;
mod catalog;
pub mod catalogs;
mod controller;
mod resolver;

pub use axis::{AxisLayout, Orientation};
pub use catalog::{SelectableItem, SliderMode};
pub use catalogs::{CatalogSet, Locale};
pub use controller::{BindingController, ControllerOptions, SelectionSink};
