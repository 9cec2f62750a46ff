//! Feature modules - storefront logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod carousel;
pub mod catalog;
pub mod category_strip;
pub mod focus;
pub mod keybindings;
pub mod settings;
pub mod vehicle;

pub use carousel::{CarouselController, Direction};
pub use category_strip::{CategoryStrip, ScrollDirection};
pub use focus::{FocusRegion, RegionCommand};
pub use keybindings::{Action, KeyBindings};
pub use settings::Settings;
pub use vehicle::{Field, VehicleForm, VehicleQuery};
