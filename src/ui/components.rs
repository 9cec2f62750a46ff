//! UI Components module - business-specific composite components
//!
//! Components combine widgets with application logic.
//! They are the only layer that should import from `crate::app`.
//!
//! # Design Principles
//!
//! - **Business logic**: Components handle Message mapping and state access
//! - **Composition**: Build on widgets
//! - **Application-specific**: Depend on `crate::app::Message` and state types
//!
//! # Relationship to Other Layers
//!
//! - **Widgets** (`crate::ui::widgets`): Composable UI patterns (no business logic)
//! - **Components** (this module): Business-specific UI with Message handling

pub mod category_strip;
pub mod header;
pub mod hero_carousel;
pub mod navigation;
pub mod top_bar;
pub mod vehicle_selector;
