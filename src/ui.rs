//! UI module for the storefront
//! Light and dark themes around a red and navy brand palette
//!
//! # Architecture
//!
//! The UI is organized into layers:
//!
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Business-specific UI with Message handling
//! - **Pages** (`pages`): Full-page layouts assembled from components

pub mod animation;
pub mod components;
pub mod icons;
pub mod pages;
pub mod theme;
pub mod widgets;
