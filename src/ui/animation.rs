//! Animation helpers for the storefront
//!
//! Slide transitions use iced's built-in `Animation<bool>`; hover highlights
//! on category cards use `iced_anim` through [`HoverAnimations`].

mod hover;

pub use hover::HoverAnimations;
