//! Application messages

use iced::keyboard::{Key, Modifiers};

use crate::features::{Action, FocusRegion, ScrollDirection, VehicleQuery};

/// Application messages
#[derive(Clone)]
pub enum Message {
    /// No-op message for event interception
    Noop,
    /// Frame tick while an animation is running
    AnimationTick,

    // ============ Keyboard ============
    /// Raw key press from the keyboard subscription
    KeyPressed(Key, Modifiers),
    /// A bound action resolved from a key press
    ExecuteAction(Action),
    /// A page region took keyboard focus
    FocusRegion(FocusRegion),

    // ============ Hero carousel ============
    /// Auto-advance timer tick
    CarouselTick,
    CarouselPrevious,
    CarouselNext,
    /// Indicator activated
    CarouselGoTo(usize),
    /// Pointer entered (`true`) or left (`false`) the carousel
    CarouselPointer(bool),

    // ============ Featured categories ============
    /// Scrollable reported a new viewport
    CategoryStripScrolled {
        offset: f32,
        content_width: f32,
        viewport_width: f32,
    },
    /// Arrow button or arrow key
    CategoryScroll(ScrollDirection),
    /// Scroll lock elapsed
    CategoryScrollSettled,
    /// Pointer over a category card (by id), or `None` when it left
    CategoryHovered(Option<u32>),

    // ============ Vehicle selector ============
    VehicleMake(&'static str),
    VehicleModel(&'static str),
    VehicleYear(&'static str),
    VehicleEngine(&'static str),
    VehicleTransmission(&'static str),
    VehicleTrim(&'static str),
    VehicleVinChanged(String),
    VehicleSubmit,
    VehicleVinSearch,
    VehicleReset,
    /// Simulated search completed
    VehicleSearchFinished(Result<VehicleQuery, String>),

    // ============ Page chrome ============
    /// Header search query changed
    SearchChanged(String),
    SearchSubmit,
    ToggleDarkMode,
    ToggleReduceMotion,
    ToggleCategoriesMenu,
    CloseTopBar,
    /// Link activated; routing is delegated, we only report it
    OpenLink(String),
    /// Hide the toast with this id if it is still the current one
    HideToast(u64),

    // ============ Window ============
    /// Window gained (`true`) or lost (`false`) focus
    WindowFocusChanged(bool),
    /// Result of a minimized-state query
    WindowMinimized(bool),
    WindowClosed,
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Use a macro to reduce boilerplate for simple variants
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => { write!(f, concat!($name, "({})"), format_args!($($arg)*)) };
        }

        match self {
            // High-frequency messages - keep minimal (no data)
            Self::AnimationTick => simple!("AnimationTick"),
            Self::CarouselTick => simple!("CarouselTick"),
            Self::Noop => simple!("Noop"),
            Self::CategoryStripScrolled { offset, .. } => {
                simple!("CategoryStripScrolled", "offset={:.1}", offset)
            }

            Self::KeyPressed(key, modifiers) => {
                simple!("KeyPressed", "{:?}, {:?}", key, modifiers)
            }
            Self::ExecuteAction(action) => simple!("ExecuteAction", "{:?}", action),
            Self::FocusRegion(region) => simple!("FocusRegion", "{:?}", region),

            Self::CarouselPrevious => simple!("CarouselPrevious"),
            Self::CarouselNext => simple!("CarouselNext"),
            Self::CarouselGoTo(index) => simple!("CarouselGoTo", "{}", index),
            Self::CarouselPointer(inside) => simple!("CarouselPointer", "{}", inside),

            Self::CategoryScroll(direction) => simple!("CategoryScroll", "{:?}", direction),
            Self::CategoryScrollSettled => simple!("CategoryScrollSettled"),
            Self::CategoryHovered(id) => simple!("CategoryHovered", "{:?}", id),

            Self::VehicleMake(v) => simple!("VehicleMake", "{}", v),
            Self::VehicleModel(v) => simple!("VehicleModel", "{}", v),
            Self::VehicleYear(v) => simple!("VehicleYear", "{}", v),
            Self::VehicleEngine(v) => simple!("VehicleEngine", "{}", v),
            Self::VehicleTransmission(v) => simple!("VehicleTransmission", "{}", v),
            Self::VehicleTrim(v) => simple!("VehicleTrim", "{}", v),
            Self::VehicleVinChanged(v) => simple!("VehicleVinChanged", "{} chars", v.len()),
            Self::VehicleSubmit => simple!("VehicleSubmit"),
            Self::VehicleVinSearch => simple!("VehicleVinSearch"),
            Self::VehicleReset => simple!("VehicleReset"),
            Self::VehicleSearchFinished(result) => {
                simple!("VehicleSearchFinished", "ok={}", result.is_ok())
            }

            // Don't log user-entered search text
            Self::SearchChanged(q) => simple!("SearchChanged", "{} chars", q.len()),
            Self::SearchSubmit => simple!("SearchSubmit"),
            Self::ToggleDarkMode => simple!("ToggleDarkMode"),
            Self::ToggleReduceMotion => simple!("ToggleReduceMotion"),
            Self::ToggleCategoriesMenu => simple!("ToggleCategoriesMenu"),
            Self::CloseTopBar => simple!("CloseTopBar"),
            Self::OpenLink(href) => simple!("OpenLink", "{}", href),
            Self::HideToast(id) => simple!("HideToast", "{}", id),

            Self::WindowFocusChanged(focused) => simple!("WindowFocusChanged", "{}", focused),
            Self::WindowMinimized(minimized) => simple!("WindowMinimized", "{}", minimized),
            Self::WindowClosed => simple!("WindowClosed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_search_text() {
        let rendered = format!("{:?}", Message::SearchChanged("brake pads".to_string()));
        assert_eq!(rendered, "SearchChanged(10 chars)");
    }

    #[test]
    fn test_debug_compacts_scroll_reports() {
        let rendered = format!(
            "{:?}",
            Message::CategoryStripScrolled {
                offset: 432.0,
                content_width: 1712.0,
                viewport_width: 900.0,
            }
        );
        assert_eq!(rendered, "CategoryStripScrolled(offset=432.0)");
    }
}
