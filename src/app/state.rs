//! Application state definitions

use std::path::PathBuf;

use iced::time::Instant;

use crate::features::catalog::HERO_SLIDES;
use crate::features::{CarouselController, CategoryStrip, FocusRegion, Settings, VehicleForm};
use crate::i18n::{Language, Locale};
use crate::ui::animation::HoverAnimations;
use crate::ui::widgets::Toast;

/// How long a toast stays on screen
pub const TOAST_DURATION: std::time::Duration = std::time::Duration::from_secs(3);

/// Main application state
pub struct App {
    /// Settings, locale and window status
    pub core: CoreState,
    /// Page state (Regions, Animations, Toast)
    pub ui: UiState,
}

/// Core Infrastructure
pub struct CoreState {
    pub settings: Settings,
    /// Where settings are saved; `None` keeps changes for this session only
    pub settings_path: Option<PathBuf>,
    pub locale: Locale,
    pub window_id: Option<iced::window::Id>,
    /// False while the window is minimized
    pub window_visible: bool,
    pub is_fullscreen: bool,
}

impl CoreState {
    pub fn new(settings: Settings, settings_path: Option<PathBuf>) -> Self {
        let locale = Locale::new(Language::from_code(&settings.display.language));
        Self {
            settings,
            settings_path,
            locale,
            window_id: None,
            window_visible: true,
            is_fullscreen: false,
        }
    }

    pub fn reduce_motion(&self) -> bool {
        self.settings.display.reduce_motion
    }
}

/// UI View State
pub struct UiState {
    /// Region receiving scoped keyboard input
    pub focus: FocusRegion,
    pub top_bar_visible: bool,
    pub search_query: String,
    pub cart_count: u32,
    pub categories_menu_open: bool,
    /// Path of the page being shown, for nav link highlighting
    pub current_path: &'static str,

    pub hero: HeroState,
    pub categories: CategoriesState,
    pub vehicle: VehicleForm,

    pub toast: Option<Toast>,
    next_toast_id: u64,
}

/// Hero carousel state
pub struct HeroState {
    /// `None` when the section is disabled or there is nothing to show
    pub controller: Option<CarouselController>,
    /// Slide transition, restarted on every index change
    pub transition: iced::animation::Animation<bool>,
}

impl HeroState {
    fn new(settings: &Settings) -> Self {
        let controller = if settings.sections.hero_carousel {
            CarouselController::new(HERO_SLIDES.len(), settings.carousel.interval())
        } else {
            None
        };

        Self {
            controller,
            transition: iced::animation::Animation::new(false).slow(),
        }
    }

    /// Replay the slide transition from the start
    pub fn restart_transition(&mut self, now: Instant) {
        self.transition = iced::animation::Animation::new(false).slow();
        self.transition.go_mut(true, now);
    }
}

/// Featured categories strip state
#[derive(Default)]
pub struct CategoriesState {
    pub strip: CategoryStrip,
    pub hover: HoverAnimations<u32>,
}

impl UiState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            focus: FocusRegion::default(),
            top_bar_visible: true,
            search_query: String::new(),
            cart_count: 0,
            categories_menu_open: false,
            current_path: crate::features::catalog::HOME_PATH,
            hero: HeroState::new(settings),
            categories: CategoriesState::default(),
            vehicle: VehicleForm::new(),
            toast: None,
            next_toast_id: 0,
        }
    }

    /// Check if any animation is currently active
    pub fn has_active_animations(&self, now: Instant) -> bool {
        self.hero.transition.is_animating(now) || self.categories.hover.is_animating()
    }

    /// Replace the current toast and return its id for the hide timer
    pub fn show_toast(&mut self, make: impl FnOnce(u64) -> Toast) -> u64 {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        self.toast = Some(make(id));
        id
    }

    /// Hide the toast only if `id` is still the one on screen
    pub fn hide_toast(&mut self, id: u64) {
        if self.toast.as_ref().is_some_and(|toast| toast.id == id) {
            self.toast = None;
        }
    }
}

#[cfg(test)]
impl App {
    /// Mounted app with no window and no settings file
    pub(crate) fn headless(settings: Settings) -> Self {
        let ui = UiState::new(&settings);
        let core = CoreState::new(settings, None);
        let mut app = Self { core, ui };
        app.mount_home(Instant::now());
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_toast_hide_is_ignored() {
        let mut ui = UiState::new(&Settings::default());
        let first = ui.show_toast(|id| Toast::info(id, "first"));
        let second = ui.show_toast(|id| Toast::info(id, "second"));
        assert_ne!(first, second);

        ui.hide_toast(first);
        assert_eq!(
            ui.toast.as_ref().map(|t| t.message.as_str()),
            Some("second"),
            "an older timer must not hide a newer toast"
        );

        ui.hide_toast(second);
        assert!(ui.toast.is_none());
    }

    #[test]
    fn test_disabled_hero_has_no_controller() {
        let mut settings = Settings::default();
        settings.sections.hero_carousel = false;
        assert!(UiState::new(&settings).hero.controller.is_none());
        assert!(UiState::new(&Settings::default()).hero.controller.is_some());
    }
}
