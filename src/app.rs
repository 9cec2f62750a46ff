//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::time::Instant;
use iced::{Task, Theme};

pub use message::Message;
pub use state::{App, CategoriesState, UiState};
use state::CoreState;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first to initialize locale and sections
        let settings = crate::features::Settings::load();

        // 2. Initialize sub-states
        let ui = UiState::new(&settings);
        let core = CoreState::new(settings, crate::features::Settings::file_path());
        let mut app = Self { core, ui };

        // 3. Open main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: iced::Size::new(1400.0, 900.0),
            min_size: Some(iced::Size::new(960.0, 640.0)),
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "autocare".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);
        app.core.window_id = Some(window_id);

        // 4. Mount the home page
        app.mount_home(Instant::now());

        (app, open_window.discard())
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title, with the slide position while the hero is showing
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        let name = self.core.locale.get(crate::i18n::Key::AppName);
        match &self.ui.hero.controller {
            Some(carousel) if carousel.is_mounted() => {
                format!("{} - {}", name, carousel.position_label())
            }
            _ => name.to_string(),
        }
    }

    /// Start the hero timer and apply motion preferences
    pub(crate) fn mount_home(&mut self, now: Instant) {
        let reduce_motion = self.core.reduce_motion();
        if let Some(carousel) = self.ui.hero.controller.as_mut() {
            carousel.set_auto_advance(!reduce_motion, now);
            carousel.mount(now);
            tracing::info!(
                "Hero carousel mounted at slide {} (auto-advance: {})",
                carousel.position_label(),
                !reduce_motion
            );
        }
    }

    /// Cancel the hero timer; the slide index is kept for the next mount
    pub(crate) fn unmount_home(&mut self) {
        if let Some(carousel) = self.ui.hero.controller.as_mut() {
            if carousel.is_mounted() {
                carousel.unmount();
                tracing::info!("Hero carousel unmounted");
            }
        }
    }

    /// Subscriptions for animations, the carousel timer, keyboard and window events
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        let now = Instant::now();

        // 1. UI animations
        let has_animations = self.ui.has_active_animations(now);

        // 2. Carousel timer exists only while the controller is armed
        let carousel_timer = self
            .ui
            .hero
            .controller
            .as_ref()
            .and_then(|carousel| carousel.timer());

        // 3. Keyboard events
        let keyboard_sub = if self.core.window_visible {
            keyboard::listen().filter_map(|event| match event {
                keyboard::Event::KeyPressed { key, modifiers, .. } => {
                    Some(Message::KeyPressed(key, modifiers))
                }
                _ => None,
            })
        } else {
            iced::Subscription::none()
        };

        // 4. Window events
        let close_event_sub = iced::window::close_events().map(|_id| Message::WindowClosed);
        let focus_sub = iced::event::listen_with(|event, _status, _id| match event {
            iced::Event::Window(iced::window::Event::Focused) => {
                Some(Message::WindowFocusChanged(true))
            }
            iced::Event::Window(iced::window::Event::Unfocused) => {
                Some(Message::WindowFocusChanged(false))
            }
            _ => None,
        });

        // 5. Animation subscription (~60fps when needed)
        let animation_sub = if subscription_logic::needs_animation_subscription(
            has_animations,
            self.core.reduce_motion(),
        ) {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // 6. Carousel auto-advance, keyed on the arm generation so each
        // re-arm starts a fresh stream phased from the new deadline
        let carousel_sub = match subscription_logic::carousel_timer(
            carousel_timer,
            self.core.window_visible,
        ) {
            Some((interval, generation)) => iced::time::every(interval)
                .with(generation)
                .map(|_| Message::CarouselTick),
            None => iced::Subscription::none(),
        };

        // Batch all subscriptions
        iced::Subscription::batch([
            keyboard_sub,
            close_event_sub,
            focus_sub,
            animation_sub,
            carousel_sub,
        ])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    use std::time::Duration;

    pub fn needs_animation_subscription(has_animations: bool, reduce_motion: bool) -> bool {
        has_animations && !reduce_motion
    }

    /// Interval and arm generation of the carousel timer, if one should run at all
    pub fn carousel_timer(
        armed: Option<(Duration, u64)>,
        window_visible: bool,
    ) -> Option<(Duration, u64)> {
        armed.filter(|_| window_visible)
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    mod property_carousel_timer {
        use super::*;
        use crate::features::CarouselController;
        use crate::features::carousel::DEFAULT_INTERVAL;
        use std::time::{Duration, Instant};

        fn armed(carousel: &CarouselController) -> Option<(Duration, u64)> {
            carousel.timer()
        }

        fn interval_of(key: Option<(Duration, u64)>) -> Option<Duration> {
            key.map(|(interval, _)| interval)
        }

        #[test]
        fn timer_runs_while_mounted_and_unpaused() {
            let now = Instant::now();
            let mut carousel = CarouselController::new(3, DEFAULT_INTERVAL).unwrap();
            assert_eq!(
                carousel_timer(armed(&carousel), true),
                None,
                "No timer before mount"
            );

            carousel.mount(now);
            assert_eq!(
                interval_of(carousel_timer(armed(&carousel), true)),
                Some(DEFAULT_INTERVAL)
            );
        }

        #[test]
        fn pause_and_resume_in_one_batch_restarts_the_stream() {
            let start = Instant::now();
            let mut carousel = CarouselController::new(3, DEFAULT_INTERVAL).unwrap();
            carousel.mount(start);
            let before = carousel_timer(armed(&carousel), true);

            // Pointer enter and leave handled before the runtime re-reads subscriptions
            let resumed_at = start + Duration::from_millis(100);
            carousel.pause();
            carousel.resume(resumed_at);
            let after = carousel_timer(armed(&carousel), true);

            assert!(before.is_some() && after.is_some());
            assert_ne!(before, after, "Subscription key must change so iced restarts the timer");

            // A fresh stream ticks at resumed_at + k * interval
            assert!(!carousel.tick(start + DEFAULT_INTERVAL), "Old phase is early");
            assert!(
                carousel.tick(resumed_at + DEFAULT_INTERVAL),
                "First tick of the new stream advances exactly one interval after resume"
            );
            assert_eq!(carousel.active_index(), 1);
        }

        #[test]
        fn pause_and_unmount_drop_the_timer() {
            let now = Instant::now();
            let mut carousel = CarouselController::new(3, DEFAULT_INTERVAL).unwrap();
            carousel.mount(now);

            carousel.pause();
            assert_eq!(carousel_timer(armed(&carousel), true), None, "Paused");

            carousel.resume(now);
            carousel.unmount();
            assert_eq!(carousel_timer(armed(&carousel), true), None, "Unmounted");
        }

        #[test]
        fn hidden_window_has_no_timer() {
            assert_eq!(carousel_timer(Some((DEFAULT_INTERVAL, 1)), false), None);
        }
    }

    mod property_animation_frames {
        use super::*;

        #[test]
        fn frames_only_while_animating() {
            assert!(needs_animation_subscription(true, false));
            assert!(!needs_animation_subscription(false, false));
        }

        #[test]
        fn reduce_motion_stops_frames() {
            assert!(
                !needs_animation_subscription(true, true),
                "Reduced motion must not drive frame ticks"
            );
        }
    }
}
