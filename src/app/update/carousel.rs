//! Hero carousel message handlers

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::FocusRegion;

impl App {
    /// Handle hero carousel messages
    pub fn handle_carousel(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::CarouselTick => {
                let now = Instant::now();
                let advanced = self
                    .ui
                    .hero
                    .controller
                    .as_mut()
                    .is_some_and(|carousel| carousel.tick(now));
                if advanced {
                    self.play_slide_transition(now);
                }
                Some(Task::none())
            }

            Message::CarouselPrevious => {
                self.ui.focus = FocusRegion::HeroCarousel;
                self.carousel_previous();
                Some(Task::none())
            }

            Message::CarouselNext => {
                self.ui.focus = FocusRegion::HeroCarousel;
                self.carousel_next();
                Some(Task::none())
            }

            Message::CarouselGoTo(index) => {
                self.ui.focus = FocusRegion::HeroCarousel;
                let moved = self.ui.hero.controller.as_mut().is_some_and(|carousel| {
                    let before = carousel.active_index();
                    carousel.go_to(*index) && before != *index
                });
                if moved {
                    self.play_slide_transition(Instant::now());
                }
                Some(Task::none())
            }

            Message::CarouselPointer(inside) => {
                if *inside {
                    self.ui.focus = FocusRegion::HeroCarousel;
                }
                if !self.core.settings.carousel.pause_on_hover {
                    return Some(Task::none());
                }

                if let Some(carousel) = self.ui.hero.controller.as_mut() {
                    if *inside {
                        carousel.pause();
                        tracing::debug!("Hero carousel paused by pointer");
                    } else {
                        let now = Instant::now();
                        carousel.resume(now);
                        tracing::debug!(
                            "Hero carousel resumed, next advance in {:?}",
                            carousel.deadline().map(|d| d.saturating_duration_since(now))
                        );
                    }
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    pub(crate) fn carousel_previous(&mut self) {
        if let Some(carousel) = self.ui.hero.controller.as_mut() {
            carousel.previous();
            self.play_slide_transition(Instant::now());
        }
    }

    pub(crate) fn carousel_next(&mut self) {
        if let Some(carousel) = self.ui.hero.controller.as_mut() {
            carousel.next();
            self.play_slide_transition(Instant::now());
        }
    }

    pub(crate) fn carousel_go_to_digit(&mut self, digit: u32) {
        let moved = self
            .ui
            .hero
            .controller
            .as_mut()
            .is_some_and(|carousel| carousel.go_to_digit(digit));
        if moved {
            self.play_slide_transition(Instant::now());
        }
    }

    fn play_slide_transition(&mut self, now: Instant) {
        if self.core.reduce_motion() {
            return;
        }
        self.ui.hero.restart_transition(now);
    }
}

#[cfg(test)]
mod tests {
    use iced::keyboard::{Key, Modifiers};

    use crate::app::{App, Message};
    use crate::features::{FocusRegion, Settings};

    fn hover_settings(pause_on_hover: bool) -> Settings {
        let mut settings = Settings::default();
        settings.carousel.pause_on_hover = pause_on_hover;
        settings
    }

    fn active_index(app: &App) -> usize {
        app.ui
            .hero
            .controller
            .as_ref()
            .map(|carousel| carousel.active_index())
            .unwrap_or_default()
    }

    fn armed(app: &App) -> bool {
        app.ui
            .hero
            .controller
            .as_ref()
            .is_some_and(|carousel| carousel.is_armed())
    }

    #[test]
    fn test_pointer_pauses_and_blocks_ticks() {
        let mut app = App::headless(hover_settings(true));
        assert!(armed(&app));

        let _ = app.update(Message::CarouselPointer(true));
        assert!(!armed(&app), "pointer over the hero cancels the timer");
        let _ = app.update(Message::CarouselTick);
        assert_eq!(active_index(&app), 0);

        let _ = app.update(Message::CarouselPointer(false));
        assert!(armed(&app), "pointer leaving re-arms the timer");
    }

    #[test]
    fn test_pointer_ignored_without_pause_on_hover() {
        let mut app = App::headless(hover_settings(false));
        app.ui.focus = FocusRegion::CategoryStrip;

        let _ = app.update(Message::CarouselPointer(true));
        assert!(armed(&app), "timer keeps running under the pointer");
        assert_eq!(app.ui.focus, FocusRegion::HeroCarousel, "pointer still takes focus");
    }

    #[test]
    fn test_early_tick_does_not_advance() {
        let mut app = App::headless(Settings::default());
        let _ = app.update(Message::CarouselTick);
        assert_eq!(active_index(&app), 0);
    }

    #[test]
    fn test_arrows_and_indicators_move_the_hero() {
        let mut app = App::headless(Settings::default());
        let _ = app.update(Message::CarouselPrevious);
        assert_eq!(active_index(&app), 2);
        let _ = app.update(Message::CarouselNext);
        assert_eq!(active_index(&app), 0);
        let _ = app.update(Message::CarouselGoTo(1));
        assert_eq!(active_index(&app), 1);
        let _ = app.update(Message::CarouselGoTo(99));
        assert_eq!(active_index(&app), 1, "out-of-range indicator is ignored");
    }

    #[test]
    fn test_digit_keys_follow_focus() {
        let mut app = App::headless(Settings::default());
        let _ = app.update(Message::KeyPressed(Key::Character("3".into()), Modifiers::empty()));
        assert_eq!(active_index(&app), 2);

        app.ui.focus = FocusRegion::VehicleSelector;
        let _ = app.update(Message::KeyPressed(Key::Character("1".into()), Modifiers::empty()));
        assert_eq!(active_index(&app), 2, "digits only reach a focused hero");
    }

    #[test]
    fn test_reduce_motion_disarms_and_restores_the_timer() {
        let mut app = App::headless(Settings::default());

        let _ = app.update(Message::ToggleReduceMotion);
        assert!(app.core.reduce_motion());
        assert!(!armed(&app), "reduced motion stops auto-advance");

        let _ = app.update(Message::CarouselPointer(true));
        let _ = app.update(Message::CarouselPointer(false));
        assert!(!armed(&app), "pointer resume must not bypass reduced motion");

        let _ = app.update(Message::ToggleReduceMotion);
        assert!(armed(&app));
    }
}
