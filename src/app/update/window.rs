//! Window message handlers
//!
//! A minimized window unmounts the home page so the hero timer stops; the
//! page is mounted again when the window regains focus.

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowFocusChanged(true) => {
                if !self.core.window_visible {
                    tracing::info!("Window restored");
                    self.core.window_visible = true;
                    self.mount_home(Instant::now());
                }
                Some(Task::none())
            }

            Message::WindowFocusChanged(false) => {
                // Losing focus alone keeps the page running; ask whether we were minimized
                let Some(id) = self.core.window_id else {
                    return Some(Task::none());
                };
                Some(
                    iced::window::is_minimized(id)
                        .map(|minimized| Message::WindowMinimized(minimized.unwrap_or(false))),
                )
            }

            Message::WindowMinimized(minimized) => {
                if *minimized && self.core.window_visible {
                    tracing::info!("Window minimized");
                    self.core.window_visible = false;
                    self.unmount_home();
                }
                Some(Task::none())
            }

            Message::WindowClosed => {
                self.unmount_home();
                Some(iced::exit())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::{App, Message};
    use crate::features::Settings;

    #[test]
    fn test_minimize_unmounts_and_restore_keeps_the_slide() {
        let mut app = App::headless(Settings::default());
        let _ = app.update(Message::CarouselNext);

        let _ = app.update(Message::WindowMinimized(true));
        assert!(!app.core.window_visible);
        let carousel = app.ui.hero.controller.as_ref().unwrap();
        assert!(!carousel.is_mounted());
        assert!(!carousel.is_armed(), "no timer while minimized");

        let _ = app.update(Message::WindowFocusChanged(true));
        let carousel = app.ui.hero.controller.as_ref().unwrap();
        assert!(carousel.is_mounted());
        assert!(carousel.is_armed());
        assert_eq!(carousel.active_index(), 1);
    }

    #[test]
    fn test_restore_under_resting_pointer_stays_paused() {
        let mut app = App::headless(Settings::default());
        let _ = app.update(Message::CarouselPointer(true));
        let _ = app.update(Message::WindowMinimized(true));
        let _ = app.update(Message::WindowFocusChanged(true));

        let carousel = app.ui.hero.controller.as_ref().unwrap();
        assert!(carousel.is_paused());
        assert!(!carousel.is_armed(), "auto-advance must not run under the cursor");

        let _ = app.update(Message::CarouselPointer(false));
        assert!(app.ui.hero.controller.as_ref().unwrap().is_armed());
    }

    #[test]
    fn test_not_minimized_keeps_running() {
        let mut app = App::headless(Settings::default());
        let _ = app.update(Message::WindowMinimized(false));
        assert!(app.core.window_visible);
        assert!(app.ui.hero.controller.as_ref().unwrap().is_armed());
    }
}
