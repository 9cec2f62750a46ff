//! Page chrome message handlers: links, search, toggles and toasts

use iced::Task;
use iced::time::Instant;

use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::{App, TOAST_DURATION};
use crate::features::FocusRegion;
use crate::i18n::Key;
use crate::ui::widgets::Toast;

impl App {
    /// Handle navigation-related messages
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Noop => Some(Task::none()),

            Message::OpenLink(href) => {
                // Routing is owned by the host; we only report the request
                tracing::info!("Link activated: {}", href);
                self.ui.categories_menu_open = false;
                let text = format!("{} {}", self.core.locale.get(Key::ToastOpening), href);
                Some(self.toast(|id, text| Toast::info(id, text), text))
            }

            Message::SearchChanged(query) => {
                self.ui.focus = FocusRegion::HeaderSearch;
                self.ui.search_query = query.clone();
                Some(Task::none())
            }

            Message::SearchSubmit => {
                let query = self.ui.search_query.trim().to_string();
                if query.is_empty() {
                    return Some(Task::none());
                }
                tracing::info!("Product search submitted: {}", query);
                let text = format!(
                    "{} \"{}\"",
                    self.core.locale.get(Key::ToastProductSearch),
                    query
                );
                Some(self.toast(|id, text| Toast::info(id, text), text))
            }

            Message::ToggleDarkMode => {
                self.core.settings.display.dark_mode = !self.core.settings.display.dark_mode;
                self.save_settings();
                Some(Task::none())
            }

            Message::ToggleReduceMotion => {
                let reduce = !self.core.settings.display.reduce_motion;
                self.core.settings.display.reduce_motion = reduce;
                if let Some(carousel) = self.ui.hero.controller.as_mut() {
                    carousel.set_auto_advance(!reduce, Instant::now());
                }
                if reduce {
                    self.ui.categories.hover.clear();
                }
                tracing::info!("Reduced motion: {}", reduce);
                self.save_settings();
                Some(Task::none())
            }

            Message::ToggleCategoriesMenu => {
                self.ui.categories_menu_open = !self.ui.categories_menu_open;
                Some(Task::none())
            }

            Message::CloseTopBar => {
                self.ui.top_bar_visible = false;
                Some(Task::none())
            }

            Message::HideToast(id) => {
                self.ui.hide_toast(*id);
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Show a toast and schedule its hide
    fn toast(&mut self, make: fn(u64, String) -> Toast, text: String) -> Task<Message> {
        let id = self.ui.show_toast(|id| make(id, text));
        helpers::delayed(TOAST_DURATION, Message::HideToast(id))
    }

    fn save_settings(&self) {
        let Some(path) = self.core.settings_path.as_deref() else {
            tracing::warn!("No config directory, settings kept for this session");
            return;
        };
        if let Err(e) = self.core.settings.save_to_file(path) {
            tracing::error!("Failed to save settings: {}", e);
        }
    }
}
