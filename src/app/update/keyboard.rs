//! Keyboard and action message handlers
//!
//! Bound actions that move "the current item" are routed to the focused
//! region only; everything else applies to the whole window.

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::keybindings::slide_digit;
use crate::features::{Action, FocusRegion, RegionCommand, ScrollDirection};
use crate::ui::components::header::SEARCH_INPUT_ID;

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, modifiers) => {
                if let Some(action) = self.core.settings.keybindings.find_action(key, modifiers) {
                    return Some(self.update(Message::ExecuteAction(action)));
                }

                // Digits select a slide in the focused carousel
                if let Some(digit) = slide_digit(key, modifiers) {
                    if let Some(command) = self.ui.focus.route_digit(digit) {
                        return Some(self.run_region_command(command));
                    }
                }
                Some(Task::none())
            }

            Message::ExecuteAction(action) => Some(self.execute_action(*action)),

            Message::FocusRegion(region) => {
                self.ui.focus = *region;
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Execute a keybinding action
    fn execute_action(&mut self, action: Action) -> Task<Message> {
        if action.is_scoped() {
            return match self.ui.focus.route_action(action) {
                Some(command) => self.run_region_command(command),
                None => Task::none(),
            };
        }

        match action {
            Action::FocusSearch => {
                self.ui.focus = FocusRegion::HeaderSearch;
                return iced::widget::operation::focus(iced::widget::Id::new(SEARCH_INPUT_ID));
            }
            Action::ToggleDarkMode => {
                return self.update(Message::ToggleDarkMode);
            }
            Action::ToggleReduceMotion => {
                return self.update(Message::ToggleReduceMotion);
            }
            Action::ToggleFullscreen => {
                // Toggle window fullscreen mode
                self.core.is_fullscreen = !self.core.is_fullscreen;
                let mode = if self.core.is_fullscreen {
                    iced::window::Mode::Fullscreen
                } else {
                    iced::window::Mode::Windowed
                };
                return iced::window::latest().and_then(move |id| iced::window::set_mode(id, mode));
            }
            Action::PreviousItem | Action::NextItem => {}
        }
        Task::none()
    }

    fn run_region_command(&mut self, command: RegionCommand) -> Task<Message> {
        tracing::debug!("Keyboard {:?} in {:?}", command, self.ui.focus);
        match command {
            RegionCommand::CarouselPrevious => self.carousel_previous(),
            RegionCommand::CarouselNext => self.carousel_next(),
            RegionCommand::CarouselGoTo(digit) => self.carousel_go_to_digit(digit),
            RegionCommand::StripLeft => return self.scroll_categories(ScrollDirection::Left),
            RegionCommand::StripRight => return self.scroll_categories(ScrollDirection::Right),
        }
        Task::none()
    }
}
