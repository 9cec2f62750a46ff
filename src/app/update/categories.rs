//! Featured categories strip message handlers

use iced::Task;
use iced::time::Instant;

use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::App;
use crate::features::{FocusRegion, ScrollDirection};
use crate::features::category_strip::SCROLL_LOCK;
use crate::ui::components::category_strip::STRIP_SCROLL_ID;

impl App {
    /// Handle category strip messages
    pub fn handle_categories(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::AnimationTick => {
                // Hero transitions are time based; only hover needs ticking
                self.ui.categories.hover.tick(Instant::now());
                Some(Task::none())
            }

            Message::CategoryStripScrolled {
                offset,
                content_width,
                viewport_width,
            } => {
                self.ui
                    .categories
                    .strip
                    .update_viewport(*offset, *content_width, *viewport_width);
                Some(Task::none())
            }

            Message::CategoryScroll(direction) => {
                self.ui.focus = FocusRegion::CategoryStrip;
                Some(self.scroll_categories(*direction))
            }

            Message::CategoryScrollSettled => {
                self.ui.categories.strip.release();
                Some(Task::none())
            }

            Message::CategoryHovered(id) => {
                if id.is_some() {
                    self.ui.focus = FocusRegion::CategoryStrip;
                }
                self.ui.categories.hover.set_hovered(*id);
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Scroll the strip by one step and hold the lock while it settles
    pub(crate) fn scroll_categories(&mut self, direction: ScrollDirection) -> Task<Message> {
        let strip = &mut self.ui.categories.strip;
        let Some(delta) = strip.request_scroll(direction) else {
            tracing::debug!("Category scroll {:?} ignored", direction);
            return Task::none();
        };
        let target = strip.target_offset(delta);

        Task::batch([
            iced::widget::operation::scroll_to(
                iced::widget::Id::new(STRIP_SCROLL_ID),
                iced::widget::scrollable::AbsoluteOffset {
                    x: Some(target),
                    y: None,
                },
            ),
            helpers::delayed(SCROLL_LOCK, Message::CategoryScrollSettled),
        ])
    }
}
