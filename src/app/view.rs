//! Application view rendering

use iced::widget::{Space, column, container, stack};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::{components, pages, theme, widgets};

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let locale = self.core.locale;
        let settings = &self.core.settings;

        let mut chrome = column![];
        if self.ui.top_bar_visible {
            chrome = chrome.push(components::top_bar::view(locale));
        }
        chrome = chrome
            .push(components::header::view(
                &self.ui.search_query,
                self.ui.cart_count,
                settings.display.dark_mode,
                settings
                    .keybindings
                    .display_for_action(&crate::features::Action::ToggleDarkMode),
                locale,
            ))
            .push(components::navigation::view(
                self.ui.current_path,
                self.ui.categories_menu_open,
                locale,
            ));

        let page = column![chrome, pages::home::view(&self.ui, settings, locale)]
            .width(Fill)
            .height(Fill);

        let main_layout = container(page)
            .width(Fill)
            .height(Fill)
            .style(theme::main_content);

        // Toast overlay (bottom center)
        let toast_overlay: Element<'_, Message> = if let Some(toast) = &self.ui.toast {
            container(widgets::view_toast(toast))
                .width(Fill)
                .height(Fill)
                .padding(24)
                .align_x(Alignment::Center)
                .align_y(Alignment::End)
                .into()
        } else {
            Space::new().width(0).height(0).into()
        };

        stack![main_layout, toast_overlay]
            .width(Fill)
            .height(Fill)
            .into()
    }
}
