//! Navigation bar with the "ALL CATEGORIES" dropdown
//!
//! The dropdown opens below the bar and pushes the page down while open.

use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::catalog::{MENU_CATEGORIES, NAV_LINKS, menu_category_href};
use crate::i18n::{Key, Locale};
use crate::ui::{icons, theme};

const MENU_WIDTH: f32 = 240.0;

/// Build the navigation bar
pub fn view(current_path: &str, menu_open: bool, locale: Locale) -> Element<'static, Message> {
    let trigger = button(
        row![
            svg(svg::Handle::from_memory(icons::MENU.as_bytes()))
                .width(18)
                .height(18)
                .style(|_theme, _status| svg::Style {
                    color: Some(theme::ON_PRIMARY),
                }),
            text(locale.get(Key::AllCategories))
                .size(13)
                .font(theme::bold()),
            Space::new().width(Fill),
            svg(svg::Handle::from_memory(icons::CHEVRON_DOWN.as_bytes()))
                .width(14)
                .height(14)
                .style(|_theme, _status| svg::Style {
                    color: Some(theme::ON_PRIMARY),
                }),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .width(MENU_WIDTH)
    .padding(Padding::new(14.0).left(16.0).right(16.0))
    .style(theme::nav_menu_trigger)
    .on_press(Message::ToggleCategoriesMenu);

    let links = row(NAV_LINKS.iter().map(|link| {
        let active = link.is_active(current_path);
        button(text(link.label).size(13).font(theme::semibold()))
            .padding(Padding::new(14.0).left(16.0).right(16.0))
            .style(theme::nav_link(active))
            .on_press(Message::OpenLink(link.href.to_string()))
            .into()
    }))
    .align_y(Alignment::Center);

    let bar = container(
        row![trigger, Space::new().width(16), links]
            .align_y(Alignment::Center)
            .padding(Padding::new(0.0).left(24.0).right(24.0)),
    )
    .width(Fill)
    .style(theme::nav_bar);

    if !menu_open {
        return bar.into();
    }

    let items = column(MENU_CATEGORIES.iter().map(|name| {
        button(text(*name).size(13))
            .width(Fill)
            .padding(Padding::new(8.0).left(12.0))
            .style(theme::menu_item)
            .on_press(Message::OpenLink(menu_category_href(name)))
            .into()
    }))
    .spacing(2)
    .padding(6);

    let menu = container(container(items).width(MENU_WIDTH).style(theme::card))
        .padding(Padding::new(0.0).left(24.0));

    column![bar, menu].into()
}
