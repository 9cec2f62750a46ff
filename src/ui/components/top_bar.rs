//! Dismissible promotional bar above the header

use iced::widget::{Space, button, container, row, svg, text, tooltip};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::catalog::{Link, top_bar};
use crate::i18n::{Key, Locale};
use crate::ui::{icons, theme};

/// Build the top bar
pub fn view(locale: Locale) -> Element<'static, Message> {
    let hours = row![
        white_icon(icons::CLOCK),
        Space::new().width(6),
        text(top_bar::OPENING_HOURS).size(12),
    ]
    .align_y(Alignment::Center);

    let chat = row![
        white_icon(icons::MESSAGE_CIRCLE),
        Space::new().width(6),
        text(locale.get(Key::TopBarChatVia)).size(12),
        Space::new().width(4),
        link(&top_bar::WHATSAPP),
    ]
    .align_y(Alignment::Center);

    let locations = row![
        white_icon(icons::MAP_PIN),
        Space::new().width(6),
        link(&top_bar::LOCATIONS),
    ]
    .align_y(Alignment::Center);

    let start_shopping = button(
        text(top_bar::START_SHOPPING.label)
            .size(11)
            .font(theme::bold()),
    )
    .padding(Padding::new(4.0).left(12.0).right(12.0))
    .style(theme::inverted_button)
    .on_press(Message::OpenLink(top_bar::START_SHOPPING.href.to_string()));

    let close = tooltip(
        button(white_icon(icons::CLOSE))
            .padding(4)
            .style(theme::bar_link)
            .on_press(Message::CloseTopBar),
        text(locale.get(Key::TopBarClose)).size(12),
        tooltip::Position::Bottom,
    );

    let content = row![
        hours,
        Space::new().width(20),
        chat,
        Space::new().width(20),
        locations,
        Space::new().width(Fill),
        text(top_bar::SLOGAN).size(11).font(theme::semibold()),
        Space::new().width(12),
        start_shopping,
        Space::new().width(8),
        close,
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(6.0).left(24.0).right(16.0));

    container(content)
        .width(Fill)
        .style(theme::top_bar)
        .into()
}

fn link(link: &Link) -> Element<'static, Message> {
    button(text(link.label).size(12).font(theme::semibold()))
        .padding(0)
        .style(theme::bar_link)
        .on_press(Message::OpenLink(link.href.to_string()))
        .into()
}

fn white_icon(icon: &'static str) -> iced::widget::Svg<'static> {
    svg(svg::Handle::from_memory(icon.as_bytes()))
        .width(14)
        .height(14)
        .style(|_theme, _status| svg::Style {
            color: Some(theme::ON_PRIMARY),
        })
}
