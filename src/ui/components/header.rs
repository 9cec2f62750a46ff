//! Store header: logo, product search, phone line and account actions

use iced::widget::{Space, button, column, container, row, stack, svg, text, text_input, tooltip};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::FocusRegion;
use crate::features::catalog::{HOME_PATH, Link, header};
use crate::i18n::{Key, Locale};
use crate::ui::{icons, theme};

/// Widget id of the product search input
pub const SEARCH_INPUT_ID: &str = "header-search";

/// Build the header
pub fn view(
    search_query: &str,
    cart_count: u32,
    dark_mode: bool,
    theme_shortcut: String,
    locale: Locale,
) -> Element<'_, Message> {
    let logo = button(
        row![
            text("AUTO")
                .size(28)
                .font(theme::bold())
                .style(|_theme| text::Style {
                    color: Some(theme::PRIMARY),
                }),
            text("CARE")
                .size(28)
                .font(theme::bold())
                .style(|theme| text::Style {
                    color: Some(if theme::is_dark_theme(theme) {
                        theme::text_primary(theme)
                    } else {
                        theme::NAV
                    }),
                }),
        ]
        .spacing(2),
    )
    .padding(0)
    .style(theme::transparent_btn)
    .on_press(Message::OpenLink(HOME_PATH.to_string()));

    let input = text_input(locale.get(Key::SearchPlaceholder), search_query)
        .id(iced::widget::Id::new(SEARCH_INPUT_ID))
        .on_input(Message::SearchChanged)
        .on_submit(Message::SearchSubmit)
        .padding(Padding::new(10.0).left(14.0))
        .size(14)
        .style(theme::text_input_style(false));

    let search_button = button(
        row![
            icon(icons::SEARCH, 16).style(|_theme, _status| svg::Style {
                color: Some(theme::ON_PRIMARY),
            }),
            text(locale.get(Key::SearchButton)).size(14),
        ]
        .spacing(6)
        .align_y(Alignment::Center),
    )
    .padding(Padding::new(10.0).left(18.0).right(18.0))
    .style(theme::primary_button)
    .on_press(Message::SearchSubmit);

    let search = iced::widget::mouse_area(
        row![input, search_button]
            .spacing(8)
            .align_y(Alignment::Center)
            .width(Fill),
    )
    .on_press(Message::FocusRegion(FocusRegion::HeaderSearch));

    let phone = button(
        row![
            icon(icons::PHONE, 22).style(|_theme, _status| svg::Style {
                color: Some(theme::PRIMARY),
            }),
            column![
                text(header::PHONE).size(14).font(theme::bold()),
                text(locale.get(Key::CallWhatsApp))
                    .size(11)
                    .style(|theme| text::Style {
                        color: Some(theme::text_muted(theme)),
                    }),
            ],
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding(0)
    .style(theme::transparent_btn)
    .on_press(Message::OpenLink(header::PHONE_LINK.href.to_string()));

    let cart: Element<'_, Message> = if cart_count > 0 {
        stack![
            action_button(icons::CART, &header::CART),
            container(
                container(text(cart_count.to_string()).size(10).font(theme::bold()))
                    .padding(Padding::new(1.0).left(5.0).right(5.0))
                    .style(theme::badge),
            )
            .width(36)
            .align_right(36),
        ]
        .into()
    } else {
        action_button(icons::CART, &header::CART)
    };

    let (theme_icon, theme_label) = if dark_mode {
        (icons::SUN, locale.get(Key::LightMode))
    } else {
        (icons::MOON, locale.get(Key::DarkMode))
    };
    let theme_toggle = tooltip(
        button(icon(theme_icon, 20).style(|theme, _status| svg::Style {
            color: Some(theme::text_primary(theme)),
        }))
        .padding(8)
        .style(theme::icon_button)
        .on_press(Message::ToggleDarkMode),
        text(format!("{} ({})", theme_label, theme_shortcut)).size(12),
        tooltip::Position::Bottom,
    );

    let actions = row![
        action_button(icons::HEART, &header::WISHLIST),
        cart,
        action_button(icons::USER, &header::ACCOUNT),
        theme_toggle,
    ]
    .spacing(4)
    .align_y(Alignment::Center);

    let content = row![
        logo,
        Space::new().width(32),
        search,
        Space::new().width(32),
        phone,
        Space::new().width(24),
        actions,
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(16.0).left(24.0).right(24.0));

    container(content)
        .width(Fill)
        .style(theme::header)
        .into()
}

fn icon(icon: &'static str, size: u32) -> iced::widget::Svg<'static> {
    svg(svg::Handle::from_memory(icon.as_bytes()))
        .width(size)
        .height(size)
}

fn action_button(glyph: &'static str, link: &Link) -> Element<'static, Message> {
    tooltip(
        button(icon(glyph, 20).style(|theme, _status| svg::Style {
            color: Some(theme::text_primary(theme)),
        }))
        .padding(8)
        .style(theme::icon_button)
        .on_press(Message::OpenLink(link.href.to_string())),
        text(link.label).size(12),
        tooltip::Position::Bottom,
    )
    .into()
}
