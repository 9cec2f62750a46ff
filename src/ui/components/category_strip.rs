//! Featured categories strip
//!
//! A horizontally scrolling row of category cards with arrow buttons in the
//! section header. The scrollable reports every viewport change so the
//! arrows can be disabled at either end.

use iced::widget::{button, column, container, mouse_area, row, scrollable, svg};
use iced::{Element, Fill};

use crate::app::{CategoriesState, Message};
use crate::features::catalog::FEATURED_CATEGORIES;
use crate::features::category_strip::CARD_GAP;
use crate::features::{FocusRegion, ScrollDirection};
use crate::i18n::{Key, Locale};
use crate::ui::widgets::{category_card, section_header};
use crate::ui::{icons, theme};

/// Widget id of the horizontal scrollable
pub const STRIP_SCROLL_ID: &str = "category-strip";

/// Build the featured categories section
pub fn view(state: &CategoriesState, reduce_motion: bool, locale: Locale) -> Element<'_, Message> {
    let strip = &state.strip;
    let arrows = row![
        arrow(
            icons::CHEVRON_LEFT,
            strip.can_scroll(ScrollDirection::Left),
            ScrollDirection::Left
        ),
        arrow(
            icons::CHEVRON_RIGHT,
            strip.can_scroll(ScrollDirection::Right),
            ScrollDirection::Right
        ),
    ]
    .spacing(8);

    let header = section_header::view(
        locale.get(Key::CategoriesTitle),
        Some(locale.get(Key::CategoriesSubtitle)),
        arrows.into(),
    );

    let cards = row(FEATURED_CATEGORIES.iter().map(|category| {
        let hover = if reduce_motion {
            state.hover.settled_progress(&category.id)
        } else {
            state.hover.progress(&category.id)
        };
        category_card::view(
            category.name,
            category_card::badge_label(category.product_count, locale.get(Key::CategoryProducts)),
            locale.get(Key::CategoryShopNow),
            hover,
            Message::OpenLink(category.href()),
            Message::CategoryHovered(Some(category.id)),
            Message::CategoryHovered(None),
        )
    }))
    .spacing(CARD_GAP)
    .padding(4);

    let scroller = scrollable(cards)
        .id(iced::widget::Id::new(STRIP_SCROLL_ID))
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(4).scroller_width(4).margin(2),
        ))
        .width(Fill)
        .style(theme::page_scrollable)
        .on_scroll(|viewport| Message::CategoryStripScrolled {
            offset: viewport.absolute_offset().x,
            content_width: viewport.content_bounds().width,
            viewport_width: viewport.bounds().width,
        });

    let section = column![header, scroller].spacing(16);

    mouse_area(container(section).width(Fill))
        .on_enter(Message::FocusRegion(FocusRegion::CategoryStrip))
        .into()
}

fn arrow(icon: &'static str, enabled: bool, direction: ScrollDirection) -> Element<'static, Message> {
    button(
        svg(svg::Handle::from_memory(icon.as_bytes()))
            .width(18)
            .height(18)
            .style(move |theme, _status| svg::Style {
                color: Some(if enabled {
                    theme::text_primary(theme)
                } else {
                    theme::TEXT_DISABLED
                }),
            }),
    )
    .padding(8)
    .style(theme::strip_nav_button)
    .on_press_maybe(enabled.then_some(Message::CategoryScroll(direction)))
    .into()
}
