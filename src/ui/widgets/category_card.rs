//! Category card widget
//!
//! Fixed-width card with an image placeholder, the category name, a
//! "Shop now" line and an optional product-count badge. The border and the
//! icon warm up toward the brand color as the hover animation progresses.
//!
//! # Design
//!
//! Generic over the message type; it knows nothing about categories beyond
//! the strings it renders.

use iced::widget::{Space, button, column, container, mouse_area, row, stack, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::features::category_strip::CARD_WIDTH;
use crate::ui::icons;
use crate::ui::theme;

const IMAGE_HEIGHT: f32 = 130.0;

/// Create a category card element
///
/// # Arguments
/// * `name` - Category name
/// * `badge` - Product count label, hidden when `None`
/// * `shop_now` - Localized "Shop now" text
/// * `hover_progress` - Hover animation progress (0.0 to 1.0)
/// * `on_open` - Message sent when the card is activated
/// * `on_hover` / `on_unhover` - Pointer enter and leave
pub fn view<'a, Message: Clone + 'a>(
    name: &'a str,
    badge: Option<String>,
    shop_now: &'a str,
    hover_progress: f32,
    on_open: Message,
    on_hover: Message,
    on_unhover: Message,
) -> Element<'a, Message> {
    let icon = svg(svg::Handle::from_memory(icons::PACKAGE.as_bytes()))
        .width(40)
        .height(40)
        .style(move |theme, _status| svg::Style {
            color: Some(if hover_progress > 0.5 {
                theme::PRIMARY
            } else {
                theme::text_muted(theme)
            }),
        });

    let placeholder = container(icon)
        .width(Fill)
        .height(IMAGE_HEIGHT)
        .center_x(Fill)
        .center_y(IMAGE_HEIGHT)
        .style(theme::image_placeholder);

    let image_area: Element<'a, Message> = match badge {
        Some(label) => {
            let chip = container(text(label).size(11).font(theme::semibold()))
                .padding(Padding::new(3.0).left(8.0).right(8.0))
                .style(theme::badge);
            stack![
                placeholder,
                container(chip)
                    .width(Fill)
                    .align_right(Fill)
                    .padding(8),
            ]
            .into()
        }
        None => placeholder.into(),
    };

    let name_text = text(name)
        .size(15)
        .font(theme::semibold())
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let shop_line = row![
        text(shop_now).size(13).style(|_theme| text::Style {
            color: Some(theme::PRIMARY),
        }),
        Space::new().width(4),
        svg(svg::Handle::from_memory(icons::CHEVRON_RIGHT.as_bytes()))
            .width(14)
            .height(14)
            .style(|_theme, _status| svg::Style {
                color: Some(theme::PRIMARY),
            }),
    ]
    .align_y(Alignment::Center);

    let content = column![image_area, name_text, shop_line]
        .spacing(10)
        .padding(12)
        .width(CARD_WIDTH);

    let framed = container(content).style(move |theme| iced::widget::container::Style {
        border: iced::Border {
            color: theme::animated_card_border(theme, hover_progress),
            ..theme::card(theme).border
        },
        ..theme::card(theme)
    });

    let card = button(framed)
        .padding(0)
        .style(theme::transparent_btn)
        .on_press(on_open);

    mouse_area(card)
        .on_enter(on_hover)
        .on_exit(on_unhover)
        .into()
}

/// Product count badge text, or `None` when the count is zero
pub fn badge_label(product_count: u32, products_word: &str) -> Option<String> {
    (product_count > 0).then(|| format!("{}+ {}", product_count, products_word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_hidden_for_empty_category() {
        assert_eq!(badge_label(0, "products"), None);
        assert_eq!(badge_label(48, "products").as_deref(), Some("48+ products"));
    }
}
