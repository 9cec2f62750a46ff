//! Section header widget
//!
//! Title with an optional subtitle on the left and arbitrary controls on
//! the right. Generic over the message type so any section can use it.

use iced::widget::{Space, column, row, text};
use iced::{Alignment, Element, Fill};

use crate::ui::theme;

/// Create a section header element
///
/// # Arguments
/// * `title` - The section title text
/// * `subtitle` - Optional muted line under the title
/// * `trailing` - Controls aligned to the right (e.g. scroll arrows)
pub fn view<'a, Message: 'a>(
    title: &'a str,
    subtitle: Option<&'a str>,
    trailing: Element<'a, Message>,
) -> Element<'a, Message> {
    let title_text = text(title)
        .size(22)
        .font(theme::bold())
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let heading: Element<'a, Message> = match subtitle {
        Some(subtitle) => column![
            title_text,
            text(subtitle).size(13).style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
        ]
        .spacing(4)
        .into(),
        None => title_text.into(),
    };

    row![heading, Space::new().width(Fill), trailing]
        .align_y(Alignment::Center)
        .into()
}
