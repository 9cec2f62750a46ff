//! Toast notification widget
//!
//! Floating card with a colored accent bar, used to acknowledge links and
//! searches. A toast carries an id so a stale auto-hide timer can't dismiss
//! a newer toast.

use iced::widget::{Space, container, row, text};
use iced::{Alignment, Color, Element, Padding, Theme};

use crate::ui::theme;

/// Toast notification style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStyle {
    Success,
    Error,
    Info,
}

impl ToastStyle {
    /// Accent color used for the bar and icon
    pub fn accent_color(&self, theme: &Theme) -> Color {
        match self {
            ToastStyle::Success => theme::success(theme),
            ToastStyle::Error => theme::danger(theme),
            ToastStyle::Info => theme::PRIMARY,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastStyle::Success => "✓",
            ToastStyle::Error => "✗",
            ToastStyle::Info => "ℹ",
        }
    }
}

/// Toast notification data
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub style: ToastStyle,
}

impl Toast {
    pub fn new(id: u64, message: impl Into<String>, style: ToastStyle) -> Self {
        Self {
            id,
            message: message.into(),
            style,
        }
    }

    pub fn success(id: u64, message: impl Into<String>) -> Self {
        Self::new(id, message, ToastStyle::Success)
    }

    pub fn error(id: u64, message: impl Into<String>) -> Self {
        Self::new(id, message, ToastStyle::Error)
    }

    pub fn info(id: u64, message: impl Into<String>) -> Self {
        Self::new(id, message, ToastStyle::Info)
    }
}

/// Build a toast notification widget
pub fn view_toast<'a, Message: 'a>(toast: &Toast) -> Element<'a, Message> {
    let style = toast.style;
    let message = toast.message.clone();

    let accent_bar = container(Space::new().width(3).height(20)).style(move |theme| {
        container::Style {
            background: Some(iced::Background::Color(style.accent_color(theme))),
            border: iced::Border {
                radius: 2.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    let icon_widget = text(style.icon()).size(14).style(move |theme| text::Style {
        color: Some(style.accent_color(theme)),
    });

    let message_widget = text(message).size(13).style(|theme| text::Style {
        color: Some(theme::text_primary(theme)),
    });

    let content = row![
        accent_bar,
        Space::new().width(12),
        icon_widget,
        Space::new().width(10),
        message_widget,
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(14.0).left(12.0).right(20.0));

    container(content)
        .style(|theme| container::Style {
            background: Some(iced::Background::Color(theme::card_bg(theme))),
            border: iced::Border {
                radius: 8.0.into(),
                width: 1.0,
                color: theme::border_color(theme),
            },
            shadow: iced::Shadow {
                color: theme::shadow_color(theme),
                offset: iced::Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            ..Default::default()
        })
        .into()
}
