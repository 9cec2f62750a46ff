//! Theme system for the storefront
//! Supports both dark and light modes with consistent brand colors

use iced::color;
use iced::widget::{button, container, pick_list, scrollable, text_input};
use iced::font::Weight;
use iced::{Background, Border, Color, Font, Shadow, Theme, Vector};

use crate::features::catalog::SlideTint;

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark | Theme::Dracula | Theme::Nord | Theme::TokyoNight | Theme::CatppuccinMocha
    )
}

/// Public function to check if theme is dark mode
pub fn is_dark_theme(theme: &Theme) -> bool {
    is_dark(theme)
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x0f1115);
    pub const HEADER: Color = color!(0x161920);
    pub const CARD: Color = color!(0x1c2029);
    pub const BORDER: Color = color!(0x2c313c);
    pub const MUTED: Color = color!(0x242933);
    pub const TEXT_MUTED: Color = color!(0x8b93a3);
    pub const TEXT_PRIMARY: Color = color!(0xf2f4f7);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const HEADER: Color = color!(0xffffff);
    pub const CARD: Color = color!(0xffffff);
    pub const BORDER: Color = color!(0xe2e5ea);
    pub const MUTED: Color = color!(0xf3f4f6);
    pub const TEXT_MUTED: Color = color!(0x6b7280);
    pub const TEXT_PRIMARY: Color = color!(0x111827);
}

/// Brand red, used for the top bar, buttons and highlights
pub const PRIMARY: Color = color!(0xdc2626);

/// Hover state for the brand red
pub const PRIMARY_HOVER: Color = color!(0xb91c1c);

/// Navigation bar blue
pub const NAV: Color = color!(0x1e3a5f);

/// Hover state inside the navigation bar
pub const NAV_HOVER: Color = color!(0x2b4d78);

/// Text on brand-colored surfaces
pub const ON_PRIMARY: Color = Color::WHITE;

/// Heading weight
pub const BOLD_WEIGHT: Weight = Weight::Bold;

/// Label weight for buttons and links
pub const SEMIBOLD_WEIGHT: Weight = Weight::Semibold;

/// Bold font with the default family
pub fn bold() -> Font {
    Font {
        weight: BOLD_WEIGHT,
        ..Font::DEFAULT
    }
}

/// Semibold font with the default family
pub fn semibold() -> Font {
    Font {
        weight: SEMIBOLD_WEIGHT,
        ..Font::DEFAULT
    }
}

/// Disabled text color (for inactive buttons)
pub const TEXT_DISABLED: Color = Color::from_rgba(0.5, 0.5, 0.5, 0.5);

pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

pub fn header_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::HEADER
    } else {
        light::HEADER
    }
}

pub fn card_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::CARD
    } else {
        light::CARD
    }
}

pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Muted surface (placeholders, inputs)
pub fn muted_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::MUTED
    } else {
        light::MUTED
    }
}

pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Danger/error color
pub fn danger(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.95, 0.4, 0.4)
    } else {
        Color::from_rgb(0.8, 0.15, 0.15)
    }
}

/// Success color
pub fn success(_theme: &Theme) -> Color {
    Color::from_rgb(0.2, 0.7, 0.4)
}

/// Solid color of a slide tint
pub fn tint_color(tint: SlideTint) -> Color {
    match tint {
        SlideTint::Primary => PRIMARY,
        SlideTint::Nav => NAV,
    }
}

/// Indicator dot inactive color (on top of a slide)
pub fn indicator_inactive() -> Color {
    Color::from_rgba(1.0, 1.0, 1.0, 0.5)
}

/// Hover background with alpha
pub fn hover_bg_alpha(theme: &Theme, alpha: f32) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, alpha)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, alpha * 0.7)
    }
}

/// Card border blended toward brand red as the hover animation progresses
pub fn animated_card_border(theme: &Theme, progress: f32) -> Color {
    let base = border_color(theme);
    let t = progress.clamp(0.0, 1.0);
    Color::from_rgb(
        base.r + (PRIMARY.r - base.r) * t,
        base.g + (PRIMARY.g - base.g) * t,
        base.b + (PRIMARY.b - base.b) * t,
    )
}

/// Shadow color for cards and toasts
pub fn shadow_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, 0.5)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.15)
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Page background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Red top bar
pub fn top_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PRIMARY)),
        text_color: Some(ON_PRIMARY),
        ..Default::default()
    }
}

/// Header strip with a bottom border
pub fn header(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(header_bg(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            width: 1.0,
            color: border_color(theme),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Blue navigation bar
pub fn nav_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(NAV)),
        text_color: Some(ON_PRIMARY),
        ..Default::default()
    }
}

/// Bordered card (vehicle selector, category cards)
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(card_bg(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        shadow: Shadow {
            color: shadow_color(theme),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

/// Hero carousel frame
pub fn hero_banner(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(muted_bg(theme))),
        text_color: Some(ON_PRIMARY),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Small translucent status chip on top of a slide ("Paused", "1 / 3")
pub fn slide_chip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.35))),
        text_color: Some(ON_PRIMARY),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Red count badge (cart, product count)
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PRIMARY)),
        text_color: Some(ON_PRIMARY),
        border: Border {
            radius: 10.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Image placeholder inside a category card
pub fn image_placeholder(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(muted_bg(theme))),
        text_color: Some(text_muted(theme)),
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Primary button style
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(PRIMARY)),
        text_color: ON_PRIMARY,
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(PRIMARY_HOVER)),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: 0.5,
                ..PRIMARY
            })),
            text_color: Color {
                a: 0.7,
                ..ON_PRIMARY
            },
            ..base
        },
        _ => base,
    }
}

/// Secondary button - transparent with border
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border {
            radius: 6.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(muted_bg(theme))),
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: TEXT_DISABLED,
            ..base
        },
        _ => base,
    }
}

/// White pill on the red top bar ("START SHOPPING")
pub fn inverted_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(ON_PRIMARY)),
        text_color: PRIMARY,
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.9))),
            ..base
        },
        _ => base,
    }
}

/// Outlined white button on top of a slide ("Shop Now")
pub fn slide_cta_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: ON_PRIMARY,
        border: Border {
            radius: 6.0.into(),
            width: 2.0,
            color: ON_PRIMARY,
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(ON_PRIMARY)),
            text_color: PRIMARY,
            ..base
        },
        _ => base,
    }
}

/// Icon button (circular)
pub fn icon_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border {
            radius: 50.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover_bg_alpha(theme, 0.1))),
            ..base
        },
        _ => base,
    }
}

/// Carousel navigation button (semi-transparent)
pub fn carousel_nav_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.2))),
        text_color: Color::WHITE,
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.35))),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.5))),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.08))),
            text_color: Color::from_rgba(1.0, 1.0, 1.0, 0.4),
            ..base
        },
        _ => base,
    }
}

/// Strip arrow button on a card-colored background
pub fn strip_nav_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(card_bg(theme))),
        text_color: text_primary(theme),
        border: Border {
            radius: 50.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(PRIMARY)),
            text_color: ON_PRIMARY,
            border: Border {
                color: PRIMARY,
                ..base.border
            },
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: TEXT_DISABLED,
            ..base
        },
        _ => base,
    }
}

/// Link-like text button inside a light/dark surface
pub fn text_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_muted(theme),
        border: Border::default(),
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            text_color: text_primary(theme),
            ..base
        },
        _ => base,
    }
}

/// Underlined-style link on a brand-colored bar
pub fn bar_link(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: ON_PRIMARY,
        border: Border::default(),
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            text_color: Color::from_rgba(1.0, 1.0, 1.0, 0.8),
            ..base
        },
        _ => base,
    }
}

/// Navigation bar link, highlighted when it points at the current page
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = match (active, status) {
            (_, button::Status::Hovered | button::Status::Pressed) => NAV_HOVER,
            (true, _) => Color::from_rgba(1.0, 1.0, 1.0, 0.1),
            (false, _) => Color::TRANSPARENT,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: ON_PRIMARY,
            border: Border::default(),
            ..Default::default()
        }
    }
}

/// Red "ALL CATEGORIES" trigger inside the navigation bar
pub fn nav_menu_trigger(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => PRIMARY_HOVER,
        _ => PRIMARY,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: ON_PRIMARY,
        border: Border::default(),
        ..Default::default()
    }
}

/// Dropdown entry under "ALL CATEGORIES"
pub fn menu_item(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(muted_bg(theme))),
            ..base
        },
        _ => base,
    }
}

/// Transparent button - no background, no hover effect (for cards with custom hover)
pub fn transparent_btn(theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border::default(),
        ..Default::default()
    }
}

// ============================================================================
// Text Input Styles
// ============================================================================

/// Search and VIN inputs
pub fn text_input_style(
    invalid: bool,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |theme, status| {
        let border = if invalid {
            danger(theme)
        } else {
            match status {
                text_input::Status::Focused { .. } => PRIMARY,
                text_input::Status::Hovered => text_muted(theme),
                _ => border_color(theme),
            }
        };

        text_input::Style {
            background: Background::Color(card_bg(theme)),
            border: Border {
                radius: 6.0.into(),
                width: 1.0,
                color: border,
            },
            icon: text_muted(theme),
            placeholder: text_muted(theme),
            value: text_primary(theme),
            selection: Color {
                a: 0.3,
                ..PRIMARY
            },
        }
    }
}

// ============================================================================
// Pick List (Dropdown) Styles
// ============================================================================

/// Vehicle selector dropdown, outlined red when its field is invalid
pub fn form_pick_list(
    invalid: bool,
) -> impl Fn(&Theme, pick_list::Status) -> pick_list::Style {
    move |theme, status| {
        let border = if invalid {
            danger(theme)
        } else {
            match status {
                pick_list::Status::Opened { .. } => PRIMARY,
                pick_list::Status::Hovered => text_muted(theme),
                pick_list::Status::Active => border_color(theme),
            }
        };

        pick_list::Style {
            text_color: text_primary(theme),
            placeholder_color: text_muted(theme),
            handle_color: text_muted(theme),
            background: Background::Color(card_bg(theme)),
            border: Border {
                radius: 6.0.into(),
                width: 1.0,
                color: border,
            },
        }
    }
}

/// Dropdown menu style
pub fn form_pick_list_menu(theme: &Theme) -> iced::overlay::menu::Style {
    iced::overlay::menu::Style {
        text_color: text_primary(theme),
        background: Background::Color(card_bg(theme)),
        border: Border {
            radius: 6.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        selected_text_color: ON_PRIMARY,
        selected_background: Background::Color(PRIMARY),
        shadow: Shadow {
            color: shadow_color(theme),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
    }
}

// ============================================================================
// Scrollable Styles
// ============================================================================

/// Thin scrollbar for the page and the category strip
pub fn page_scrollable(theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let scrollbar = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(border_color(theme)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: scrollbar.clone(),
        horizontal_rail: scrollbar,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(card_bg(theme)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: text_muted(theme),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_detection() {
        assert!(is_dark_theme(&Theme::Dark));
        assert!(!is_dark_theme(&Theme::Light));
    }

    #[test]
    fn test_card_border_animation_endpoints() {
        let theme = Theme::Light;
        assert_eq!(animated_card_border(&theme, 0.0), border_color(&theme));

        let end = animated_card_border(&theme, 1.0);
        assert!((end.r - PRIMARY.r).abs() < 1e-5);
        assert!((end.g - PRIMARY.g).abs() < 1e-5);
        assert!((end.b - PRIMARY.b).abs() < 1e-5);
    }
}
