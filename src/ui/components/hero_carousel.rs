//! Hero carousel component
//!
//! Rotating promotional slides with arrow buttons, indicators, a live
//! "current / total" chip and a "Paused" badge while the pointer rests on it.

use iced::widget::{Space, button, canvas, column, container, mouse_area, row, stack, svg, text, tooltip};
use iced::{
    Alignment, Color, Element, Fill, Padding, Point, Rectangle, Renderer, Size, Theme, mouse,
};

use crate::app::Message;
use crate::features::catalog::{HERO_SLIDES, Slide};
use crate::features::{CarouselController, Direction};
use crate::i18n::{Key, Locale};
use crate::ui::{icons, theme};

const HERO_HEIGHT: f32 = 380.0;
const INDICATOR_SIZE: f32 = 8.0;
const INDICATOR_ACTIVE_WIDTH: f32 = 24.0;
const INDICATOR_SPACING: f32 = 8.0;
/// Stand-in for the slide photo behind the tint
const PHOTO_PLACEHOLDER: Color = Color::from_rgb(0.16, 0.17, 0.2);

struct SlideDrawer<'a> {
    current: &'a Slide,
    last: &'a Slide,
    progress: f32,
    direction: Direction,
}

impl<'a, Message> canvas::Program<Message> for SlideDrawer<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let draw_slide = |frame: &mut canvas::Frame, slide: &Slide, offset_x: f32| {
            let tint = theme::tint_color(slide.tint);
            let text_side = bounds.width * 0.6;

            frame.fill_rectangle(Point::new(offset_x, 0.0), bounds.size(), PHOTO_PLACEHOLDER);
            frame.fill_rectangle(
                Point::new(offset_x, 0.0),
                Size::new(text_side, bounds.height),
                Color { a: 0.92, ..tint },
            );
            frame.fill_rectangle(
                Point::new(offset_x + text_side, 0.0),
                Size::new(bounds.width - text_side, bounds.height),
                Color { a: 0.35, ..tint },
            );
        };

        if self.progress >= 1.0 {
            draw_slide(&mut frame, self.current, 0.0);
        } else {
            let width = bounds.width;
            // Ease out cubic
            let eased = 1.0 - (1.0 - self.progress).powi(3);
            let sign = self.direction.sign();

            // Forward: the old slide leaves to the left, the new one enters from the right
            let last_offset = -sign * width * eased;
            let current_offset = sign * width * (1.0 - eased);

            draw_slide(&mut frame, self.last, last_offset);
            draw_slide(&mut frame, self.current, current_offset);
        }

        vec![frame.into_geometry()]
    }
}

/// Build the hero carousel
pub fn view<'a>(
    carousel: &'a CarouselController,
    transition: &'a iced::animation::Animation<bool>,
    reduce_motion: bool,
    locale: Locale,
) -> Element<'a, Message> {
    let now = iced::time::Instant::now();
    let progress = if reduce_motion || !transition.is_animating(now) {
        1.0
    } else {
        transition.interpolate(0.0_f32, 1.0_f32, now)
    };

    let current = &HERO_SLIDES[carousel.active_index() % HERO_SLIDES.len()];
    let last = &HERO_SLIDES[carousel.last_index() % HERO_SLIDES.len()];

    let slides: Element<'_, Message> = canvas(SlideDrawer {
        current,
        last,
        progress,
        direction: carousel.direction(),
    })
    .width(Fill)
    .height(HERO_HEIGHT)
    .into();

    // Slide copy
    let copy = column![
        text(current.title)
            .size(44)
            .font(theme::bold())
            .color(theme::ON_PRIMARY),
        text(current.subtitle)
            .size(28)
            .font(theme::semibold())
            .color(theme::ON_PRIMARY),
        Space::new().height(16),
        button(
            row![
                text(current.call_to_action).size(14).font(theme::bold()),
                arrow_icon(icons::CHEVRON_RIGHT, 16),
            ]
            .spacing(6)
            .align_y(Alignment::Center),
        )
        .padding(Padding::new(10.0).left(22.0).right(22.0))
        .style(theme::slide_cta_button)
        .on_press(Message::OpenLink(current.link_target.to_string())),
    ]
    .spacing(4)
    .padding(Padding::new(0.0).left(88.0));

    let copy_layer = container(copy).width(Fill).height(Fill).center_y(Fill);

    // Status chips (top right)
    let position_chip = container(text(carousel.position_label()).size(12))
        .padding(Padding::new(4.0).left(10.0).right(10.0))
        .style(theme::slide_chip);
    let mut chips = row![].spacing(8).align_y(Alignment::Center);
    if carousel.is_paused() {
        chips = chips.push(
            container(text(locale.get(Key::HeroPaused)).size(12).font(theme::semibold()))
                .padding(Padding::new(4.0).left(10.0).right(10.0))
                .style(theme::slide_chip),
        );
    }
    chips = chips.push(position_chip);

    let chip_layer = container(chips)
        .width(Fill)
        .align_right(Fill)
        .padding(16);

    // Indicators (bottom center)
    let active = carousel.active_index();
    let indicators = row((0..carousel.slide_count()).map(|i| {
        let is_active = i == active;
        let width = if is_active {
            INDICATOR_ACTIVE_WIDTH
        } else {
            INDICATOR_SIZE
        };
        button(Space::new().width(width).height(INDICATOR_SIZE))
            .padding(0)
            .style(move |_theme, status| button::Style {
                background: Some(iced::Background::Color(
                    match (is_active, status) {
                        (true, _) => Color::WHITE,
                        (false, button::Status::Hovered) => Color::from_rgba(1.0, 1.0, 1.0, 0.8),
                        (false, _) => theme::indicator_inactive(),
                    },
                )),
                border: iced::Border {
                    radius: (INDICATOR_SIZE / 2.0).into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .on_press(Message::CarouselGoTo(i))
            .into()
    }))
    .spacing(INDICATOR_SPACING)
    .align_y(Alignment::Center);

    let indicator_layer = container(indicators)
        .width(Fill)
        .height(Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::End)
        .padding(Padding::new(0.0).bottom(20.0));

    // Gradient at the bottom keeps the indicators readable
    let gradient_overlay = container(Space::new().width(Fill).height(Fill))
        .width(Fill)
        .height(Fill)
        .style(|_theme| container::Style {
            background: Some(iced::Background::Gradient(iced::Gradient::Linear(
                iced::gradient::Linear::new(iced::Radians(std::f32::consts::PI))
                    .add_stop(0.0, Color::TRANSPARENT)
                    .add_stop(0.7, Color::TRANSPARENT)
                    .add_stop(1.0, Color::from_rgba(0.0, 0.0, 0.0, 0.35)),
            ))),
            ..Default::default()
        });

    // Navigation arrows
    let left_arrow = tooltip(
        button(arrow_icon(icons::CHEVRON_LEFT, 24))
            .padding(12)
            .style(theme::carousel_nav_button)
            .on_press(Message::CarouselPrevious),
        text(locale.get(Key::HeroPrevious)).size(12),
        tooltip::Position::Right,
    );
    let right_arrow = tooltip(
        button(arrow_icon(icons::CHEVRON_RIGHT, 24))
            .padding(12)
            .style(theme::carousel_nav_button)
            .on_press(Message::CarouselNext),
        text(locale.get(Key::HeroNext)).size(12),
        tooltip::Position::Left,
    );

    let nav_overlay = row![
        container(left_arrow)
            .height(HERO_HEIGHT)
            .align_y(Alignment::Center)
            .padding(Padding::new(16.0)),
        Space::new().width(Fill),
        container(right_arrow)
            .height(HERO_HEIGHT)
            .align_y(Alignment::Center)
            .padding(Padding::new(16.0)),
    ]
    .width(Fill)
    .height(HERO_HEIGHT);

    let stacked = stack![
        slides,
        gradient_overlay,
        copy_layer,
        chip_layer,
        indicator_layer,
        nav_overlay,
    ]
    .width(Fill)
    .height(HERO_HEIGHT);

    let framed = container(stacked)
        .width(Fill)
        .height(HERO_HEIGHT)
        .clip(true)
        .style(theme::hero_banner);

    mouse_area(framed)
        .on_enter(Message::CarouselPointer(true))
        .on_exit(Message::CarouselPointer(false))
        .into()
}

fn arrow_icon(icon: &'static str, size: u32) -> iced::widget::Svg<'static> {
    svg(svg::Handle::from_memory(icon.as_bytes()))
        .width(size)
        .height(size)
        .style(|_theme, _status| svg::Style {
            color: Some(Color::WHITE),
        })
}
