//! Home page
//! Vehicle selector beside the hero carousel, followed by featured categories

use iced::widget::{Space, column, row, scrollable};
use iced::{Element, Fill, FillPortion, Padding};

use crate::app::{Message, UiState};
use crate::features::Settings;
use crate::i18n::Locale;
use crate::ui::{components, theme};

/// Widget id of the page scrollable
pub const HOME_SCROLL_ID: &str = "home_scroll";

/// Build the home page body
pub fn view<'a>(ui: &'a UiState, settings: &'a Settings, locale: Locale) -> Element<'a, Message> {
    let reduce_motion = settings.display.reduce_motion;

    let selector = components::vehicle_selector::view(&ui.vehicle, locale);

    let hero_row: Element<'a, Message> = match &ui.hero.controller {
        Some(carousel) => row![
            iced::widget::container(selector).width(FillPortion(1)),
            iced::widget::container(components::hero_carousel::view(
                carousel,
                &ui.hero.transition,
                reduce_motion,
                locale,
            ))
            .width(FillPortion(3)),
        ]
        .spacing(24)
        .into(),
        None => iced::widget::container(selector).max_width(480).into(),
    };

    let mut content = column![hero_row].spacing(40);
    if settings.sections.category_strip {
        content = content.push(components::category_strip::view(
            &ui.categories,
            reduce_motion,
            locale,
        ));
    }
    content = content.push(Space::new().height(24));

    scrollable(content.padding(Padding::new(24.0)).width(Fill))
        .width(Fill)
        .height(Fill)
        .id(iced::widget::Id::new(HOME_SCROLL_ID))
        .style(theme::page_scrollable)
        .into()
}
