//! "Select your car" card
//!
//! Dependent make/model pickers, year and optional details, plus a VIN
//! shortcut. Field errors render under their picker once the form has been
//! submitted.

use iced::widget::{Space, button, column, container, mouse_area, pick_list, row, text, text_input};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::catalog::vehicles;
use crate::features::vehicle::Field;
use crate::features::{FocusRegion, VehicleForm};
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// Build the vehicle selector card
pub fn view(form: &VehicleForm, locale: Locale) -> Element<'_, Message> {
    let title = row![
        text(locale.get(Key::VehicleTitle))
            .size(18)
            .font(theme::bold()),
        Space::new().width(Fill),
        button(text(locale.get(Key::VehicleClearAll)).size(12))
            .padding(0)
            .style(theme::text_button)
            .on_press(Message::VehicleReset),
    ]
    .align_y(Alignment::Center);

    let model_placeholder = if form.make().is_some() {
        locale.get(Key::VehicleModel)
    } else {
        locale.get(Key::VehicleSelectMakeFirst)
    };

    let required = column![
        field(
            form,
            Field::Make,
            picker(
                vehicles::MAKES,
                form.make(),
                locale.get(Key::VehicleMake),
                form.error_for(Field::Make).is_some(),
                Message::VehicleMake,
            ),
        ),
        field(
            form,
            Field::Model,
            picker(
                form.available_models(),
                form.model(),
                model_placeholder,
                form.error_for(Field::Model).is_some(),
                Message::VehicleModel,
            ),
        ),
        field(
            form,
            Field::Year,
            picker(
                vehicles::YEARS,
                form.year(),
                locale.get(Key::VehicleYear),
                form.error_for(Field::Year).is_some(),
                Message::VehicleYear,
            ),
        ),
    ]
    .spacing(10);

    let optional = column![
        picker(
            vehicles::ENGINES,
            form.engine(),
            locale.get(Key::VehicleEngine),
            false,
            Message::VehicleEngine,
        ),
        row![
            picker(
                vehicles::TRANSMISSIONS,
                form.transmission(),
                locale.get(Key::VehicleTransmission),
                false,
                Message::VehicleTransmission,
            ),
            picker(
                vehicles::TRIMS,
                form.trim(),
                locale.get(Key::VehicleTrim),
                false,
                Message::VehicleTrim,
            ),
        ]
        .spacing(8),
    ]
    .spacing(10);

    let divider = row![
        rule(),
        text(locale.get(Key::VehicleOr))
            .size(11)
            .font(theme::semibold())
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
        rule(),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let vin_input = text_input(locale.get(Key::VehicleVinPlaceholder), form.vin())
        .on_input_maybe((!form.is_loading()).then_some(Message::VehicleVinChanged))
        .on_submit_maybe(form.can_search_vin().then_some(Message::VehicleVinSearch))
        .padding(Padding::new(9.0).left(12.0))
        .size(13)
        .style(theme::text_input_style(form.error_for(Field::Vin).is_some()));

    let vin_search = button(text(locale.get(Key::VehicleVinSearch)).size(13))
        .padding(Padding::new(9.0).left(14.0).right(14.0))
        .style(theme::secondary_button)
        .on_press_maybe(form.can_search_vin().then_some(Message::VehicleVinSearch));

    let vin_row = row![vin_input, vin_search]
        .spacing(8)
        .align_y(Alignment::Center);

    let vin_block = field(form, Field::Vin, vin_row.into());

    let submit_label = if form.is_loading() {
        locale.get(Key::VehicleSearching)
    } else {
        locale.get(Key::VehicleSearchParts)
    };
    let submit = button(
        container(text(submit_label).size(14).font(theme::bold())).center_x(Fill),
    )
    .width(Fill)
    .padding(12)
    .style(theme::primary_button)
    .on_press_maybe(form.can_submit().then_some(Message::VehicleSubmit));

    let mut footer = column![muted(form.status_line())].spacing(2);
    if let Some(counter) = form.vin_counter() {
        footer = footer.push(muted(counter));
    }

    let content = column![
        title,
        required,
        optional,
        divider,
        vin_block,
        submit,
        footer,
    ]
    .spacing(14)
    .padding(20);

    mouse_area(container(content).width(Fill).style(theme::card))
        .on_enter(Message::FocusRegion(FocusRegion::VehicleSelector))
        .into()
}

/// A control with its validation message underneath
fn field<'a>(
    form: &VehicleForm,
    error_field: Field,
    control: Element<'a, Message>,
) -> Element<'a, Message> {
    match form.error_for(error_field) {
        Some(message) => column![
            control,
            text(message).size(11).style(|theme| text::Style {
                color: Some(theme::danger(theme)),
            }),
        ]
        .spacing(4)
        .into(),
        None => control,
    }
}

fn picker(
    options: &'static [&'static str],
    selected: Option<&'static str>,
    placeholder: &'static str,
    invalid: bool,
    on_select: fn(&'static str) -> Message,
) -> Element<'static, Message> {
    pick_list(options, selected, on_select)
        .placeholder(placeholder)
        .width(Fill)
        .padding(Padding::new(9.0).left(12.0))
        .text_size(13)
        .style(theme::form_pick_list(invalid))
        .menu_style(theme::form_pick_list_menu)
        .into()
}

fn rule() -> Element<'static, Message> {
    container(Space::new().width(Fill).height(1))
        .width(Fill)
        .style(|theme| container::Style {
            background: Some(iced::Background::Color(theme::border_color(theme))),
            ..Default::default()
        })
        .into()
}

fn muted(line: String) -> Element<'static, Message> {
    text(line)
        .size(11)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        })
        .into()
}
