use agenda_client::{DateToken, HashtagToken, WEEKDAYS};
use chrono::Weekday;
use iced::widget::text::Wrapping;
use iced::widget::{
    Row, Space, button, column, container, pick_list, row, text, text_input,
};
use iced::{Element, Length, Theme, alignment};

use crate::widgets::meeting_settings::event::{
    MeetingSettingsEvent, MeetingSettingsIntent,
};
use crate::widgets::meeting_settings::model::MeetingSettingsViewModel;

const MODAL_WIDTH: f32 = 420.0;
const MODAL_PADDING: f32 = 20.0;
const SECTION_SPACING: f32 = 16.0;
const FIELD_SPACING: f32 = 6.0;

const TITLE_FONT_SIZE: f32 = 16.0;
const LABEL_FONT_SIZE: f32 = 12.0;
const HINT_FONT_SIZE: f32 = 11.0;
const INPUT_FONT_SIZE: f32 = 13.0;
const INPUT_PADDING: f32 = 6.0;

const WEEKDAY_BUTTON_WIDTH: f32 = 48.0;
const WEEKDAY_SPACING: f32 = 4.0;
const ACTION_SPACING: f32 = 8.0;

/// Props for the meeting settings modal form.
#[derive(Debug, Clone)]
pub(crate) struct MeetingSettingsFormProps<'a> {
    pub(crate) vm: MeetingSettingsViewModel<'a>,
}

/// Render the settings form shown inside the modal.
pub(crate) fn view(
    props: MeetingSettingsFormProps<'_>,
) -> Element<'_, MeetingSettingsEvent, Theme, iced::Renderer> {
    let vm = props.vm;

    let title = text("Agenda Settings")
        .size(TITLE_FONT_SIZE)
        .wrapping(Wrapping::None);
    let status = if vm.is_loading {
        text("Loading settings...").size(HINT_FONT_SIZE)
    } else {
        text("").size(HINT_FONT_SIZE)
    };

    let content = column![
        title,
        status,
        hashtag_section(&vm),
        weekday_section(&vm),
        preview_section(&vm),
        action_row(&vm),
    ]
    .spacing(SECTION_SPACING)
    .width(Length::Fill);

    container(content)
        .width(Length::Fixed(MODAL_WIDTH))
        .padding(MODAL_PADDING)
        .style(container::rounded_box)
        .into()
}

fn hashtag_section<'a>(
    vm: &MeetingSettingsViewModel<'a>,
) -> Element<'a, MeetingSettingsEvent, Theme, iced::Renderer> {
    let draft = vm.draft;

    let prefix = text_input("Hashtag prefix", draft.hashtag_prefix())
        .on_input(|value| {
            MeetingSettingsEvent::Intent(MeetingSettingsIntent::PrefixChanged(
                value,
            ))
        })
        .size(INPUT_FONT_SIZE)
        .padding(INPUT_PADDING)
        .width(Length::Fill);

    let selected = draft.date_token().and_then(HashtagToken::date);
    let token = pick_list(DateToken::ALL, selected, |token| {
        MeetingSettingsEvent::Intent(MeetingSettingsIntent::TokenSelected(
            token,
        ))
    })
    .placeholder("No date")
    .text_size(INPUT_FONT_SIZE)
    .width(Length::Fill);

    let mut section = column![
        field_label("Hashtag prefix"),
        prefix,
        field_label("Date format"),
        token,
    ]
    .spacing(FIELD_SPACING);

    match draft.date_token() {
        Some(HashtagToken::Raw(custom)) => {
            section = section.push(
                text(format!("Custom format kept: {custom}"))
                    .size(HINT_FONT_SIZE),
            );
        },
        None => {
            section = section.push(
                text("Stored format kept as written").size(HINT_FONT_SIZE),
            );
        },
        Some(HashtagToken::Date(_)) => {},
    }

    section.into()
}

fn weekday_section<'a>(
    vm: &MeetingSettingsViewModel<'a>,
) -> Element<'a, MeetingSettingsEvent, Theme, iced::Renderer> {
    let weekdays = vm.draft.weekdays();

    let toggles = WEEKDAYS.iter().fold(
        Row::new().spacing(WEEKDAY_SPACING),
        |toggles, day| {
            toggles.push(weekday_toggle(*day, weekdays.contains(*day)))
        },
    );

    column![field_label("Meeting days"), toggles]
        .spacing(FIELD_SPACING)
        .into()
}

fn weekday_toggle<'a>(
    day: Weekday,
    checked: bool,
) -> Element<'a, MeetingSettingsEvent, Theme, iced::Renderer> {
    let label = text(day.to_string())
        .size(LABEL_FONT_SIZE)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    button(label)
        .width(Length::Fixed(WEEKDAY_BUTTON_WIDTH))
        .style(if checked {
            button::primary
        } else {
            button::secondary
        })
        .on_press(MeetingSettingsEvent::Intent(
            MeetingSettingsIntent::WeekdayToggled {
                day,
                checked: !checked,
            },
        ))
        .into()
}

fn preview_section<'a>(
    vm: &MeetingSettingsViewModel<'a>,
) -> Element<'a, MeetingSettingsEvent, Theme, iced::Renderer> {
    let preview = match &vm.preview {
        Some(hashtag) => format!("Next meeting: {hashtag}"),
        None => String::from("Pick at least one meeting day"),
    };

    text(preview).size(HINT_FONT_SIZE).into()
}

fn action_row<'a>(
    vm: &MeetingSettingsViewModel<'a>,
) -> Element<'a, MeetingSettingsEvent, Theme, iced::Renderer> {
    let cancel = button(text("Cancel").size(LABEL_FONT_SIZE))
        .style(button::secondary)
        .on_press(MeetingSettingsEvent::Intent(MeetingSettingsIntent::Cancel));

    let save_enabled = !vm.is_saving && !vm.channel_id.is_empty();
    let save = button(text("Save").size(LABEL_FONT_SIZE))
        .style(button::primary)
        .on_press_maybe(save_enabled.then_some(MeetingSettingsEvent::Intent(
            MeetingSettingsIntent::Save,
        )));

    row![Space::new().width(Length::Fill), cancel, save]
        .spacing(ACTION_SPACING)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn field_label<'a>(
    label: &'a str,
) -> Element<'a, MeetingSettingsEvent, Theme, iced::Renderer> {
    text(label).size(LABEL_FONT_SIZE).into()
}
