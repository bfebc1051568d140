use iced::widget::{
    Space, button, center, column, container, opaque, pick_list, row, stack,
    text,
};
use iced::{Color, Element, Length, Theme, alignment};

use super::{App, AppEvent};
use crate::plugin::HEADER_ACTION_LABEL;
use crate::widgets::meeting_settings::view::meeting_settings_form;
use crate::widgets::queue_sidebar::view::queue_sidebar_list;

const HEADER_HEIGHT: f32 = 40.0;
const HEADER_PADDING_X: f32 = 12.0;
const HEADER_SPACING: f32 = 8.0;
const HEADER_FONT_SIZE: f32 = 13.0;
const CHANNEL_PICKER_WIDTH: f32 = 220.0;

const MODAL_BACKDROP_ALPHA: f32 = 0.6;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let header = channel_header(app);

    let sidebar_vm = app
        .widgets
        .queue_sidebar
        .vm(|board_id, card_id| app.config.card_link(board_id, card_id));
    let sidebar = queue_sidebar_list::view(
        queue_sidebar_list::QueueSidebarListProps { vm: sidebar_vm },
    )
    .map(AppEvent::QueueSidebar);

    let channel_body = container(
        text("Open the channel header action to edit meeting settings.")
            .size(HEADER_FONT_SIZE),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill);

    let content = column![header, row![channel_body, sidebar]]
        .width(Length::Fill)
        .height(Length::Fill);

    if !app.widgets.meeting_settings.is_visible() {
        return content.into();
    }

    let form = meeting_settings_form::view(
        meeting_settings_form::MeetingSettingsFormProps {
            vm: app.widgets.meeting_settings.vm(app.today()),
        },
    )
    .map(AppEvent::MeetingSettings);

    let backdrop = center(form).style(|_| container::Style {
        background: Some(
            Color {
                a: MODAL_BACKDROP_ALPHA,
                ..Color::BLACK
            }
            .into(),
        ),
        ..Default::default()
    });

    stack![content, opaque(backdrop)].into()
}

/// Render the host header: channel picker plus the plugin's header action.
fn channel_header(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let picker = pick_list(
        app.config.channels.as_slice(),
        app.active_channel.as_ref(),
        AppEvent::ChannelSelected,
    )
    .placeholder("Select channel")
    .text_size(HEADER_FONT_SIZE)
    .width(Length::Fixed(CHANNEL_PICKER_WIDTH));

    let label = text(HEADER_ACTION_LABEL).size(HEADER_FONT_SIZE);
    let header_action = button(label)
        .style(button::secondary)
        .on_press_maybe(
            app.active_channel
                .is_some()
                .then_some(AppEvent::HeaderActionPressed),
        );

    container(
        row![picker, Space::new().width(Length::Fill), header_action]
            .spacing(HEADER_SPACING)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(HEADER_HEIGHT))
    .padding([0.0, HEADER_PADDING_X])
    .align_y(alignment::Vertical::Center)
    .into()
}
