use iced::widget::text::Wrapping;
use iced::widget::{Column, button, column, container, row, scrollable, text};
use iced::{Element, Length, Theme, alignment};

use crate::widgets::queue_sidebar::event::{
    QueueSidebarEvent, QueueSidebarIntent,
};
use crate::widgets::queue_sidebar::model::{
    QueueItemRow, QueueListing, QueueSidebarViewModel,
};

const SIDEBAR_WIDTH: f32 = 300.0;
const SIDEBAR_PADDING: f32 = 12.0;
const SECTION_SPACING: f32 = 10.0;

const HEADER_FONT_SIZE: f32 = 14.0;
const CHANNEL_FONT_SIZE: f32 = 11.0;

const ROW_PADDING: f32 = 8.0;
const ROW_SPACING: f32 = 6.0;
const ROW_TITLE_FONT_SIZE: f32 = 13.0;
const ROW_META_FONT_SIZE: f32 = 11.0;
const ICON_WIDTH: f32 = 20.0;

/// Props for the queue sidebar list.
#[derive(Debug, Clone)]
pub(crate) struct QueueSidebarListProps<'a> {
    pub(crate) vm: QueueSidebarViewModel<'a>,
}

/// Render the right-hand sidebar listing the queued items.
pub(crate) fn view(
    props: QueueSidebarListProps<'_>,
) -> Element<'_, QueueSidebarEvent, Theme, iced::Renderer> {
    let vm = props.vm;

    let title = text(vm.title)
        .size(HEADER_FONT_SIZE)
        .wrapping(Wrapping::None);
    let channel = text(match (vm.channel_id, vm.is_loading) {
        (Some(channel_id), true) => format!("{channel_id} (refreshing)"),
        (Some(channel_id), false) => channel_id.to_string(),
        (None, _) => String::from("No channel selected"),
    })
    .size(CHANNEL_FONT_SIZE);

    let placeholder = vm.placeholder();
    let body: Element<'_, QueueSidebarEvent, Theme, iced::Renderer> =
        match vm.listing {
            QueueListing::NotLoaded | QueueListing::Empty => {
                text(placeholder.unwrap_or_default()).into()
            },
            QueueListing::Items(rows) => {
                let list = rows
                    .into_iter()
                    .fold(Column::new().spacing(ROW_SPACING), |list, item| {
                        list.push(queue_row(item))
                    });
                scrollable(list).height(Length::Fill).into()
            },
        };

    let content = column![title, channel, body]
        .spacing(SECTION_SPACING)
        .width(Length::Fill)
        .height(Length::Fill);

    container(content)
        .width(Length::Fixed(SIDEBAR_WIDTH))
        .height(Length::Fill)
        .padding(SIDEBAR_PADDING)
        .style(container::bordered_box)
        .into()
}

fn queue_row(
    item: QueueItemRow<'_>,
) -> Element<'_, QueueSidebarEvent, Theme, iced::Renderer> {
    let icon = text(item.icon)
        .size(ROW_TITLE_FONT_SIZE)
        .width(Length::Fixed(ICON_WIDTH));
    let title = text(item.title)
        .size(ROW_TITLE_FONT_SIZE)
        .width(Length::Fill);

    let mut details = column![
        row![icon, title].align_y(alignment::Vertical::Center),
        text(item.link.clone()).size(ROW_META_FONT_SIZE),
    ]
    .spacing(2.0);
    if let Some(created_by) = item.created_by {
        details = details.push(text(created_by).size(ROW_META_FONT_SIZE));
    }

    button(details)
        .width(Length::Fill)
        .padding(ROW_PADDING)
        .style(button::text)
        .on_press(QueueSidebarEvent::Intent(
            QueueSidebarIntent::LinkPressed { link: item.link },
        ))
        .into()
}
