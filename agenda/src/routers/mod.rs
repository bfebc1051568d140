use iced::Task;

use crate::app::{App, AppEvent};

pub(crate) mod flow;
pub(crate) mod meeting_settings;
pub(crate) mod queue_sidebar;

pub(crate) fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Meeting settings widget
        AppEvent::MeetingSettings(event) => {
            meeting_settings::route(app, event)
        },
        // Queue sidebar widget
        AppEvent::QueueSidebar(event) => queue_sidebar::route(app, event),
        // Host simulation
        AppEvent::ChannelSelected(channel) => {
            flow::select_channel(app, channel);
            Task::none()
        },
        AppEvent::HeaderActionPressed => {
            flow::open_settings_modal(app);
            Task::none()
        },
        AppEvent::QueueRefreshTick => {
            flow::announce_queue_change(app);
            Task::none()
        },
    }
}
