//! Workflows spanning the host, the store and both widgets.

use iced::Task;
use serde_json::json;

use crate::app::{App, AppEvent};
use crate::config::ChannelEntry;
use crate::plugin::{HEADER_ACTION_LABEL, WebSocketMessage, queue_list_event};
use crate::routers::{meeting_settings, queue_sidebar};
use crate::store::selectors::{
    select_meeting, select_meeting_settings_modal, select_queued_items,
};
use crate::widgets::meeting_settings::MeetingSettingsIntent;
use crate::widgets::queue_sidebar::QueueSidebarIntent;

/// Push the current store state into both widgets.
///
/// Widgets ignore props they have already seen.
pub(crate) fn sync_store(app: &mut App) -> Task<AppEvent> {
    let modal = select_meeting_settings_modal(&app.store);
    let settings = select_meeting(&app.store);
    let queue = select_queued_items(&app.store);
    let channel_id = app.active_channel_id().map(str::to_string);

    let modal_task = meeting_settings::route_intent(
        app,
        MeetingSettingsIntent::SyncProps { modal, settings },
    );
    let sidebar_task = queue_sidebar::route_intent(
        app,
        QueueSidebarIntent::SyncProps { channel_id, queue },
    );

    Task::batch([modal_task, sidebar_task])
}

/// Switch the host to another channel.
pub(crate) fn select_channel(app: &mut App, channel: ChannelEntry) {
    log::debug!("switching to channel {}", channel.id);
    app.active_channel = Some(channel);
}

/// Run the plugin's channel header action for the active channel.
pub(crate) fn open_settings_modal(app: &mut App) {
    let Some(channel_id) = app.active_channel_id() else {
        log::warn!("no active channel to configure");
        return;
    };
    app.registry
        .trigger_header_action(HEADER_ACTION_LABEL, channel_id);
}

/// Deliver a queue change notification for the active channel.
pub(crate) fn announce_queue_change(app: &mut App) {
    let message = WebSocketMessage {
        event: queue_list_event(),
        data: json!({ "channel_id": app.active_channel_id() }),
        ..WebSocketMessage::default()
    };
    let delivered = app.registry.deliver(&message);
    log::debug!("queue change delivered to {delivered} handlers");
}
