use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::queue_sidebar::{
    QueueSidebarCtx, QueueSidebarEffect, QueueSidebarEvent, QueueSidebarIntent,
};

/// Route a queue sidebar event to its reducer or effect handler.
pub(crate) fn route(app: &mut App, event: QueueSidebarEvent) -> Task<AppEvent> {
    match event {
        QueueSidebarEvent::Intent(intent) => route_intent(app, intent),
        QueueSidebarEvent::Effect(effect) => route_effect(effect),
    }
}

/// Reduce an intent directly (used by flow routers).
pub(crate) fn route_intent(
    app: &mut App,
    intent: QueueSidebarIntent,
) -> Task<AppEvent> {
    let ctx = QueueSidebarCtx {
        actions: &app.actions,
    };
    app.widgets
        .queue_sidebar
        .reduce(intent, &ctx)
        .map(AppEvent::QueueSidebar)
}

fn route_effect(effect: QueueSidebarEffect) -> Task<AppEvent> {
    match effect {
        QueueSidebarEffect::LoadFailed {
            channel_id,
            message,
        } => {
            log::warn!("queue load for {channel_id} failed: {message}");
            Task::none()
        },
        QueueSidebarEffect::CopyLink { link } => {
            log::info!("copied card link {link}");
            iced::clipboard::write(link)
        },
    }
}
