use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::meeting_settings::{
    MeetingSettingsCtx, MeetingSettingsEffect, MeetingSettingsEvent,
    MeetingSettingsIntent,
};

/// Route a meeting settings event to its reducer or effect handler.
pub(crate) fn route(
    app: &mut App,
    event: MeetingSettingsEvent,
) -> Task<AppEvent> {
    match event {
        MeetingSettingsEvent::Intent(intent) => route_intent(app, intent),
        MeetingSettingsEvent::Effect(effect) => route_effect(app, effect),
    }
}

/// Reduce an intent directly (used by flow routers).
pub(crate) fn route_intent(
    app: &mut App,
    intent: MeetingSettingsIntent,
) -> Task<AppEvent> {
    let ctx = MeetingSettingsCtx {
        actions: &app.actions,
    };
    app.widgets
        .meeting_settings
        .reduce(intent, &ctx)
        .map(AppEvent::MeetingSettings)
}

fn route_effect(
    app: &mut App,
    effect: MeetingSettingsEffect,
) -> Task<AppEvent> {
    match effect {
        MeetingSettingsEffect::CloseModal => {
            app.actions.close_modal();
            Task::none()
        },
        MeetingSettingsEffect::LoadFailed {
            channel_id,
            message,
        } => {
            log::warn!(
                "meeting settings load for {channel_id} failed: {message}"
            );
            Task::none()
        },
        MeetingSettingsEffect::SaveFailed {
            channel_id,
            message,
        } => {
            log::warn!(
                "meeting settings save for {channel_id} failed: {message}"
            );
            Task::none()
        },
    }
}
