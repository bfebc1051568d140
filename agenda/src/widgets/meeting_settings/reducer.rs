use std::sync::Arc;

use agenda_client::MeetingSettings;
use iced::Task;

use super::event::{
    MeetingSettingsEffect, MeetingSettingsEvent, MeetingSettingsIntent,
};
use super::state::MeetingSettingsState;
use crate::actions::{ActionResult, AgendaActions};
use crate::store::ModalState;

/// Runtime context for the meeting settings reducer.
pub(crate) struct MeetingSettingsCtx<'a> {
    pub(crate) actions: &'a AgendaActions,
}

/// Reduce a meeting settings intent into state updates and effects.
pub(crate) fn reduce(
    state: &mut MeetingSettingsState,
    intent: MeetingSettingsIntent,
    ctx: &MeetingSettingsCtx<'_>,
) -> Task<MeetingSettingsEvent> {
    use MeetingSettingsIntent::*;

    match intent {
        SyncProps { modal, settings } => {
            reduce_sync_props(state, &modal, settings, ctx)
        },
        PrefixChanged(prefix) => {
            state.draft_mut().set_hashtag_prefix(prefix);
            Task::none()
        },
        TokenSelected(token) => {
            state.draft_mut().set_date_token(token.into());
            Task::none()
        },
        WeekdayToggled { day, checked } => {
            state.draft_mut().set_weekday(day, checked);
            Task::none()
        },
        Save => reduce_save(state, ctx),
        Cancel => {
            state.reset_draft();
            Task::done(MeetingSettingsEvent::Effect(
                MeetingSettingsEffect::CloseModal,
            ))
        },
        SettingsLoaded { channel_id, result } => {
            reduce_settings_loaded(state, channel_id, result)
        },
        SaveFinished { channel_id, result } => {
            reduce_save_finished(state, channel_id, result)
        },
    }
}

/// Follow the modal's channel and re-derive the draft on new settings.
fn reduce_sync_props(
    state: &mut MeetingSettingsState,
    modal: &ModalState,
    settings: Option<Arc<MeetingSettings>>,
    ctx: &MeetingSettingsCtx<'_>,
) -> Task<MeetingSettingsEvent> {
    state.set_visible(modal.visible);

    let channel_changed = state.set_channel_id(&modal.channel_id);
    let settings = settings.filter(|settings| {
        settings.channel_id.is_empty()
            || settings.channel_id == modal.channel_id
    });
    state.apply_settings(settings);

    if !channel_changed || modal.channel_id.is_empty() {
        return Task::none();
    }

    state.set_loading(true);
    let actions = ctx.actions.clone();
    let channel_id = modal.channel_id.clone();
    let request = channel_id.clone();
    Task::perform(
        async move { actions.load_settings(request).await },
        move |result| {
            MeetingSettingsEvent::Intent(
                MeetingSettingsIntent::SettingsLoaded { channel_id, result },
            )
        },
    )
}

fn reduce_settings_loaded(
    state: &mut MeetingSettingsState,
    channel_id: String,
    result: ActionResult<Arc<MeetingSettings>>,
) -> Task<MeetingSettingsEvent> {
    if state.channel_id() == channel_id {
        state.set_loading(false);
    }

    match result {
        Ok(_) => Task::none(),
        Err(err) => Task::done(MeetingSettingsEvent::Effect(
            MeetingSettingsEffect::LoadFailed {
                channel_id,
                message: format!("{err}"),
            },
        )),
    }
}

/// Send the draft to the server and close without waiting for the reply.
fn reduce_save(
    state: &mut MeetingSettingsState,
    ctx: &MeetingSettingsCtx<'_>,
) -> Task<MeetingSettingsEvent> {
    let close = Task::done(MeetingSettingsEvent::Effect(
        MeetingSettingsEffect::CloseModal,
    ));

    if state.channel_id().is_empty() {
        log::warn!("meeting settings save requested without a channel");
        return close;
    }

    let channel_id = state.channel_id().to_string();
    let settings = match state.draft().to_settings(&channel_id) {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("refusing to save hashtag format for {channel_id}");
            let failed = Task::done(MeetingSettingsEvent::Effect(
                MeetingSettingsEffect::SaveFailed {
                    channel_id,
                    message: format!("{err}"),
                },
            ));
            return Task::batch([failed, close]);
        },
    };

    state.set_saving(true);
    let actions = ctx.actions.clone();
    let save = Task::perform(
        async move { actions.save_settings(settings).await },
        move |result| {
            MeetingSettingsEvent::Intent(MeetingSettingsIntent::SaveFinished {
                channel_id,
                result,
            })
        },
    );

    Task::batch([save, close])
}

fn reduce_save_finished(
    state: &mut MeetingSettingsState,
    channel_id: String,
    result: ActionResult<Arc<MeetingSettings>>,
) -> Task<MeetingSettingsEvent> {
    state.set_saving(false);

    match result {
        Ok(_) => Task::none(),
        Err(err) => Task::done(MeetingSettingsEvent::Effect(
            MeetingSettingsEffect::SaveFailed {
                channel_id,
                message: format!("{err}"),
            },
        )),
    }
}
