//! Read accessors from the host state tree into the agenda slices.
//!
//! An absent namespace reads as the reducers' default output. The
//! default is shared, so repeated reads keep the same identity.

use std::sync::{Arc, LazyLock};

use agenda_client::MeetingSettings;

use super::reducer::{
    AgendaState, MeetingSettingsSlice, ModalState, QueuedItemsSlice,
};
use super::{HostState, PLUGIN_NAMESPACE};

static DEFAULT_STATE: LazyLock<Arc<AgendaState>> =
    LazyLock::new(|| Arc::new(AgendaState::default()));

pub fn select_plugin_state(state: &impl HostState) -> Arc<AgendaState> {
    state
        .plugin_state(PLUGIN_NAMESPACE)
        .unwrap_or_else(|| Arc::clone(&DEFAULT_STATE))
}

pub fn select_meeting_settings_modal(
    state: &impl HostState,
) -> Arc<ModalState> {
    Arc::clone(&select_plugin_state(state).meeting_settings_modal)
}

pub fn select_meeting_settings(
    state: &impl HostState,
) -> Arc<MeetingSettingsSlice> {
    Arc::clone(&select_plugin_state(state).meeting_settings)
}

/// Return the settings record itself, if one was received.
pub fn select_meeting(state: &impl HostState) -> Option<Arc<MeetingSettings>> {
    select_meeting_settings(state).meeting.clone()
}

pub fn select_queued_items(state: &impl HostState) -> Arc<QueuedItemsSlice> {
    Arc::clone(&select_plugin_state(state).queued_items)
}
