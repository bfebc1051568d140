use std::sync::Arc;

use agenda_client::{MeetingSettings, QueuedItem};

use super::action::AgendaAction;

/// Visibility and target channel of the settings modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub visible: bool,
    pub channel_id: String,
}

/// Most recently fetched or saved meeting settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeetingSettingsSlice {
    pub meeting: Option<Arc<MeetingSettings>>,
}

/// Most recently fetched queue, tagged with its channel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueuedItemsSlice {
    /// Channel the items belong to; `None` until the first fetch.
    pub channel_id: Option<String>,
    pub items: Arc<Vec<QueuedItem>>,
    /// Bumped whenever the server announces a queue change.
    pub revision: u64,
}

impl QueuedItemsSlice {
    /// Return the items if they were fetched for `channel_id`.
    pub fn items_for(
        &self,
        channel_id: &str,
    ) -> Option<&Arc<Vec<QueuedItem>>> {
        match self.channel_id.as_deref() {
            Some(loaded) if loaded == channel_id => Some(&self.items),
            _ => None,
        }
    }
}

/// State stored under the plugin namespace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgendaState {
    pub meeting_settings_modal: Arc<ModalState>,
    pub meeting_settings: Arc<MeetingSettingsSlice>,
    pub queued_items: Arc<QueuedItemsSlice>,
}

pub fn reduce_meeting_settings_modal(
    state: &Arc<ModalState>,
    action: &AgendaAction,
) -> Arc<ModalState> {
    let next = match action {
        AgendaAction::OpenMeetingSettingsModal { channel_id } => ModalState {
            visible: true,
            channel_id: channel_id.clone(),
        },
        AgendaAction::CloseMeetingSettingsModal => ModalState {
            visible: false,
            channel_id: String::new(),
        },
        _ => return Arc::clone(state),
    };

    if **state == next {
        Arc::clone(state)
    } else {
        Arc::new(next)
    }
}

pub fn reduce_meeting_settings(
    state: &Arc<MeetingSettingsSlice>,
    action: &AgendaAction,
) -> Arc<MeetingSettingsSlice> {
    match action {
        AgendaAction::ReceivedMeetingSettings(settings) => {
            let mut next = MeetingSettingsSlice::clone(state);
            next.meeting = Some(Arc::clone(settings));
            Arc::new(next)
        },
        _ => Arc::clone(state),
    }
}

pub fn reduce_queued_items(
    state: &Arc<QueuedItemsSlice>,
    action: &AgendaAction,
) -> Arc<QueuedItemsSlice> {
    match action {
        AgendaAction::ReceivedQueuedItems { channel_id, items } => {
            Arc::new(QueuedItemsSlice {
                channel_id: Some(channel_id.clone()),
                items: Arc::clone(items),
                revision: state.revision,
            })
        },
        AgendaAction::QueueInvalidated { .. } => {
            let mut next = QueuedItemsSlice::clone(state);
            next.revision = next.revision.wrapping_add(1);
            Arc::new(next)
        },
        _ => Arc::clone(state),
    }
}

/// Reduce every slice; the root is reused when no slice changed.
pub fn reduce_agenda(
    state: &Arc<AgendaState>,
    action: &AgendaAction,
) -> Arc<AgendaState> {
    let meeting_settings_modal =
        reduce_meeting_settings_modal(&state.meeting_settings_modal, action);
    let meeting_settings =
        reduce_meeting_settings(&state.meeting_settings, action);
    let queued_items = reduce_queued_items(&state.queued_items, action);

    let unchanged =
        Arc::ptr_eq(&meeting_settings_modal, &state.meeting_settings_modal)
            && Arc::ptr_eq(&meeting_settings, &state.meeting_settings)
            && Arc::ptr_eq(&queued_items, &state.queued_items);
    if unchanged {
        return Arc::clone(state);
    }

    Arc::new(AgendaState {
        meeting_settings_modal,
        meeting_settings,
        queued_items,
    })
}
