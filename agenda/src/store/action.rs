use std::sync::Arc;

use agenda_client::{MeetingSettings, QueuedItem};

/// Actions reduced into the agenda plugin state.
#[derive(Debug, Clone, PartialEq)]
pub enum AgendaAction {
    /// Show the settings modal for a channel.
    OpenMeetingSettingsModal { channel_id: String },
    /// Hide the settings modal and forget its channel.
    CloseMeetingSettingsModal,
    /// Settings were fetched or saved for a channel.
    ReceivedMeetingSettings(Arc<MeetingSettings>),
    /// Queued items were fetched for a channel.
    ReceivedQueuedItems {
        channel_id: String,
        items: Arc<Vec<QueuedItem>>,
    },
    /// The server announced a queue change; `None` means any channel.
    QueueInvalidated { channel_id: Option<String> },
}

impl AgendaAction {
    /// Return the action type string used by the host store.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::OpenMeetingSettingsModal { .. } => {
                "com.mattermost.agenda_open_meeting_settings_modal"
            },
            Self::CloseMeetingSettingsModal => {
                "com.mattermost.agenda_close_meeting_settings_modal"
            },
            Self::ReceivedMeetingSettings(_) => {
                "com.mattermost.agenda_received_meeting_settings"
            },
            Self::ReceivedQueuedItems { .. } => {
                "com.mattermost.agenda_received_queued_items"
            },
            Self::QueueInvalidated { .. } => {
                "com.mattermost.agenda_queue_invalidated"
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AgendaAction;
    use crate::store::PLUGIN_ID;

    #[test]
    fn given_any_action_when_kind_requested_then_it_is_plugin_scoped() {
        let actions = [
            AgendaAction::OpenMeetingSettingsModal {
                channel_id: String::from("C1"),
            },
            AgendaAction::CloseMeetingSettingsModal,
            AgendaAction::QueueInvalidated { channel_id: None },
        ];

        for action in actions {
            assert!(action.kind().starts_with(&format!("{PLUGIN_ID}_")));
        }
    }
}
