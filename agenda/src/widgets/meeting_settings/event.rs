use std::sync::Arc;

use agenda_client::{DateToken, MeetingSettings};
use chrono::Weekday;

use crate::actions::ActionResult;
use crate::store::ModalState;

/// Intent events handled by the meeting settings form.
#[derive(Debug, Clone)]
pub(crate) enum MeetingSettingsIntent {
    /// Sync the modal slice and the last fetched settings from the store.
    SyncProps {
        modal: Arc<ModalState>,
        settings: Option<Arc<MeetingSettings>>,
    },
    /// The hashtag prefix input changed.
    PrefixChanged(String),
    /// A date token was picked.
    TokenSelected(DateToken),
    /// A weekday toggle was pressed.
    WeekdayToggled { day: Weekday, checked: bool },
    /// Persist the draft and close the modal.
    Save,
    /// Drop the draft edits and close the modal.
    Cancel,
    /// Settings load for a channel completed.
    SettingsLoaded {
        channel_id: String,
        result: ActionResult<Arc<MeetingSettings>>,
    },
    /// Settings save for a channel completed.
    SaveFinished {
        channel_id: String,
        result: ActionResult<Arc<MeetingSettings>>,
    },
}

/// Effect events produced by the meeting settings reducer.
#[derive(Debug, Clone)]
pub(crate) enum MeetingSettingsEffect {
    /// Ask the host to close the settings modal.
    CloseModal,
    /// Loading a channel's settings failed.
    LoadFailed { channel_id: String, message: String },
    /// Saving the settings failed.
    SaveFailed { channel_id: String, message: String },
}

/// Meeting settings event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum MeetingSettingsEvent {
    /// Intent event reduced by the meeting settings widget.
    Intent(MeetingSettingsIntent),
    /// External effect orchestrated by app-level routing.
    Effect(MeetingSettingsEffect),
}
