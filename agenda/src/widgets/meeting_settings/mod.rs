pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod reducer;
pub(crate) mod state;
pub(crate) mod view;

use chrono::NaiveDate;
pub(crate) use event::{
    MeetingSettingsEffect, MeetingSettingsEvent, MeetingSettingsIntent,
};
use iced::Task;
use model::MeetingSettingsViewModel;
pub(crate) use reducer::MeetingSettingsCtx;
use state::MeetingSettingsState;

/// Meeting settings widget: the modal form editing a channel's hashtag
/// format and meeting weekdays.
pub(crate) struct MeetingSettingsWidget {
    state: MeetingSettingsState,
}

impl MeetingSettingsWidget {
    /// Create a new widget with an empty draft.
    pub(crate) fn new() -> Self {
        Self {
            state: MeetingSettingsState::default(),
        }
    }

    /// Reduce an intent into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        intent: MeetingSettingsIntent,
        ctx: &MeetingSettingsCtx<'_>,
    ) -> Task<MeetingSettingsEvent> {
        reducer::reduce(&mut self.state, intent, ctx)
    }

    /// Return a read-only view model for the modal form.
    pub(crate) fn vm(&self, today: NaiveDate) -> MeetingSettingsViewModel<'_> {
        MeetingSettingsViewModel {
            visible: self.state.visible(),
            channel_id: self.state.channel_id(),
            draft: self.state.draft(),
            preview: self.state.draft().preview(today),
            is_loading: self.state.is_loading(),
            is_saving: self.state.is_saving(),
        }
    }

    /// Return whether the modal is shown.
    pub(crate) fn is_visible(&self) -> bool {
        self.state.visible()
    }

    /// Return read-only access to state for tests.
    #[cfg(test)]
    pub(crate) fn state(&self) -> &MeetingSettingsState {
        &self.state
    }
}
