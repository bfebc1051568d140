use std::sync::Arc;

use agenda_client::MeetingSettings;

use super::model::MeetingSettingsDraft;

/// Runtime state of the meeting settings modal.
#[derive(Debug, Default)]
pub(crate) struct MeetingSettingsState {
    visible: bool,
    channel_id: String,
    source: Option<Arc<MeetingSettings>>,
    draft: MeetingSettingsDraft,
    loading: bool,
    saving: bool,
}

impl MeetingSettingsState {
    // --- Read access ---

    pub(crate) fn visible(&self) -> bool {
        self.visible
    }

    /// Return the channel the modal was opened for.
    pub(crate) fn channel_id(&self) -> &str {
        &self.channel_id
    }

    /// Return the settings the draft was last derived from.
    #[cfg(test)]
    pub(crate) fn source(&self) -> Option<&Arc<MeetingSettings>> {
        self.source.as_ref()
    }

    pub(crate) fn draft(&self) -> &MeetingSettingsDraft {
        &self.draft
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn is_saving(&self) -> bool {
        self.saving
    }

    // --- Write access ---

    pub(super) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Update the target channel.
    ///
    /// Returns `true` when the channel actually changed.
    pub(super) fn set_channel_id(&mut self, channel_id: &str) -> bool {
        if self.channel_id == channel_id {
            return false;
        }

        self.channel_id = channel_id.to_string();
        true
    }

    /// Re-derive the draft when `settings` is a new record.
    ///
    /// Returns `true` when the draft was replaced.
    pub(super) fn apply_settings(
        &mut self,
        settings: Option<Arc<MeetingSettings>>,
    ) -> bool {
        let Some(settings) = settings else {
            return false;
        };
        let unchanged = self
            .source
            .as_ref()
            .is_some_and(|source| Arc::ptr_eq(source, &settings));
        if unchanged {
            return false;
        }

        self.draft = MeetingSettingsDraft::from_settings(&settings);
        self.source = Some(settings);
        true
    }

    /// Restore the draft from the last fetched settings.
    pub(super) fn reset_draft(&mut self) {
        self.draft = self
            .source
            .as_deref()
            .map(MeetingSettingsDraft::from_settings)
            .unwrap_or_default();
    }

    pub(super) fn draft_mut(&mut self) -> &mut MeetingSettingsDraft {
        &mut self.draft
    }

    pub(super) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub(super) fn set_saving(&mut self, saving: bool) {
        self.saving = saving;
    }
}
