use agenda_client::{
    HashtagError, HashtagTemplate, HashtagToken, MeetingSettings, WeekdaySet,
    next_meeting_date, parse_hashtag,
};
use chrono::{NaiveDate, Weekday};

/// Editable copy of a channel's meeting settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MeetingSettingsDraft {
    hashtag_prefix: String,
    /// `None` while a malformed stored format is kept as a literal.
    date_token: Option<HashtagToken>,
    weekdays: WeekdaySet,
}

impl Default for MeetingSettingsDraft {
    fn default() -> Self {
        Self {
            hashtag_prefix: String::new(),
            date_token: Some(HashtagToken::default()),
            weekdays: WeekdaySet::empty(),
        }
    }
}

impl MeetingSettingsDraft {
    /// Derive a draft from fetched settings.
    ///
    /// A malformed format keeps its whole text as prefix with no date
    /// token, so saving it unedited writes the same text back.
    pub(crate) fn from_settings(settings: &MeetingSettings) -> Self {
        let (hashtag_prefix, date_token) =
            HashtagTemplate::parse_or_literal(&settings.hashtag_format)
                .into_parts();

        Self {
            hashtag_prefix,
            date_token,
            weekdays: settings.schedule,
        }
    }

    pub(crate) fn hashtag_prefix(&self) -> &str {
        &self.hashtag_prefix
    }

    pub(crate) fn date_token(&self) -> Option<&HashtagToken> {
        self.date_token.as_ref()
    }

    pub(crate) fn weekdays(&self) -> WeekdaySet {
        self.weekdays
    }

    pub(crate) fn set_hashtag_prefix(&mut self, prefix: String) {
        self.hashtag_prefix = prefix;
    }

    pub(crate) fn set_date_token(&mut self, token: HashtagToken) {
        self.date_token = Some(token);
    }

    pub(crate) fn set_weekday(&mut self, day: Weekday, checked: bool) {
        self.weekdays.set(day, checked);
    }

    fn template(&self) -> HashtagTemplate {
        match &self.date_token {
            Some(token) => HashtagTemplate::new(
                self.hashtag_prefix.clone(),
                token.clone(),
            ),
            None => HashtagTemplate::literal(self.hashtag_prefix.clone()),
        }
    }

    /// Compose the stored hashtag format.
    pub(crate) fn hashtag_format(&self) -> String {
        self.template().format()
    }

    /// Build the record sent to the server for `channel_id`.
    ///
    /// A draft with a date token must compose to a format holding exactly
    /// one date span. A literal draft is sent as typed.
    pub(crate) fn to_settings(
        &self,
        channel_id: &str,
    ) -> Result<MeetingSettings, HashtagError> {
        let format = self.hashtag_format();
        if self.date_token.is_some() {
            parse_hashtag(&format)?;
        }

        Ok(MeetingSettings::new(channel_id, format, self.weekdays))
    }

    /// Render the hashtag of the next scheduled meeting.
    pub(crate) fn preview(&self, today: NaiveDate) -> Option<String> {
        let date = next_meeting_date(&self.weekdays, today, false).ok()?;
        Some(self.template().render(date))
    }
}

/// Read-only view model for the settings modal.
#[derive(Debug, Clone)]
pub(crate) struct MeetingSettingsViewModel<'a> {
    pub(crate) visible: bool,
    pub(crate) channel_id: &'a str,
    pub(crate) draft: &'a MeetingSettingsDraft,
    /// Hashtag of the next meeting, `None` without a schedule.
    pub(crate) preview: Option<String>,
    pub(crate) is_loading: bool,
    pub(crate) is_saving: bool,
}
