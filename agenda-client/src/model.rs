use serde::{Deserialize, Serialize};

use crate::weekday::WeekdaySet;

/// Per-channel meeting settings owned by the server plugin.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingSettings {
    pub channel_id: String,
    pub hashtag_format: String,
    /// Meeting weekdays; `null` or a missing key decodes to an empty set.
    #[serde(default)]
    pub schedule: WeekdaySet,
}

impl MeetingSettings {
    /// Build a settings record for a channel.
    pub fn new(
        channel_id: impl Into<String>,
        hashtag_format: impl Into<String>,
        schedule: WeekdaySet,
    ) -> Self {
        Self {
            channel_id: channel_id.into(),
            hashtag_format: hashtag_format.into(),
            schedule,
        }
    }
}

/// A queued agenda item projected from a board card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueuedItem {
    pub id: String,
    pub title: String,
    pub board_id: String,
    #[serde(default)]
    pub fields: QueuedItemFields,
    /// Author of the card, when the server exposes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

/// Display fields carried by a queued item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueuedItemFields {
    #[serde(default)]
    pub icon: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{MeetingSettings, QueuedItem};
    use crate::weekday::WeekdaySet;

    #[test]
    fn given_settings_when_serialized_then_wire_keys_are_camel_case() {
        let settings = MeetingSettings::new(
            "C1",
            "DEV-{{Jan 2}}",
            WeekdaySet::from_indices([3, 1]).expect("valid indices"),
        );

        let value = serde_json::to_value(&settings).expect("serializes");

        assert_eq!(
            value,
            json!({
                "channelId": "C1",
                "hashtagFormat": "DEV-{{Jan 2}}",
                "schedule": [1, 3],
            })
        );
    }

    #[test]
    fn given_settings_without_schedule_when_decoded_then_schedule_is_empty() {
        let settings: MeetingSettings = serde_json::from_value(json!({
            "channelId": "C1",
            "hashtagFormat": "town-{{ Jan02 }}",
            "schedule": null,
        }))
        .expect("decodes");

        assert!(settings.schedule.is_empty());
        assert_eq!(settings.hashtag_format, "town-{{ Jan02 }}");
    }

    #[test]
    fn given_item_without_fields_when_decoded_then_icon_defaults_to_empty() {
        let item: QueuedItem = serde_json::from_value(json!({
            "id": "card-1",
            "title": "Discuss release",
            "boardId": "board-9",
        }))
        .expect("decodes");

        assert_eq!(item.fields.icon, "");
        assert_eq!(item.created_by, None);
    }
}
