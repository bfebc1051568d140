use std::fmt;

use chrono::Weekday;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::errors::WeekdayError;

/// All weekdays in wire order, Sunday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

const FULL_NAMES: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// Return the wire index of a weekday (0 = Sunday).
pub fn weekday_index(day: Weekday) -> u8 {
    day.num_days_from_sunday() as u8
}

/// Return the weekday for a wire index, or `None` outside `0..=6`.
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    WEEKDAYS.get(usize::from(index)).copied()
}

/// Parse a weekday from a number, a full name, or a three letter name.
///
/// Names are matched case-insensitively. Numbers may carry leading zeros.
pub fn parse_weekday(value: &str) -> Result<Weekday, WeekdayError> {
    let value = value.trim();
    if value.len() < 3 {
        return parse_weekday_number(value);
    }

    let lowered = value.to_ascii_lowercase();
    for (index, name) in FULL_NAMES.iter().enumerate() {
        if lowered == *name || lowered == name[..3] {
            return Ok(WEEKDAYS[index]);
        }
    }

    parse_weekday_number(value).map_err(|_| WeekdayError::Invalid)
}

fn parse_weekday_number(value: &str) -> Result<Weekday, WeekdayError> {
    value
        .parse::<u8>()
        .ok()
        .and_then(weekday_from_index)
        .ok_or(WeekdayError::InvalidNumber)
}

/// A set of meeting weekdays.
///
/// Stored as a seven bit mask, so duplicates and values outside `0..=6`
/// cannot be represented. Iteration and serialization are always sorted
/// ascending from Sunday.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// Create an empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build a set from weekdays, ignoring repeats.
    pub fn from_days(days: impl IntoIterator<Item = Weekday>) -> Self {
        let mut set = Self::empty();
        for day in days {
            set.insert(day);
        }
        set
    }

    /// Build a set from wire indices, rejecting values outside `0..=6`.
    pub fn from_indices(
        indices: impl IntoIterator<Item = u8>,
    ) -> Result<Self, WeekdayError> {
        let mut set = Self::empty();
        for index in indices {
            let day =
                weekday_from_index(index).ok_or(WeekdayError::InvalidNumber)?;
            set.insert(day);
        }
        Ok(set)
    }

    /// Add a weekday; return whether it was newly inserted.
    pub fn insert(&mut self, day: Weekday) -> bool {
        let had = self.contains(day);
        self.0 |= bit(day);
        !had
    }

    /// Remove a weekday; return whether it was present.
    pub fn remove(&mut self, day: Weekday) -> bool {
        let had = self.contains(day);
        self.0 &= !bit(day);
        had
    }

    /// Insert or remove a weekday depending on `checked`.
    pub fn set(&mut self, day: Weekday, checked: bool) {
        if checked {
            self.insert(day);
        } else {
            self.remove(day);
        }
    }

    /// Return whether the weekday is part of the set.
    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & bit(day) != 0
    }

    /// Return the number of weekdays in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Return whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate weekdays in ascending wire order.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + use<> {
        let set = *self;
        WEEKDAYS.into_iter().filter(move |day| set.contains(*day))
    }

    /// Return sorted wire indices.
    pub fn to_indices(&self) -> Vec<u8> {
        self.iter().map(weekday_index).collect()
    }
}

fn bit(day: Weekday) -> u8 {
    1 << weekday_index(day)
}

impl fmt::Debug for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        Self::from_days(iter)
    }
}

impl Serialize for WeekdaySet {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for index in self.to_indices() {
            seq.serialize_element(&index)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for WeekdaySet {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let indices = Option::<Vec<u8>>::deserialize(deserializer)?;
        Self::from_indices(indices.unwrap_or_default())
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::{WeekdaySet, parse_weekday};
    use crate::errors::WeekdayError;

    #[test]
    fn given_repeated_toggles_when_applied_then_set_has_no_duplicates() {
        let mut set = WeekdaySet::empty();
        let edits = [
            (Weekday::Wed, true),
            (Weekday::Mon, true),
            (Weekday::Wed, true),
            (Weekday::Sat, true),
            (Weekday::Sat, false),
            (Weekday::Sat, false),
            (Weekday::Sun, true),
        ];

        for (day, checked) in edits {
            set.set(day, checked);
        }

        assert_eq!(set.to_indices(), vec![0, 1, 3]);
        assert_eq!(set.len(), 3);
        assert!(set.to_indices().iter().all(|index| *index <= 6));
    }

    #[test]
    fn given_unsorted_indices_when_serialized_then_output_is_ascending() {
        let set = WeekdaySet::from_indices([3, 1, 3]).expect("valid indices");

        let json = serde_json::to_string(&set).expect("set serializes");

        assert_eq!(json, "[1,3]");
    }

    #[test]
    fn given_null_schedule_when_deserialized_then_set_is_empty() {
        let set: WeekdaySet =
            serde_json::from_str("null").expect("null is accepted");

        assert!(set.is_empty());
    }

    #[test]
    fn given_out_of_range_index_when_deserialized_then_error_is_returned() {
        let result = serde_json::from_str::<WeekdaySet>("[1, 7]");

        assert!(result.is_err());
    }

    #[test]
    fn given_weekday_names_when_parsed_then_matching_weekday_is_returned() {
        assert_eq!(parse_weekday("Thursday"), Ok(Weekday::Thu));
        assert_eq!(parse_weekday("thu"), Ok(Weekday::Thu));
        assert_eq!(parse_weekday("MON"), Ok(Weekday::Mon));
        assert_eq!(parse_weekday("0"), Ok(Weekday::Sun));
        assert_eq!(parse_weekday("006"), Ok(Weekday::Sat));
    }

    #[test]
    fn given_invalid_weekday_when_parsed_then_error_kind_matches_input() {
        assert_eq!(parse_weekday("9"), Err(WeekdayError::InvalidNumber));
        assert_eq!(parse_weekday("someday"), Err(WeekdayError::Invalid));
        assert_eq!(parse_weekday("0010"), Err(WeekdayError::Invalid));
    }
}
