use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::errors::ScheduleError;
use crate::weekday::{WeekdaySet, weekday_index};

/// Count the days from `today` until `next`.
///
/// A target earlier in the week wraps into the following week. When the
/// target is still ahead this week and `next_week` is set, seven days are
/// added.
pub fn days_until_weekday(
    today: Weekday,
    next: Weekday,
    next_week: bool,
) -> u64 {
    let today = u64::from(weekday_index(today));
    let next = u64::from(weekday_index(next));

    if today > next {
        return 7 - today + next;
    }

    let days = next - today;
    if next_week { days + 7 } else { days }
}

/// Return the date of the next scheduled meeting.
///
/// Picks the first scheduled weekday on or after `today`, wrapping to the
/// first scheduled weekday of the following week.
pub fn next_meeting_date(
    schedule: &WeekdaySet,
    today: NaiveDate,
    next_week: bool,
) -> Result<NaiveDate, ScheduleError> {
    let mut days = schedule.iter();
    let Some(first) = days.next() else {
        return Err(ScheduleError::EmptySchedule);
    };

    let current = today.weekday();
    let meeting_day = std::iter::once(first)
        .chain(days)
        .find(|day| weekday_index(current) <= weekday_index(*day))
        .unwrap_or(first);

    let offset = days_until_weekday(current, meeting_day, next_week);
    Ok(today + Days::new(offset))
}
