//! Wire model and HTTP client for the agenda plugin's server API.
//!
//! The crate is split into two layers:
//! - UI-agnostic model helpers: [`MeetingSettings`], [`QueuedItem`],
//!   [`WeekdaySet`], the hashtag template grammar ([`parse_hashtag`],
//!   [`format_hashtag`]) and meeting date arithmetic
//!   ([`next_meeting_date`]);
//! - the [`SettingsClient`], a thin authenticated wrapper over the
//!   per-channel `settings` and `queuedItems` resources.
//!
//! # Quick Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use agenda_client::{ClientConfig, SettingsClient, StaticHeaders};
//!
//! # async fn run() -> Result<(), agenda_client::ClientError> {
//! let config =
//!     ClientConfig::new("http://localhost:8065", "com.mattermost.agenda")?;
//! let headers = Arc::new(StaticHeaders::default());
//! let client = SettingsClient::new(config, headers)?;
//!
//! let settings = client.fetch_settings("town-square").await?;
//! println!("{}", settings.hashtag_format);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod errors;
mod hashtag;
mod model;
mod schedule;
mod weekday;

pub use client::{HeaderSource, SettingsClient, StaticHeaders, TokenHeaders};
pub use config::ClientConfig;
pub use errors::{ClientError, HashtagError, ScheduleError, WeekdayError};
pub use hashtag::{
    DateToken, HashtagTemplate, HashtagToken, TOKEN_CLOSE, TOKEN_OPEN,
    format_hashtag, parse_hashtag,
};
pub use model::{MeetingSettings, QueuedItem, QueuedItemFields};
pub use schedule::{days_until_weekday, next_meeting_date};
pub use weekday::{
    WEEKDAYS, WeekdaySet, parse_weekday, weekday_from_index, weekday_index,
};
