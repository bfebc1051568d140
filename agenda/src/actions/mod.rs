//! Action creators.
//!
//! Plain creators build an [`AgendaAction`]. The async creators on
//! [`AgendaActions`] call the server, dispatch the result and hand it back
//! to the caller as an [`ActionResult`]; failures are never dispatched.

mod tracker;

use std::sync::Arc;

use agenda_client::{ClientError, MeetingSettings, QueuedItem, SettingsClient};

pub use tracker::{RequestTicket, RequestTracker};

use crate::store::{AgendaAction, Dispatch};

/// Outcome of an async action creator, cloneable for UI messages.
pub type ActionResult<T> = Result<T, Arc<ClientError>>;

pub fn open_meeting_settings_modal(
    channel_id: impl Into<String>,
) -> AgendaAction {
    AgendaAction::OpenMeetingSettingsModal {
        channel_id: channel_id.into(),
    }
}

pub fn close_meeting_settings_modal() -> AgendaAction {
    AgendaAction::CloseMeetingSettingsModal
}

/// Async action creators bound to a client and a dispatcher.
#[derive(Clone)]
pub struct AgendaActions {
    client: SettingsClient,
    dispatch: Arc<dyn Dispatch>,
    settings_requests: RequestTracker,
    queue_requests: RequestTracker,
}

impl AgendaActions {
    pub fn new(client: SettingsClient, dispatch: Arc<dyn Dispatch>) -> Self {
        Self {
            client,
            dispatch,
            settings_requests: RequestTracker::new(),
            queue_requests: RequestTracker::new(),
        }
    }

    pub fn open_modal(&self, channel_id: impl Into<String>) {
        self.dispatch.dispatch(open_meeting_settings_modal(channel_id));
    }

    pub fn close_modal(&self) {
        self.dispatch.dispatch(close_meeting_settings_modal());
    }

    /// Announce that a channel's queue changed on the server.
    pub fn invalidate_queue(&self, channel_id: Option<String>) {
        self.dispatch
            .dispatch(AgendaAction::QueueInvalidated { channel_id });
    }

    /// Fetch a channel's settings and publish them to the store.
    pub async fn load_settings(
        &self,
        channel_id: String,
    ) -> ActionResult<Arc<MeetingSettings>> {
        let ticket = self.settings_requests.issue();
        let settings = self
            .client
            .fetch_settings(&channel_id)
            .await
            .map(Arc::new)
            .map_err(|err| {
                log::debug!("settings load for {channel_id} failed: {err}");
                Arc::new(err)
            })?;

        self.publish(
            &self.settings_requests,
            ticket,
            AgendaAction::ReceivedMeetingSettings(Arc::clone(&settings)),
        );
        Ok(settings)
    }

    /// Fetch a channel's queued items and publish them to the store.
    pub async fn load_queued_items(
        &self,
        channel_id: String,
    ) -> ActionResult<Arc<Vec<QueuedItem>>> {
        let ticket = self.queue_requests.issue();
        let items = self
            .client
            .fetch_queued_items(&channel_id)
            .await
            .map(Arc::new)
            .map_err(|err| {
                log::debug!("queue load for {channel_id} failed: {err}");
                Arc::new(err)
            })?;

        self.publish(
            &self.queue_requests,
            ticket,
            AgendaAction::ReceivedQueuedItems {
                channel_id,
                items: Arc::clone(&items),
            },
        );
        Ok(items)
    }

    /// Persist settings and publish the saved record to the store.
    ///
    /// The ticket is taken once the server accepted the record, so a
    /// failed save never discards a load that is still in flight.
    pub async fn save_settings(
        &self,
        settings: MeetingSettings,
    ) -> ActionResult<Arc<MeetingSettings>> {
        let saved =
            self.client.save_settings(&settings).await.map_err(|err| {
                log::debug!(
                    "settings save for {} failed: {err}",
                    settings.channel_id
                );
                Arc::new(err)
            })?;
        let saved = Arc::new(saved);
        let ticket = self.settings_requests.issue();

        self.publish(
            &self.settings_requests,
            ticket,
            AgendaAction::ReceivedMeetingSettings(Arc::clone(&saved)),
        );
        Ok(saved)
    }

    fn publish(
        &self,
        tracker: &RequestTracker,
        ticket: RequestTicket,
        action: AgendaAction,
    ) {
        if tracker.is_current(ticket) {
            self.dispatch.dispatch(action);
        } else {
            log::debug!("dropping superseded {}", action.kind());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{close_meeting_settings_modal, open_meeting_settings_modal};
    use crate::store::AgendaAction;

    #[test]
    fn given_channel_when_open_created_then_action_carries_channel() {
        assert_eq!(
            open_meeting_settings_modal("C1"),
            AgendaAction::OpenMeetingSettingsModal {
                channel_id: String::from("C1"),
            }
        );
        assert_eq!(
            close_meeting_settings_modal(),
            AgendaAction::CloseMeetingSettingsModal
        );
    }
}
