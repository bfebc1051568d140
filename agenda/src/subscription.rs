use iced::Subscription;

use crate::app::{App, AppEvent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let mut subs = Vec::new();

    // Stand-in for the server's queue change websocket event.
    if let Some(interval) = app.config.queue_refresh() {
        subs.push(
            iced::time::every(interval).map(|_| AppEvent::QueueRefreshTick),
        );
    }

    Subscription::batch(subs)
}
