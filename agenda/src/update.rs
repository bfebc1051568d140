use iced::Task;

use super::{App, AppEvent};
use crate::routers;

/// Route the event, then push any store change into the widgets.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    let routed = routers::route(app, event);
    let synced = routers::flow::sync_store(app);
    Task::batch([routed, synced])
}
