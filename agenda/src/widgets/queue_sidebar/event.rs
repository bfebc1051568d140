use std::sync::Arc;

use agenda_client::QueuedItem;

use crate::actions::ActionResult;
use crate::store::QueuedItemsSlice;

/// Intent events handled by the queue sidebar.
#[derive(Debug, Clone)]
pub(crate) enum QueueSidebarIntent {
    /// Sync the active channel and the queue slice from the store.
    SyncProps {
        channel_id: Option<String>,
        queue: Arc<QueuedItemsSlice>,
    },
    /// Queue load for a channel completed.
    LoadFinished {
        channel_id: String,
        result: ActionResult<Arc<Vec<QueuedItem>>>,
    },
    /// A queued item's card link was pressed.
    LinkPressed { link: String },
}

/// Effect events produced by the queue sidebar reducer.
#[derive(Debug, Clone)]
pub(crate) enum QueueSidebarEffect {
    /// Loading a channel's queue failed.
    LoadFailed { channel_id: String, message: String },
    /// Copy a card link to the clipboard.
    CopyLink { link: String },
}

/// Queue sidebar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum QueueSidebarEvent {
    /// Intent event reduced by the queue sidebar widget.
    Intent(QueueSidebarIntent),
    /// External effect orchestrated by app-level routing.
    Effect(QueueSidebarEffect),
}
