use std::sync::Arc;

use agenda_client::QueuedItem;

use crate::store::QueuedItemsSlice;

/// Runtime state of the queue sidebar.
#[derive(Debug, Default)]
pub(crate) struct QueueSidebarState {
    channel_id: Option<String>,
    revision: Option<u64>,
    items: Option<Arc<Vec<QueuedItem>>>,
    loading: bool,
}

impl QueueSidebarState {
    // --- Read access ---

    pub(crate) fn channel_id(&self) -> Option<&str> {
        self.channel_id.as_deref()
    }

    /// Return the items fetched for the active channel, if any.
    pub(crate) fn items(&self) -> Option<&Arc<Vec<QueuedItem>>> {
        self.items.as_ref()
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.loading
    }

    // --- Write access ---

    /// Follow the active channel and the store's queue slice.
    ///
    /// Returns `true` when the queue must be fetched again, that is when
    /// the channel or the slice revision changed.
    pub(super) fn sync(
        &mut self,
        channel_id: Option<String>,
        queue: &QueuedItemsSlice,
    ) -> bool {
        let channel_changed = self.channel_id != channel_id;
        let revision_changed = self.revision != Some(queue.revision);

        self.channel_id = channel_id;
        self.revision = Some(queue.revision);
        self.items = self
            .channel_id
            .as_deref()
            .and_then(|channel_id| queue.items_for(channel_id))
            .cloned();

        (channel_changed || revision_changed) && self.channel_id.is_some()
    }

    pub(super) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}
