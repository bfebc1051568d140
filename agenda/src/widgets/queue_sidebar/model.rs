use agenda_client::QueuedItem;

/// Label shown when a channel has nothing queued.
pub(crate) const EMPTY_QUEUE_LABEL: &str = "No items queued";
/// Label shown while the first queue fetch is running.
pub(crate) const LOADING_QUEUE_LABEL: &str = "Loading...";
/// Label shown when no queue could be fetched for the channel.
pub(crate) const NOT_LOADED_LABEL: &str = "Queue not loaded";

/// One queued item as displayed in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QueueItemRow<'a> {
    pub(crate) title: &'a str,
    pub(crate) icon: &'a str,
    /// Board card link of the item.
    pub(crate) link: String,
    pub(crate) created_by: Option<String>,
}

impl<'a> QueueItemRow<'a> {
    /// Project a queued item using `card_link` to build its board link.
    pub(crate) fn from_item(
        item: &'a QueuedItem,
        card_link: impl Fn(&str, &str) -> String,
    ) -> Self {
        Self {
            title: &item.title,
            icon: &item.fields.icon,
            link: card_link(&item.board_id, &item.id),
            created_by: item
                .created_by
                .as_deref()
                .filter(|author| !author.is_empty())
                .map(|author| format!("Created by {author}")),
        }
    }
}

/// What the sidebar knows about the active channel's queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum QueueListing<'a> {
    /// Nothing was fetched for the active channel yet.
    NotLoaded,
    /// The queue was fetched and is empty.
    Empty,
    Items(Vec<QueueItemRow<'a>>),
}

/// Read-only view model for the queue sidebar.
#[derive(Debug, Clone)]
pub(crate) struct QueueSidebarViewModel<'a> {
    pub(crate) title: &'a str,
    pub(crate) channel_id: Option<&'a str>,
    pub(crate) listing: QueueListing<'a>,
    pub(crate) is_loading: bool,
}

impl QueueSidebarViewModel<'_> {
    /// Return the text shown in place of rows, if any.
    pub(crate) fn placeholder(&self) -> Option<&'static str> {
        match self.listing {
            QueueListing::NotLoaded if self.is_loading => {
                Some(LOADING_QUEUE_LABEL)
            },
            QueueListing::NotLoaded => Some(NOT_LOADED_LABEL),
            QueueListing::Empty => Some(EMPTY_QUEUE_LABEL),
            QueueListing::Items(_) => None,
        }
    }
}
