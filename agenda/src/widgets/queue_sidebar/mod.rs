pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod reducer;
pub(crate) mod state;
pub(crate) mod view;

pub(crate) use event::{
    QueueSidebarEffect, QueueSidebarEvent, QueueSidebarIntent,
};
use iced::Task;
use model::{QueueItemRow, QueueListing, QueueSidebarViewModel};
pub(crate) use reducer::QueueSidebarCtx;
use state::QueueSidebarState;

use crate::plugin::SIDEBAR_TITLE;

/// Queue sidebar widget: lists the items queued for the active channel's
/// next meeting and reloads them when the server announces a change.
pub(crate) struct QueueSidebarWidget {
    state: QueueSidebarState,
}

impl QueueSidebarWidget {
    /// Create a new widget with nothing loaded.
    pub(crate) fn new() -> Self {
        Self {
            state: QueueSidebarState::default(),
        }
    }

    /// Reduce an intent into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        intent: QueueSidebarIntent,
        ctx: &QueueSidebarCtx<'_>,
    ) -> Task<QueueSidebarEvent> {
        reducer::reduce(&mut self.state, intent, ctx)
    }

    /// Return a read-only view model, linking cards with `card_link`.
    pub(crate) fn vm(
        &self,
        card_link: impl Fn(&str, &str) -> String,
    ) -> QueueSidebarViewModel<'_> {
        let listing = match self.state.items() {
            None => QueueListing::NotLoaded,
            Some(items) if items.is_empty() => QueueListing::Empty,
            Some(items) => QueueListing::Items(
                items
                    .iter()
                    .map(|item| QueueItemRow::from_item(item, &card_link))
                    .collect(),
            ),
        };

        QueueSidebarViewModel {
            title: SIDEBAR_TITLE,
            channel_id: self.state.channel_id(),
            listing,
            is_loading: self.state.is_loading(),
        }
    }

    /// Return read-only access to state for tests.
    #[cfg(test)]
    pub(crate) fn state(&self) -> &QueueSidebarState {
        &self.state
    }
}
