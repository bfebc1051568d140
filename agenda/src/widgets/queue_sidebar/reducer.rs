use std::sync::Arc;

use agenda_client::QueuedItem;
use iced::Task;

use super::event::{QueueSidebarEffect, QueueSidebarEvent, QueueSidebarIntent};
use super::state::QueueSidebarState;
use crate::actions::{ActionResult, AgendaActions};

/// Runtime context for the queue sidebar reducer.
pub(crate) struct QueueSidebarCtx<'a> {
    pub(crate) actions: &'a AgendaActions,
}

/// Reduce a queue sidebar intent into state updates and effects.
pub(crate) fn reduce(
    state: &mut QueueSidebarState,
    intent: QueueSidebarIntent,
    ctx: &QueueSidebarCtx<'_>,
) -> Task<QueueSidebarEvent> {
    match intent {
        QueueSidebarIntent::SyncProps { channel_id, queue } => {
            if !state.sync(channel_id, &queue) {
                return Task::none();
            }
            let Some(channel_id) = state.channel_id().map(str::to_string)
            else {
                return Task::none();
            };
            state.set_loading(true);
            load_queue(ctx.actions, channel_id)
        },
        QueueSidebarIntent::LoadFinished { channel_id, result } => {
            reduce_load_finished(state, channel_id, result)
        },
        QueueSidebarIntent::LinkPressed { link } => Task::done(
            QueueSidebarEvent::Effect(QueueSidebarEffect::CopyLink { link }),
        ),
    }
}

fn load_queue(
    actions: &AgendaActions,
    channel_id: String,
) -> Task<QueueSidebarEvent> {
    let actions = actions.clone();
    let request = channel_id.clone();
    Task::perform(
        async move { actions.load_queued_items(request).await },
        move |result| {
            QueueSidebarEvent::Intent(QueueSidebarIntent::LoadFinished {
                channel_id,
                result,
            })
        },
    )
}

fn reduce_load_finished(
    state: &mut QueueSidebarState,
    channel_id: String,
    result: ActionResult<Arc<Vec<QueuedItem>>>,
) -> Task<QueueSidebarEvent> {
    if state.channel_id() == Some(channel_id.as_str()) {
        state.set_loading(false);
    }

    match result {
        Ok(_) => Task::none(),
        Err(err) => Task::done(QueueSidebarEvent::Effect(
            QueueSidebarEffect::LoadFailed {
                channel_id,
                message: format!("{err}"),
            },
        )),
    }
}
