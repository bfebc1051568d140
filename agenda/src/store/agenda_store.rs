use std::sync::Arc;

use parking_lot::RwLock;

use super::action::AgendaAction;
use super::reducer::{AgendaState, reduce_agenda};
use super::selectors::select_plugin_state;
use super::{Dispatch, GlobalState, HostState, PLUGIN_NAMESPACE};

/// Cloneable handle over the host state tree.
///
/// Dispatch reduces only the agenda namespace; every other namespace is
/// carried over untouched.
#[derive(Debug, Clone, Default)]
pub struct AgendaStore {
    inner: Arc<RwLock<GlobalState>>,
}

impl AgendaStore {
    /// Create a store with the agenda namespace registered.
    pub fn new() -> Self {
        Self::with_state(GlobalState::new())
    }

    /// Wrap an existing host tree, registering the agenda namespace.
    pub fn with_state(global: GlobalState) -> Self {
        let store = Self {
            inner: Arc::new(RwLock::new(global)),
        };
        store.register_namespace(PLUGIN_NAMESPACE);
        store
    }

    /// Seed `namespace` with the default agenda state unless present.
    pub fn register_namespace(&self, namespace: &str) {
        let mut global = self.inner.write();
        if !global.contains(namespace) {
            global.insert_plugin_state(
                namespace,
                Arc::new(AgendaState::default()),
            );
        }
    }

    /// Return a snapshot of the whole tree.
    pub fn state(&self) -> GlobalState {
        self.inner.read().clone()
    }

    /// Return the current agenda state.
    pub fn agenda_state(&self) -> Arc<AgendaState> {
        select_plugin_state(&*self.inner.read())
    }
}

impl Dispatch for AgendaStore {
    fn dispatch(&self, action: AgendaAction) {
        log::debug!("dispatch {}", action.kind());

        let mut global = self.inner.write();
        let current = select_plugin_state(&*global);
        let next = reduce_agenda(&current, &action);
        if !Arc::ptr_eq(&current, &next) {
            global.insert_plugin_state(PLUGIN_NAMESPACE, next);
        }
    }
}

impl HostState for AgendaStore {
    fn plugin_state(&self, namespace: &str) -> Option<Arc<AgendaState>> {
        self.inner.read().plugin_state(namespace)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::AgendaStore;
    use crate::store::selectors::select_meeting_settings_modal;
    use crate::store::{
        AgendaAction, Dispatch, GlobalState, PLUGIN_NAMESPACE,
    };

    #[test]
    fn given_open_action_when_dispatched_then_modal_slice_updates() {
        let store = AgendaStore::new();

        store.dispatch(AgendaAction::OpenMeetingSettingsModal {
            channel_id: String::from("C1"),
        });

        let modal = select_meeting_settings_modal(&store);
        assert!(modal.visible);
        assert_eq!(modal.channel_id, "C1");
    }

    #[test]
    fn given_other_namespaces_when_dispatched_then_they_are_untouched() {
        let foreign = Arc::new(String::from("other plugin"));
        let mut global = GlobalState::new();
        global.insert_plugin_state("plugins-other", Arc::clone(&foreign));
        let store = AgendaStore::with_state(global);

        store.dispatch(AgendaAction::CloseMeetingSettingsModal);
        store.dispatch(AgendaAction::QueueInvalidated { channel_id: None });

        let snapshot = store.state();
        let kept = snapshot
            .plugin::<String>("plugins-other")
            .expect("foreign state");
        assert!(Arc::ptr_eq(&kept, &foreign));
        assert!(snapshot.contains(PLUGIN_NAMESPACE));
    }

    #[test]
    fn given_noop_dispatch_when_applied_then_state_identity_is_kept() {
        let store = AgendaStore::new();
        let before = store.agenda_state();

        store.dispatch(AgendaAction::CloseMeetingSettingsModal);

        assert!(Arc::ptr_eq(&before, &store.agenda_state()));
    }

    #[test]
    fn given_cloned_handle_when_dispatched_then_both_handles_observe_it() {
        let store = AgendaStore::new();
        let clone = store.clone();

        clone.dispatch(AgendaAction::QueueInvalidated {
            channel_id: Some(String::from("C1")),
        });

        assert_eq!(store.agenda_state().queued_items.revision, 1);
    }
}
