//! Plugin state tree: actions, reducers, selectors and a shared store.
//!
//! The host keeps one state tree for every plugin. This plugin's slice
//! lives under [`PLUGIN_NAMESPACE`] and is only ever replaced by
//! reducing an [`AgendaAction`].

mod action;
mod agenda_store;
mod reducer;
pub mod selectors;

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

pub use action::AgendaAction;
pub use agenda_store::AgendaStore;
pub use reducer::{
    AgendaState, MeetingSettingsSlice, ModalState, QueuedItemsSlice,
    reduce_agenda, reduce_meeting_settings, reduce_meeting_settings_modal,
    reduce_queued_items,
};

/// Plugin identifier registered with the host.
pub const PLUGIN_ID: &str = "com.mattermost.agenda";

/// Key of this plugin's state inside the host state tree.
pub const PLUGIN_NAMESPACE: &str = "plugins-com.mattermost.agenda";

/// Sink for agenda actions, provided by the host store.
pub trait Dispatch: Send + Sync {
    fn dispatch(&self, action: AgendaAction);
}

/// Read access to the host state tree.
pub trait HostState {
    /// Return the agenda state stored under `namespace`, if any.
    fn plugin_state(&self, namespace: &str) -> Option<Arc<AgendaState>>;
}

/// Host state tree keyed by plugin namespace.
///
/// Values are opaque to each other; cloning the tree only clones the
/// `Arc` handles.
#[derive(Clone, Default)]
pub struct GlobalState {
    plugins: BTreeMap<String, Arc<dyn Any + Send + Sync>>,
}

impl GlobalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a plugin state under `namespace`, replacing the old one.
    pub fn insert_plugin_state<T: Any + Send + Sync>(
        &mut self,
        namespace: impl Into<String>,
        state: Arc<T>,
    ) {
        self.plugins.insert(namespace.into(), state);
    }

    /// Return the state under `namespace` if it has type `T`.
    pub fn plugin<T: Any + Send + Sync>(
        &self,
        namespace: &str,
    ) -> Option<Arc<T>> {
        let state = Arc::clone(self.plugins.get(namespace)?);
        state.downcast::<T>().ok()
    }

    /// Return whether any state is stored under `namespace`.
    pub fn contains(&self, namespace: &str) -> bool {
        self.plugins.contains_key(namespace)
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.plugins.keys().map(String::as_str)
    }
}

impl fmt::Debug for GlobalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.namespaces()).finish()
    }
}

impl HostState for GlobalState {
    fn plugin_state(&self, namespace: &str) -> Option<Arc<AgendaState>> {
        self.plugin::<AgendaState>(namespace)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{
        AgendaState, GlobalState, HostState, PLUGIN_ID, PLUGIN_NAMESPACE,
    };

    #[test]
    fn given_plugin_id_when_namespaced_then_constant_matches() {
        assert_eq!(PLUGIN_NAMESPACE, format!("plugins-{PLUGIN_ID}"));
    }

    #[test]
    fn given_foreign_state_under_namespace_when_read_then_none_is_returned() {
        let mut global = GlobalState::new();
        global.insert_plugin_state(PLUGIN_NAMESPACE, Arc::new(42_u32));

        assert!(global.contains(PLUGIN_NAMESPACE));
        assert!(global.plugin_state(PLUGIN_NAMESPACE).is_none());
        assert_eq!(
            global.plugin::<u32>(PLUGIN_NAMESPACE).as_deref(),
            Some(&42)
        );
    }

    #[test]
    fn given_agenda_state_when_read_then_same_arc_is_returned() {
        let state = Arc::new(AgendaState::default());
        let mut global = GlobalState::new();
        global.insert_plugin_state(PLUGIN_NAMESPACE, Arc::clone(&state));

        let read = global.plugin_state(PLUGIN_NAMESPACE).expect("state");

        assert!(Arc::ptr_eq(&read, &state));
    }
}
