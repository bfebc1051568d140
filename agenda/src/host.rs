//! In-process plugin host used by the standalone application.

use std::collections::BTreeSet;

use crate::plugin::{
    ChannelActionHandler, ComponentKind, PluginRegistry, WebSocketHandler,
    WebSocketMessage,
};

struct HeaderAction {
    label: String,
    handler: ChannelActionHandler,
}

struct WebSocketSubscription {
    event: String,
    handler: WebSocketHandler,
}

/// Registry recording everything a plugin contributed.
#[derive(Default)]
pub struct HostRegistry {
    reducers: BTreeSet<String>,
    root_components: Vec<ComponentKind>,
    header_actions: Vec<HeaderAction>,
    sidebar: Option<(ComponentKind, String)>,
    websocket_handlers: Vec<WebSocketSubscription>,
}

impl std::fmt::Debug for HostRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostRegistry")
            .field("reducers", &self.reducers)
            .field("root_components", &self.root_components)
            .field("header_actions", &self.header_action_labels())
            .field("sidebar", &self.sidebar)
            .field("websocket_handlers", &self.websocket_handlers.len())
            .finish()
    }
}

impl HostRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invoke the header action registered under `label`.
    ///
    /// Returns `false` when no such action exists.
    pub fn trigger_header_action(&self, label: &str, channel_id: &str) -> bool {
        match self.header_actions.iter().find(|a| a.label == label) {
            Some(action) => {
                (action.handler)(channel_id);
                true
            },
            None => {
                log::warn!("no header action registered as {label}");
                false
            },
        }
    }

    /// Deliver a websocket event, returning how many handlers ran.
    pub fn deliver(&self, message: &WebSocketMessage) -> usize {
        let mut delivered = 0;
        for subscription in &self.websocket_handlers {
            if subscription.event == message.event {
                (subscription.handler)(message);
                delivered += 1;
            }
        }
        delivered
    }

    // --- Read access ---

    pub fn has_reducer(&self, namespace: &str) -> bool {
        self.reducers.contains(namespace)
    }

    pub fn has_root_component(&self, kind: ComponentKind) -> bool {
        self.root_components.contains(&kind)
    }

    pub fn header_action_labels(&self) -> Vec<&str> {
        self.header_actions
            .iter()
            .map(|action| action.label.as_str())
            .collect()
    }

    pub fn sidebar_title(&self) -> Option<&str> {
        self.sidebar.as_ref().map(|(_, title)| title.as_str())
    }
}

impl PluginRegistry for HostRegistry {
    fn register_reducer(&mut self, namespace: &str) {
        self.reducers.insert(namespace.to_string());
    }

    fn register_root_component(&mut self, kind: ComponentKind) {
        if !self.root_components.contains(&kind) {
            self.root_components.push(kind);
        }
    }

    fn register_channel_header_menu_action(
        &mut self,
        label: &str,
        handler: ChannelActionHandler,
    ) {
        self.header_actions.push(HeaderAction {
            label: label.to_string(),
            handler,
        });
    }

    fn register_right_hand_sidebar_component(
        &mut self,
        kind: ComponentKind,
        title: &str,
    ) {
        self.sidebar = Some((kind, title.to_string()));
    }

    fn register_websocket_event_handler(
        &mut self,
        event: &str,
        handler: WebSocketHandler,
    ) {
        self.websocket_handlers.push(WebSocketSubscription {
            event: event.to_string(),
            handler,
        });
    }
}
