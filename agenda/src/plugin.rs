//! Registration of the agenda plugin with a host.

use std::sync::Arc;

use serde::Deserialize;

use crate::actions::open_meeting_settings_modal;
use crate::store::{AgendaAction, Dispatch, PLUGIN_ID, PLUGIN_NAMESPACE};

/// Label of the channel header action that opens the settings modal.
pub const HEADER_ACTION_LABEL: &str = "Agenda Settings";
/// Title of the right-hand sidebar.
pub const SIDEBAR_TITLE: &str = "Agenda";

/// Components the plugin contributes to the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    MeetingSettingsModal,
    QueueSidebar,
}

/// Handler invoked with the id of the channel whose header was used.
pub type ChannelActionHandler = Box<dyn Fn(&str) + Send + Sync>;
/// Handler invoked for each matching websocket event.
pub type WebSocketHandler = Box<dyn Fn(&WebSocketMessage) + Send + Sync>;

/// Websocket event pushed by the server.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WebSocketMessage {
    pub event: String,
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default)]
    pub broadcast: WebSocketBroadcast,
}

/// Audience of a websocket event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WebSocketBroadcast {
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub user_id: String,
}

impl WebSocketMessage {
    /// Return the channel the event is about, if it names one.
    pub fn channel_id(&self) -> Option<&str> {
        self.data
            .get("channel_id")
            .and_then(serde_json::Value::as_str)
            .filter(|id| !id.is_empty())
            .or_else(|| {
                Some(self.broadcast.channel_id.as_str())
                    .filter(|id| !id.is_empty())
            })
    }
}

/// Extension points offered by the host.
pub trait PluginRegistry {
    fn register_reducer(&mut self, namespace: &str);
    fn register_root_component(&mut self, kind: ComponentKind);
    fn register_channel_header_menu_action(
        &mut self,
        label: &str,
        handler: ChannelActionHandler,
    );
    fn register_right_hand_sidebar_component(
        &mut self,
        kind: ComponentKind,
        title: &str,
    );
    fn register_websocket_event_handler(
        &mut self,
        event: &str,
        handler: WebSocketHandler,
    );
}

/// Return the websocket event announcing queue changes.
pub fn queue_list_event() -> String {
    format!("custom_{PLUGIN_ID}_list")
}

pub struct AgendaPlugin;

impl AgendaPlugin {
    /// Wire the plugin's state, components and handlers into the host.
    pub fn initialize(
        registry: &mut dyn PluginRegistry,
        dispatch: Arc<dyn Dispatch>,
    ) {
        registry.register_reducer(PLUGIN_NAMESPACE);
        registry.register_root_component(ComponentKind::MeetingSettingsModal);

        let header_dispatch = Arc::clone(&dispatch);
        registry.register_channel_header_menu_action(
            HEADER_ACTION_LABEL,
            Box::new(move |channel_id| {
                header_dispatch
                    .dispatch(open_meeting_settings_modal(channel_id));
            }),
        );

        registry.register_right_hand_sidebar_component(
            ComponentKind::QueueSidebar,
            SIDEBAR_TITLE,
        );

        registry.register_websocket_event_handler(
            &queue_list_event(),
            Box::new(move |message| {
                dispatch.dispatch(AgendaAction::QueueInvalidated {
                    channel_id: message.channel_id().map(str::to_string),
                });
            }),
        );

        log::debug!("agenda plugin registered under {PLUGIN_NAMESPACE}");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;
    use serde_json::json;

    use super::{
        AgendaPlugin, ChannelActionHandler, ComponentKind, HEADER_ACTION_LABEL,
        PluginRegistry, SIDEBAR_TITLE, WebSocketHandler, WebSocketMessage,
        queue_list_event,
    };
    use crate::store::{AgendaAction, Dispatch, PLUGIN_NAMESPACE};

    #[derive(Default)]
    struct RecordingDispatch {
        actions: Mutex<Vec<AgendaAction>>,
    }

    impl Dispatch for RecordingDispatch {
        fn dispatch(&self, action: AgendaAction) {
            self.actions.lock().push(action);
        }
    }

    #[derive(Default)]
    struct RecordingRegistry {
        reducers: Vec<String>,
        root_components: Vec<ComponentKind>,
        header_actions: Vec<(String, ChannelActionHandler)>,
        sidebars: Vec<(ComponentKind, String)>,
        websocket_handlers: Vec<(String, WebSocketHandler)>,
    }

    impl PluginRegistry for RecordingRegistry {
        fn register_reducer(&mut self, namespace: &str) {
            self.reducers.push(namespace.to_string());
        }

        fn register_root_component(&mut self, kind: ComponentKind) {
            self.root_components.push(kind);
        }

        fn register_channel_header_menu_action(
            &mut self,
            label: &str,
            handler: ChannelActionHandler,
        ) {
            self.header_actions.push((label.to_string(), handler));
        }

        fn register_right_hand_sidebar_component(
            &mut self,
            kind: ComponentKind,
            title: &str,
        ) {
            self.sidebars.push((kind, title.to_string()));
        }

        fn register_websocket_event_handler(
            &mut self,
            event: &str,
            handler: WebSocketHandler,
        ) {
            self.websocket_handlers.push((event.to_string(), handler));
        }
    }

    fn initialized() -> (RecordingRegistry, Arc<RecordingDispatch>) {
        let mut registry = RecordingRegistry::default();
        let dispatch = Arc::new(RecordingDispatch::default());
        AgendaPlugin::initialize(&mut registry, dispatch.clone());
        (registry, dispatch)
    }

    #[test]
    fn given_host_registry_when_initialized_then_every_hook_is_registered() {
        let (registry, _dispatch) = initialized();

        assert_eq!(registry.reducers, vec![PLUGIN_NAMESPACE.to_string()]);
        assert_eq!(
            registry.root_components,
            vec![ComponentKind::MeetingSettingsModal]
        );
        assert_eq!(
            registry.sidebars,
            vec![(ComponentKind::QueueSidebar, SIDEBAR_TITLE.to_string())]
        );
        assert_eq!(registry.header_actions.len(), 1);
        assert_eq!(registry.header_actions[0].0, HEADER_ACTION_LABEL);
        assert_eq!(registry.websocket_handlers.len(), 1);
        assert_eq!(
            registry.websocket_handlers[0].0,
            "custom_com.mattermost.agenda_list"
        );
        assert_eq!(registry.websocket_handlers[0].0, queue_list_event());
    }

    #[test]
    fn given_header_action_when_invoked_then_modal_open_is_dispatched() {
        let (registry, dispatch) = initialized();

        (registry.header_actions[0].1)("C7");

        assert_eq!(
            *dispatch.actions.lock(),
            vec![AgendaAction::OpenMeetingSettingsModal {
                channel_id: String::from("C7"),
            }]
        );
    }

    #[test]
    fn given_list_event_when_delivered_then_queue_is_invalidated() {
        let (registry, dispatch) = initialized();
        let message: WebSocketMessage = serde_json::from_value(json!({
            "event": "custom_com.mattermost.agenda_list",
            "data": { "hashtag": "#dev-Oct05" },
            "broadcast": { "channel_id": "C3", "user_id": "U1" },
        }))
        .expect("message decodes");

        (registry.websocket_handlers[0].1)(&message);

        assert_eq!(
            *dispatch.actions.lock(),
            vec![AgendaAction::QueueInvalidated {
                channel_id: Some(String::from("C3")),
            }]
        );
    }

    #[test]
    fn given_message_without_channel_when_read_then_channel_is_none() {
        let message = WebSocketMessage {
            event: queue_list_event(),
            data: json!({ "channel_id": "" }),
            ..WebSocketMessage::default()
        };

        assert_eq!(message.channel_id(), None);
    }
}
