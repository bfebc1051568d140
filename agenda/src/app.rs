#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use std::sync::Arc;

use agenda_client::SettingsClient;
use chrono::{Local, NaiveDate};
use iced::{Element, Size, Subscription, Task, Theme, window};

use crate::actions::AgendaActions;
use crate::config::{ChannelEntry, HostConfig};
use crate::host::HostRegistry;
use crate::plugin::AgendaPlugin;
use crate::routers;
use crate::store::AgendaStore;
use crate::widgets::meeting_settings::{
    MeetingSettingsEvent, MeetingSettingsWidget,
};
use crate::widgets::queue_sidebar::{QueueSidebarEvent, QueueSidebarWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 720.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Everything the application needs before the first frame.
#[derive(Debug, Clone)]
pub struct AppBoot {
    config: HostConfig,
    client: SettingsClient,
}

impl AppBoot {
    pub fn new(config: HostConfig, client: SettingsClient) -> Self {
        Self { config, client }
    }
}

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Meeting settings widget
    MeetingSettings(MeetingSettingsEvent),
    // Queue sidebar widget
    QueueSidebar(QueueSidebarEvent),
    // Host simulation
    ChannelSelected(ChannelEntry),
    HeaderActionPressed,
    QueueRefreshTick,
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) meeting_settings: MeetingSettingsWidget,
    pub(crate) queue_sidebar: QueueSidebarWidget,
}

/// Root application state: a minimal chat host running the plugin.
pub(crate) struct App {
    pub(crate) config: HostConfig,
    pub(crate) store: AgendaStore,
    pub(crate) actions: AgendaActions,
    pub(crate) registry: HostRegistry,
    pub(crate) active_channel: Option<ChannelEntry>,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new(boot: AppBoot) -> (Self, Task<AppEvent>) {
        let AppBoot { config, client } = boot;

        let store = AgendaStore::new();
        let mut registry = HostRegistry::new();
        AgendaPlugin::initialize(&mut registry, Arc::new(store.clone()));
        let actions = AgendaActions::new(client, Arc::new(store.clone()));

        let active_channel = config.channels.first().cloned();
        if active_channel.is_none() {
            log::warn!("host config lists no channels");
        }

        let mut app = App {
            config,
            store,
            actions,
            registry,
            active_channel,
            widgets: Widgets {
                meeting_settings: MeetingSettingsWidget::new(),
                queue_sidebar: QueueSidebarWidget::new(),
            },
        };

        let task = routers::flow::sync_store(&mut app);
        (app, task)
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        match &self.active_channel {
            Some(channel) => format!("Agenda - {}", channel.name),
            None => String::from("Agenda"),
        }
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }

    /// Return the id of the channel shown in the host.
    pub(crate) fn active_channel_id(&self) -> Option<&str> {
        self.active_channel
            .as_ref()
            .map(|channel| channel.id.as_str())
    }

    /// Return the local date used for hashtag previews.
    pub(crate) fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Run the standalone host until its window closes.
pub fn run(boot: AppBoot) -> iced::Result {
    iced::application(move || App::new(boot.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            min_size: Some(Size {
                width: MIN_WINDOW_WIDTH,
                height: MIN_WINDOW_HEIGHT,
            }),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}
