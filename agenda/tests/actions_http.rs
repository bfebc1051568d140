use std::sync::Arc;
use std::time::Duration;

use agenda::actions::AgendaActions;
use agenda::store::selectors::{
    select_meeting, select_meeting_settings, select_queued_items,
};
use agenda::store::{AgendaAction, AgendaStore, Dispatch};
use agenda_client::{
    ClientConfig, ClientError, MeetingSettings, SettingsClient, StaticHeaders,
    WeekdaySet,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PLUGIN_ID: &str = "com.mattermost.agenda";
const SETTINGS_PATH: &str = "/plugins/com.mattermost.agenda/api/v1/settings";
const QUEUE_PATH: &str = "/plugins/com.mattermost.agenda/api/v1/queuedItems";

fn actions_for(server: &MockServer) -> (AgendaActions, AgendaStore) {
    let config =
        ClientConfig::new(&server.uri(), PLUGIN_ID).expect("valid server url");
    let client =
        SettingsClient::new(config, Arc::new(StaticHeaders::default()))
            .expect("client builds");
    let store = AgendaStore::new();
    let actions = AgendaActions::new(client, Arc::new(store.clone()));
    (actions, store)
}

/// Return a base URL whose port has no listener.
fn unreachable_server_url() -> String {
    let listener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("port binds");
    let addr = listener.local_addr().expect("bound address");
    drop(listener);
    format!("http://{addr}")
}

fn settings_body(channel_id: &str, format: &str) -> serde_json::Value {
    json!({
        "channelId": channel_id,
        "hashtagFormat": format,
        "schedule": [2],
    })
}

#[tokio::test]
async fn given_settings_response_when_loaded_then_store_holds_them() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SETTINGS_PATH))
        .and(query_param("channelId", "C1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(settings_body("C1", "Dev-{{Jan02}}")),
        )
        .mount(&server)
        .await;
    let (actions, store) = actions_for(&server);

    let loaded = actions
        .load_settings(String::from("C1"))
        .await
        .expect("settings load");

    let stored = select_meeting(&store).expect("settings dispatched");
    assert!(Arc::ptr_eq(&loaded, &stored));
    assert_eq!(stored.hashtag_format, "Dev-{{Jan02}}");
}

#[tokio::test]
async fn given_failed_fetch_when_loaded_then_settings_slice_is_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SETTINGS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("down"))
        .mount(&server)
        .await;
    let (actions, store) = actions_for(&server);
    let before = select_meeting_settings(&store);

    let result = actions.load_settings(String::from("C1")).await;

    let err = result.expect_err("load should fail");
    assert_eq!(err.status_code(), Some(500));
    assert!(Arc::ptr_eq(&before, &select_meeting_settings(&store)));
}

#[tokio::test]
async fn given_slow_first_load_when_channel_switches_then_newer_load_wins() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SETTINGS_PATH))
        .and(query_param("channelId", "C1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(settings_body("C1", "Old-{{Jan02}}"))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(SETTINGS_PATH))
        .and(query_param("channelId", "C2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(settings_body("C2", "New-{{Jan02}}")),
        )
        .mount(&server)
        .await;
    let (actions, store) = actions_for(&server);

    let (first, second) = tokio::join!(
        actions.load_settings(String::from("C1")),
        actions.load_settings(String::from("C2")),
    );

    assert!(first.is_ok(), "superseded load still returns its result");
    assert!(second.is_ok());
    let stored = select_meeting(&store).expect("settings dispatched");
    assert_eq!(stored.channel_id, "C2");
}

#[tokio::test]
async fn given_saved_settings_when_acknowledged_then_store_holds_draft() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SETTINGS_PATH))
        .and(body_json(json!({
            "channelId": "C1",
            "hashtagFormat": "DEV-{{Jan 2}}",
            "schedule": [1, 3],
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"Status": "OK"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let (actions, store) = actions_for(&server);
    let draft = MeetingSettings::new(
        "C1",
        "DEV-{{Jan 2}}",
        WeekdaySet::from_indices([3, 1]).expect("valid indices"),
    );

    let saved = actions
        .save_settings(draft.clone())
        .await
        .expect("settings saved");

    assert_eq!(*saved, draft);
    let stored = select_meeting(&store).expect("settings dispatched");
    assert_eq!(*stored, draft);
}

#[tokio::test]
async fn given_empty_queue_when_loaded_then_channel_slice_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(QUEUE_PATH))
        .and(query_param("channelId", "C1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    let (actions, store) = actions_for(&server);

    let items = actions
        .load_queued_items(String::from("C1"))
        .await
        .expect("queue load");

    assert!(items.is_empty());
    let queue = select_queued_items(&store);
    let fetched = queue.items_for("C1").expect("queue fetched for C1");
    assert!(fetched.is_empty());
    assert!(queue.items_for("C2").is_none());
}

#[tokio::test]
async fn given_queue_invalidated_when_dispatched_then_revision_advances() {
    let server = MockServer::start().await;
    let (actions, store) = actions_for(&server);
    let before = select_queued_items(&store).revision;

    actions.invalidate_queue(Some(String::from("C1")));
    store.dispatch(AgendaAction::QueueInvalidated { channel_id: None });

    assert_eq!(select_queued_items(&store).revision, before + 2);
}

#[tokio::test]
async fn given_unreachable_server_when_loaded_then_slice_is_untouched() {
    let config = ClientConfig::new(&unreachable_server_url(), PLUGIN_ID)
        .expect("valid server url");
    let client =
        SettingsClient::new(config, Arc::new(StaticHeaders::default()))
            .expect("client builds");
    let store = AgendaStore::new();
    let actions = AgendaActions::new(client, Arc::new(store.clone()));
    let before = select_meeting_settings(&store);

    let err = actions
        .load_settings(String::from("C1"))
        .await
        .expect_err("load should fail");

    assert!(matches!(*err, ClientError::Network(_)), "got {err:?}");
    assert!(Arc::ptr_eq(&before, &select_meeting_settings(&store)));
}

#[tokio::test]
async fn given_failed_save_when_load_in_flight_then_load_still_lands() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SETTINGS_PATH))
        .and(query_param("channelId", "C1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(settings_body("C1", "Dev-{{Jan02}}"))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(SETTINGS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("down"))
        .mount(&server)
        .await;
    let (actions, store) = actions_for(&server);
    let draft = MeetingSettings::new(
        "C1",
        "Ops-{{Jan 2}}",
        WeekdaySet::from_indices([1]).expect("valid indices"),
    );

    let (loaded, saved) = tokio::join!(
        actions.load_settings(String::from("C1")),
        actions.save_settings(draft),
    );

    assert!(loaded.is_ok());
    assert!(saved.is_err());
    let stored = select_meeting(&store).expect("settings dispatched");
    assert_eq!(stored.hashtag_format, "Dev-{{Jan02}}");
}
