/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for request dispatch and response classification
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints or classification change
*/

mod common;

use std::sync::Arc;

use common::{mount_signin, setup_mock_server, test_client};
use serde_json::{Value, json};
use swgoh_help_adapter::{
    BattlesRequest, ClientConfig, Credentials, MemoryTokenStore, PlayerRequest, SwgohClient,
    SwgohError,
};
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_end_to_end_player_fetch() {
    let server = setup_mock_server().await;
    mount_signin(&server, "abc").await;
    Mock::given(method("POST"))
        .and(path("/swgoh/player/"))
        .and(header("authorization", "Bearer abc"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"allycodes": [213176142]})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"allyCode": 213176142, "name": "X"}])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let players = assert_ok!(client.fetch_player(PlayerRequest::new(213_176_142)).await);

    assert_eq!(
        assert_ok!(serde_json::to_value(&players)),
        json!([{"allyCode": 213176142, "name": "X"}])
    );

    let requests = server.received_requests().await.expect("request recording");
    let paths: Vec<&str> = requests.iter().map(|r| r.url.path()).collect();
    assert_eq!(paths, vec!["/auth/signin", "/swgoh/player/"]);
}

#[tokio::test]
async fn test_ally_code_list_passes_unchanged() {
    let server = setup_mock_server().await;
    mount_signin(&server, "abc").await;
    Mock::given(method("POST"))
        .and(path("/swgoh/player/"))
        .and(body_json(json!({"allycodes": [213176142, 524173817]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let players = assert_ok!(
        client
            .fetch_player(PlayerRequest::new(vec![213_176_142, 524_173_817]))
            .await
    );
    assert!(players.is_empty());
}

#[tokio::test]
async fn test_player_fetch_with_projected_roster() {
    let server = setup_mock_server().await;
    mount_signin(&server, "abc").await;
    Mock::given(method("POST"))
        .and(path("/swgoh/player/"))
        .and(body_json(json!({
            "allycodes": [1],
            "project": {"allyCode": 1, "roster": {"defId": 1, "rarity": 1}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"allyCode": 1, "roster": [{"defId": "BOSSK", "rarity": 7}]}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = PlayerRequest::new(1)
        .project(json!({"allyCode": 1, "roster": {"defId": 1, "rarity": 1}}));
    let players = assert_ok!(client.fetch_player(request).await);

    let roster = players[0].roster.as_ref().expect("roster");
    assert_eq!(roster[0].def_id.as_deref(), Some("BOSSK"));
    assert_eq!(roster[0].rarity, Some(7));
    assert!(roster[0].id.is_none());
    assert!(roster[0].level.is_none());
}

#[tokio::test]
async fn test_player_fetch_with_arena_lists() {
    let server = setup_mock_server().await;
    mount_signin(&server, "abc").await;
    Mock::given(method("POST"))
        .and(path("/swgoh/player/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "allyCode": 213176142,
            "arena": {
                "char": [{"rank": 5, "squad": [{"id": "u1", "defId": "BOSSK", "type": 1}]}],
                "ship": [{"rank": 3, "squad": []}]
            }
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let players = assert_ok!(client.fetch_player(PlayerRequest::new(213_176_142)).await);

    let arena = players[0].arena.as_ref().expect("arena");
    let squads = arena.character.as_ref().expect("char");
    assert_eq!(squads[0].rank, Some(5));
    assert_eq!(
        squads[0].squad.as_ref().expect("squad")[0].def_id.as_deref(),
        Some("BOSSK")
    );
    let fleets = arena.ship.as_ref().expect("ship");
    assert_eq!(fleets[0].rank, Some(3));
    assert!(fleets[0].squad.as_ref().expect("squad").is_empty());
}

#[tokio::test]
async fn test_warning_header_fails_call() {
    let server = setup_mock_server().await;
    mount_signin(&server, "abc").await;
    Mock::given(method("POST"))
        .and(path("/swgoh/battles/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("warning", "deprecated, slow")
                .set_body_json(json!({"updated": 1})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    match client.fetch_battles(BattlesRequest::default()).await {
        Err(SwgohError::UpstreamWarning { warnings }) => {
            assert!(warnings.contains(&"deprecated".to_string()));
            assert!(warnings.contains(&"slow".to_string()));
            assert_eq!(warnings.len(), 2);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let server = setup_mock_server().await;
    mount_signin(&server, "abc").await;
    Mock::given(method("POST"))
        .and(path("/swgoh/player/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .fetch_player(PlayerRequest::new(213_176_142))
        .await
        .unwrap_err();
    assert!(matches!(err, SwgohError::MalformedResponse { status: 200, .. }));
}

#[tokio::test]
async fn test_embedded_error_in_ok_body() {
    let server = setup_mock_server().await;
    mount_signin(&server, "abc").await;
    Mock::given(method("POST"))
        .and(path("/swgoh/player/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "invalid_request",
            "error_description": "allycodes required",
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .fetch_player(PlayerRequest::new(1))
        .await
        .unwrap_err();
    match err {
        SwgohError::Api {
            status,
            code,
            description,
        } => {
            assert_eq!(status, 200);
            assert_eq!(code.as_deref(), Some("invalid_request"));
            assert_eq!(description.as_deref(), Some("allycodes required"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_200_status_is_api_error() {
    let server = setup_mock_server().await;
    mount_signin(&server, "abc").await;
    Mock::given(method("POST"))
        .and(path("/swgoh/data/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "not found"})))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let url = assert_ok!(client.endpoint_url("/swgoh/data/"));
    let err = client
        .send::<Value, _>(url, &json!({"collection": "unitsList"}))
        .await
        .unwrap_err();
    assert!(matches!(err, SwgohError::Api { status: 404, code: None, .. }));
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_send_arbitrary_payload() {
    let server = setup_mock_server().await;
    mount_signin(&server, "abc").await;
    Mock::given(method("POST"))
        .and(path("/swgoh/zetas/"))
        .and(body_json(json!({"anything": ["goes", 1]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"zetas": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let url = assert_ok!(client.endpoint_url("/swgoh/zetas/"));
    let body: Value = assert_ok!(client.send(url, &json!({"anything": ["goes", 1]})).await);
    assert_eq!(body, json!({"zetas": []}));
}

#[tokio::test]
async fn test_transport_failure() {
    // reserve a port, then free it so nothing listens there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);

    let config = ClientConfig {
        protocol: "http".to_string(),
        host: "127.0.0.1".to_string(),
        port: Some(port),
        ..ClientConfig::default()
    };
    let client = assert_ok!(SwgohClient::with_store(
        Credentials::new("u", "p"),
        config,
        Arc::new(MemoryTokenStore::new()),
    ));

    let err = client
        .fetch_player(PlayerRequest::new(1))
        .await
        .unwrap_err();
    assert!(matches!(err, SwgohError::Transport(_)));
    assert!(err.is_retryable());
}
