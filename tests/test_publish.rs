//! Publisher tests against fake media-upload and post endpoints.

mod common;

use mtg_artbot::publish::{Credentials, Publisher, TwitterPublisher};
use mtg_artbot::ArtbotError;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn credentials() -> Credentials {
    Credentials {
        consumer_key: "consumer".into(),
        consumer_secret: "consumer-secret".into(),
        access_key: "access".into(),
        access_secret: "access-secret".into(),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn uploads_media_then_posts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/1.1/media/upload.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "media_id": 710511363345354753u64,
            "media_id_string": "710511363345354753",
            "size": 3
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/2/tweets"))
        .and(body_json(json!({
            "text": "Forest (Alpha):\n\nGreen.",
            "media": { "media_ids": ["710511363345354753"] }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": { "id": "1", "text": "Forest (Alpha):\n\nGreen." }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tmp = tempfile::tempdir().unwrap();
    let image = tmp.path().join("image.jpg");
    std::fs::write(&image, [0xFF, 0xD8, 0xFF]).unwrap();
    let base = server.uri();

    tokio::task::spawn_blocking(move || {
        TwitterPublisher::new(common::http_client(), credentials())
            .with_endpoints(
                format!("{}/1.1/media/upload.json", base),
                format!("{}/2/tweets", base),
            )
            .publish_image_post(&image, "Forest (Alpha):\n\nGreen.")
    })
    .await
    .unwrap()
    .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    for req in &requests {
        let auth = req.headers.get("authorization").unwrap().to_str().unwrap();
        assert!(auth.starts_with("OAuth "));
        assert!(auth.contains("oauth_consumer_key=\"consumer\""));
        assert!(auth.contains("oauth_token=\"access\""));
        assert!(auth.contains("oauth_signature="));
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn rejected_post_is_publish_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let tmp = tempfile::tempdir().unwrap();
    let image = tmp.path().join("image.jpg");
    std::fs::write(&image, [0xFF]).unwrap();
    let base = server.uri();

    let err = tokio::task::spawn_blocking(move || {
        TwitterPublisher::new(common::http_client(), credentials())
            .with_endpoints(format!("{}/upload", base), format!("{}/post", base))
            .publish_image_post(&image, "caption")
    })
    .await
    .unwrap()
    .unwrap_err();

    match err {
        ArtbotError::Publish(msg) => {
            assert!(msg.contains("401"));
            assert!(msg.contains("Unauthorized"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    // The post endpoint is never reached.
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[test]
fn missing_image_file_is_io_error() {
    let publisher = TwitterPublisher::new(common::http_client(), credentials())
        .with_endpoints("http://127.0.0.1:9/upload", "http://127.0.0.1:9/post");
    let err = publisher
        .publish_image_post(std::path::Path::new("/nonexistent/image.jpg"), "caption")
        .unwrap_err();
    assert!(matches!(err, ArtbotError::Io(_)));
}
