use mockito::Matcher;
use serde_json::json;

use solis_discharge::config::Config;
use solis_discharge::notify::Notifier;

fn test_config(webhook_url: &str) -> Config {
    Config::new(
        "http://127.0.0.1:1".to_string(),
        "testkey".to_string(),
        "testsecret".to_string(),
        "1234567890".to_string(),
        webhook_url.to_string(),
    )
}

#[tokio::test]
async fn send_posts_the_content_payload() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/webhook")
        .match_body(Matcher::Json(json!({"content": "Current Battery SOC: 57.5%"})))
        .with_status(204)
        .create_async()
        .await;

    let subject = Notifier::new(&test_config(&format!("{}/webhook", server.url())));
    subject.send("Current Battery SOC: 57.5%").await;

    mock.assert_async().await;
}

#[tokio::test]
async fn send_swallows_transport_failures() {
    let subject = Notifier::new(&test_config("http://127.0.0.1:1/webhook"));

    // must return normally, not panic or error
    subject.send("Unable to retrieve SOC.").await;
}
