use mockito::Matcher;
use serde_json::json;

use solis_discharge::config::Config;
use solis_discharge::planner;
use solis_discharge::solis::{self, SolisClient};

fn test_config(api_url: &str) -> Config {
    Config::new(
        api_url.to_string(),
        "testkey".to_string(),
        "testsecret".to_string(),
        "1234567890".to_string(),
        "http://127.0.0.1:1/webhook".to_string(),
    )
}

#[tokio::test]
async fn battery_soc_happy_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/api/inverterDetail")
        .match_header("content-md5", "Zvklxa+pDFmSd3bZz5mdkQ==")
        .match_header("content-type", "application/json;charset=UTF-8")
        .match_header("date", Matcher::Regex("GMT$".into()))
        .match_header(
            "authorization",
            Matcher::Regex(r"^API testkey:[A-Za-z0-9+/]{27}=$".into()),
        )
        .match_body(r#"{"sn":"1234567890"}"#)
        .with_body(r#"{"success":true,"data":{"batteryCapacitySoc":57.5},"msg":"success"}"#)
        .create_async()
        .await;

    let subject = SolisClient::new(&test_config(&server.url()));
    assert_eq!(subject.battery_soc().await, Some(57.5));

    mock.assert_async().await;
}

#[tokio::test]
async fn battery_soc_is_absent_on_api_failure() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/api/inverterDetail")
        .with_body(r#"{"success":false,"msg":"authentication failed"}"#)
        .create_async()
        .await;

    let subject = SolisClient::new(&test_config(&server.url()));
    assert_eq!(subject.battery_soc().await, None);

    mock.assert_async().await;
}

#[tokio::test]
async fn battery_soc_is_absent_on_malformed_payload() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/api/inverterDetail")
        .with_body("not json at all")
        .create_async()
        .await;

    let subject = SolisClient::new(&test_config(&server.url()));
    assert_eq!(subject.battery_soc().await, None);

    mock.assert_async().await;
}

#[tokio::test]
async fn battery_soc_is_absent_when_the_field_is_missing() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/api/inverterDetail")
        .with_body(r#"{"success":true,"data":{},"msg":"success"}"#)
        .create_async()
        .await;

    let subject = SolisClient::new(&test_config(&server.url()));
    assert_eq!(subject.battery_soc().await, None);

    mock.assert_async().await;
}

#[tokio::test]
async fn battery_soc_is_absent_when_the_host_is_unreachable() {
    let subject = SolisClient::new(&test_config("http://127.0.0.1:1"));
    assert_eq!(subject.battery_soc().await, None);
}

#[tokio::test]
async fn set_discharge_schedule_sends_the_control_envelope() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v2/api/control")
        .match_header("content-type", "application/json;charset=UTF-8")
        .match_header(
            "authorization",
            Matcher::Regex(r"^API testkey:[A-Za-z0-9+/]{27}=$".into()),
        )
        .match_body(
            r#"{"cid":103,"inverterSn":"1234567890","value":"100,60,02:05-05:55,00:00-02:00,0,0,00:00-00:00,00:00-00:00,0,0,00:00-00:00,00:00-00:00","language":"2"}"#,
        )
        .with_body(r#"{"data":[{"msg":"set: success<br>read: success"}]}"#)
        .create_async()
        .await;

    let subject = SolisClient::new(&test_config(&server.url()));
    let plan = planner::plan(50.0, 2.0);
    let response = subject.set_discharge_schedule(&plan).await.unwrap();

    assert_eq!(
        response,
        json!({"data": [{"msg": "set: success<br>read: success"}]})
    );
    assert_eq!(
        solis::control_response_message(&response),
        "set: success\nread: success"
    );

    mock.assert_async().await;
}

#[tokio::test]
async fn set_discharge_schedule_propagates_transport_errors() {
    let subject = SolisClient::new(&test_config("http://127.0.0.1:1"));
    let plan = planner::plan(50.0, 2.0);

    assert!(subject.set_discharge_schedule(&plan).await.is_err());
}
