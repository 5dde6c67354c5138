use anyhow::Result;

use super::fetch;

#[tokio::test]
async fn it_fetches_and_normalizes_network_info() -> Result<()> {
    let body = r#"{
        "ip": "203.0.113.7",
        "org": "AS3462 Chunghwa Telecom",
        "city": "Taipei",
        "region": "Taiwan",
        "country": "TW"
    }"#;

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/json")
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let info = fetch(&server.url()).await?;

    mock.assert_async().await;
    assert_eq!(info.ip, "203.0.113.7");
    assert_eq!(info.organization(), "Chunghwa Telecom");
    assert_eq!(info.location(), "Taipei, Taiwan, TW");

    return Ok(());
}

#[tokio::test]
async fn it_fails_when_the_payload_has_no_ip() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/json")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let res = fetch(&server.url()).await;

    mock.assert_async().await;
    assert!(res.is_err());
    assert!(res.unwrap_err().to_string().contains("no IP"));
}

#[tokio::test]
async fn it_fails_on_an_error_status() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/json")
        .with_status(503)
        .create_async()
        .await;

    let res = fetch(&server.url()).await;

    mock.assert_async().await;
    assert!(res.unwrap_err().to_string().contains("503"));
}
