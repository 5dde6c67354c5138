use anyhow::Result;

use super::Gemini;
use crate::domain::models::Author;
use crate::domain::models::Backend;
use crate::domain::models::RequestContext;
use crate::domain::models::Turn;

impl Gemini {
    fn with_url(url: String) -> Gemini {
        return Gemini {
            url,
            token: "abc".to_string(),
        };
    }
}

fn context() -> RequestContext {
    return RequestContext {
        model: "model-1".to_string(),
        contents: vec![
            Turn::new(Author::Model, "Hey there!"),
            Turn::new(Author::User, "Say hi to the world"),
        ],
    };
}

#[tokio::test]
async fn it_gets_completions() -> Result<()> {
    let body = r#"{
        "candidates": [
            {
                "content": {
                    "role": "model",
                    "parts": [{ "text": "Hello " }, { "text": "World" }]
                }
            }
        ]
    }"#;

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/model-1:generateContent?key=abc")
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let backend = Gemini::with_url(server.url());
    let res = backend.generate(context()).await?;

    mock.assert_async().await;
    assert_eq!(res, Some("Hello World".to_string()));

    return Ok(());
}

#[tokio::test]
async fn it_returns_none_when_the_response_has_no_candidates() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/model-1:generateContent?key=abc")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let backend = Gemini::with_url(server.url());
    let res = backend.generate(context()).await?;

    mock.assert_async().await;
    assert_eq!(res, None);

    return Ok(());
}

#[tokio::test]
async fn it_returns_none_when_the_candidate_text_is_empty() -> Result<()> {
    let body = r#"{
        "candidates": [
            { "content": { "role": "model", "parts": [{ "text": "" }] } }
        ]
    }"#;

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/model-1:generateContent?key=abc")
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let backend = Gemini::with_url(server.url());
    let res = backend.generate(context()).await?;

    mock.assert_async().await;
    assert_eq!(res, None);

    return Ok(());
}

#[tokio::test]
async fn it_fails_with_the_status_code_in_the_message() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/model-1:generateContent?key=abc")
        .with_status(400)
        .create_async()
        .await;

    let backend = Gemini::with_url(server.url());
    let res = backend.generate(context()).await;

    mock.assert_async().await;
    assert!(res.is_err());
    assert!(res.unwrap_err().to_string().contains("400"));

    return Ok(());
}

#[tokio::test]
async fn it_fails_without_a_token() {
    let backend = Gemini {
        url: "https://localhost".to_string(),
        token: "".to_string(),
    };

    let res = backend.generate(context()).await;
    assert!(res.is_err());
}
