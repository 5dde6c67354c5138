use anyhow::Result;

use super::fetch;

#[tokio::test]
async fn it_fetches_repositories() -> Result<()> {
    let body = r#"[
        {
            "id": 1,
            "name": "parlor",
            "description": "A terminal playground",
            "html_url": "https://example.com/octocat/parlor"
        },
        {
            "id": 2,
            "name": "notes",
            "description": null,
            "html_url": "https://example.com/octocat/notes"
        }
    ]"#;

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/users/octocat/repos?sort=updated&direction=desc")
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let repos = fetch(&server.url(), "octocat").await?;

    mock.assert_async().await;
    assert_eq!(repos.len(), 2);
    assert_eq!(repos[0].name, "parlor");
    assert_eq!(repos[0].blurb(), "A terminal playground");
    assert_eq!(repos[1].blurb(), "See the repository for details.");

    return Ok(());
}

#[tokio::test]
async fn it_fails_with_the_status_code_in_the_message() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/users/octocat/repos?sort=updated&direction=desc")
        .with_status(404)
        .create_async()
        .await;

    let res = fetch(&server.url(), "octocat").await;

    mock.assert_async().await;
    assert!(res.unwrap_err().to_string().contains("404"));
}
