use anyhow::bail;
use anyhow::Result;
use tokio::sync::mpsc;

use super::ChatEndpoint;
use super::ChatRequest;
use crate::domain::models::Backend;
use crate::domain::models::BackendPrompt;
use crate::domain::models::BackendResponse;
use crate::domain::models::Event;

impl ChatEndpoint {
    fn with_url(url: String) -> ChatEndpoint {
        return ChatEndpoint { url };
    }
}

fn to_res(event: Option<Event>) -> Result<BackendResponse> {
    let res = match event.unwrap() {
        Event::BackendPromptResponse(res) => res,
        _ => bail!("Wrong type from recv"),
    };

    return Ok(res);
}

#[tokio::test]
async fn it_gets_completions() -> Result<()> {
    let body = "Hello World";
    let prompt = BackendPrompt::new("Say hi to the world".to_string());

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/chat")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "message": "Say hi to the world",
        })))
        .with_status(200)
        .with_body(body)
        .create();

    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();

    let backend = ChatEndpoint::with_url(server.url());
    backend.get_completion(prompt, &tx).await?;

    mock.assert();

    // Chunk boundaries depend on the transport, so collect until done.
    let mut received = String::new();
    loop {
        let res = to_res(rx.recv().await)?;
        received += &res.text;
        if res.done {
            break;
        }
    }

    assert_eq!(received, "Hello World");

    return Ok(());
}

#[tokio::test]
async fn it_sends_done_for_an_empty_body() -> Result<()> {
    let prompt = BackendPrompt::new("Say nothing".to_string());

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/chat")
        .with_status(200)
        .with_body("")
        .create();

    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();

    let backend = ChatEndpoint::with_url(server.url());
    backend.get_completion(prompt, &tx).await?;

    mock.assert();

    let res = to_res(rx.recv().await)?;
    assert_eq!(res.text, "");
    assert!(res.done);

    return Ok(());
}

#[tokio::test]
async fn it_fails_on_an_error_status() -> Result<()> {
    let prompt = BackendPrompt::new("Say hi to the world".to_string());

    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/chat").with_status(500).create();

    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();

    let backend = ChatEndpoint::with_url(server.url());
    let res = backend.get_completion(prompt, &tx).await;

    mock.assert();

    assert!(res.is_err());
    assert!(rx.try_recv().is_err());

    return Ok(());
}

#[test]
fn it_serializes_the_request_body() {
    let req = ChatRequest {
        message: "Say hi".to_string(),
    };

    assert_eq!(
        serde_json::to_string(&req).unwrap(),
        r#"{"message":"Say hi"}"#
    );
}
