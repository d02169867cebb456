#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use futures::StreamExt;
use serde_derive::Deserialize;
use serde_derive::Serialize;
use tokio::sync::mpsc;

use super::decoder::StreamDecoder;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Backend;
use crate::domain::models::BackendPrompt;
use crate::domain::models::BackendResponse;
use crate::domain::models::Event;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ChatRequest {
    message: String,
}

pub struct ChatEndpoint {
    url: String,
}

impl Default for ChatEndpoint {
    fn default() -> ChatEndpoint {
        return ChatEndpoint {
            url: Config::get(ConfigKey::ApiURL),
        };
    }
}

#[async_trait]
impl Backend for ChatEndpoint {
    #[allow(clippy::implicit_return)]
    async fn get_completion<'a>(
        &self,
        prompt: BackendPrompt,
        tx: &'a mpsc::UnboundedSender<Event>,
    ) -> Result<()> {
        let req = ChatRequest {
            message: prompt.text,
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/chat", url = self.url))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "chat endpoint rejected the request"
            );
            bail!("Chat endpoint returned an error status");
        }

        let mut decoder = StreamDecoder::default();
        let mut stream = res.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let text = decoder.push(&chunk?);
            if text.is_empty() {
                continue;
            }

            tracing::debug!(length = text.len(), "received chunk");
            tx.send(Event::BackendPromptResponse(BackendResponse {
                text,
                done: false,
            }))?;
        }

        // The stream carries no in-band end marker. EOF is the done signal,
        // and anything the decoder still holds is flushed with it.
        tx.send(Event::BackendPromptResponse(BackendResponse {
            text: decoder.flush(),
            done: true,
        }))?;

        return Ok(());
    }
}
