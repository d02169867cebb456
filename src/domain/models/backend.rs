use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

use super::Event;

pub struct BackendPrompt {
    pub text: String,
}

impl BackendPrompt {
    pub fn new(text: String) -> BackendPrompt {
        return BackendPrompt { text };
    }
}

pub struct BackendResponse {
    pub text: String,
    pub done: bool,
}

#[async_trait]
pub trait Backend {
    /// Sends a prompt to the chat endpoint. The streamed response body is
    /// decoded to text incrementally, and each decoded fragment is passed
    /// back through the channel as it arrives.
    ///
    /// Upon receiving the full response, a final `done` boolean is provided
    /// as the last message to the channel.
    async fn get_completion<'a>(
        &self,
        prompt: BackendPrompt,
        tx: &'a mpsc::UnboundedSender<Event>,
    ) -> Result<()>;
}

pub type BackendBox = Box<dyn Backend + Send + Sync>;
