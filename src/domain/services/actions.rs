use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::BackendBox;
use crate::domain::models::Event;

fn worker_error(err: anyhow::Error, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    tracing::error!(error = ?err, "backend request failed");
    tx.send(Event::BackendRequestFailed())?;

    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        backend: BackendBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        // The UI refuses to submit while a request is in flight, so requests
        // are handled one at a time.
        while let Some(action) = rx.recv().await {
            match action {
                Action::BackendRequest(prompt) => {
                    tracing::debug!(prompt = prompt.text.as_str(), "sending chat request");
                    let res = backend.get_completion(prompt, &tx).await;
                    if let Err(err) = res {
                        worker_error(err, &tx)?;
                    }
                }
            }
        }

        return Ok(());
    }
}
