#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use super::BubbleList;
use super::Scroll;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::BackendPrompt;
use crate::domain::models::BackendResponse;
use crate::domain::models::Message;
use crate::domain::models::SlashCommand;

/// Shown in place of the streamed response when a request fails for any
/// reason. The underlying error only goes to the debug log.
pub const FAILED_REQUEST_TEXT: &str =
    "Error: failed to get a response from the server. Please try again.";

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /clear (/c) - Clears the conversation and starts fresh.
- /help (/h) - Provides this help menu.
- /quit /exit (/q) - Exit Natter.

HOTKEYS:
- Enter - Submit a message.
- Alt+Enter - Insert a new line in the input area.
- Up arrow - Scroll up.
- Down arrow - Scroll down.
- CTRL+U - Page up.
- CTRL+D - Page down.
- CTRL+C - Exit Natter.
        "#;

    return text.trim().to_string();
}

pub struct AppState<'a> {
    pub bubble_list: BubbleList<'a>,
    pub last_known_height: u16,
    pub last_known_width: u16,
    pub messages: Vec<Message>,
    pub scroll: Scroll,
    pub waiting_for_backend: bool,
}

impl AppState<'_> {
    pub fn new() -> AppState<'static> {
        return AppState {
            bubble_list: BubbleList::new(),
            last_known_height: 0,
            last_known_width: 0,
            messages: vec![],
            scroll: Scroll::default(),
            waiting_for_backend: false,
        };
    }

    /// Handles a submitted input line. Returns true when the app should
    /// quit.
    pub fn handle_submit(
        &mut self,
        input: &str,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<bool> {
        let text = input.trim();
        if text.is_empty() || self.waiting_for_backend {
            return Ok(false);
        }

        if let Some(command) = SlashCommand::parse(text) {
            if command.is_quit() {
                return Ok(true);
            }
            if command.is_clear() {
                self.clear_chat();
                return Ok(false);
            }
            if command.is_help() {
                self.add_message(Message::new(Author::Natter, &help_text()));
                return Ok(false);
            }
        }

        self.add_message(Message::new(Author::User, text));
        // The placeholder that accumulates the streamed response.
        self.add_message(Message::new(Author::Assistant, ""));
        self.waiting_for_backend = true;

        tx.send(Action::BackendRequest(BackendPrompt::new(text.to_string())))?;

        return Ok(false);
    }

    pub fn handle_backend_response(&mut self, msg: BackendResponse) {
        if let Some(last_message) = self.messages.last_mut() {
            if last_message.author == Author::Assistant {
                last_message.append(&msg.text);
            }
        }

        if msg.done {
            self.waiting_for_backend = false;
        }

        self.sync_dependants();
    }

    pub fn handle_backend_failure(&mut self) {
        if let Some(last_message) = self.messages.last_mut() {
            if last_message.author == Author::Assistant {
                last_message.replace_with_error(FAILED_REQUEST_TEXT);
            }
        }

        self.waiting_for_backend = false;
        self.sync_dependants();
    }

    pub fn clear_chat(&mut self) {
        self.messages = vec![];
        self.scroll.reset();
        self.sync_dependants();
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
        self.sync_dependants();
        self.scroll.last();
    }

    fn sync_dependants(&mut self) {
        self.bubble_list
            .set_messages(&self.messages, self.last_known_width as usize);

        self.scroll
            .set_state(self.bubble_list.len() as u16, self.last_known_height);

        if self.waiting_for_backend {
            self.scroll.last();
        }
    }
}
