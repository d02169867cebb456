#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use super::Author;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MessageType {
    Normal,
    Error,
}

#[derive(Clone)]
pub struct Message {
    pub id: String,
    pub author: Author,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    mtype: MessageType,
}

impl Message {
    pub fn new(author: Author, text: &str) -> Message {
        return Message {
            id: Uuid::new_v4().to_string(),
            author,
            text: text.to_string().replace('\t', "  "),
            timestamp: Utc::now(),
            mtype: MessageType::Normal,
        };
    }

    pub fn new_with_type(author: Author, mtype: MessageType, text: &str) -> Message {
        let mut message = Message::new(author, text);
        message.mtype = mtype;
        return message;
    }

    pub fn message_type(&self) -> MessageType {
        return self.mtype;
    }

    pub fn append(&mut self, text: &str) {
        self.text += &text.replace('\t', "  ");
    }

    /// Replaces the entire body and flags the message as an error. Used when
    /// a failed request overwrites the streaming placeholder.
    pub fn replace_with_error(&mut self, text: &str) {
        self.text = text.to_string().replace('\t', "  ");
        self.mtype = MessageType::Error;
    }
}
