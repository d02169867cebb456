use chrono::Utc;

use super::Author;
use super::Message;
use super::MessageType;

#[test]
fn it_executes_new() {
    let msg = Message::new(Author::Natter, "Hi there!");
    assert_eq!(msg.author, Author::Natter);
    assert_eq!(msg.author.to_string(), "Natter");
    assert_eq!(msg.text, "Hi there!".to_string());
    assert_eq!(msg.mtype, MessageType::Normal);
}

#[test]
fn it_executes_new_replacing_tabs() {
    let msg = Message::new(Author::Natter, "\t\tHi there!");
    assert_eq!(msg.text, "    Hi there!".to_string());
}

#[test]
fn it_executes_new_with_type() {
    let msg = Message::new_with_type(Author::Natter, MessageType::Error, "It broke!");
    assert_eq!(msg.author, Author::Natter);
    assert_eq!(msg.text, "It broke!".to_string());
    assert_eq!(msg.mtype, MessageType::Error);
}

#[test]
fn it_executes_message_type() {
    let msg = Message::new_with_type(Author::Natter, MessageType::Error, "It broke!");
    assert_eq!(msg.message_type(), MessageType::Error);
}

#[test]
fn it_assigns_unique_ids() {
    let first = Message::new(Author::User, "one");
    let second = Message::new(Author::User, "two");
    assert_ne!(first.id, second.id);
}

#[test]
fn it_records_creation_time() {
    let before = Utc::now();
    let msg = Message::new(Author::User, "hello");
    let after = Utc::now();
    assert!(msg.timestamp >= before);
    assert!(msg.timestamp <= after);
}

#[test]
fn it_executes_append() {
    let mut msg = Message::new(Author::Assistant, "Hi there!");
    msg.append(" It's me!");
    assert_eq!(msg.text, "Hi there! It's me!");
}

#[test]
fn it_executes_append_with_tabs() {
    let mut msg = Message::new(Author::Assistant, "Hi there!");
    msg.append("\tIt's me!");
    assert_eq!(msg.text, "Hi there!  It's me!");
}

#[test]
fn it_executes_append_on_empty_placeholder() {
    let mut msg = Message::new(Author::Assistant, "");
    msg.append("Hello ");
    msg.append("World");
    assert_eq!(msg.text, "Hello World");
    assert_eq!(msg.mtype, MessageType::Normal);
}

#[test]
fn it_executes_replace_with_error() {
    let mut msg = Message::new(Author::Assistant, "partial resp");
    msg.replace_with_error("It broke!");
    assert_eq!(msg.text, "It broke!");
    assert_eq!(msg.mtype, MessageType::Error);
}
