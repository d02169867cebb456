use super::BubbleList;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Author;
use crate::domain::models::Message;

fn seed_messages() -> Vec<Message> {
    Config::set(ConfigKey::Username, "testuser");
    return vec![
        Message::new(Author::User, "Hello"),
        Message::new(Author::Assistant, "Hi!"),
    ];
}

#[test]
fn it_counts_bubble_lines() {
    let mut bubble_list = BubbleList::new();
    bubble_list.set_messages(&seed_messages(), 50);

    // Two single-line bubbles, three rows each.
    assert_eq!(bubble_list.len(), 6);
}

#[test]
fn it_rerenders_a_streaming_last_message() {
    let mut bubble_list = BubbleList::new();
    let mut messages = seed_messages();
    messages.push(Message::new(Author::Assistant, ""));

    bubble_list.set_messages(&messages, 50);
    assert_eq!(bubble_list.len(), 9);

    messages
        .last_mut()
        .unwrap()
        .append("This response is long enough that it wraps onto a second bubble line.");
    bubble_list.set_messages(&messages, 50);

    // The last bubble grew from one content row to two.
    assert_eq!(bubble_list.len(), 10);
}

#[test]
fn it_clears_cache_when_chat_is_cleared() {
    let mut bubble_list = BubbleList::new();
    bubble_list.set_messages(&seed_messages(), 50);
    assert_eq!(bubble_list.len(), 6);

    bubble_list.set_messages(&[], 50);
    assert_eq!(bubble_list.len(), 0);
}

#[test]
fn it_rewraps_on_width_change() {
    let long_text = "This is a really long line that pushes the boundaries of 50 characters across the screen.";
    let messages = vec![Message::new(Author::Assistant, long_text)];

    let mut bubble_list = BubbleList::new();
    bubble_list.set_messages(&messages, 50);
    let wide_len = bubble_list.len();

    bubble_list.set_messages(&messages, 30);
    assert!(bubble_list.len() > wide_len);
}
