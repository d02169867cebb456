use super::SlashCommand;

#[test]
fn it_parses_quit() {
    for text in ["/q", "/quit", "/exit"] {
        let cmd = SlashCommand::parse(text).unwrap();
        assert!(cmd.is_quit());
        assert!(!cmd.is_clear());
        assert!(!cmd.is_help());
    }
}

#[test]
fn it_parses_clear() {
    for text in ["/c", "/clear"] {
        let cmd = SlashCommand::parse(text).unwrap();
        assert!(cmd.is_clear());
    }
}

#[test]
fn it_parses_help() {
    for text in ["/h", "/help"] {
        let cmd = SlashCommand::parse(text).unwrap();
        assert!(cmd.is_help());
    }
}

#[test]
fn it_ignores_trailing_arguments() {
    let cmd = SlashCommand::parse("/clear everything please").unwrap();
    assert!(cmd.is_clear());
}

#[test]
fn it_returns_none_for_normal_text() {
    assert!(SlashCommand::parse("Tell me about terminals").is_none());
}

#[test]
fn it_returns_none_for_unknown_commands() {
    assert!(SlashCommand::parse("/unknown").is_none());
}
