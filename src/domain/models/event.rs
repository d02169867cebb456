use tui_textarea::Input;

use super::BackendResponse;

pub enum Event {
    BackendPromptResponse(BackendResponse),
    BackendRequestFailed(),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardEnter(),
    KeyboardAltEnter(),
    KeyboardPaste(String),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}
