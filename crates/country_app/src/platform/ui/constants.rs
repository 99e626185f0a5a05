use std::time::Duration;

pub const TITLE: &str = "Country Finder";
pub const INPUT_PLACEHOLDER: &str = "Enter a country name here...";
pub const HINT: &str = "Enter: Search | Ctrl+U: Clear | Esc: Quit";
pub const LOADING_TEXT: &str = "Loading...";

pub const CARD_WIDTH: u16 = 34;
/// Six detail lines plus the border.
pub const CARD_HEIGHT: u16 = 8;

/// How long to wait for terminal input before checking for settlements.
pub const TICK: Duration = Duration::from_millis(75);
