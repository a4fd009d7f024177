use crossterm::event::{KeyEvent, MouseEvent};
use serde::{Deserialize, Serialize};

/// Raw messages from the terminal
/// These represent unprocessed external events that need to be translated to domain events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Tick,
    Render,
    Resize(u16, u16),
    Quit,

    // User input
    Key(KeyEvent),
    Mouse(MouseEvent),

    // System status
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}
