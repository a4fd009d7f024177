use serde::{Deserialize, Serialize};

/// Messages for the detail modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailMsg {
    Close,
    ScrollUp,
    ScrollDown,
}
