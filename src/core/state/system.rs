use ratatui::layout::Rect;

use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// Status line content, formatted as `[label] message`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    fn new(label: &str, message: &str, is_error: bool) -> Self {
        let normalized_message = message.replace('\n', " ");
        Self {
            text: format!("[{label}] {normalized_message}"),
            is_error,
        }
    }
}

/// System-related state
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status: Option<StatusMessage>,
    /// Last known terminal area, used for mouse hit testing
    pub viewport: Rect,
}

impl SystemState {
    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![Cmd::Tui(TuiCommand::Suspend)]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![]
            }

            SystemMsg::Resize(width, height) => {
                self.viewport = Rect::new(0, 0, width, height);
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            SystemMsg::UpdateStatusMessage { label, message } => {
                self.status = Some(StatusMessage::new(&label, &message, false));
                vec![]
            }

            SystemMsg::ShowError { label, message } => {
                log::error!("{label}: {message}");
                self.status = Some(StatusMessage::new(&format!("ERR: {label}"), &message, true));
                vec![]
            }

            SystemMsg::ClearStatusMessage => {
                self.status = None;
                vec![]
            }
        }
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|status| status.text.as_str())
    }
}
