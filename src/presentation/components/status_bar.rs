//! Status bar component
//!
//! Shows the latest status message, or key hints when there is none.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

const LIST_HINTS: &str = "q quit  j/k move  enter open  f/F genre  s sort";
const MODAL_HINTS: &str = "x/esc close  j/k scroll  click outside to close";

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn text(state: &AppState) -> &str {
        match state.system.status_text() {
            Some(text) => text,
            None if state.controller.modal().is_visible() => MODAL_HINTS,
            None => LIST_HINTS,
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let style = match &state.system.status {
            Some(status) if status.is_error => styles.get_or_default("status_error"),
            Some(_) => styles.get_or_default("status"),
            None => styles.get_or_default("status").dim(),
        };
        frame.render_widget(Paragraph::new(Self::text(state)).style(style), area);
    }
}
