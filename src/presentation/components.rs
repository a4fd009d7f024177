//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.
//! [`ScreenLayout`] is shared with the translator so mouse hit testing sees
//! the same regions that were drawn.

use ratatui::prelude::*;

use crate::core::state::AppState;

pub mod detail_modal;
pub mod filter_bar;
pub mod preview;
pub mod preview_list;
pub mod status_bar;

pub use detail_modal::DetailModalComponent;
pub use filter_bar::FilterBarComponent;
pub use preview_list::PreviewListComponent;
pub use status_bar::StatusBarComponent;

pub const HEADER_HEIGHT: u16 = 3;
pub const STATUS_HEIGHT: u16 = 1;

/// Regions of the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub list: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let [header, list, status] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .areas(area);
        Self {
            header,
            list,
            status,
        }
    }
}

/// Collection of all components
#[derive(Debug, Default)]
pub struct Components {
    pub filter_bar: FilterBarComponent,
    pub preview_list: PreviewListComponent,
    pub detail_modal: DetailModalComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render all components, the detail modal last so it overlays the rest.
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        let layout = ScreenLayout::new(area);

        self.filter_bar.view(state, frame, layout.header);
        self.preview_list.view(state, frame, layout.list);
        self.status_bar.view(state, frame, layout.status);

        if state.controller.modal().is_visible() {
            self.detail_modal.view(state, frame, area);
        }
    }
}
