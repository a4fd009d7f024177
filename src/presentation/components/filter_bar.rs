//! Header with the genre and sort selection controls

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

#[derive(Debug, Clone, Default)]
pub struct FilterBarComponent;

impl FilterBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn line(state: &AppState) -> Line<'static> {
        let controller = &state.controller;
        let label = Style::default().fg(Color::DarkGray);
        let value = Style::default().bold();
        let count = controller.previews().len();

        Line::from(vec![
            Span::styled("Genre ", label),
            Span::styled(format!("< {} >", controller.genre_filter_label()), value),
            Span::raw("   "),
            Span::styled("Sort ", label),
            Span::styled(format!("< {} >", controller.sort_order().label()), value),
            Span::raw("   "),
            Span::styled(
                if count == 1 {
                    "1 podcast".to_string()
                } else {
                    format!("{count} podcasts")
                },
                label,
            ),
        ])
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Podcasts ")
            .style(state.config.config.styles.get_or_default("header"));
        frame.render_widget(Paragraph::new(Self::line(state)).block(block), area);
    }
}
