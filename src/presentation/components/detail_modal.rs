//! Detail modal component
//!
//! Draws the visible [`DetailModal`](crate::core::state::detail::DetailModal)
//! centered over a dimmed backdrop. The content and close button areas are
//! exposed so mouse clicks can be routed to the same regions.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::{detail::PodcastDetail, AppState};

pub const CLOSE_LABEL: &str = "[x] close";

#[derive(Debug, Clone, Default)]
pub struct DetailModalComponent;

impl DetailModalComponent {
    pub fn new() -> Self {
        Self
    }

    /// Modal content area inside the full screen `area`.
    pub fn content_area(area: Rect) -> Rect {
        let width = (area.width * 4 / 5).max(area.width.min(40));
        let height = (area.height * 4 / 5).max(area.height.min(12));
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }

    /// The close button on the top border of `content`.
    pub fn close_button_area(content: Rect) -> Rect {
        let width = (CLOSE_LABEL.len() as u16).min(content.width.saturating_sub(2));
        Rect::new(
            content.right().saturating_sub(width + 2),
            content.y,
            width,
            1,
        )
    }

    /// Largest scroll offset that still shows the last body row when the
    /// modal is drawn inside `area`.
    pub fn max_scroll(detail: &PodcastDetail, area: Rect) -> u16 {
        let inner = Block::bordered().inner(Self::content_area(area));
        if inner.width == 0 {
            return 0;
        }
        let rows = Paragraph::new(Self::body(detail, Style::default()))
            .wrap(Wrap { trim: false })
            .line_count(inner.width);
        u16::try_from(rows.saturating_sub(usize::from(inner.height))).unwrap_or(u16::MAX)
    }

    fn body(detail: &PodcastDetail, tag_style: Style) -> Vec<Line<'static>> {
        let label = Style::default().fg(Color::DarkGray);

        let mut tags: Vec<Span<'static>> = vec![Span::styled("Genres:  ", label)];
        for (i, tag) in detail.genre_tags.iter().enumerate() {
            if i > 0 {
                tags.push(Span::raw(" "));
            }
            tags.push(Span::styled(format!(" {tag} "), tag_style));
        }

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Image:   ", label),
                Span::styled(detail.image_src.clone(), Style::default().fg(Color::Blue)),
                Span::styled(format!(" ({})", detail.image_alt), label),
            ]),
            Line::from(tags),
            Line::from(vec![
                Span::styled("Updated: ", label),
                Span::raw(detail.updated.clone()),
            ]),
            Line::default(),
            Line::raw(detail.description.clone()),
            Line::default(),
            Line::styled("Seasons", Style::default().bold().underlined()),
        ];

        if detail.seasons.is_empty() {
            lines.push(Line::styled("No seasons listed.", label.italic()));
        }
        lines.extend(detail.seasons.iter().map(|season| {
            Line::from(vec![
                Span::raw(format!("  {}", season.title)),
                Span::styled(format!("  {}", season.episodes), label),
            ])
        }));
        lines
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let modal = state.controller.modal();
        let Some(detail) = modal.detail() else {
            return;
        };
        let styles = &state.config.config.styles;

        // backdrop
        frame
            .buffer_mut()
            .set_style(area, Style::default().add_modifier(Modifier::DIM));

        let content = Self::content_area(area);
        frame.render_widget(Clear, content);

        let block = Block::bordered()
            .border_type(BorderType::Double)
            .title(Line::from(format!(" {} ", detail.title)).bold())
            .style(styles.get_or_default("modal"));
        let scroll = modal.scroll().min(Self::max_scroll(detail, area));
        let paragraph = Paragraph::new(Self::body(detail, styles.get_or_default("genre_tag")))
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        frame.render_widget(paragraph, content);

        let close = Span::styled(CLOSE_LABEL, Style::default().fg(Color::Red).bold());
        frame.render_widget(close, Self::close_button_area(content));
    }
}
