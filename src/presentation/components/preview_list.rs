//! Preview list component
//!
//! Stacks one [`PreviewCard`](super::preview::PreviewCard) per rendered
//! preview and keeps the selected card in view.

use ratatui::{prelude::*, widgets::*};

use crate::{core::state::AppState, presentation::components::preview::CARD_HEIGHT};

#[derive(Debug, Clone, Default)]
pub struct PreviewListComponent;

impl PreviewListComponent {
    pub fn new() -> Self {
        Self
    }

    /// Number of whole cards that fit in `area`.
    pub fn visible_cards(area: Rect) -> usize {
        (area.height / CARD_HEIGHT) as usize
    }

    /// Index of the first card drawn, chosen so `selected` is visible.
    pub fn scroll_offset(area: Rect, selected: Option<usize>, len: usize) -> usize {
        let visible = Self::visible_cards(area).max(1);
        let selected = selected.unwrap_or(0).min(len.saturating_sub(1));
        (selected + 1).saturating_sub(visible)
    }

    /// Area of the card for preview `index`, if it is on screen.
    ///
    /// A list shorter than one card still shows the first visible card,
    /// clipped to the rows available.
    pub fn card_area(area: Rect, offset: usize, index: usize) -> Option<Rect> {
        let slot = index.checked_sub(offset)?;
        if Self::visible_cards(area) == 0 {
            return (slot == 0 && !area.is_empty()).then_some(area);
        }
        if slot >= Self::visible_cards(area) {
            return None;
        }
        Some(Rect::new(
            area.x,
            area.y + slot as u16 * CARD_HEIGHT,
            area.width,
            CARD_HEIGHT,
        ))
    }

    /// Preview index under the terminal cell (`column`, `row`).
    pub fn hit_test(
        area: Rect,
        selected: Option<usize>,
        len: usize,
        column: u16,
        row: u16,
    ) -> Option<usize> {
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        let offset = Self::scroll_offset(area, selected, len);
        let index = offset + ((row - area.y) / CARD_HEIGHT) as usize;
        Self::card_area(area, offset, index)
            .filter(|_| index < len)
            .map(|_| index)
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let style = state.config.config.styles.get_or_default("list");
        frame.render_widget(Block::default().style(style), area);

        let controller = &state.controller;
        let previews = controller.previews();
        if previews.is_empty() {
            let empty = Paragraph::new("No podcasts match this genre.")
                .style(style.italic())
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let offset = Self::scroll_offset(area, controller.selected(), previews.len());
        for (index, preview) in previews.iter().enumerate().skip(offset) {
            let Some(card_area) = Self::card_area(area, offset, index) else {
                break;
            };
            let selected = controller.selected() == Some(index);
            frame.render_widget(preview.widget(selected), card_area);
        }
    }
}
