//! Podcast preview card
//!
//! A self-contained card driven by six string attributes. Each attribute
//! setter refreshes only the rendered field it feeds, and a click is reported
//! to whoever registered a selection handler.

use ratatui::{prelude::*, widgets::*};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};
use tokio::sync::mpsc::UnboundedSender;

use crate::domain::text::{format_long_date, truncate_to_width};

/// Rows taken by one card, borders included
pub const CARD_HEIGHT: u16 = 6;

/// Attributes observed by [`PodcastPreview`]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
pub enum PreviewAttribute {
    #[strum(serialize = "data-id")]
    Id,
    #[strum(serialize = "data-image")]
    Image,
    #[strum(serialize = "data-title")]
    Title,
    #[strum(serialize = "data-genres")]
    Genres,
    #[strum(serialize = "data-seasons")]
    Seasons,
    #[strum(serialize = "data-updated")]
    Updated,
}

/// Notification emitted when a preview is clicked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewSelected {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewAttributes {
    pub id: Option<String>,
    pub image: Option<String>,
    pub title: Option<String>,
    pub genres: Option<String>,
    pub seasons: Option<String>,
    pub updated: Option<String>,
}

/// Display strings derived from the attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewFields {
    pub image_src: String,
    pub image_alt: String,
    pub title: String,
    pub seasons: String,
    pub genres: String,
    pub updated: String,
}

#[derive(Debug, Default)]
pub struct PodcastPreview {
    attributes: PreviewAttributes,
    fields: PreviewFields,
    select_tx: Option<UnboundedSender<PreviewSelected>>,
}

impl PodcastPreview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observed_attributes() -> Vec<PreviewAttribute> {
        PreviewAttribute::iter().collect()
    }

    pub fn attributes(&self) -> &PreviewAttributes {
        &self.attributes
    }

    pub fn fields(&self) -> &PreviewFields {
        &self.fields
    }

    pub fn attribute(&self, attribute: PreviewAttribute) -> Option<&str> {
        self.slot(attribute).as_deref()
    }

    fn slot(&self, attribute: PreviewAttribute) -> &Option<String> {
        match attribute {
            PreviewAttribute::Id => &self.attributes.id,
            PreviewAttribute::Image => &self.attributes.image,
            PreviewAttribute::Title => &self.attributes.title,
            PreviewAttribute::Genres => &self.attributes.genres,
            PreviewAttribute::Seasons => &self.attributes.seasons,
            PreviewAttribute::Updated => &self.attributes.updated,
        }
    }

    fn slot_mut(&mut self, attribute: PreviewAttribute) -> &mut Option<String> {
        match attribute {
            PreviewAttribute::Id => &mut self.attributes.id,
            PreviewAttribute::Image => &mut self.attributes.image,
            PreviewAttribute::Title => &mut self.attributes.title,
            PreviewAttribute::Genres => &mut self.attributes.genres,
            PreviewAttribute::Seasons => &mut self.attributes.seasons,
            PreviewAttribute::Updated => &mut self.attributes.updated,
        }
    }

    pub fn set_attribute(&mut self, attribute: PreviewAttribute, value: impl Into<String>) {
        *self.slot_mut(attribute) = Some(value.into());
        self.attribute_changed(attribute);
    }

    pub fn remove_attribute(&mut self, attribute: PreviewAttribute) {
        *self.slot_mut(attribute) = None;
        self.attribute_changed(attribute);
    }

    /// Set an attribute by its `data-*` name. Unobserved names are ignored
    /// and reported with `false`.
    pub fn set_attribute_by_name(&mut self, name: &str, value: impl Into<String>) -> bool {
        match name.parse::<PreviewAttribute>() {
            Ok(attribute) => {
                self.set_attribute(attribute, value);
                true
            }
            Err(_) => false,
        }
    }

    pub fn with_attribute(mut self, attribute: PreviewAttribute, value: impl Into<String>) -> Self {
        self.set_attribute(attribute, value);
        self
    }

    fn attribute_changed(&mut self, attribute: PreviewAttribute) {
        let value = self.slot(attribute).clone().unwrap_or_default();
        match attribute {
            PreviewAttribute::Id => {}
            PreviewAttribute::Image => self.fields.image_src = value,
            PreviewAttribute::Title => {
                self.fields.image_alt.clone_from(&value);
                self.fields.title = value;
            }
            PreviewAttribute::Genres => self.fields.genres = value,
            PreviewAttribute::Seasons => self.fields.seasons = value,
            PreviewAttribute::Updated => self.fields.updated = format_long_date(&value),
        }
    }

    /// Connect the card to a selection handler, replacing any previous one.
    pub fn register_select_handler(&mut self, tx: UnboundedSender<PreviewSelected>) {
        self.select_tx = Some(tx);
    }

    pub fn disconnect(&mut self) {
        self.select_tx = None;
    }

    pub fn is_connected(&self) -> bool {
        self.select_tx.is_some()
    }

    /// Emit one [`PreviewSelected`] carrying this card's id.
    ///
    /// Returns whether a notification was sent; a disconnected card or one
    /// without an id sends nothing.
    pub fn click(&self) -> bool {
        let Some(tx) = &self.select_tx else {
            return false;
        };
        match self.attribute(PreviewAttribute::Id) {
            Some(id) if !id.is_empty() => {
                let sent = tx
                    .send(PreviewSelected { id: id.to_string() })
                    .is_ok();
                if !sent {
                    log::warn!("Preview {id} clicked but its handler is gone");
                }
                sent
            }
            _ => false,
        }
    }

    pub fn widget(&self, selected: bool) -> PreviewCard<'_> {
        PreviewCard {
            fields: &self.fields,
            selected,
        }
    }
}

/// Renderable view of a [`PodcastPreview`]
pub struct PreviewCard<'a> {
    fields: &'a PreviewFields,
    selected: bool,
}

impl PreviewCard<'_> {
    fn card_style() -> Style {
        Style::default().fg(Color::Gray).bg(Color::Reset)
    }

    fn border_style(&self) -> Style {
        if self.selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    fn labelled(label: &'static str, value: &str, width: usize) -> Line<'static> {
        let value = truncate_to_width(value, width.saturating_sub(label.len()));
        Line::from(vec![
            Span::styled(label, Style::default().fg(Color::DarkGray)),
            Span::raw(value),
        ])
    }
}

impl Widget for PreviewCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        // Nothing the host drew underneath may show through.
        Clear.render(area, buf);

        let inner_width = area.width.saturating_sub(2) as usize;
        let title = truncate_to_width(&self.fields.title, inner_width.saturating_sub(2));
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.border_style())
            .title(Span::styled(
                format!(" {title} "),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ))
            .style(Self::card_style());

        let image = truncate_to_width(&self.fields.image_src, inner_width);
        let lines = vec![
            Line::styled(image, Style::default().fg(Color::Blue).italic()),
            Self::labelled("Seasons: ", &self.fields.seasons, inner_width),
            Self::labelled("Genres: ", &self.fields.genres, inner_width),
            Self::labelled("Updated: ", &self.fields.updated, inner_width),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
