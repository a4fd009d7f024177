//! Detail modal state and the view model it shows

use crate::domain::{
    catalog::{Catalog, CatalogError, Podcast, Season},
    text::{episodes_label, long_date},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonRow {
    pub title: String,
    pub episodes: String,
}

/// Everything the detail modal shows for one podcast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodcastDetail {
    pub id: String,
    pub title: String,
    pub image_src: String,
    pub image_alt: String,
    pub description: String,
    pub genre_tags: Vec<String>,
    pub updated: String,
    pub seasons: Vec<SeasonRow>,
}

impl PodcastDetail {
    pub fn new(
        catalog: &Catalog,
        podcast: &Podcast,
        seasons: &[Season],
    ) -> Result<Self, CatalogError> {
        let genre_tags = catalog
            .genre_names(&podcast.genres)?
            .into_iter()
            .map(String::from)
            .collect();

        Ok(Self {
            id: podcast.id.clone(),
            title: podcast.title.clone(),
            image_src: podcast.image.clone(),
            image_alt: podcast.title.clone(),
            description: podcast.description.clone(),
            genre_tags,
            updated: long_date(podcast.updated.date_naive()),
            seasons: seasons
                .iter()
                .map(|season| SeasonRow {
                    title: season.title.clone(),
                    episodes: episodes_label(season.episodes),
                })
                .collect(),
        })
    }
}

/// Detail modal: hidden, or visible with a podcast's detail
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailModal {
    #[default]
    Hidden,
    Visible { detail: Box<PodcastDetail>, scroll: u16 },
}

impl DetailModal {
    pub fn show(&mut self, detail: PodcastDetail) {
        *self = DetailModal::Visible {
            detail: Box::new(detail),
            scroll: 0,
        };
    }

    pub fn hide(&mut self) {
        *self = DetailModal::Hidden;
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, DetailModal::Visible { .. })
    }

    pub fn detail(&self) -> Option<&PodcastDetail> {
        match self {
            DetailModal::Visible { detail, .. } => Some(detail.as_ref()),
            DetailModal::Hidden => None,
        }
    }

    pub fn scroll(&self) -> u16 {
        match self {
            DetailModal::Visible { scroll, .. } => *scroll,
            DetailModal::Hidden => 0,
        }
    }

    pub fn scroll_up(&mut self) {
        if let DetailModal::Visible { scroll, .. } = self {
            *scroll = scroll.saturating_sub(1);
        }
    }

    /// Scroll one row down, never past `max`.
    pub fn scroll_down(&mut self, max: u16) {
        if let DetailModal::Visible { scroll, .. } = self {
            *scroll = scroll.saturating_add(1).min(max);
        }
    }
}
