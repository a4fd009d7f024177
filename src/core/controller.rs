//! Catalog controller
//!
//! Owns the genre filter and sort order, keeps one [`PodcastPreview`] per
//! visible podcast and drives the detail modal from preview clicks.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::{
    core::state::detail::{DetailModal, PodcastDetail},
    domain::{
        catalog::{Catalog, CatalogError, Podcast},
        text::timestamp_attribute,
        view::{self, GenreFilter, SortOrder},
    },
    presentation::components::preview::{PodcastPreview, PreviewAttribute, PreviewSelected},
};

pub const ALL_GENRES_LABEL: &str = "ALL GENRES";

/// Options offered by the sort control
pub const SORT_OPTIONS: [SortOrder; 2] = [SortOrder::MostRecent, SortOrder::Oldest];

#[derive(Debug)]
pub struct CatalogController {
    catalog: Arc<Catalog>,
    genre_filter: GenreFilter,
    sort_order: SortOrder,
    previews: Vec<PodcastPreview>,
    selected: Option<usize>,
    modal: DetailModal,
    select_tx: UnboundedSender<PreviewSelected>,
    select_rx: UnboundedReceiver<PreviewSelected>,
}

impl CatalogController {
    /// Create the controller and render the initial view.
    pub fn new(
        catalog: Arc<Catalog>,
        genre_filter: GenreFilter,
        sort_order: SortOrder,
    ) -> Result<Self, CatalogError> {
        let (select_tx, select_rx) = mpsc::unbounded_channel();
        let mut controller = Self {
            catalog,
            genre_filter,
            sort_order,
            previews: vec![],
            selected: None,
            modal: DetailModal::default(),
            select_tx,
            select_rx,
        };
        controller.refresh()?;
        Ok(controller)
    }

    /// Filter and order `podcasts` (see [`view::compute_view`]).
    pub fn compute_view<'a>(
        podcasts: &'a [Podcast],
        genre_filter: &GenreFilter,
        sort_order: SortOrder,
    ) -> Vec<&'a Podcast> {
        view::compute_view(podcasts, genre_filter, sort_order)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn genre_filter(&self) -> GenreFilter {
        self.genre_filter
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn previews(&self) -> &[PodcastPreview] {
        &self.previews
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn modal(&self) -> &DetailModal {
        &self.modal
    }

    /// Recompute the view from the current filter and sort order and render it.
    pub fn refresh(&mut self) -> Result<(), CatalogError> {
        let catalog = Arc::clone(&self.catalog);
        let view = Self::compute_view(catalog.podcasts(), &self.genre_filter, self.sort_order);
        self.render(&view)
    }

    /// Replace the preview list with one connected preview per podcast in `view`.
    pub fn render(&mut self, view: &[&Podcast]) -> Result<(), CatalogError> {
        self.previews.clear();
        self.selected = None;

        let previews = view
            .iter()
            .map(|podcast| {
                let mut preview = PodcastPreview::new()
                    .with_attribute(PreviewAttribute::Id, podcast.id.as_str())
                    .with_attribute(PreviewAttribute::Image, podcast.image.as_str())
                    .with_attribute(PreviewAttribute::Title, podcast.title.as_str())
                    .with_attribute(
                        PreviewAttribute::Genres,
                        self.catalog.genre_text(&podcast.genres)?,
                    )
                    .with_attribute(PreviewAttribute::Seasons, podcast.seasons.to_string())
                    .with_attribute(PreviewAttribute::Updated, timestamp_attribute(&podcast.updated));
                preview.register_select_handler(self.select_tx.clone());
                Ok(preview)
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        self.previews = previews;
        self.selected = if self.previews.is_empty() { None } else { Some(0) };
        log::debug!(
            "Rendered {} previews (filter: {}, sort: {})",
            self.previews.len(),
            self.genre_filter,
            self.sort_order
        );
        Ok(())
    }

    pub fn set_genre_filter(&mut self, genre_filter: GenreFilter) -> Result<(), CatalogError> {
        self.genre_filter = genre_filter;
        self.refresh()
    }

    pub fn set_sort_order(&mut self, sort_order: SortOrder) -> Result<(), CatalogError> {
        self.sort_order = sort_order;
        self.refresh()
    }

    /// Genre control options: "ALL GENRES" followed by the genre table.
    pub fn genre_options(&self) -> Vec<(GenreFilter, String)> {
        std::iter::once((GenreFilter::All, ALL_GENRES_LABEL.to_string()))
            .chain(
                self.catalog
                    .genres()
                    .iter()
                    .map(|genre| (GenreFilter::Genre(genre.id), genre.title.clone())),
            )
            .collect()
    }

    pub fn sort_options(&self) -> Vec<(SortOrder, &'static str)> {
        SORT_OPTIONS.iter().map(|order| (*order, order.label())).collect()
    }

    pub fn genre_filter_label(&self) -> String {
        match self.genre_filter {
            GenreFilter::All => ALL_GENRES_LABEL.to_string(),
            GenreFilter::Genre(id) => self
                .catalog
                .genre_title(id)
                .map(String::from)
                .unwrap_or_else(|| format!("Genre {id}")),
        }
    }

    pub fn cycle_genre_filter(&mut self, forward: bool) -> Result<(), CatalogError> {
        let options = self.genre_options();
        let current = options
            .iter()
            .position(|(filter, _)| *filter == self.genre_filter)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else {
            (current + options.len() - 1) % options.len()
        };
        self.set_genre_filter(options[next].0)
    }

    /// Step to the next sort option; from an unlisted order this is the first.
    pub fn cycle_sort_order(&mut self) -> Result<(), CatalogError> {
        let options = self.sort_options();
        let next = options
            .iter()
            .position(|(order, _)| *order == self.sort_order)
            .map_or(0, |index| (index + 1) % options.len());
        self.set_sort_order(options[next].0)
    }

    pub fn select_next(&mut self) {
        if self.previews.is_empty() {
            return;
        }
        let last = self.previews.len() - 1;
        self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(last)));
    }

    pub fn select_previous(&mut self) {
        if self.previews.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }

    pub fn select_first(&mut self) {
        if !self.previews.is_empty() {
            self.selected = Some(0);
        }
    }

    pub fn select_last(&mut self) {
        if !self.previews.is_empty() {
            self.selected = Some(self.previews.len() - 1);
        }
    }

    /// Click the preview at `index` and handle its notification right away.
    pub fn click_preview(&mut self, index: usize) -> Result<(), CatalogError> {
        let Some(preview) = self.previews.get(index) else {
            return Ok(());
        };
        self.selected = Some(index);
        preview.click();
        self.dispatch_selections()
    }

    pub fn activate_selected(&mut self) -> Result<(), CatalogError> {
        match self.selected {
            Some(index) => self.click_preview(index),
            None => Ok(()),
        }
    }

    fn dispatch_selections(&mut self) -> Result<(), CatalogError> {
        while let Ok(PreviewSelected { id }) = self.select_rx.try_recv() {
            self.open_detail(&id)?;
        }
        Ok(())
    }

    /// Show the detail modal for `podcast_id`.
    ///
    /// An unknown podcast or one without season detail leaves the modal as it is.
    pub fn open_detail(&mut self, podcast_id: &str) -> Result<(), CatalogError> {
        let Some(podcast) = self.catalog.podcast(podcast_id) else {
            log::debug!("No podcast with id {podcast_id}");
            return Ok(());
        };
        let Some(seasons) = self.catalog.seasons_for(podcast_id) else {
            log::debug!("No season detail for podcast {podcast_id}");
            return Ok(());
        };

        let detail = PodcastDetail::new(&self.catalog, podcast, seasons)?;
        log::info!("Opening detail for {podcast_id}");
        self.modal.show(detail);
        Ok(())
    }

    pub fn close_detail(&mut self) {
        self.modal.hide();
    }

    /// Scroll the detail modal; `max` is the last scroll offset that still
    /// shows content.
    pub fn scroll_detail(&mut self, up: bool, max: u16) {
        if up {
            self.modal.scroll_up();
        } else {
            self.modal.scroll_down(max);
        }
    }
}
