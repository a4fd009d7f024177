//! View derivation
//!
//! Turns the full podcast list into the ordered subset shown to the user.

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use thiserror::Error;

use crate::domain::catalog::Podcast;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid genre filter '{0}': expected \"all\" or a genre id")]
pub struct ParseGenreFilterError(pub String);

/// Genre restriction applied to the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GenreFilter {
    #[default]
    All,
    Genre(u32),
}

impl GenreFilter {
    pub fn matches(&self, podcast: &Podcast) -> bool {
        match self {
            GenreFilter::All => true,
            GenreFilter::Genre(id) => podcast.genres.contains(id),
        }
    }
}

impl FromStr for GenreFilter {
    type Err = ParseGenreFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(GenreFilter::All);
        }
        trimmed
            .parse::<u32>()
            .map(GenreFilter::Genre)
            .map_err(|_| ParseGenreFilterError(s.to_string()))
    }
}

impl TryFrom<String> for GenreFilter {
    type Error = ParseGenreFilterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GenreFilter> for String {
    fn from(filter: GenreFilter) -> Self {
        filter.to_string()
    }
}

impl fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenreFilter::All => write!(f, "all"),
            GenreFilter::Genre(id) => write!(f, "{id}"),
        }
    }
}

/// Ordering applied to the filtered list
///
/// Parsing is lenient: anything other than `most-recent` or `oldest` keeps
/// the catalog order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize,
)]
#[serde(from = "String", into = "String")]
pub enum SortOrder {
    #[default]
    #[strum(to_string = "most-recent")]
    MostRecent,
    #[strum(to_string = "oldest")]
    Oldest,
    #[strum(to_string = "none")]
    Unsorted,
}

impl SortOrder {
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::MostRecent => "Most recent",
            SortOrder::Oldest => "Oldest",
            SortOrder::Unsorted => "Unsorted",
        }
    }
}

impl From<&str> for SortOrder {
    fn from(value: &str) -> Self {
        match value.trim() {
            "most-recent" => SortOrder::MostRecent,
            "oldest" => SortOrder::Oldest,
            _ => SortOrder::Unsorted,
        }
    }
}

impl From<String> for SortOrder {
    fn from(value: String) -> Self {
        SortOrder::from(value.as_str())
    }
}

impl From<SortOrder> for String {
    fn from(order: SortOrder) -> Self {
        order.to_string()
    }
}

impl FromStr for SortOrder {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortOrder::from(s))
    }
}

/// Filter `podcasts` by `filter` and order the result by `order`.
///
/// Sorting is stable: podcasts with equal timestamps keep their relative
/// input order, and [`SortOrder::Unsorted`] keeps the input order entirely.
pub fn compute_view<'a>(
    podcasts: &'a [Podcast],
    filter: &GenreFilter,
    order: SortOrder,
) -> Vec<&'a Podcast> {
    let mut view: Vec<&Podcast> = podcasts
        .iter()
        .filter(|podcast| filter.matches(podcast))
        .collect();

    match order {
        SortOrder::MostRecent => view.sort_by(|a, b| b.updated.cmp(&a.updated)),
        SortOrder::Oldest => view.sort_by(|a, b| a.updated.cmp(&b.updated)),
        SortOrder::Unsorted => {}
    }

    view
}
