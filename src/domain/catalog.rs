//! Catalog data model
//!
//! The catalog is supplied once at startup and never mutated afterwards.
//! [`Catalog::new`] checks fixture integrity so that nothing downstream has
//! to deal with dangling genre references.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or querying the catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to parse catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Podcast '{podcast_id}' references unknown genre {genre_id}")]
    UnknownGenre { podcast_id: String, genre_id: u32 },

    #[error("Genre {0} is not in the genre table")]
    GenreNotFound(u32),

    #[error("Podcast '{0}' appears more than once in the catalog")]
    DuplicatePodcast(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Podcast {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub genres: Vec<u32>,
    pub seasons: u32,
    pub updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shows: Vec<String>,
}

impl Genre {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            shows: vec![],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub title: String,
    pub episodes: u32,
}

/// Season breakdown of a single podcast, keyed by the podcast id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodcastSeasons {
    pub id: String,
    #[serde(rename = "seasonDetails", default)]
    pub season_details: Vec<Season>,
}

/// Raw shape of a fixture file
#[derive(Debug, Clone, Default, Deserialize)]
struct CatalogData {
    #[serde(default)]
    podcasts: Vec<Podcast>,
    #[serde(default)]
    genres: Vec<Genre>,
    #[serde(default)]
    seasons: Vec<PodcastSeasons>,
}

/// Validated, read-only catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    podcasts: Vec<Podcast>,
    genres: Vec<Genre>,
    seasons: Vec<PodcastSeasons>,
    genre_titles: HashMap<u32, String>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate podcast ids and genre ids that
    /// are missing from the genre table.
    pub fn new(
        podcasts: Vec<Podcast>,
        genres: Vec<Genre>,
        seasons: Vec<PodcastSeasons>,
    ) -> Result<Self, CatalogError> {
        let genre_titles: HashMap<u32, String> = genres
            .iter()
            .map(|genre| (genre.id, genre.title.clone()))
            .collect();

        let mut seen = HashSet::new();
        for podcast in &podcasts {
            if !seen.insert(podcast.id.as_str()) {
                return Err(CatalogError::DuplicatePodcast(podcast.id.clone()));
            }
            if let Some(genre_id) = podcast
                .genres
                .iter()
                .find(|id| !genre_titles.contains_key(id))
            {
                return Err(CatalogError::UnknownGenre {
                    podcast_id: podcast.id.clone(),
                    genre_id: *genre_id,
                });
            }
        }

        Ok(Self {
            podcasts,
            genres,
            seasons,
            genre_titles,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::new(data.podcasts, data.genres, data.seasons)
    }

    pub fn podcasts(&self) -> &[Podcast] {
        &self.podcasts
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn len(&self) -> usize {
        self.podcasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.podcasts.is_empty()
    }

    pub fn podcast(&self, id: &str) -> Option<&Podcast> {
        self.podcasts.iter().find(|podcast| podcast.id == id)
    }

    pub fn seasons_for(&self, id: &str) -> Option<&[Season]> {
        self.seasons
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.season_details.as_slice())
    }

    pub fn genre_title(&self, id: u32) -> Option<&str> {
        self.genre_titles.get(&id).map(String::as_str)
    }

    /// Resolve genre ids to titles, keeping the order of `ids`.
    pub fn genre_names(&self, ids: &[u32]) -> Result<Vec<&str>, CatalogError> {
        ids.iter()
            .map(|id| self.genre_title(*id).ok_or(CatalogError::GenreNotFound(*id)))
            .collect()
    }

    /// Genre titles joined the way previews display them, e.g. "History, Comedy".
    pub fn genre_text(&self, ids: &[u32]) -> Result<String, CatalogError> {
        Ok(self.genre_names(ids)?.join(", "))
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_genre_names_keep_podcast_order() -> Result<(), CatalogError> {
        let catalog = Catalog::new(vec![podcast("a", &[9, 2], "2024-01-01")], genres(), vec![])?;

        assert_eq!(
            catalog.genre_names(&[9, 2])?,
            vec!["Kids and Family", "Investigative Journalism"]
        );
        assert_eq!(
            catalog.genre_text(&[9, 2])?,
            "Kids and Family, Investigative Journalism"
        );
        Ok(())
    }

    #[test]
    fn test_unknown_genre_is_rejected_at_load() {
        let result = Catalog::new(vec![podcast("a", &[1, 42], "2024-01-01")], genres(), vec![]);

        match result {
            Err(CatalogError::UnknownGenre {
                podcast_id,
                genre_id,
            }) => {
                assert_eq!(podcast_id, "a");
                assert_eq!(genre_id, 42);
            }
            other => panic!("expected UnknownGenre, got {other:?}"),
        }
    }

    #[test]
    fn test_genre_names_reports_missing_genre() -> Result<(), CatalogError> {
        let catalog = Catalog::new(vec![], genres(), vec![])?;

        let err = catalog.genre_names(&[1, 77]).err();
        assert!(matches!(err, Some(CatalogError::GenreNotFound(77))));
        Ok(())
    }

    #[test]
    fn test_duplicate_podcast_is_rejected() {
        let result = Catalog::new(
            vec![
                podcast("a", &[1], "2024-01-01"),
                podcast("a", &[3], "2023-01-01"),
            ],
            genres(),
            vec![],
        );

        assert!(matches!(result, Err(CatalogError::DuplicatePodcast(id)) if id == "a"));
    }

    #[test]
    fn test_from_json() -> Result<(), CatalogError> {
        let json = r#"{
            "podcasts": [{
                "id": "10716",
                "title": "Something Was Wrong",
                "description": "An award-winning docuseries",
                "image": "https://example.com/swr.jpg",
                "genres": [2, 1],
                "seasons": 14,
                "updated": "2022-11-03T07:00:00.000Z"
            }],
            "genres": [
                {"id": 1, "title": "Personal Growth", "description": "Grow", "shows": ["10716"]},
                {"id": 2, "title": "Investigative Journalism"}
            ],
            "seasons": [{
                "id": "10716",
                "seasonDetails": [{"title": "Season 1", "episodes": 10}]
            }]
        }"#;

        let catalog = Catalog::from_json(json)?;

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.genres().len(), 2);
        let podcast = catalog.podcast("10716").map(|p| p.title.clone());
        assert_eq!(podcast, Some("Something Was Wrong".to_string()));
        assert_eq!(
            catalog.seasons_for("10716"),
            Some(
                &[Season {
                    title: "Season 1".to_string(),
                    episodes: 10
                }][..]
            )
        );
        assert_eq!(catalog.seasons_for("nope"), None);
        Ok(())
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
