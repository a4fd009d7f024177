//! # podcatalog - a terminal podcast catalog browser
//!
//! Browse a fixed catalog of podcasts, narrow it down by genre, order it by
//! recency and open a detail view with the season breakdown of any show.
//!
//! ## Architecture Overview
//!
//! The crate follows an Elm-like architecture:
//!
//! - **Model** (`core::state`): application state, owning the
//!   [`CatalogController`](core::controller::CatalogController)
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): applies messages to the state
//! - **Command** (`core::cmd`): side effects executed by the runner
//! - **View** (`presentation::components`): stateless rendering of the state
//!
//! ## Example Usage
//!
//! ```rust
//! use podcatalog::domain::{
//!     catalog::Catalog,
//!     view::{compute_view, GenreFilter, SortOrder},
//! };
//!
//! let catalog = Catalog::from_json(
//!     r#"{
//!         "podcasts": [
//!             { "id": "a", "title": "A", "description": "", "image": "",
//!               "genres": [1], "seasons": 1, "updated": "2022-01-01T00:00:00Z" },
//!             { "id": "b", "title": "B", "description": "", "image": "",
//!               "genres": [2], "seasons": 2, "updated": "2023-01-01T00:00:00Z" }
//!         ],
//!         "genres": [{ "id": 1, "title": "History" }, { "id": 2, "title": "Comedy" }]
//!     }"#,
//! )?;
//!
//! let view = compute_view(catalog.podcasts(), &GenreFilter::All, SortOrder::MostRecent);
//! assert_eq!(view.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(), vec!["b", "a"]);
//! # Ok::<(), podcatalog::domain::catalog::CatalogError>(())
//! ```
//!
//! ## Modules
//!
//! - [`core`] - Elm core: state, messages, update, controller
//! - [`domain`] - Catalog data model, view computation, text formatting
//! - [`presentation`] - Components, the preview card, styles and keybindings
//! - [`infrastructure`] - Terminal, CLI, configuration, catalog loading
//! - [`integration`] - The application runner
//! - [`utils`] - Logging, panic handling and paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState};
pub use crate::core::{translator::translate_raw_to_domain, update::update};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
