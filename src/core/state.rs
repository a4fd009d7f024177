use std::sync::Arc;

use crate::{
    core::controller::CatalogController,
    domain::catalog::{Catalog, CatalogError},
    infrastructure::config::Config,
    presentation::config::KeyBindings,
};

pub mod detail;
pub mod system;

pub use system::{StatusMessage, SystemState};

/// Unified application state
#[derive(Debug)]
pub struct AppState {
    pub controller: CatalogController,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Build the initial state, rendering the catalog with the configured
    /// genre filter and sort order.
    pub fn new(catalog: Arc<Catalog>, config: Config) -> Result<Self, CatalogError> {
        let controller = CatalogController::new(
            catalog,
            config.catalog.genre_filter,
            config.catalog.sort_order,
        )?;
        Ok(Self {
            controller,
            system: SystemState::default(),
            config: ConfigState { config },
        })
    }

    pub fn keybindings(&self) -> &KeyBindings {
        &self.config.config.keybindings
    }
}
