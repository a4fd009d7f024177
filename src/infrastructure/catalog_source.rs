//! Catalog loading
//!
//! The built-in catalog is compiled into the binary; a JSON file of the same
//! shape can replace it.

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};

use crate::domain::catalog::Catalog;

const EMBEDDED_CATALOG: &str = include_str!("../../assets/catalog.json");

pub fn embedded_catalog() -> Result<Catalog> {
    Catalog::from_json(EMBEDDED_CATALOG).wrap_err("Built-in catalog is invalid")
}

/// Load the catalog from `data_file`, or the built-in one when it is `None`.
pub fn load_catalog(data_file: Option<&Path>) -> Result<Catalog> {
    let Some(path) = data_file else {
        return embedded_catalog();
    };

    let json = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Unable to read catalog file {}", path.display()))?;
    let catalog = Catalog::from_json(&json)
        .wrap_err_with(|| format!("Invalid catalog file {}", path.display()))?;
    log::info!(
        "Loaded {} podcasts and {} genres from {}",
        catalog.len(),
        catalog.genres().len(),
        path.display()
    );
    Ok(catalog)
}
