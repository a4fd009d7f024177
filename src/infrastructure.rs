//! Infrastructure layer
//!
//! This module handles external integrations:
//! - TUI foundation (real terminal and test backend)
//! - CLI argument processing
//! - Configuration loading
//! - Catalog data loading

pub mod catalog_source;
pub mod cli;
pub mod config;
pub mod tui;
