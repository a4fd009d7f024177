//! Domain logic
//!
//! This module contains the catalog model and the pure logic built on it:
//! - Catalog collections and their integrity checks
//! - View derivation (genre filter and sort order)
//! - Text and date formatting utilities

pub mod catalog;
pub mod text;
pub mod view;
