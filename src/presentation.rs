//! Presentation layer
//!
//! This module contains UI components and their configuration:
//! - Stateless components rendering `AppState`
//! - The podcast preview card
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
