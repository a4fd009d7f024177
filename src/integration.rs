//! Integration layer
//!
//! Wires the terminal, the Elm core and the components together.

pub mod app_runner;
