//! cb-core: Main application logic for the country browser.
//!
//! This crate contains search, grouping, the detail view, the browser
//! view-model, and the interactive and one-shot front ends.
//! Exposed as a library for integration testing.

pub mod batch;
pub mod browser;
pub mod cli;
pub mod config;
pub mod detail;
pub mod group;
pub mod logging;
pub mod renderer;
pub mod repl;
pub mod search;
pub mod style;
