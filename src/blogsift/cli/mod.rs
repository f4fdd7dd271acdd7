//! # CLI Layer
//!
//! The terminal client for blogsift:
//!
//! - `setup`: clap argument definitions
//! - `commands`: dispatch, logging setup and `handle_*` functions
//! - `browse`: the interactive search loop
//! - `render`, `templates`, `styles`: turning results into styled text

mod browse;
mod commands;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
