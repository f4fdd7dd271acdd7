//! Output templates, kept as standalone files and embedded at compile time.
//!
//! Templates are minijinja. Block tags close with `-%}` so every emitted line
//! comes from an explicit line in the template. Layout math (numbering,
//! truncation, highlighting) happens in `render.rs`; templates only pick
//! styles.

pub const RESULTS_TEMPLATE: &str = include_str!("templates/results.tmp");
pub const PAGINATION_TEMPLATE: &str = include_str!("templates/pagination.tmp");
pub const CATEGORIES_TEMPLATE: &str = include_str!("templates/categories.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
