//! # Blogsift Architecture
//!
//! Blogsift is a **UI-agnostic blog search library**: the search box, category
//! buttons, pagination strip and shareable URLs of a static blog index, with
//! no assumptions about where the results are drawn. The bundled terminal
//! client is one consumer of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders templates, handles terminal I/O│
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + SearchSession (session.rs)            │
//! │  - One-shot operations returning CmdResult                  │
//! │  - Stateful sessions driven by user intents                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (filter, paginate, url_state, categories, debounce)   │
//! │  - Pure functions over posts and filter state               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Post Store (store/)                                        │
//! │  - PostSource trait: file, HTTP, in-memory                  │
//! │  - Loads once, fails soft to an empty store                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! ```text
//! posts-data.json → normalize → restore URL state → filter → paginate → render
//!                                                      ▲                  │
//!                                                      └── user intent ◀──┘
//! ```
//!
//! ## Testing Strategy
//!
//! The core and command layers carry most of the unit tests. Sessions are
//! tested with recording [`view::View`] and [`view::Analytics`] doubles. The
//! binary is covered by integration tests under `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One-shot operations (search, categories, link, config)
//! - [`session`]: Stateful search session
//! - [`store`]: Post sources and the loaded store
//! - [`model`]: `Post` and the posts document
//! - [`filter`], [`paginate`], [`url_state`], [`categories`]: pure core
//! - [`debounce`]: Cancel-and-reschedule timer for keystrokes
//! - [`view`]: Collaborator traits and the render model
//! - [`config`], [`init`]: Configuration management and startup wiring
//! - [`error`]: Error types

pub mod api;
pub mod categories;
pub mod commands;
pub mod config;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod init;
pub mod model;
pub mod paginate;
pub mod session;
pub mod store;
pub mod url_state;
pub mod view;
