//! # API Facade
//!
//! A **thin facade** over the command layer and the single entry point for
//! every blogsift operation, whichever UI is driving it.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (raw search text, query strings) into [`FilterState`]
//! - **Returns structured types** (`Result<CmdResult>`) and never prints
//!
//! Interactive clients ask it for a [`SearchSession`] wired to their own
//! [`View`], [`History`] and [`Analytics`] implementations.

use crate::commands;
use crate::commands::search::SearchOptions;
use crate::error::Result;
use crate::filter::normalize_term;
use crate::session::SearchSession;
use crate::store::{PostSource, PostStore};
use crate::url_state::{restore_from_query, FilterState};
use crate::view::{Analytics, History, View};
use std::path::PathBuf;

/// A search request as a UI collects it: an optional query string to start
/// from, and explicit overrides on top of it.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    pub query: Option<String>,
    pub term: Option<String>,
    pub category: Option<String>,
    pub page: Option<usize>,
}

impl SearchRequest {
    pub fn to_state(&self) -> FilterState {
        let mut state = self
            .query
            .as_deref()
            .map(restore_from_query)
            .unwrap_or_default();
        if let Some(term) = &self.term {
            state.search_term = normalize_term(term);
            state.current_page = 1;
        }
        if let Some(category) = &self.category {
            state.selected_category = category.clone();
            state.current_page = 1;
        }
        if let Some(page) = self.page {
            state.current_page = page.max(1);
        }
        state
    }
}

pub struct SiftApi {
    store: PostStore,
    options: SearchOptions,
    config_dir: PathBuf,
}

impl SiftApi {
    pub fn new(store: PostStore, options: SearchOptions, config_dir: PathBuf) -> Self {
        Self {
            store,
            options,
            config_dir,
        }
    }

    /// Load posts from `source` (failing soft) and build the facade.
    pub fn load<S: PostSource + ?Sized>(
        source: &S,
        options: SearchOptions,
        config_dir: PathBuf,
    ) -> Self {
        Self::new(PostStore::load(source), options, config_dir)
    }

    pub fn search(&self, request: &SearchRequest) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, &request.to_state(), &self.options)
    }

    pub fn categories(&self, selected: &str, limit: Option<usize>) -> Result<commands::CmdResult> {
        commands::categories::run(
            &self.store,
            selected,
            limit.unwrap_or(self.options.category_limit),
        )
    }

    pub fn link(&self, request: &SearchRequest) -> Result<commands::CmdResult> {
        commands::link::run(&self.options.base_path, &request.to_state())
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    /// Start an interactive session over a copy of the loaded posts.
    pub fn session<V: View, H: History, A: Analytics>(
        &self,
        view: V,
        history: H,
        analytics: A,
    ) -> SearchSession<V, H, A> {
        SearchSession::new(
            self.store.clone(),
            self.options.clone(),
            view,
            history,
            analytics,
        )
    }

    pub fn store(&self) -> &PostStore {
        &self.store
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PostRecord;
    use crate::store::memory::InMemorySource;
    use crate::view::{NoopAnalytics, ReplaceHistory, SearchView};

    fn api() -> SiftApi {
        let posts = ["Docker", "Kubernetes", "Kubernetes"]
            .iter()
            .enumerate()
            .map(|(i, c)| PostRecord {
                title: format!("{} post {}", c, i),
                category: c.to_string(),
                ..Default::default()
            })
            .collect();
        SiftApi::load(
            &InMemorySource::new(posts),
            SearchOptions {
                page_size: 1,
                ..SearchOptions::default()
            },
            std::env::temp_dir(),
        )
    }

    #[test]
    fn request_overrides_query() {
        let request = SearchRequest {
            query: Some("?search=helm&category=AWS&page=4".into()),
            category: Some("Kubernetes".into()),
            ..Default::default()
        };
        let state = request.to_state();
        assert_eq!(state.search_term, "helm");
        assert_eq!(state.selected_category, "Kubernetes");
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn explicit_page_wins_over_reset() {
        let request = SearchRequest {
            term: Some("Helm".into()),
            page: Some(2),
            ..Default::default()
        };
        let state = request.to_state();
        assert_eq!(state.search_term, "helm");
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn search_dispatches_with_options() {
        let request = SearchRequest {
            category: Some("Kubernetes".into()),
            page: Some(2),
            ..Default::default()
        };
        let result = api().search(&request).unwrap();
        let view = result.view.unwrap();
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.results[0].title, "Kubernetes post 2");
        assert_eq!(
            result.url.as_deref(),
            Some("/blog/?category=Kubernetes&page=2")
        );
    }

    #[test]
    fn categories_uses_default_limit() {
        let result = api().categories("", None).unwrap();
        assert_eq!(result.categories.len(), 3);
        let limited = api().categories("", Some(1)).unwrap();
        assert_eq!(limited.categories.len(), 2);
    }

    #[test]
    fn session_starts_from_loaded_posts() {
        struct Sink;
        impl View for Sink {
            fn render(&mut self, _view: &SearchView) {}
        }
        let mut session = api().session(Sink, ReplaceHistory::default(), NoopAnalytics);
        session.input("docker");
        assert_eq!(session.snapshot().total_results, 1);
    }
}
