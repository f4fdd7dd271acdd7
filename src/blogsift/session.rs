//! # Search Session
//!
//! One [`SearchSession`] backs one blog index "page view". It owns the loaded
//! posts and the current [`FilterState`], and is driven by user intents:
//!
//! ```text
//!  input / select_category / go_to_page / clear
//!                    │
//!                    ▼
//!        mutate FilterState (page → 1 on filter change)
//!                    │
//!                    ▼
//!        build_view (filter → clamp → paginate)
//!                    │
//!        ┌───────────┼──────────────┐
//!        ▼           ▼              ▼
//!   History      View.render    Analytics.track
//!   .replace
//! ```
//!
//! Sessions are plain values: nothing is global, and any number of them can
//! run side by side against the same posts. All presentation goes through
//! the [`View`] trait, so the session is fully testable without a terminal.
//!
//! Debouncing keystrokes is the caller's job (see [`crate::debounce`]); the
//! session performs a filter pass on every call it receives.

use crate::commands::search::{build_view, SearchOptions};
use crate::filter::normalize_term;
use crate::store::PostStore;
use crate::url_state::{query_param, restore_from_query, FilterState, RECOVERY_PARAM};
use crate::view::{Analytics, AnalyticsEvent, History, SearchView, View};

pub struct SearchSession<V: View, H: History, A: Analytics> {
    store: PostStore,
    options: SearchOptions,
    state: FilterState,
    recovery_notice: Option<String>,
    view: V,
    history: H,
    analytics: A,
}

impl<V: View, H: History, A: Analytics> SearchSession<V, H, A> {
    pub fn new(store: PostStore, options: SearchOptions, view: V, history: H, analytics: A) -> Self {
        Self {
            store,
            options,
            state: FilterState::default(),
            recovery_notice: None,
            view,
            history,
            analytics,
        }
    }

    /// Apply state from a query string (`?search=...&category=...&page=...`)
    /// and draw it. Also picks up the `recovery` notice left by the 404 page.
    pub fn restore(&mut self, query: &str) {
        self.state = restore_from_query(query);
        self.recovery_notice = query_param(query, RECOVERY_PARAM)
            .filter(|words| !words.trim().is_empty())
            .map(|words| {
                format!(
                    "We've automatically searched our blog based on \"{}\".",
                    words
                )
            });
        self.refresh();
    }

    /// Search box input. `raw` is trimmed and lower-cased.
    pub fn input(&mut self, raw: &str) {
        self.state.search_term = normalize_term(raw);
        self.state.current_page = 1;
        let results = self.refresh();
        if !self.state.search_term.is_empty() {
            self.analytics.track(&AnalyticsEvent::SearchPerformed {
                term: self.state.search_term.clone(),
                results,
            });
        }
    }

    /// Entry point for other scripts on the page, e.g. the 404 redirect.
    pub fn perform_search(&mut self, query: &str) {
        self.input(query);
    }

    /// Select a category; an empty string selects "All Posts".
    pub fn select_category(&mut self, category: &str) {
        self.state.selected_category = category.to_string();
        self.state.current_page = 1;
        let results = self.refresh();
        self.analytics.track(&AnalyticsEvent::CategorySelected {
            category: category.to_string(),
            results,
        });
    }

    /// Jump to a page. Out-of-range pages are clamped.
    pub fn go_to_page(&mut self, page: usize) {
        self.state.current_page = page;
        self.refresh();
        self.analytics.track(&AnalyticsEvent::PageChanged {
            page: self.state.current_page,
        });
    }

    /// Does nothing on the last page.
    pub fn next_page(&mut self) {
        if self.state.current_page < self.total_pages() {
            self.go_to_page(self.state.current_page + 1);
        }
    }

    /// Does nothing on the first page.
    pub fn previous_page(&mut self) {
        if self.state.current_page > 1 {
            self.go_to_page(self.state.current_page - 1);
        }
    }

    /// Reset everything (the Escape key / clear button).
    pub fn clear(&mut self) {
        self.state = FilterState::default();
        self.recovery_notice = None;
        self.refresh();
        self.analytics.track(&AnalyticsEvent::SearchCleared);
    }

    pub fn snapshot(&self) -> SearchView {
        build_view(
            &self.store,
            &self.state,
            &self.options,
            self.recovery_notice.clone(),
        )
        .1
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn store(&self) -> &PostStore {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn analytics(&self) -> &A {
        &self.analytics
    }

    fn total_pages(&self) -> usize {
        self.snapshot().total_pages
    }

    /// Re-filter, sync the URL and redraw. Returns the match count.
    fn refresh(&mut self) -> usize {
        let (shown, view) = build_view(
            &self.store,
            &self.state,
            &self.options,
            self.recovery_notice.clone(),
        );
        self.state = shown;
        tracing::debug!(url = %view.url, "replace history");
        self.history.replace(&view.url);
        self.view.render(&view);
        view.total_results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Post;
    use crate::view::ReplaceHistory;

    #[derive(Default)]
    struct RecordingView {
        renders: Vec<SearchView>,
    }

    impl View for RecordingView {
        fn render(&mut self, view: &SearchView) {
            self.renders.push(view.clone());
        }
    }

    impl RecordingView {
        fn last(&self) -> &SearchView {
            self.renders.last().unwrap()
        }
    }

    #[derive(Default)]
    struct RecordingAnalytics {
        events: Vec<AnalyticsEvent>,
    }

    impl Analytics for RecordingAnalytics {
        fn track(&mut self, event: &AnalyticsEvent) {
            self.events.push(event.clone());
        }
    }

    type TestSession = SearchSession<RecordingView, ReplaceHistory, RecordingAnalytics>;

    fn session(page_size: usize) -> TestSession {
        let mut posts: Vec<Post> = (1..=25)
            .map(|i| Post::new(&format!("Cluster note {}", i), "", "Kubernetes"))
            .collect();
        posts.push(Post::new("Docker Layers Explained", "", "Docker"));
        posts.push(Post::new("Registry mirrors", "Pulling docker images", "AWS"));
        let options = SearchOptions {
            page_size,
            ..SearchOptions::default()
        };
        SearchSession::new(
            PostStore::from_posts(posts),
            options,
            RecordingView::default(),
            ReplaceHistory::default(),
            RecordingAnalytics::default(),
        )
    }

    #[test]
    fn restore_applies_query_and_renders() {
        let mut s = session(12);
        s.restore("?category=Kubernetes&page=2");

        assert_eq!(s.state().current_page, 2);
        assert_eq!(s.view().last().results.len(), 12);
        assert_eq!(
            s.history().current(),
            Some("/blog/?category=Kubernetes&page=2")
        );
    }

    #[test]
    fn input_resets_page_and_tracks_search() {
        let mut s = session(12);
        s.restore("?page=3");
        s.input("  DOCKER ");

        assert_eq!(s.state().search_term, "docker");
        assert_eq!(s.state().current_page, 1);
        assert_eq!(s.view().last().total_results, 2);
        assert_eq!(s.history().current(), Some("/blog/?search=docker"));
        assert_eq!(
            s.analytics().events,
            vec![AnalyticsEvent::SearchPerformed {
                term: "docker".into(),
                results: 2
            }]
        );
    }

    #[test]
    fn perform_search_renders_immediately_from_page_one() {
        let mut s = session(10);
        s.restore("?page=3");
        let renders = s.view().renders.len();
        s.perform_search("  Registry ");

        assert_eq!(s.view().renders.len(), renders + 1);
        assert_eq!(s.state().search_term, "registry");
        assert_eq!(s.state().current_page, 1);
        assert_eq!(s.view().last().results[0].title, "Registry mirrors");
        assert_eq!(s.history().current(), Some("/blog/?search=registry"));
        assert_eq!(
            s.analytics().events.last(),
            Some(&AnalyticsEvent::SearchPerformed {
                term: "registry".into(),
                results: 1
            })
        );
    }

    #[test]
    fn empty_input_is_not_tracked() {
        let mut s = session(12);
        s.input("   ");
        assert!(s.analytics().events.is_empty());
        assert!(!s.view().last().showing_results);
    }

    #[test]
    fn select_category_resets_page() {
        let mut s = session(12);
        s.restore("?page=2");
        s.select_category("Docker");

        assert_eq!(s.state().current_page, 1);
        assert_eq!(s.view().last().results[0].title, "Docker Layers Explained");
        assert!(s.view().last().categories.iter().any(|b| b.active && b.category == "Docker"));
    }

    #[test]
    fn go_to_page_clamps() {
        let mut s = session(10);
        s.go_to_page(99);
        assert_eq!(s.state().current_page, 3);
        s.go_to_page(0);
        assert_eq!(s.state().current_page, 1);
    }

    #[test]
    fn next_and_previous_stop_at_bounds() {
        let mut s = session(10);
        s.restore("");
        s.previous_page();
        assert_eq!(s.state().current_page, 1);

        s.next_page();
        s.next_page();
        s.next_page();
        assert_eq!(s.state().current_page, 3);
        assert!(s.view().last().controls.as_ref().unwrap().next.disabled);
    }

    #[test]
    fn restored_out_of_range_page_is_clamped_in_url() {
        let mut s = session(12);
        s.restore("?search=docker&page=5");
        assert_eq!(s.state().current_page, 1);
        assert_eq!(s.history().current(), Some("/blog/?search=docker"));
    }

    #[test]
    fn clear_resets_everything() {
        let mut s = session(12);
        s.restore("?search=docker&category=AWS&recovery=old+docker+post");
        assert!(s.view().last().recovery_notice.is_some());

        s.clear();
        assert_eq!(s.state(), &FilterState::default());
        assert_eq!(s.history().current(), Some("/blog/"));
        assert!(s.view().last().recovery_notice.is_none());
        assert_eq!(s.analytics().events, vec![AnalyticsEvent::SearchCleared]);
    }

    #[test]
    fn recovery_notice_quotes_original_words() {
        let mut s = session(12);
        s.restore("?search=helm&recovery=helm+charts");
        assert_eq!(
            s.snapshot().recovery_notice.as_deref(),
            Some("We've automatically searched our blog based on \"helm charts\".")
        );
    }

    #[test]
    fn sessions_are_independent() {
        let mut a = session(12);
        let mut b = session(12);
        a.input("docker");
        b.select_category("Kubernetes");
        assert_eq!(a.state().selected_category, "");
        assert_eq!(b.state().search_term, "");
    }
}
