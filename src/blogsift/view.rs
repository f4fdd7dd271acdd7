//! # Collaborators
//!
//! The search session never touches a screen, an address bar or an analytics
//! endpoint directly. It talks to three small traits instead:
//!
//! - [`View`]: receives a [`SearchView`] render model after every change
//! - [`History`]: receives the shareable URL; entries are replaced, not pushed
//! - [`Analytics`]: receives fire-and-forget [`AnalyticsEvent`]s
//!
//! Implementations must not fail the session. A view with nowhere to draw
//! does nothing; an analytics sink that cannot deliver drops the event.

use crate::categories::CategoryButton;
use crate::model::Post;
use crate::paginate::{PageRange, PaginationControls};
use crate::url_state::FilterState;
use serde::Serialize;

/// Everything a presentation layer needs to draw the current state.
#[derive(Debug, Clone, Serialize)]
pub struct SearchView {
    pub state: FilterState,
    /// Posts on the current page.
    pub results: Vec<Post>,
    pub total_results: usize,
    pub total_pages: usize,
    pub controls: Option<PaginationControls>,
    pub stats: Option<SearchStats>,
    pub categories: Vec<CategoryButton>,
    /// True while a search or category filter is active. The default blog
    /// section is shown instead of the result grid otherwise.
    pub showing_results: bool,
    pub url: String,
    pub load_error: Option<String>,
    pub recovery_notice: Option<String>,
}

impl SearchView {
    pub fn is_empty(&self) -> bool {
        self.total_results == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub total: usize,
    pub term: Option<String>,
    pub category: Option<String>,
    /// Present only when results span more than one page.
    pub range: Option<PageRange>,
}

impl SearchStats {
    /// `Found 3 posts for "docker" in Kubernetes (showing 1-12)`
    pub fn summary(&self) -> String {
        let mut filters = Vec::new();
        if let Some(term) = &self.term {
            filters.push(format!("\"{}\"", term));
        }
        if let Some(category) = &self.category {
            filters.push(category.clone());
        }

        let mut text = format!(
            "Found {} post{} for {}",
            self.total,
            if self.total == 1 { "" } else { "s" },
            filters.join(" in ")
        );
        if let Some(range) = self.range {
            text.push_str(&format!(" (showing {}-{})", range.start, range.end));
        }
        text
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsEvent {
    SearchPerformed { term: String, results: usize },
    CategorySelected { category: String, results: usize },
    PageChanged { page: usize },
    SearchCleared,
}

impl AnalyticsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::SearchPerformed { .. } => "search",
            AnalyticsEvent::CategorySelected { .. } => "select_category",
            AnalyticsEvent::PageChanged { .. } => "change_page",
            AnalyticsEvent::SearchCleared => "clear_search",
        }
    }
}

pub trait View {
    fn render(&mut self, view: &SearchView);
}

pub trait History {
    fn replace(&mut self, url: &str);
}

pub trait Analytics {
    fn track(&mut self, event: &AnalyticsEvent);
}

/// Discards every event.
#[derive(Debug, Default)]
pub struct NoopAnalytics;

impl Analytics for NoopAnalytics {
    fn track(&mut self, _event: &AnalyticsEvent) {}
}

/// Emits events as `tracing` records at info level.
#[derive(Debug, Default)]
pub struct TracingAnalytics;

impl Analytics for TracingAnalytics {
    fn track(&mut self, event: &AnalyticsEvent) {
        match event {
            AnalyticsEvent::SearchPerformed { term, results } => {
                tracing::info!(event = event.name(), %term, results, "analytics")
            }
            AnalyticsEvent::CategorySelected { category, results } => {
                tracing::info!(event = event.name(), %category, results, "analytics")
            }
            AnalyticsEvent::PageChanged { page } => {
                tracing::info!(event = event.name(), page, "analytics")
            }
            AnalyticsEvent::SearchCleared => tracing::info!(event = event.name(), "analytics"),
        }
    }
}

/// Keeps only the current URL, the way `history.replaceState` does.
#[derive(Debug, Default)]
pub struct ReplaceHistory {
    current: Option<String>,
}

impl ReplaceHistory {
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

impl History for ReplaceHistory {
    fn replace(&mut self, url: &str) {
        self.current = Some(url.to_string());
    }
}
