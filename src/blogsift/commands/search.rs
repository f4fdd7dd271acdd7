use crate::categories::{category_buttons, DEFAULT_CATEGORY_LIMIT};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::apply_filter;
use crate::model::Post;
use crate::paginate::{
    clamp_page, page_range, paginate, pagination_controls, total_pages, DEFAULT_PAGE_SIZE,
};
use crate::store::PostStore;
use crate::url_state::{to_url, FilterState};
use crate::view::{SearchStats, SearchView};

/// Knobs shared by one-shot searches and interactive sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub page_size: usize,
    pub category_limit: usize,
    /// Path the shareable URL is built on, e.g. `/blog/`.
    pub base_path: String,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            category_limit: DEFAULT_CATEGORY_LIMIT,
            base_path: "/blog/".to_string(),
        }
    }
}

/// Filters, clamps the page and paginates. Returns the state actually shown,
/// which differs from `state` only in a clamped `current_page`.
pub fn build_view(
    store: &PostStore,
    state: &FilterState,
    options: &SearchOptions,
    recovery_notice: Option<String>,
) -> (FilterState, SearchView) {
    let filtered: Vec<Post> = apply_filter(
        store.posts(),
        &state.search_term,
        &state.selected_category,
    )
    .into_iter()
    .cloned()
    .collect();

    let total = filtered.len();
    let mut state = state.clone();
    state.current_page = clamp_page(state.current_page, total_pages(total, options.page_size));

    let page = paginate(&filtered, state.current_page, options.page_size);
    tracing::debug!(
        term = %state.search_term,
        category = %state.selected_category,
        page = state.current_page,
        matched = total,
        "filter pass"
    );

    let view = SearchView {
        results: page.items,
        total_results: total,
        total_pages: page.total_pages,
        controls: pagination_controls(state.current_page, page.total_pages),
        stats: search_stats(total, &state, options.page_size),
        categories: category_buttons(
            store.posts(),
            &state.selected_category,
            options.category_limit,
        ),
        showing_results: state.is_filtering(),
        url: to_url(&options.base_path, &state),
        load_error: store.load_error().map(String::from),
        recovery_notice,
        state: state.clone(),
    };
    (state, view)
}

/// The "Found N posts for ..." line. `None` when no filter is active.
pub fn search_stats(total: usize, state: &FilterState, page_size: usize) -> Option<SearchStats> {
    if !state.is_filtering() {
        return None;
    }
    let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
    Some(SearchStats {
        total,
        term: non_empty(&state.search_term),
        category: non_empty(&state.selected_category),
        range: if total > page_size {
            page_range(total, state.current_page, page_size)
        } else {
            None
        },
    })
}

pub fn run(store: &PostStore, state: &FilterState, options: &SearchOptions) -> Result<CmdResult> {
    let (shown, view) = build_view(store, state, options, None);

    let mut result = CmdResult::default();
    if let Some(error) = &view.load_error {
        result.add_message(CmdMessage::error(format!(
            "Unable to load blog posts: {}",
            error
        )));
    } else if view.is_empty() {
        result.add_message(CmdMessage::info("No posts match your search."));
    } else if shown.current_page != state.current_page {
        result.add_message(CmdMessage::warning(format!(
            "Page {} is out of range, showing page {} of {}.",
            state.current_page, shown.current_page, view.total_pages
        )));
    }
    let url = view.url.clone();
    Ok(result.with_view(view).with_url(url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemorySource;

    /// 14 posts: 13 Kubernetes, 1 Docker.
    fn store() -> PostStore {
        let mut posts: Vec<Post> = (1..=13)
            .map(|i| Post::new(&format!("Kubernetes tip {}", i), "", "Kubernetes"))
            .collect();
        posts.insert(3, Post::new("Docker Layers Explained", "", "Docker"));
        PostStore::from_posts(posts)
    }

    fn state(term: &str, category: &str, page: usize) -> FilterState {
        FilterState {
            search_term: term.into(),
            selected_category: category.into(),
            current_page: page,
        }
    }

    #[test]
    fn category_filter_paginates_into_two_pages() {
        let options = SearchOptions::default();
        let (_, first) = build_view(&store(), &state("", "Kubernetes", 1), &options, None);
        assert_eq!(first.total_results, 13);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.results.len(), 12);

        let (_, second) = build_view(&store(), &state("", "Kubernetes", 2), &options, None);
        assert_eq!(second.results.len(), 1);
        assert_eq!(second.results[0].title, "Kubernetes tip 13");
        assert_eq!(
            second.stats.unwrap().summary(),
            "Found 13 posts for Kubernetes (showing 13-13)"
        );
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let (shown, view) = build_view(
            &store(),
            &state("docker", "", 7),
            &SearchOptions::default(),
            None,
        );
        assert_eq!(shown.current_page, 1);
        assert_eq!(view.results.len(), 1);
        assert_eq!(view.url, "/blog/?search=docker");
    }

    #[test]
    fn unfiltered_view_shows_default_section() {
        let (_, view) = build_view(&store(), &FilterState::default(), &SearchOptions::default(), None);
        assert!(!view.showing_results);
        assert!(view.stats.is_none());
        assert_eq!(view.url, "/blog/");
        assert_eq!(view.categories[0].count, 14);
    }

    #[test]
    fn stats_range_only_when_more_than_one_page() {
        let s = search_stats(5, &state("x", "", 1), 12).unwrap();
        assert!(s.range.is_none());
        assert!(search_stats(5, &FilterState::default(), 12).is_none());
    }

    #[test]
    fn run_reports_empty_results() {
        let result = run(&store(), &state("terraform", "", 1), &SearchOptions::default()).unwrap();
        let view = result.view.unwrap();
        assert_eq!(view.total_pages, 0);
        assert!(matches!(result.messages[0].level, MessageLevel::Info));
    }

    #[test]
    fn run_warns_when_page_was_clamped() {
        let result = run(&store(), &state("", "Kubernetes", 9), &SearchOptions::default()).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
        assert_eq!(
            result.messages[0].content,
            "Page 9 is out of range, showing page 2 of 2."
        );
        assert_eq!(result.url.as_deref(), Some("/blog/?category=Kubernetes&page=2"));
    }

    #[test]
    fn run_is_silent_for_an_in_range_page() {
        let result = run(&store(), &state("", "Kubernetes", 2), &SearchOptions::default()).unwrap();
        assert!(result.messages.is_empty());
    }

    #[test]
    fn run_reports_load_failure() {
        let store = PostStore::load(&InMemorySource::failing("404"));
        let result = run(&store, &FilterState::default(), &SearchOptions::default()).unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
        assert!(result.view.unwrap().load_error.is_some());
    }
}
