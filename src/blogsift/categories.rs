//! Category ranking for the filter button strip.

use crate::model::{category_emoji, Post};
use serde::Serialize;

pub const DEFAULT_CATEGORY_LIMIT: usize = 8;
pub const ALL_POSTS_LABEL: &str = "All Posts";
pub const ALL_POSTS_EMOJI: &str = "📚";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Counts posts per category and keeps the `limit` largest.
///
/// Posts without a category are not counted. Equal counts keep the order in
/// which the categories were first seen.
pub fn top_categories(posts: &[Post], limit: usize) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for post in posts.iter().filter(|p| !p.category.is_empty()) {
        match counts.iter_mut().find(|c| c.category == post.category) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                category: post.category.clone(),
                count: 1,
            }),
        }
    }

    // sort_by is stable: ties stay in encounter order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

/// One entry of the filter strip. The first button is always "All Posts",
/// whose `category` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryButton {
    pub category: String,
    pub label: String,
    pub emoji: &'static str,
    pub count: usize,
    pub active: bool,
}

pub fn category_buttons(posts: &[Post], selected: &str, limit: usize) -> Vec<CategoryButton> {
    let mut buttons = vec![CategoryButton {
        category: String::new(),
        label: ALL_POSTS_LABEL.to_string(),
        emoji: ALL_POSTS_EMOJI,
        count: posts.len(),
        active: selected.is_empty(),
    }];
    buttons.extend(
        top_categories(posts, limit)
            .into_iter()
            .map(|c| CategoryButton {
                active: c.category == selected,
                emoji: category_emoji(&c.category),
                label: c.category.clone(),
                category: c.category,
                count: c.count,
            }),
    );
    buttons
}
