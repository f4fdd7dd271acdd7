//! Category and free-text filtering over the loaded posts.
//!
//! Filtering is a pure function of (posts, term, category). Source order is
//! kept; there is no ranking. The text filter is a plain case-insensitive
//! substring test over the concatenated searchable fields.

use crate::model::Post;

/// Trim and lower-case raw user input into a search term.
pub fn normalize_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Returns the posts matching both filters, in source order.
///
/// An empty (or whitespace-only) `search_term` and an empty `category` are
/// no-ops for their respective filter.
pub fn apply_filter<'a>(posts: &'a [Post], search_term: &str, category: &str) -> Vec<&'a Post> {
    let term = normalize_term(search_term);

    posts
        .iter()
        .filter(|post| category.is_empty() || post.category == category)
        .filter(|post| term.is_empty() || post.search_text().contains(&term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Post> {
        vec![
            Post::new("Docker Layers Explained", "Image caching", "Docker"),
            Post::new("Helm basics", "Charts for DOCKER users", "Kubernetes"),
            Post::new("EKS upgrades", "Node groups", "AWS").with_tags(&["kubernetes"]),
            Post::new("Pod security", "Admission control", "Kubernetes")
                .with_keywords(&["PSA", "policy"]),
        ]
    }

    fn titles(posts: &[&Post]) -> Vec<String> {
        posts.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn empty_filters_return_everything_in_order() {
        let posts = sample();
        let result = apply_filter(&posts, "", "");
        assert_eq!(result.len(), posts.len());
        assert!(result.iter().zip(posts.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn whitespace_term_is_no_filter() {
        let posts = sample();
        assert_eq!(apply_filter(&posts, "   ", "").len(), 4);
    }

    #[test]
    fn matches_title_case_insensitively() {
        let posts = sample();
        let result = apply_filter(&posts, "docker", "");
        assert_eq!(
            titles(&result),
            vec!["Docker Layers Explained", "Helm basics"]
        );
    }

    #[test]
    fn matches_tags_and_keywords() {
        let posts = sample();
        assert_eq!(titles(&apply_filter(&posts, "policy", "")), vec!["Pod security"]);
        assert_eq!(
            titles(&apply_filter(&posts, "kubernetes", "")),
            vec!["Helm basics", "EKS upgrades", "Pod security"]
        );
    }

    #[test]
    fn raw_term_is_normalized() {
        let posts = sample();
        assert_eq!(titles(&apply_filter(&posts, "  HELM ", "")), vec!["Helm basics"]);
    }

    #[test]
    fn category_is_exact_match() {
        let posts = sample();
        assert_eq!(apply_filter(&posts, "", "Kubernetes").len(), 2);
        assert!(apply_filter(&posts, "", "kubernetes").is_empty());
    }

    #[test]
    fn filters_are_conjunctive() {
        let posts = sample();
        let result = apply_filter(&posts, "docker", "Kubernetes");
        assert_eq!(titles(&result), vec!["Helm basics"]);
    }

    #[test]
    fn text_results_are_subset_of_category_results() {
        let posts = sample();
        for term in ["a", "docker", "e", "zzz", "pod"] {
            for category in ["", "Kubernetes", "AWS"] {
                let narrowed = apply_filter(&posts, term, category);
                let wide = apply_filter(&posts, "", category);
                assert!(narrowed.iter().all(|p| wide.contains(p)));
            }
        }
    }

    #[test]
    fn matches_across_field_boundaries() {
        // Fields are joined with spaces, so a term spanning two fields matches.
        let posts = vec![Post::new("Alpha", "Beta", "Gamma")];
        assert_eq!(apply_filter(&posts, "alpha beta", "").len(), 1);
    }
}
