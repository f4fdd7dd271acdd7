use serde::{Deserialize, Deserializer, Serialize};

/// Posts in this category are always featured.
pub const FEATURED_CATEGORY: &str = "AI Engineering";
/// Posts whose title contains this marker are featured regardless of category.
pub const FEATURED_TITLE_MARKER: &str = "Claude Code";
pub const DEFAULT_CATEGORY_EMOJI: &str = "📝";

const CATEGORY_EMOJI: &[(&str, &str)] = &[
    ("DevSecOps", "🔒"),
    ("Kubernetes", "☸️"),
    ("AWS", "☁️"),
    ("Docker", "🐳"),
    ("AI Engineering", "🤖"),
    ("DevOps & AI", "⚙️"),
    ("AI & Machine Learning", "🧠"),
    ("AI & DevOps", "🚀"),
];

/// Emoji shown next to a category label. Unknown categories get the default.
pub fn category_emoji(category: &str) -> &'static str {
    CATEGORY_EMOJI
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, emoji)| *emoji)
        .unwrap_or(DEFAULT_CATEGORY_EMOJI)
}

/// A post record exactly as it appears in the posts data document. Missing
/// and `null` fields both read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub excerpt: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "null_as_default")]
    pub published_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub read_time: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Top-level shape of `posts-data.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostsDocument {
    pub posts: Vec<PostRecord>,
}

/// A normalized post. Read-only once the store is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub tags: Vec<String>,
    pub keywords: Vec<String>,
    pub url: String,
    pub author: String,
    pub published_date: String,
    pub read_time: String,
    pub featured: bool,
    pub category_emoji: &'static str,
}

impl From<PostRecord> for Post {
    fn from(record: PostRecord) -> Self {
        let featured = record.category == FEATURED_CATEGORY
            || record.title.contains(FEATURED_TITLE_MARKER);
        let category_emoji = category_emoji(&record.category);
        Self {
            title: record.title,
            excerpt: record.excerpt,
            category: record.category,
            tags: record.tags,
            keywords: record.keywords,
            url: record.url,
            author: record.author,
            published_date: record.published_date,
            read_time: record.read_time,
            featured,
            category_emoji,
        }
    }
}

impl Post {
    /// Builds a post from the fields that matter for filtering. Used by tests
    /// and in-memory sources.
    pub fn new(title: &str, excerpt: &str, category: &str) -> Self {
        PostRecord {
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            category: category.to_string(),
            ..Default::default()
        }
        .into()
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }

    /// Lower-cased haystack the text filter matches against.
    pub fn search_text(&self) -> String {
        [
            self.title.as_str(),
            self.excerpt.as_str(),
            self.category.as_str(),
            &self.tags.join(" "),
            &self.keywords.join(" "),
        ]
        .join(" ")
        .to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_map_to_their_emoji() {
        assert_eq!(category_emoji("Docker"), "🐳");
        assert_eq!(category_emoji("AI & DevOps"), "🚀");
    }

    #[test]
    fn unknown_category_falls_back_to_default_emoji() {
        assert_eq!(category_emoji("Gardening"), DEFAULT_CATEGORY_EMOJI);
        assert_eq!(category_emoji(""), DEFAULT_CATEGORY_EMOJI);
    }

    #[test]
    fn featured_by_category() {
        let post = Post::new("Agents in practice", "", "AI Engineering");
        assert!(post.featured);
        assert_eq!(post.category_emoji, "🤖");
    }

    #[test]
    fn featured_by_title_marker() {
        assert!(Post::new("Shipping with Claude Code", "", "DevOps & AI").featured);
        assert!(!Post::new("shipping with claude code", "", "DevOps & AI").featured);
    }

    #[test]
    fn record_deserializes_with_missing_optional_fields() {
        let json = r#"{"posts":[{"title":"T","excerpt":"E","category":"AWS",
            "url":"/blog/t.html","author":"A","publishedDate":"2025-01-02","readTime":"5 min"}]}"#;
        let doc: PostsDocument = serde_json::from_str(json).unwrap();
        let post: Post = doc.posts[0].clone().into();
        assert!(post.tags.is_empty());
        assert!(post.keywords.is_empty());
        assert_eq!(post.published_date, "2025-01-02");
        assert_eq!(post.read_time, "5 min");
    }

    #[test]
    fn null_fields_read_as_empty() {
        let json = r#"{"posts":[
            {"title":"Docker Layers","category":"Docker","tags":null,"keywords":null,"author":null},
            {"title":"EKS upgrades","category":"AWS","tags":["eks"]}]}"#;
        let doc: PostsDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.posts.len(), 2);

        let post: Post = doc.posts[0].clone().into();
        assert!(post.tags.is_empty());
        assert!(post.keywords.is_empty());
        assert_eq!(post.author, "");
        assert_eq!(post.search_text(), "docker layers  docker  ");
    }

    #[test]
    fn search_text_joins_all_fields_lowercased() {
        let post = Post::new("Docker Layers", "Cache Tricks", "Docker")
            .with_tags(&["Build", "CI"])
            .with_keywords(&["OCI"]);
        assert_eq!(post.search_text(), "docker layers cache tricks docker build ci oci");
    }
}
