//! # Post Store
//!
//! Posts are read once per session from a [`PostSource`] and normalized into
//! [`Post`] values. The source is abstracted behind a trait so the same store
//! works against a local checkout of the site, the live site over HTTP, or an
//! in-memory fixture in tests.
//!
//! ## Implementations
//!
//! - [`fs::FileSource`]: reads `posts-data.json` from disk
//! - [`http::HttpSource`]: a single `GET`, no retry and no custom timeout
//! - [`memory::InMemorySource`]: canned documents or failures for tests
//!
//! ## Failing Soft
//!
//! [`PostStore::load`] never returns an error. Any failure (missing file,
//! network error, non-success status, malformed body) is logged and leaves
//! the store empty with [`PostStore::load_error`] set, so the caller can show
//! an error state instead of aborting.

use crate::error::Result;
use crate::model::{Post, PostsDocument};

pub mod fs;
pub mod http;
pub mod memory;

/// Default location of the posts document, relative to the site root.
pub const DEFAULT_POSTS_PATH: &str = "/blog/posts-data.json";

/// Anything that can produce the posts document.
pub trait PostSource {
    /// Fetch and parse the posts document.
    fn fetch(&self) -> Result<PostsDocument>;

    /// Human-readable location, for logs and messages.
    fn describe(&self) -> String;
}

impl<S: PostSource + ?Sized> PostSource for Box<S> {
    fn fetch(&self) -> Result<PostsDocument> {
        (**self).fetch()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Pick a source from a user supplied location: URLs go over HTTP, anything
/// else is treated as a file path.
pub fn source_for(location: &str) -> Box<dyn PostSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(http::HttpSource::new(location))
    } else {
        Box::new(fs::FileSource::new(location))
    }
}

#[derive(Debug, Clone, Default)]
pub struct PostStore {
    posts: Vec<Post>,
    load_error: Option<String>,
}

impl PostStore {
    pub fn load<S: PostSource + ?Sized>(source: &S) -> Self {
        match source.fetch() {
            Ok(doc) => {
                let posts: Vec<Post> = doc.posts.into_iter().map(Post::from).collect();
                tracing::debug!(count = posts.len(), source = %source.describe(), "loaded posts");
                Self {
                    posts,
                    load_error: None,
                }
            }
            Err(e) => {
                tracing::warn!(source = %source.describe(), error = %e, "failed to load posts");
                Self {
                    posts: Vec::new(),
                    load_error: Some(e.to_string()),
                }
            }
        }
    }

    pub fn from_posts(posts: Vec<Post>) -> Self {
        Self {
            posts,
            load_error: None,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }
}
