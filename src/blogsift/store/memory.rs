use super::PostSource;
use crate::error::{Result, SiftError};
use crate::model::{PostRecord, PostsDocument};

/// Serves a canned document, or a canned failure. No I/O.
pub struct InMemorySource {
    outcome: std::result::Result<Vec<PostRecord>, String>,
}

impl InMemorySource {
    pub fn new(posts: Vec<PostRecord>) -> Self {
        Self { outcome: Ok(posts) }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
        }
    }
}

impl PostSource for InMemorySource {
    fn fetch(&self) -> Result<PostsDocument> {
        match &self.outcome {
            Ok(posts) => Ok(PostsDocument {
                posts: posts.clone(),
            }),
            Err(message) => Err(SiftError::Io(std::io::Error::other(message.clone()))),
        }
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
