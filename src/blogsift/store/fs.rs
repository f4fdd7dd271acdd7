use super::PostSource;
use crate::error::{Result, SiftError};
use crate::model::PostsDocument;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads the posts document from a local file, e.g. a checkout of the site.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PostSource for FileSource {
    fn fetch(&self) -> Result<PostsDocument> {
        let content = fs::read_to_string(&self.path).map_err(SiftError::Io)?;
        let doc: PostsDocument =
            serde_json::from_str(&content).map_err(SiftError::Serialization)?;
        Ok(doc)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
