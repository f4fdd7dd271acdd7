use super::PostSource;
use crate::error::{Result, SiftError};
use crate::model::PostsDocument;
use reqwest::blocking::Client;

/// Fetches the posts document from a live site with a single `GET`.
pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            client: Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl PostSource for HttpSource {
    fn fetch(&self) -> Result<PostsDocument> {
        let response = self.client.get(&self.url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(SiftError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }
        let body = response.text()?;
        let doc: PostsDocument = serde_json::from_str(&body).map_err(SiftError::Serialization)?;
        Ok(doc)
    }

    fn describe(&self) -> String {
        format!("GET {}", self.url)
    }
}
