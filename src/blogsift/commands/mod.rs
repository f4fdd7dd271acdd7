use crate::categories::CategoryButton;
use crate::config::SiftConfig;
use crate::view::SearchView;

pub mod categories;
pub mod config;
pub mod link;
pub mod search;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub view: Option<SearchView>,
    pub categories: Vec<CategoryButton>,
    pub url: Option<String>,
    pub config: Option<SiftConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_view(mut self, view: SearchView) -> Self {
        self.view = Some(view);
        self
    }

    pub fn with_categories(mut self, categories: Vec<CategoryButton>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_url(mut self, url: String) -> Self {
        self.url = Some(url);
        self
    }

    pub fn with_config(mut self, config: SiftConfig) -> Self {
        self.config = Some(config);
        self
    }
}
