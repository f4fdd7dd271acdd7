use crate::commands::CmdResult;
use crate::error::Result;
use crate::url_state::{to_url, FilterState};

pub fn run(base_path: &str, state: &FilterState) -> Result<CmdResult> {
    Ok(CmdResult::default().with_url(to_url(base_path, state)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_shareable_url() {
        let state = FilterState {
            search_term: "ai".into(),
            selected_category: String::new(),
            current_page: 2,
        };
        let result = run("/blog/", &state).unwrap();
        assert_eq!(result.url.as_deref(), Some("/blog/?search=ai&page=2"));
    }
}
