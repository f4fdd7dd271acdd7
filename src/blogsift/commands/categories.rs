use crate::categories::category_buttons;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::PostStore;

pub fn run(store: &PostStore, selected: &str, limit: usize) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if let Some(error) = store.load_error() {
        result.add_message(CmdMessage::error(format!(
            "Unable to load blog posts: {}",
            error
        )));
    }
    Ok(result.with_categories(category_buttons(store.posts(), selected, limit)))
}
