use crate::api::SiftApi;
use crate::config::SiftConfig;
use crate::error::Result;
use crate::store::source_for;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Overrides the platform config directory. Mostly for tests and CI.
pub const CONFIG_DIR_ENV: &str = "BLOGSIFT_CONFIG_DIR";

pub struct SiftContext {
    pub api: SiftApi,
    pub config: SiftConfig,
}

/// `$BLOGSIFT_CONFIG_DIR`, else the platform config dir, else `./.blogsift`.
pub fn resolve_config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    ProjectDirs::from("com", "blogsift", "blogsift")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".blogsift"))
}

/// Load config and posts. `source_override` (e.g. `--source`) wins over the
/// configured source. A bad config file is an error; a failed post load is
/// not, it leaves the store empty.
pub fn initialize(config_dir: &Path, source_override: Option<&str>) -> Result<SiftContext> {
    let config = SiftConfig::load(config_dir)?;
    let location = source_override.unwrap_or(&config.source);
    let source = source_for(location);

    let api = SiftApi::load(&source, config.search_options(), config_dir.to_path_buf());
    Ok(SiftContext { api, config })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn source_override_wins() {
        let dir = tempfile::tempdir().unwrap();
        let posts = dir.path().join("posts.json");
        fs::write(&posts, r#"{"posts":[{"title":"A","category":"AWS"}]}"#).unwrap();

        let ctx = initialize(dir.path(), posts.to_str()).unwrap();
        assert_eq!(ctx.api.store().len(), 1);
        assert_eq!(ctx.config, SiftConfig::default());
    }

    #[test]
    fn unreachable_source_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = initialize(dir.path(), Some("does/not/exist.json")).unwrap();
        assert!(ctx.api.store().is_empty());
        assert!(ctx.api.store().load_error().is_some());
    }

    #[test]
    fn malformed_config_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.json"), "{ nope").unwrap();
        assert!(initialize(dir.path(), None).is_err());
    }
}
