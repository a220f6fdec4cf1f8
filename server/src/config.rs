use std::path::PathBuf;

use anyhow::{Result, bail};
use platform_db::DatabaseSettings;

#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    /// Empty means any origin.
    pub cors_allowed_origins: Vec<String>,
    pub static_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let database = DatabaseSettings::from_env();

        let cors_allowed_origins =
            parse_origins(&std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());

        let static_dir = resolve_static_dir(std::env::var("STATIC_DIR").ok())?;

        Ok(Self {
            database,
            cors_allowed_origins,
            static_dir,
        })
    }
}

/// The web client shipped in `server/static`.
pub fn bundled_static_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}

/// Unset falls back to the bundled client; `none` disables static serving.
fn resolve_static_dir(raw: Option<String>) -> Result<Option<PathBuf>> {
    match raw.as_deref().map(str::trim) {
        Some("none") => Ok(None),
        Some(path) if !path.is_empty() => {
            let dir = PathBuf::from(path);
            if !dir.is_dir() {
                bail!("STATIC_DIR {} is not a directory", dir.display());
            }
            Ok(Some(dir))
        }
        _ => {
            let bundled = bundled_static_dir();
            Ok(bundled.is_dir().then_some(bundled))
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() || trimmed == "*" {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            parse_origins(" http://localhost:5173, ,https://hr.example.com "),
            vec!["http://localhost:5173", "https://hr.example.com"]
        );
    }

    #[test]
    fn static_dir_defaults_to_bundled_client() {
        assert_eq!(resolve_static_dir(None).unwrap(), Some(bundled_static_dir()));
        assert_eq!(
            resolve_static_dir(Some("  ".into())).unwrap(),
            Some(bundled_static_dir())
        );
        assert!(bundled_static_dir().join("index.html").is_file());
        assert!(bundled_static_dir().join("script.js").is_file());
    }

    #[test]
    fn static_dir_can_be_disabled_or_overridden() {
        assert_eq!(resolve_static_dir(Some("none".into())).unwrap(), None);
        let src = concat!(env!("CARGO_MANIFEST_DIR"), "/src");
        assert_eq!(
            resolve_static_dir(Some(src.into())).unwrap(),
            Some(PathBuf::from(src))
        );
        assert!(resolve_static_dir(Some("/definitely/not/here".into())).is_err());
    }

    #[test]
    fn wildcard_means_any_origin() {
        assert!(parse_origins("*").is_empty());
        assert!(parse_origins("").is_empty());
    }
}
