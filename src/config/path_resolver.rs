//! Where the collector's config file lives
//!
//! `--config` may be absolute, relative to the working directory, or start
//! with `~/`. Without it the file sits under the XDG config root.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "notepad-collector";
const CONFIG_FILE: &str = "config.toml";

/// Config file for an optional `--config` argument
pub fn config_file_path(explicit: Option<&str>) -> Result<PathBuf> {
    match explicit {
        Some(raw) => absolutize(raw),
        None => Ok(config_dir().join(CONFIG_FILE)),
    }
}

/// `$XDG_CONFIG_HOME/notepad-collector`, else `~/.config/notepad-collector`
pub fn config_dir() -> PathBuf {
    let root = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .unwrap_or_else(|| PathBuf::from(".config"));
    root.join(APP_DIR)
}

fn absolutize(raw: &str) -> Result<PathBuf> {
    let path = if raw == "~" || raw.starts_with("~/") {
        let home = env::var_os("HOME").context("cannot expand ~: HOME is not set")?;
        PathBuf::from(home).join(raw.trim_start_matches('~').trim_start_matches('/'))
    } else {
        PathBuf::from(raw)
    };
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = env::current_dir().context("cannot read the working directory")?;
    Ok(cwd.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_path_is_kept() {
        let path = config_file_path(Some("/etc/collector.toml")).unwrap();
        assert_eq!(path, PathBuf::from("/etc/collector.toml"));
    }

    #[test]
    fn test_tilde_is_expanded() {
        let Some(home) = env::var_os("HOME") else {
            return;
        };
        let path = config_file_path(Some("~/collector.toml")).unwrap();
        assert_eq!(path, PathBuf::from(home).join("collector.toml"));
    }

    #[test]
    fn test_relative_path_joins_working_dir() {
        let path = config_file_path(Some("collector.toml")).unwrap();
        assert_eq!(path, env::current_dir().unwrap().join("collector.toml"));
    }

    #[test]
    fn test_named_user_tilde_is_relative() {
        let path = config_file_path(Some("~alice/config.toml")).unwrap();
        assert!(path.ends_with("~alice/config.toml"));
        assert!(path.is_absolute());
    }

    #[test]
    fn test_default_path_is_under_config_dir() {
        let path = config_file_path(None).unwrap();
        assert_eq!(path, config_dir().join("config.toml"));
        assert!(path.ends_with("notepad-collector/config.toml"));
    }
}
