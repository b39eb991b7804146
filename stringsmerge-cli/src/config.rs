//! Optional TOML configuration file.
//!
//! ```toml
//! root = "."
//! output = "build/all_strings.xml"
//! exclude = ["**/build"]
//! locale = "default"
//! ```
//!
//! Relative `root` and `output` paths are resolved against the directory holding the file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::CliError;

pub const DEFAULT_CONFIG_FILE: &str = "stringsmerge.toml";

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub root: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub exclude: Vec<String>,
    pub respect_gitignore: Option<bool>,
    pub file_name: Option<String>,
    pub locale: Option<String>,
    pub xml_declaration: Option<bool>,
    pub skip_invalid: Option<bool>,
    pub indent: Option<String>,
}

impl FileConfig {
    /// Parses a config document; relative paths are resolved against `base_dir`.
    pub fn parse(content: &str, base_dir: &Path) -> Result<Self, toml::de::Error> {
        let mut config: FileConfig = toml::from_str(content)?;
        config.root = config.root.map(|p| resolve(base_dir, p));
        config.output = config.output.map(|p| resolve(base_dir, p));
        Ok(config)
    }
}

fn resolve(base_dir: &Path, path: PathBuf) -> PathBuf {
    if path.is_relative() {
        base_dir.join(path)
    } else {
        path
    }
}

/// Reads the config file at `path`.
pub fn load_config(path: &Path) -> Result<FileConfig, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    FileConfig::parse(&content, base_dir).map_err(|source| CliError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the explicit config file, or `stringsmerge.toml` from `working_dir` when present.
pub fn discover_config(
    explicit: Option<&Path>,
    working_dir: &Path,
) -> Result<Option<FileConfig>, CliError> {
    if let Some(path) = explicit {
        return load_config(path).map(Some);
    }
    let candidate = working_dir.join(DEFAULT_CONFIG_FILE);
    if candidate.is_file() {
        debug!("Using config file {}", candidate.display());
        return load_config(&candidate).map(Some);
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let content = r#"
            root = "android"
            output = "/tmp/out.xml"
            exclude = ["**/build", "**/test"]
            respect_gitignore = true
            file_name = "strings.xml"
            locale = "fr"
            xml_declaration = true
            skip_invalid = true
            indent = "  "
        "#;
        let config = FileConfig::parse(content, Path::new("/work")).unwrap();
        assert_eq!(config.root, Some(PathBuf::from("/work/android")));
        assert_eq!(config.output, Some(PathBuf::from("/tmp/out.xml")));
        assert_eq!(config.exclude, vec!["**/build", "**/test"]);
        assert_eq!(config.respect_gitignore, Some(true));
        assert_eq!(config.locale.as_deref(), Some("fr"));
        assert_eq!(config.indent.as_deref(), Some("  "));
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = FileConfig::parse("", Path::new(".")).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(FileConfig::parse("project_dir = \"x\"", Path::new(".")).is_err());
    }

    #[test]
    fn test_discover_default_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "output = \"merged.xml\"").unwrap();

        let config = discover_config(None, dir.path()).unwrap().unwrap();
        assert_eq!(config.output, Some(dir.path().join("merged.xml")));
    }

    #[test]
    fn test_discover_nothing() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(None, dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = discover_config(Some(&missing), dir.path()).unwrap_err();
        assert!(err.to_string().contains("nope.toml"));
    }
}
