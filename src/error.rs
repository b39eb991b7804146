//! All error types for the stringsmerge crate.
//!
//! These are returned from every fallible stage of the pipeline (locating, parsing, writing).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("XML escape error: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    #[error("XML attribute error: {0}")]
    XmlAttribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("malformed document: {0}")]
    Malformed(String),

    #[error("root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    #[error("conflicting namespace declarations for `{key}`: `{existing}` and `{conflicting}`")]
    NamespaceConflict {
        key: String,
        existing: String,
        conflicting: String,
    },

    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("invalid locale `{0}`")]
    InvalidLocale(String),
}

impl Error {
    /// Wraps an error raised while reading one source file.
    pub fn parse_error(path: impl Into<PathBuf>, source: Error) -> Self {
        Error::Parse {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Wraps an error raised while writing the combined output.
    pub fn write_error(path: impl Into<PathBuf>, source: Error) -> Self {
        Error::Write {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Creates a new malformed-document error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Error::Malformed(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = Error::Io(io_error);
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_malformed_error() {
        let error = Error::malformed("no root element");
        assert_eq!(error.to_string(), "malformed document: no root element");
    }

    #[test]
    fn test_root_not_found_error() {
        let error = Error::RootNotFound(PathBuf::from("missing/project"));
        assert_eq!(
            error.to_string(),
            "root directory not found: missing/project"
        );
    }

    #[test]
    fn test_parse_error_names_path_and_cause() {
        let error = Error::parse_error(
            "app/src/main/res/values/strings.xml",
            Error::malformed("unclosed element"),
        );
        let display = error.to_string();
        assert!(display.contains("app/src/main/res/values/strings.xml"));
        assert!(display.contains("unclosed element"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_write_error_names_output_path() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "No such file or directory");
        let error = Error::write_error("build/out/strings.xml", Error::Io(io_error));
        assert_eq!(
            error.to_string(),
            "failed to write build/out/strings.xml: I/O error: No such file or directory"
        );
    }

    #[test]
    fn test_namespace_conflict_error() {
        let error = Error::NamespaceConflict {
            key: "xmlns:tools".to_string(),
            existing: "http://schemas.android.com/tools".to_string(),
            conflicting: "urn:other".to_string(),
        };
        assert!(error.to_string().contains("`xmlns:tools`"));
        assert!(error.to_string().contains("`urn:other`"));
    }

    #[test]
    fn test_invalid_locale_error() {
        let error = Error::InvalidLocale("not a locale!".to_string());
        assert_eq!(error.to_string(), "invalid locale `not a locale!`");
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Malformed("test".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Malformed"));
        assert!(debug.contains("test"));
    }
}
