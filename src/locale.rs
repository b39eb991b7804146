//! Android resource-directory locale qualifiers (`values`, `values-fr`, `values-pt-rBR`, ...).

use std::{fmt::Display, path::Path, str::FromStr};

use serde::Serialize;
use unic_langid::LanguageIdentifier;

use crate::error::Error;

/// Locale of a `values*` resource directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum Locale {
    /// The unqualified `values` directory.
    Default,
    Language(LanguageIdentifier),
}

impl Locale {
    /// Infers the locale from the file's parent directory name.
    ///
    /// Returns `None` when the parent is not a `values` directory or carries no language
    /// qualifier (e.g. `values-night`, `values-v21`).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let dir = path.as_ref().parent()?.file_name()?.to_str()?;
        Self::from_directory_name(dir)
    }

    /// Parses a resource directory name such as `values-zh-rTW` or `values-b+sr+Latn`.
    pub fn from_directory_name(dir: &str) -> Option<Self> {
        if dir == "values" {
            return Some(Locale::Default);
        }
        let qualifiers = dir.strip_prefix("values-")?;

        // Network codes are the only qualifiers that precede the locale
        let mut parts = qualifiers.split('-').skip_while(|q| is_network_code(q));
        let language = parts.next()?;

        if let Some(bcp47) = language.strip_prefix("b+") {
            return bcp47.replace('+', "-").parse().ok().map(Locale::Language);
        }

        if language.len() != 2 && language.len() != 3 {
            return None;
        }
        if !language.chars().all(|c| c.is_ascii_lowercase()) || NON_LANGUAGE.contains(&language) {
            return None;
        }
        let tag = match parts.next().and_then(|p| p.strip_prefix('r')) {
            Some(region) if region.len() == 2 && region.chars().all(|c| c.is_ascii_uppercase()) => {
                format!("{}-{}", language, region)
            }
            _ => language.to_string(),
        };
        tag.parse().ok().map(Locale::Language)
    }
}

/// Qualifiers shaped like a language code that mean something else (`car` is a UI mode).
const NON_LANGUAGE: &[&str] = &["car"];

/// `mcc310`, `mnc004`
fn is_network_code(qualifier: &str) -> bool {
    qualifier
        .strip_prefix("mcc")
        .or_else(|| qualifier.strip_prefix("mnc"))
        .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
}

impl FromStr for Locale {
    type Err = Error;

    /// Accepts `default` or a BCP 47 language tag (`fr`, `pt-BR`, `sr-Latn`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("default") {
            return Ok(Locale::Default);
        }
        s.parse::<LanguageIdentifier>()
            .map(Locale::Language)
            .map_err(|_| Error::InvalidLocale(s.to_string()))
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::Default => f.write_str("default"),
            Locale::Language(id) => write!(f, "{}", id),
        }
    }
}

impl From<Locale> for String {
    fn from(value: Locale) -> Self {
        value.to_string()
    }
}
