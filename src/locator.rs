//! Recursive discovery of `strings.xml` files under a project root.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use tracing::{debug, trace};

use crate::{error::Error, locale::Locale};

pub const DEFAULT_FILE_NAME: &str = "strings.xml";

/// Which resource-directory locale to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFilter(pub Locale);

impl LocaleFilter {
    pub fn matches(&self, path: &Path) -> bool {
        Locale::from_path(path).is_some_and(|locale| locale == self.0)
    }
}

/// Options for [`find_strings_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocateOptions {
    /// Exact file name to collect.
    pub file_name: String,
    /// Glob patterns matched against paths relative to the root.
    pub exclude: Vec<String>,
    /// Honor `.gitignore`, `.ignore` and git exclude files.
    pub respect_gitignore: bool,
    pub locale: Option<LocaleFilter>,
}

impl Default for LocateOptions {
    fn default() -> Self {
        LocateOptions {
            file_name: DEFAULT_FILE_NAME.to_string(),
            exclude: Vec::new(),
            respect_gitignore: false,
            locale: None,
        }
    }
}

impl LocateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }

    pub fn with_respect_gitignore(mut self, respect_gitignore: bool) -> Self {
        self.respect_gitignore = respect_gitignore;
        self
    }

    pub fn with_locale(mut self, locale: Option<Locale>) -> Self {
        self.locale = locale.map(LocaleFilter);
        self
    }
}

fn build_exclude_set(patterns: &[String]) -> Result<GlobSet, Error> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| Error::InvalidPattern {
        pattern: patterns.join(", "),
        source,
    })
}

/// Collects every file under `root` whose name is exactly `options.file_name`.
///
/// Directories are walked depth-first with entries sorted by name, so the result order is
/// stable between runs. Symlinks are not followed. A missing root yields
/// [`Error::RootNotFound`]; unreadable entries below the root are skipped.
pub fn find_strings_files<P: AsRef<Path>>(
    root: P,
    options: &LocateOptions,
) -> Result<Vec<PathBuf>, Error> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(Error::RootNotFound(root.to_path_buf()));
    }
    debug!("Scanning for {} files in: {}", options.file_name, root.display());

    let excludes = build_exclude_set(&options.exclude)?;
    let filter_root = root.to_path_buf();

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .git_ignore(options.respect_gitignore)
        .git_global(options.respect_gitignore)
        .git_exclude(options.respect_gitignore)
        .ignore(options.respect_gitignore)
        .require_git(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            let relative = entry.path().strip_prefix(&filter_root).unwrap_or(entry.path());
            relative.as_os_str().is_empty() || !excludes.is_match(relative)
        })
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        if entry.file_name() != options.file_name.as_str() {
            continue;
        }
        if let Some(filter) = &options.locale {
            if !filter.matches(entry.path()) {
                trace!("Locale filter skipped: {}", entry.path().display());
                continue;
            }
        }
        files.push(entry.into_path());
    }

    debug!("Found {} files", files.len());
    Ok(files)
}
