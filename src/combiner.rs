//! The end-to-end pipeline: locate → name → aggregate → report → write.

use std::{fs, path::PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    aggregator::{ParseFailurePolicy, combine_strings_files},
    duplicates::{DuplicateGroup, find_duplicates},
    error::Error,
    locator::{LocateOptions, find_strings_files},
    render::RenderOptions,
    types::CombinedDocument,
};

pub const DEFAULT_OUTPUT: &str = "strings.xml";

/// What to do when the project root does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingRootPolicy {
    /// Warn and continue with no files (default)
    #[default]
    Empty,
    /// Return [`Error::RootNotFound`]
    Fail,
}

/// Everything one run needs; there is no global configuration.
#[derive(Debug, Clone)]
pub struct CombineOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    pub locate: LocateOptions,
    pub on_parse_failure: ParseFailurePolicy,
    pub on_missing_root: MissingRootPolicy,
    pub render: RenderOptions,
}

impl CombineOptions {
    /// Creates options for `root` with the remaining settings at their defaults.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        CombineOptions {
            root: root.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            locate: LocateOptions::default(),
            on_parse_failure: ParseFailurePolicy::default(),
            on_missing_root: MissingRootPolicy::default(),
            render: RenderOptions::default(),
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_locate(mut self, locate: LocateOptions) -> Self {
        self.locate = locate;
        self
    }

    pub fn with_parse_failure_policy(mut self, policy: ParseFailurePolicy) -> Self {
        self.on_parse_failure = policy;
        self
    }

    pub fn with_missing_root_policy(mut self, policy: MissingRootPolicy) -> Self {
        self.on_missing_root = policy;
        self
    }

    pub fn with_render(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }
}

/// Outcome of a run.
#[derive(Debug, Serialize)]
pub struct CombineReport {
    pub files: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    /// Where the combined document is written.
    pub output: PathBuf,
    #[serde(skip)]
    pub document: CombinedDocument,
    pub duplicates: Vec<DuplicateGroup>,
}

impl CombineReport {
    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }
}

/// Locates the source files under the configured root.
///
/// The output file is never one of them, so a previous result sitting under the root is not
/// combined into the next one.
pub fn locate(options: &CombineOptions) -> Result<Vec<PathBuf>, Error> {
    let files = match find_strings_files(&options.root, &options.locate) {
        Err(Error::RootNotFound(root)) if options.on_missing_root == MissingRootPolicy::Empty => {
            warn!("Root directory not found: {}", root.display());
            return Ok(Vec::new());
        }
        result => result?,
    };

    // A missing output cannot match any located file
    let Ok(output) = fs::canonicalize(&options.output) else {
        return Ok(files);
    };
    Ok(files
        .into_iter()
        .filter(|file| {
            let is_output = fs::canonicalize(file).is_ok_and(|file| file == output);
            if is_output {
                debug!("Leaving out the output file {}", file.display());
            }
            !is_output
        })
        .collect())
}

/// Aggregates the given files and finds duplicates without touching the output.
pub fn aggregate(options: &CombineOptions, files: Vec<PathBuf>) -> Result<CombineReport, Error> {
    let aggregation = combine_strings_files(&files, &options.root, options.on_parse_failure)?;
    let duplicates = find_duplicates(&aggregation.document);

    Ok(CombineReport {
        files,
        skipped: aggregation.skipped,
        output: options.output.clone(),
        document: aggregation.document,
        duplicates,
    })
}

/// Writes the combined document of `report` to the configured output.
pub fn write_output(options: &CombineOptions, report: &CombineReport) -> Result<(), Error> {
    report
        .document
        .write_to(&options.output, &options.render)
        .map_err(|e| Error::write_error(&options.output, e))?;
    info!(
        "Wrote {} strings from {} files to {}",
        report.document.string_count(),
        report.document.sections.len(),
        options.output.display()
    );
    Ok(())
}

/// Aggregates the given files, finds duplicates and writes the combined output.
///
/// The output file is only touched once everything before it succeeded.
pub fn combine(options: &CombineOptions, files: Vec<PathBuf>) -> Result<CombineReport, Error> {
    let report = aggregate(options, files)?;
    write_output(options, &report)?;
    Ok(report)
}

/// Runs the whole pipeline.
///
/// ```rust,no_run
/// use stringsmerge::{CombineOptions, run};
///
/// let report = run(&CombineOptions::new("my-android-project").with_output("all_strings.xml"))?;
/// println!("{} duplicate values", report.duplicates.len());
/// # Ok::<(), stringsmerge::Error>(())
/// ```
pub fn run(options: &CombineOptions) -> Result<CombineReport, Error> {
    let files = locate(options)?;
    combine(options, files)
}
