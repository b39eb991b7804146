#![forbid(unsafe_code)]
//! Combine the `strings.xml` files of a multi-module Android project.
//!
//! Every `strings.xml` below a project root is parsed, its top-level `<string>` elements are
//! appended to one `<resources>` document behind a `<!-- From module: ... -->` marker, and
//! values shared by more than one entry are reported.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use stringsmerge::{CombineOptions, duplicates::format_report, run};
//!
//! let report = run(&CombineOptions::new("path/to/android/project"))?;
//! println!("Found {} strings.xml files.", report.files.len());
//! print!("{}", format_report(&report.duplicates));
//! # Ok::<(), stringsmerge::Error>(())
//! ```
//!
//! # Pipeline
//!
//! - [`locator`]: finds the source files
//! - [`module_name`]: names the module each file belongs to
//! - [`aggregator`]: parses and concatenates the entries
//! - [`duplicates`]: groups entries by value
//! - [`render`]: lays the combined document out as text

pub mod aggregator;
pub mod combiner;
pub mod duplicates;
pub mod error;
pub mod formats;
pub mod locale;
pub mod locator;
pub mod module_name;
pub mod render;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    aggregator::{Aggregation, ParseFailurePolicy, combine_strings_files},
    combiner::{CombineOptions, CombineReport, MissingRootPolicy, run},
    duplicates::{DuplicateEntry, DuplicateGroup, find_duplicates, format_report},
    error::Error,
    locale::Locale,
    locator::{LocateOptions, find_strings_files},
    module_name::module_name,
    render::RenderOptions,
    types::{Attribute, CombinedDocument, ModuleName, ModuleSection, Node, StringEntry},
};
