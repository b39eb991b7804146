//! Combines the `<string>` entries of many source files into one document.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{
    error::Error,
    formats::AndroidStringsFormat,
    module_name::module_name,
    traits::Parser,
    types::{CombinedDocument, ModuleSection},
};

/// What to do when a source file cannot be read or parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseFailurePolicy {
    /// Stop and return the error (default)
    #[default]
    Abort,
    /// Log a warning and leave the file out
    Skip,
}

/// Result of [`combine_strings_files`].
#[derive(Debug, Default)]
pub struct Aggregation {
    pub document: CombinedDocument,
    /// Files left out under [`ParseFailurePolicy::Skip`].
    pub skipped: Vec<PathBuf>,
}

/// Reads `files` in order and appends each file's top-level strings under its module.
///
/// Every file adds one section, even when it holds no strings. The namespace declarations of
/// each file's root are merged into the document; a prefix bound to two different URIs is
/// handled like a parse failure of the later file.
pub fn combine_strings_files<P, R>(
    files: &[P],
    root: R,
    policy: ParseFailurePolicy,
) -> Result<Aggregation, Error>
where
    P: AsRef<Path>,
    R: AsRef<Path>,
{
    let root = root.as_ref();
    let mut aggregation = Aggregation::default();

    for file in files {
        let file = file.as_ref();
        let module = module_name(file, root);

        let format = match read_source(file, &mut aggregation.document) {
            Ok(format) => format,
            Err(e) => match policy {
                ParseFailurePolicy::Abort => return Err(Error::parse_error(file, e)),
                ParseFailurePolicy::Skip => {
                    warn!("Skipping {}: {}", file.display(), e);
                    aggregation.skipped.push(file.to_path_buf());
                    continue;
                }
            },
        };

        debug!(
            "Module {}: {} strings from {}",
            module,
            format.strings.len(),
            file.display()
        );
        aggregation
            .document
            .push_section(ModuleSection::new(module, file, format.strings));
    }

    Ok(aggregation)
}

fn read_source(
    file: &Path,
    document: &mut CombinedDocument,
) -> Result<AndroidStringsFormat, Error> {
    let format = AndroidStringsFormat::read_from(file)?;
    document.declare_namespaces(&format.namespaces)?;
    Ok(format)
}
