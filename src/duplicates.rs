//! Detection of string values shared by more than one entry.
//!
//! The report is advisory; the combined document is never modified.

use std::{collections::HashMap, fmt::Write as _};

use serde::Serialize;

use crate::types::{CombinedDocument, ModuleName};

/// Label used for entries without a `name` attribute.
pub const UNNAMED: &str = "<unnamed>";

/// One entry taking part in a duplicate group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateEntry {
    pub name: Option<String>,
    pub module: ModuleName,
}

impl DuplicateEntry {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }
}

/// A value and every entry that carries it, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateGroup {
    pub value: String,
    pub entries: Vec<DuplicateEntry>,
}

/// Groups all strings by exact value and returns the groups with more than one entry.
///
/// Groups are ordered by the first appearance of their value. Empty values are grouped like
/// any other value.
pub fn find_duplicates(document: &CombinedDocument) -> Vec<DuplicateGroup> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<DuplicateGroup> = Vec::new();

    for (section, entry) in document.strings() {
        let duplicate = DuplicateEntry {
            name: entry.name().map(str::to_string),
            module: section.module.clone(),
        };
        match index.get(entry.value()) {
            Some(&i) => groups[i].entries.push(duplicate),
            None => {
                index.insert(entry.value(), groups.len());
                groups.push(DuplicateGroup {
                    value: entry.value().to_string(),
                    entries: vec![duplicate],
                });
            }
        }
    }

    groups.retain(|g| g.entries.len() > 1);
    groups
}

/// Human-readable report: one header per group, one line per entry, then a blank line.
///
/// An empty value is printed as `''`.
pub fn format_report(groups: &[DuplicateGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        let _ = writeln!(
            out,
            "String value '{}' is duplicated in the following strings:",
            group.value
        );
        for entry in &group.entries {
            let _ = writeln!(out, "  - {}", entry.display_name());
        }
        out.push('\n');
    }
    out
}
