use std::io::Write;

use serde_json::json;
use stringsmerge::{CombineReport, format_report};

use crate::error::CliError;

/// Console line announcing how many files were located.
pub fn found_line(count: usize, file_name: &str) -> String {
    format!("Found {} {} files.", count, file_name)
}

/// Console line announcing where the combined output went.
pub fn written_line(report: &CombineReport, file_name: &str) -> String {
    format!(
        "Combined {} files have been written to {}.",
        file_name,
        report.output.display()
    )
}

/// Prints the duplicate report; printed before the output is written.
pub fn print_duplicates<W: Write>(out: &mut W, report: &CombineReport) -> Result<(), CliError> {
    write!(out, "{}", format_report(&report.duplicates))?;
    out.flush()?;
    Ok(())
}

/// Prints the completion message.
pub fn print_written<W: Write>(
    out: &mut W,
    report: &CombineReport,
    file_name: &str,
) -> Result<(), CliError> {
    writeln!(out, "{}", written_line(report, file_name))?;
    Ok(())
}

/// Prints the whole run summary as one JSON object.
pub fn print_json<W: Write>(out: &mut W, report: &CombineReport) -> Result<(), CliError> {
    let duplicates: Vec<_> = report
        .duplicates
        .iter()
        .map(|group| {
            json!({
                "value": group.value,
                "entries": group.entries.iter().map(|e| json!({
                    "name": e.name,
                    "module": e.module,
                })).collect::<Vec<_>>(),
            })
        })
        .collect();

    let body = json!({
        "files_found": report.files.len(),
        "files": report.files,
        "skipped": report.skipped,
        "output": report.output,
        "strings": report.document.string_count(),
        "duplicates": duplicates,
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use stringsmerge::{
        CombinedDocument, DuplicateEntry, DuplicateGroup, ModuleName, ModuleSection, StringEntry,
    };

    fn sample_report() -> CombineReport {
        let mut document = CombinedDocument::new();
        document.push_section(ModuleSection::new(
            ModuleName::new("app"),
            "app/src/main/res/values/strings.xml",
            vec![StringEntry::plain("a", "Hello"), StringEntry::plain("b", "Hello")],
        ));
        CombineReport {
            files: vec![PathBuf::from("app/src/main/res/values/strings.xml")],
            skipped: Vec::new(),
            output: PathBuf::from("strings.xml"),
            document,
            duplicates: vec![DuplicateGroup {
                value: "Hello".to_string(),
                entries: vec![
                    DuplicateEntry {
                        name: Some("a".to_string()),
                        module: ModuleName::new("app"),
                    },
                    DuplicateEntry {
                        name: Some("b".to_string()),
                        module: ModuleName::new("app"),
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_found_line() {
        assert_eq!(found_line(0, "strings.xml"), "Found 0 strings.xml files.");
    }

    #[test]
    fn test_print_human() {
        let mut out = Vec::new();
        print_duplicates(&mut out, &sample_report()).unwrap();
        print_written(&mut out, &sample_report(), "strings.xml").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "String value 'Hello' is duplicated in the following strings:\n  - a\n  - b\n\n\
             Combined strings.xml files have been written to strings.xml.\n"
        );
    }

    #[test]
    fn test_print_json() {
        let mut out = Vec::new();
        print_json(&mut out, &sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["files_found"], 1);
        assert_eq!(value["strings"], 2);
        assert_eq!(value["duplicates"][0]["value"], "Hello");
        assert_eq!(value["duplicates"][0]["entries"][1]["name"], "b");
        assert_eq!(value["duplicates"][0]["entries"][1]["module"], "app");
    }
}
