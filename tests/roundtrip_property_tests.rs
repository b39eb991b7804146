use proptest::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use stringsmerge::formats::AndroidStringsFormat;
use stringsmerge::traits::Parser;
use stringsmerge::{
    CombineOptions, CombinedDocument, ModuleName, ModuleSection, RenderOptions, StringEntry,
    find_duplicates, run,
};

fn key_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,15}").expect("valid key regex")
}

fn value_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 _&<>'\"\\-\\.,!\\?]{0,30}").expect("valid value regex")
}

fn module_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,8}").expect("valid module regex")
}

fn dataset_strategy() -> impl Strategy<Value = BTreeMap<String, BTreeMap<String, String>>> {
    prop::collection::btree_map(
        module_strategy(),
        prop::collection::btree_map(key_strategy(), value_strategy(), 0..6),
        0..4,
    )
}

fn build_document(dataset: &BTreeMap<String, BTreeMap<String, String>>) -> CombinedDocument {
    let mut document = CombinedDocument::new();
    for (module, values) in dataset {
        let strings = values
            .iter()
            .map(|(name, value)| StringEntry::plain(name, value))
            .collect();
        document.push_section(ModuleSection::new(
            ModuleName::new(module.clone()),
            format!("{}/src/main/res/values/strings.xml", module),
            strings,
        ));
    }
    document
}

fn write_project(root: &Path, dataset: &BTreeMap<String, BTreeMap<String, String>>) {
    for (module, values) in dataset {
        let file = root.join(module).join("src/main/res/values/strings.xml");
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        let format = AndroidStringsFormat {
            root: "resources".to_string(),
            namespaces: Vec::new(),
            strings: values
                .iter()
                .map(|(name, value)| StringEntry::plain(name, value))
                .collect(),
        };
        format.write_to(&file).unwrap();
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_rendered_values_parse_back(dataset in dataset_strategy()) {
        let document = build_document(&dataset);
        let text = document.render(&RenderOptions::default()).unwrap();
        let parsed = AndroidStringsFormat::from_str(&text).unwrap();

        let expected: Vec<(String, String)> = dataset
            .values()
            .flat_map(|values| values.iter().map(|(k, v)| (k.clone(), v.clone())))
            .collect();
        let actual: Vec<(String, String)> = parsed
            .strings
            .iter()
            .map(|s| (s.name().unwrap_or_default().to_string(), s.value().to_string()))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_rendering_has_flat_tab_layout(dataset in dataset_strategy()) {
        let document = build_document(&dataset);
        let text = document.render(&RenderOptions::default()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        prop_assert_eq!(lines.first().copied(), Some("<resources>"));
        prop_assert_eq!(lines.last().copied(), Some("</resources>"));
        for line in &lines[1..lines.len() - 1] {
            prop_assert!(line.starts_with('\t'));
            prop_assert!(!line.starts_with("\t\t"));
        }
        prop_assert_eq!(lines.len(), 2 + document.sections.len() + document.string_count());
    }

    #[test]
    fn prop_duplicate_groups_partition_shared_values(dataset in dataset_strategy()) {
        let document = build_document(&dataset);
        let groups = find_duplicates(&document);

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for (_, entry) in document.strings() {
            *counts.entry(entry.value()).or_insert(0) += 1;
        }
        let shared: Vec<&str> = counts
            .iter()
            .filter(|(_, n)| **n > 1)
            .map(|(v, _)| *v)
            .collect();

        prop_assert_eq!(groups.len(), shared.len());
        for group in &groups {
            prop_assert_eq!(group.entries.len(), counts[group.value.as_str()]);
        }
    }

    #[test]
    fn prop_pipeline_is_idempotent(dataset in dataset_strategy()) {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join("project");
        fs::create_dir_all(&root).unwrap();
        write_project(&root, &dataset);
        let output = temp_dir.path().join("out.xml");
        let options = CombineOptions::new(&root).with_output(&output);

        let first_report = run(&options).unwrap();
        let first = fs::read(&output).unwrap();
        run(&options).unwrap();
        let second = fs::read(&output).unwrap();

        prop_assert_eq!(first_report.files.len(), dataset.len());
        prop_assert_eq!(first, second);
    }
}
