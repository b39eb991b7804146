//! Core types for stringsmerge.
//! The parser decodes into these; the renderer and the duplicate reporter consume them.

use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use quick_xml::{
    Reader,
    escape::{escape, unescape},
    events::Event,
};
use serde::Serialize;

use crate::error::Error;

/// One attribute of a `<string>` element, kept exactly as written in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub key: String,
    /// The attribute value without its quotes, still escaped.
    pub raw_value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Attribute {
            key: key.into(),
            raw_value: raw_value.into(),
        }
    }
}

/// A single `<string>` element read from a source file.
///
/// The attributes and inner content are stored verbatim so the combined output reproduces
/// them byte for byte. `name` and `value` are derived once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringEntry {
    /// Attributes in source order.
    pub attributes: Vec<Attribute>,
    /// Raw inner content, including any nested markup.
    pub content: String,
    name: Option<String>,
    value: String,
}

impl StringEntry {
    /// Builds an entry from raw attributes and raw inner content.
    ///
    /// Fails when the `name` attribute or the content carries an invalid escape sequence.
    pub fn new(attributes: Vec<Attribute>, content: impl Into<String>) -> Result<Self, Error> {
        let content = content.into();
        let name = attributes
            .iter()
            .find(|a| a.key == "name")
            .map(|a| unescape(&a.raw_value).map(|v| v.into_owned()))
            .transpose()?;
        let value = text_value(&content)?;

        Ok(StringEntry {
            attributes,
            content,
            name,
            value,
        })
    }

    /// Builds a plain `<string name="...">text</string>` entry, escaping both parts.
    pub fn plain(name: &str, text: &str) -> Self {
        StringEntry {
            attributes: vec![Attribute::new("name", escape(name))],
            content: escape(text).into_owned(),
            name: Some(name.to_string()),
            value: text.to_string(),
        }
    }

    /// The unescaped `name` attribute, if the element has one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The text value used for duplicate detection.
    ///
    /// This is the text before the first child element: `Hello <b>%1$s</b>` has the value
    /// `Hello `. Character data is unescaped, CDATA sections are taken literally and comments
    /// are dropped.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Looks up a raw attribute value by key.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.raw_value.as_str())
    }
}

fn text_value(content: &str) -> Result<String, Error> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(false);

    let mut value = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(e) => value.push_str(&e.unescape()?),
            Event::CData(e) => value.push_str(&String::from_utf8_lossy(&e)),
            Event::Start(_) | Event::Empty(_) | Event::Eof => break,
            _ => {}
        }
    }
    Ok(value)
}

/// Whether an attribute key declares a namespace (`xmlns` or `xmlns:prefix`).
pub fn is_namespace_declaration(key: &str) -> bool {
    key == "xmlns" || key.starts_with("xmlns:")
}

/// Module identifier derived from a file's location, e.g. `feature:login`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ModuleName(String);

impl ModuleName {
    pub const UNKNOWN: &'static str = "unknown";

    pub fn new(name: impl Into<String>) -> Self {
        ModuleName(name.into())
    }

    /// The fallback name used when a path has no module segment.
    pub fn unknown() -> Self {
        ModuleName(Self::UNKNOWN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN
    }
}

impl Display for ModuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The strings contributed by one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleSection {
    pub module: ModuleName,
    pub source: PathBuf,
    pub strings: Vec<StringEntry>,
}

impl ModuleSection {
    pub fn new(module: ModuleName, source: impl AsRef<Path>, strings: Vec<StringEntry>) -> Self {
        ModuleSection {
            module,
            source: source.as_ref().to_path_buf(),
            strings,
        }
    }

    /// Text of the marker comment placed before this section.
    pub fn comment(&self) -> String {
        format!("From module: {}", self.module)
    }
}

/// A node of the combined document, in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<'a> {
    Comment(String),
    String(&'a StringEntry),
}

/// All sections in file-discovery order.
///
/// Names are not required to be unique; entries from different modules are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CombinedDocument {
    /// Namespace declarations gathered from the source roots, in first-seen order.
    pub namespaces: Vec<Attribute>,
    pub sections: Vec<ModuleSection>,
}

impl CombinedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_section(&mut self, section: ModuleSection) {
        self.sections.push(section);
    }

    /// Adds the namespace declarations of one source root.
    ///
    /// Declarations already present are skipped. A prefix bound to a different URI is an
    /// error, in which case nothing is added.
    pub fn declare_namespaces(&mut self, declarations: &[Attribute]) -> Result<(), Error> {
        for declaration in declarations {
            let conflict = self
                .namespaces
                .iter()
                .find(|ns| ns.key == declaration.key && ns.raw_value != declaration.raw_value);
            if let Some(existing) = conflict {
                return Err(Error::NamespaceConflict {
                    key: declaration.key.clone(),
                    existing: existing.raw_value.clone(),
                    conflicting: declaration.raw_value.clone(),
                });
            }
        }
        for declaration in declarations {
            if !self.namespaces.iter().any(|ns| ns.key == declaration.key) {
                self.namespaces.push(declaration.clone());
            }
        }
        Ok(())
    }

    /// Flattens the document into comment and string nodes.
    pub fn nodes(&self) -> impl Iterator<Item = Node<'_>> {
        self.sections.iter().flat_map(|section| {
            std::iter::once(Node::Comment(section.comment()))
                .chain(section.strings.iter().map(Node::String))
        })
    }

    /// Every string entry paired with the section it came from.
    pub fn strings(&self) -> impl Iterator<Item = (&ModuleSection, &StringEntry)> {
        self.sections
            .iter()
            .flat_map(|section| section.strings.iter().map(move |entry| (section, entry)))
    }

    pub fn string_count(&self) -> usize {
        self.sections.iter().map(|s| s.strings.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
