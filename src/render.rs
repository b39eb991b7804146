//! Tree-to-text rendering of the combined document.
//!
//! Layout produced with the default options:
//!
//! ```text
//! <resources>
//! 	<!-- From module: app -->
//! 	<string name="app_name">Demo</string>
//! </resources>
//! ```
//!
//! The `<resources>` tags sit at depth 0, every comment and `<string>` at depth 1. Inner
//! string content is written verbatim and never re-indented.

use std::{
    fmt::Write as _,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use crate::{
    error::Error,
    types::{Attribute, CombinedDocument, Node, StringEntry},
};

const RESOURCES_TAG: &str = "resources";
const STRING_TAG: &str = "string";

/// Controls how a document is laid out as text.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Text prepended to an indented line.
    pub indent: String,
    /// Decides whether a line at the given depth receives one `indent`.
    pub indent_depth: fn(usize) -> bool,
    /// Emit `<?xml version="1.0" encoding="utf-8"?>` before the root element.
    pub xml_declaration: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            indent: "\t".to_string(),
            indent_depth: |depth| depth > 0,
            xml_declaration: false,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indent unit.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Sets which depths are indented.
    pub fn with_indent_depth(mut self, indent_depth: fn(usize) -> bool) -> Self {
        self.indent_depth = indent_depth;
        self
    }

    /// Enables/disables the XML declaration.
    pub fn with_xml_declaration(mut self, xml_declaration: bool) -> Self {
        self.xml_declaration = xml_declaration;
        self
    }

    fn line_prefix(&self, depth: usize) -> &str {
        if (self.indent_depth)(depth) {
            &self.indent
        } else {
            ""
        }
    }

    /// Writes a `<resources>` document holding `nodes` to any writer.
    pub fn write<'a, I, W>(&self, nodes: I, writer: W) -> Result<(), Error>
    where
        I: IntoIterator<Item = Node<'a>>,
        W: Write,
    {
        self.write_resources(&[], nodes, writer)
    }

    /// Like [`write`](Self::write), declaring `namespaces` on the `<resources>` start tag.
    pub fn write_resources<'a, I, W>(
        &self,
        namespaces: &[Attribute],
        nodes: I,
        mut writer: W,
    ) -> Result<(), Error>
    where
        I: IntoIterator<Item = Node<'a>>,
        W: Write,
    {
        let mut xml_writer = Writer::new(&mut writer);

        if self.xml_declaration {
            xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
            xml_writer.write_event(Event::Text(BytesText::from_escaped("\n")))?;
        }

        xml_writer.write_event(Event::Text(BytesText::from_escaped(self.line_prefix(0))))?;
        xml_writer.write_event(Event::Start(start_tag(RESOURCES_TAG, namespaces)))?;

        for node in nodes {
            let line_start = format!("\n{}", self.line_prefix(1));
            xml_writer.write_event(Event::Text(BytesText::from_escaped(line_start)))?;
            match node {
                Node::Comment(text) => {
                    let comment = format!(" {} ", sanitize_comment(&text));
                    xml_writer.write_event(Event::Comment(BytesText::from_escaped(comment)))?;
                }
                Node::String(entry) => write_string(&mut xml_writer, entry)?,
            }
        }

        let line_start = format!("\n{}", self.line_prefix(0));
        xml_writer.write_event(Event::Text(BytesText::from_escaped(line_start)))?;
        xml_writer.write_event(Event::End(BytesEnd::new(RESOURCES_TAG)))?;
        xml_writer.write_event(Event::Text(BytesText::from_escaped("\n")))?;
        Ok(())
    }

    /// Renders a `<resources>` document holding `nodes` to a string.
    pub fn render<'a, I>(&self, nodes: I) -> Result<String, Error>
    where
        I: IntoIterator<Item = Node<'a>>,
    {
        let mut out = Vec::new();
        self.write(nodes, &mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

/// Builds a start tag with raw attribute values.
fn start_tag(name: &str, attributes: &[Attribute]) -> BytesStart<'static> {
    let mut content = String::from(name);
    for attr in attributes {
        let quote = if attr.raw_value.contains('"') { '\'' } else { '"' };
        // Writing into a String cannot fail
        let _ = write!(content, " {}={quote}{}{quote}", attr.key, attr.raw_value);
    }
    BytesStart::from_content(content, name.len())
}

fn write_string<W: Write>(xml_writer: &mut Writer<W>, entry: &StringEntry) -> Result<(), Error> {
    let start = start_tag(STRING_TAG, &entry.attributes);

    if entry.content.is_empty() {
        xml_writer.write_event(Event::Empty(start))?;
    } else {
        xml_writer.write_event(Event::Start(start))?;
        xml_writer.write_event(Event::Text(BytesText::from_escaped(entry.content.as_str())))?;
        xml_writer.write_event(Event::End(BytesEnd::new(STRING_TAG)))?;
    }
    Ok(())
}

/// `--` may not appear inside an XML comment.
fn sanitize_comment(text: &str) -> String {
    let mut text = text.to_string();
    while text.contains("--") {
        text = text.replace("--", "- -");
    }
    text
}

impl CombinedDocument {
    /// Renders the document with module comments to a string.
    pub fn render(&self, options: &RenderOptions) -> Result<String, Error> {
        let mut out = Vec::new();
        options.write_resources(&self.namespaces, self.nodes(), &mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    /// Writes the document to `path`, replacing any existing file.
    pub fn write_to<P: AsRef<Path>>(&self, path: P, options: &RenderOptions) -> Result<(), Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        options.write_resources(&self.namespaces, self.nodes(), &mut writer)?;
        writer.flush().map_err(Error::Io)
    }
}
