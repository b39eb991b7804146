//! Support for Android `strings.xml` resource files.
//!
//! Only top-level `<string>` elements are collected; `<plurals>`, `<string-array>` and other
//! resource types are skipped. Attributes and inner markup are kept verbatim.

use std::io::Write;

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use serde::Serialize;

use crate::{
    error::Error,
    render::RenderOptions,
    traits::Parser,
    types::{Attribute, Node, StringEntry, is_namespace_declaration},
};

const STRING_TAG: &[u8] = b"string";

#[derive(Debug, Serialize)]
pub struct Format {
    /// Name of the document element, normally `resources`.
    pub root: String,
    /// `xmlns` declarations on the document element, kept raw.
    pub namespaces: Vec<Attribute>,
    pub strings: Vec<StringEntry>,
}

impl Parser for Format {
    fn from_str(s: &str) -> Result<Self, Error> {
        let mut xml_reader = Reader::from_str(s);
        xml_reader.config_mut().trim_text(false);

        let mut root = None;
        let mut depth = 0usize;
        let mut strings = Vec::new();

        loop {
            match xml_reader.read_event()? {
                Event::Start(e) => {
                    if depth == 0 {
                        set_root(&mut root, &e)?;
                        depth += 1;
                    } else if depth == 1 && e.name().as_ref() == STRING_TAG {
                        let attributes = read_attributes(&e)?;
                        // Consumes everything up to and including the matching end tag
                        let content = xml_reader.read_text(e.name())?;
                        strings.push(StringEntry::new(attributes, content.into_owned())?);
                    } else {
                        depth += 1;
                    }
                }
                Event::Empty(e) => {
                    if depth == 0 {
                        set_root(&mut root, &e)?;
                    } else if depth == 1 && e.name().as_ref() == STRING_TAG {
                        strings.push(StringEntry::new(read_attributes(&e)?, String::new())?);
                    }
                }
                Event::End(_) => depth = depth.saturating_sub(1),
                Event::Text(e) if depth == 0 => {
                    if e.iter().any(|b| !b.is_ascii_whitespace()) {
                        return Err(Error::malformed("text outside of the root element"));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if depth != 0 {
            return Err(Error::malformed("unclosed element at end of document"));
        }
        let (root, namespaces) = root.ok_or_else(|| Error::malformed("no root element found"))?;

        Ok(Format {
            root,
            namespaces,
            strings,
        })
    }

    /// Writes a standalone `strings.xml` with the same layout as the combined output.
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        RenderOptions::default().write_resources(
            &self.namespaces,
            self.strings.iter().map(Node::String),
            writer,
        )
    }
}

fn set_root(root: &mut Option<(String, Vec<Attribute>)>, e: &BytesStart) -> Result<(), Error> {
    if root.is_some() {
        return Err(Error::malformed("more than one root element"));
    }
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let namespaces = read_attributes(e)?
        .into_iter()
        .filter(|a| is_namespace_declaration(&a.key))
        .collect();
    *root = Some((name, namespaces));
    Ok(())
}

fn read_attributes(e: &BytesStart) -> Result<Vec<Attribute>, Error> {
    e.attributes()
        .map(|attr| {
            let attr = attr?;
            Ok(Attribute::new(
                String::from_utf8_lossy(attr.key.as_ref()),
                String::from_utf8_lossy(&attr.value),
            ))
        })
        .collect()
}
