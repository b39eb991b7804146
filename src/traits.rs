//! Traits for reading and writing resource documents.

use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::Path,
};

use crate::error::Error;

/// A trait for parsing and writing one resource document.
///
/// # Example
///
/// ```rust,no_run
/// use stringsmerge::traits::Parser;
/// use stringsmerge::formats::AndroidStringsFormat;
///
/// let format = AndroidStringsFormat::read_from("app/src/main/res/values/strings.xml")?;
/// println!("{} strings", format.strings.len());
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Parse from an in-memory document.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse from any reader.
    ///
    /// The input is decoded to UTF-8 first; a UTF-16 or UTF-8 byte order mark is honored.
    fn from_reader<R: Read>(reader: R) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(reader);

        let mut decoded = String::new();
        decoder.read_to_string(&mut decoded).map_err(Error::Io)?;

        Self::from_str(&decoded)
    }

    /// Parse from bytes.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(bytes)
    }

    /// Parse from file path.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path).map_err(Error::Io)?;
        Self::from_reader(file)
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Write to file path.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.to_writer(&mut writer)?;
        writer.flush().map_err(Error::Io)
    }
}
