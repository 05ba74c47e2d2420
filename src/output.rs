use crate::error::CrawlError;
use crate::results::CrawlDocument;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serializes the document as UTF-8 JSON indented by four spaces, with a
/// trailing newline
pub fn to_json(document: &CrawlDocument) -> Result<Vec<u8>, CrawlError> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(Vec::new(), formatter);
    document
        .serialize(&mut serializer)
        .map_err(CrawlError::Output)?;

    let mut buf = serializer.into_inner();
    buf.push(b'\n');
    Ok(buf)
}

/// Writes the document to `path`, replacing whatever was there
pub fn write_document<P: AsRef<Path>>(path: P, document: &CrawlDocument) -> Result<(), CrawlError> {
    let json = to_json(document)?;

    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    writer.write_all(&json)?;
    writer.flush()?;

    ::log::info!(
        "Saved {} pages to '{}'",
        document.total_pages,
        path.as_ref().display()
    );
    Ok(())
}
