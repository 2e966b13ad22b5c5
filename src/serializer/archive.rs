use std::io::{Cursor, Read, Write};

use log::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use super::tree::XmlDocument;
use crate::error::DocumentResult;

/// Name of the archive entry that holds the drawing
pub const ARCHIVE_ENTRY_NAME: &str = "paintdocument.xml";

/// Write `doc` as the single entry of a zip archive into `sink`.
///
/// The archive is assembled in memory so the sink only needs to be `Write`.
pub fn compress_xml<W: Write>(doc: &XmlDocument, mut sink: W) -> DocumentResult<()> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file(ARCHIVE_ENTRY_NAME, options)?;
    zip.write_all(doc.to_xml_string().as_bytes())?;
    let bytes = zip.finish()?.into_inner();

    sink.write_all(&bytes)?;
    sink.flush()?;
    Ok(())
}

/// Read the drawing entry out of a zip archive.
///
/// Other entries are skipped. An archive without the drawing entry yields an
/// empty document, which callers treat as "nothing loaded".
pub fn decompress_xml<R: Read>(mut source: R) -> DocumentResult<XmlDocument> {
    let mut bytes = Vec::new();
    source.read_to_end(&mut bytes)?;
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.name() != ARCHIVE_ENTRY_NAME {
            debug!("Skipping archive entry {:?}", entry.name());
            continue;
        }

        let mut raw = Vec::new();
        entry.read_to_end(&mut raw)?;
        return XmlDocument::parse(&String::from_utf8(raw)?);
    }

    debug!("Archive has no {} entry", ARCHIVE_ENTRY_NAME);
    Ok(XmlDocument::empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocumentError;
    use crate::serializer::tree::XmlElement;

    fn archive_with(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in entries {
            zip.start_file(*name, SimpleFileOptions::default()).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }

    #[test]
    fn test_archive_round_trip() {
        let mut root = XmlElement::new("PaintDocument").with_attribute("version", "1.1");
        root.add_child(XmlElement::new("Object").with_attribute("type", "Path"));
        let doc = XmlDocument::new(root);

        let mut bytes = Vec::new();
        compress_xml(&doc, &mut bytes).unwrap();

        assert_eq!(decompress_xml(bytes.as_slice()).unwrap(), doc);
    }

    #[test]
    fn test_archive_contains_single_named_entry() {
        let doc = XmlDocument::new(XmlElement::new("PaintDocument"));
        let mut bytes = Vec::new();
        compress_xml(&doc, &mut bytes).unwrap();

        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 1);
        assert_eq!(archive.file_names().collect::<Vec<_>>(), vec![ARCHIVE_ENTRY_NAME]);
    }

    #[test]
    fn test_other_entries_are_skipped() {
        let bytes = archive_with(&[
            ("thumbnail.png", "not really a png"),
            (ARCHIVE_ENTRY_NAME, "<PaintDocument version=\"1.1\"/>"),
        ]);

        let doc = decompress_xml(bytes.as_slice()).unwrap();
        assert_eq!(doc.root().map(|root| root.name()), Some("PaintDocument"));
    }

    #[test]
    fn test_missing_entry_yields_empty_document() {
        let bytes = archive_with(&[("notes.txt", "hello")]);
        let doc = decompress_xml(bytes.as_slice()).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_not_an_archive_is_an_error() {
        let result = decompress_xml(&b"definitely not a zip file"[..]);
        assert!(matches!(result, Err(DocumentError::Archive(_))));
    }

    #[test]
    fn test_malformed_entry_is_an_error() {
        let bytes = archive_with(&[(ARCHIVE_ENTRY_NAME, "<PaintDocument>")]);
        let result = decompress_xml(bytes.as_slice());
        assert!(matches!(result, Err(DocumentError::Xml(_))));
    }
}
