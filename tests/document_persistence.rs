use std::io::{Cursor, Write};

use egui::{Color32, Pos2};
use squiggle_paint::serializer::ARCHIVE_ENTRY_NAME;
use squiggle_paint::{Document, DocumentError, DrawingController, PointerEvent, ToolSettings};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

fn drawn_document() -> Document {
    let mut doc = Document::new();
    let mut controller = DrawingController::new();
    let mut tools = ToolSettings::default();
    tools.set_color(Color32::from_rgb(0xbd, 0x7e, 0xbe));
    tools.set_width(5.0);

    for event in [
        PointerEvent::Down(Pos2::new(1.0, 2.0)),
        PointerEvent::Drag(Pos2::new(3.0, 4.0)),
        PointerEvent::DragEnd,
        PointerEvent::Down(Pos2::new(7.0, 7.0)),
        PointerEvent::DragEnd,
    ] {
        controller.handle_event(event, &mut doc, &tools);
    }
    doc
}

#[test]
fn test_save_and_load_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sketch.pxz");

    let mut doc = drawn_document();
    assert!(doc.is_modified());
    doc.save_to_path(&path).unwrap();
    assert!(!doc.is_modified());
    assert_eq!(doc.user_readable_name(), "sketch.pxz");

    let mut loaded = Document::new();
    loaded.load_from_path(&path).unwrap();
    assert_eq!(loaded.strokes(), doc.strokes());
    assert_eq!(loaded.path(), Some(path.as_path()));
    assert_eq!(loaded.title("Paint App"), "sketch.pxz - Paint App");
}

#[test]
fn test_load_replaces_existing_strokes() {
    let mut saved = Document::new();
    saved.begin_stroke(Color32::WHITE, 2.0);
    saved.add_point_to_current(Pos2::new(9.0, 9.0));
    let mut bytes = Vec::new();
    saved.save(&mut bytes).unwrap();

    let mut doc = drawn_document();
    doc.load(bytes.as_slice()).unwrap();

    assert_eq!(doc.strokes(), saved.strokes());
    assert!(!doc.is_modified());
}

#[test]
fn test_load_without_entry_gives_empty_drawing() {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    zip.start_file("other.xml", SimpleFileOptions::default()).unwrap();
    zip.write_all(b"<PaintDocument/>").unwrap();
    let bytes = zip.finish().unwrap().into_inner();

    let mut doc = drawn_document();
    doc.load(bytes.as_slice()).unwrap();
    assert!(doc.is_empty());
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = drawn_document();
    let result = doc.load_from_path(dir.path().join("missing.pxz"));

    assert!(matches!(result, Err(DocumentError::Io(_))));
    assert_eq!(doc.strokes().len(), 2);
    assert!(doc.path().is_none());
}

#[test]
fn test_save_propagates_sink_failure() {
    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let mut doc = drawn_document();
    let result = doc.save(FailingSink);
    assert!(matches!(result, Err(DocumentError::Io(_))));
    assert!(doc.is_modified());
}

#[test]
fn test_saved_file_is_zip_with_drawing_entry() {
    let mut doc = drawn_document();
    let mut bytes = Vec::new();
    doc.save(&mut bytes).unwrap();

    let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    assert_eq!(archive.file_names().collect::<Vec<_>>(), vec![ARCHIVE_ENTRY_NAME]);
}

#[test]
fn test_clear_empties_and_marks_modified() {
    let mut doc = drawn_document();
    let mut bytes = Vec::new();
    doc.save(&mut bytes).unwrap();
    assert!(!doc.is_modified());

    doc.clear();
    assert!(doc.is_empty());
    assert!(doc.is_modified());

    let mut empty = Document::new();
    empty.clear();
    assert!(empty.is_modified());
}
