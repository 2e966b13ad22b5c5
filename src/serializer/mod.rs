//! Conversion between strokes and the `.pxz` drawing format: an XML tree
//! stored as the `paintdocument.xml` entry of a zip archive.
//!
//! ```xml
//! <PaintDocument version="1.1">
//!   <Object type="Path" color="#RRGGBB" width="3">
//!     <Point x="10" y="10"/>
//!   </Object>
//! </PaintDocument>
//! ```

mod archive;
pub mod attribute;
mod tree;

use egui::Pos2;
use log::{debug, warn};

pub use archive::{ARCHIVE_ENTRY_NAME, compress_xml, decompress_xml};
pub use attribute::ParsePolicy;
pub use tree::{XmlDocument, XmlElement};

use crate::error::DocumentResult;
use crate::stroke::Stroke;

pub const DOCUMENT_TAG: &str = "PaintDocument";
pub const FORMAT_VERSION: &str = "1.1";

const OBJECT_TAG: &str = "Object";
const PATH_TYPE: &str = "Path";
const POINT_TAG: &str = "Point";

/// Build the XML tree for a drawing. Stroke and point order are preserved.
pub fn serialize_strokes(strokes: &[Stroke]) -> XmlDocument {
    let mut root = XmlElement::new(DOCUMENT_TAG).with_attribute("version", FORMAT_VERSION);

    for stroke in strokes {
        let mut object = XmlElement::new(OBJECT_TAG)
            .with_attribute("type", PATH_TYPE)
            .with_attribute("color", attribute::format_color(stroke.color()))
            .with_attribute("width", attribute::format_decimal(stroke.width()));

        for point in stroke.points() {
            object.add_child(
                XmlElement::new(POINT_TAG)
                    .with_attribute("x", attribute::format_decimal(point.x))
                    .with_attribute("y", attribute::format_decimal(point.y)),
            );
        }

        root.add_child(object);
    }

    XmlDocument::new(root)
}

/// Read strokes back out of a drawing tree.
///
/// Root children that are not `Object`s, and objects of any type other than
/// `Path`, are skipped so newer files still open. An empty tree gives no strokes.
pub fn deserialize_strokes(doc: &XmlDocument, policy: ParsePolicy) -> DocumentResult<Vec<Stroke>> {
    let Some(root) = doc.root() else {
        return Ok(Vec::new());
    };

    if root.name() != DOCUMENT_TAG {
        warn!("Unexpected document root <{}>, reading it anyway", root.name());
    }
    match root.attribute("version") {
        Some(FORMAT_VERSION) => {}
        other => debug!("Reading document with version {:?}", other),
    }

    let mut strokes = Vec::new();
    for node in root.children() {
        if node.name() != OBJECT_TAG {
            debug!("Skipping <{}> element", node.name());
            continue;
        }

        match node.attribute("type") {
            Some(PATH_TYPE) => strokes.push(deserialize_path(node, policy)?),
            other => debug!("Skipping object of unsupported type {:?}", other),
        }
    }

    Ok(strokes)
}

fn deserialize_path(node: &XmlElement, policy: ParsePolicy) -> DocumentResult<Stroke> {
    let color = policy.color("color", node.attribute("color"))?;
    let width = policy.decimal("width", node.attribute("width"))?;

    let mut stroke = Stroke::new(color, width);
    for point in node.children().iter().filter(|child| child.name() == POINT_TAG) {
        let x = policy.decimal("x", point.attribute("x"))?;
        let y = policy.decimal("y", point.attribute("y"))?;
        stroke.add_point(Pos2::new(x, y));
    }

    Ok(stroke)
}
