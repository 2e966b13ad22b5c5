use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use egui::{Color32, Pos2};
use log::{info, warn};

use crate::error::DocumentResult;
use crate::serializer::{self, ParsePolicy};
use crate::stroke::Stroke;

/// The drawing that is currently open: its strokes in draw order, whether
/// they changed since the last save or load, and the file they belong to.
#[derive(Debug, Clone, Default)]
pub struct Document {
    strokes: Vec<Stroke>,
    modified: bool,
    path: Option<PathBuf>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn modify(&mut self, modified: bool) {
        self.modified = modified;
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Start a new, empty stroke on top of the drawing
    pub fn begin_stroke(&mut self, color: Color32, width: f32) {
        self.strokes.push(Stroke::new(color, width));
        self.modified = true;
    }

    /// Append a point to the topmost stroke. Returns false if there is no stroke.
    pub fn add_point_to_current(&mut self, point: Pos2) -> bool {
        match self.strokes.last_mut() {
            Some(stroke) => {
                stroke.add_point(point);
                self.modified = true;
                true
            }
            None => false,
        }
    }

    pub(crate) fn push_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
        self.modified = true;
    }

    pub(crate) fn pop_stroke(&mut self) -> Option<Stroke> {
        let stroke = self.strokes.pop();
        if stroke.is_some() {
            self.modified = true;
        }
        stroke
    }

    pub(crate) fn replace_strokes(&mut self, strokes: Vec<Stroke>) -> Vec<Stroke> {
        self.modified = true;
        std::mem::replace(&mut self.strokes, strokes)
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.modified = true;
    }

    /// Write the drawing to `sink` in the `.pxz` format
    pub fn save<W: Write>(&mut self, sink: W) -> DocumentResult<()> {
        let doc = serializer::serialize_strokes(&self.strokes);
        serializer::compress_xml(&doc, sink)?;
        self.modified = false;
        Ok(())
    }

    /// Replace the drawing with the one read from `source`.
    ///
    /// On error the current strokes are left untouched. A source without a
    /// drawing entry loads as an empty drawing.
    pub fn load<R: Read>(&mut self, source: R) -> DocumentResult<()> {
        let doc = serializer::decompress_xml(source)?;
        if doc.is_empty() {
            warn!("Loaded archive has no {} entry", serializer::ARCHIVE_ENTRY_NAME);
        }
        self.strokes = serializer::deserialize_strokes(&doc, ParsePolicy::Permissive)?;
        self.modified = false;
        Ok(())
    }

    pub fn save_to_path(&mut self, path: impl AsRef<Path>) -> DocumentResult<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.save(&mut writer)?;
        writer.flush()?;
        self.path = Some(path.to_path_buf());
        info!("Saved {} strokes to {}", self.strokes.len(), path.display());
        Ok(())
    }

    pub fn load_from_path(&mut self, path: impl AsRef<Path>) -> DocumentResult<()> {
        let path = path.as_ref();
        self.load(BufReader::new(File::open(path)?))?;
        self.path = Some(path.to_path_buf());
        info!("Loaded {} strokes from {}", self.strokes.len(), path.display());
        Ok(())
    }

    /// File name shown to the user, or "unnamed" for a drawing never saved
    pub fn user_readable_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unnamed".to_owned())
    }

    /// Window title, e.g. `sketch.pxz - Edited - Paint App`
    pub fn title(&self, app_name: &str) -> String {
        let edited = if self.modified { " - Edited" } else { "" };
        format!("{}{} - {}", self.user_readable_name(), edited, app_name)
    }
}
