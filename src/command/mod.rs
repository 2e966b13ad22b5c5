mod history;

pub use history::CommandHistory;

use log::warn;

use crate::document::Document;
use crate::stroke::Stroke;

/// A completed edit that can be undone and redone
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// A finished gesture left this stroke on top of the drawing
    AddStroke(Stroke),
    /// The drawing was cleared; `previous` holds what was there
    Clear { previous: Vec<Stroke> },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddStroke(_) => "Add Stroke",
            Command::Clear { .. } => "Clear",
        }
    }

    /// Re-apply the edit to a document in the state from before it
    pub(crate) fn apply(&self, doc: &mut Document) {
        match self {
            Command::AddStroke(stroke) => doc.push_stroke(stroke.clone()),
            Command::Clear { .. } => doc.clear(),
        }
    }

    /// Take the edit back out of a document in the state right after it
    pub(crate) fn revert(&self, doc: &mut Document) {
        match self {
            Command::AddStroke(stroke) => {
                if doc.strokes().last() != Some(stroke) {
                    warn!("Undoing a stroke that is no longer on top of the drawing");
                }
                doc.pop_stroke();
            }
            Command::Clear { previous } => {
                doc.replace_strokes(previous.clone());
            }
        }
    }
}
