use egui::Pos2;
use log::{trace, warn};

use super::ToolSettings;
use crate::command::{Command, CommandHistory};
use crate::document::Document;

/// Where the controller is within a pointer gesture
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GestureState {
    #[default]
    Idle,
    Drawing,
}

/// Input delivered by the host, in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Pos2),
    Drag(Pos2),
    DragEnd,
    ClearRequested,
}

/// Turns pointer gestures into strokes on a [`Document`].
///
/// The document is mutated as the gesture happens, so the stroke is visible
/// while it is drawn. Each finished gesture and each clear is recorded for
/// undo.
#[derive(Debug, Default)]
pub struct DrawingController {
    state: GestureState,
    history: CommandHistory,
}

impl DrawingController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn handle_event(&mut self, event: PointerEvent, doc: &mut Document, tools: &ToolSettings) {
        match event {
            PointerEvent::Down(pos) => self.on_pointer_down(pos, doc, tools),
            PointerEvent::Drag(pos) => self.on_pointer_drag(pos, doc),
            PointerEvent::DragEnd => self.on_pointer_drag_end(doc),
            PointerEvent::ClearRequested => self.on_clear(doc),
        }
    }

    /// Start a new stroke with the current pen, beginning at `pos`
    pub fn on_pointer_down(&mut self, pos: Pos2, doc: &mut Document, tools: &ToolSettings) {
        if self.state == GestureState::Drawing {
            // The previous gesture never saw its end event.
            self.finish_gesture(doc);
        }

        trace!("Starting stroke at {:?}", pos);
        doc.begin_stroke(tools.current_color(), tools.current_width());
        doc.add_point_to_current(pos);
        self.state = GestureState::Drawing;
    }

    /// Extend the stroke of the current gesture to `pos`
    pub fn on_pointer_drag(&mut self, pos: Pos2, doc: &mut Document) {
        if self.state != GestureState::Drawing {
            warn!("Pointer drag at {:?} outside of a gesture", pos);
            return;
        }
        if !doc.add_point_to_current(pos) {
            warn!("Pointer drag at {:?} with no stroke to extend", pos);
        }
    }

    pub fn on_pointer_drag_end(&mut self, doc: &Document) {
        if self.state == GestureState::Drawing {
            self.finish_gesture(doc);
        }
        self.state = GestureState::Idle;
    }

    /// Remove every stroke from the drawing
    pub fn on_clear(&mut self, doc: &mut Document) {
        if self.state == GestureState::Drawing {
            self.finish_gesture(doc);
        }

        let previous = doc.replace_strokes(Vec::new());
        if !previous.is_empty() {
            self.history.record(Command::Clear { previous });
        }
        self.state = GestureState::Idle;
    }

    /// Undo the last finished gesture or clear. Ignored mid-gesture.
    pub fn undo(&mut self, doc: &mut Document) -> bool {
        if self.state == GestureState::Drawing {
            warn!("Ignoring undo while a stroke is being drawn");
            return false;
        }
        self.history.undo(doc)
    }

    /// Redo the last undone edit. Ignored mid-gesture.
    pub fn redo(&mut self, doc: &mut Document) -> bool {
        if self.state == GestureState::Drawing {
            warn!("Ignoring redo while a stroke is being drawn");
            return false;
        }
        self.history.redo(doc)
    }

    /// Forget the gesture and the undo history, e.g. after another file is opened
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
        self.history.clear();
    }

    fn finish_gesture(&mut self, doc: &Document) {
        if let Some(stroke) = doc.strokes().last() {
            self.history.record(Command::AddStroke(stroke.clone()));
        }
    }
}
