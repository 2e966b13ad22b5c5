use log::debug;

use super::Command;
use crate::document::Document;

/// Undo and redo stacks for the edits made to one document
#[derive(Debug, Default)]
pub struct CommandHistory {
    undo_stack: Vec<Command>,
    redo_stack: Vec<Command>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an edit that has already been applied to the document.
    /// Anything that could have been redone is dropped.
    pub fn record(&mut self, command: Command) {
        debug!("Recording {}", command.name());
        self.undo_stack.push(command);
        self.redo_stack.clear();
    }

    /// Undo the most recent edit. Returns false if there was nothing to undo.
    pub fn undo(&mut self, doc: &mut Document) -> bool {
        let Some(command) = self.undo_stack.pop() else {
            return false;
        };
        command.revert(doc);
        self.redo_stack.push(command);
        true
    }

    /// Redo the most recently undone edit. Returns false if there was nothing to redo.
    pub fn redo(&mut self, doc: &mut Document) -> bool {
        let Some(command) = self.redo_stack.pop() else {
            return false;
        };
        command.apply(doc);
        self.undo_stack.push(command);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_name(&self) -> Option<&'static str> {
        self.undo_stack.last().map(Command::name)
    }

    pub fn redo_name(&self) -> Option<&'static str> {
        self.redo_stack.last().map(Command::name)
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
