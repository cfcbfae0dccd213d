//! Caller-side undo/redo stacks
//!
//! The engine keeps no history of its own: every executed command hands back
//! its undo commands. [`CommandHistory`] is the optional helper that stacks
//! those groups for an editor.

use crate::commands::EditorCommand;
use crate::config::HistoryConfig;
use crate::error::CommandError;
use crate::events::EventBroker;
use crate::model::EditorModel;
use crate::update::{update, update_all};

/// Undo/redo stacks of command groups
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    undo_stack: Vec<Vec<EditorCommand>>,
    redo_stack: Vec<Vec<EditorCommand>>,
    max_size: usize,
}

impl CommandHistory {
    /// Create a new history with default max size
    pub fn new() -> Self {
        Self::with_max_size(HistoryConfig::default().max_size)
    }

    /// Create a new history with specified max size
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size,
        }
    }

    pub fn from_config(config: &HistoryConfig) -> Self {
        Self::with_max_size(config.max_size)
    }

    /// Execute `command` and record its undo group
    ///
    /// Commands that changed nothing leave the stacks untouched.
    pub fn execute(
        &mut self,
        model: &mut EditorModel,
        broker: &mut dyn EventBroker,
        command: EditorCommand,
    ) -> Result<(), CommandError> {
        let undo = update(model, broker, command)?;
        if !undo.is_empty() {
            self.push(undo);
        }
        Ok(())
    }

    /// Push an undo group (clears redo stack)
    pub fn push(&mut self, group: Vec<EditorCommand>) {
        self.redo_stack.clear();
        self.undo_stack.push(group);

        // Trim if exceeded max size
        while self.undo_stack.len() > self.max_size {
            self.undo_stack.remove(0);
        }
    }

    /// Undo the most recent group; `false` when there is nothing to undo
    ///
    /// A group that fails part way is rolled back and stays on the stack.
    pub fn undo(
        &mut self,
        model: &mut EditorModel,
        broker: &mut dyn EventBroker,
    ) -> Result<bool, CommandError> {
        let Some(group) = self.undo_stack.pop() else {
            return Ok(false);
        };
        match update_all(model, broker, group.clone()) {
            Ok(redo) => {
                self.redo_stack.push(redo);
                Ok(true)
            }
            Err(e) => {
                self.undo_stack.push(group);
                Err(e)
            }
        }
    }

    /// Redo the most recently undone group; `false` when there is nothing to redo
    pub fn redo(
        &mut self,
        model: &mut EditorModel,
        broker: &mut dyn EventBroker,
    ) -> Result<bool, CommandError> {
        let Some(group) = self.redo_stack.pop() else {
            return Ok(false);
        };
        match update_all(model, broker, group.clone()) {
            Ok(undo) => {
                self.undo_stack.push(undo);
                Ok(true)
            }
            Err(e) => {
                self.redo_stack.push(group);
                Err(e)
            }
        }
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}
