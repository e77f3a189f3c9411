//! Committed path history with undo/redo.

use crate::path::DrawingPath;
use serde::{Deserialize, Serialize};

/// The persisted drawing: committed paths plus the redo buffer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingState {
    /// Committed paths, oldest first.
    #[serde(default)]
    pub paths: Vec<DrawingPath>,
    /// Undone paths; the last entry is the most recently undone.
    #[serde(default)]
    pub redo_paths: Vec<DrawingPath>,
}

impl DrawingState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if nothing has been drawn or undone.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.redo_paths.is_empty()
    }

    /// Serialize the state to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a state from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Two-stack history store.
///
/// Every path lives in exactly one of the two stacks until [`History::clear`]
/// drops both.
#[derive(Debug, Clone, Default)]
pub struct History {
    state: DrawingState,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history from a persisted state.
    pub fn from_state(state: DrawingState) -> Self {
        Self { state }
    }

    /// Borrow the underlying state.
    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    /// Committed paths, oldest first.
    pub fn paths(&self) -> &[DrawingPath] {
        &self.state.paths
    }

    /// Undone paths, most recently undone last.
    pub fn redo_paths(&self) -> &[DrawingPath] {
        &self.state.redo_paths
    }

    /// Append a finished path. Discards the redo buffer.
    pub fn commit(&mut self, path: DrawingPath) {
        log::debug!("Committing {} path {} ({} points)", path.tool.name(), path.id, path.len());
        self.state.redo_paths.clear();
        self.state.paths.push(path);
    }

    /// Drop the redo buffer (a new gesture branched off the timeline).
    pub fn discard_redo(&mut self) {
        self.state.redo_paths.clear();
    }

    /// Undo the last committed path.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        if let Some(path) = self.state.paths.pop() {
            log::debug!("Undo {}", path.id);
            self.state.redo_paths.push(path);
            true
        } else {
            false
        }
    }

    /// Redo the last undone path.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        if let Some(path) = self.state.redo_paths.pop() {
            log::debug!("Redo {}", path.id);
            self.state.paths.push(path);
            true
        } else {
            false
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.state.paths.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.state.redo_paths.is_empty()
    }

    /// Drop everything. Not undoable.
    pub fn clear(&mut self) {
        self.state.paths.clear();
        self.state.redo_paths.clear();
    }

    /// Replace the whole state.
    pub fn replace(&mut self, state: DrawingState) {
        self.state = state;
    }
}
