use super::DrawCommand;

/// Ordered record of committed gestures.
///
/// Each entry is one undo unit: a composed stroke or a single tap. Entries
/// are only ever appended, or removed from the end by an undo.
#[derive(Debug, Default, Clone)]
pub struct CommandHistory {
    entries: Vec<DrawCommand>,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a committed gesture
    pub fn push(&mut self, command: impl Into<DrawCommand>) {
        self.entries.push(command.into());
    }

    /// Remove and return the most recent entry
    pub fn pop(&mut self) -> Option<DrawCommand> {
        self.entries.pop()
    }

    /// All entries in paint order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }
}
