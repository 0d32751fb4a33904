mod commands;
mod history;

pub use commands::{CircleDrawCommand, ComposedCommand, DrawCommand, LineDrawCommand};
pub use history::CommandHistory;
