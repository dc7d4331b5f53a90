pub mod buffer;
pub mod command;
pub mod history;
pub mod interpreter;
pub mod render;

pub use buffer::Buffer;
pub use command::{Command, HELP};
pub use history::{History, Snapshot};
pub use interpreter::{EditorState, Outcome, StateReport};
pub use render::{render, CursorCell, LineView};
