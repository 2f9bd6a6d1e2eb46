//! 数据模型层

pub mod cursor;
pub mod edit_history;
pub mod edit_model;
pub mod event;
pub mod text;
pub mod text_buffer;
pub mod text_change;

pub use cursor::{Cursor, SelectionDirection};
pub use edit_history::{EditUndoOperation, Merge, UndoService};
pub use edit_model::{DeleteDirection, Direction, EditModel, EditTarget};
pub use event::{EditSource, Listener, ListenerId, Listeners, ModelEvent};
pub use text::{slice_to_cow, Chunk, Chunks, Line, Text};
pub use text_buffer::{is_supported_eol, TextBuffer, DEFAULT_EOL, SUPPORTED_EOLS};
pub use text_change::{EditOperation, TextChange};
