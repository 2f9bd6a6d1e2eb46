//! lyedit - 编辑器文档编辑模型
//!
//! 模块结构：
//! - core: 基础类型（Position, Range, 字符分类）
//! - models: 数据模型（Text, TextBuffer, Cursor, EditModel, UndoService）
//! - services: 服务层（EditorConfig）
//! - editor: 编辑器入口，组装模型与撤销历史
//! - logging: tracing 初始化

pub mod core;
pub mod editor;
pub mod logging;
pub mod models;
pub mod services;

pub use crate::core::{Position, Range};
pub use editor::Editor;
pub use models::{EditModel, EditOperation, TextBuffer, TextChange, UndoService};
pub use services::EditorConfig;
