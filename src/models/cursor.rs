//! 光标模型：anchor + position 构成选区
//!
//! 不做边界检查，也不发事件；这些由 `EditModel` 负责。

use crate::core::{Position, Range};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionDirection {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Default)]
pub struct Cursor {
    anchor: Position,
    position: Position,
    /// 上下移动时尽量保持的列
    last_column: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchor(&self) -> Position {
        self.anchor
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn last_column(&self) -> usize {
        self.last_column
    }

    pub fn has_selection(&self) -> bool {
        self.anchor != self.position
    }

    /// Derived from the anchor/position pair, not from the normalized `selection()`.
    pub fn direction(&self) -> SelectionDirection {
        if self.anchor <= self.position {
            SelectionDirection::Forward
        } else {
            SelectionDirection::Backward
        }
    }

    pub fn selection_start(&self) -> Position {
        self.anchor.min(self.position)
    }

    pub fn selection_end(&self) -> Position {
        self.anchor.max(self.position)
    }

    pub fn selection(&self) -> Range {
        Range::from_positions(self.anchor, self.position)
    }

    /// 选区折叠到 `p`；`keep_last_column` 为真时保留粘滞列
    pub fn locate(&mut self, p: Position, keep_last_column: bool) {
        self.position = p;
        self.anchor = p;
        if !keep_last_column {
            self.last_column = p.column;
        }
    }

    pub fn select(&mut self, start: Position, end: Position) {
        self.anchor = start;
        self.position = end;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/cursor.rs"]
mod tests;
