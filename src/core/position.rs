//! 文档坐标：行号与列号（均从 0 开始）
//!
//! 列的取值范围是 `[0, line.len()]`，比一行中的字符数多 1。

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Anything that carries a `(line, column)` pair.
pub trait PositionLike {
    fn line_number(&self) -> usize;
    fn column(&self) -> usize;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line_number: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line_number: usize, column: usize) -> Self {
        Self {
            line_number,
            column,
        }
    }

    pub fn tuple(&self) -> (usize, usize) {
        (self.line_number, self.column)
    }

    /// 以当前位置为基础创建新位置，`None` 表示沿用原值
    pub fn with(&self, line_number: Option<usize>, column: Option<usize>) -> Self {
        Self {
            line_number: line_number.unwrap_or(self.line_number),
            column: column.unwrap_or(self.column),
        }
    }

    /// 平移变换，结果在 0 处饱和
    pub fn transform(&self, delta_line: isize, delta_column: isize) -> Self {
        Self {
            line_number: self.line_number.saturating_add_signed(delta_line),
            column: self.column.saturating_add_signed(delta_column),
        }
    }

    pub fn equals(&self, other: &impl PositionLike) -> bool {
        self.line_number == other.line_number() && self.column == other.column()
    }

    /// Strictly before; equal positions yield `false`.
    pub fn is_before(&self, other: &Position) -> bool {
        self < other
    }

    pub fn is_before_or_equal(&self, other: &Position) -> bool {
        self <= other
    }

    /// Sign of the comparison: line first, then column.
    pub fn compare(a: &Position, b: &Position) -> Ordering {
        a.line_number
            .cmp(&b.line_number)
            .then(a.column.cmp(&b.column))
    }

    pub fn lift(pos: &impl PositionLike) -> Self {
        Self::new(pos.line_number(), pos.column())
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        Position::compare(self, other)
    }
}

impl PositionLike for Position {
    fn line_number(&self) -> usize {
        self.line_number
    }

    fn column(&self) -> usize {
        self.column
    }
}

impl PositionLike for (usize, usize) {
    fn line_number(&self) -> usize {
        self.0
    }

    fn column(&self) -> usize {
        self.1
    }
}

impl From<(usize, usize)> for Position {
    fn from((line_number, column): (usize, usize)) -> Self {
        Self::new(line_number, column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.line_number, self.column)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/position.rs"]
mod tests;
