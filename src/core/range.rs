//! 区间：一对有序的 Position
//!
//! 构造时保证 start <= end，反向传入的端点会被交换。

use super::position::Position;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Anything that carries a start/end coordinate quad.
pub trait RangeLike {
    fn start_line_number(&self) -> usize;
    fn start_column(&self) -> usize;
    fn end_line_number(&self) -> usize;
    fn end_column(&self) -> usize;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[usize; 4]", into = "[usize; 4]")]
pub struct Range {
    start_line_number: usize,
    start_column: usize,
    end_line_number: usize,
    end_column: usize,
}

impl Range {
    pub fn new(
        start_line_number: usize,
        start_column: usize,
        end_line_number: usize,
        end_column: usize,
    ) -> Self {
        if (start_line_number, start_column) > (end_line_number, end_column) {
            Self {
                start_line_number: end_line_number,
                start_column: end_column,
                end_line_number: start_line_number,
                end_column: start_column,
            }
        } else {
            Self {
                start_line_number,
                start_column,
                end_line_number,
                end_column,
            }
        }
    }

    pub fn from_positions(start: Position, end: Position) -> Self {
        Self::new(start.line_number, start.column, end.line_number, end.column)
    }

    /// Empty range at `pos`.
    pub fn at(pos: Position) -> Self {
        Self::from_positions(pos, pos)
    }

    pub fn lift(range: Option<&impl RangeLike>) -> Option<Self> {
        range.map(|r| {
            Self::new(
                r.start_line_number(),
                r.start_column(),
                r.end_line_number(),
                r.end_column(),
            )
        })
    }

    pub fn start_line_number(&self) -> usize {
        self.start_line_number
    }

    pub fn start_column(&self) -> usize {
        self.start_column
    }

    pub fn end_line_number(&self) -> usize {
        self.end_line_number
    }

    pub fn end_column(&self) -> usize {
        self.end_column
    }

    pub fn start(&self) -> Position {
        Position::new(self.start_line_number, self.start_column)
    }

    pub fn end(&self) -> Position {
        Position::new(self.end_line_number, self.end_column)
    }

    pub fn is_empty(&self) -> bool {
        self.start_line_number == self.end_line_number && self.start_column == self.end_column
    }

    pub fn spans_multiple_lines(&self) -> bool {
        self.end_line_number > self.start_line_number
    }

    /// 位置落在边界上也算包含
    pub fn contains_position(&self, position: Position) -> bool {
        if position.line_number < self.start_line_number
            || position.line_number > self.end_line_number
        {
            return false;
        }
        if position.line_number == self.start_line_number && position.column < self.start_column {
            return false;
        }
        !(position.line_number == self.end_line_number && position.column > self.end_column)
    }

    /// Reflexive: a range contains itself.
    pub fn contains_range(&self, other: &Range) -> bool {
        if other.start_line_number < self.start_line_number
            || other.end_line_number < self.start_line_number
        {
            return false;
        }
        if other.start_line_number > self.end_line_number
            || other.end_line_number > self.end_line_number
        {
            return false;
        }
        if other.start_line_number == self.start_line_number
            && other.start_column < self.start_column
        {
            return false;
        }
        !(other.end_line_number == self.end_line_number && other.end_column > self.end_column)
    }

    /// `other` must start strictly after and end strictly before this range.
    pub fn strict_contains_range(&self, other: &Range) -> bool {
        if other.start_line_number < self.start_line_number
            || other.end_line_number < self.start_line_number
        {
            return false;
        }
        if other.start_line_number > self.end_line_number
            || other.end_line_number > self.end_line_number
        {
            return false;
        }
        if other.start_line_number == self.start_line_number
            && other.start_column <= self.start_column
        {
            return false;
        }
        !(other.end_line_number == self.end_line_number && other.end_column >= self.end_column)
    }

    /// 并集：取较小的起点与较大的终点
    pub fn plus_range(&self, other: &Range) -> Range {
        let (start_line_number, start_column) =
            match other.start_line_number.cmp(&self.start_line_number) {
                Ordering::Less => (other.start_line_number, other.start_column),
                Ordering::Equal => (
                    other.start_line_number,
                    other.start_column.min(self.start_column),
                ),
                Ordering::Greater => (self.start_line_number, self.start_column),
            };
        let (end_line_number, end_column) =
            match other.end_line_number.cmp(&self.end_line_number) {
                Ordering::Greater => (other.end_line_number, other.end_column),
                Ordering::Equal => (other.end_line_number, other.end_column.max(self.end_column)),
                Ordering::Less => (self.end_line_number, self.end_column),
            };
        Range::new(start_line_number, start_column, end_line_number, end_column)
    }

    /// 交集；两区间不相交时返回 `None`
    pub fn intersect_ranges(&self, other: &Range) -> Option<Range> {
        let mut start_line_number = self.start_line_number;
        let mut start_column = self.start_column;
        let mut end_line_number = self.end_line_number;
        let mut end_column = self.end_column;

        match start_line_number.cmp(&other.start_line_number) {
            Ordering::Less => {
                start_line_number = other.start_line_number;
                start_column = other.start_column;
            }
            Ordering::Equal => start_column = start_column.max(other.start_column),
            Ordering::Greater => {}
        }

        match end_line_number.cmp(&other.end_line_number) {
            Ordering::Greater => {
                end_line_number = other.end_line_number;
                end_column = other.end_column;
            }
            Ordering::Equal => end_column = end_column.min(other.end_column),
            Ordering::Less => {}
        }

        if start_line_number > end_line_number {
            return None;
        }
        if start_line_number == end_line_number && start_column > end_column {
            return None;
        }
        Some(Range::new(
            start_line_number,
            start_column,
            end_line_number,
            end_column,
        ))
    }

    pub fn equals_range(&self, other: Option<&Range>) -> bool {
        other.is_some_and(|o| o == self)
    }

    /// Keeps this range's end, replaces the start.
    pub fn set_start_position(&self, start_line_number: usize, start_column: usize) -> Range {
        Range::new(
            start_line_number,
            start_column,
            self.end_line_number,
            self.end_column,
        )
    }

    /// Keeps this range's start, replaces the end.
    pub fn set_end_position(&self, end_line_number: usize, end_column: usize) -> Range {
        Range::new(
            self.start_line_number,
            self.start_column,
            end_line_number,
            end_column,
        )
    }

    pub fn collapse_to_start(&self) -> Range {
        Range::at(self.start())
    }

    /// 两端同时平移
    pub fn transform(&self, delta_line: isize, delta_column: isize) -> Range {
        Range::from_positions(
            self.start().transform(delta_line, delta_column),
            self.end().transform(delta_line, delta_column),
        )
    }

    /// Touching ranges count as intersecting.
    pub fn are_intersecting_or_touching(a: &Range, b: &Range) -> bool {
        if a.end_line_number < b.start_line_number
            || (a.end_line_number == b.start_line_number && a.end_column < b.start_column)
        {
            return false;
        }
        if b.end_line_number < a.start_line_number
            || (b.end_line_number == a.start_line_number && b.end_column < a.start_column)
        {
            return false;
        }
        true
    }

    /// Ranges that only touch at a boundary do not intersect.
    pub fn are_intersecting(a: &Range, b: &Range) -> bool {
        if a.end_line_number < b.start_line_number
            || (a.end_line_number == b.start_line_number && a.end_column <= b.start_column)
        {
            return false;
        }
        if b.end_line_number < a.start_line_number
            || (b.end_line_number == a.start_line_number && b.end_column <= a.start_column)
        {
            return false;
        }
        true
    }

    /// 排序用：先比较起点，再比较终点。`None` 排在最前。
    pub fn compare_ranges_using_starts(a: Option<&Range>, b: Option<&Range>) -> Ordering {
        match (a, b) {
            (Some(a), Some(b)) => a
                .start_line_number
                .cmp(&b.start_line_number)
                .then(a.start_column.cmp(&b.start_column))
                .then(a.end_line_number.cmp(&b.end_line_number))
                .then(a.end_column.cmp(&b.end_column)),
            (a, b) => a.is_some().cmp(&b.is_some()),
        }
    }

    /// 排序用：先比较终点，再比较起点
    pub fn compare_ranges_using_ends(a: &Range, b: &Range) -> Ordering {
        a.end_line_number
            .cmp(&b.end_line_number)
            .then(a.end_column.cmp(&b.end_column))
            .then(a.start_line_number.cmp(&b.start_line_number))
            .then(a.start_column.cmp(&b.start_column))
    }
}

impl RangeLike for Range {
    fn start_line_number(&self) -> usize {
        self.start_line_number
    }

    fn start_column(&self) -> usize {
        self.start_column
    }

    fn end_line_number(&self) -> usize {
        self.end_line_number
    }

    fn end_column(&self) -> usize {
        self.end_column
    }
}

impl RangeLike for [usize; 4] {
    fn start_line_number(&self) -> usize {
        self[0]
    }

    fn start_column(&self) -> usize {
        self[1]
    }

    fn end_line_number(&self) -> usize {
        self[2]
    }

    fn end_column(&self) -> usize {
        self[3]
    }
}

impl From<[usize; 4]> for Range {
    fn from(quad: [usize; 4]) -> Self {
        Range::new(quad[0], quad[1], quad[2], quad[3])
    }
}

impl From<Range> for [usize; 4] {
    fn from(r: Range) -> Self {
        [
            r.start_line_number,
            r.start_column,
            r.end_line_number,
            r.end_column,
        ]
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{} -> {},{}]",
            self.start_line_number, self.start_column, self.end_line_number, self.end_column
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/range.rs"]
mod tests;
