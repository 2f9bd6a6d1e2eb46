//! 文本缓冲区模型
//!
//! 职责：
//! - 持有唯一的不可变文本实例（`Text`），对外提供从 0 开始的行列坐标
//! - 坐标校验与越界修正
//! - 行列 ↔ 字符偏移映射
//! - 应用编辑并返回 `TextChange`
//!
//! 行的范围：`[0, lines)`；列的范围：`[0, line_length]`。

use super::text::Text;
use super::text_change::{EditOperation, TextChange};
use crate::core::{Position, Range};
use std::borrow::Cow;

pub const DEFAULT_EOL: &str = "\n";

/// Line separators a buffer can be configured with.
pub const SUPPORTED_EOLS: [&str; 2] = ["\n", "\r\n"];

pub fn is_supported_eol(eol: &str) -> bool {
    SUPPORTED_EOLS.contains(&eol)
}

#[derive(Clone, Debug)]
pub struct TextBuffer {
    doc: Text,
    eol: String,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            doc: Text::empty(),
            eol: DEFAULT_EOL.to_string(),
        }
    }

    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.set_text(text);
        buffer
    }

    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut buffer = Self::new();
        buffer.set_lines(lines);
        buffer
    }

    /// 不支持的换行符被忽略，保留当前值
    pub fn with_eol(mut self, eol: impl Into<String>) -> Self {
        let eol = eol.into();
        if is_supported_eol(&eol) {
            self.eol = eol;
        } else {
            tracing::warn!(eol = ?eol, kept = ?self.eol, "unsupported eol marker ignored");
        }
        self
    }

    pub fn eol(&self) -> &str {
        &self.eol
    }

    pub fn lines(&self) -> usize {
        self.doc.lines()
    }

    /// Length in the offset space: every line break counts as one char.
    pub fn chars_count(&self) -> usize {
        self.doc.len()
    }

    /// Whole document joined with the eol marker.
    pub fn text(&self) -> String {
        self.doc.slice_string(0, self.doc.len(), &self.eol)
    }

    pub fn to_lines(&self) -> Vec<String> {
        self.doc.to_lines()
    }

    /// 整个文档的区间
    pub fn range(&self) -> Range {
        let last = self.lines() - 1;
        Range::new(0, 0, last, self.line_length(last))
    }

    /// 整个字符串交给 `Text` 分行
    pub fn set_text(&mut self, text: &str) {
        self.doc = Text::of(&[text]);
    }

    /// 字符串数组原样传入，元素内部仍可包含换行符
    pub fn set_lines<S: AsRef<str>>(&mut self, lines: &[S]) {
        self.doc = Text::of(lines);
    }

    /// # Panics
    ///
    /// Panics if `line >= self.lines()`. Use [`TextBuffer::get_line_string`] for a checked variant.
    pub fn line_string(&self, line: usize) -> Cow<'_, str> {
        self.doc.line(line + 1).text
    }

    pub fn get_line_string(&self, line: usize) -> Option<Cow<'_, str>> {
        (line < self.lines()).then(|| self.line_string(line))
    }

    /// # Panics
    ///
    /// Panics if `line >= self.lines()`.
    pub fn line_length(&self, line: usize) -> usize {
        self.doc.line(line + 1).length
    }

    /// Text covered by `range`, lines joined with the eol marker. Invalid ranges yield `""`.
    pub fn range_text(&self, range: &Range) -> String {
        if range.is_empty() {
            return String::new();
        }
        if !self.is_valid_range(range) {
            tracing::debug!(range = %range, "range_text on invalid range");
            return String::new();
        }
        let (from, to) = self.range_to_offsets(range);
        self.doc.slice_string(from, to, &self.eol)
    }

    /// Lines with index in `[start, end]`, both clamped to the document.
    pub fn slice(&self, start: usize, end: usize) -> Vec<String> {
        let end = end.min(self.lines());
        let mut idx = 0usize;
        let mut out = Vec::new();
        for chunk in self.doc.iter() {
            if idx > end {
                break;
            }
            if chunk.line_break {
                idx += 1;
            } else if idx >= start {
                out.push(chunk.text.into_owned());
            }
        }
        out
    }

    pub fn is_valid_position(&self, p: Position) -> bool {
        p.line_number < self.lines() && p.column <= self.line_length(p.line_number)
    }

    /// 空区间总是合法的；否则两端都必须落在文档中
    pub fn is_valid_range(&self, range: &Range) -> bool {
        if range.is_empty() {
            return true;
        }
        if range.end_line_number() >= self.lines() {
            return false;
        }
        range.start_column() <= self.line_length(range.start_line_number())
            && range.end_column() <= self.line_length(range.end_line_number())
    }

    // ==================== 边界判断 ====================

    pub fn at_buffer_start(&self, p: Position) -> bool {
        p.line_number == 0 && p.column == 0
    }

    pub fn at_buffer_end(&self, p: Position) -> bool {
        p.line_number == self.lines() - 1 && p.column == self.line_length(p.line_number)
    }

    pub fn at_line_start(&self, p: Position) -> bool {
        p.column == 0
    }

    /// `p.line_number` must be a valid line.
    pub fn at_line_end(&self, p: Position) -> bool {
        p.column == self.line_length(p.line_number)
    }

    // ==================== 坐标映射 ====================

    pub fn offset_at(&self, p: Position) -> Option<usize> {
        self.is_valid_position(p).then(|| self.raw_offset_at(p))
    }

    pub fn position_at(&self, offset: usize) -> Option<Position> {
        if offset > self.chars_count() {
            return None;
        }
        let (line, column) = self.doc.position_at(offset);
        Some(Position::new(line - 1, column))
    }

    /// 对光标位置进行越界修正
    pub fn validate_position(&self, p: Position) -> Position {
        let line = p.line_number.min(self.lines() - 1);
        let column = p.column.min(self.line_length(line));
        p.with(Some(line), Some(column))
    }

    // ==================== 编辑 ====================

    /// Applies `op` and describes what changed. Returns `None` for an invalid range
    /// or an edit that would change nothing.
    pub fn apply_edit(&mut self, op: EditOperation) -> Option<TextChange> {
        if !self.is_valid_range(&op.range) || !self.is_valid_position(op.range.start()) {
            tracing::debug!(range = %op.range, "edit rejected: range outside document");
            return None;
        }
        let text = op.text();
        if op.range.is_empty() && text.is_empty() {
            return None;
        }
        Some(self.apply_valid_edit(op.range, text))
    }

    fn apply_valid_edit(&mut self, range: Range, text: &str) -> TextChange {
        let old_text = self.range_text(&range);
        let inserted = split_lines(text);
        let last = inserted.len() - 1;

        // 没有插入新行时，终点列要加上起点列
        let mut end_column = inserted[last].chars().count();
        if last == 0 {
            end_column += range.start_column();
        }
        let new_range = Range::new(
            range.start_line_number(),
            range.start_column(),
            range.start_line_number() + last,
            end_column,
        );

        let (from, to) = self.range_to_offsets(&range);
        self.doc = self.doc.replace(from, to, &inserted);

        // 记录的新文本与存储一致：换行统一为 eol
        let new_text = inserted.join(self.eol.as_str());
        tracing::trace!(old = %range, new = %new_range, "edit applied");
        TextChange::new(new_range, new_text, range, old_text)
    }

    fn range_to_offsets(&self, range: &Range) -> (usize, usize) {
        (
            self.raw_offset_at(range.start()),
            self.raw_offset_at(range.end()),
        )
    }

    fn raw_offset_at(&self, p: Position) -> usize {
        self.doc.offset_at(p.line_number + 1, p.column)
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// 按换行符切分插入的文本；`\r\n` 与单独的 `\n` 都是换行，和 `Text` 的存储保持一致
fn split_lines(text: &str) -> Vec<&str> {
    text.split("\r\n").flat_map(|piece| piece.split('\n')).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
