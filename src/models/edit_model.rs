//! 编辑模型：在 TextBuffer 与 Cursor 上做逻辑操作
//!
//! 所有编辑入口都经过这里，成功后同步发出事件：
//! - `TextChange`：文本发生变化
//! - `CursorLocate`：之前没有选区时的光标定位
//! - `SelectionChange`：选区发生变化
//!
//! 非法位置、非法区间和空操作都静默忽略，不返回错误也不发事件。

use super::cursor::Cursor;
use super::event::{EditSource, ListenerId, Listeners, ModelEvent};
use super::text_buffer::TextBuffer;
use super::text_change::{EditOperation, TextChange};
use crate::core::chars::is_letter;
use crate::core::{Position, Range};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteDirection {
    #[default]
    Backward,
    Forward,
}

/// Something edits can be replayed against, tagged with their source.
pub trait EditTarget {
    fn apply_edit(&mut self, op: EditOperation, source: EditSource) -> Option<TextChange>;
}

#[derive(Debug)]
pub struct EditModel {
    buffer: TextBuffer,
    cursor: Cursor,
    listeners: Listeners,
    /// 左右移动光标时是否跨行
    ignore_eol: bool,
}

impl EditModel {
    pub fn new(buffer: TextBuffer) -> Self {
        Self {
            buffer,
            cursor: Cursor::new(),
            listeners: Listeners::new(),
            ignore_eol: false,
        }
    }

    pub fn with_ignore_eol(mut self, ignore_eol: bool) -> Self {
        self.ignore_eol = ignore_eol;
        self
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn ignore_eol(&self) -> bool {
        self.ignore_eol
    }

    pub fn set_ignore_eol(&mut self, ignore_eol: bool) {
        self.ignore_eol = ignore_eol;
    }

    /// Replaces the whole document. The cursor is clamped into the new text; no event is emitted.
    pub fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        let p = self.buffer.validate_position(self.cursor.position());
        self.cursor.locate(p, false);
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ModelEvent) + 'static) -> ListenerId {
        self.listeners.add(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    fn emit(&mut self, event: ModelEvent) {
        self.listeners.emit(&event);
    }

    fn emit_text_change(&mut self, change: &TextChange, source: EditSource) {
        self.emit(ModelEvent::TextChange {
            change: change.clone(),
            source,
        });
    }

    // ==================== 编辑 ====================

    /// 有无选区都直接用选区作为编辑区间：空选区即在光标处插入
    pub fn insert(&mut self, text: &str) -> Option<TextChange> {
        let op = EditOperation::new(self.cursor.selection(), text);
        let change = self.buffer.apply_edit(op)?;
        self.locate(change.new_range().end(), false);
        self.emit_text_change(&change, EditSource::Type);
        Some(change)
    }

    /// Same as [`EditModel::insert`]; kept for call-site clarity.
    pub fn replace(&mut self, text: &str) -> Option<TextChange> {
        self.insert(text)
    }

    /// Generic replay entry point. A pure deletion leaves the cursor at the start of the
    /// edited range, anything else at its end.
    pub fn apply_edit(&mut self, op: EditOperation, source: EditSource) -> Option<TextChange> {
        let change = self.buffer.apply_edit(op)?;
        if change.new_text().is_empty() {
            self.locate(change.new_range().start(), false);
        } else {
            self.locate(change.new_range().end(), false);
        }
        self.emit_text_change(&change, source);
        Some(change)
    }

    pub fn delete(&mut self, direction: DeleteDirection) -> Option<TextChange> {
        let mut range = self.cursor.selection();
        if range.is_empty() {
            range = match direction {
                DeleteDirection::Backward => self.prev_char_range()?,
                DeleteDirection::Forward => self.next_char_range()?,
            };
        }
        let change = self.buffer.apply_edit(EditOperation::delete(range))?;
        self.locate(change.new_range().start(), false);
        self.emit_text_change(&change, EditSource::Type);
        Some(change)
    }

    pub fn append(&mut self, text: &str) -> Option<TextChange> {
        let end = self.buffer.range().end();
        self.locate(end, false);
        self.insert(text)
    }

    /// Appends `text` followed by the eol marker. With `check_end` the marker is only
    /// added when `text` does not already end with it.
    pub fn append_line(&mut self, text: &str, check_end: bool) -> Option<TextChange> {
        let eol = self.buffer.eol();
        let mut line = String::with_capacity(text.len() + eol.len());
        line.push_str(text);
        if !check_end || !text.ends_with(eol) {
            line.push_str(eol);
        }
        self.append(&line)
    }

    // ==================== 光标与选区 ====================

    pub fn selected_text(&self) -> String {
        if !self.cursor.has_selection() {
            return String::new();
        }
        self.buffer.range_text(&self.cursor.selection())
    }

    /// 光标定位：之前有选区时发 `SelectionChange`，否则发 `CursorLocate`
    ///
    /// `keep_last_column` keeps the sticky column used by vertical movement.
    pub fn locate(&mut self, p: Position, keep_last_column: bool) -> bool {
        if !self.buffer.is_valid_position(p) {
            tracing::debug!(position = %p, "locate: position outside document");
            return false;
        }
        let previous = self.cursor.selection();
        self.cursor.locate(p, keep_last_column);
        if !previous.is_empty() {
            self.emit(ModelEvent::SelectionChange {
                previous,
                current: self.cursor.selection(),
                scroll_to_view: true,
            });
        } else {
            self.emit(ModelEvent::CursorLocate {
                previous: previous.start(),
                position: self.cursor.position(),
            });
        }
        true
    }

    pub fn select(&mut self, start: Position, end: Position) -> bool {
        if start == end {
            tracing::debug!(position = %start, "select: no range between two same positions");
            return false;
        }
        if !self.buffer.is_valid_position(start) || !self.buffer.is_valid_position(end) {
            return false;
        }
        let previous = self.cursor.selection();
        self.cursor.select(start, end);
        self.emit(ModelEvent::SelectionChange {
            previous,
            current: self.cursor.selection(),
            scroll_to_view: true,
        });
        true
    }

    pub fn select_range(&mut self, range: &Range) -> bool {
        self.select(range.start(), range.end())
    }

    /// Selects from the current anchor to `p`.
    pub fn select_to(&mut self, p: Position) -> bool {
        self.select(self.cursor.anchor(), p)
    }

    /// 全选时不需要滚动到光标位置
    pub fn select_all(&mut self) -> bool {
        let range = self.buffer.range();
        if range.is_empty() {
            return false;
        }
        let previous = self.cursor.selection();
        self.cursor.select(range.start(), range.end());
        self.emit(ModelEvent::SelectionChange {
            previous,
            current: range,
            scroll_to_view: false,
        });
        true
    }

    /// 选择光标附近由字母组成的单词
    pub fn select_word(&mut self) -> bool {
        let p = self.cursor.position();
        let chars: Vec<char> = self.buffer.line_string(p.line_number).chars().collect();
        if chars.is_empty() {
            return false;
        }
        let col = p.column.min(chars.len());
        let mut start = col;
        while start > 0 && is_letter(chars[start - 1]) {
            start -= 1;
        }
        let mut end = col;
        while end < chars.len() && is_letter(chars[end]) {
            end += 1;
        }
        self.select(
            Position::new(p.line_number, start),
            Position::new(p.line_number, end),
        )
    }

    /// 选中当前行；不是最后一行时选区延伸到下一行行首
    pub fn select_current_line(&mut self) -> bool {
        let line = self.cursor.position().line_number;
        let start = Position::new(line, 0);
        let end = if line == self.buffer.lines() - 1 {
            Position::new(line, self.buffer.line_length(line))
        } else {
            Position::new(line + 1, 0)
        };
        self.select(start, end)
    }

    /// 没有选区时复制当前行（带换行符），否则复制选区内容
    pub fn copy_text(&self) -> String {
        if self.cursor.has_selection() {
            self.selected_text()
        } else {
            let line = self.cursor.position().line_number;
            let mut text = self.buffer.line_string(line).into_owned();
            text.push_str(self.buffer.eol());
            text
        }
    }

    /// Run of letters immediately before the cursor on its line.
    pub fn prefix_text(&self) -> String {
        let p = self.cursor.position();
        if self.buffer.at_line_start(p) {
            return String::new();
        }
        let line = self.buffer.line_string(p.line_number);
        let before: Vec<char> = line.chars().take(p.column).collect();
        let start = before
            .iter()
            .rposition(|&c| !is_letter(c))
            .map_or(0, |i| i + 1);
        before[start..].iter().collect()
    }

    // ==================== 光标移动 ====================

    fn prev_char_range(&self) -> Option<Range> {
        let p = self.cursor.position();
        if self.buffer.at_buffer_start(p) {
            return None;
        }
        let before = if p.column == 0 {
            let line = p.line_number - 1;
            Position::new(line, self.buffer.line_length(line))
        } else {
            Position::new(p.line_number, p.column - 1)
        };
        Some(Range::from_positions(p, before))
    }

    /// 行尾时下一个字符就是换行符
    fn next_char_range(&self) -> Option<Range> {
        let p = self.cursor.position();
        if self.buffer.at_buffer_end(p) {
            return None;
        }
        let after = if self.buffer.at_line_end(p) {
            Position::new(p.line_number + 1, 0)
        } else {
            Position::new(p.line_number, p.column + 1)
        };
        Some(Range::from_positions(p, after))
    }

    pub fn left_pos(&self, ignore_eol: bool) -> Option<Position> {
        let p = self.cursor.position();
        if self.buffer.at_buffer_start(p) {
            return None;
        }
        if !self.buffer.at_line_start(p) {
            return Some(Position::new(p.line_number, p.column - 1));
        }
        if !ignore_eol {
            return None;
        }
        let line = p.line_number - 1;
        Some(Position::new(line, self.buffer.line_length(line)))
    }

    pub fn right_pos(&self, ignore_eol: bool) -> Option<Position> {
        let p = self.cursor.position();
        if self.buffer.at_buffer_end(p) {
            return None;
        }
        if !self.buffer.at_line_end(p) {
            return Some(Position::new(p.line_number, p.column + 1));
        }
        if !ignore_eol {
            return None;
        }
        Some(Position::new(p.line_number + 1, 0))
    }

    pub fn up_pos(&self) -> Option<Position> {
        let p = self.cursor.position();
        let line = p.line_number.checked_sub(1)?;
        let column = self.cursor.last_column().min(self.buffer.line_length(line));
        Some(Position::new(line, column))
    }

    pub fn down_pos(&self) -> Option<Position> {
        let p = self.cursor.position();
        let line = p.line_number + 1;
        if line >= self.buffer.lines() {
            return None;
        }
        let column = self.cursor.last_column().min(self.buffer.line_length(line));
        Some(Position::new(line, column))
    }

    pub fn move_position(&self, direction: Direction, ignore_eol: bool) -> Option<Position> {
        match direction {
            Direction::Up => self.up_pos(),
            Direction::Down => self.down_pos(),
            Direction::Left => self.left_pos(ignore_eol),
            Direction::Right => self.right_pos(ignore_eol),
        }
    }

    /// 上下移动保留粘滞列，左右移动更新它
    pub fn move_cursor(&mut self, direction: Direction) -> bool {
        let Some(p) = self.move_position(direction, self.ignore_eol) else {
            return false;
        };
        let vertical = matches!(direction, Direction::Up | Direction::Down);
        self.locate(p, vertical)
    }
}

impl EditTarget for EditModel {
    fn apply_edit(&mut self, op: EditOperation, source: EditSource) -> Option<TextChange> {
        EditModel::apply_edit(self, op, source)
    }
}

impl Default for EditModel {
    fn default() -> Self {
        Self::new(TextBuffer::new())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/edit_model.rs"]
mod tests;
