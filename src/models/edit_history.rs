//! 编辑历史：撤销 / 重做栈
//!
//! 每个 `TextChange` 提交后变成一个 `EditUndoOperation`：
//! - undo 一侧：`(new_range, old_text)`，把新文本换回旧文本
//! - redo 一侧：`(old_range, new_text)`，重新应用编辑
//!
//! 提交时尝试把连续键入的单个字母合并到栈顶，得到以单词为单位的撤销。
//! 合并链在遇到分隔符、光标跳动、多字符操作或删除时断开。

use super::edit_model::EditTarget;
use super::event::EditSource;
use super::text_change::{EditOperation, TextChange};
use crate::core::chars::{is_single_letter, is_word};
use crate::core::Range;
use compact_str::CompactString;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditUndoOperation {
    undo_range: Range,
    undo_text: CompactString,
    redo_range: Range,
    redo_text: CompactString,
    is_single_letter: bool,
}

/// Outcome of [`EditUndoOperation::try_merge`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Merge {
    Merged(EditUndoOperation),
    NotMerged,
}

impl EditUndoOperation {
    pub fn from_change(change: &TextChange) -> Self {
        Self::from_parts(
            change.new_range(),
            CompactString::from(change.old_text()),
            change.old_range(),
            CompactString::from(change.new_text()),
        )
    }

    fn from_parts(
        undo_range: Range,
        undo_text: CompactString,
        redo_range: Range,
        redo_text: CompactString,
    ) -> Self {
        let is_single_letter = is_single_letter(&redo_text);
        Self {
            undo_range,
            undo_text,
            redo_range,
            redo_text,
            is_single_letter,
        }
    }

    pub fn undo_range(&self) -> Range {
        self.undo_range
    }

    pub fn undo_text(&self) -> &str {
        &self.undo_text
    }

    pub fn redo_range(&self) -> Range {
        self.redo_range
    }

    pub fn redo_text(&self) -> &str {
        &self.redo_text
    }

    pub fn is_single_letter(&self) -> bool {
        self.is_single_letter
    }

    pub fn undo(&self, target: &mut impl EditTarget) -> Option<TextChange> {
        target.apply_edit(
            EditOperation::new(self.undo_range, self.undo_text.clone()),
            EditSource::Undo,
        )
    }

    pub fn redo(&self, target: &mut impl EditTarget) -> Option<TextChange> {
        target.apply_edit(
            EditOperation::new(self.redo_range, self.redo_text.clone()),
            EditSource::Redo,
        )
    }

    /// 把 `ub` 合并到 `ua` 之后，要求同时满足：
    /// - `ua` 的 redo 文本是一个单词（只含字母）
    /// - `ub` 是在空区间上插入单个字母
    /// - `ua` 的 undo 区间终点正好是 `ub` 的 redo 区间起点
    pub fn try_merge(ua: &EditUndoOperation, ub: &EditUndoOperation) -> Merge {
        if !is_word(&ua.redo_text) {
            return Merge::NotMerged;
        }
        if !ub.is_single_letter || !ub.redo_range.is_empty() {
            return Merge::NotMerged;
        }
        if ua.undo_range.end() != ub.redo_range.start() {
            return Merge::NotMerged;
        }

        let mut redo_text = ua.redo_text.clone();
        redo_text.push_str(&ub.redo_text);
        // ub 没有删除任何文本，redo 区间与 undo 文本都沿用 ua
        Merge::Merged(Self::from_parts(
            Range::from_positions(ua.undo_range.start(), ub.undo_range.end()),
            ua.undo_text.clone(),
            ua.redo_range,
            redo_text,
        ))
    }
}

#[derive(Debug)]
pub struct UndoService {
    undo_stack: Vec<EditUndoOperation>,
    redo_stack: Vec<EditUndoOperation>,
    merge_words: bool,
    is_undoing: bool,
    is_redoing: bool,
}

impl UndoService {
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            merge_words: true,
            is_undoing: false,
            is_redoing: false,
        }
    }

    /// Disables or enables merging typed letters into word-sized undo units.
    pub fn with_word_merge(mut self, merge_words: bool) -> Self {
        self.merge_words = merge_words;
        self
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_stack(&self) -> &[EditUndoOperation] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[EditUndoOperation] {
        &self.redo_stack
    }

    /// Observability only; nothing relies on these flags for correctness.
    pub fn is_undoing(&self) -> bool {
        self.is_undoing
    }

    pub fn is_redoing(&self) -> bool {
        self.is_redoing
    }

    /// 记录新的变更：清空 redo 栈，并尝试与栈顶合并
    pub fn commit(&mut self, change: &TextChange) {
        self.redo_stack.clear();
        let unit = EditUndoOperation::from_change(change);

        let Some(top) = self.undo_stack.pop() else {
            self.undo_stack.push(unit);
            return;
        };
        if !self.merge_words {
            self.undo_stack.push(top);
            self.undo_stack.push(unit);
            return;
        }

        match EditUndoOperation::try_merge(&top, &unit) {
            Merge::Merged(merged) => {
                tracing::trace!(text = %merged.redo_text(), "undo unit merged");
                self.undo_stack.push(merged);
            }
            Merge::NotMerged => {
                self.undo_stack.push(top);
                self.undo_stack.push(unit);
            }
        }
    }

    pub fn undo(&mut self, target: &mut impl EditTarget) -> Option<TextChange> {
        self.is_undoing = true;
        let mut change = None;
        if let Some(unit) = self.undo_stack.pop() {
            tracing::debug!(range = %unit.undo_range(), "undo");
            change = unit.undo(target);
            self.redo_stack.push(unit);
        }
        self.is_undoing = false;
        change
    }

    pub fn redo(&mut self, target: &mut impl EditTarget) -> Option<TextChange> {
        self.is_redoing = true;
        let mut change = None;
        if let Some(unit) = self.redo_stack.pop() {
            tracing::debug!(range = %unit.redo_range(), "redo");
            change = unit.redo(target);
            self.undo_stack.push(unit);
        }
        self.is_redoing = false;
        change
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.is_undoing = false;
        self.is_redoing = false;
    }
}

impl Default for UndoService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/edit_history.rs"]
mod tests;
