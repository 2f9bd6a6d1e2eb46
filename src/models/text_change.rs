//! 编辑操作与变更记录
//!
//! `EditOperation` 是编辑请求：用 `text` 替换 `range`。
//! `TextChange` 是一次成功编辑的完整描述，可以取反：
//! - `old_range` / `old_text`：编辑前被替换的区间与文本
//! - `new_range` / `new_text`：编辑后新文本所在的区间与文本

use crate::core::Range;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditOperation {
    pub range: Range,
    pub text: Option<CompactString>,
}

impl EditOperation {
    pub fn new(range: Range, text: impl Into<CompactString>) -> Self {
        Self {
            range,
            text: Some(text.into()),
        }
    }

    pub fn delete(range: Range) -> Self {
        Self { range, text: None }
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextChange {
    new_range: Range,
    new_text: CompactString,
    old_range: Range,
    old_text: CompactString,
}

impl TextChange {
    pub(crate) fn new(
        new_range: Range,
        new_text: impl Into<CompactString>,
        old_range: Range,
        old_text: impl Into<CompactString>,
    ) -> Self {
        Self {
            new_range,
            new_text: new_text.into(),
            old_range,
            old_text: old_text.into(),
        }
    }

    pub fn new_range(&self) -> Range {
        self.new_range
    }

    pub fn new_text(&self) -> &str {
        &self.new_text
    }

    pub fn old_range(&self) -> Range {
        self.old_range
    }

    pub fn old_text(&self) -> &str {
        &self.old_text
    }

    /// 交换编辑前后的区间与文本
    pub fn reverse(&self) -> TextChange {
        TextChange {
            new_range: self.old_range,
            new_text: self.old_text.clone(),
            old_range: self.new_range,
            old_text: self.new_text.clone(),
        }
    }

    /// The edit that undoes this change when applied to the post-edit document.
    pub fn inverse_operation(&self) -> EditOperation {
        EditOperation::new(self.new_range, self.old_text.clone())
    }

    pub fn is_insertion(&self) -> bool {
        self.old_range.is_empty() && !self.new_text.is_empty()
    }

    pub fn is_deletion(&self) -> bool {
        self.new_text.is_empty()
    }

    /// 单行 JSON，字符串里的换行会被转义
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json_line(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_change.rs"]
mod tests;
