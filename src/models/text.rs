//! 不可变文本存储
//!
//! 职责：
//! - 以 Rope 保存按行组织的字符（克隆是 O(1) 的结构共享，修改总是产生新实例）
//! - 行号从 1 开始；偏移以字符计，每个换行计为 1
//! - 偏移 ↔ (行, 列) 互逆映射
//!
//! Rope 内部只使用 `\n` 作为换行；对外的换行符由调用方在 `slice_string` 时指定。

use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use std::fmt;

/// 从 RopeSlice 获取字符串，优先零拷贝
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

#[derive(Clone, Debug, Default)]
pub struct Text {
    rope: Rope,
}

/// One logical line, without its line break.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line<'a> {
    pub text: Cow<'a, str>,
    pub length: usize,
}

/// A piece of text produced by [`Chunks`]; `line_break` chunks carry a single `"\n"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub text: Cow<'a, str>,
    pub line_break: bool,
}

impl Text {
    pub fn empty() -> Self {
        Self { rope: Rope::new() }
    }

    /// 每个元素内部仍可能包含换行符（`\n` 或 `\r\n`），在这里完成最终的分行
    pub fn of<S: AsRef<str>>(lines: &[S]) -> Self {
        let joined = join_lines(lines);
        let normalized = if joined.contains("\r\n") {
            Cow::Owned(joined.replace("\r\n", "\n"))
        } else {
            Cow::Borrowed(joined.as_str())
        };
        Self {
            rope: Rope::from_str(&normalized),
        }
    }

    pub fn lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn len(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// 1-based line access.
    ///
    /// # Panics
    ///
    /// Panics if `n` is `0` or greater than [`Text::lines`].
    pub fn line(&self, n: usize) -> Line<'_> {
        assert!(
            n >= 1 && n <= self.lines(),
            "line {} out of range (1..={})",
            n,
            self.lines()
        );
        let (start, end) = self.line_bounds(n - 1);
        Line {
            text: slice_to_cow(self.rope.slice(start..end)),
            length: end - start,
        }
    }

    /// `line` is 1-based. Panics when `line` is out of range.
    pub fn offset_at(&self, line: usize, column: usize) -> usize {
        self.rope.line_to_char(line - 1) + column
    }

    /// Inverse of [`Text::offset_at`]; returns a 1-based line. Panics when `offset > len()`.
    pub fn position_at(&self, offset: usize) -> (usize, usize) {
        let idx = self.rope.char_to_line(offset);
        (idx + 1, offset - self.rope.line_to_char(idx))
    }

    /// Returns a new text with `[from, to)` replaced by `content` joined with line breaks.
    /// `self` is left untouched.
    pub fn replace<S: AsRef<str>>(&self, from: usize, to: usize, content: &[S]) -> Text {
        debug_assert!(from <= to && to <= self.len());
        let mut rope = self.rope.clone();
        if from < to {
            rope.remove(from..to);
        }
        let inserted = join_lines(content);
        if !inserted.is_empty() {
            rope.insert(from, &inserted);
        }
        Text { rope }
    }

    pub fn slice_string(&self, from: usize, to: usize, separator: &str) -> String {
        let s = slice_to_cow(self.rope.slice(from..to));
        if separator == "\n" {
            s.into_owned()
        } else {
            s.replace('\n', separator)
        }
    }

    pub fn to_lines(&self) -> Vec<String> {
        (1..=self.lines())
            .map(|n| self.line(n).text.into_owned())
            .collect()
    }

    pub fn iter(&self) -> Chunks<'_> {
        self.iter_range(0, self.len())
    }

    /// Chunks covering `[from, to)`, both clamped to the text.
    pub fn iter_range(&self, from: usize, to: usize) -> Chunks<'_> {
        let end = to.min(self.len());
        Chunks {
            rope: &self.rope,
            pos: from.min(end),
            end,
            pending_break: false,
            done: false,
        }
    }

    fn line_bounds(&self, idx: usize) -> (usize, usize) {
        let start = self.rope.line_to_char(idx);
        let end = if idx + 1 < self.rope.len_lines() {
            self.rope.line_to_char(idx + 1) - 1
        } else {
            self.rope.len_chars()
        };
        (start, end)
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line.as_ref());
    }
    out
}

/// Lazy forward walk over a text range.
///
/// Every line touched by the range yields exactly one text chunk (possibly empty),
/// and consecutive lines are separated by a `line_break` chunk. Cloning the iterator
/// restarts from the clone point.
#[derive(Clone)]
pub struct Chunks<'a> {
    rope: &'a Rope,
    pos: usize,
    end: usize,
    pending_break: bool,
    done: bool,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Chunk<'a>> {
        if self.pending_break {
            self.pending_break = false;
            self.pos += 1;
            return Some(Chunk {
                text: Cow::Borrowed("\n"),
                line_break: true,
            });
        }
        if self.done {
            return None;
        }

        let rope = self.rope;
        let line = rope.char_to_line(self.pos);
        let line_end = if line + 1 < rope.len_lines() {
            rope.line_to_char(line + 1) - 1
        } else {
            rope.len_chars()
        };
        let content_end = line_end.min(self.end);
        let text = slice_to_cow(rope.slice(self.pos..content_end));

        if content_end < self.end {
            self.pending_break = true;
        } else {
            self.done = true;
        }
        self.pos = content_end;

        Some(Chunk {
            text,
            line_break: false,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text.rs"]
mod tests;
