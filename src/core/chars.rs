//! 字符分类：撤销合并与单词选择共用

/// ASCII letter, the unit the undo merge and word selection work on.
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Exactly one ASCII letter.
pub fn is_single_letter(s: &str) -> bool {
    let mut chars = s.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if is_letter(c))
}

/// Non-empty run of ASCII letters (`^[A-Za-z]+$`).
pub fn is_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_letter)
}

#[cfg(test)]
#[path = "../../tests/unit/core/chars.rs"]
mod tests;
