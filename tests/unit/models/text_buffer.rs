use super::*;

fn pos(line: usize, column: usize) -> Position {
    Position::new(line, column)
}

#[test]
fn test_new_buffer_is_one_empty_line() {
    let buffer = TextBuffer::new();
    assert_eq!(buffer.lines(), 1);
    assert_eq!(buffer.line_length(0), 0);
    assert_eq!(buffer.range(), Range::at(pos(0, 0)));
    assert_eq!(buffer.text(), "");
    assert_eq!(buffer.eol(), DEFAULT_EOL);
}

#[test]
fn test_from_text_and_lines() {
    let buffer = TextBuffer::from_text("hello\r\nworld\n");
    assert_eq!(buffer.lines(), 3);
    assert_eq!(buffer.to_lines(), vec!["hello", "world", ""]);

    let buffer = TextBuffer::from_lines(&["a", "b\nc"]);
    assert_eq!(buffer.to_lines(), vec!["a", "b", "c"]);
    assert_eq!(buffer.chars_count(), 5);
}

#[test]
fn test_text_uses_eol_marker() {
    let buffer = TextBuffer::from_text("a\nb").with_eol("\r\n");
    assert_eq!(buffer.text(), "a\r\nb");
    assert_eq!(buffer.range_text(&Range::new(0, 0, 1, 1)), "a\r\nb");
}

#[test]
fn test_line_access() {
    let buffer = TextBuffer::from_text("first\nsecond");
    assert_eq!(buffer.line_string(1), "second");
    assert_eq!(buffer.line_length(0), 5);
    assert_eq!(buffer.get_line_string(0).as_deref(), Some("first"));
    assert!(buffer.get_line_string(2).is_none());
}

#[test]
#[should_panic]
fn test_line_string_out_of_range_panics() {
    TextBuffer::from_text("only").line_string(1);
}

#[test]
fn test_range_text() {
    let buffer = TextBuffer::from_text("hello\nworld");
    assert_eq!(buffer.range_text(&Range::new(0, 1, 0, 4)), "ell");
    assert_eq!(buffer.range_text(&Range::new(0, 3, 1, 2)), "lo\nwo");
    assert_eq!(buffer.range_text(&Range::at(pos(0, 2))), "");
    // 非法区间返回空串
    assert_eq!(buffer.range_text(&Range::new(0, 0, 5, 0)), "");
    assert_eq!(buffer.range_text(&Range::new(0, 0, 0, 9)), "");
}

#[test]
fn test_slice_is_inclusive_and_clamped() {
    let buffer = TextBuffer::from_text("a\n\nc\nd");
    assert_eq!(buffer.slice(0, 0), vec!["a"]);
    assert_eq!(buffer.slice(1, 2), vec!["", "c"]);
    assert_eq!(buffer.slice(2, 99), vec!["c", "d"]);
    assert!(buffer.slice(9, 12).is_empty());
}

#[test]
fn test_position_validity() {
    let buffer = TextBuffer::from_text("abc\nde");
    assert!(buffer.is_valid_position(pos(0, 3)));
    assert!(!buffer.is_valid_position(pos(0, 4)));
    assert!(buffer.is_valid_position(pos(1, 2)));
    assert!(!buffer.is_valid_position(pos(2, 0)));

    assert!(buffer.is_valid_range(&Range::new(0, 1, 1, 2)));
    assert!(!buffer.is_valid_range(&Range::new(0, 1, 1, 3)));
    assert!(!buffer.is_valid_range(&Range::new(0, 4, 1, 0)));
    assert!(buffer.is_valid_range(&Range::at(pos(7, 7))));
}

#[test]
fn test_boundary_predicates() {
    let buffer = TextBuffer::from_text("ab\ncd");
    assert!(buffer.at_buffer_start(pos(0, 0)));
    assert!(!buffer.at_buffer_start(pos(1, 0)));
    assert!(buffer.at_buffer_end(pos(1, 2)));
    assert!(!buffer.at_buffer_end(pos(0, 2)));
    assert!(buffer.at_line_start(pos(1, 0)));
    assert!(buffer.at_line_end(pos(0, 2)));
    assert!(!buffer.at_line_end(pos(0, 1)));
}

#[test]
fn test_offset_position_mapping() {
    let buffer = TextBuffer::from_text("ab\r\ncd");
    assert_eq!(buffer.offset_at(pos(0, 0)), Some(0));
    assert_eq!(buffer.offset_at(pos(1, 0)), Some(3));
    assert_eq!(buffer.offset_at(pos(1, 2)), Some(5));
    assert_eq!(buffer.offset_at(pos(0, 3)), None);

    assert_eq!(buffer.position_at(2), Some(pos(0, 2)));
    assert_eq!(buffer.position_at(3), Some(pos(1, 0)));
    assert_eq!(buffer.position_at(6), None);

    for offset in 0..=buffer.chars_count() {
        let p = buffer.position_at(offset).unwrap();
        assert_eq!(buffer.offset_at(p), Some(offset));
    }
}

#[test]
fn test_validate_position_clamps() {
    let buffer = TextBuffer::from_text("abc\nd");
    assert_eq!(buffer.validate_position(pos(0, 9)), pos(0, 3));
    assert_eq!(buffer.validate_position(pos(5, 5)), pos(1, 1));
    assert_eq!(buffer.validate_position(pos(1, 0)), pos(1, 0));
}

#[test]
fn test_apply_edit_replace_and_reverse() {
    let mut buffer = TextBuffer::from_text("hello");
    let change = buffer
        .apply_edit(EditOperation::new(Range::new(0, 0, 0, 5), "HI"))
        .unwrap();
    assert_eq!(buffer.text(), "HI");
    assert_eq!(change.new_range(), Range::new(0, 0, 0, 2));
    assert_eq!(change.old_range(), Range::new(0, 0, 0, 5));
    assert_eq!(change.old_text(), "hello");
    assert_eq!(change.new_text(), "HI");

    let back = buffer.apply_edit(change.inverse_operation()).unwrap();
    assert_eq!(buffer.text(), "hello");
    assert_eq!(back, change.reverse());
}

#[test]
fn test_apply_edit_leaves_other_lines() {
    let mut buffer = TextBuffer::from_lines(&["hello", "world"]);
    let change = buffer
        .apply_edit(EditOperation::new(Range::new(0, 0, 0, 5), "HI"))
        .unwrap();
    assert_eq!(buffer.to_lines(), vec!["HI", "world"]);
    assert_eq!(change.new_range(), Range::new(0, 0, 0, 2));

    let reversed = change.reverse();
    buffer
        .apply_edit(EditOperation::new(reversed.old_range(), reversed.new_text()))
        .unwrap();
    assert_eq!(buffer.to_lines(), vec!["hello", "world"]);
}

#[test]
fn test_apply_edit_multiline_insert() {
    let mut buffer = TextBuffer::from_text("ad");
    let change = buffer
        .apply_edit(EditOperation::new(Range::at(pos(0, 1)), "b\nxc"))
        .unwrap();
    assert_eq!(buffer.to_lines(), vec!["ab", "xcd"]);
    // 多行插入时终点列不加起点列
    assert_eq!(change.new_range(), Range::new(0, 1, 1, 2));
    assert!(change.is_insertion());
}

#[test]
fn test_apply_edit_crlf_with_lf_eol() {
    let mut buffer = TextBuffer::from_text("ab");
    let change = buffer
        .apply_edit(EditOperation::new(Range::at(pos(0, 1)), "\r\n"))
        .unwrap();
    assert_eq!(buffer.to_lines(), vec!["a", "b"]);
    assert_eq!(buffer.chars_count(), 3);
    assert_eq!(change.new_range(), Range::new(0, 1, 1, 0));
    assert_eq!(change.new_text(), "\n");
}

#[test]
fn test_new_text_matches_stored_range() {
    let mut buffer = TextBuffer::from_text("xy");
    let change = buffer
        .apply_edit(EditOperation::new(Range::at(pos(0, 1)), "a\r\nb"))
        .unwrap();
    assert_eq!(buffer.to_lines(), vec!["xa", "by"]);
    assert_eq!(change.new_text(), "a\nb");
    assert_eq!(buffer.range_text(&change.new_range()), change.new_text());

    let mut buffer = TextBuffer::from_text("xy").with_eol("\r\n");
    let change = buffer
        .apply_edit(EditOperation::new(Range::at(pos(0, 1)), "a\nb"))
        .unwrap();
    assert_eq!(change.new_text(), "a\r\nb");
    assert_eq!(buffer.range_text(&change.new_range()), change.new_text());

    // 撤销时按记录的文本回放，得到原文
    buffer.apply_edit(change.inverse_operation()).unwrap();
    assert_eq!(buffer.text(), "xy");
}

#[test]
fn test_with_eol_ignores_unsupported_marker() {
    assert!(is_supported_eol("\n"));
    assert!(is_supported_eol("\r\n"));
    assert!(!is_supported_eol(""));
    assert!(!is_supported_eol("\r"));

    let mut buffer = TextBuffer::from_text("").with_eol("");
    assert_eq!(buffer.eol(), "\n");
    buffer
        .apply_edit(EditOperation::new(Range::at(pos(0, 0)), "ab"))
        .unwrap();
    assert_eq!(buffer.to_lines(), vec!["ab"]);

    let buffer = TextBuffer::new().with_eol("\r\n").with_eol("\r");
    assert_eq!(buffer.eol(), "\r\n");
}

#[test]
fn test_apply_edit_with_crlf_eol() {
    let mut buffer = TextBuffer::from_text("a\nb").with_eol("\r\n");
    let change = buffer
        .apply_edit(EditOperation::delete(Range::new(0, 1, 1, 0)))
        .unwrap();
    assert_eq!(change.old_text(), "\r\n");
    assert_eq!(buffer.text(), "ab");

    buffer
        .apply_edit(EditOperation::new(Range::at(pos(0, 1)), "\r\n"))
        .unwrap();
    assert_eq!(buffer.text(), "a\r\nb");
    assert_eq!(buffer.lines(), 2);
}

#[test]
fn test_apply_edit_deletion() {
    let mut buffer = TextBuffer::from_text("ab\ncd");
    let change = buffer
        .apply_edit(EditOperation::delete(Range::new(0, 1, 1, 1)))
        .unwrap();
    assert_eq!(buffer.text(), "ad");
    assert_eq!(change.new_range(), Range::at(pos(0, 1)));
    assert_eq!(change.old_text(), "b\nc");
    assert!(change.is_deletion());
}

#[test]
fn test_apply_edit_rejects_invalid_and_noop() {
    let mut buffer = TextBuffer::from_text("abc");
    assert!(buffer
        .apply_edit(EditOperation::new(Range::new(0, 0, 1, 0), "x"))
        .is_none());
    assert!(buffer
        .apply_edit(EditOperation::new(Range::at(pos(3, 0)), "x"))
        .is_none());
    assert!(buffer
        .apply_edit(EditOperation::new(Range::at(pos(0, 1)), ""))
        .is_none());
    assert!(buffer
        .apply_edit(EditOperation::delete(Range::at(pos(0, 1))))
        .is_none());
    assert_eq!(buffer.text(), "abc");
}
