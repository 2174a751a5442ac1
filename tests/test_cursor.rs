use format_digit_mask::{CursorUpdate, DigitMask, MaskFormat, relocate_cursor};

#[test]
fn test_insert1() {
    // typed '4' at the end of "12:3". reformatting appends the
    // separator, the bare separator tail is cut again.
    let fmt = MaskFormat::new("**:**:**", '*');
    let text = "12:34";
    let new_text = fmt.format(text);
    assert_eq!(new_text, "12:34:");
    let upd = fmt.relocate_cursor(text, 5..5, false, &new_text);
    assert_eq!(upd.cursor, 5);
    assert_eq!(upd.text.as_deref(), Some("12:34"));
}

#[test]
fn test_insert2() {
    // typed '9' in the middle, the digits shift right under the mask
    let fmt = MaskFormat::new("**:**:**", '*');
    let text = "12:934:56";
    let new_text = fmt.format(text);
    assert_eq!(new_text, "12:93:45");
    let upd = fmt.relocate_cursor(text, 4..4, false, &new_text);
    assert_eq!(upd, CursorUpdate { cursor: 4, text: None });
}

#[test]
fn test_insert_replaces_selection() {
    // "34" of "12:34:56" was selected, typed '9' over it
    let fmt = MaskFormat::new("**:**:**", '*');
    let text = "12:9:56";
    let new_text = fmt.format(text);
    assert_eq!(new_text, "12:95:6");
    let upd = fmt.relocate_cursor(text, 4..4, false, &new_text);
    assert_eq!(upd.cursor, 4);
    assert_eq!(upd.text, None);
}

#[test]
fn test_insert_at_start() {
    // no digit before the cursor, snap to the end
    let fmt = MaskFormat::new("**:**:**", '*');
    let text = "x12:34";
    let new_text = fmt.format(text);
    assert_eq!(new_text, "12:34:");
    let upd = fmt.relocate_cursor(text, 1..1, false, &new_text);
    assert_eq!(upd.cursor, 6);
    assert_eq!(upd.text, None);
}

#[test]
fn test_insert_cuts_fixed_digit_tail() {
    // typed '9' before the '5'. fixed digits follow in the mask,
    // everything behind the cursor goes away.
    let fmt = MaskFormat::new("+1(xxx)xx-77-xx", 'x');
    let text = "+1(234)95";
    let new_text = fmt.format(text);
    assert_eq!(new_text, "+1(234)95-");
    let upd = fmt.relocate_cursor(text, 8..8, false, &new_text);
    assert_eq!(upd.cursor, 8);
    assert_eq!(upd.text.as_deref(), Some("+1(234)9"));
}

#[test]
fn test_overflow_snaps() {
    // more digits than the mask takes
    let fmt = MaskFormat::new("**", '*');
    let text = "123";
    let new_text = fmt.format(text);
    assert_eq!(new_text, "12");
    let upd = fmt.relocate_cursor(text, 3..3, false, &new_text);
    assert_eq!(upd.cursor, 2);
    assert_eq!(upd.text, None);
}

#[test]
fn test_backdelete_at_end() {
    // deleted the trailing separator. it comes right back, the
    // cursor lands behind it.
    let fmt = MaskFormat::new("**:**:**", '*');
    let text = "12:34";
    let new_text = fmt.format(text);
    assert_eq!(new_text, "12:34:");
    let upd = fmt.relocate_cursor(text, 5..5, true, &new_text);
    assert_eq!(upd.cursor, 6);
    assert_eq!(upd.text, None);
}

#[test]
fn test_backdelete_middle() {
    // deleted the '4' of "12:34:56"
    let fmt = MaskFormat::new("**:**:**", '*');
    let text = "12:3:56";
    let new_text = fmt.format(text);
    assert_eq!(new_text, "12:35:6");
    let upd = fmt.relocate_cursor(text, 4..4, true, &new_text);
    assert_eq!(upd, CursorUpdate { cursor: 4, text: None });
}

#[test]
fn test_backdelete_last() {
    // nothing behind the cursor, stay at the end
    let fmt = MaskFormat::new("+1(xxx)xx-77-xx", 'x');
    let text = "+1(234)56-77-";
    let new_text = fmt.format(text);
    assert_eq!(new_text, "+1(234)56-77-");
    let upd = fmt.relocate_cursor(text, 13..13, true, &new_text);
    assert_eq!(upd.cursor, 13);
    assert_eq!(upd.text, None);
}

#[test]
fn test_before_first_editable_snaps() {
    let mask = DigitMask::new("ab9xx", 'x');
    assert_eq!(mask.first_editable_index(), Some(2));
    let upd = relocate_cursor(&mask, "xx99", 0..0, true, "99ab");
    assert_eq!(upd.cursor, 4);
    assert_eq!(upd.text, None);
}

#[test]
fn test_empty_new_text() {
    let fmt = MaskFormat::new("+1(xxx)xx-77-xx", 'x');
    let upd = fmt.relocate_cursor("a", 1..1, false, "");
    assert_eq!(upd, CursorUpdate { cursor: 0, text: None });
}
