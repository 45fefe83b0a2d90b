use super::*;

#[test]
fn first_line_columns() {
    assert_eq!(line_info_at("abc", 0), Ok(LineCol::new(0, 0)));
    assert_eq!(line_info_at("abc", 2), Ok(LineCol::new(0, 2)));
}

#[test]
fn end_of_input_is_valid() {
    assert_eq!(line_info_at("abc", 3), Ok(LineCol::new(0, 3)));
    assert_eq!(line_info_at("", 0), Ok(LineCol::new(0, 0)));
}

#[test]
fn lines_are_counted_by_newlines() {
    let text = "ab\ncd\n\nef";

    assert_eq!(line_info_at(text, 3), Ok(LineCol::new(1, 0)));
    assert_eq!(line_info_at(text, 4), Ok(LineCol::new(1, 1)));
    assert_eq!(line_info_at(text, 6), Ok(LineCol::new(2, 0)));
    assert_eq!(line_info_at(text, 9), Ok(LineCol::new(3, 2)));
}

#[test]
fn newline_itself_belongs_to_its_line() {
    assert_eq!(line_info_at("ab\ncd", 2), Ok(LineCol::new(0, 2)));
}

#[test]
fn columns_count_characters() {
    let text = "héllo";
    // 'é' is two bytes
    assert_eq!(line_info_at(text, 3), Ok(LineCol::new(0, 2)));
}

#[test]
fn out_of_bounds() {
    let err = line_info_at("abc", 4).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"position 4 is past the end of a 3-byte input");
}

#[test]
fn inside_a_character() {
    let err = line_info_at("é", 1).unwrap_err();
    assert_eq!(err, PositionError::NotCharBoundary { position: 1 });
}

#[test]
fn display() {
    insta::assert_snapshot!(LineCol::new(3, 14).to_string(), @"3:14");
}
