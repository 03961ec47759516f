use std::ops::Range;
use unicode_width::UnicodeWidthChar;

// Cursors count chars; edits convert to byte ranges at the boundary.

pub fn char_count(value: &str) -> usize {
    value.chars().count()
}

pub fn clamp_cursor(cursor: usize, value: &str) -> usize {
    cursor.min(char_count(value))
}

pub fn insert_char(value: &mut String, cursor: &mut usize, ch: char) {
    let at = clamp_cursor(*cursor, value);
    value.insert(byte_offset(value, at), ch);
    *cursor = at + 1;
}

pub fn backspace_char(value: &mut String, cursor: &mut usize) -> bool {
    let at = clamp_cursor(*cursor, value);
    if at == 0 {
        return false;
    }
    remove_chars(value, at - 1..at);
    *cursor = at - 1;
    true
}

pub fn delete_char(value: &mut String, cursor: &mut usize) -> bool {
    let at = clamp_cursor(*cursor, value);
    if at == char_count(value) {
        return false;
    }
    remove_chars(value, at..at + 1);
    *cursor = at;
    true
}

pub fn move_left(cursor: &mut usize, value: &str) -> bool {
    match clamp_cursor(*cursor, value).checked_sub(1) {
        Some(at) => {
            *cursor = at;
            true
        }
        None => false,
    }
}

pub fn move_right(cursor: &mut usize, value: &str) -> bool {
    let at = clamp_cursor(*cursor, value);
    if at == char_count(value) {
        return false;
    }
    *cursor = at + 1;
    true
}

/// Deletes separators, then the word, to the left of the cursor.
pub fn delete_word_left(value: &mut String, cursor: &mut usize) -> bool {
    let at = clamp_cursor(*cursor, value);
    let before: Vec<char> = value.chars().take(at).collect();
    let trailing_separators = before.iter().rev().take_while(|ch| is_separator(**ch)).count();
    let word = before
        .iter()
        .rev()
        .skip(trailing_separators)
        .take_while(|ch| !is_separator(**ch))
        .count();
    let start = at - trailing_separators - word;

    *cursor = start;
    if start == at {
        return false;
    }
    remove_chars(value, start..at);
    true
}

/// Deletes separators, then the word, to the right of the cursor.
pub fn delete_word_right(value: &mut String, cursor: &mut usize) -> bool {
    let at = clamp_cursor(*cursor, value);
    let mut after = value.chars().skip(at).peekable();
    let mut end = at;
    while after.next_if(|ch| is_separator(*ch)).is_some() {
        end += 1;
    }
    while after.next_if(|ch| !is_separator(*ch)).is_some() {
        end += 1;
    }

    *cursor = at;
    if end == at {
        return false;
    }
    remove_chars(value, at..end);
    true
}

/// Display width of the text before the cursor.
pub fn width_before_cursor(value: &str, cursor: usize) -> usize {
    value
        .chars()
        .take(cursor)
        .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
        .sum()
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '.' | '/' | ',' | '-' | '@' | '_' | ':')
}

fn byte_offset(value: &str, chars: usize) -> usize {
    value
        .char_indices()
        .nth(chars)
        .map_or(value.len(), |(idx, _)| idx)
}

fn remove_chars(value: &mut String, chars: Range<usize>) {
    let bytes = byte_offset(value, chars.start)..byte_offset(value, chars.end);
    value.replace_range(bytes, "");
}
