//! Escape processing for string literals.
//!
//! Valid escapes: `\"` `\\` `\n` `\t` `\r` `\0`. Invalid escapes push errors
//! into the accumulator and cook to U+FFFD so lexing can continue.

use defgen_ir::Span;

use crate::lex_error::LexError;

#[inline]
fn resolve_escape(c: char) -> Option<char> {
    match c {
        '"' => Some('"'),
        '\\' => Some('\\'),
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '0' => Some('\0'),
        _ => None,
    }
}

/// Unescape a string literal's content (between the `"`s).
///
/// `base_offset` is the byte offset of `content` in the source, used for
/// error spans.
pub(crate) fn unescape_string(content: &str, base_offset: usize, errors: &mut Vec<LexError>) -> String {
    if !content.contains('\\') {
        return content.to_string();
    }

    let mut result = String::with_capacity(content.len());
    let mut chars = content.char_indices();

    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some((j, esc)) => {
                if let Some(resolved) = resolve_escape(esc) {
                    result.push(resolved);
                } else {
                    let span = Span::from_range(base_offset + i..base_offset + j + esc.len_utf8());
                    errors.push(LexError::invalid_escape(span, esc));
                    result.push('\u{FFFD}');
                }
            }
            None => {
                // Trailing backslash; the raw string regex never produces one
                let span = Span::from_range(base_offset + i..base_offset + i + 1);
                errors.push(LexError::invalid_escape(span, '\\'));
                result.push('\\');
            }
        }
    }

    result
}
