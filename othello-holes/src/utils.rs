//! Miscellaneous project utilities.

use crate::MAX_WIDTH;
use std::fmt::{self, Write};
use std::iter::Iterator;

/// Get the letter naming a 1-based column ("A" for 1).
pub fn column_letter(x: u8) -> Option<char> {
    if x == 0 || x > MAX_WIDTH {
        return None;
    }
    Some((b'A' + x - 1) as char)
}

/// Get the 1-based column named by a letter. Accepts lowercase.
pub fn column_index(letter: char) -> Option<u8> {
    let letter = letter.to_ascii_uppercase();
    if !letter.is_ascii_uppercase() {
        return None;
    }
    Some(letter as u8 - b'A' + 1)
}

/// Format `width * height` characters as rows joined by `separator`.
/// `piece_iter` must yield exactly `width * height` items.
pub fn format_rows<T, W>(
    mut piece_iter: T,
    width: u8,
    height: u8,
    separator: char,
    f: &mut W,
) -> fmt::Result
where
    T: Iterator<Item = char>,
    W: Write,
{
    for row in 0..height {
        if row > 0 {
            f.write_char(separator)?;
        }
        for _ in 0..width {
            f.write_char(piece_iter.next().ok_or(fmt::Error)?)?;
        }
    }

    match piece_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_letters() {
        assert_eq!(column_letter(1), Some('A'));
        assert_eq!(column_letter(26), Some('Z'));
        assert_eq!(column_letter(0), None);
        assert_eq!(column_letter(27), None);
    }

    #[test]
    fn column_indices() {
        assert_eq!(column_index('A'), Some(1));
        assert_eq!(column_index('c'), Some(3));
        assert_eq!(column_index('Z'), Some(26));
        assert_eq!(column_index('1'), None);
        assert_eq!(column_index('-'), None);
    }

    #[test]
    fn format_rows_exact() {
        let mut out = String::new();
        format_rows("abcdef".chars(), 3, 2, ',', &mut out).unwrap();
        assert_eq!(out, "abc,def");
    }

    #[test]
    fn format_rows_wrong_count() {
        let mut out = String::new();
        assert!(format_rows("abcde".chars(), 3, 2, ',', &mut out).is_err());
        let mut out = String::new();
        assert!(format_rows("abcdefg".chars(), 3, 2, ',', &mut out).is_err());
    }
}
