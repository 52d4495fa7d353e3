#![forbid(unsafe_code)]

//! Character-level string helpers
//!
//! Positions and comparisons work on bytes, the way the helpers behave on
//! plain ASCII text.

use crate::status::{Error, Result};

/// Appends `source` to `target` if the result fits in `capacity` bytes
///
/// When it does not fit, `target` is left untouched and the call fails with
/// [`Error::InvalidArg`].
pub fn concat_bounded(target: &mut String, source: &str, capacity: usize) -> Result<()> {
    let needed = target.len() + source.len();
    if needed > capacity {
        return Err(Error::InvalidArg(format!(
            "concatenation needs {} bytes but capacity is {}",
            needed, capacity
        )));
    }

    target.push_str(source);
    Ok(())
}

/// Byte index of the first occurrence of `c` in `s`
pub fn find_char(s: &str, c: char) -> Option<usize> {
    s.char_indices().find(|(_, ch)| *ch == c).map(|(i, _)| i)
}

/// Replaces occurrences of `old` with `new` in place, left to right
///
/// Stops after `limit` replacements when a limit is given; `Some(0)` leaves
/// the string unchanged. Returns how many replacements were made.
pub fn replace_char(s: &mut String, limit: Option<usize>, new: char, old: char) -> usize {
    let mut count = 0;
    let mut replaced = String::with_capacity(s.len());

    for ch in s.chars() {
        if ch == old && limit.is_none_or(|limit| count < limit) {
            replaced.push(new);
            count += 1;
        } else {
            replaced.push(ch);
        }
    }

    *s = replaced;
    count
}

/// Byte-wise comparison
///
/// Returns the difference between the first pair of differing bytes, or 0
/// if the strings are equal. The end of a string compares as byte 0.
pub fn compare(lhs: &str, rhs: &str) -> i32 {
    let lhs = lhs.as_bytes();
    let rhs = rhs.as_bytes();
    let len = lhs.len().max(rhs.len());

    for i in 0..len {
        let l = lhs.get(i).copied().unwrap_or(0);
        let r = rhs.get(i).copied().unwrap_or(0);
        if l != r {
            return i32::from(l) - i32::from(r);
        }
    }

    0
}

/// Cuts `s` at its last newline
pub fn strip_newline(s: &mut String) {
    if let Some(pos) = s.rfind('\n') {
        s.truncate(pos);
    }
}
