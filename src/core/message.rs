//! Message bodies built from several operands
//!
//! [`concat`] joins operands the way a "print everything" call would: a single
//! space separates two adjacent operands when neither of them is text.
//!
//! ```
//! use rust_named_logger::concat_message;
//!
//! assert_eq!(concat_message!("retry", 3, 5), "retry3 5");
//! assert_eq!(concat_message!("a", "b", 1.5, true), "ab1.5 true");
//! ```

use std::borrow::Cow;
use std::fmt::{self, Write};

/// An operand of a concatenated message.
///
/// `char` counts as text and prints as the character itself, so `'a', 'b'`
/// joins to `ab`. Formatters that treat a character as an integer code
/// point would print `97 98` instead; pass `u32::from(c)` for that.
pub trait MessagePart: fmt::Display {
    /// Text operands are joined without a separating space.
    fn is_text(&self) -> bool {
        false
    }
}

impl MessagePart for str {
    fn is_text(&self) -> bool {
        true
    }
}

impl MessagePart for String {
    fn is_text(&self) -> bool {
        true
    }
}

impl MessagePart for Cow<'_, str> {
    fn is_text(&self) -> bool {
        true
    }
}

impl MessagePart for char {
    fn is_text(&self) -> bool {
        true
    }
}

impl<T: MessagePart + ?Sized> MessagePart for &T {
    fn is_text(&self) -> bool {
        (**self).is_text()
    }
}

macro_rules! non_text_parts {
    ($($ty:ty),+ $(,)?) => {
        $(impl MessagePart for $ty {})+
    };
}

non_text_parts!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    crate::core::LogLevel,
);

/// Join operands into one message body.
pub fn concat(parts: &[&dyn MessagePart]) -> String {
    let mut out = String::new();
    let mut previous_is_text = true;

    for (index, part) in parts.iter().enumerate() {
        let is_text = part.is_text();
        if index > 0 && !is_text && !previous_is_text {
            out.push(' ');
        }
        // Writing into a String cannot fail
        let _ = write!(out, "{}", part);
        previous_is_text = is_text;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_operands_are_adjacent() {
        assert_eq!(concat(&[&"a", &"b", &String::from("c")]), "abc");
    }

    #[test]
    fn test_non_text_operands_are_spaced() {
        assert_eq!(concat(&[&1, &2, &3]), "1 2 3");
        assert_eq!(concat(&[&true, &2.5]), "true 2.5");
    }

    #[test]
    fn test_mixed_operands() {
        assert_eq!(concat(&[&"count", &3, &4, &"items"]), "count3 4items");
        assert_eq!(concat(&[&1, &"x", &2]), "1x2");
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(concat(&[]), "");
        assert_eq!(concat(&[&42]), "42");
    }

    #[test]
    fn test_level_operand() {
        assert_eq!(
            concat(&[&"level ", &crate::core::LogLevel::INFO, &4]),
            "level INFO 4"
        );
    }

    #[test]
    fn test_char_operands_are_text() {
        assert_eq!(concat(&[&'a', &'b', &1, &'c']), "ab1c");
        assert_eq!(concat(&[&u32::from('a'), &u32::from('b')]), "97 98");
    }
}
