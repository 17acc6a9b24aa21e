//! Helpers for line-oriented, delimiter-separated text records.
//!
//! These functions are pure and allocation-light; a record reader splits a
//! line with [`split`], checks its shape with [`validate_row`], and then hands
//! each field to [`crate::value_kind`] for type validation.

use alloc::{format, string::String, vec::Vec};

/// Strips leading and trailing ASCII spaces (`' '` only; tabs and newlines
/// are kept).
///
/// ```rust
/// assert_eq!(streamcore::text::trim("  a b \t "), "a b \t");
/// ```
#[must_use]
pub fn trim(s: &str) -> &str {
    s.trim_matches(' ')
}

/// Splits `line` on `delimiter` and [`trim`]s every field.
///
/// Adjacent delimiters yield empty fields. As with reading a stream field by
/// field, an empty line yields no fields and a trailing delimiter does not
/// open a final empty field.
///
/// ```rust
/// use streamcore::text::split;
///
/// assert_eq!(split("a, b ,c", ','), ["a", "b", "c"]);
/// assert_eq!(split("a,,c,", ','), ["a", "", "c"]);
/// assert!(split("", ',').is_empty());
/// ```
#[must_use]
pub fn split(line: &str, delimiter: char) -> Vec<&str> {
    if line.is_empty() {
        return Vec::new();
    }
    let body = line.strip_suffix(delimiter).unwrap_or(line);
    body.split(delimiter).map(trim).collect()
}

/// `true` if every character of `s` is whitespace in the C locale sense
/// (space, `\t`, `\n`, `\v`, `\f`, `\r`). The empty string is blank.
#[must_use]
pub fn is_blank(s: &str) -> bool {
    s.chars().all(is_c_space)
}

/// `true` if `fields` has exactly `expected_columns` entries and none of them
/// is empty.
///
/// ```rust
/// use streamcore::text::validate_row;
///
/// assert!(validate_row(&["a", "b"], 2));
/// assert!(!validate_row(&["a", ""], 2));
/// assert!(!validate_row(&["a", "b"], 3));
/// ```
#[must_use]
pub fn validate_row<S: AsRef<str>>(fields: &[S], expected_columns: usize) -> bool {
    fields.len() == expected_columns && fields.iter().all(|field| !field.as_ref().is_empty())
}

/// `true` if `s` is non-empty and made only of ASCII digits. Signs and
/// decimal points are rejected, so `"3.14"` is not all digits.
#[must_use]
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Formats `value` in fixed-point notation with exactly `precision` digits
/// after the decimal point.
///
/// Takes `f32` or `f64`. Rounding is decided on the exact binary value, the
/// same way `printf("%.*f")` does.
///
/// ```rust
/// use streamcore::text::format_fixed;
///
/// assert_eq!(format_fixed(3.14159, 2), "3.14");
/// assert_eq!(format_fixed(2.7_f32, 1), "2.7");
/// assert_eq!(format_fixed(1.0, 3), "1.000");
/// ```
#[must_use]
pub fn format_fixed(value: impl Into<f64>, precision: u8) -> String {
    format!("{:.*}", usize::from(precision), value.into())
}

/// Case-sensitive suffix test. An empty suffix always matches.
#[must_use]
pub fn ends_with(s: &str, suffix: &str) -> bool {
    s.ends_with(suffix)
}

pub(crate) fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}
