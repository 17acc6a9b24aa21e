//! Typed validation of text fields.
//!
//! Each `is_*` check answers one question: does this string parse as that
//! type, in full, within range? Leading C-locale whitespace is skipped.
//! Anything after the number, trailing whitespace included, disqualifies the
//! field. Floating-point checks also reject infinities and NaN.
//!
//! [`ValueKind`] names the supported types and dispatches to the matching
//! check; [`check_value_type`] does the same from a string tag.

use alloc::string::ToString;
use core::{fmt, str::FromStr};

use crate::{ParseValueKindError, text::is_c_space};

fn numeric_token(s: &str) -> &str {
    s.trim_start_matches(is_c_space)
}

fn parses_as<T: FromStr>(s: &str) -> bool {
    numeric_token(s).parse::<T>().is_ok()
}

macro_rules! integer_checks {
    ($($name:ident => $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("`true` if `s` is a whole number that fits in `", stringify!($ty), "`.")]
            #[must_use]
            pub fn $name(s: &str) -> bool {
                parses_as::<$ty>(s)
            }
        )*
    };
}

integer_checks! {
    is_u8 => u8,
    is_u16 => u16,
    is_u32 => u32,
    is_u64 => u64,
    is_i8 => i8,
    is_i16 => i16,
    is_i32 => i32,
    is_i64 => i64,
}

/// `true` if `s` parses as a finite `f32`.
///
/// Values too large for `f32` overflow to infinity and are rejected.
#[must_use]
pub fn is_f32(s: &str) -> bool {
    numeric_token(s).parse::<f32>().is_ok_and(f32::is_finite)
}

/// `true` if `s` parses as a finite `f64`.
#[must_use]
pub fn is_f64(s: &str) -> bool {
    numeric_token(s).parse::<f64>().is_ok_and(f64::is_finite)
}

/// `true` if `s` is `true` or `false`, ignoring ASCII case.
#[must_use]
pub fn is_bool(s: &str) -> bool {
    s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false")
}

/// The closed set of primitive types a field can be validated against.
///
/// ```rust
/// use streamcore::ValueKind;
///
/// let kind: ValueKind = "uint8".parse().unwrap();
/// assert_eq!(kind, ValueKind::UInt8);
/// assert!(kind.accepts("255"));
/// assert!(!kind.accepts("256"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValueKind {
    /// `uint8`
    UInt8,
    /// `uint16`
    UInt16,
    /// `uint32`
    UInt32,
    /// `uint64`
    UInt64,
    /// `int8`
    Int8,
    /// `int16`
    Int16,
    /// `int32`
    Int32,
    /// `int64`
    Int64,
    /// `float`, a finite `f32`.
    Float,
    /// `double`, a finite `f64`.
    Double,
    /// `string`; any text qualifies.
    String,
    /// `bool`; `true`/`false` in any ASCII case.
    Bool,
}

impl ValueKind {
    /// Every kind, in tag order.
    pub const ALL: [ValueKind; 12] = [
        ValueKind::UInt8,
        ValueKind::UInt16,
        ValueKind::UInt32,
        ValueKind::UInt64,
        ValueKind::Int8,
        ValueKind::Int16,
        ValueKind::Int32,
        ValueKind::Int64,
        ValueKind::Float,
        ValueKind::Double,
        ValueKind::String,
        ValueKind::Bool,
    ];

    /// The tag used in schemas, e.g. `"uint16"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueKind::UInt8 => "uint8",
            ValueKind::UInt16 => "uint16",
            ValueKind::UInt32 => "uint32",
            ValueKind::UInt64 => "uint64",
            ValueKind::Int8 => "int8",
            ValueKind::Int16 => "int16",
            ValueKind::Int32 => "int32",
            ValueKind::Int64 => "int64",
            ValueKind::Float => "float",
            ValueKind::Double => "double",
            ValueKind::String => "string",
            ValueKind::Bool => "bool",
        }
    }

    /// `true` if `value` qualifies as this kind.
    #[must_use]
    pub fn accepts(self, value: &str) -> bool {
        match self {
            ValueKind::UInt8 => is_u8(value),
            ValueKind::UInt16 => is_u16(value),
            ValueKind::UInt32 => is_u32(value),
            ValueKind::UInt64 => is_u64(value),
            ValueKind::Int8 => is_i8(value),
            ValueKind::Int16 => is_i16(value),
            ValueKind::Int32 => is_i32(value),
            ValueKind::Int64 => is_i64(value),
            ValueKind::Float => is_f32(value),
            ValueKind::Double => is_f64(value),
            ValueKind::String => true,
            ValueKind::Bool => is_bool(value),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueKind {
    type Err = ParseValueKindError;

    /// Tags match exactly; `"UINT8"` and `" uint8"` are unknown.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        ValueKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == tag)
            .ok_or_else(|| ParseValueKindError {
                tag: tag.to_string(),
            })
    }
}

/// Validates `value` against the type named by `tag`.
///
/// An unknown tag is not an error; it simply does not qualify.
///
/// ```rust
/// use streamcore::check_value_type;
///
/// assert!(check_value_type("42", "int32"));
/// assert!(check_value_type("anything", "string"));
/// assert!(!check_value_type("42", "bogus-type"));
/// ```
#[must_use]
pub fn check_value_type(value: &str, tag: &str) -> bool {
    tag.parse::<ValueKind>().is_ok_and(|kind| kind.accepts(value))
}
