//! Raw value representation for enumeration members.
//!
//! This module provides the [`MemberValue`] enum which represents the value
//! carried by an enum member, and [`ValueKind`] which names a value's backing
//! representation. Values are deliberately simple: an integer, a string, or an
//! opaque expression whose source text is preserved verbatim.
//!
//! ## Core Types
//!
//! - [`MemberValue`]: The raw value of a member (integer, string, or opaque)
//! - [`ValueKind`]: The backing representation an enumeration declares
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use enumdoc::MemberValue;
//!
//! // From primitives
//! let number = MemberValue::from(42);
//! let text = MemberValue::from("feeder");
//!
//! // Opaque values keep their source text
//! let complex = MemberValue::opaque("3 + 4j");
//! ```
//!
//! ### Type Checking
//!
//! ```rust
//! use enumdoc::MemberValue;
//!
//! let value = MemberValue::from(42);
//! assert!(value.is_int());
//! assert!(!value.is_str());
//! ```
//!
//! ### Ordering
//!
//! Values of the same kind compare naturally; values of different kinds (and
//! opaque values) are unordered, so `partial_cmp` returns `None`:
//!
//! ```rust
//! use enumdoc::MemberValue;
//!
//! assert!(MemberValue::from(1) < MemberValue::from(2));
//! assert_eq!(
//!     MemberValue::from(1).partial_cmp(&MemberValue::from("one")),
//!     None,
//! );
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The raw value carried by an enumeration member.
///
/// Enumerations declare a backing representation up front (see
/// [`ValueKind`]); members of int-backed and str-backed enumerations must
/// carry values of the matching variant. Plain enumerations accept any
/// variant, including [`MemberValue::Opaque`] for values the scanner cannot
/// interpret as an integer or string literal.
///
/// # Examples
///
/// ```rust
/// use enumdoc::MemberValue;
///
/// let num = MemberValue::Int(42);
/// let text = MemberValue::Str("feeder".to_string());
///
/// assert!(num.is_int());
/// assert_eq!(num.as_int(), Some(42));
/// assert_eq!(text.as_str(), Some("feeder"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberValue {
    /// A signed integer value.
    Int(i64),
    /// A string value.
    Str(String),
    /// Any other value, preserved as its source text.
    Opaque(String),
}

/// The backing representation of an enumeration or one of its values.
///
/// # Examples
///
/// ```rust
/// use enumdoc::{MemberValue, ValueKind};
///
/// assert_eq!(MemberValue::from(42).kind(), ValueKind::Int);
/// assert_eq!(ValueKind::Str.to_string(), "str");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// Values are signed integers.
    Int,
    /// Values are strings.
    Str,
    /// No declared representation; values may be anything.
    Opaque,
}

impl ValueKind {
    /// Returns the lowercase name of this kind as used in rendered output.
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Int => "int",
            ValueKind::Str => "str",
            ValueKind::Opaque => "opaque",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MemberValue {
    /// Creates an opaque value from its source text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumdoc::MemberValue;
    ///
    /// let value = MemberValue::opaque("object()");
    /// assert!(value.is_opaque());
    /// ```
    #[must_use]
    pub fn opaque(text: impl Into<String>) -> Self {
        MemberValue::Opaque(text.into())
    }

    /// Returns `true` if this is an integer value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumdoc::MemberValue;
    ///
    /// assert!(MemberValue::Int(1).is_int());
    /// assert!(!MemberValue::Str("one".to_string()).is_int());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, MemberValue::Int(_))
    }

    /// Returns `true` if this is a string value.
    #[inline]
    #[must_use]
    pub const fn is_str(&self) -> bool {
        matches!(self, MemberValue::Str(_))
    }

    /// Returns `true` if this is an opaque value.
    #[inline]
    #[must_use]
    pub const fn is_opaque(&self) -> bool {
        matches!(self, MemberValue::Opaque(_))
    }

    /// Returns the [`ValueKind`] of this value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumdoc::{MemberValue, ValueKind};
    ///
    /// assert_eq!(MemberValue::Int(1).kind(), ValueKind::Int);
    /// assert_eq!(MemberValue::opaque("()").kind(), ValueKind::Opaque);
    /// ```
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            MemberValue::Int(_) => ValueKind::Int,
            MemberValue::Str(_) => ValueKind::Str,
            MemberValue::Opaque(_) => ValueKind::Opaque,
        }
    }

    /// Extracts the integer if this is an [`MemberValue::Int`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumdoc::MemberValue;
    ///
    /// assert_eq!(MemberValue::Int(42).as_int(), Some(42));
    /// assert_eq!(MemberValue::opaque("42").as_int(), None);
    /// ```
    #[inline]
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            MemberValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Extracts the string if this is a [`MemberValue::Str`].
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MemberValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the source text of an opaque value.
    #[inline]
    #[must_use]
    pub fn as_opaque(&self) -> Option<&str> {
        match self {
            MemberValue::Opaque(s) => Some(s),
            _ => None,
        }
    }

    /// Renders this value the way a source file would spell it.
    ///
    /// Strings gain single quotes; integers and opaque values print verbatim.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumdoc::MemberValue;
    ///
    /// assert_eq!(MemberValue::Int(2).repr(), "2");
    /// assert_eq!(MemberValue::from("feeder").repr(), "'feeder'");
    /// assert_eq!(MemberValue::opaque("3 + 4j").repr(), "3 + 4j");
    /// ```
    #[must_use]
    pub fn repr(&self) -> String {
        match self {
            MemberValue::Int(i) => i.to_string(),
            MemberValue::Str(s) => format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
            MemberValue::Opaque(s) => s.clone(),
        }
    }
}

impl fmt::Display for MemberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberValue::Int(i) => write!(f, "{}", i),
            MemberValue::Str(s) => f.write_str(s),
            MemberValue::Opaque(s) => f.write_str(s),
        }
    }
}

impl PartialOrd for MemberValue {
    /// Compares two values of the same kind; mixed kinds and opaque values
    /// are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (MemberValue::Int(a), MemberValue::Int(b)) => a.partial_cmp(b),
            (MemberValue::Str(a), MemberValue::Str(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl From<i64> for MemberValue {
    fn from(value: i64) -> Self {
        MemberValue::Int(value)
    }
}

impl From<i32> for MemberValue {
    fn from(value: i32) -> Self {
        MemberValue::Int(value as i64)
    }
}

impl From<u32> for MemberValue {
    fn from(value: u32) -> Self {
        MemberValue::Int(value as i64)
    }
}

impl From<String> for MemberValue {
    fn from(value: String) -> Self {
        MemberValue::Str(value)
    }
}

impl From<&str> for MemberValue {
    fn from(value: &str) -> Self {
        MemberValue::Str(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(MemberValue::from(42i64), MemberValue::Int(42));
        assert_eq!(MemberValue::from(42i32), MemberValue::Int(42));
        assert_eq!(MemberValue::from("bus"), MemberValue::Str("bus".to_string()));
        assert_eq!(
            MemberValue::from("bus".to_string()),
            MemberValue::Str("bus".to_string())
        );
    }

    #[test]
    fn test_kind_and_predicates() {
        assert_eq!(MemberValue::Int(1).kind(), ValueKind::Int);
        assert_eq!(MemberValue::from("a").kind(), ValueKind::Str);
        assert_eq!(MemberValue::opaque("()").kind(), ValueKind::Opaque);

        assert!(MemberValue::Int(1).is_int());
        assert!(MemberValue::from("a").is_str());
        assert!(MemberValue::opaque("()").is_opaque());
        assert!(!MemberValue::Int(1).is_str());
    }

    #[test]
    fn test_extractors() {
        assert_eq!(MemberValue::Int(7).as_int(), Some(7));
        assert_eq!(MemberValue::from("x").as_int(), None);
        assert_eq!(MemberValue::from("x").as_str(), Some("x"));
        assert_eq!(MemberValue::Int(7).as_str(), None);
        assert_eq!(MemberValue::opaque("1j").as_opaque(), Some("1j"));
    }

    #[test]
    fn test_same_kind_ordering() {
        assert!(MemberValue::Int(1) < MemberValue::Int(2));
        assert!(MemberValue::from("a") < MemberValue::from("b"));
        assert_eq!(
            MemberValue::Int(3).partial_cmp(&MemberValue::Int(3)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn test_mixed_kinds_are_unordered() {
        assert_eq!(
            MemberValue::Int(1).partial_cmp(&MemberValue::from("1")),
            None
        );
        assert_eq!(
            MemberValue::opaque("1j").partial_cmp(&MemberValue::opaque("1j")),
            None
        );
    }

    #[test]
    fn test_repr() {
        assert_eq!(MemberValue::Int(-3).repr(), "-3");
        assert_eq!(MemberValue::from("it's").repr(), "'it\\'s'");
        assert_eq!(MemberValue::opaque("object()").repr(), "object()");
    }

    #[test]
    fn test_display() {
        assert_eq!(MemberValue::Int(5).to_string(), "5");
        assert_eq!(MemberValue::from("feeder").to_string(), "feeder");
        assert_eq!(ValueKind::Int.to_string(), "int");
    }
}
