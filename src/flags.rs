//! Decomposition of composite flag values.
//!
//! A flag enumeration assigns bit values to its members; a composite value
//! is any combination of those bits. This module provides [`FlagParts`],
//! the result of breaking a composite value back into members, produced by
//! [`EnumDef::decompose`](crate::EnumDef::decompose).
//!
//! ## Decomposition Rules
//!
//! - Every canonical member whose bits are fully contained in the value is a
//!   component; zero-valued members never match a composite.
//! - Components come back in descending value order.
//! - When one member's value equals the whole composite and other members
//!   already cover it, that member is dropped as redundant.
//! - A value matched by no member at all falls back to an exact value
//!   lookup, which is how a named zero member is found for `0`.
//! - Bits no member covers are reported in [`FlagParts::uncovered`].
//!
//! ## Examples
//!
//! ```rust
//! use enumdoc::EnumBuilder;
//!
//! let color = EnumBuilder::new("Color")
//!     .flag()
//!     .member("Red", 1)
//!     .member("Green", 2)
//!     .member("Blue", 4)
//!     .member("White", 7)
//!     .build()
//!     .unwrap();
//!
//! // White covers the whole value but the single bits break it down,
//! // so the redundant composite member is dropped
//! let parts = color.decompose(7).unwrap();
//! let names: Vec<_> = parts.iter().map(|m| m.name()).collect();
//! assert_eq!(names, vec!["Blue", "Green", "Red"]);
//! ```

use crate::model::{EnumDef, EnumMember};
use std::fmt;

/// The member components of a composite flag value.
///
/// Holds references into the [`EnumDef`](crate::EnumDef) it was produced
/// from, in descending value order, plus any bits no member covered.
///
/// # Examples
///
/// ```rust
/// use enumdoc::EnumBuilder;
///
/// let perm = EnumBuilder::new("Perm")
///     .flag()
///     .member("R", 4)
///     .member("W", 2)
///     .member("X", 1)
///     .build()
///     .unwrap();
///
/// let parts = perm.decompose(11).unwrap();
/// assert_eq!(parts.to_string(), "W|X|8");
/// assert_eq!(parts.uncovered(), 8);
/// assert!(!parts.is_exact());
/// ```
#[derive(Clone, Debug)]
pub struct FlagParts<'a> {
    members: Vec<&'a EnumMember>,
    uncovered: i64,
}

impl<'a> FlagParts<'a> {
    /// Returns the member components, in descending value order.
    #[inline]
    #[must_use]
    pub fn members(&self) -> &[&'a EnumMember] {
        &self.members
    }

    /// Returns the bits covered by no member.
    #[inline]
    #[must_use]
    pub fn uncovered(&self) -> i64 {
        self.uncovered
    }

    /// Returns `true` if the members cover the composite value exactly.
    #[inline]
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.uncovered == 0
    }

    /// Returns the number of member components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if no member matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns an iterator over the member components.
    pub fn iter(&self) -> impl Iterator<Item = &'a EnumMember> + '_ {
        self.members.iter().copied()
    }
}

impl<'a> IntoIterator for FlagParts<'a> {
    type Item = &'a EnumMember;
    type IntoIter = std::vec::IntoIter<&'a EnumMember>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a, 'b> IntoIterator for &'b FlagParts<'a> {
    type Item = &'a EnumMember;
    type IntoIter = std::iter::Copied<std::slice::Iter<'b, &'a EnumMember>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter().copied()
    }
}

impl fmt::Display for FlagParts<'_> {
    /// Joins component names with `|`, appending uncovered bits when present.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.members.is_empty() && self.uncovered == 0 {
            return f.write_str("0");
        }
        let mut first = true;
        for member in &self.members {
            if !first {
                f.write_str("|")?;
            }
            f.write_str(member.name())?;
            first = false;
        }
        if self.uncovered != 0 {
            if !first {
                f.write_str("|")?;
            }
            write!(f, "{}", self.uncovered)?;
        }
        Ok(())
    }
}

pub(crate) fn decompose(def: &EnumDef, bits: i64) -> FlagParts<'_> {
    let mut not_covered = bits;
    let mut parts: Vec<(i64, &EnumMember)> = Vec::new();
    for member in def.iter() {
        let Some(v) = member.value().as_int() else {
            continue;
        };
        if v != 0 && v & bits == v {
            parts.push((v, member));
            not_covered &= !v;
        }
    }
    if parts.is_empty() {
        if let Some(member) = def.by_value(bits) {
            parts.push((bits, member));
            not_covered = 0;
        }
    }
    parts.sort_by(|a, b| b.0.cmp(&a.0));
    // a member equal to the whole value is redundant once other members
    // break it down
    if parts.len() > 1 && parts[0].0 == bits {
        parts.remove(0);
    }
    FlagParts {
        members: parts.into_iter().map(|(_, m)| m).collect(),
        uncovered: not_covered,
    }
}
