//! Ordered map type for enumeration members.
//!
//! This module provides [`MemberMap`], a wrapper around [`IndexMap`] that
//! keeps members in declaration order. Order matters for enumerations:
//! ordinals, auto-numbering, rendered documentation, and flag decomposition
//! all depend on the position members were declared in.
//!
//! ## Why IndexMap?
//!
//! `MemberMap` uses [`IndexMap`] instead of `HashMap` to ensure:
//!
//! - **Deterministic output**: Members render in a consistent order
//! - **Iteration order**: Members are iterated in declaration order
//! - **Compatibility**: Easier testing and debugging with predictable output
//!
//! ## Examples
//!
//! ```rust
//! use enumdoc::EnumBuilder;
//!
//! let def = EnumBuilder::new("People")
//!     .member("Bob", 1)
//!     .member("Alice", 2)
//!     .build()
//!     .unwrap();
//!
//! let names: Vec<_> = def.members().keys().cloned().collect();
//! assert_eq!(names, vec!["Bob", "Alice"]);
//! ```

use crate::model::EnumMember;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered map of member names to [`EnumMember`] entries.
///
/// This is a thin wrapper around [`IndexMap`] that maintains declaration
/// order, which is what gives ordinals and rendered member listings their
/// meaning. Alias entries live in the map alongside canonical members.
///
/// # Examples
///
/// ```rust
/// use enumdoc::EnumBuilder;
///
/// let def = EnumBuilder::new("People")
///     .member("Bob", 1)
///     .member("bob", 1)
///     .build()
///     .unwrap();
///
/// // Aliases are present in the map but point at their canonical member
/// assert_eq!(def.members().len(), 2);
/// assert_eq!(def.members().get("bob").and_then(|m| m.alias_of()), Some("Bob"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberMap(IndexMap<String, EnumMember>);

impl MemberMap {
    /// Creates an empty `MemberMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumdoc::MemberMap;
    ///
    /// let map = MemberMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        MemberMap(IndexMap::new())
    }

    /// Creates an empty `MemberMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        MemberMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a member into the map under the given name.
    ///
    /// If the map already contained this name, the old member is returned.
    pub fn insert(&mut self, name: String, member: EnumMember) -> Option<EnumMember> {
        self.0.insert(name, member)
    }

    /// Returns a reference to the member with the given name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumdoc::EnumBuilder;
    ///
    /// let def = EnumBuilder::new("People").member("Bob", 1).build().unwrap();
    /// assert!(def.members().get("Bob").is_some());
    /// assert!(def.members().get("Eve").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EnumMember> {
        self.0.get(name)
    }

    /// Returns a mutable reference to the member with the given name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut EnumMember> {
        self.0.get_mut(name)
    }

    /// Returns `true` if a member with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the number of members in the map, aliases included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumdoc::MemberMap;
    ///
    /// let map = MemberMap::new();
    /// assert_eq!(map.len(), 0);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over member names, in declaration order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, EnumMember> {
        self.0.keys()
    }

    /// Returns an iterator over members, in declaration order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, EnumMember> {
        self.0.values()
    }

    /// Returns a mutable iterator over members, in declaration order.
    pub fn values_mut(&mut self) -> indexmap::map::ValuesMut<'_, String, EnumMember> {
        self.0.values_mut()
    }

    /// Returns an iterator over name-member pairs, in declaration order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, EnumMember> {
        self.0.iter()
    }
}

impl Default for MemberMap {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoIterator for MemberMap {
    type Item = (String, EnumMember);
    type IntoIter = indexmap::map::IntoIter<String, EnumMember>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MemberMap {
    type Item = (&'a String, &'a EnumMember);
    type IntoIter = indexmap::map::Iter<'a, String, EnumMember>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, EnumMember)> for MemberMap {
    fn from_iter<T: IntoIterator<Item = (String, EnumMember)>>(iter: T) -> Self {
        MemberMap(IndexMap::from_iter(iter))
    }
}
