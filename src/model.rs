//! The enumeration data model.
//!
//! This module provides [`EnumDef`], a fully-built enumeration, and
//! [`EnumMember`], a single named constant inside one. Definitions are
//! produced by [`EnumBuilder`](crate::EnumBuilder) (or the
//! [`enum_def!`](crate::enum_def) macro) and can afterwards be documented,
//! extended, rendered, or decomposed.
//!
//! ## Identity and Ordering
//!
//! Members compare equal when they resolve to the same canonical member of
//! the same enumeration, so an alias is equal to the member it points at.
//! Ordering is only defined between members of the *same* enumeration with
//! comparable values; everything else returns `None` from `partial_cmp`:
//!
//! ```rust
//! use enumdoc::EnumBuilder;
//!
//! let people = EnumBuilder::new("People")
//!     .int_backed()
//!     .member("Bob", 1)
//!     .member("Alice", 2)
//!     .build()
//!     .unwrap();
//! let errors = EnumBuilder::new("Errors")
//!     .int_backed()
//!     .member("NotFound", 1)
//!     .build()
//!     .unwrap();
//!
//! let bob = people.get("Bob").unwrap();
//! let alice = people.get("Alice").unwrap();
//! let not_found = errors.get("NotFound").unwrap();
//!
//! assert!(bob < alice);
//! assert_eq!(bob.partial_cmp(not_found), None);
//! ```
//!
//! ## Aliases
//!
//! A member whose value collides with an earlier member becomes an alias
//! under the default policy. Aliases appear in [`EnumDef::members`] but are
//! skipped by [`EnumDef::iter`], mirroring how enumerations usually hide
//! aliases from iteration while keeping them addressable by name.

use crate::builder::AliasPolicy;
use crate::error::{Error, Result};
use crate::flags::{self, FlagParts};
use crate::members::MemberMap;
use crate::value::{MemberValue, ValueKind};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A single named constant of an enumeration.
///
/// Members carry their declared value, their position in declaration order,
/// an optional docstring, and any alternate lookup values. Aliases record
/// the canonical member they resolve to.
///
/// # Examples
///
/// ```rust
/// use enumdoc::{EnumBuilder, MemberValue};
///
/// let def = EnumBuilder::new("People")
///     .int_backed()
///     .member("Bob", 1)
///     .build()
///     .unwrap();
///
/// let bob = def.get("Bob").unwrap();
/// assert_eq!(bob.name(), "Bob");
/// assert_eq!(bob.value(), &MemberValue::Int(1));
/// assert_eq!(bob.ordinal(), 0);
/// assert!(bob.doc().is_none());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnumMember {
    owner: String,
    name: String,
    value: MemberValue,
    ordinal: usize,
    doc: Option<String>,
    alias_of: Option<String>,
    alt_values: Vec<MemberValue>,
}

impl EnumMember {
    pub(crate) fn new(
        owner: String,
        name: String,
        value: MemberValue,
        ordinal: usize,
        alias_of: Option<String>,
        alt_values: Vec<MemberValue>,
    ) -> Self {
        EnumMember {
            owner,
            name,
            value,
            ordinal,
            doc: None,
            alias_of,
            alt_values,
        }
    }

    /// Returns the member's declared name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name of the enumeration this member belongs to.
    #[inline]
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the member's raw value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &MemberValue {
        &self.value
    }

    /// Returns the member's position in declaration order, aliases included.
    #[inline]
    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Returns the member's docstring, if one has been attached.
    #[inline]
    #[must_use]
    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Attaches a docstring to this member, replacing any previous one.
    pub fn set_doc(&mut self, doc: impl Into<String>) {
        self.doc = Some(doc.into());
    }

    /// Returns `true` if this member is an alias for an earlier one.
    #[inline]
    #[must_use]
    pub fn is_alias(&self) -> bool {
        self.alias_of.is_some()
    }

    /// Returns the canonical member this alias points at, if any.
    #[inline]
    #[must_use]
    pub fn alias_of(&self) -> Option<&str> {
        self.alias_of.as_deref()
    }

    /// Returns the alternate lookup values declared for this member.
    #[inline]
    #[must_use]
    pub fn alt_values(&self) -> &[MemberValue] {
        &self.alt_values
    }

    /// Returns the name of the canonical member this entry resolves to.
    ///
    /// For non-aliases this is the member's own name.
    #[must_use]
    pub fn canonical_name(&self) -> &str {
        self.alias_of.as_deref().unwrap_or(&self.name)
    }

    /// Returns `true` if the given value selects this member, either as its
    /// declared value or one of its alternates.
    #[must_use]
    pub fn matches_value(&self, value: &MemberValue) -> bool {
        &self.value == value || self.alt_values.contains(value)
    }
}

impl PartialEq for EnumMember {
    /// Two entries are equal when they resolve to the same canonical member
    /// of the same enumeration.
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.canonical_name() == other.canonical_name()
    }
}

impl Eq for EnumMember {}

impl PartialOrd for EnumMember {
    /// Orders members of the same enumeration by value. Members of different
    /// enumerations, and members with unorderable values, are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.owner != other.owner {
            return None;
        }
        self.value.partial_cmp(&other.value)
    }
}

impl fmt::Display for EnumMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.owner, self.name)
    }
}

/// A fully-built enumeration definition.
///
/// An `EnumDef` records the enumeration's name, its optional class
/// docstring, the declared backing representation, whether it behaves as a
/// bit flag, and its members in declaration order. The construction policies
/// it was built with are retained so [`EnumDef::extend`] applies the same
/// rules as the original build.
///
/// # Examples
///
/// ```rust
/// use enumdoc::EnumBuilder;
///
/// let mut def = EnumBuilder::new("People")
///     .int_backed()
///     .doc("An enumeration of people.")
///     .member("Bob", 1)
///     .member("Alice", 2)
///     .build()
///     .unwrap();
///
/// assert_eq!(def.len(), 2);
/// def.extend("Carol", 3).unwrap();
/// assert_eq!(def.len(), 3);
/// assert_eq!(def.by_value(3).map(|m| m.name()), Some("Carol"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnumDef {
    name: String,
    doc: Option<String>,
    kind: ValueKind,
    is_flag: bool,
    auto_number: bool,
    alias_policy: AliasPolicy,
    members: MemberMap,
}

impl EnumDef {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        name: String,
        doc: Option<String>,
        kind: ValueKind,
        is_flag: bool,
        auto_number: bool,
        alias_policy: AliasPolicy,
        members: MemberMap,
    ) -> Self {
        EnumDef {
            name,
            doc,
            kind,
            is_flag,
            auto_number,
            alias_policy,
            members,
        }
    }

    /// Returns the enumeration's name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the class docstring, if one is set.
    #[inline]
    #[must_use]
    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Sets the class docstring, replacing any previous one.
    pub fn set_doc(&mut self, doc: impl Into<String>) {
        self.doc = Some(doc.into());
    }

    /// Returns the declared backing representation.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Returns `true` if this enumeration behaves as a bit flag.
    #[inline]
    #[must_use]
    pub fn is_flag(&self) -> bool {
        self.is_flag
    }

    /// Returns the alias policy this enumeration was built with.
    #[inline]
    #[must_use]
    pub fn alias_policy(&self) -> AliasPolicy {
        self.alias_policy
    }

    /// Returns the number of canonical members, aliases excluded.
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
    /// assert_eq!(def.len(), 1);
    /// assert_eq!(def.members().len(), 2);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if the enumeration has no canonical members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the full member map, aliases included, in declaration order.
    #[inline]
    #[must_use]
    pub fn members(&self) -> &MemberMap {
        &self.members
    }

    /// Returns the entry with the given name, alias or canonical.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EnumMember> {
        self.members.get(name)
    }

    /// Returns a mutable reference to the entry with the given name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut EnumMember> {
        self.members.get_mut(name)
    }

    /// Returns the canonical member selected by the given value.
    ///
    /// Alternate values participate in the lookup, so a member declared with
    /// extra lookup values is found through any of them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumdoc::EnumBuilder;
    ///
    /// let def = EnumBuilder::new("Status")
    ///     .member_with_alts("Ok", 200, [201, 202])
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(def.by_value(202).map(|m| m.name()), Some("Ok"));
    /// assert!(def.by_value(500).is_none());
    /// ```
    #[must_use]
    pub fn by_value(&self, value: impl Into<MemberValue>) -> Option<&EnumMember> {
        let value = value.into();
        self.iter().find(|m| m.matches_value(&value))
    }

    /// Returns the documentation text for the named member.
    ///
    /// A member without its own docstring falls back to the class docstring,
    /// so an undocumented member of a documented enumeration still has some
    /// text to show. Returns `None` for unknown names.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumdoc::EnumBuilder;
    ///
    /// let def = EnumBuilder::new("People")
    ///     .doc("An enumeration of people.")
    ///     .member("Bob", 1)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(def.member_doc("Bob"), Some("An enumeration of people."));
    /// assert_eq!(def.member_doc("Eve"), None);
    /// ```
    #[must_use]
    pub fn member_doc(&self, name: &str) -> Option<&str> {
        let member = self.get(name)?;
        member.doc().or_else(|| self.doc())
    }

    /// Returns an iterator over canonical members, in declaration order.
    ///
    /// Aliases are skipped; use [`EnumDef::members`] to see every entry.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.members.values())
    }

    /// Returns an iterator over alias entries, in declaration order.
    pub fn aliases(&self) -> impl Iterator<Item = &EnumMember> {
        self.members.values().filter(|m| m.is_alias())
    }

    /// Adds a member after construction, applying the policies the
    /// enumeration was built with.
    ///
    /// Auto-numbered enumerations ignore the explicit value and assign the
    /// next sequential one, exactly as they do during construction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateName`] if the name is taken,
    /// [`Error::ValueMismatch`] if the value does not match the declared
    /// backing kind, and [`Error::DuplicateValue`] if the value collides
    /// with an existing member under a no-alias policy.
    pub fn extend(&mut self, name: &str, value: impl Into<MemberValue>) -> Result<()> {
        self.push_member(name, Some(value.into()), Vec::new())
    }

    /// Adds a member with the next sequential integer value.
    ///
    /// The value is one greater than the current number of entries, aliases
    /// included, matching how auto-numbered enumerations assign values during
    /// construction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumdoc::{EnumBuilder, MemberValue};
    ///
    /// let mut def = EnumBuilder::new("Colors")
    ///     .auto_number()
    ///     .member_auto("Red")
    ///     .member_auto("Green")
    ///     .build()
    ///     .unwrap();
    ///
    /// def.extend_auto("Blue").unwrap();
    /// assert_eq!(def.get("Blue").map(|m| m.value()), Some(&MemberValue::Int(3)));
    /// ```
    pub fn extend_auto(&mut self, name: &str) -> Result<()> {
        self.push_member(name, None, Vec::new())
    }

    /// Adds a member with alternate lookup values after construction.
    pub fn extend_with_alts(
        &mut self,
        name: &str,
        value: impl Into<MemberValue>,
        alts: impl IntoIterator<Item = MemberValue>,
    ) -> Result<()> {
        self.push_member(name, Some(value.into()), alts.into_iter().collect())
    }

    /// Inserts one member, applying the stored policies. `None` assigns the
    /// next sequential integer; under auto-numbering explicit values are
    /// ignored.
    pub(crate) fn push_member(
        &mut self,
        name: &str,
        value: Option<MemberValue>,
        alts: Vec<MemberValue>,
    ) -> Result<()> {
        if self.members.contains(name) {
            return Err(Error::duplicate_name(name, &self.name));
        }
        let value = match value {
            Some(v) if !self.auto_number => v,
            _ => MemberValue::Int(self.members.len() as i64 + 1),
        };
        if self.is_flag && !value.is_int() {
            return Err(Error::value_mismatch(
                name,
                &self.name,
                ValueKind::Int,
                value.kind(),
            ));
        }
        if self.kind != ValueKind::Opaque {
            if value.kind() != self.kind {
                return Err(Error::value_mismatch(name, &self.name, self.kind, value.kind()));
            }
            for alt in &alts {
                if alt.kind() != self.kind {
                    return Err(Error::value_mismatch(name, &self.name, self.kind, alt.kind()));
                }
            }
        }
        let mut alias_of = None;
        if self.alias_policy != AliasPolicy::Distinct {
            let colliding = self
                .iter()
                .find(|m| m.matches_value(&value) || alts.iter().any(|a| m.matches_value(a)))
                .map(|m| m.name().to_string());
            if let Some(canonical) = colliding {
                match self.alias_policy {
                    AliasPolicy::Allow => alias_of = Some(canonical),
                    AliasPolicy::Forbid => {
                        return Err(Error::duplicate_value(name, &canonical, &self.name));
                    }
                    AliasPolicy::Distinct => {}
                }
            }
        }
        let ordinal = self.members.len();
        let member = EnumMember::new(
            self.name.clone(),
            name.to_string(),
            value,
            ordinal,
            alias_of,
            alts,
        );
        self.members.insert(name.to_string(), member);
        Ok(())
    }

    /// Decomposes a composite flag value into its member components.
    ///
    /// Components are returned in descending value order. Bits not covered
    /// by any member are reported in [`FlagParts::uncovered`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAFlag`] if this enumeration was not built with
    /// [`EnumBuilder::flag`](crate::EnumBuilder::flag).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumdoc::EnumBuilder;
    ///
    /// let def = EnumBuilder::new("Perm")
    ///     .flag()
    ///     .member("R", 4)
    ///     .member("W", 2)
    ///     .member("X", 1)
    ///     .build()
    ///     .unwrap();
    ///
    /// let parts = def.decompose(6).unwrap();
    /// let names: Vec<_> = parts.iter().map(|m| m.name()).collect();
    /// assert_eq!(names, vec!["R", "W"]);
    /// assert!(parts.is_exact());
    /// ```
    pub fn decompose(&self, bits: i64) -> Result<FlagParts<'_>> {
        if !self.is_flag {
            return Err(Error::not_a_flag(&self.name));
        }
        Ok(flags::decompose(self, bits))
    }
}

impl fmt::Display for EnumDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl<'a> IntoIterator for &'a EnumDef {
    type Item = &'a EnumMember;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the canonical members of an [`EnumDef`].
pub struct Iter<'a>(indexmap::map::Values<'a, String, EnumMember>);

impl<'a> Iterator for Iter<'a> {
    type Item = &'a EnumMember;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.by_ref().find(|m| !m.is_alias())
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::EnumBuilder;
    use crate::value::MemberValue;
    use std::cmp::Ordering;

    fn people() -> crate::EnumDef {
        EnumBuilder::new("People")
            .int_backed()
            .member("Bob", 1)
            .member("Alice", 2)
            .member("Carol", 3)
            .build()
            .unwrap()
    }

    #[test]
    fn test_member_accessors() {
        let def = people();
        let alice = def.get("Alice").unwrap();
        assert_eq!(alice.name(), "Alice");
        assert_eq!(alice.owner(), "People");
        assert_eq!(alice.value(), &MemberValue::Int(2));
        assert_eq!(alice.ordinal(), 1);
        assert!(!alice.is_alias());
    }

    #[test]
    fn test_alias_equals_canonical() {
        let def = EnumBuilder::new("People")
            .member("Bob", 1)
            .member("bob", 1)
            .build()
            .unwrap();
        let canonical = def.get("Bob").unwrap();
        let alias = def.get("bob").unwrap();
        assert!(alias.is_alias());
        assert_eq!(alias.alias_of(), Some("Bob"));
        assert_eq!(alias, canonical);
    }

    #[test]
    fn test_same_enum_ordering() {
        let def = people();
        let bob = def.get("Bob").unwrap();
        let carol = def.get("Carol").unwrap();
        assert!(bob < carol);
        assert_eq!(bob.partial_cmp(bob), Some(Ordering::Equal));
    }

    #[test]
    fn test_cross_enum_comparison_is_unordered() {
        let people = people();
        let errors = EnumBuilder::new("Errors")
            .int_backed()
            .member("NotFound", 1)
            .build()
            .unwrap();
        let bob = people.get("Bob").unwrap();
        let not_found = errors.get("NotFound").unwrap();
        assert_eq!(bob.partial_cmp(not_found), None);
        assert_ne!(bob, not_found);
    }

    #[test]
    fn test_len_excludes_aliases() {
        let def = EnumBuilder::new("People")
            .member("Bob", 1)
            .member("bob", 1)
            .member("Alice", 2)
            .build()
            .unwrap();
        assert_eq!(def.len(), 2);
        assert_eq!(def.members().len(), 3);
        let iterated: Vec<_> = def.iter().map(|m| m.name()).collect();
        assert_eq!(iterated, vec!["Bob", "Alice"]);
    }

    #[test]
    fn test_by_value_with_alts() {
        let def = EnumBuilder::new("Status")
            .member_with_alts("Ok", 200, [201, 202])
            .member("NotFound", 404)
            .build()
            .unwrap();
        assert_eq!(def.by_value(200).map(|m| m.name()), Some("Ok"));
        assert_eq!(def.by_value(201).map(|m| m.name()), Some("Ok"));
        assert_eq!(def.by_value(404).map(|m| m.name()), Some("NotFound"));
        assert!(def.by_value(500).is_none());
    }

    #[test]
    fn test_extend_applies_policies() {
        let mut def = people();
        def.extend("Dennis", 4).unwrap();
        assert_eq!(def.by_value(4).map(|m| m.name()), Some("Dennis"));

        // duplicate name rejected
        assert!(def.extend("Dennis", 5).is_err());

        // duplicate value becomes an alias under the default policy
        def.extend("dennis", 4).unwrap();
        assert!(def.get("dennis").unwrap().is_alias());
    }

    #[test]
    fn test_extend_checks_value_kind() {
        let mut def = people();
        let err = def.extend("Eve", "five").unwrap_err();
        assert!(err.to_string().contains("expected int"));
    }

    #[test]
    fn test_extend_auto_counts_aliases() {
        let mut def = EnumBuilder::new("Colors")
            .auto_number()
            .member_auto("Red")
            .member_auto("Green")
            .build()
            .unwrap();
        def.extend_auto("Blue").unwrap();
        assert_eq!(def.get("Blue").unwrap().value(), &MemberValue::Int(3));
        assert_eq!(def.get("Blue").unwrap().ordinal(), 2);
    }

    #[test]
    fn test_member_doc_falls_back_to_class_doc() {
        let mut def = EnumBuilder::new("People")
            .doc("An enumeration of people.")
            .member("Bob", 1)
            .member("Alice", 2)
            .build()
            .unwrap();
        def.get_mut("Bob").unwrap().set_doc("A person called Bob");

        assert_eq!(def.member_doc("Bob"), Some("A person called Bob"));
        assert_eq!(def.member_doc("Alice"), Some("An enumeration of people."));
        assert_eq!(def.member_doc("Eve"), None);
    }

    #[test]
    fn test_aliases_iterator() {
        let def = EnumBuilder::new("People")
            .member("Bob", 1)
            .member("bob", 1)
            .member("Alice", 2)
            .build()
            .unwrap();
        let aliases: Vec<_> = def.aliases().map(|m| m.name()).collect();
        assert_eq!(aliases, vec!["bob"]);
    }

    #[test]
    fn test_display() {
        let def = people();
        assert_eq!(def.to_string(), "People");
        assert_eq!(def.get("Bob").unwrap().to_string(), "People.Bob");
    }
}
