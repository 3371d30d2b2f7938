//! Builder for enumeration definitions.
//!
//! This module provides [`EnumBuilder`], which assembles an
//! [`EnumDef`](crate::EnumDef) from declared members and a set of
//! construction policies, and [`AliasPolicy`], which controls what happens
//! when two members share a value.
//!
//! Classic enumeration flavours are compositions of these policies rather
//! than separate types:
//!
//! - an int-backed enum is `int_backed()`
//! - a string-backed enum is `str_backed()`
//! - an auto-numbered enum is `auto_number()`
//! - a duplicate-free enum is `duplicate_free()`
//! - a bit flag is `flag()`
//!
//! ## Examples
//!
//! ```rust
//! use enumdoc::{EnumBuilder, MemberValue};
//!
//! let def = EnumBuilder::new("ModeOfTransport")
//!     .str_backed()
//!     .doc("Modes of transport.")
//!     .member("Bus", "bus")
//!     .member("Train", "train")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(def.get("Bus").map(|m| m.value()), Some(&MemberValue::from("bus")));
//! ```
//!
//! Policies compose freely:
//!
//! ```rust
//! use enumdoc::EnumBuilder;
//!
//! let def = EnumBuilder::new("Permissions")
//!     .int_backed()
//!     .flag()
//!     .duplicate_free()
//!     .member("Read", 4)
//!     .member("Write", 2)
//!     .member("Execute", 1)
//!     .build()
//!     .unwrap();
//!
//! assert!(def.is_flag());
//! ```

use crate::error::{Error, Result};
use crate::members::MemberMap;
use crate::model::EnumDef;
use crate::value::{MemberValue, ValueKind};
use serde::{Deserialize, Serialize};

/// What to do when a member's value collides with an earlier member's.
///
/// # Examples
///
/// ```rust
/// use enumdoc::{AliasPolicy, EnumBuilder};
///
/// // Under `Distinct`, both members stay canonical
/// let def = EnumBuilder::new("Twins")
///     .alias_policy(AliasPolicy::Distinct)
///     .member("First", 1)
///     .member("Second", 1)
///     .build()
///     .unwrap();
/// assert_eq!(def.len(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AliasPolicy {
    /// The colliding member becomes an alias for the earlier one.
    #[default]
    Allow,
    /// The collision is an error.
    Forbid,
    /// Both members stay canonical; value lookup finds the earlier one.
    Distinct,
}

/// Builder for [`EnumDef`](crate::EnumDef).
///
/// Members are declared in order; policies may be set at any point before
/// [`EnumBuilder::build`]. The builder consumes itself on every call, so a
/// definition reads as a single expression.
///
/// # Examples
///
/// ```rust
/// use enumdoc::EnumBuilder;
///
/// let def = EnumBuilder::new("People")
///     .int_backed()
///     .doc("An enumeration of people.")
///     .member("Bob", 1)
///     .member("Alice", 2)
///     .member("Carol", 3)
///     .build()
///     .unwrap();
///
/// assert_eq!(def.len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct EnumBuilder {
    name: String,
    doc: Option<String>,
    kind: ValueKind,
    auto_number: bool,
    alias_policy: AliasPolicy,
    flag: bool,
    members: Vec<Declared>,
}

#[derive(Clone, Debug)]
struct Declared {
    name: String,
    value: Option<MemberValue>,
    alts: Vec<MemberValue>,
}

impl EnumBuilder {
    /// Creates a builder for an enumeration with the given name.
    ///
    /// The default configuration is a plain enumeration: no declared backing
    /// representation, no auto-numbering, aliases allowed, not a flag.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        EnumBuilder {
            name: name.into(),
            doc: None,
            kind: ValueKind::Opaque,
            auto_number: false,
            alias_policy: AliasPolicy::default(),
            flag: false,
            members: Vec::new(),
        }
    }

    /// Sets the class docstring.
    #[must_use]
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Declares the enumeration int-backed; every value must be an integer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumdoc::EnumBuilder;
    ///
    /// let err = EnumBuilder::new("People")
    ///     .int_backed()
    ///     .member("Bob", "not a number")
    ///     .build()
    ///     .unwrap_err();
    /// assert!(err.to_string().contains("expected int"));
    /// ```
    #[must_use]
    pub fn int_backed(mut self) -> Self {
        self.kind = ValueKind::Int;
        self
    }

    /// Declares the enumeration string-backed; every value must be a string.
    #[must_use]
    pub fn str_backed(mut self) -> Self {
        self.kind = ValueKind::Str;
        self
    }

    /// Assigns every member the next sequential integer, starting from 1.
    ///
    /// Explicit values are ignored; the position in declaration order alone
    /// decides the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumdoc::{EnumBuilder, MemberValue};
    ///
    /// let def = EnumBuilder::new("Colors")
    ///     .auto_number()
    ///     .member_auto("Red")
    ///     .member_auto("Green")
    ///     .member_auto("Blue")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(def.get("Blue").map(|m| m.value()), Some(&MemberValue::Int(3)));
    /// ```
    #[must_use]
    pub fn auto_number(mut self) -> Self {
        self.auto_number = true;
        self
    }

    /// Forbids value collisions outright, the same as
    /// `alias_policy(AliasPolicy::Forbid)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumdoc::EnumBuilder;
    ///
    /// let err = EnumBuilder::new("Unique")
    ///     .duplicate_free()
    ///     .member("First", 1)
    ///     .member("Second", 1)
    ///     .build()
    ///     .unwrap_err();
    /// assert!(err.to_string().contains("aliases are not allowed"));
    /// ```
    #[must_use]
    pub fn duplicate_free(mut self) -> Self {
        self.alias_policy = AliasPolicy::Forbid;
        self
    }

    /// Sets the alias policy applied to value collisions.
    #[must_use]
    pub fn alias_policy(mut self, policy: AliasPolicy) -> Self {
        self.alias_policy = policy;
        self
    }

    /// Declares the enumeration a bit flag; every value must be an integer
    /// and composite values decompose into members.
    #[must_use]
    pub fn flag(mut self) -> Self {
        self.flag = true;
        self
    }

    /// Declares a member with an explicit value.
    #[must_use]
    pub fn member(mut self, name: impl Into<String>, value: impl Into<MemberValue>) -> Self {
        self.members.push(Declared {
            name: name.into(),
            value: Some(value.into()),
            alts: Vec::new(),
        });
        self
    }

    /// Declares a member whose value is the next sequential integer.
    #[must_use]
    pub fn member_auto(mut self, name: impl Into<String>) -> Self {
        self.members.push(Declared {
            name: name.into(),
            value: None,
            alts: Vec::new(),
        });
        self
    }

    /// Declares a member with alternate lookup values.
    ///
    /// The first value is the member's declared value; the rest select the
    /// member in value lookups without becoming aliases.
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
    /// assert_eq!(def.by_value(201).map(|m| m.name()), Some("Ok"));
    /// ```
    #[must_use]
    pub fn member_with_alts<V, I, A>(mut self, name: impl Into<String>, value: V, alts: I) -> Self
    where
        V: Into<MemberValue>,
        I: IntoIterator<Item = A>,
        A: Into<MemberValue>,
    {
        self.members.push(Declared {
            name: name.into(),
            value: Some(value.into()),
            alts: alts.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Builds the enumeration, applying all declared policies.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyEnum`] for a builder with no members,
    /// [`Error::DuplicateName`] for repeated names,
    /// [`Error::ValueMismatch`] for values of the wrong kind, and
    /// [`Error::DuplicateValue`] for collisions under a no-alias policy.
    pub fn build(self) -> Result<EnumDef> {
        let EnumBuilder {
            name,
            doc,
            kind,
            auto_number,
            alias_policy,
            flag,
            members,
        } = self;
        if members.is_empty() {
            return Err(Error::empty_enum(&name));
        }
        let mut def = EnumDef::new(
            name,
            doc,
            kind,
            flag,
            auto_number,
            alias_policy,
            MemberMap::with_capacity(members.len()),
        );
        for decl in members {
            def.push_member(&decl.name, decl.value, decl.alts)?;
        }
        Ok(def)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_build_fails() {
        let err = EnumBuilder::new("Nothing").build().unwrap_err();
        assert!(err.to_string().contains("no members"));
    }

    #[test]
    fn test_plain_enum_accepts_mixed_values() {
        let def = EnumBuilder::new("Mixed")
            .member("Num", 1)
            .member("Text", "one")
            .member("Other", MemberValue::opaque("object()"))
            .build()
            .unwrap();
        assert_eq!(def.len(), 3);
        assert_eq!(def.kind(), ValueKind::Opaque);
    }

    #[test]
    fn test_str_backed_rejects_ints() {
        let err = EnumBuilder::new("Names")
            .str_backed()
            .member("Bob", 1)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::ValueMismatch { .. }));
        assert!(err.to_string().contains("expected str, found int"));
    }

    #[test]
    fn test_auto_number_ignores_explicit_values() {
        let def = EnumBuilder::new("Colors")
            .auto_number()
            .member("Red", 99)
            .member_auto("Green")
            .build()
            .unwrap();
        assert_eq!(def.get("Red").unwrap().value(), &MemberValue::Int(1));
        assert_eq!(def.get("Green").unwrap().value(), &MemberValue::Int(2));
    }

    #[test]
    fn test_member_auto_without_policy_is_sequential() {
        let def = EnumBuilder::new("Seq")
            .member_auto("A")
            .member_auto("B")
            .build()
            .unwrap();
        assert_eq!(def.get("A").unwrap().value(), &MemberValue::Int(1));
        assert_eq!(def.get("B").unwrap().value(), &MemberValue::Int(2));
    }

    #[test]
    fn test_default_policy_creates_aliases() {
        let def = EnumBuilder::new("People")
            .member("Bob", 1)
            .member("bob", 1)
            .build()
            .unwrap();
        let alias = def.get("bob").unwrap();
        assert_eq!(alias.alias_of(), Some("Bob"));
    }

    #[test]
    fn test_duplicate_free_message_names_both_members() {
        let err = EnumBuilder::new("Unique")
            .duplicate_free()
            .member("ORIGINAL", 1)
            .member("ALIAS", 1)
            .build()
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'ALIAS' --> 'ORIGINAL'"));
        assert!(msg.contains("Unique"));
    }

    #[test]
    fn test_distinct_policy_keeps_both_members() {
        let def = EnumBuilder::new("Twins")
            .alias_policy(AliasPolicy::Distinct)
            .member("First", 1)
            .member("Second", 1)
            .build()
            .unwrap();
        assert_eq!(def.len(), 2);
        assert!(!def.get("Second").unwrap().is_alias());
        // value lookup finds the earlier declaration
        assert_eq!(def.by_value(1).map(|m| m.name()), Some("First"));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = EnumBuilder::new("People")
            .member("Bob", 1)
            .member("Bob", 2)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateName { .. }));
    }

    #[test]
    fn test_flag_requires_integer_values() {
        let err = EnumBuilder::new("Perm")
            .flag()
            .member("Read", "r")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("expected int"));
    }

    #[test]
    fn test_alt_values_checked_against_kind() {
        let err = EnumBuilder::new("Status")
            .int_backed()
            .member_with_alts("Ok", 200, vec![MemberValue::from("accepted")])
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::ValueMismatch { .. }));
    }

    #[test]
    fn test_alt_value_collision_follows_policy() {
        let err = EnumBuilder::new("Status")
            .duplicate_free()
            .member_with_alts("Ok", 200, [201])
            .member("Created", 201)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateValue { .. }));
    }

    #[test]
    fn test_doc_is_attached() {
        let def = EnumBuilder::new("People")
            .doc("An enumeration of people.")
            .member("Bob", 1)
            .build()
            .unwrap();
        assert_eq!(def.doc(), Some("An enumeration of people."));
    }
}
