//! Error types for enum construction and docstring extraction.
//!
//! This module provides comprehensive error reporting with contextual information
//! to help diagnose problems in enum declarations and in the class source handed
//! to the extraction engine.
//!
//! ## Error Categories
//!
//! - **Syntax Errors**: Malformed class source with line/column information
//! - **Subject Errors**: Source that does not define an `Enum` class at all
//! - **Construction Errors**: Duplicate names, forbidden aliases, mismatched
//!   value kinds, or empty enumerations
//! - **I/O Errors**: File reading failures when extracting from disk
//!
//! ## Error Context
//!
//! All scanning errors include:
//! - Line and column numbers
//! - Context showing the problematic source line
//! - Helpful suggestions for common mistakes
//!
//! ## Examples
//!
//! ```rust
//! use enumdoc::{extract, DocTable, Error};
//!
//! let result: Result<DocTable, Error> = extract("x = 42");
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     eprintln!("Extraction error: {}", err);
//!     // The message names what was found instead of an enum class
//! }
//! ```

use crate::value::ValueKind;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur during enum construction or
/// docstring extraction.
///
/// Each error variant includes contextual information to aid debugging.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while reading source from disk
    #[error("IO error: {0}")]
    Io(String),

    /// Syntax error in the scanned class source
    #[error("Syntax error at line {line}, column {col}:\n{context}\n{msg}{suggestion}")]
    Syntax {
        line: usize,
        col: usize,
        msg: String,
        context: String,
        suggestion: String,
    },

    /// The extraction subject is not an enumeration class
    #[error("expected an 'Enum' class, found {found}")]
    NotAnEnum { found: String },

    /// The scanned class does not match the enum being documented
    #[error("source defines class '{found}', expected '{expected}'")]
    ClassMismatch { expected: String, found: String },

    /// Lookup of a member name that does not exist
    #[error("no member named '{member}' in '{enum_name}'")]
    UnknownMember { member: String, enum_name: String },

    /// Two members declared with the same name
    #[error("duplicate member name '{name}' in '{enum_name}'")]
    DuplicateName { name: String, enum_name: String },

    /// A member value collides with an earlier member under a no-alias policy
    #[error("aliases are not allowed in '{enum_name}': '{alias}' --> '{canonical}'")]
    DuplicateValue {
        alias: String,
        canonical: String,
        enum_name: String,
    },

    /// A member value does not match the declared backing kind
    #[error("mismatched value for member '{member}' of '{enum_name}': expected {expected}, found {found}")]
    ValueMismatch {
        member: String,
        enum_name: String,
        expected: ValueKind,
        found: ValueKind,
    },

    /// Flag decomposition requested on a non-flag enumeration
    #[error("'{enum_name}' is not a flag enumeration")]
    NotAFlag { enum_name: String },

    /// An enumeration was built with no members
    #[error("'{enum_name}' has no members")]
    EmptyEnum { enum_name: String },

    /// Generic message
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a syntax error with line and column information.
    ///
    /// Use [`Error::syntax_with_context`] for more detailed error messages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumdoc::Error;
    ///
    /// let err = Error::syntax(10, 5, "unterminated string literal");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn syntax(line: usize, col: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
            context: String::new(),
            suggestion: String::new(),
        }
    }

    /// Creates a syntax error with full context and helpful suggestion.
    ///
    /// This provides richer error messages than [`Error::syntax`] by including
    /// the problematic source line and an optional suggestion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumdoc::Error;
    ///
    /// let err = Error::syntax_with_context(
    ///     3,
    ///     1,
    ///     "missing colon after class header",
    ///     "class People(Enum)",
    ///     Some("Did you mean 'class People(Enum):'?"),
    /// );
    /// assert!(err.to_string().contains("Help:"));
    /// ```
    pub fn syntax_with_context(
        line: usize,
        col: usize,
        msg: &str,
        context: &str,
        suggestion: Option<&str>,
    ) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
            context: context.to_string(),
            suggestion: suggestion
                .map(|s| format!("\nHelp: {}", s))
                .unwrap_or_default(),
        }
    }

    /// Creates an error for extraction subjects that are not enum classes.
    ///
    /// The `found` description names what the source actually contained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumdoc::Error;
    ///
    /// let err = Error::not_an_enum("an integer literal");
    /// assert!(err.to_string().contains("'Enum'"));
    /// ```
    pub fn not_an_enum(found: impl Into<String>) -> Self {
        Error::NotAnEnum {
            found: found.into(),
        }
    }

    /// Creates an error for a scanned class whose name does not match the enum
    /// being documented.
    pub fn class_mismatch(expected: &str, found: &str) -> Self {
        Error::ClassMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an error for a member lookup that found nothing.
    pub fn unknown_member(member: &str, enum_name: &str) -> Self {
        Error::UnknownMember {
            member: member.to_string(),
            enum_name: enum_name.to_string(),
        }
    }

    /// Creates an error for a repeated member name within one enumeration.
    pub fn duplicate_name(name: &str, enum_name: &str) -> Self {
        Error::DuplicateName {
            name: name.to_string(),
            enum_name: enum_name.to_string(),
        }
    }

    /// Creates an error for a value collision under a duplicate-free policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumdoc::Error;
    ///
    /// let err = Error::duplicate_value("ALIAS", "ORIGINAL", "Policy");
    /// assert!(err.to_string().contains("'ALIAS' --> 'ORIGINAL'"));
    /// ```
    pub fn duplicate_value(alias: &str, canonical: &str, enum_name: &str) -> Self {
        Error::DuplicateValue {
            alias: alias.to_string(),
            canonical: canonical.to_string(),
            enum_name: enum_name.to_string(),
        }
    }

    /// Creates an error for a member value of the wrong kind.
    pub fn value_mismatch(
        member: &str,
        enum_name: &str,
        expected: ValueKind,
        found: ValueKind,
    ) -> Self {
        Error::ValueMismatch {
            member: member.to_string(),
            enum_name: enum_name.to_string(),
            expected,
            found,
        }
    }

    /// Creates an error for flag operations on non-flag enumerations.
    pub fn not_a_flag(enum_name: &str) -> Self {
        Error::NotAFlag {
            enum_name: enum_name.to_string(),
        }
    }

    /// Creates an error for an enumeration declared with no members.
    pub fn empty_enum(enum_name: &str) -> Self {
        Error::EmptyEnum {
            enum_name: enum_name.to_string(),
        }
    }

    /// Creates an error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumdoc::Error;
    ///
    /// let err = Error::message("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn message<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }

    /// Creates an I/O error for file reading failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
