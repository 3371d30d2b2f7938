//! Configuration options for extraction and rendering.
//!
//! This module provides types to customize both halves of the crate:
//!
//! - [`ExtractOptions`]: Controls how class source is screened before
//!   docstrings are extracted
//! - [`RenderOptions`]: Controls the rendered documentation output
//! - [`MemberOrder`]: Choice of member ordering in rendered output
//!
//! ## Examples
//!
//! ```rust
//! use enumdoc::{extract_with_options, ExtractOptions};
//!
//! let source = r#"
//! class Season(BaseSeason):
//!     SPRING = 1  # doc: March to May
//! "#;
//!
//! // `BaseSeason` is not a recognized enum base, so teach the screen about it
//! let options = ExtractOptions::new().with_enum_base("BaseSeason");
//! let table = extract_with_options(source, options).unwrap();
//! assert_eq!(table.doc("SPRING"), Some("March to May"));
//! ```

/// Base class names recognized as enumerations by default.
///
/// Matching is by the last dotted segment, so `enum.Enum` and `aenum.Enum`
/// both count as `Enum`.
pub const DEFAULT_ENUM_BASES: &[&str] = &[
    "Enum",
    "IntEnum",
    "StrEnum",
    "Flag",
    "IntFlag",
    "AutoNumberEnum",
    "OrderedEnum",
    "DuplicateFreeEnum",
    "IterableFlag",
    "IterableIntFlag",
    "DocumentedEnum",
];

/// Configuration for the source screen applied before extraction.
///
/// By default, extraction refuses source whose class does not inherit from a
/// recognized enumeration base. Additional base names can be registered, or
/// the check disabled entirely.
///
/// # Examples
///
/// ```rust
/// use enumdoc::ExtractOptions;
///
/// // Default screening
/// let options = ExtractOptions::new();
/// assert!(options.require_enum_base);
///
/// // Accept project-specific bases
/// let options = ExtractOptions::new()
///     .with_enum_base("ChoiceEnum")
///     .with_enum_base("presets.PresetEnum");
///
/// // Accept any class at all
/// let options = ExtractOptions::new().allow_any_class();
/// ```
#[derive(Clone, Debug)]
pub struct ExtractOptions {
    /// Whether the scanned class must inherit from a recognized base.
    pub require_enum_base: bool,
    /// Recognized base class names, matched by their last dotted segment.
    pub enum_bases: Vec<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            require_enum_base: true,
            enum_bases: DEFAULT_ENUM_BASES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ExtractOptions {
    /// Creates default options: enum base required, standard base names.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an additional recognized base class name.
    ///
    /// Dotted names are matched by their last segment.
    #[must_use]
    pub fn with_enum_base(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        let name = name.rsplit('.').next().unwrap_or(&name).to_string();
        self.enum_bases.push(name);
        self
    }

    /// Disables the enum base screen; any class is accepted.
    #[must_use]
    pub fn allow_any_class(mut self) -> Self {
        self.require_enum_base = false;
        self
    }

    /// Returns `true` if the given base expression names a recognized
    /// enumeration base.
    #[must_use]
    pub fn recognizes(&self, base: &str) -> bool {
        let tail = base.rsplit('.').next().unwrap_or(base).trim();
        self.enum_bases.iter().any(|b| b == tail)
    }
}

/// Ordering of members in rendered documentation.
///
/// # Examples
///
/// ```rust
/// use enumdoc::MemberOrder;
///
/// assert_eq!(MemberOrder::default(), MemberOrder::BySource);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MemberOrder {
    /// Declaration order.
    #[default]
    BySource,
    /// Alphabetical by member name.
    Alphabetical,
}

/// Configuration options for rendered documentation.
///
/// # Examples
///
/// ```rust
/// use enumdoc::{MemberOrder, RenderOptions};
///
/// // Alphabetical members without value annotations
/// let options = RenderOptions::new()
///     .with_member_order(MemberOrder::Alphabetical)
///     .hide_values();
/// assert!(!options.show_values);
/// ```
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Member ordering in the rendered listing.
    pub member_order: MemberOrder,
    /// Whether members carry a `:value:` annotation.
    pub show_values: bool,
    /// Number of spaces per directive nesting level.
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            member_order: MemberOrder::default(),
            show_values: true,
            indent: 3,
        }
    }
}

impl RenderOptions {
    /// Creates default options (source order, values shown, 3-space indent).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumdoc::RenderOptions;
    ///
    /// let options = RenderOptions::new();
    /// assert_eq!(options.indent, 3);
    /// assert!(options.show_values);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the member ordering.
    #[must_use]
    pub fn with_member_order(mut self, order: MemberOrder) -> Self {
        self.member_order = order;
        self
    }

    /// Omits `:value:` annotations from rendered members.
    #[must_use]
    pub fn hide_values(mut self) -> Self {
        self.show_values = false;
        self
    }

    /// Sets the indentation size (number of spaces per directive level).
    ///
    /// Default is 3, the conventional reStructuredText directive indent.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
