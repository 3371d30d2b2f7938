//! # enumdoc
//!
//! Enumeration modelling with docstring extraction from class source text.
//!
//! ## Why source-level docstrings?
//!
//! Enumeration members in Python-style class bodies cannot carry real
//! docstrings, so three comment conventions fill the gap: trailing `# doc:`
//! comments, Sphinx `#:` blocks, and bare string literals following the
//! member. This library scans raw source text for all three, binds the
//! results onto live enumeration definitions, and renders the whole thing
//! as reStructuredText directives, without importing or executing anything.
//!
//! ## Key Features
//!
//! - **Source-Level Extraction**: docstrings come straight from class source
//!   text; generated or vendored code documents itself without being run
//! - **Three Docstring Forms**: trailing `# doc:` comments, `#:` comment
//!   blocks and following string literals, resolved by a fixed priority with
//!   warnings when forms compete
//! - **Composable Construction**: builder-driven enumerations with int or
//!   str backing, auto-numbering, alias policies and alternate lookup values
//! - **Flag Decomposition**: composite flag values break into their member
//!   parts, largest first
//! - **Serde Compatible**: extracted tables serialize to any serde format,
//!   so a build step can scan once and ship the result
//! - **No Unsafe Code**: written entirely in safe Rust with zero unsafe blocks
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! enumdoc = "0.1"
//! ```
//!
//! ### Documenting an Enumeration
//!
//! ```rust
//! use enumdoc::{autodoc, EnumBuilder};
//!
//! let mut season = EnumBuilder::new("Season")
//!     .int_backed()
//!     .member("SPRING", 1)
//!     .member("SUMMER", 2)
//!     .build()
//!     .unwrap();
//!
//! let docs = autodoc(&mut season, r#"
//! class Season(Enum):
//!     """The four seasons."""
//!
//!     SPRING = 1  # doc: March to May
//!     SUMMER = 2  # doc: June to August
//! "#).unwrap();
//!
//! assert!(docs.starts_with(".. enum:: Season(value)"));
//! assert!(docs.contains("March to May"));
//! assert_eq!(season.get("SUMMER").unwrap().doc(), Some("June to August"));
//! ```
//!
//! ### Declaring Enumerations with enum_def!
//!
//! ```rust
//! use enumdoc::enum_def;
//!
//! let perm = enum_def!(Permissions {
//!     READ = 4,
//!     WRITE = 2,
//!     EXECUTE = 1,
//! })
//! .int_backed()
//! .flag()
//! .build()
//! .unwrap();
//!
//! let parts = perm.decompose(6).unwrap();
//! assert_eq!(parts.to_string(), "READ|WRITE");
//! ```
//!
//! ### Extraction Without a Live Enumeration
//!
//! ```rust
//! use enumdoc::extract;
//!
//! let table = extract(r#"
//! class Status(IntEnum):
//!     RUNNING = 1  # doc: The system is running.
//!     STOPPED = 2  # doc: The system has stopped.
//! "#).unwrap();
//!
//! let json = serde_json::to_string_pretty(&table).unwrap();
//! assert!(json.contains("The system is running."));
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Scanning**: single pass over the source, O(n) in its length
//! - **Lookup**: member access by name is a hash lookup; declaration order
//!   is preserved throughout
//! - **Rendering**: O(m) in the number of members, one allocation per
//!   output document
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - All slicing of scanned source is bounds-checked
//! - Proper error propagation with `Result` types
//! - No panics in the public API (except for logic errors that indicate bugs)
//!
//! ## Grammar Reference
//!
//! For the complete docstring grammar recognized by the extraction engine,
//! see the [`spec`] module documentation.
//!
//! ## Examples
//!
//! See the `demos/` directory for focused, runnable examples:
//!
//! - **`document.rs`** - Extracting and binding docstrings end to end
//! - **`flags.rs`** - Flag enumerations and value decomposition
//! - **`codegen_table.rs`** - Scanning a whole module and emitting JSON for
//!   a build step
//!
//! Run any example with: `cargo run --example <name>`

pub mod builder;
pub mod error;
pub mod extract;
pub mod flags;
pub mod macros;
pub mod members;
pub mod model;
pub mod options;
pub mod render;
pub mod spec;
pub mod value;

pub use builder::{AliasPolicy, EnumBuilder};
pub use error::{Error, Result};
pub use extract::{
    document_enum, document_enum_with_options, document_member, document_member_with_options,
    extract, extract_module, extract_module_file, extract_module_with_options,
    extract_with_options, is_interactive, set_interactive, DocTable, MethodDoc,
    MultipleDocstrings,
};
pub use flags::FlagParts;
pub use members::MemberMap;
pub use model::{EnumDef, EnumMember};
pub use options::{ExtractOptions, MemberOrder, RenderOptions, DEFAULT_ENUM_BASES};
pub use render::{autodoc, autodoc_with_options, render, render_with_options, Renderer};
pub use value::{MemberValue, ValueKind};
