//! Docstring Grammar Reference
//!
//! This module documents the docstring conventions recognized by the
//! extraction engine, as implemented by this library.
//!
//! # Overview
//!
//! Enumeration members in Python-style class bodies cannot carry real
//! docstrings: a string literal after an assignment is just an expression
//! statement, invisible to `__doc__`. Three comment conventions grew out of
//! that gap, and this library recognizes all of them from plain source
//! text, without importing or executing anything.
//!
//! ## Design Philosophy
//!
//! - **Source of truth**: docstrings live next to the member declaration,
//!   where they are maintained
//! - **No execution**: scanning raw text means generated or vendored
//!   source documents itself without being imported
//! - **Determinism**: the same source always produces the same table, in
//!   declaration order
//!
//! # Docstring Forms
//!
//! ## Trailing `doc:` Comment
//!
//! ```text
//! class Season(Enum):
//!     SPRING = 1  # doc: March to May
//!     SUMMER = 2  # noqa  # doc: June to August
//! ```
//!
//! **Rules**:
//! - The first `doc:` marker in the member's inline comments starts the text
//! - Text runs to the next `#` or the end of the line, trimmed on both ends
//! - A marker with nothing after it is passed over; the search continues,
//!   so `# doc: # doc: real` yields `real`
//! - Other comment segments (`# noqa`, `# isort: ignore`) are ignored
//!
//! ## Sphinx `#:` Comment Block
//!
//! ```text
//! class Season(Enum):
//!     #: September
//!     #: to November
//!     AUTUMN = 3
//! ```
//!
//! **Rules**:
//! - One or more consecutive comment-only lines starting with `#:`,
//!   sitting directly above the member
//! - A blank line, a plain comment or any code line breaks the chain
//! - Each line's text is trimmed; lines join top to bottom with `\n`
//!
//! ## Following String Literal
//!
//! ```text
//! class Season(Enum):
//!     WINTER = 4
//!     """
//!     December to February.
//!
//!     The coldest season.
//!     """
//! ```
//!
//! **Rules**:
//! - The next logical statement at the same indentation must be nothing
//!   but a string literal
//! - Both quoting styles work, single or triple; adjacent literals
//!   concatenate
//! - `r`, `b`, `u` and `f` prefixes are accepted; raw literals skip escape
//!   decoding
//! - The text is cleaned before use (see below)
//!
//! # Priority
//!
//! When one member carries more than one form, the highest-priority form
//! wins:
//!
//! | Priority | Form |
//! |----------|------|
//! | 1 | `#:` comment block |
//! | 2 | following string literal |
//! | 3 | trailing `# doc:` comment |
//!
//! The losing candidates are not discarded silently: the table records one
//! `MultipleDocstrings` warning per affected name, candidates listed in
//! priority order, and a warning event is logged.
//!
//! # Docstring Cleaning
//!
//! String-literal docstrings (member, class and method) are cleaned the
//! way documentation tools clean them:
//!
//! - Escape sequences decode first (`\n`, `\t`, `\uXXXX`, ...); unknown
//!   escapes keep their backslash
//! - The first line loses its leading whitespace
//! - Later lines lose their common leading margin
//! - Blank lines are dropped from both ends
//!
//! ```text
//! WINTER = 4
//! """
//!     December to February.
//! """
//! ```
//!
//! cleans to exactly `December to February.`
//!
//! # Members and Targets
//!
//! - Plain (`Bob = 1`), chained (`Bob = bob = 1`) and annotated
//!   (`Bob: int = 1`) assignments all declare documented targets
//! - A chained assignment gives every target the same docstring
//! - Names starting with `_` are skipped entirely
//! - Logical statements span physical lines through open brackets, open
//!   strings and trailing backslashes
//!
//! # Class Requirements
//!
//! - The source must open with a `class` header (decorators above it are
//!   allowed); anything else is rejected as not an enumeration
//! - At least one base must be a recognized enumeration base; dotted bases
//!   match by their last segment (`enum.Enum` matches `Enum`)
//! - The recognized set is configurable through `ExtractOptions`, and the
//!   check can be disabled outright
//! - A first-statement string literal becomes the class docstring
//! - `def` statements contribute to the method listing, with their own
//!   docstrings; underscore-prefixed methods are skipped
//!
//! # Module Scanning
//!
//! Whole source files can be scanned in one pass. Every top-level class
//! with a recognized enumeration base produces a table; other classes,
//! nested classes and non-class statements are skipped silently.
//!
//! # Edge Cases
//!
//! ## Indentation
//!
//! Common leading whitespace is stripped before scanning, so source
//! captured from inside another scope works unchanged:
//!
//! ```text
//!     class Inner(Enum):
//!         A = 1  # doc: Still found.
//! ```
//!
//! ## Comments Inside Statements
//!
//! A `#` inside a string literal is text, not a comment. Comments on
//! continuation lines belong to the statement they continue:
//!
//! ```text
//! VALUE = (  # doc: Spans lines.
//!     1,
//! )
//! ```
//!
//! ## Detached Blocks
//!
//! A `#:` block separated from the member by a blank line attaches to
//! nothing:
//!
//! ```text
//! #: This text is lost.
//!
//! Dennis = 4
//! ```
//!
//! # Limitations
//!
//! - **Tuple targets**: `A, B = 1, 2` declares no documented targets
//! - **Conditional members**: assignments nested in `if` suites are
//!   skipped
//! - **Computed names**: only literal identifier targets are recognized
//! - **String formatting**: `f`-string docstrings keep their placeholders
//!   verbatim; nothing is interpolated

// This module contains only documentation; no implementation code
