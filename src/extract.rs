//! Extraction of member docstrings from enumeration class source text.
//!
//! Enumeration members in Python-style class bodies cannot carry docstrings
//! the way functions do, so three comment conventions grew up around them:
//!
//! ```text
//! class Season(Enum):
//!     """The four seasons."""
//!
//!     #: March to May            <- a Sphinx comment block above the member
//!     SPRING = 1
//!     SUMMER = 2  # doc: June to August
//!     AUTUMN = 3
//!     """September to November"""
//! ```
//!
//! [`extract`] scans such source text and produces a [`DocTable`] mapping
//! member names to their docstrings, without needing a live enumeration.
//! When a member carries more than one form, the highest-priority one wins:
//! a `#:` block beats a following string literal, which beats a trailing
//! `# doc:` comment. The losing forms are kept on the table as
//! [`MultipleDocstrings`] warnings.
//!
//! [`document_enum`] goes one step further and copies the extracted
//! docstrings onto an [`EnumDef`]. Binding only happens in interactive
//! sessions (see [`is_interactive`]), so batch runs skip the scanning cost
//! entirely.
//!
//! # Examples
//!
//! ```rust
//! use enumdoc::extract;
//!
//! let table = extract(r#"
//! class Season(Enum):
//!     """The four seasons."""
//!
//!     SPRING = 1  # doc: March to May
//!     SUMMER = 2  # doc: June to August
//! "#).unwrap();
//!
//! assert_eq!(table.name(), "Season");
//! assert_eq!(table.class_doc(), Some("The four seasons."));
//! assert_eq!(table.doc("SPRING"), Some("March to May"));
//! ```

use std::fmt;
use std::fs;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::EnumDef;
use crate::options::ExtractOptions;

static INTERACTIVE: OnceLock<AtomicBool> = OnceLock::new();

fn interactive_flag() -> &'static AtomicBool {
    INTERACTIVE.get_or_init(|| AtomicBool::new(std::io::stdin().is_terminal()))
}

/// Returns `true` if docstring binding is enabled for this process.
///
/// The flag starts out mirroring whether standard input is attached to a
/// terminal, the usual sign of an interactive session, and can be forced
/// either way with [`set_interactive`]. The pure extraction functions
/// ([`extract`], [`extract_module`]) ignore it; only the binding functions
/// ([`document_enum`], [`document_member`]) consult it.
#[must_use]
pub fn is_interactive() -> bool {
    interactive_flag().load(Ordering::Relaxed)
}

/// Overrides the interactive flag for the current process.
///
/// # Examples
///
/// ```rust
/// use enumdoc::{is_interactive, set_interactive};
///
/// set_interactive(true);
/// assert!(is_interactive());
/// ```
pub fn set_interactive(interactive: bool) {
    interactive_flag().store(interactive, Ordering::Relaxed);
}

/// A method discovered in a scanned class body.
///
/// Methods with names starting with an underscore are not recorded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDoc {
    /// The method name.
    pub name: String,
    /// The parameter list as written, parentheses included.
    pub signature: String,
    /// The method docstring, cleaned, if it has one.
    pub doc: Option<String>,
}

/// Warning recorded when a member carries docstrings in more than one form.
///
/// The candidates are ordered by priority: a `#:` comment block first, then
/// a following string literal, then a trailing `# doc:` comment. The first
/// candidate is the one that was bound.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipleDocstrings {
    /// The member (or alias) name the docstrings target.
    pub member: String,
    /// Every docstring found, highest priority first.
    pub candidates: Vec<String>,
}

impl fmt::Display for MultipleDocstrings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "multiple docstrings found for '{}' ({} candidates)",
            self.member,
            self.candidates.len()
        )
    }
}

/// The docstrings extracted from one enumeration class.
///
/// A table is an inert description of the source text. It records the class
/// name and bases, the class docstring, one docstring per documented member
/// in source order, the public methods, and any [`MultipleDocstrings`]
/// warnings raised along the way. Tables serialize with serde, so a build
/// step can scan source files once and ship the result as JSON.
///
/// # Examples
///
/// ```rust
/// use enumdoc::extract;
///
/// let table = extract(r#"
/// class Direction(IntEnum):
///     NORTH = 1  # doc: Up on the map.
///     SOUTH = 2  # doc: Down on the map.
/// "#).unwrap();
///
/// let json = serde_json::to_string(&table).unwrap();
/// assert!(json.contains("Up on the map."));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DocTable {
    name: String,
    bases: Vec<String>,
    class_doc: Option<String>,
    member_docs: IndexMap<String, String>,
    methods: Vec<MethodDoc>,
    warnings: Vec<MultipleDocstrings>,
}

impl DocTable {
    /// Returns the name of the scanned class.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the base classes of the scanned class, as written.
    #[inline]
    #[must_use]
    pub fn bases(&self) -> &[String] {
        &self.bases
    }

    /// Returns the class docstring, cleaned, if one was present.
    #[inline]
    #[must_use]
    pub fn class_doc(&self) -> Option<&str> {
        self.class_doc.as_deref()
    }

    /// Returns the docstring extracted for the named member.
    #[must_use]
    pub fn doc(&self, member: &str) -> Option<&str> {
        self.member_docs.get(member).map(String::as_str)
    }

    /// Returns an iterator over `(member, docstring)` pairs in source order.
    pub fn member_docs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.member_docs
            .iter()
            .map(|(name, doc)| (name.as_str(), doc.as_str()))
    }

    /// Returns the public methods found in the class body.
    #[inline]
    #[must_use]
    pub fn methods(&self) -> &[MethodDoc] {
        &self.methods
    }

    /// Returns the warnings raised during extraction.
    #[inline]
    #[must_use]
    pub fn warnings(&self) -> &[MultipleDocstrings] {
        &self.warnings
    }

    /// Returns `true` if any member had competing docstrings.
    #[inline]
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns the number of documented members.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.member_docs.len()
    }

    /// Returns `true` if no member docstrings were found.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.member_docs.is_empty()
    }
}

/// Extracts member docstrings from enumeration class source text.
///
/// The source must contain a single class definition (decorators above it
/// are allowed). Common leading indentation is stripped first, so source
/// captured from inside another scope scans cleanly. The class must inherit
/// from a recognized enumeration base; use [`extract_with_options`] to
/// widen or disable that check.
///
/// # Errors
///
/// Returns [`Error::NotAnEnum`] when the source does not define a class
/// with a recognized enumeration base, and [`Error::Syntax`] when the
/// source has unbalanced brackets or an unterminated string.
///
/// # Examples
///
/// ```rust
/// use enumdoc::extract;
///
/// let table = extract(r#"
/// class People(Enum):
///     Bob = 1  # doc: A person called Bob
///     Alice = 2  # doc: A person called Alice
/// "#).unwrap();
///
/// assert_eq!(table.doc("Bob"), Some("A person called Bob"));
/// assert_eq!(table.len(), 2);
/// ```
#[must_use = "this returns the extracted table, errors must be handled"]
pub fn extract(source: &str) -> Result<DocTable> {
    extract_with_options(source, ExtractOptions::new())
}

/// Extracts member docstrings with explicit [`ExtractOptions`].
///
/// # Errors
///
/// Same failure modes as [`extract`].
///
/// # Examples
///
/// ```rust
/// use enumdoc::{extract_with_options, ExtractOptions};
///
/// let options = ExtractOptions::new().with_enum_base("ChoiceType");
/// let table = extract_with_options(
///     "class Fruit(ChoiceType):\n    APPLE = 1  # doc: Keeps doctors away.\n",
///     options,
/// ).unwrap();
///
/// assert_eq!(table.doc("APPLE"), Some("Keeps doctors away."));
/// ```
#[must_use = "this returns the extracted table, errors must be handled"]
pub fn extract_with_options(source: &str, options: ExtractOptions) -> Result<DocTable> {
    let scanner = Scanner::scan(source)?;
    let mut first = 0;
    while scanner
        .statements
        .get(first)
        .is_some_and(|stmt| stmt.head().starts_with('@'))
    {
        first += 1;
    }
    let Some(stmt) = scanner.statements.get(first) else {
        let found = if first == 0 {
            "an empty source"
        } else {
            "a decorator with no subject"
        };
        return Err(Error::not_an_enum(found));
    };
    if !is_class_header(stmt) {
        return Err(Error::not_an_enum(describe_statement(stmt)));
    }
    scanner.class_table(first, &options)
}

/// Extracts a [`DocTable`] for every top-level enumeration in module source.
///
/// Classes without a recognized enumeration base are skipped rather than
/// reported, as are nested classes and non-class statements, so whole
/// source files can be fed through unfiltered.
///
/// # Errors
///
/// Returns [`Error::Syntax`] when the module source cannot be scanned.
///
/// # Examples
///
/// ```rust
/// use enumdoc::extract_module;
///
/// let tables = extract_module(r#"
/// GLOBAL = 1
///
/// class Color(Enum):
///     RED = 1  # doc: The color of fire.
///
/// class Helper:
///     pass
///
/// class Size(IntEnum):
///     SMALL = 1  # doc: Fits in a pocket.
/// "#).unwrap();
///
/// let names: Vec<&str> = tables.iter().map(|t| t.name()).collect();
/// assert_eq!(names, ["Color", "Size"]);
/// ```
#[must_use = "this returns the extracted tables, errors must be handled"]
pub fn extract_module(source: &str) -> Result<Vec<DocTable>> {
    extract_module_with_options(source, ExtractOptions::new())
}

/// Extracts module tables with explicit [`ExtractOptions`].
///
/// # Errors
///
/// Same failure modes as [`extract_module`].
#[must_use = "this returns the extracted tables, errors must be handled"]
pub fn extract_module_with_options(
    source: &str,
    options: ExtractOptions,
) -> Result<Vec<DocTable>> {
    let scanner = Scanner::scan(source)?;
    let mut tables = Vec::new();
    for (index, stmt) in scanner.statements.iter().enumerate() {
        if stmt.indent != 0 || !is_class_header(stmt) {
            continue;
        }
        match scanner.class_table(index, &options) {
            Ok(table) => tables.push(table),
            Err(Error::NotAnEnum { .. }) => continue,
            Err(other) => return Err(other),
        }
    }
    Ok(tables)
}

/// Reads a source file from disk and extracts every enumeration table in it.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read, plus the failure
/// modes of [`extract_module`].
#[must_use = "this returns the extracted tables, errors must be handled"]
pub fn extract_module_file(path: impl AsRef<Path>) -> Result<Vec<DocTable>> {
    let source = fs::read_to_string(path)?;
    extract_module(&source)
}

/// Extracts docstrings from `source` and binds them onto `def`.
///
/// The scanned class name must match `def`. Member docstrings are copied
/// onto the matching entries; names in the table with no counterpart in
/// `def` are ignored. Binding an alias also updates its canonical member,
/// since looking either name up should show the same documentation. The
/// class docstring, when present, replaces any doc already set on `def`.
///
/// In non-interactive processes this is a no-op that returns an empty
/// table; see [`is_interactive`].
///
/// # Errors
///
/// Returns [`Error::ClassMismatch`] when the source defines a different
/// class than `def`, plus the failure modes of [`extract`].
///
/// # Examples
///
/// ```rust
/// use enumdoc::{document_enum, set_interactive, EnumBuilder};
///
/// set_interactive(true);
///
/// let mut season = EnumBuilder::new("Season")
///     .int_backed()
///     .member("SPRING", 1)
///     .member("SUMMER", 2)
///     .build()
///     .unwrap();
///
/// document_enum(&mut season, r#"
/// class Season(Enum):
///     """The four seasons."""
///
///     SPRING = 1  # doc: March to May
///     SUMMER = 2  # doc: June to August
/// "#).unwrap();
///
/// assert_eq!(season.doc(), Some("The four seasons."));
/// assert_eq!(season.get("SPRING").unwrap().doc(), Some("March to May"));
/// ```
#[must_use = "this returns the extracted table, errors must be handled"]
pub fn document_enum(def: &mut EnumDef, source: &str) -> Result<DocTable> {
    document_enum_with_options(def, source, ExtractOptions::new())
}

/// Binds docstrings onto `def` with explicit [`ExtractOptions`].
///
/// # Errors
///
/// Same failure modes as [`document_enum`].
#[must_use = "this returns the extracted table, errors must be handled"]
pub fn document_enum_with_options(
    def: &mut EnumDef,
    source: &str,
    options: ExtractOptions,
) -> Result<DocTable> {
    if !is_interactive() {
        tracing::debug!(enum_name = def.name(), "not interactive, skipping docstring binding");
        return Ok(DocTable::default());
    }
    let table = extract_with_options(source, options)?;
    if table.name() != def.name() {
        return Err(Error::class_mismatch(def.name(), table.name()));
    }
    if let Some(doc) = table.class_doc() {
        def.set_doc(doc);
    }
    for (name, doc) in table.member_docs() {
        bind_doc(def, name, doc);
    }
    Ok(table)
}

/// Extracts and binds the docstring of a single member of `def`.
///
/// The member must already exist on `def`; that is checked before the
/// interactive gate, so a typo fails loudly even in batch runs. Returns
/// the docstring that was bound, or `None` when the process is not
/// interactive or the source carries no docstring for this member.
///
/// # Errors
///
/// Returns [`Error::UnknownMember`] when `def` has no entry with this
/// name, [`Error::ClassMismatch`] when the source defines a different
/// class, plus the failure modes of [`extract`].
///
/// # Examples
///
/// ```rust
/// use enumdoc::{document_member, set_interactive, EnumBuilder};
///
/// set_interactive(true);
///
/// let mut people = EnumBuilder::new("People")
///     .int_backed()
///     .member("Bob", 1)
///     .build()
///     .unwrap();
///
/// let doc = document_member(&mut people, "Bob", r#"
/// class People(Enum):
///     Bob = 1  # doc: A person called Bob
/// "#).unwrap();
///
/// assert_eq!(doc.as_deref(), Some("A person called Bob"));
/// assert_eq!(people.get("Bob").unwrap().doc(), Some("A person called Bob"));
/// ```
#[must_use = "this returns the bound docstring, errors must be handled"]
pub fn document_member(def: &mut EnumDef, member: &str, source: &str) -> Result<Option<String>> {
    document_member_with_options(def, member, source, ExtractOptions::new())
}

/// Binds one member docstring with explicit [`ExtractOptions`].
///
/// # Errors
///
/// Same failure modes as [`document_member`].
#[must_use = "this returns the bound docstring, errors must be handled"]
pub fn document_member_with_options(
    def: &mut EnumDef,
    member: &str,
    source: &str,
    options: ExtractOptions,
) -> Result<Option<String>> {
    if def.get(member).is_none() {
        return Err(Error::unknown_member(member, def.name()));
    }
    if !is_interactive() {
        return Ok(None);
    }
    let table = extract_with_options(source, options)?;
    if table.name() != def.name() {
        return Err(Error::class_mismatch(def.name(), table.name()));
    }
    match table.doc(member) {
        Some(doc) => {
            let doc = doc.to_string();
            bind_doc(def, member, &doc);
            Ok(Some(doc))
        }
        None => Ok(None),
    }
}

/// Sets `doc` on the named entry and, when the name is an alias, on its
/// canonical member as well. Names absent from `def` are ignored.
fn bind_doc(def: &mut EnumDef, name: &str, doc: &str) {
    let canonical = match def.get(name) {
        Some(entry) if entry.is_alias() => Some(entry.canonical_name().to_string()),
        Some(_) => None,
        None => return,
    };
    if let Some(entry) = def.get_mut(name) {
        entry.set_doc(doc);
    }
    if let Some(canonical) = canonical {
        if let Some(member) = def.get_mut(&canonical) {
            member.set_doc(doc);
        }
    }
}

/// How one physical line participates in the scanned source.
///
/// Lines inside a logical statement count as `Code` even when blank, so a
/// `#:` block is only recognized when it sits between statements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineKind {
    Blank,
    Comment,
    Code,
}

/// One logical statement, grouped across physical lines by bracket depth,
/// open strings and backslash continuation.
#[derive(Clone, Debug)]
struct Statement<'src> {
    /// The code text of each physical line, inline comments stripped.
    code: Vec<&'src str>,
    /// The inline comments of the statement, `#` included, in order.
    comments: Vec<&'src str>,
    /// Leading whitespace width of the first physical line.
    indent: usize,
    /// 1-based number of the first physical line.
    line: usize,
}

impl<'src> Statement<'src> {
    /// The first physical line, surrounding whitespace stripped.
    fn head(&self) -> &'src str {
        self.code.first().map_or("", |line| line.trim())
    }

    /// All physical lines joined into one logical line.
    fn joined(&self) -> String {
        let mut text = String::new();
        for line in &self.code {
            let piece = line.trim();
            if piece.is_empty() {
                continue;
            }
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(piece);
        }
        text
    }
}

/// A string literal left open at the end of a physical line.
struct OpenString {
    quote: u8,
    triple: bool,
    line: usize,
    col: usize,
}

/// The pieces of one scanned physical line.
struct LineScan<'src> {
    code: &'src str,
    comment: Option<&'src str>,
    backslash: bool,
}

/// Scans dedented source into logical statements plus a per-line side
/// table used to locate `#:` comment blocks.
#[derive(Debug)]
struct Scanner<'src> {
    lines: Vec<&'src str>,
    kinds: Vec<LineKind>,
    statements: Vec<Statement<'src>>,
}

impl<'src> Scanner<'src> {
    fn scan(source: &'src str) -> Result<Self> {
        let lines = dedent(source);
        let mut kinds = vec![LineKind::Blank; lines.len()];
        let mut statements = Vec::new();

        let mut pending: Option<Statement<'src>> = None;
        let mut brackets: Vec<(char, usize, usize)> = Vec::new();
        let mut string: Option<OpenString> = None;

        for (index, &line) in lines.iter().enumerate() {
            let line_no = index + 1;
            let mut stmt = match pending.take() {
                Some(stmt) => stmt,
                None => {
                    let trimmed = line.trim_start();
                    if trimmed.is_empty() {
                        continue;
                    }
                    if trimmed.starts_with('#') {
                        kinds[index] = LineKind::Comment;
                        continue;
                    }
                    Statement {
                        code: Vec::new(),
                        comments: Vec::new(),
                        indent: line.len() - trimmed.len(),
                        line: line_no,
                    }
                }
            };
            kinds[index] = LineKind::Code;

            let scan = scan_physical_line(line, line_no, &mut brackets, &mut string)?;
            stmt.code.push(scan.code);
            if let Some(comment) = scan.comment {
                stmt.comments.push(comment);
            }

            if string.is_some() || !brackets.is_empty() || scan.backslash {
                pending = Some(stmt);
            } else {
                statements.push(stmt);
            }
        }

        if let Some(open) = &string {
            return Err(Error::syntax(open.line, open.col, "unterminated string literal"));
        }
        if let Some(&(opener, line, col)) = brackets.last() {
            return Err(Error::syntax(line, col, &format!("unclosed '{opener}'")));
        }
        if let Some(stmt) = pending {
            // trailing backslash at end of input; accept what we have
            statements.push(stmt);
        }

        Ok(Scanner {
            lines,
            kinds,
            statements,
        })
    }

    /// Collects the `#:` comment block sitting directly above a statement.
    ///
    /// The block must be adjacent: a blank line, a plain comment or any
    /// code line breaks the chain. Lines are joined top to bottom.
    fn sphinx_block(&self, stmt_line: usize) -> Option<String> {
        let mut parts: Vec<&str> = Vec::new();
        let mut index = stmt_line.checked_sub(2)?;
        loop {
            if self.kinds.get(index) != Some(&LineKind::Comment) {
                break;
            }
            let Some(rest) = self.lines[index].trim_start().strip_prefix("#:") else {
                break;
            };
            parts.push(rest.trim());
            if index == 0 {
                break;
            }
            index -= 1;
        }
        if parts.is_empty() {
            return None;
        }
        parts.reverse();
        Some(parts.join("\n"))
    }

    /// Builds the [`DocTable`] for the class whose header is statement
    /// `start`. The body ends at the first statement indented at or above
    /// the header, so this works on whole-module scans too.
    fn class_table(&self, start: usize, options: &ExtractOptions) -> Result<DocTable> {
        let header = &self.statements[start];
        let (name, bases) = parse_class_header(header)?;

        if options.require_enum_base && !bases.iter().any(|base| options.recognizes(base)) {
            let found = if bases.is_empty() {
                format!("class {name} without bases")
            } else {
                format!("class {}({})", name, bases.join(", "))
            };
            return Err(Error::not_an_enum(found));
        }

        let mut table = DocTable {
            name,
            bases,
            class_doc: None,
            member_docs: IndexMap::new(),
            methods: Vec::new(),
            warnings: Vec::new(),
        };

        let body = &self.statements[start + 1..];
        let Some(first) = body.first().filter(|stmt| stmt.indent > header.indent) else {
            return Ok(table);
        };
        let base_indent = first.indent;

        let mut index = 0;
        while index < body.len() {
            let stmt = &body[index];
            if stmt.indent <= header.indent {
                break;
            }
            if stmt.indent != base_indent {
                // inside a nested suite
                index += 1;
                continue;
            }

            if index == 0 {
                if let Some(text) = bare_string_literal(stmt) {
                    table.class_doc = Some(text);
                    index += 1;
                    continue;
                }
            }

            let head = stmt.head();
            if head.starts_with('@') || starts_with_keyword(head, "class") {
                index += 1;
                continue;
            }

            if let Some((method, signature)) = parse_def_header(stmt) {
                if !method.starts_with('_') {
                    let doc = body
                        .get(index + 1)
                        .filter(|next| next.indent > stmt.indent)
                        .and_then(bare_string_literal);
                    table.methods.push(MethodDoc {
                        name: method,
                        signature,
                        doc,
                    });
                }
                index += 1;
                continue;
            }

            if let Some(targets) = parse_assignment_targets(stmt) {
                let sphinx = self.sphinx_block(stmt.line);
                let following = body
                    .get(index + 1)
                    .filter(|next| next.indent == base_indent)
                    .and_then(bare_string_literal);
                let trailing = stmt.comments.iter().find_map(|c| doc_marker_text(c));

                let mut candidates: Vec<String> = Vec::new();
                candidates.extend(sphinx);
                candidates.extend(following);
                candidates.extend(trailing);

                if let Some(doc) = candidates.first().cloned() {
                    for target in &targets {
                        if candidates.len() > 1 {
                            let warning = MultipleDocstrings {
                                member: target.clone(),
                                candidates: candidates.clone(),
                            };
                            tracing::warn!(
                                member = %warning.member,
                                candidates = warning.candidates.len(),
                                "multiple docstrings for member, binding the highest-priority form"
                            );
                            table.warnings.push(warning);
                        }
                        table.member_docs.insert(target.clone(), doc.clone());
                    }
                }
            }
            index += 1;
        }
        Ok(table)
    }
}

/// Splits one physical line into code, comment and continuation marker,
/// updating the bracket stack and open-string state as it goes.
fn scan_physical_line<'src>(
    line: &'src str,
    line_no: usize,
    brackets: &mut Vec<(char, usize, usize)>,
    string: &mut Option<OpenString>,
) -> Result<LineScan<'src>> {
    let bytes = line.as_bytes();
    let mut i = 0;
    let mut comment_start: Option<usize> = None;
    let mut backslash = false;

    while i < bytes.len() {
        let open_state = string.as_ref().map(|open| (open.quote, open.triple));
        if let Some((quote, triple)) = open_state {
            if bytes[i] == b'\\' {
                // escape, possibly of the line break itself
                i += 2;
            } else if bytes[i] == quote {
                if !triple {
                    *string = None;
                    i += 1;
                } else if bytes.get(i + 1) == Some(&quote) && bytes.get(i + 2) == Some(&quote) {
                    *string = None;
                    i += 3;
                } else {
                    i += 1;
                }
            } else {
                i += 1;
            }
            continue;
        }

        match bytes[i] {
            b'#' => {
                comment_start = Some(i);
                break;
            }
            quote @ (b'\'' | b'"') => {
                let triple =
                    bytes.get(i + 1) == Some(&quote) && bytes.get(i + 2) == Some(&quote);
                *string = Some(OpenString {
                    quote,
                    triple,
                    line: line_no,
                    col: i + 1,
                });
                i += if triple { 3 } else { 1 };
            }
            opener @ (b'(' | b'[' | b'{') => {
                brackets.push((opener as char, line_no, i + 1));
                i += 1;
            }
            closer @ (b')' | b']' | b'}') => {
                let closer = closer as char;
                match brackets.pop() {
                    Some((opener, ..)) if closing(opener) == closer => {}
                    Some((opener, open_line, open_col)) => {
                        return Err(Error::syntax_with_context(
                            line_no,
                            i + 1,
                            &format!("mismatched '{closer}'"),
                            line.trim_end(),
                            Some(&format!(
                                "the nearest open bracket is '{opener}' at line {open_line}, column {open_col}"
                            )),
                        ));
                    }
                    None => {
                        return Err(Error::syntax(line_no, i + 1, &format!("unmatched '{closer}'")));
                    }
                }
                i += 1;
            }
            b'\\' if i == bytes.len() - 1 => {
                backslash = true;
                i += 1;
            }
            _ => i += 1,
        }
    }

    // a backslash that consumed the line break keeps the string open
    let escaped_break = i > bytes.len();
    if let Some(open) = string.as_ref() {
        if !open.triple && !escaped_break {
            return Err(Error::syntax(open.line, open.col, "unterminated string literal"));
        }
    }

    let code_end = comment_start.unwrap_or(bytes.len());
    let code = if backslash {
        &line[..code_end - 1]
    } else {
        &line[..code_end]
    };
    Ok(LineScan {
        code,
        comment: comment_start.map(|pos| &line[pos..]),
        backslash,
    })
}

const fn closing(opener: char) -> char {
    match opener {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

/// Strips the common leading whitespace of every non-blank line.
/// Whitespace-only lines come back empty.
fn dedent(source: &str) -> Vec<&str> {
    let lines: Vec<&str> = source.lines().collect();
    let mut margin: Option<&str> = None;
    for &line in &lines {
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            continue;
        }
        let indent = &line[..line.len() - trimmed.len()];
        margin = Some(match margin {
            None => indent,
            Some(common) => shared_prefix(common, indent),
        });
    }
    let width = margin.map_or(0, str::len);
    lines
        .into_iter()
        .map(|line| {
            if line.trim_start().is_empty() {
                ""
            } else {
                &line[width..]
            }
        })
        .collect()
}

fn shared_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let mut len = 0;
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            break;
        }
        len += ca.len_utf8();
    }
    &a[..len]
}

fn is_class_header(stmt: &Statement<'_>) -> bool {
    starts_with_keyword(stmt.head(), "class")
}

fn describe_statement(stmt: &Statement<'_>) -> String {
    let head = stmt.head();
    if starts_with_keyword(head, "def")
        || (starts_with_keyword(head, "async") && head.contains("def"))
    {
        return "a function definition".to_string();
    }
    let snippet: String = head.chars().take(40).collect();
    format!("'{snippet}'")
}

fn starts_with_keyword(text: &str, keyword: &str) -> bool {
    strip_keyword(text, keyword).is_some()
}

/// Strips a leading keyword followed by whitespace, so `classify = 1` is
/// not mistaken for a `class` statement.
fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(keyword)?;
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim_start())
    } else {
        None
    }
}

/// Takes one identifier off the front of `text`.
fn take_identifier(text: &str) -> Option<(&str, &str)> {
    let first = text.chars().next()?;
    if !(first.is_alphabetic() || first == '_') {
        return None;
    }
    let end = text
        .char_indices()
        .find(|(_, c)| !(c.is_alphanumeric() || *c == '_'))
        .map_or(text.len(), |(i, _)| i);
    Some((&text[..end], &text[end..]))
}

/// Parses `class Name(Base, ...):` into the name and base list.
fn parse_class_header(stmt: &Statement<'_>) -> Result<(String, Vec<String>)> {
    let text = stmt.joined();
    let rest = strip_keyword(&text, "class")
        .ok_or_else(|| Error::syntax(stmt.line, 1, "expected a class header"))?;
    let (name, rest) = take_identifier(rest)
        .ok_or_else(|| Error::syntax(stmt.line, 1, "expected a class name"))?;
    let mut rest = rest.trim_start();
    let mut bases = Vec::new();
    if let Some(inner) = rest.strip_prefix('(') {
        let (base_text, after) = split_balanced(inner).ok_or_else(|| {
            Error::syntax_with_context(
                stmt.line,
                1,
                "unclosed '(' in class header",
                &text,
                None,
            )
        })?;
        bases = split_bases(base_text);
        rest = after.trim_start();
    }
    if !rest.starts_with(':') {
        return Err(Error::syntax_with_context(
            stmt.line,
            1,
            "missing colon after class header",
            &text,
            Some(&format!("did you mean 'class {name}(...):'?")),
        ));
    }
    Ok((name.to_string(), bases))
}

/// Splits text just after an opening bracket into the balanced interior
/// and the remainder after the matching closer.
fn split_balanced(text: &str) -> Option<(&str, &str)> {
    let bytes = text.as_bytes();
    let mut depth = 1u32;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((&text[..i], &text[i + 1..]));
                }
            }
            quote @ (b'\'' | b'"') => {
                i += 1;
                while i < bytes.len() && bytes[i] != quote {
                    if bytes[i] == b'\\' {
                        i += 1;
                    }
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Splits a base list on top-level commas, trimming each entry.
fn split_bases(inner: &str) -> Vec<String> {
    let bytes = inner.as_bytes();
    let mut depth = 0i32;
    let mut start = 0;
    let mut bases = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth -= 1,
            quote @ (b'\'' | b'"') => {
                i += 1;
                while i < bytes.len() && bytes[i] != quote {
                    if bytes[i] == b'\\' {
                        i += 1;
                    }
                    i += 1;
                }
            }
            b',' if depth == 0 => {
                let base = inner[start..i].trim();
                if !base.is_empty() {
                    bases.push(base.to_string());
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    let last = inner[start..].trim();
    if !last.is_empty() {
        bases.push(last.to_string());
    }
    bases
}

/// Parses `def name(params):` (or `async def`) into the name and the
/// parameter list, parentheses included.
fn parse_def_header(stmt: &Statement<'_>) -> Option<(String, String)> {
    let text = stmt.joined();
    let mut rest = text.as_str();
    if let Some(after) = strip_keyword(rest, "async") {
        rest = after;
    }
    let rest = strip_keyword(rest, "def")?;
    let (name, rest) = take_identifier(rest)?;
    let inner = rest.trim_start().strip_prefix('(')?;
    let (params, _) = split_balanced(inner)?;
    Some((name.to_string(), format!("({})", params.trim())))
}

/// Parses the target names of a member assignment.
///
/// Handles plain (`Name = value`), chained (`A = B = value`) and annotated
/// (`Name: T = value`) forms. Names starting with an underscore are
/// dropped. Returns `None` when the statement is not an assignment, so
/// comparisons and augmented assignments fall through.
fn parse_assignment_targets(stmt: &Statement<'_>) -> Option<Vec<String>> {
    let text = stmt.joined();
    let mut rest = text.as_str();
    let mut targets = Vec::new();
    loop {
        let (name, after) = take_identifier(rest)?;
        let after = after.trim_start();
        if let Some(annotated) = after.strip_prefix(':') {
            find_assignment_eq(annotated)?;
            if !name.starts_with('_') {
                targets.push(name.to_string());
            }
            return Some(targets);
        }
        let after_eq = after.strip_prefix('=')?;
        if after_eq.starts_with('=') {
            return None;
        }
        if !name.starts_with('_') {
            targets.push(name.to_string());
        }
        rest = after_eq.trim_start();

        // keep consuming `Name =` links of a chained assignment
        if let Some((_, next)) = take_identifier(rest) {
            let next = next.trim_start();
            if let Some(after_next) = next.strip_prefix('=') {
                if !after_next.starts_with('=') {
                    continue;
                }
            }
        }
        return Some(targets);
    }
}

/// Finds a plain `=` at top level, skipping strings, brackets, `==` and
/// operator assignments.
fn find_assignment_eq(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0i32;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth -= 1,
            quote @ (b'\'' | b'"') => {
                i += 1;
                while i < bytes.len() && bytes[i] != quote {
                    if bytes[i] == b'\\' {
                        i += 1;
                    }
                    i += 1;
                }
            }
            b'=' if depth == 0 => {
                let double = bytes.get(i + 1) == Some(&b'=');
                let operator = i > 0
                    && matches!(
                        bytes[i - 1],
                        b'<' | b'>' | b'!' | b'+' | b'-' | b'*' | b'/' | b'%' | b'&' | b'|'
                            | b'^' | b'@' | b'='
                    );
                if !double && !operator {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Returns the cleaned text of a statement that is nothing but a string
/// literal. Adjacent literals concatenate, as in `'a' 'b'`.
fn bare_string_literal(stmt: &Statement<'_>) -> Option<String> {
    let text = stmt.code.join("\n");
    let (first, after) = parse_string_literal(text.trim_start())?;
    let mut value = first;
    let mut rest = after.trim_start();
    while !rest.is_empty() {
        let (piece, after) = parse_string_literal(rest)?;
        value.push_str(&piece);
        rest = after.trim_start();
    }
    Some(cleandoc(&value))
}

/// Parses one string literal off the front of `text`, returning its
/// decoded value and the remainder. Handles the `r`, `b`, `u` and `f`
/// prefixes and both quoting styles; raw literals skip escape decoding.
fn parse_string_literal(text: &str) -> Option<(String, &str)> {
    let mut raw = false;
    let mut prefix_len = 0;
    for ch in text.chars() {
        match ch {
            'r' | 'R' => raw = true,
            'b' | 'B' | 'u' | 'U' | 'f' | 'F' => {}
            _ => break,
        }
        prefix_len += 1;
        if prefix_len > 2 {
            return None;
        }
    }
    let rest = &text[prefix_len..];
    let bytes = rest.as_bytes();
    let quote = *bytes.first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let triple = bytes.get(1) == Some(&quote) && bytes.get(2) == Some(&quote);
    let open_len = if triple { 3 } else { 1 };

    let mut value = String::new();
    let mut i = open_len;
    while i < bytes.len() {
        if bytes[i] == quote {
            if !triple {
                return Some((value, &rest[i + 1..]));
            }
            if bytes.get(i + 1) == Some(&quote) && bytes.get(i + 2) == Some(&quote) {
                return Some((value, &rest[i + 3..]));
            }
        }
        if !triple && bytes[i] == b'\n' {
            return None;
        }
        if bytes[i] == b'\\' && i + 1 < bytes.len() {
            if raw {
                let escaped = rest[i + 1..].chars().next()?;
                value.push('\\');
                value.push(escaped);
                i += 1 + escaped.len_utf8();
                continue;
            }
            let (decoded, consumed) = decode_escape(&rest[i + 1..]);
            value.push_str(&decoded);
            i += 1 + consumed;
            continue;
        }
        let ch = rest[i..].chars().next()?;
        value.push(ch);
        i += ch.len_utf8();
    }
    None
}

/// Decodes one escape sequence, given the text after the backslash.
/// Returns the decoded text and the number of bytes consumed. Unknown
/// escapes keep their backslash; an escaped line break vanishes.
fn decode_escape(text: &str) -> (String, usize) {
    let Some(ch) = text.chars().next() else {
        return ("\\".to_string(), 0);
    };
    match ch {
        'n' => ("\n".to_string(), 1),
        't' => ("\t".to_string(), 1),
        'r' => ("\r".to_string(), 1),
        '\\' => ("\\".to_string(), 1),
        '\'' => ("'".to_string(), 1),
        '"' => ("\"".to_string(), 1),
        'a' => ("\u{0007}".to_string(), 1),
        'b' => ("\u{0008}".to_string(), 1),
        'f' => ("\u{000C}".to_string(), 1),
        'v' => ("\u{000B}".to_string(), 1),
        '0' => ("\0".to_string(), 1),
        '\n' => (String::new(), 1),
        'x' => decode_hex_escape(text, 'x', 2),
        'u' => decode_hex_escape(text, 'u', 4),
        'U' => decode_hex_escape(text, 'U', 8),
        other => (format!("\\{other}"), other.len_utf8()),
    }
}

fn decode_hex_escape(text: &str, marker: char, digits: usize) -> (String, usize) {
    if let Some(hex) = text.as_bytes().get(1..=digits) {
        if hex.iter().all(u8::is_ascii_hexdigit) {
            let hex = std::str::from_utf8(hex).unwrap_or_default();
            if let Some(ch) = u32::from_str_radix(hex, 16).ok().and_then(char::from_u32) {
                return (ch.to_string(), 1 + digits);
            }
        }
    }
    (format!("\\{marker}"), 1)
}

/// Pulls docstring text out of an inline comment carrying a `doc:` marker.
///
/// The text runs from the first marker to the next `#` or the end of the
/// comment. Markers with nothing after them are passed over, so a comment
/// like `# doc: # doc: real` still yields `real`.
fn doc_marker_text(comment: &str) -> Option<String> {
    let mut search = comment;
    while let Some(pos) = search.find("doc:") {
        let after = &search[pos + 4..];
        let text = after.trim_start();
        let text = match text.find('#') {
            Some(cut) => &text[..cut],
            None => text,
        };
        let text = text.trim_end();
        if !text.is_empty() {
            return Some(text.to_string());
        }
        search = after;
    }
    None
}

/// Cleans docstring text the way documentation tools do: the first line
/// loses its leading whitespace, later lines lose their common margin, and
/// blank lines are trimmed from both ends.
fn cleandoc(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut margin = usize::MAX;
    for line in &lines[1..] {
        let width = leading_ws(line);
        if width < line.len() {
            margin = margin.min(width);
        }
    }
    let mut cleaned: Vec<&str> = Vec::with_capacity(lines.len());
    if let Some(first) = lines.first() {
        cleaned.push(first.trim_start());
    }
    for line in &lines[1..] {
        if margin != usize::MAX && line.len() > margin {
            cleaned.push(&line[margin..]);
        } else {
            cleaned.push(line.trim_start_matches([' ', '\t']));
        }
    }
    while cleaned.last().is_some_and(|line| line.trim().is_empty()) {
        cleaned.pop();
    }
    let skip = cleaned
        .iter()
        .take_while(|line| line.trim().is_empty())
        .count();
    cleaned[skip..].join("\n")
}

/// Counts leading space and tab bytes.
fn leading_ws(line: &str) -> usize {
    line.bytes()
        .take_while(|byte| matches!(byte, b' ' | b'\t'))
        .count()
}
