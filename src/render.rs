//! Rendering of enumerations as reStructuredText directives.
//!
//! The output follows the directive shape documentation generators expect
//! for enumerations: a class directive, the class docstring, the backing
//! type, then one member directive per member with its value and docstring.
//!
//! ```text
//! .. enum:: Season(value)
//!
//!    The four seasons.
//!
//!    :Member Type: int
//!
//!    Valid values are as follows:
//!
//!    .. enum:member:: Season.SPRING
//!
//!       :value: 1
//!
//!       March to May
//! ```
//!
//! [`render`] works from an [`EnumDef`] alone. [`autodoc`] combines
//! extraction, binding and rendering in one call, which also brings the
//! method listing a [`DocTable`] carries.

use crate::error::Result;
use crate::extract::{document_enum_with_options, set_interactive, DocTable};
use crate::model::{EnumDef, EnumMember};
use crate::options::{ExtractOptions, MemberOrder, RenderOptions};
use crate::value::ValueKind;

/// Renders enumerations into a single reStructuredText document.
///
/// A renderer accumulates output across calls, separating directives with
/// a blank line, so several enumerations can share one document.
///
/// # Examples
///
/// ```rust
/// use enumdoc::{EnumBuilder, Renderer};
///
/// let compass = EnumBuilder::new("Compass")
///     .int_backed()
///     .member("NORTH", 1)
///     .member("SOUTH", 2)
///     .build()
///     .unwrap();
///
/// let mut renderer = Renderer::new();
/// renderer.render(&compass);
/// let text = renderer.into_inner();
/// assert!(text.starts_with(".. enum:: Compass(value)"));
/// ```
#[derive(Debug)]
pub struct Renderer {
    output: String,
    options: RenderOptions,
}

impl Renderer {
    /// Creates a renderer with default [`RenderOptions`].
    #[must_use]
    pub fn new() -> Self {
        Renderer::with_options(RenderOptions::new())
    }

    /// Creates a renderer with the given options.
    #[must_use]
    pub fn with_options(options: RenderOptions) -> Self {
        Renderer {
            output: String::new(),
            options,
        }
    }

    /// Renders one enumeration from its definition alone.
    ///
    /// Member docstrings come from the definition; no method listing is
    /// produced, since a definition does not know its methods.
    pub fn render(&mut self, def: &EnumDef) {
        self.render_parts(def, None);
    }

    /// Renders one enumeration, preferring docstrings from `table`.
    ///
    /// Members documented in the table win over docs already bound on the
    /// definition, and the table's method listing is appended.
    pub fn render_documented(&mut self, def: &EnumDef, table: &DocTable) {
        self.render_parts(def, Some(table));
    }

    /// Consumes the renderer and returns the accumulated document with a
    /// single trailing newline.
    #[must_use]
    pub fn into_inner(mut self) -> String {
        while self.output.ends_with("\n\n") {
            self.output.pop();
        }
        self.output
    }

    fn render_parts(&mut self, def: &EnumDef, table: Option<&DocTable>) {
        if !self.output.is_empty() {
            // exactly one blank line between directives
            while self.output.ends_with("\n\n") {
                self.output.pop();
            }
            self.output.push('\n');
        }

        let directive = if def.is_flag() { "flag" } else { "enum" };
        self.push_line(0, &format!(".. {directive}:: {}(value)", def.name()));
        self.blank_line();

        let class_doc = table.and_then(DocTable::class_doc).or_else(|| def.doc());
        if let Some(doc) = class_doc {
            self.push_text(1, doc);
            self.blank_line();
        }

        if def.kind() != ValueKind::Opaque {
            self.push_line(1, &format!(":Member Type: {}", def.kind()));
            self.blank_line();
        }

        let mut members: Vec<&EnumMember> = def.iter().collect();
        if self.options.member_order == MemberOrder::Alphabetical {
            members.sort_by(|a, b| a.name().cmp(b.name()));
        }

        let has_members = !members.is_empty();
        if has_members {
            self.push_line(1, "Valid values are as follows:");
            self.blank_line();
            for member in &members {
                self.render_member(member, def, table, class_doc);
            }
        }

        let methods = table.map(DocTable::methods).unwrap_or_default();
        if !methods.is_empty() {
            let also = if has_members { "also " } else { "" };
            self.push_line(
                1,
                &format!("The enumeration and its members {also}have the following methods:"),
            );
            self.blank_line();
            for method in methods {
                self.push_line(
                    1,
                    &format!(".. method:: {}.{}{}", def.name(), method.name, method.signature),
                );
                self.blank_line();
                if let Some(doc) = &method.doc {
                    self.push_text(2, doc);
                    self.blank_line();
                }
            }
        }
    }

    fn render_member(
        &mut self,
        member: &EnumMember,
        def: &EnumDef,
        table: Option<&DocTable>,
        class_doc: Option<&str>,
    ) {
        let role = if def.is_flag() { "flag" } else { "enum" };
        self.push_line(
            1,
            &format!(".. {role}:member:: {}.{}", def.name(), member.name()),
        );
        self.blank_line();

        if self.options.show_values {
            self.push_line(2, &format!(":value: {}", member.value().repr()));
            self.blank_line();
        }

        let doc = table
            .and_then(|t| t.doc(member.name()))
            .or_else(|| member.doc());
        if let Some(doc) = doc {
            // a doc inherited from the class would just repeat it
            if class_doc != Some(doc) {
                self.push_text(2, doc);
                self.blank_line();
            }
        }
    }

    fn push_line(&mut self, level: usize, text: &str) {
        if text.is_empty() {
            self.output.push('\n');
            return;
        }
        for _ in 0..level * self.options.indent {
            self.output.push(' ');
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn push_text(&mut self, level: usize, text: &str) {
        for line in text.split('\n') {
            self.push_line(level, line);
        }
    }

    fn blank_line(&mut self) {
        self.output.push('\n');
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new()
    }
}

/// Renders one enumeration with default options.
///
/// # Examples
///
/// ```rust
/// use enumdoc::{render, EnumBuilder};
///
/// let mut status = EnumBuilder::new("Status")
///     .int_backed()
///     .member("OK", 0)
///     .member("FAILED", 1)
///     .build()
///     .unwrap();
/// status.get_mut("OK").unwrap().set_doc("Everything went fine.");
///
/// let text = render(&status);
/// assert!(text.contains(".. enum:member:: Status.OK"));
/// assert!(text.contains(":value: 0"));
/// assert!(text.contains("Everything went fine."));
/// ```
#[must_use]
pub fn render(def: &EnumDef) -> String {
    render_with_options(def, RenderOptions::new())
}

/// Renders one enumeration with explicit [`RenderOptions`].
#[must_use]
pub fn render_with_options(def: &EnumDef, options: RenderOptions) -> String {
    let mut renderer = Renderer::with_options(options);
    renderer.render(def);
    renderer.into_inner()
}

/// Extracts docstrings from `source`, binds them onto `def` and renders
/// the documented enumeration in one step.
///
/// Turns the interactive flag on for the whole process first, so the
/// binding always happens; that is the point of an explicit documentation
/// pass. The rendered output includes the method listing found in the
/// source.
///
/// # Errors
///
/// Same failure modes as [`document_enum`](crate::extract::document_enum).
///
/// # Examples
///
/// ```rust
/// use enumdoc::{autodoc, EnumBuilder};
///
/// let mut season = EnumBuilder::new("Season")
///     .int_backed()
///     .member("SPRING", 1)
///     .build()
///     .unwrap();
///
/// let text = autodoc(&mut season, r#"
/// class Season(Enum):
///     """The four seasons."""
///
///     SPRING = 1  # doc: March to May
/// "#).unwrap();
///
/// assert!(text.contains("The four seasons."));
/// assert!(text.contains("March to May"));
/// ```
#[must_use = "this returns the rendered document, errors must be handled"]
pub fn autodoc(def: &mut EnumDef, source: &str) -> Result<String> {
    autodoc_with_options(def, source, ExtractOptions::new(), RenderOptions::new())
}

/// [`autodoc`] with explicit extraction and rendering options.
///
/// # Errors
///
/// Same failure modes as [`autodoc`].
#[must_use = "this returns the rendered document, errors must be handled"]
pub fn autodoc_with_options(
    def: &mut EnumDef,
    source: &str,
    extract_options: ExtractOptions,
    render_options: RenderOptions,
) -> Result<String> {
    set_interactive(true);
    let table = document_enum_with_options(def, source, extract_options)?;
    let mut renderer = Renderer::with_options(render_options);
    renderer.render_documented(def, &table);
    Ok(renderer.into_inner())
}
