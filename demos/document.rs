//! Documenting an enumeration from its class source.
//!
//! Run with: cargo run --example document

use enumdoc::{autodoc, document_member, extract, EnumBuilder};
use std::error::Error;

const SOURCE: &str = r#"
class People(int, Enum):
    """
    An enumeration of people.
    """

    Bob = 1  # doc: A person called Bob
    Alice = 2  # doc: A person called Alice
    Carol = 3
    """
    A person called Carol.

    This is a multiline docstring.
    """
    #: A person called Dennis
    Dennis = 4

    @classmethod
    def iter_values(cls):
        """
        Iterate over the values of the enumeration.
        """
        return iter(cls)
"#;

fn main() -> Result<(), Box<dyn Error>> {
    // Extraction alone produces a standalone table
    let table = extract(SOURCE)?;
    println!("Extracted '{}' with {} documented members", table.name(), table.len());
    for (member, doc) in table.member_docs() {
        println!("  {member}: {}", doc.lines().next().unwrap_or_default());
    }
    println!();

    // The table serializes, so it can feed other tools
    println!("As JSON:\n{}\n", serde_json::to_string_pretty(&table)?);

    // Documenting and rendering in one step
    let mut people = EnumBuilder::new("People")
        .int_backed()
        .member("Bob", 1)
        .member("Alice", 2)
        .member("Carol", 3)
        .member("Dennis", 4)
        .build()?;

    let document = autodoc(&mut people, SOURCE)?;
    println!("Rendered documentation:\n{}", document);

    // A single member can be documented on its own
    let doc = document_member(&mut people, "Alice", SOURCE)?;
    println!("Alice alone: {:?}", doc);

    Ok(())
}
