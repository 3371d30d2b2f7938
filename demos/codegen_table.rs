//! Scanning a whole module and emitting machine-readable doc tables.
//!
//! Run with: cargo run --example codegen_table

use enumdoc::extract_module;
use std::error::Error;

const MODULE: &str = r#"
import enum

DEFAULT_MODE = "feeder"

class ModeOfTransport(Enum):
    """
    Modes of transporting containers.
    """

    feeder = 1  # doc: A feeder vessel
    deep_sea_vessel = 2  # doc: A deep sea vessel
    barge = 3  # doc: An inland barge
    truck = 4  # doc: A truck

class StorageRequirement(Enum):
    standard = 1  # doc: No special requirements
    reefer = 2  # doc: Needs a power connection
    dangerous_goods = 3  # doc: Needs a specially-equipped yard block
"#;

fn main() -> Result<(), Box<dyn Error>> {
    let tables = extract_module(MODULE)?;
    println!("Found {} enumerations\n", tables.len());

    for table in &tables {
        println!("{} ({} members)", table.name(), table.len());
        for (member, doc) in table.member_docs() {
            println!("  {member:<20} {doc}");
        }
        println!();
    }

    // Tables serialize cleanly, so a build script can dump them for
    // downstream code generation
    let json = serde_json::to_string_pretty(&tables)?;
    println!("As JSON:\n{}", json);

    Ok(())
}
