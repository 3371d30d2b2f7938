//! Flag enumerations and composite value decomposition.
//!
//! Run with: cargo run --example flags

use enumdoc::{autodoc, enum_def};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let perm = enum_def!(Permissions {
        READ = 4,
        WRITE = 2,
        EXECUTE = 1,
    })
    .int_backed()
    .flag()
    .build()?;

    // Composite values break down into their member bits
    for value in [0, 1, 5, 6, 7, 11] {
        let parts = perm.decompose(value)?;
        println!("{value:>2} = {parts}");
        if !parts.is_exact() {
            println!("     (bits {} covered by no member)", parts.uncovered());
        }
    }
    println!();

    // Flag enumerations render with flag directives
    let source = concat!(
        "class StatusFlags(IntFlag):\n",
        "    \"\"\"Process status bits.\"\"\"\n",
        "    Running = 1  # doc: The process is live.\n",
        "    Stopped = 2  # doc: The process has exited.\n",
        "    Error = 4  # doc: The process failed.\n",
    );
    let mut status = enum_def!(StatusFlags {
        Running = 1,
        Stopped = 2,
        Error = 4,
    })
    .int_backed()
    .flag()
    .build()?;

    let document = autodoc(&mut status, source)?;
    println!("Rendered documentation:\n{}", document);

    Ok(())
}
