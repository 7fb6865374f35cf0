//! Command-line interface for qe-apidoc
//! This binary regenerates the rST documentation scaffolding for quantecon.
//! It is meant to be run from the docs directory, next to `source/` and the
//! `../quantecon` package tree.
//!
//! Usage:
//!   qe-apidoc           - Generate the split layout (five subsystem groups)
//!   qe-apidoc single    - Generate the flat modules/ layout
//!
//! Any argument other than `single` also selects the split layout; `single`
//! is recognized anywhere in the argument list, not just first.

use clap::{Arg, Command};

use qe_apidoc::{flat_layout, split_layout, ScaffoldSpec};

fn main() {
    let matches = Command::new("qe-apidoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates reStructuredText API stubs and indexes for the quantecon package")
        .arg(
            Arg::new("mode")
                .help("Pass 'single' for the flat modules/ layout; otherwise the split layout is generated")
                .num_args(0..),
        )
        .get_matches();

    let single = matches
        .get_many::<String>("mode")
        .map(|mut values| values.any(|v| v.as_str() == "single"))
        .unwrap_or(false);

    let spec = ScaffoldSpec::new();
    let result = if single {
        flat_layout(&spec)
    } else {
        split_layout(&spec)
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
