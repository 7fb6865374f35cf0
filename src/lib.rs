//! reStructuredText stub generation for the quantecon package
//!
//!     This crate scans the quantecon source tree for module files and writes
//!     matching rST stub files plus index files, so Sphinx can render API docs
//!     without hand-maintained listings. It is a small, specialized stand-in
//!     for sphinx-apidoc.
//!
//! Layouts
//!
//!     - flat: one `modules/` directory with a stub per module and a single
//!       `index.rst` toctree over all of them. Selected by passing `single`
//!       on the command line.
//!     - split: five fixed subsystem groups (game_theory, markov, random,
//!       tools, util), each with its own stub directory and `<group>.rst`
//!       index, plus a static top-level `index.rst` enumerating the groups.
//!       This is the default.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # ScaffoldError and the Result alias
//!     ├── discover.rs             # Module-file listing and name derivation
//!     ├── groups.rs               # The closed five-group table
//!     ├── templates.rs            # Fixed rST format strings and rendering
//!     ├── scaffold.rs             # The flat_layout / split_layout operations
//!     └── lib.rs
//!
//!     This is a pure lib, that is, it powers the qe-apidoc binary but is
//!     shell agnostic, that is no code should be written that supposes a
//!     shell environment, be it to std print, env vars etc.
//!
//! Regeneration model
//!
//!     Output is always a full overwrite. There is no incremental mode and no
//!     state carried between runs besides the output files themselves, so a
//!     second run over an unchanged source tree reproduces the same bytes.

pub mod discover;
pub mod error;
pub mod groups;
pub mod scaffold;
pub mod templates;

pub use error::{Result, ScaffoldError};
pub use scaffold::{flat_layout, split_layout, ScaffoldSpec};
