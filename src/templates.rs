//! Fixed rST format strings and their rendering
//!
//! All output files are produced by substituting names into these fixed
//! templates; there is no dynamic behavior beyond substitution. Title
//! underlines are runs of `=` matching the title length.

/// Stub for one module: a title plus an `automodule` directive referencing
/// `<module_path>.<name>`.
pub fn module_stub(module_path: &str, name: &str) -> String {
    format!(
        "\
{name}
{underline}

.. automodule:: {module_path}.{name}
    :members:
    :undoc-members:
    :show-inheritance:
",
        name = name,
        underline = "=".repeat(name.len()),
        module_path = module_path,
    )
}

/// Flat-layout `index.rst`: one toctree over every generated stub.
/// `generated` is the pre-joined entry block (`modules/<name>` entries
/// separated by newline plus three-space indent).
pub fn flat_index(generated: &str) -> String {
    format!(
        "\
=======================
QuantEcon documentation
=======================

Auto-generated documentation by module:

.. toctree::
   :maxdepth: 2

   {generated}


Indices and tables
==================

* :ref:`genindex`
* :ref:`modindex`
* :ref:`search`
",
        generated = generated,
    )
}

/// Split-layout top-level `index.rst`. The toctree is static: it always
/// lists the five group labels, regardless of how many members each group
/// discovered.
pub const SPLIT_INDEX: &str = "\
=======================
QuantEcon documentation
=======================

The `quantecon` python library consists of a number of modules which
includes game theory (game_theory), markov chains (markov), random
generation utilities (random), a collection of tools (tools),
and other utilities (util) which are
mainly used by developers internal to the package.

.. toctree::
   :maxdepth: 2

   game_theory
   markov
   random
   tools
   util

Indices and tables
==================

* :ref:`genindex`
* :ref:`modindex`
* :ref:`search`
";

/// Per-group `<group>.rst` index: a title plus a toctree of the group's
/// member documents.
pub fn group_index(title: &str, files: &str) -> String {
    format!(
        "\
{title}
{underline}

.. toctree::
   :maxdepth: 2

   {files}
",
        title = title,
        underline = "=".repeat(title.len()),
        files = files,
    )
}

/// Toctree entry block for one group: `<group>/<member>` per line, joined
/// by newline plus three-space indent. An empty member list still renders
/// the bare `<group>/` prefix.
pub fn toctree_entries(group: &str, members: &[String]) -> String {
    format!(
        "{group}/{rest}",
        group = group,
        rest = members.join(&format!("\n   {}/", group)),
    )
}
