//! The closed set of subsystem groups used by the split layout
//!
//! Each group binds together a label, the source subdirectory it is
//! discovered from, the dotted module path its stubs reference, and an
//! optional display title for its index. The generator iterates this table
//! instead of carrying per-group code paths.

use std::path::{Path, PathBuf};

/// One subsystem group of the split layout.
#[derive(Debug)]
pub struct Group {
    /// Directory and file label: `source/<label>/` and `source/<label>.rst`.
    pub label: &'static str,
    /// Subdirectory of the package root to discover from; `None` means the
    /// package root itself (base-level modules).
    pub source_subdir: Option<&'static str>,
    /// Dotted path prefix for the `automodule` directive.
    pub module_path: &'static str,
    /// Index title override; the capitalized label is used when absent.
    pub display_title: Option<&'static str>,
    /// Entry that must be discovered and is then dropped from the listing.
    /// Its absence from the listing aborts the run.
    pub exclude: Option<&'static str>,
}

/// The five groups, in the order they are generated.
pub static GROUPS: [Group; 5] = [
    Group {
        label: "game_theory",
        source_subdir: Some("game_theory"),
        module_path: "quantecon.game_theory",
        display_title: Some("Game Theory"),
        exclude: None,
    },
    Group {
        label: "markov",
        source_subdir: Some("markov"),
        module_path: "quantecon.markov",
        display_title: None,
        exclude: None,
    },
    Group {
        label: "random",
        source_subdir: Some("random"),
        module_path: "quantecon.random",
        display_title: None,
        exclude: None,
    },
    Group {
        label: "tools",
        source_subdir: None,
        module_path: "quantecon",
        display_title: None,
        exclude: Some("version"),
    },
    Group {
        label: "util",
        source_subdir: Some("util"),
        module_path: "quantecon.util",
        display_title: Some("Utilities"),
        exclude: None,
    },
];

impl Group {
    /// Directory this group's modules are discovered from.
    pub fn source_dir(&self, package_root: &Path) -> PathBuf {
        match self.source_subdir {
            Some(subdir) => package_root.join(subdir),
            None => package_root.to_path_buf(),
        }
    }

    /// Human-readable index title: the override when one is configured,
    /// otherwise the label with its first character uppercased.
    pub fn title(&self) -> String {
        if let Some(title) = self.display_title {
            return title.to_string();
        }
        let mut chars = self.label.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_the_five_groups_in_generation_order() {
        let labels: Vec<_> = GROUPS.iter().map(|g| g.label).collect();
        assert_eq!(
            labels,
            vec!["game_theory", "markov", "random", "tools", "util"]
        );
    }

    #[test]
    fn tools_discovers_from_the_package_root() {
        let tools = GROUPS.iter().find(|g| g.label == "tools").unwrap();
        assert_eq!(tools.source_dir(Path::new("../quantecon")), Path::new("../quantecon"));
        assert_eq!(tools.module_path, "quantecon");
        assert_eq!(tools.exclude, Some("version"));
    }

    #[test]
    fn titles_use_overrides_or_capitalized_labels() {
        let titles: Vec<_> = GROUPS.iter().map(|g| g.title()).collect();
        assert_eq!(
            titles,
            vec!["Game Theory", "Markov", "Random", "Tools", "Utilities"]
        );
    }
}
