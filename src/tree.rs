//! ASCII directory tree limited to directories and catalogued files.

use crate::filewalker::{has_accepted_extension, is_hidden_name};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const SPACE_INDENT: &str = "    ";

/// One directory or accepted file in the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub name: String,
    pub is_dir: bool,
    /// Always empty for files.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Reads the children of `dir` from disk, recursively.
    ///
    /// Directories come first, then files, each group sorted by name. Hidden
    /// entries, symlinks and files outside the accepted extensions are left out.
    /// Directories are kept even when nothing inside them qualifies.
    pub fn scan(dir: &Path) -> Result<Vec<TreeNode>> {
        let read = fs::read_dir(dir)
            .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

        let mut dirs = Vec::new();
        let mut files = Vec::new();

        for entry in read {
            let entry =
                entry.with_context(|| format!("Failed to read entry in: {}", dir.display()))?;
            let name = entry.file_name();
            if is_hidden_name(&name) {
                continue;
            }

            let path = entry.path();
            let file_type = entry
                .file_type()
                .with_context(|| format!("Failed to stat: {}", path.display()))?;
            let display_name = name.to_string_lossy().into_owned();

            if file_type.is_dir() {
                dirs.push(TreeNode {
                    name: display_name,
                    is_dir: true,
                    children: TreeNode::scan(&path)?,
                });
            } else if file_type.is_file() && has_accepted_extension(&path) {
                files.push(TreeNode {
                    name: display_name,
                    is_dir: false,
                    children: Vec::new(),
                });
            }
        }

        dirs.sort_by(|a, b| a.name.cmp(&b.name));
        files.sort_by(|a, b| a.name.cmp(&b.name));
        dirs.extend(files);
        Ok(dirs)
    }

    fn label(&self) -> String {
        if self.is_dir {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Renders the tree below `dir` as lines, without a line for `dir` itself.
pub fn render_tree(dir: &Path) -> Result<Vec<String>> {
    Ok(render_nodes(&TreeNode::scan(dir)?))
}

/// Draws already-scanned nodes with box-drawing connectors.
pub fn render_nodes(nodes: &[TreeNode]) -> Vec<String> {
    let mut lines = Vec::new();
    append_lines(nodes, "", &mut lines);
    lines
}

fn append_lines(nodes: &[TreeNode], prefix: &str, lines: &mut Vec<String>) {
    for (idx, node) in nodes.iter().enumerate() {
        let is_last = idx + 1 == nodes.len();
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        lines.push(format!("{prefix}{connector}{}", node.label()));

        if !node.children.is_empty() {
            let indent = if is_last { SPACE_INDENT } else { PIPE_INDENT };
            append_lines(&node.children, &format!("{prefix}{indent}"), lines);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn file(name: &str) -> TreeNode {
        TreeNode {
            name: name.to_string(),
            is_dir: false,
            children: Vec::new(),
        }
    }

    fn dir(name: &str, children: Vec<TreeNode>) -> TreeNode {
        TreeNode {
            name: name.to_string(),
            is_dir: true,
            children,
        }
    }

    #[test]
    fn test_render_nodes_connectors_and_indent() {
        let nodes = vec![
            dir(
                "components",
                vec![dir("icons", vec![file("Star.tsx")]), file("Button.tsx")],
            ),
            dir("empty", vec![]),
            file("index.ts"),
        ];

        let expected = vec![
            "├── components/",
            "│   ├── icons/",
            "│   │   └── Star.tsx",
            "│   └── Button.tsx",
            "├── empty/",
            "└── index.ts",
        ];
        assert_eq!(render_nodes(&nodes), expected);
    }

    #[test]
    fn test_render_nodes_last_directory_uses_spaces() {
        let nodes = vec![file("a.ts"), dir("z", vec![dir("y", vec![file("b.ts")])])];
        let expected = vec!["├── a.ts", "└── z/", "    └── y/", "        └── b.ts"];
        assert_eq!(render_nodes(&nodes), expected);
    }

    #[test]
    fn test_render_nodes_empty() {
        assert!(render_nodes(&[]).is_empty());
    }

    #[test]
    fn test_scan_orders_directories_before_files() -> Result<()> {
        let tmp = tempdir()?;
        let root = tmp.path();
        fs::write(root.join("b.ts"), "")?;
        fs::write(root.join("a.tsx"), "")?;
        fs::create_dir(root.join("zeta"))?;
        fs::create_dir(root.join("alpha"))?;
        fs::write(root.join("alpha").join("x.ts"), "")?;

        let lines = render_tree(root)?;
        assert_eq!(
            lines,
            vec!["├── alpha/", "│   └── x.ts", "├── zeta/", "├── a.tsx", "└── b.ts"]
        );
        Ok(())
    }

    #[test]
    fn test_scan_filters_hidden_and_foreign_files() -> Result<()> {
        let tmp = tempdir()?;
        let root = tmp.path();
        fs::create_dir(root.join(".git"))?;
        fs::write(root.join(".git").join("config.ts"), "")?;
        fs::write(root.join(".hidden.ts"), "")?;
        fs::write(root.join("notes.md"), "")?;
        fs::write(root.join("main.ts"), "")?;

        assert_eq!(render_tree(root)?, vec!["└── main.ts"]);
        Ok(())
    }

    #[test]
    fn test_scan_keeps_directories_without_matches() -> Result<()> {
        let tmp = tempdir()?;
        let root = tmp.path();
        fs::create_dir(root.join("assets"))?;
        fs::write(root.join("assets").join("logo.svg"), "")?;

        let nodes = TreeNode::scan(root)?;
        assert_eq!(nodes, vec![dir("assets", vec![])]);
        Ok(())
    }

    #[test]
    fn test_scan_missing_directory_fails() {
        let tmp = tempdir().unwrap();
        assert!(render_tree(&tmp.path().join("missing")).is_err());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_scan_skips_hidden_names_that_are_not_utf8() -> Result<()> {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = tempdir()?;
        let root = tmp.path();
        fs::write(root.join(OsStr::from_bytes(b".\xffsecret.ts")), "")?;
        let hidden_dir = root.join(OsStr::from_bytes(b".\xffdir"));
        fs::create_dir(&hidden_dir)?;
        fs::write(hidden_dir.join("inner.ts"), "")?;
        fs::write(root.join("ok.ts"), "")?;

        assert_eq!(render_tree(root)?, vec!["└── ok.ts"]);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_omits_symlinks() -> Result<()> {
        let tmp = tempdir()?;
        let root = tmp.path();
        let outside = tempdir()?;
        fs::write(outside.path().join("far.ts"), "")?;
        fs::create_dir(root.join("lib"))?;
        fs::write(root.join("lib").join("near.ts"), "")?;
        std::os::unix::fs::symlink(outside.path().join("far.ts"), root.join("link.ts"))?;
        std::os::unix::fs::symlink(outside.path(), root.join("linked"))?;
        std::os::unix::fs::symlink(root, root.join("lib").join("loop"))?;

        assert_eq!(render_tree(root)?, vec!["└── lib/", "    └── near.ts"]);
        Ok(())
    }
}
