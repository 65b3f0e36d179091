//! Nested file tree built from query results

use std::collections::BTreeMap;
use std::path::{Component, Path};

use serde::{Serialize, Serializer};

/// A node in a [`FileTree`]: either a matching file or a directory of nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    File,
    Dir(FileTree),
}

impl Serialize for TreeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Files are leaves with no value
            TreeNode::File => serializer.serialize_unit(),
            TreeNode::Dir(tree) => tree.serialize(serializer),
        }
    }
}

/// Hierarchy of matching files keyed by path component.
///
/// Only directories that lead to at least one matching file appear, because
/// nodes are created solely by inserting file paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FileTree {
    children: BTreeMap<String, TreeNode>,
}

impl FileTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file by its path relative to the tree root
    pub fn insert_file(&mut self, relative: &Path) {
        let parts: Vec<String> = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        let Some((file, dirs)) = parts.split_last() else {
            return;
        };

        let mut node = self;
        for dir in dirs {
            let entry = node
                .children
                .entry(dir.clone())
                .or_insert_with(|| TreeNode::Dir(FileTree::new()));
            // A walk never yields a file and a directory at the same path
            let TreeNode::Dir(tree) = entry else {
                debug_assert!(false, "{dir} is both a file and a directory");
                return;
            };
            node = tree;
        }
        node.children.entry(file.clone()).or_insert(TreeNode::File);
    }

    pub fn get(&self, name: &str) -> Option<&TreeNode> {
        self.children.get(name)
    }

    pub fn children(&self) -> impl Iterator<Item = (&str, &TreeNode)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of files anywhere in the tree
    pub fn file_count(&self) -> usize {
        self.children
            .values()
            .map(|node| match node {
                TreeNode::File => 1,
                TreeNode::Dir(tree) => tree.file_count(),
            })
            .sum()
    }

    /// Render as indented text lines, directories suffixed with `/`
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, "");
        out
    }

    fn render_into(&self, out: &mut String, prefix: &str) {
        let count = self.children.len();
        for (index, (name, node)) in self.children.iter().enumerate() {
            let last = index + 1 == count;
            let branch = if last { "└── " } else { "├── " };
            match node {
                TreeNode::File => {
                    out.push_str(&format!("{prefix}{branch}{name}\n"));
                }
                TreeNode::Dir(tree) => {
                    out.push_str(&format!("{prefix}{branch}{name}/\n"));
                    let child_prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
                    tree.render_into(out, &child_prefix);
                }
            }
        }
    }
}
