//! Current-directory tracking over a [`Tree`].
//!
//! A [`Navigator`] is one session's cursor. It holds an id, not a borrow,
//! so several navigators can walk the same tree independently and the tree
//! stays free to be mutated between calls.

use crate::entry::{EntryKind, NodeId};
use crate::error::{NamespaceError, Result};
use crate::tree::Tree;

/// A session's position in the tree.
///
/// # Example
///
/// ```rust
/// use memfs_namespace::{Navigator, Tree};
///
/// let mut tree = Tree::new();
/// let mut nav = Navigator::new(&tree);
///
/// tree.create_directory(nav.current(), "docs").unwrap();
/// nav.change_directory(&tree, "docs").unwrap();
///
/// assert_eq!(nav.current_path(&tree), "/docs");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigator {
    current: NodeId,
}

impl Navigator {
    /// Start a session at the root of `tree`.
    pub fn new(tree: &Tree) -> Self {
        Self {
            current: tree.root(),
        }
    }

    /// The current directory.
    pub fn current(&self) -> NodeId {
        self.current
    }

    /// Move into the child directory `name` of the current directory.
    ///
    /// Only single names are understood. `..`, `/` and `a/b` are looked up
    /// literally: they fail with `NotFound` unless a child directory was
    /// created under exactly that name.
    pub fn change_directory(&mut self, tree: &Tree, name: &str) -> Result<NodeId> {
        let child = tree
            .lookup(self.current, name)
            .ok_or_else(|| NamespaceError::NotFound(name.to_string()))?;

        if tree.kind(child) != Some(EntryKind::Directory) {
            return Err(NamespaceError::NotADirectory(name.to_string()));
        }

        log::debug!("changed directory {} -> {}", self.current, child);
        self.current = child;
        Ok(child)
    }

    /// Ids from the current directory up to and including the root.
    pub fn ancestors<'a>(&self, tree: &'a Tree) -> impl Iterator<Item = NodeId> + 'a {
        std::iter::successors(Some(self.current), move |&id| tree.parent(id))
    }

    /// Render the absolute path of the current directory.
    ///
    /// The root renders as `/`; anything else as `/a/b/c`, built by walking
    /// parent links upward and reversing.
    pub fn current_path(&self, tree: &Tree) -> String {
        let mut segments: Vec<&str> = self
            .ancestors(tree)
            .filter(|&id| tree.parent(id).is_some())
            .filter_map(|id| tree.name(id))
            .collect();
        segments.reverse();

        format!("/{}", segments.join("/"))
    }
}
