//! Filesystem context for the REPL.
//!
//! The REPL owns one tree and one navigator. Every operation here is
//! resolved against the navigator's current directory.

use memfs_namespace::{NamespaceError, Navigator, Tree};

/// What `ls` shows: the directory's rendered path and its child names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub path: String,
    /// In the order the tree yields them.
    pub names: Vec<String>,
}

/// Manages the REPL's tree and current directory
pub struct FsContext {
    tree: Tree,
    navigator: Navigator,
}

impl FsContext {
    pub fn new() -> Self {
        Self::with_tree(Tree::new())
    }

    /// Start a session at the root of an existing tree.
    pub fn with_tree(tree: Tree) -> Self {
        let navigator = Navigator::new(&tree);
        Self { tree, navigator }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn create_file(&mut self, name: &str, content: &str) -> Result<(), NamespaceError> {
        let dir = self.navigator.current();
        self.tree
            .create_file(dir, name, content)
            .map(|_| ())
            .inspect_err(|e| log::debug!("create file rejected: {}", e))
    }

    pub fn read_file(&self, name: &str) -> Result<&str, NamespaceError> {
        self.tree
            .read_file(self.navigator.current(), name)
            .inspect_err(|e| log::debug!("read rejected: {}", e))
    }

    pub fn create_directory(&mut self, name: &str) -> Result<(), NamespaceError> {
        let dir = self.navigator.current();
        self.tree
            .create_directory(dir, name)
            .map(|_| ())
            .inspect_err(|e| log::debug!("create directory rejected: {}", e))
    }

    pub fn list_directory(&self) -> Result<Listing, NamespaceError> {
        let names = self.tree.list_children(self.navigator.current())?;
        Ok(Listing {
            path: self.current_path(),
            names,
        })
    }

    /// Move into `name` and return the new rendered path.
    pub fn change_directory(&mut self, name: &str) -> Result<String, NamespaceError> {
        self.navigator
            .change_directory(&self.tree, name)
            .inspect_err(|e| log::debug!("cd rejected: {}", e))?;
        Ok(self.current_path())
    }

    pub fn delete_file(&mut self, name: &str) -> Result<(), NamespaceError> {
        let dir = self.navigator.current();
        self.tree
            .delete_file(dir, name)
            .inspect_err(|e| log::debug!("delete rejected: {}", e))
    }

    pub fn write_file(&mut self, name: &str, content: &str) -> Result<(), NamespaceError> {
        let dir = self.navigator.current();
        self.tree
            .write_file(dir, name, content)
            .inspect_err(|e| log::debug!("write rejected: {}", e))
    }

    pub fn current_path(&self) -> String {
        self.navigator.current_path(&self.tree)
    }

    /// Number of children in the current directory.
    pub fn entry_count(&self) -> usize {
        self.tree
            .directory(self.navigator.current())
            .map(|dir| dir.len())
            .unwrap_or(0)
    }
}

impl Default for FsContext {
    fn default() -> Self {
        Self::new()
    }
}
