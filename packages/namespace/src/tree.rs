//! The namespace tree.
//!
//! Nodes live in an arena indexed by [`NodeId`]. The root directory sits at
//! index 0 and is the only node without a parent. Every other node records
//! its parent as a plain id, so ownership runs strictly root-to-leaf and
//! the back-reference never keeps anything alive.
//!
//! Only files can be deleted and nothing is ever moved, so a directory can
//! never become its own ancestor.

use crate::entry::{Directory, Entry, EntryKind, File, NodeId};
use crate::error::{NamespaceError, Result};

#[derive(Clone, Debug)]
struct Node {
    name: String,
    parent: Option<NodeId>,
    entry: Entry,
}

/// An in-memory hierarchy of directories and files.
///
/// # Example
///
/// ```rust
/// use memfs_namespace::Tree;
///
/// let mut tree = Tree::new();
/// let root = tree.root();
///
/// let docs = tree.create_directory(root, "docs").unwrap();
/// tree.create_file(docs, "a.txt", "hello").unwrap();
///
/// assert_eq!(tree.read_file(docs, "a.txt").unwrap(), "hello");
/// ```
#[derive(Clone, Debug)]
pub struct Tree {
    /// Freed slots stay `None` forever.
    nodes: Vec<Option<Node>>,
    live: usize,
}

impl Tree {
    /// Create a tree holding only an empty root directory.
    pub fn new() -> Self {
        let root = Node {
            name: String::new(),
            parent: None,
            entry: Entry::directory(),
        };
        Self {
            nodes: vec![Some(root)],
            live: 1,
        }
    }

    /// The root directory.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of live entries, the root included.
    pub fn entry_count(&self) -> usize {
        self.live
    }

    /// The entry behind `id`, if it is still live.
    pub fn entry(&self, id: NodeId) -> Option<&Entry> {
        self.node(id).map(|node| &node.entry)
    }

    pub fn kind(&self, id: NodeId) -> Option<EntryKind> {
        self.entry(id).map(Entry::kind)
    }

    /// The directory holding `id`. `None` for the root and for dead ids.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|node| node.parent)
    }

    /// The name `id` is stored under in its parent. The root's name is empty.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|node| node.name.as_str())
    }

    /// Look up a single-segment `name` among the children of `dir`.
    pub fn lookup(&self, dir: NodeId, name: &str) -> Option<NodeId> {
        self.directory(dir).ok()?.get(name)
    }

    /// Create a file named `name` in `dir`.
    ///
    /// Fails with `AlreadyExists` if anything, file or directory, already
    /// uses the name. Nothing is overwritten.
    pub fn create_file(
        &mut self,
        dir: NodeId,
        name: &str,
        content: impl Into<String>,
    ) -> Result<NodeId> {
        let id = self.insert(dir, name, Entry::file(content))?;
        log::debug!("created file '{}' in {}", name, dir);
        Ok(id)
    }

    /// Read the content of the file `name` in `dir`.
    pub fn read_file(&self, dir: NodeId, name: &str) -> Result<&str> {
        self.file(dir, name).map(File::content)
    }

    /// Replace the content of an existing file. Never creates one.
    pub fn write_file(&mut self, dir: NodeId, name: &str, content: impl Into<String>) -> Result<()> {
        let file = self.file_mut(dir, name)?;
        file.set_content(content);
        log::debug!("wrote file '{}' in {}", name, dir);
        Ok(())
    }

    /// Remove the file `name` from `dir`. Directories cannot be deleted.
    pub fn delete_file(&mut self, dir: NodeId, name: &str) -> Result<()> {
        let id = self.child(dir, name)?;
        if self.kind(id) != Some(EntryKind::File) {
            return Err(NamespaceError::NotAFile(name.to_string()));
        }

        self.directory_mut(dir)?.remove(name);
        if let Some(slot) = self.nodes.get_mut(id.0) {
            *slot = None;
        }
        self.live -= 1;

        log::debug!("deleted file '{}' from {}", name, dir);
        Ok(())
    }

    /// Create an empty directory named `name` in `dir`.
    pub fn create_directory(&mut self, dir: NodeId, name: &str) -> Result<NodeId> {
        let id = self.insert(dir, name, Entry::directory())?;
        log::debug!("created directory '{}' in {}", name, dir);
        Ok(id)
    }

    /// Names of the children of `dir`, in no particular order.
    pub fn list_children(&self, dir: NodeId) -> Result<Vec<String>> {
        Ok(self.directory(dir)?.names().map(str::to_string).collect())
    }

    /// Borrow `dir` as a directory.
    pub fn directory(&self, dir: NodeId) -> Result<&Directory> {
        let node = self
            .node(dir)
            .ok_or_else(|| NamespaceError::NotFound(dir.to_string()))?;
        match &node.entry {
            Entry::Directory(directory) => Ok(directory),
            Entry::File(_) => Err(NamespaceError::NotADirectory(node.name.clone())),
        }
    }

    fn directory_mut(&mut self, dir: NodeId) -> Result<&mut Directory> {
        let node = self
            .nodes
            .get_mut(dir.0)
            .and_then(Option::as_mut)
            .ok_or_else(|| NamespaceError::NotFound(dir.to_string()))?;
        match &mut node.entry {
            Entry::Directory(directory) => Ok(directory),
            Entry::File(_) => Err(NamespaceError::NotADirectory(node.name.clone())),
        }
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    fn child(&self, dir: NodeId, name: &str) -> Result<NodeId> {
        self.directory(dir)?
            .get(name)
            .ok_or_else(|| NamespaceError::NotFound(name.to_string()))
    }

    fn file(&self, dir: NodeId, name: &str) -> Result<&File> {
        let id = self.child(dir, name)?;
        match self.entry(id) {
            Some(Entry::File(file)) => Ok(file),
            Some(Entry::Directory(_)) => Err(NamespaceError::NotAFile(name.to_string())),
            None => Err(NamespaceError::NotFound(name.to_string())),
        }
    }

    fn file_mut(&mut self, dir: NodeId, name: &str) -> Result<&mut File> {
        let id = self.child(dir, name)?;
        match self.nodes.get_mut(id.0).and_then(Option::as_mut) {
            Some(Node {
                entry: Entry::File(file),
                ..
            }) => Ok(file),
            Some(_) => Err(NamespaceError::NotAFile(name.to_string())),
            None => Err(NamespaceError::NotFound(name.to_string())),
        }
    }

    fn insert(&mut self, dir: NodeId, name: &str, entry: Entry) -> Result<NodeId> {
        let id = NodeId(self.nodes.len());
        if !self.directory_mut(dir)?.insert(name.to_string(), id) {
            return Err(NamespaceError::AlreadyExists(name.to_string()));
        }

        self.nodes.push(Some(Node {
            name: name.to_string(),
            parent: Some(dir),
            entry,
        }));
        self.live += 1;
        Ok(id)
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}
