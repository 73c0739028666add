//! Entry types stored in the namespace tree.

use std::collections::HashMap;
use std::fmt;

/// Handle to a node in a [`Tree`](crate::Tree).
///
/// Ids are only meaningful for the tree that issued them. A deleted entry's
/// id is never handed out again.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The two kinds of entry, without their payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::File => write!(f, "file"),
            EntryKind::Directory => write!(f, "directory"),
        }
    }
}

/// A named node's payload: either file content or a directory's children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    File(File),
    Directory(Directory),
}

impl Entry {
    /// An empty directory.
    pub fn directory() -> Self {
        Entry::Directory(Directory::default())
    }

    /// A file holding `content`.
    pub fn file(content: impl Into<String>) -> Self {
        Entry::File(File::new(content))
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::File(_) => EntryKind::File,
            Entry::Directory(_) => EntryKind::Directory,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Entry::Directory(_))
    }

    pub fn as_file(&self) -> Option<&File> {
        match self {
            Entry::File(file) => Some(file),
            Entry::Directory(_) => None,
        }
    }

    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            Entry::Directory(dir) => Some(dir),
            Entry::File(_) => None,
        }
    }
}

/// A file: raw string content and nothing else.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct File {
    content: String,
}

impl File {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the content, returning the previous value.
    pub fn set_content(&mut self, content: impl Into<String>) -> String {
        std::mem::replace(&mut self.content, content.into())
    }

    /// Content length in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// A directory: a map from child name to child node.
///
/// Names are unique within one directory. Iteration order is whatever the
/// map yields and carries no meaning.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Directory {
    children: HashMap<String, NodeId>,
}

impl Directory {
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.children.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    /// Child names, in map iteration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    /// Child `(name, id)` pairs, in map iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.children.iter().map(|(name, id)| (name.as_str(), *id))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Insert a child. Returns false (and leaves the map alone) if the name
    /// is already taken.
    pub(crate) fn insert(&mut self, name: String, id: NodeId) -> bool {
        if self.children.contains_key(&name) {
            return false;
        }
        self.children.insert(name, id);
        true
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<NodeId> {
        self.children.remove(name)
    }
}
