//! # memfs-namespace
//!
//! An in-memory namespace of directories and files.
//!
//! - [`Tree`]: owns every entry and provides the primitive operations
//!   (create, read, write and delete files, create directories, list
//!   children), each applied to one target directory.
//! - [`Navigator`]: one session's current directory, and the rendering of
//!   that location as an absolute path.
//!
//! Names are opaque strings, always looked up as a single segment. A `/` or
//! `..` inside a name is just part of the name: there is no parent lookup,
//! no absolute lookup and no multi-segment resolution.
//!
//! # Example
//!
//! ```rust
//! use memfs_namespace::{NamespaceError, Navigator, Tree};
//!
//! let mut tree = Tree::new();
//! let mut nav = Navigator::new(&tree);
//!
//! tree.create_directory(nav.current(), "docs").unwrap();
//! nav.change_directory(&tree, "docs").unwrap();
//! tree.create_file(nav.current(), "a.txt", "hello").unwrap();
//!
//! assert_eq!(nav.current_path(&tree), "/docs");
//! assert_eq!(tree.read_file(nav.current(), "a.txt").unwrap(), "hello");
//! assert!(matches!(
//!     tree.read_file(tree.root(), "a.txt"),
//!     Err(NamespaceError::NotFound(_))
//! ));
//! ```

mod entry;
mod error;
mod navigator;
mod tree;

pub use entry::{Directory, Entry, EntryKind, File, NodeId};
pub use error::{NamespaceError, Result};
pub use navigator::Navigator;
pub use tree::Tree;
