//! Error types for namespace operations.
//!
//! Every failure is an ordinary outcome of bad input. Nothing here is fatal,
//! and the caller is free to carry on with a different operation.

/// Errors returned by [`Tree`](crate::Tree) and [`Navigator`](crate::Navigator).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NamespaceError {
    /// An entry with this name is already present in the target directory.
    #[error("'{0}' already exists")]
    AlreadyExists(String),

    /// No entry with this name exists in the target directory.
    #[error("'{0}' does not exist")]
    NotFound(String),

    /// The name refers to a directory where a file was required.
    #[error("'{0}' is not a file")]
    NotAFile(String),

    /// The name refers to a file where a directory was required.
    #[error("'{0}' is not a directory")]
    NotADirectory(String),
}

/// Result alias for namespace operations.
pub type Result<T> = std::result::Result<T, NamespaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_quotes_the_name() {
        let e = NamespaceError::AlreadyExists("a.txt".to_string());
        assert_eq!(e.to_string(), "'a.txt' already exists");

        let e = NamespaceError::NotFound("missing.txt".to_string());
        assert_eq!(e.to_string(), "'missing.txt' does not exist");
    }

    #[test]
    fn display_names_the_expected_kind() {
        let e = NamespaceError::NotAFile("docs".to_string());
        assert!(e.to_string().contains("not a file"));

        let e = NamespaceError::NotADirectory("a.txt".to_string());
        assert!(e.to_string().contains("not a directory"));
    }

    #[test]
    fn empty_name_is_still_quoted() {
        let e = NamespaceError::NotFound(String::new());
        assert_eq!(e.to_string(), "'' does not exist");
    }
}
