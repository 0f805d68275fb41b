//! Error types for the Kumu Trie.
//!
//! This module defines the error types that can occur during Kumu Trie operations.
//! Missing students are not errors; they surface as `None` or a sentinel result.

/// Errors that can occur in Kumu Trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// Error when an empty name is provided.
    #[error("Empty student name not allowed")]
    EmptyName,

    /// Error when a name exceeds the maximum length allowed.
    #[error("Name '{name}' exceeds maximum length of {max_length} characters")]
    NameTooLong {
        /// The name that was too long.
        name: String,
        /// The maximum allowed length.
        max_length: usize,
    },
}
