//! Data structures for the Kumu gradebook.
//!
//! This module contains the record store the rest of the crate is built around.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Exclusive, hierarchical ownership (no reference counting inside the structures)
//! - Explicit result types instead of panics

pub mod kumu_trie;

// Re-export common data structures
pub use kumu_trie::{
    CourseRanking, CourseRemoval, KumuTrie, KumuTrieConfig, SharedKumuTrie, TrieError,
    TrieResult,
};
