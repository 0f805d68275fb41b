//! Kumu Trie Implementation
//!
//! This module provides the gradebook record store: a character-indexed trie keyed by
//! student name whose terminal nodes carry course marks. Removing a student prunes the
//! branch bottom-up so that no childless, record-less node is left behind.

mod error;
mod node;
mod ranking;
mod shared;

use std::borrow::Cow;

use tracing::{debug, trace};

pub use error::TrieError;
pub use node::{Fields, Mark, TrieNode};
pub use ranking::{CourseRanking, RankedEntry};
pub use shared::SharedKumuTrie;

/// Result type for Kumu Trie operations
pub type TrieResult<T> = Result<T, TrieError>;

/// Configuration options for the Kumu Trie
#[derive(Debug, Clone)]
pub struct KumuTrieConfig {
    /// Whether names are compared case-sensitively
    pub case_sensitive: bool,

    /// Maximum name length in characters (bounds the removal recursion)
    pub max_name_length: usize,
}

impl Default for KumuTrieConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            max_name_length: 64,
        }
    }
}

/// Outcome of removing courses from a student's record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseRemoval {
    /// No record exists for the name
    StudentNotFound,
    /// The record exists; holds how many of the requested courses were dropped
    Removed(usize),
}

impl CourseRemoval {
    /// Numeric form: `-1` when the student is unknown, otherwise the removed count.
    pub fn code(self) -> i64 {
        match self {
            Self::StudentNotFound => -1,
            Self::Removed(count) => i64::try_from(count).unwrap_or(i64::MAX),
        }
    }
}

/// Kumu Trie is an in-memory gradebook keyed by student name.
///
/// Key features:
/// * Insert-or-update with merge of course marks
/// * Exact name lookup that never matches a bare prefix
/// * Whole-record removal with bottom-up pruning of unused nodes
/// * Per-course ranked listings with the course mean
///
/// The trie has no internal locking; wrap it in [`SharedKumuTrie`] to share it
/// between threads.
#[derive(Debug, Clone)]
pub struct KumuTrie {
    /// The root node of the trie
    root: TrieNode,

    /// Configuration options
    config: KumuTrieConfig,
}

impl KumuTrie {
    /// Creates a new empty `KumuTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(KumuTrieConfig::default())
    }

    /// Creates a new empty `KumuTrie` with the specified configuration.
    pub fn with_config(config: KumuTrieConfig) -> Self {
        Self {
            root: TrieNode::root(),
            config,
        }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &KumuTrieConfig {
        &self.config
    }

    /// The value-less root node; it is never a record.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    fn normalize<'a>(&self, name: &'a str) -> TrieResult<Cow<'a, str>> {
        if name.is_empty() {
            return Err(TrieError::EmptyName);
        }

        let processed = if self.config.case_sensitive {
            Cow::Borrowed(name)
        } else {
            Cow::Owned(name.to_lowercase())
        };

        if processed.chars().count() > self.config.max_name_length {
            return Err(TrieError::NameTooLong {
                name: processed.into_owned(),
                max_length: self.config.max_name_length,
            });
        }

        Ok(processed)
    }

    /// Inserts a student or updates an existing one.
    ///
    /// One node is walked or created per character of `name`. The given marks are merged
    /// into the record, overwriting marks for courses it already holds.
    ///
    /// # Arguments
    ///
    /// * `name` - The student's name.
    /// * `fields` - Course to mark pairs to merge into the record.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if a new record was created, `false` if an existing one was updated.
    /// * `Err(TrieError)` - If the name is empty or too long.
    pub fn insert<K>(&mut self, name: K, fields: Fields) -> TrieResult<bool>
    where
        K: AsRef<str>,
    {
        let name = self.normalize(name.as_ref())?;

        let mut node = &mut self.root;
        for c in name.chars() {
            node = node.child_or_insert(c);
        }

        let is_new = !node.is_record();
        debug!(name = %name, courses = fields.len(), is_new, "Storing student record");
        node.merge_record(fields);

        Ok(is_new)
    }

    /// Finds the record node for `name`.
    ///
    /// Traversal stops at the first missing character. A node is returned only when every
    /// character was consumed and the landed node is a record, so neither a stored prefix
    /// of `name` nor a name that is only a prefix of a stored one will match.
    pub fn lookup<K>(&self, name: K) -> Option<&TrieNode>
    where
        K: AsRef<str>,
    {
        let name = self.normalize(name.as_ref()).ok()?;

        let mut node = &self.root;
        for c in name.chars() {
            node = node.child(c)?;
        }

        node.is_record().then_some(node)
    }

    fn lookup_mut(&mut self, name: &str) -> Option<&mut TrieNode> {
        let mut node = &mut self.root;
        for c in name.chars() {
            node = node.child_mut(c)?;
        }

        if node.is_record() {
            Some(node)
        } else {
            None
        }
    }

    /// Checks if a record exists for `name`.
    pub fn contains<K>(&self, name: K) -> bool
    where
        K: AsRef<str>,
    {
        self.lookup(name).is_some()
    }

    /// Removes a student's whole record.
    ///
    /// The record's payload is dropped and every node on its path that no longer
    /// roots another record is detached from its parent, deepest first.
    ///
    /// # Returns
    ///
    /// `true` if the student existed and was removed, `false` otherwise.
    pub fn remove_record<K>(&mut self, name: K) -> bool
    where
        K: AsRef<str>,
    {
        let Ok(name) = self.normalize(name.as_ref()) else {
            return false;
        };
        if self.lookup(&*name).is_none() {
            return false;
        }

        let chars: Vec<char> = name.chars().collect();
        Self::remove_recursive(&mut self.root, &chars);
        debug!(name = %name, "Removed student record");

        true
    }

    /// Helper function for the bottom-up removal.
    ///
    /// `chars` is the part of the name below `node`. Returns whether `node` itself is
    /// now prunable: it terminates no record and has no children left.
    fn remove_recursive(node: &mut TrieNode, chars: &[char]) -> bool {
        let Some((&c, rest)) = chars.split_first() else {
            node.clear_record();
            return node.child_count() == 0;
        };

        let child_prunable = match node.child_mut(c) {
            Some(child) => Self::remove_recursive(child, rest),
            None => return false,
        };
        if !child_prunable {
            return false;
        }

        trace!(character = %c, "Pruning trie node");
        node.delete_child(c);

        // A node that branches toward another name or holds its own record stays
        !node.is_record() && node.child_count() == 0
    }

    /// Removes the given courses from a student's record.
    ///
    /// The record stays in place even when no courses remain.
    pub fn remove_courses<K, S>(&mut self, name: K, courses: &[S]) -> CourseRemoval
    where
        K: AsRef<str>,
        S: AsRef<str>,
    {
        let Ok(name) = self.normalize(name.as_ref()) else {
            return CourseRemoval::StudentNotFound;
        };

        match self.lookup_mut(&name) {
            Some(node) => {
                let removed = node.delete_fields(courses);
                debug!(name = %name, removed, "Removed courses from student record");
                CourseRemoval::Removed(removed)
            }
            None => CourseRemoval::StudentNotFound,
        }
    }

    /// Lists every student taking `course`, best mark first, with the course mean.
    ///
    /// # Returns
    ///
    /// `None` when nobody takes the course.
    pub fn ranked_list_by_course(&self, course: &str) -> Option<CourseRanking> {
        let mut entries = Vec::new();
        let mut path = String::new();
        ranking::collect_course_entries(&self.root, course, &mut path, &mut entries);

        debug!(course, matches = entries.len(), "Built course ranking");
        CourseRanking::from_entries(course, entries)
    }

    /// Returns the number of student records in the trie.
    ///
    /// This requires traversing the entire trie, so it's an O(n) operation.
    pub fn len(&self) -> usize {
        Self::count_records(&self.root)
    }

    fn count_records(node: &TrieNode) -> usize {
        let own = usize::from(node.is_record());
        own + node.children().map(Self::count_records).sum::<usize>()
    }

    /// Returns the number of nodes below the root.
    pub fn node_count(&self) -> usize {
        Self::count_nodes(&self.root) - 1
    }

    fn count_nodes(node: &TrieNode) -> usize {
        1 + node.children().map(Self::count_nodes).sum::<usize>()
    }

    /// Checks if the trie holds no records.
    pub fn is_empty(&self) -> bool {
        self.root.child_count() == 0
    }

    /// Clears all records from the trie.
    pub fn clear(&mut self) {
        self.root = TrieNode::root();
    }
}

impl Default for KumuTrie {
    fn default() -> Self {
        Self::new()
    }
}
