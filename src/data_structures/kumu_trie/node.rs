//! Node implementation for the Kumu Trie.
//!
//! This module provides the TrieNode structure used in the Kumu Trie implementation.
//! Each node owns its children outright; detaching a child drops its whole subtree.

use std::fmt::Write as _;

use fnv::FnvHashMap;
use hashbrown::HashMap;

/// A student's mark in a single course.
pub type Mark = u32;

/// Course name to mark mapping carried by a record node.
pub type Fields = HashMap<String, Mark>;

/// A node in the Kumu Trie.
///
/// Each node represents a character in a student's name. Record nodes terminate a
/// name and carry that student's course marks.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    /// Character of this node, `None` for the root sentinel
    character: Option<char>,

    /// Map of characters to owned child nodes
    children: FnvHashMap<char, TrieNode>,

    /// Whether a name terminates exactly at this node
    is_record: bool,

    /// Whether this node has no children; kept in step with `children`
    is_leaf: bool,

    /// Course marks, meaningful only while `is_record` is set
    fields: Fields,
}

impl TrieNode {
    /// Creates the value-less root node.
    pub(super) fn root() -> Self {
        Self {
            is_leaf: true,
            ..Self::default()
        }
    }

    /// Creates a new childless, non-record node for `character`.
    pub(super) fn new(character: char) -> Self {
        Self {
            character: Some(character),
            is_leaf: true,
            ..Self::default()
        }
    }

    /// The character this node represents, `None` for the root.
    pub fn character(&self) -> Option<char> {
        self.character
    }

    /// Whether a student record terminates at this node.
    pub fn is_record(&self) -> bool {
        self.is_record
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    /// Raw course to mark mapping of this record.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Mark for `course`, if the student takes it.
    pub fn mark(&self, course: &str) -> Option<Mark> {
        self.fields.get(course).copied()
    }

    /// Renders every course and mark, one per line, ordered by course name.
    pub fn marks_as_text(&self) -> String {
        let mut courses: Vec<(&String, &Mark)> = self.fields.iter().collect();
        courses.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let mut text = String::new();
        for (course, mark) in courses {
            // Writing into a String cannot fail
            let _ = writeln!(text, "\t{course}: \t{mark}");
        }
        text
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Child node for `character`, if any.
    pub fn child(&self, character: char) -> Option<&TrieNode> {
        self.children.get(&character)
    }

    /// Iterates over the direct children in no particular order.
    pub fn children(&self) -> impl Iterator<Item = &TrieNode> {
        self.children.values()
    }

    /// Removes every course in `names` from this record.
    ///
    /// Courses the student does not take are skipped. Only the payload is touched;
    /// record status and children stay as they are.
    ///
    /// # Returns
    ///
    /// The number of courses actually removed.
    pub fn delete_fields<S: AsRef<str>>(&mut self, names: &[S]) -> usize {
        let mut removed = 0;
        for name in names {
            let name: &str = name.as_ref();
            if self.fields.remove(name).is_some() {
                removed += 1;
            }
        }
        removed
    }

    /// Detaches the child for `character`, handing back its subtree if there was one.
    pub fn delete_child(&mut self, character: char) -> Option<TrieNode> {
        let removed = self.children.remove(&character);
        self.is_leaf = self.children.is_empty();
        removed
    }

    /// Child for `character`, created as a fresh node when missing.
    pub(super) fn child_or_insert(&mut self, character: char) -> &mut TrieNode {
        self.is_leaf = false;
        self.children
            .entry(character)
            .or_insert_with(|| TrieNode::new(character))
    }

    pub(super) fn child_mut(&mut self, character: char) -> Option<&mut TrieNode> {
        self.children.get_mut(&character)
    }

    /// Merges `fields` into this node and marks it as a record.
    ///
    /// Courses already present are overwritten with the new mark.
    pub(super) fn merge_record(&mut self, fields: Fields) {
        self.fields.extend(fields);
        self.is_record = true;
        self.is_leaf = self.children.is_empty();
    }

    /// Drops the payload together with the record status.
    pub(super) fn clear_record(&mut self) {
        self.fields.clear();
        self.is_record = false;
    }
}
