//! Test utilities and fixtures for the Kumu gradebook.
//!
//! This module provides reusable proptest strategies and a file fixture for
//! configuration tests.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use tempfile::TempDir;

use crate::data_structures::kumu_trie::{Fields, Mark};

/// Courses used by generated field maps.
pub const TEST_COURSES: [&str; 5] = [
    "Database",
    "Data Structure",
    "Operating System",
    "Mathematics",
    "System Design",
];

/// Generate a strategy for student names.
///
/// A small alphabet keeps shared prefixes frequent, which is where pruning matters.
pub fn name_strategy() -> BoxedStrategy<String> {
    proptest::string::string_regex("[abAB]{1,6}")
        .expect("valid name regex")
        .boxed()
}

/// Generate a strategy for course to mark maps over [`TEST_COURSES`].
pub fn fields_strategy() -> BoxedStrategy<Fields> {
    proptest::collection::vec((0..TEST_COURSES.len(), 0..=100 as Mark), 0..=TEST_COURSES.len())
        .prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(course, mark)| (TEST_COURSES[course].to_string(), mark))
                .collect()
        })
        .boxed()
}

/// Test fixture for tests that need files on disk.
///
/// Environment variables set through the fixture are removed when it is dropped.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Vector of environment variables to cleanup after tests
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Write `contents` to `file_name` inside the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(
        &self,
        file_name: &str,
        contents: C,
    ) -> std::io::Result<std::path::PathBuf> {
        let path = self.temp_dir.path().join(file_name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
