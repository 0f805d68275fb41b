//! Thread-safe handle around a [`KumuTrie`].
//!
//! The trie itself is single-threaded; hosts that serve several threads share it
//! through this handle, which serializes writers behind a `parking_lot` lock.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{CourseRanking, CourseRemoval, Fields, KumuTrie, KumuTrieConfig, TrieResult};

/// Cloneable, lock-protected handle to a shared [`KumuTrie`].
#[derive(Debug, Clone, Default)]
pub struct SharedKumuTrie {
    inner: Arc<RwLock<KumuTrie>>,
}

impl SharedKumuTrie {
    /// Wraps an existing trie.
    pub fn new(trie: KumuTrie) -> Self {
        Self {
            inner: Arc::new(RwLock::new(trie)),
        }
    }

    /// Creates an empty shared trie with the given configuration.
    pub fn with_config(config: KumuTrieConfig) -> Self {
        Self::new(KumuTrie::with_config(config))
    }

    /// See [`KumuTrie::insert`].
    pub fn insert(&self, name: &str, fields: Fields) -> TrieResult<bool> {
        self.inner.write().insert(name, fields)
    }

    /// Copies out the marks of `name`, if the student exists.
    pub fn fields_of(&self, name: &str) -> Option<Fields> {
        self.inner.read().lookup(name).map(|node| node.fields().clone())
    }

    /// See [`KumuTrie::remove_record`].
    pub fn remove_record(&self, name: &str) -> bool {
        self.inner.write().remove_record(name)
    }

    /// See [`KumuTrie::remove_courses`].
    pub fn remove_courses<S: AsRef<str>>(&self, name: &str, courses: &[S]) -> CourseRemoval {
        self.inner.write().remove_courses(name, courses)
    }

    /// See [`KumuTrie::ranked_list_by_course`].
    pub fn ranked_list_by_course(&self, course: &str) -> Option<CourseRanking> {
        self.inner.read().ranked_list_by_course(course)
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Checks if the shared trie holds no records.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Runs `f` with shared access to the trie.
    pub fn with_read<R>(&self, f: impl FnOnce(&KumuTrie) -> R) -> R {
        f(&self.inner.read())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    /// Writers on several threads never lose a record or leave stray nodes.
    #[test]
    fn test_shared_trie_concurrency() {
        const THREAD_COUNT: usize = 8;
        const OPS_PER_THREAD: usize = 50;

        let trie = SharedKumuTrie::default();
        let start_barrier = Arc::new(std::sync::Barrier::new(THREAD_COUNT));

        let handles: Vec<_> = (0..THREAD_COUNT)
            .map(|thread_id| {
                let trie = trie.clone();
                let barrier = Arc::clone(&start_barrier);
                thread::spawn(move || {
                    barrier.wait();
                    for j in 0..OPS_PER_THREAD {
                        let name = format!("student_{thread_id}_{j}");
                        let mut fields = Fields::new();
                        fields.insert("Database".to_string(), (j % 101) as u32);
                        trie.insert(&name, fields).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(trie.len(), THREAD_COUNT * OPS_PER_THREAD);

        let ranking = trie.ranked_list_by_course("Database").unwrap();
        assert_eq!(ranking.len(), THREAD_COUNT * OPS_PER_THREAD);

        for thread_id in 0..THREAD_COUNT {
            for j in 0..OPS_PER_THREAD {
                assert!(trie.remove_record(&format!("student_{thread_id}_{j}")));
            }
        }
        assert!(trie.is_empty());
        assert_eq!(trie.with_read(KumuTrie::node_count), 0);
    }
}
