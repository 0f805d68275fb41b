//! Per-course ranked listings.
//!
//! Entries are ordered by descending mark, ties broken by ascending name, and the
//! course mean is computed with truncating integer division.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use serde::Serialize;

use super::node::{Mark, TrieNode};

/// One student's standing in a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    /// The student's mark in the course
    pub mark: Mark,
    /// The student's full name
    pub name: String,
}

impl RankedEntry {
    fn ranking_order(&self, other: &Self) -> Ordering {
        other
            .mark
            .cmp(&self.mark)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl Display for RankedEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.mark, self.name)
    }
}

/// Ranked listing of every student taking a course.
///
/// Only ever built from at least one entry, so `mean` is always defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRanking {
    /// The course the listing was built for
    pub course: String,
    /// Entries from highest to lowest mark
    pub entries: Vec<RankedEntry>,
    /// Mean mark, truncated toward zero
    pub mean: Mark,
}

impl CourseRanking {
    /// Sorts `entries` and computes their mean, or `None` when there are none.
    pub(super) fn from_entries(course: &str, mut entries: Vec<RankedEntry>) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }

        entries.sort_by(RankedEntry::ranking_order);

        let total: u64 = entries.iter().map(|entry| u64::from(entry.mark)).sum();
        let mean = total / entries.len() as u64;

        Some(Self {
            course: course.to_string(),
            entries,
            // The mean of u32 values always fits back into a u32
            mean: Mark::try_from(mean).unwrap_or(Mark::MAX),
        })
    }

    /// Number of ranked students.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; an empty ranking is reported as `None` instead.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries rendered as `"{mark}\t{name}"` lines.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

/// Depth-first collection of `(name, mark)` for every record taking `course`.
///
/// `path` holds the characters from the root down to `node` and is restored
/// before returning.
pub(super) fn collect_course_entries(
    node: &TrieNode,
    course: &str,
    path: &mut String,
    entries: &mut Vec<RankedEntry>,
) {
    if node.is_record() {
        if let Some(mark) = node.mark(course) {
            entries.push(RankedEntry {
                mark,
                name: path.clone(),
            });
        }
    }

    for child in node.children() {
        let Some(character) = child.character() else {
            continue;
        };
        path.push(character);
        collect_course_entries(child, course, path, entries);
        path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(mark: Mark, name: &str) -> RankedEntry {
        RankedEntry {
            mark,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_orders_by_mark_then_name() {
        let ranking = CourseRanking::from_entries(
            "Database",
            vec![entry(90, "C"), entry(70, "A"), entry(90, "B")],
        )
        .unwrap();

        assert_eq!(
            ranking.entries,
            vec![entry(90, "B"), entry(90, "C"), entry(70, "A")]
        );
        assert_eq!(ranking.lines(), vec!["90\tB", "90\tC", "70\tA"]);
    }

    #[test]
    fn test_mean_truncates() {
        let ranking =
            CourseRanking::from_entries("Database", vec![entry(70, "A"), entry(91, "B")]).unwrap();
        assert_eq!(ranking.mean, 80);
    }

    #[test]
    fn test_no_entries_is_no_data() {
        assert!(CourseRanking::from_entries("Database", Vec::new()).is_none());
    }
}
