//! Course catalog configuration module.
//!
//! The catalog lists the courses the shell accepts and the range a mark must fall in.
//! The record store itself never consults it.

use std::collections::HashSet;

use super::{ConfigResult, Validate};
use crate::data_structures::kumu_trie::Mark;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Courses offered and the accepted mark range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Course names, matched exactly
    pub courses: Vec<String>,

    /// Lowest accepted mark
    pub min_mark: Mark,

    /// Highest accepted mark
    pub max_mark: Mark,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            courses: [
                "Database",
                "Data Structure",
                "Operating System",
                "Mathematics",
                "System Design",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            min_mark: 0,
            max_mark: 100,
        }
    }
}

impl CatalogConfig {
    /// Whether `course` is offered.
    pub fn offers(&self, course: &str) -> bool {
        self.courses.iter().any(|offered| offered == course)
    }

    /// Whether `mark` lies within the accepted range.
    pub fn accepts(&self, mark: Mark) -> bool {
        (self.min_mark..=self.max_mark).contains(&mark)
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.courses.is_empty() {
            return Err(ConfigError::ValidationError(
                "Course catalog cannot be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for course in &self.courses {
            if course.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "Course names cannot be empty".to_string(),
                ));
            }
            if course.contains(',') || course.contains('=') {
                return Err(ConfigError::ValidationError(format!(
                    "Course name '{course}' cannot contain ',' or '='"
                )));
            }
            if !seen.insert(course.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "Duplicate course in catalog: {course}"
                )));
            }
        }

        if self.min_mark > self.max_mark {
            return Err(ConfigError::ValueOutOfRange {
                key: "catalog.min_mark".to_string(),
                message: format!(
                    "min_mark ({}) must not exceed max_mark ({})",
                    self.min_mark, self.max_mark
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = CatalogConfig::default();
        assert!(catalog.validate().is_ok());
        assert!(catalog.offers("Data Structure"));
        assert!(!catalog.offers("data structure"));
        assert!(catalog.accepts(0));
        assert!(catalog.accepts(100));
        assert!(!catalog.accepts(101));
    }
}
