//! Shell error module.
//!
//! Errors a single command can fail with. None of them end the session; the shell
//! reports them and reads the next line.

use thiserror::Error;

use crate::data_structures::kumu_trie::{Mark, TrieError};

/// Errors that can occur while interpreting a command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// The command verb is not recognized.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A required argument was not supplied.
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    /// The student name is empty.
    #[error("Student name cannot be empty")]
    EmptyName,

    /// The course is not part of the catalog.
    #[error("Course not found: {0}")]
    UnknownCourse(String),

    /// The same course was given twice in one command.
    #[error("Course given more than once: {0}")]
    DuplicateCourse(String),

    /// A course entry is not of the form `course=mark`.
    #[error("Expected course=mark, got '{0}'")]
    MalformedMark(String),

    /// The mark is not a number within the accepted range.
    #[error("Invalid mark '{value}' for {course}: expected {min}..={max}")]
    InvalidMark {
        /// The course the mark was given for
        course: String,
        /// The raw value as typed
        value: String,
        /// Lowest accepted mark
        min: Mark,
        /// Highest accepted mark
        max: Mark,
    },

    /// The named student does not exist.
    #[error("Student {0} not found.")]
    StudentNotFound(String),

    /// The record store rejected the operation.
    #[error(transparent)]
    Trie(#[from] TrieError),
}
