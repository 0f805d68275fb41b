//! Command results and their text / JSON rendering.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;

use crate::config::shell::OutputFormat;
use crate::data_structures::kumu_trie::{CourseRanking, Mark};
use crate::error::GradesResult;

/// The outcome of one successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Response {
    /// A new student was stored
    Added {
        /// Student name
        name: String,
        /// Number of courses given
        courses: usize,
    },
    /// An existing student's marks were merged
    Updated {
        /// Student name
        name: String,
    },
    /// A whole record was removed
    Removed {
        /// Student name
        name: String,
    },
    /// Some courses were removed from a record
    CoursesRemoved {
        /// Student name
        name: String,
        /// How many of the requested courses were dropped
        removed: usize,
    },
    /// The marks of one student
    Marks {
        /// Student name
        name: String,
        /// Whether only selected courses are shown
        selected: bool,
        /// Course to mark, ordered by course
        marks: BTreeMap<String, Mark>,
    },
    /// A ranked course listing
    Ranking {
        /// The listing
        ranking: CourseRanking,
        /// Whether the mean is shown
        show_mean: bool,
    },
    /// Nobody takes the course
    NoData {
        /// The course asked for
        course: String,
    },
    /// The course catalog
    Catalog {
        /// Offered courses
        courses: Vec<String>,
    },
    /// Usage text
    Help,
    /// Session ends
    Quit,
    /// Nothing to report
    Empty,
}

const HELP: &str = "\
Commands (arguments are separated by commas):
  add <name>[, <course>=<mark>, ...]     insert a student or update an existing one
  update <name>, <course>=<mark>, ...    modify the marks of an existing student
  delete <name>[, <course>, ...]         remove a student or some of their courses
  search <name>[, <course>, ...]         show a student's marks
  list <course>                          rank the students of a course
  courses                                show the available courses
  help                                   show this text
  quit                                   exit; all data will be lost
";

impl Response {
    /// Whether the session should end after this response.
    pub fn is_quit(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Renders the response in `format`. Text output ends with a newline unless empty.
    pub fn render(&self, format: OutputFormat) -> GradesResult<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => match self {
                Self::Empty => Ok(String::new()),
                _ => Ok(format!("{}\n", serde_json::to_string(self)?)),
            },
        }
    }

    fn to_text(&self) -> String {
        let mut text = String::new();
        // Writing into a String cannot fail
        let _ = match self {
            Self::Added { name, courses } => writeln!(
                text,
                "Student {name} added to the database with {courses} modules."
            ),
            Self::Updated { name } => writeln!(text, "Student {name} updated."),
            Self::Removed { name } => writeln!(text, "Student {name} removed from the database."),
            Self::CoursesRemoved { name, removed: 0 } => {
                writeln!(text, "Student {name} does not have any of the given courses")
            }
            Self::CoursesRemoved { name, removed } => {
                writeln!(text, "{removed} course(s) removed from {name}")
            }
            Self::Marks {
                name,
                selected,
                marks,
            } => {
                let heading = if *selected { "selected marks" } else { "marks" };
                let _ = writeln!(text, "{name}'s {heading} are:");
                for (course, mark) in marks {
                    let _ = writeln!(text, "\t{course}: \t{mark}");
                }
                Ok(())
            }
            Self::Ranking { ranking, show_mean } => {
                if *show_mean {
                    let _ = writeln!(
                        text,
                        "The average for the {} course is {}",
                        ranking.course, ranking.mean
                    );
                }
                for line in ranking.lines() {
                    let _ = writeln!(text, "{line}");
                }
                Ok(())
            }
            Self::NoData { course } => writeln!(text, "No students take the {course} course."),
            Self::Catalog { courses } => writeln!(text, "Available courses: {}", courses.join(", ")),
            Self::Help => text.write_str(HELP),
            Self::Quit => writeln!(text, "Bye!"),
            Self::Empty => Ok(()),
        };
        text
    }
}
