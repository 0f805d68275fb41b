//! Command line parsing and validation.
//!
//! A command is a verb followed by comma-separated arguments, e.g.
//! `add John, Database=70, Mathematics=90` or `delete John, Database`.
//! Everything the record store takes on trust is checked here.

use std::collections::HashSet;

use crate::config::catalog::CatalogConfig;
use crate::data_structures::kumu_trie::Mark;
use crate::error::shell::ShellError;

/// A parsed, validated shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert a student, or update one that already exists
    Add {
        /// Student name
        name: String,
        /// Course marks to merge
        marks: Vec<(String, Mark)>,
    },
    /// Update marks of an existing student
    Update {
        /// Student name
        name: String,
        /// Course marks to merge
        marks: Vec<(String, Mark)>,
    },
    /// Remove a student, or only the listed courses
    Delete {
        /// Student name
        name: String,
        /// Courses to remove; empty removes the whole record
        courses: Vec<String>,
    },
    /// Show a student's marks, or only the listed courses
    Search {
        /// Student name
        name: String,
        /// Courses to show; empty shows all
        courses: Vec<String>,
    },
    /// Ranked listing of a course
    List {
        /// Course to rank
        course: String,
    },
    /// Show the course catalog
    Courses,
    /// Show usage
    Help,
    /// End the session
    Quit,
    /// Blank line
    Empty,
}

/// Verbs, matched case-insensitively.
#[derive(Debug, Clone, Copy)]
enum Verb {
    Add,
    Update,
    Delete,
    Search,
    List,
    Courses,
    Help,
    Quit,
}

#[inline]
fn dispatch_verb(verb: &str) -> Option<Verb> {
    const VERBS: [(&str, Verb); 10] = [
        ("add", Verb::Add),
        ("update", Verb::Update),
        ("delete", Verb::Delete),
        ("del", Verb::Delete),
        ("search", Verb::Search),
        ("list", Verb::List),
        ("courses", Verb::Courses),
        ("help", Verb::Help),
        ("quit", Verb::Quit),
        ("exit", Verb::Quit),
    ];

    VERBS
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(verb))
        .map(|(_, verb)| *verb)
}

impl Command {
    /// Parses one input line, checking it against `catalog`.
    pub fn parse(line: &str, catalog: &CatalogConfig) -> Result<Self, ShellError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Self::Empty);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        let verb = dispatch_verb(verb).ok_or_else(|| ShellError::UnknownCommand(verb.to_string()))?;

        let mut args = split_args(rest);

        match verb {
            Verb::Add => {
                let name = take_name(&mut args)?;
                let marks = parse_marks(&args, catalog)?;
                Ok(Self::Add { name, marks })
            }
            Verb::Update => {
                let name = take_name(&mut args)?;
                if args.is_empty() {
                    return Err(ShellError::MissingArgument("course=mark"));
                }
                let marks = parse_marks(&args, catalog)?;
                Ok(Self::Update { name, marks })
            }
            Verb::Delete => {
                let name = take_name(&mut args)?;
                let courses = parse_courses(&args, catalog)?;
                Ok(Self::Delete { name, courses })
            }
            Verb::Search => {
                let name = take_name(&mut args)?;
                let courses = parse_courses(&args, catalog)?;
                Ok(Self::Search { name, courses })
            }
            Verb::List => {
                let course = args.first().ok_or(ShellError::MissingArgument("course"))?;
                check_course(course, catalog)?;
                Ok(Self::List {
                    course: (*course).to_string(),
                })
            }
            Verb::Courses => Ok(Self::Courses),
            Verb::Help => Ok(Self::Help),
            Verb::Quit => Ok(Self::Quit),
        }
    }
}

/// Splits on commas and trims each argument. An empty remainder gives no arguments.
fn split_args(rest: &str) -> Vec<&str> {
    if rest.is_empty() {
        return Vec::new();
    }
    rest.split(',').map(str::trim).collect()
}

fn take_name(args: &mut Vec<&str>) -> Result<String, ShellError> {
    if args.is_empty() {
        return Err(ShellError::MissingArgument("name"));
    }
    let name = args.remove(0);
    if name.is_empty() {
        return Err(ShellError::EmptyName);
    }
    Ok(name.to_string())
}

fn check_course(course: &str, catalog: &CatalogConfig) -> Result<(), ShellError> {
    if catalog.offers(course) {
        Ok(())
    } else {
        Err(ShellError::UnknownCourse(course.to_string()))
    }
}

fn parse_courses(args: &[&str], catalog: &CatalogConfig) -> Result<Vec<String>, ShellError> {
    let mut seen = HashSet::new();
    let mut courses = Vec::with_capacity(args.len());
    for course in args {
        check_course(course, catalog)?;
        if !seen.insert(*course) {
            return Err(ShellError::DuplicateCourse((*course).to_string()));
        }
        courses.push((*course).to_string());
    }
    Ok(courses)
}

fn parse_marks(args: &[&str], catalog: &CatalogConfig) -> Result<Vec<(String, Mark)>, ShellError> {
    let mut seen = HashSet::new();
    let mut marks = Vec::with_capacity(args.len());
    for arg in args {
        let (course, value) = arg
            .split_once('=')
            .map(|(course, value)| (course.trim(), value.trim()))
            .ok_or_else(|| ShellError::MalformedMark((*arg).to_string()))?;

        check_course(course, catalog)?;
        if !seen.insert(course) {
            return Err(ShellError::DuplicateCourse(course.to_string()));
        }

        let invalid = || ShellError::InvalidMark {
            course: course.to_string(),
            value: value.to_string(),
            min: catalog.min_mark,
            max: catalog.max_mark,
        };
        let mark: Mark = value.parse().map_err(|_| invalid())?;
        if !catalog.accepts(mark) {
            return Err(invalid());
        }

        marks.push((course.to_string(), mark));
    }
    Ok(marks)
}
