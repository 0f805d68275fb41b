//! Interactive shell for the Kumu gradebook.
//!
//! The shell reads one command per line, validates it against the course catalog,
//! runs it on the record store and writes the rendered result. Command errors are
//! reported and the session carries on; only I/O failures end it early.

mod command;
mod response;

use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::config::catalog::CatalogConfig;
use crate::config::shell::{OutputFormat, ShellConfig};
use crate::config::GradesConfig;
use crate::data_structures::kumu_trie::{CourseRemoval, Fields, KumuTrie, KumuTrieConfig, Mark};
use crate::error::shell::ShellError;
use crate::error::{report_error, ErrorContext, GradesResult};

pub use command::Command;
pub use response::Response;

/// A gradebook session: the record store plus the rules the shell enforces.
#[derive(Debug)]
pub struct Shell {
    trie: KumuTrie,
    catalog: CatalogConfig,
    config: ShellConfig,
}

impl Shell {
    /// Creates a session with an empty gradebook.
    pub fn new(config: &GradesConfig) -> Self {
        Self {
            trie: KumuTrie::with_config(KumuTrieConfig::from(&config.trie)),
            catalog: config.catalog.clone(),
            config: config.shell.clone(),
        }
    }

    /// The record store behind this session.
    pub fn trie(&self) -> &KumuTrie {
        &self.trie
    }

    /// Parses and runs a single command line.
    pub fn execute(&mut self, line: &str) -> Result<Response, ShellError> {
        let command = Command::parse(line, &self.catalog)?;
        debug!(?command, "Executing command");
        self.apply(command)
    }

    fn apply(&mut self, command: Command) -> Result<Response, ShellError> {
        match command {
            Command::Add { name, marks } => {
                let courses = marks.len();
                if self.trie.insert(&name, into_fields(marks))? {
                    Ok(Response::Added { name, courses })
                } else {
                    Ok(Response::Updated { name })
                }
            }
            Command::Update { name, marks } => {
                if !self.trie.contains(&name) {
                    return Err(ShellError::StudentNotFound(name));
                }
                self.trie.insert(&name, into_fields(marks))?;
                Ok(Response::Updated { name })
            }
            Command::Delete { name, courses } if courses.is_empty() => {
                if self.trie.remove_record(&name) {
                    Ok(Response::Removed { name })
                } else {
                    Err(ShellError::StudentNotFound(name))
                }
            }
            Command::Delete { name, courses } => {
                match self.trie.remove_courses(&name, courses.as_slice()) {
                    CourseRemoval::Removed(removed) => {
                        Ok(Response::CoursesRemoved { name, removed })
                    }
                    CourseRemoval::StudentNotFound => Err(ShellError::StudentNotFound(name)),
                }
            }
            Command::Search { name, courses } => {
                let node = self
                    .trie
                    .lookup(&name)
                    .ok_or_else(|| ShellError::StudentNotFound(name.clone()))?;

                let marks: BTreeMap<String, _> = node
                    .fields()
                    .iter()
                    .filter(|(course, _)| courses.is_empty() || courses.contains(*course))
                    .map(|(course, mark)| (course.clone(), *mark))
                    .collect();

                Ok(Response::Marks {
                    name,
                    selected: !courses.is_empty(),
                    marks,
                })
            }
            Command::List { course } => Ok(match self.trie.ranked_list_by_course(&course) {
                Some(ranking) => Response::Ranking {
                    ranking,
                    show_mean: self.config.echo_mean,
                },
                None => Response::NoData { course },
            }),
            Command::Courses => Ok(Response::Catalog {
                courses: self.catalog.courses.clone(),
            }),
            Command::Help => Ok(Response::Help),
            Command::Quit => Ok(Response::Quit),
            Command::Empty => Ok(Response::Empty),
        }
    }

    /// Runs the session until `quit` or end of input.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - When the session ended normally.
    /// * `Err(GradesError)` - If reading input or writing output failed.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> GradesResult<()> {
        info!(courses = self.catalog.courses.len(), "Gradebook session started");

        let mut lines = input.lines();
        loop {
            if !self.config.prompt.is_empty() {
                output.write_all(self.config.prompt.as_bytes())?;
                output.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            let quit = match self.execute(&line) {
                Ok(response) => {
                    output.write_all(response.render(self.config.output)?.as_bytes())?;
                    response.is_quit()
                }
                Err(error) => {
                    let message = render_error(&error, self.config.output)?;
                    report_error(ErrorContext::new(error, "shell").with_details(line));
                    output.write_all(message.as_bytes())?;
                    false
                }
            };
            output.flush()?;

            if quit {
                break;
            }
        }

        info!(records = self.trie.len(), "Gradebook session ended");
        Ok(())
    }
}

fn into_fields(marks: Vec<(String, Mark)>) -> Fields {
    marks.into_iter().collect()
}

fn render_error(error: &ShellError, format: OutputFormat) -> GradesResult<String> {
    match format {
        OutputFormat::Text => Ok(format!("{error}\n")),
        OutputFormat::Json => Ok(format!(
            "{}\n",
            serde_json::json!({ "error": error.to_string() })
        )),
    }
}
