//! Tests for the gradebook shell.
//!
//! These drive whole sessions through `Shell::execute` and `Shell::run` the way the
//! binary does, with in-memory input and output.

use std::io::Cursor;

use crate::config::shell::OutputFormat;
use crate::config::GradesConfig;
use crate::error::shell::ShellError;
use crate::shell::{Response, Shell};

fn shell() -> Shell {
    Shell::new(&GradesConfig::default())
}

fn run_session(config: &GradesConfig, input: &str) -> String {
    let mut shell = Shell::new(config);
    let mut output = Vec::new();
    shell.run(Cursor::new(input), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_add_then_update() {
    let mut shell = shell();

    assert_eq!(
        shell.execute("add John, Database=70, Mathematics=90"),
        Ok(Response::Added {
            name: "John".to_string(),
            courses: 2,
        })
    );
    // Adding an existing student updates it
    assert_eq!(
        shell.execute("add John, Database=75"),
        Ok(Response::Updated {
            name: "John".to_string(),
        })
    );

    let john = shell.trie().lookup("John").unwrap();
    assert_eq!(john.mark("Database"), Some(75));
    assert_eq!(john.mark("Mathematics"), Some(90));
}

#[test]
fn test_update_requires_existing_student() {
    let mut shell = shell();
    assert_eq!(
        shell.execute("update Mary, Database=70"),
        Err(ShellError::StudentNotFound("Mary".to_string()))
    );
    assert!(shell.trie().is_empty());
}

#[test]
fn test_delete_record_and_courses() {
    let mut shell = shell();
    shell.execute("add John, Database=70").unwrap();
    shell.execute("add Joan, Database=80").unwrap();
    shell
        .execute("add Mary, Database=70, Mathematics=90")
        .unwrap();

    assert_eq!(
        shell.execute("delete Mary, Database"),
        Ok(Response::CoursesRemoved {
            name: "Mary".to_string(),
            removed: 1,
        })
    );
    assert_eq!(
        shell.execute("delete Mary, Database"),
        Ok(Response::CoursesRemoved {
            name: "Mary".to_string(),
            removed: 0,
        })
    );
    assert_eq!(
        shell.execute("delete Nobody, Database"),
        Err(ShellError::StudentNotFound("Nobody".to_string()))
    );

    assert_eq!(
        shell.execute("delete John"),
        Ok(Response::Removed {
            name: "John".to_string(),
        })
    );
    assert!(shell.trie().contains("Joan"));
    assert_eq!(
        shell.execute("delete John"),
        Err(ShellError::StudentNotFound("John".to_string()))
    );
}

#[test]
fn test_search_all_and_selected() {
    let mut shell = shell();
    shell
        .execute("add Mary, Database=70, Mathematics=90")
        .unwrap();

    let Ok(Response::Marks { marks, selected, .. }) = shell.execute("search Mary") else {
        panic!("expected marks");
    };
    assert!(!selected);
    assert_eq!(marks.len(), 2);

    // Courses the student does not take are left out
    let Ok(Response::Marks { marks, selected, .. }) =
        shell.execute("search Mary, Mathematics, System Design")
    else {
        panic!("expected marks");
    };
    assert!(selected);
    assert_eq!(marks.into_iter().collect::<Vec<_>>(), vec![("Mathematics".to_string(), 90)]);

    assert_eq!(
        shell.execute("search Mar"),
        Err(ShellError::StudentNotFound("Mar".to_string()))
    );
}

#[test]
fn test_list_ranking_and_no_data() {
    let mut shell = shell();
    shell.execute("add C, Database=90").unwrap();
    shell.execute("add A, Database=70").unwrap();
    shell.execute("add B, Database=90").unwrap();

    let Ok(Response::Ranking { ranking, show_mean }) = shell.execute("list Database") else {
        panic!("expected ranking");
    };
    assert!(show_mean);
    assert_eq!(ranking.lines(), vec!["90\tB", "90\tC", "70\tA"]);
    assert_eq!(ranking.mean, 83);

    assert_eq!(
        shell.execute("list Mathematics"),
        Ok(Response::NoData {
            course: "Mathematics".to_string(),
        })
    );
}

#[test]
fn test_text_session() {
    let mut config = GradesConfig::default();
    config.shell.prompt = String::new();

    let output = run_session(
        &config,
        "add John, Database=70\n\
         add Joan, Database=91\n\
         add Paul, Physics=50\n\
         list Database\n\
         quit\n\
         add Ignored, Database=1\n",
    );

    assert_eq!(
        output,
        "Student John added to the database with 1 modules.\n\
         Student Joan added to the database with 1 modules.\n\
         Course not found: Physics\n\
         The average for the Database course is 80\n\
         91\tJoan\n\
         70\tJohn\n\
         Bye!\n"
    );
}

#[test]
fn test_json_session() {
    let mut config = GradesConfig::default();
    config.shell.prompt = String::new();
    config.shell.output = OutputFormat::Json;

    let output = run_session(&config, "add John, Database=70\n\nsearch Nobody\n");
    let lines: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["result"], "added");
    assert_eq!(lines[0]["courses"], 1);
    assert_eq!(lines[1]["error"], "Student Nobody not found.");
}

#[test]
fn test_session_ends_at_end_of_input() {
    let output = run_session(&GradesConfig::default(), "courses\n");
    assert!(output.starts_with("grades> Available courses: Database, Data Structure"));
    assert!(output.ends_with("grades> "));
}

#[test]
fn test_case_insensitive_session() {
    let mut config = GradesConfig::default();
    config.trie.case_sensitive = false;
    let mut shell = Shell::new(&config);

    shell.execute("add Mary, Database=70").unwrap();
    assert_eq!(
        shell.execute("delete MARY"),
        Ok(Response::Removed {
            name: "MARY".to_string(),
        })
    );
}
