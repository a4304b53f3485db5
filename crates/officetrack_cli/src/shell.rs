//! Nested text menus driving the tracking service.
//!
//! # Responsibility
//! - Translate user-entered strings, dates, and 1-based indices into
//!   service calls; render entity lists back to the console.
//!
//! # Invariants
//! - Malformed dates re-prompt until valid; they never reach the core.
//! - Non-numeric and out-of-range indices both abort the operation with
//!   one uniform message and return to the enclosing menu.
//! - Persistence failures abort the session; index validation stays local.

use chrono::NaiveDate;
use officetrack_core::{Office, StoreRepository, TrackerError, TrackerService};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_FORMAT_MESSAGE: &str = "Date format must be yyyy-mm-dd.";
const INVALID_NUMBER_MESSAGE: &str = "Invalid number.";

/// Result type used by shell interactions.
pub type ShellResult<T> = Result<T, ShellError>;

/// Errors that abort the interactive session.
#[derive(Debug)]
pub enum ShellError {
    /// Standard input reached end of stream.
    Eof,
    /// Reading from standard input failed.
    Io(std::io::Error),
    /// A service call failed; with indices validated at the prompt, this
    /// is a persistence failure in practice.
    Tracker(TrackerError),
}

impl Display for ShellError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eof => write!(f, "input stream closed"),
            Self::Io(err) => write!(f, "could not read input: {err}"),
            Self::Tracker(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ShellError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Eof => None,
            Self::Io(err) => Some(err),
            Self::Tracker(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ShellError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<TrackerError> for ShellError {
    fn from(value: TrackerError) -> Self {
        Self::Tracker(value)
    }
}

/// Runs the main menu loop until the user exits.
pub fn run<R: StoreRepository>(service: &mut TrackerService<R>) -> ShellResult<()> {
    loop {
        println!("\n--- Main Menu ---");
        println!("1. Create new office");
        println!("2. View offices and projects");
        println!("3. Edit office name");
        println!("4. Exit");

        match prompt("Your choice: ")?.as_str() {
            "1" => {
                let name = prompt("Office name: ")?;
                let office = service.create_office(name)?;
                office_menu(service, office)?;
            }
            "2" => view_offices(service)?,
            "3" => edit_office_name(service)?,
            "4" => {
                println!("Exiting...");
                return Ok(());
            }
            _ => println!("Invalid option."),
        }
    }
}

fn view_offices<R: StoreRepository>(service: &mut TrackerService<R>) -> ShellResult<()> {
    if service.offices().is_empty() {
        println!("No offices found.");
        return Ok(());
    }
    list_offices(service.offices());

    let input = prompt("Office number (leave empty to go back): ")?;
    if input.is_empty() {
        return Ok(());
    }
    match parse_index(&input, service.offices().len()) {
        Some(office) => office_menu(service, office),
        None => {
            println!("{INVALID_NUMBER_MESSAGE}");
            Ok(())
        }
    }
}

fn edit_office_name<R: StoreRepository>(service: &mut TrackerService<R>) -> ShellResult<()> {
    if service.offices().is_empty() {
        println!("No offices found.");
        return Ok(());
    }
    list_offices(service.offices());

    let Some(office) = prompt_index("Office number: ", service.offices().len())? else {
        return Ok(());
    };
    let name = prompt("New office name (leave empty to cancel): ")?;
    if name.is_empty() {
        return Ok(());
    }
    service.rename_office(office, name)?;
    Ok(())
}

fn office_menu<R: StoreRepository>(
    service: &mut TrackerService<R>,
    office: usize,
) -> ShellResult<()> {
    loop {
        println!("\n--- Office: {} ---", service.office(office)?.name);
        println!("1. Add project");
        println!("2. Add stage to project");
        println!("3. Set actual date for stage");
        println!("4. View projects");
        println!("5. Edit project");
        println!("6. Back");

        match prompt("Your choice: ")?.as_str() {
            "1" => {
                let name = prompt("Project name: ")?;
                let description = prompt("Project description (optional): ")?;
                service.add_project(office, name, description)?;
            }
            "2" => add_stage(service, office)?,
            "3" => set_actual_date(service, office)?,
            "4" => list_projects(service.office(office)?, true),
            "5" => edit_project(service, office)?,
            "6" => return Ok(()),
            _ => println!("Invalid option."),
        }
    }
}

fn add_stage<R: StoreRepository>(
    service: &mut TrackerService<R>,
    office: usize,
) -> ShellResult<()> {
    let projects = &service.office(office)?.projects;
    if projects.is_empty() {
        println!("No projects found.");
        return Ok(());
    }
    list_projects(service.office(office)?, false);

    let Some(project) = prompt_index("Project number: ", service.office(office)?.projects.len())?
    else {
        return Ok(());
    };
    let name = prompt("Stage name: ")?;
    let planned_date = prompt_date("Planned date (yyyy-mm-dd): ")?;
    service.add_stage(office, project, name, planned_date)?;
    Ok(())
}

fn set_actual_date<R: StoreRepository>(
    service: &mut TrackerService<R>,
    office: usize,
) -> ShellResult<()> {
    let projects = &service.office(office)?.projects;
    if projects.is_empty() {
        println!("No projects available.");
        return Ok(());
    }
    list_projects(service.office(office)?, false);

    let Some(project) = prompt_index("Project number: ", service.office(office)?.projects.len())?
    else {
        return Ok(());
    };

    let stages = &service.office(office)?.projects[project].stages;
    if stages.is_empty() {
        println!("No stages available.");
        return Ok(());
    }
    for (position, stage) in stages.iter().enumerate() {
        println!("{}. {stage}", position + 1);
    }

    let stage_count = service.office(office)?.projects[project].stages.len();
    let Some(stage) = prompt_index("Stage number: ", stage_count)? else {
        return Ok(());
    };
    let actual_date = prompt_date("Actual date (yyyy-mm-dd): ")?;
    service.set_actual_date(office, project, stage, actual_date)?;
    Ok(())
}

fn edit_project<R: StoreRepository>(
    service: &mut TrackerService<R>,
    office: usize,
) -> ShellResult<()> {
    let projects = &service.office(office)?.projects;
    if projects.is_empty() {
        println!("No projects found.");
        return Ok(());
    }
    list_projects(service.office(office)?, false);

    let Some(project) = prompt_index("Project number: ", service.office(office)?.projects.len())?
    else {
        return Ok(());
    };
    let name = prompt("New name (leave empty to keep): ")?;
    let description = prompt("New description (leave empty to keep): ")?;
    service.edit_project(office, project, &name, &description)?;
    Ok(())
}

fn list_offices(offices: &[Office]) {
    for (position, office) in offices.iter().enumerate() {
        println!(
            "{}. Office: {} | Projects: {}",
            position + 1,
            office.name,
            office.projects.len()
        );
        for (project_position, project) in office.projects.iter().enumerate() {
            println!(
                "   {}. {} ({} stages)",
                project_position + 1,
                project.name,
                project.stages.len()
            );
        }
    }
}

fn list_projects(office: &Office, show_stages: bool) {
    for (position, project) in office.projects.iter().enumerate() {
        println!("{}. {}", position + 1, project.name);
        if show_stages {
            for stage in &project.stages {
                println!("     - {stage}");
            }
        }
    }
}

/// Prompts and reads one input line with the trailing newline removed.
fn prompt(label: &str) -> ShellResult<String> {
    print!("{label}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(ShellError::Eof);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Prompts until the user enters a valid `yyyy-mm-dd` date.
fn prompt_date(label: &str) -> ShellResult<NaiveDate> {
    loop {
        let input = prompt(label)?;
        match NaiveDate::parse_from_str(&input, DATE_FORMAT) {
            Ok(date) => return Ok(date),
            Err(_) => println!("{DATE_FORMAT_MESSAGE}"),
        }
    }
}

/// Prompts for a 1-based index; reports bad input and returns `None` so
/// the caller aborts back to its menu.
fn prompt_index(label: &str, len: usize) -> ShellResult<Option<usize>> {
    let input = prompt(label)?;
    let index = parse_index(&input, len);
    if index.is_none() {
        println!("{INVALID_NUMBER_MESSAGE}");
    }
    Ok(index)
}

/// Converts 1-based display input into a 0-based index within `len`.
fn parse_index(input: &str, len: usize) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(number) if (1..=len).contains(&number) => Some(number - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::parse_index;

    #[test]
    fn parse_index_accepts_one_based_range() {
        assert_eq!(parse_index("1", 3), Some(0));
        assert_eq!(parse_index("3", 3), Some(2));
    }

    #[test]
    fn parse_index_rejects_out_of_range_values() {
        assert_eq!(parse_index("0", 3), None);
        assert_eq!(parse_index("4", 3), None);
        assert_eq!(parse_index("1", 0), None);
    }

    #[test]
    fn parse_index_rejects_non_numeric_input() {
        assert_eq!(parse_index("abc", 3), None);
        assert_eq!(parse_index("", 3), None);
        assert_eq!(parse_index("-1", 3), None);
    }
}
