//! Interactive text-menu entry point.
//!
//! # Responsibility
//! - Bootstrap logging, persistence, and the tracking service.
//! - Treat a failed startup load or a failed save as fatal; silent data
//!   loss is never acceptable for the persistence layer.

mod shell;

use log::error;
use officetrack_core::{JsonStoreRepository, TrackerService};
use shell::ShellError;
use std::path::Path;
use std::process::ExitCode;

/// Persisted document, fixed next to the process working directory.
const DATA_FILE: &str = "data.json";
/// Diagnostic logs, kept out of the interactive console.
const LOG_DIR: &str = "logs";

fn main() -> ExitCode {
    if let Err(err) = officetrack_core::init_logging(Path::new(LOG_DIR)) {
        eprintln!("warning: file logging disabled: {err}");
    }

    let repo = JsonStoreRepository::new(DATA_FILE);
    let mut service = match TrackerService::load(repo) {
        Ok(service) => service,
        Err(err) => {
            eprintln!("error: could not load {DATA_FILE}: {err}");
            return ExitCode::FAILURE;
        }
    };

    match shell::run(&mut service) {
        // A closed input stream ends the session like the exit choice does.
        Ok(()) | Err(ShellError::Eof) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=shell_aborted module=cli status=error detail={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
