//! Terminal front-end for the project board.
//!
//! # Responsibility
//! - Stand in for the page: prompt for form fields, show alerts, print lists.
//! - Keep all rules in `projboard_core`; this binary only moves text around.
//!
//! Commands typed at the title prompt: `:list`, `:json`, `:quit`.

use log::warn;
use projboard_core::{
    core_version, init_logging, Alert, BoardConfig, MountedBoard, ProjectBoard, SubmissionOutcome,
};
use std::error::Error;
use std::io::{self, BufRead, Write};

/// Alert sink printing to stderr.
struct StderrAlert;

impl Alert for StderrAlert {
    fn alert(&self, message: &str) {
        eprintln!("! {message}");
    }
}

enum Prompted {
    Line(String),
    Eof,
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("projboard_core version={}", core_version());
    setup_logging();

    let board = ProjectBoard::new();
    let mut mounted = board.mount(StderrAlert);
    let stdin = io::stdin();
    let mut lines = stdin.lock();

    loop {
        let title = match prompt(&mut lines, "title")? {
            Prompted::Line(line) => line,
            Prompted::Eof => break,
        };
        match title.trim() {
            ":quit" => break,
            ":list" => {
                print!("{}", mounted.render());
                continue;
            }
            ":json" => {
                println!("{}", serde_json::to_string_pretty(&board.store().projects())?);
                continue;
            }
            _ => {}
        }

        let Prompted::Line(description) = prompt(&mut lines, "description")? else {
            break;
        };
        let Prompted::Line(people) = prompt(&mut lines, "people")? else {
            break;
        };

        submit(&mut mounted, title, description, people);
    }

    Ok(())
}

fn setup_logging() {
    let config = match BoardConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}; file logging disabled");
            return;
        }
    };
    let Some(log_dir) = config.log_dir else {
        return;
    };
    let Some(log_dir) = log_dir.to_str() else {
        eprintln!("log directory is not valid UTF-8; file logging disabled");
        return;
    };
    if let Err(err) = init_logging(config.log_level, log_dir) {
        eprintln!("logging error: {err}; file logging disabled");
    }
}

fn submit(
    mounted: &mut MountedBoard<StderrAlert>,
    title: String,
    description: String,
    people: String,
) {
    mounted.input.set_title(title);
    mounted.input.set_description(description);
    mounted.input.set_people(people);

    match mounted.input.submit() {
        SubmissionOutcome::Accepted => print!("{}", mounted.render()),
        SubmissionOutcome::Rejected => {
            warn!("event=cli_submission module=cli status=rejected");
        }
    }
}

fn prompt(lines: &mut impl BufRead, label: &str) -> io::Result<Prompted> {
    print!("{label}> ");
    io::stdout().flush()?;

    let mut line = String::new();
    if lines.read_line(&mut line)? == 0 {
        return Ok(Prompted::Eof);
    }
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Prompted::Line(line))
}
