//! Terminal front end for Realodex.
//!
//! # Responsibility
//! - Read one command per line from stdin and print its outcome.
//! - Print the displayed person list after commands that change it.
//!
//! Usage: `realodex [CONFIG_PATH]` (defaults to `config.json`).

use clap::Parser;
use realodex_core::{
    init_logging, load_config, CommandResult, CommandService, JsonPersonStorage, ServiceError,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Client book for real-estate agents.
#[derive(Debug, Parser)]
#[command(name = "realodex", version)]
struct Cli {
    /// JSON config file; a missing file means defaults.
    #[arg(value_name = "CONFIG_PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let config = load_config(&cli.config).map_err(|err| err.to_string())?;

    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(&config.log_level, log_dir).map_err(|err| err.to_string())?;
    }

    let storage = JsonPersonStorage::new(config.data_file.clone());
    let mut service = CommandService::open(storage).map_err(|err| err.to_string())?;
    println!(
        "Realodex {} - {} persons loaded from {}",
        realodex_core::core_version(),
        service.model().persons().len(),
        config.data_file.display()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush().map_err(|err| err.to_string())?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|err| err.to_string())?;
        if read == 0 {
            log::info!("event=session_close module=cli status=eof");
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        match service.execute(&line) {
            Ok(result) => {
                if show_result(&service, &result) {
                    return Ok(());
                }
            }
            Err(ServiceError::SaveFailed { result, source }) => {
                eprintln!("Could not save data: {source}");
                if show_result(&service, &result) {
                    return Ok(());
                }
            }
            Err(err) => println!("{err}"),
        }
    }
}

/// Prints feedback and the displayed list; returns whether to exit.
fn show_result(service: &CommandService<JsonPersonStorage>, result: &CommandResult) -> bool {
    println!("{}", result.feedback);
    if result.exit {
        return true;
    }
    if !result.show_help {
        print_persons(service);
    }
    false
}

fn print_persons(service: &CommandService<JsonPersonStorage>) {
    for (idx, person) in service.filtered_persons().iter().enumerate() {
        println!("{:>3}. {person}", idx + 1);
    }
}
