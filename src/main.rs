use anyhow::Result;

use beach_ranking::cli::Command;
use beach_ranking::{handle_ranking, handle_serve, interpret};

fn main() {
    load_env();
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn load_env() {
    dotenvy::dotenv().ok();
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Ranking { group, page, page_size } => handle_ranking(group, *page, *page_size),
    }
}
