use log::{debug, info};
use std::process;

use rpsls_cli::{CliConfig, ConfigError, Mode};
use rpsls_core::MatchState;

mod demo;
mod display;
mod error;
mod game;
mod log_init;
mod terminal;
mod util;
use error::RpslsError;
use game::GameSession;
use terminal::Terminal;
use util::RandomChoice;

fn run(config: &CliConfig) -> Result<(), RpslsError> {
    let mut terminal = Terminal::new();

    match config.mode() {
        Mode::Rules => demo::print_rules(&mut terminal)?,
        Mode::Demo => demo::run_demo(&mut terminal)?,
        Mode::Play => {
            // The read in progress cannot be cancelled, so the handler ends the process itself
            ctrlc::set_handler(|| {
                info!("Interrupted by user");
                println!("\n{}", display::interrupted());
                process::exit(0);
            })?;

            let state = MatchState::new(config.target_score)?;
            let source = RandomChoice::new(config.seed);
            let mut session = GameSession::new(terminal, source, state).ask_to_continue(!config.fast);
            session.run()?;
        }
    }

    Ok(())
}

fn exit_with_config_error(err: ConfigError) -> ! {
    match err {
        // Prints help or version with status 0, usage errors with status 1
        ConfigError::Clap(e) => e.exit(),
        e => {
            eprintln!("{}", display::error(&format!("Error: {}", e)));
            process::exit(1);
        }
    }
}

fn main() {
    let config = CliConfig::new().unwrap_or_else(|e| exit_with_config_error(e));

    if let Err(e) = log_init::init(config.log_level()) {
        eprintln!("{}", RpslsError::from(e));
    }
    info!("Starting Rock, Paper, Scissors, Lizard, Spock...");
    config.log();

    let code = match run(&config) {
        Ok(()) => 0,
        Err(e) => {
            debug!("{:?}", e);
            eprintln!("{}", display::error(&fault_message(&e)));
            1
        }
    };
    process::exit(code);
}

/// The single stderr line for a fault that ends the process
fn fault_message(err: &RpslsError) -> String {
    format!("Unexpected error: {}", err)
}
