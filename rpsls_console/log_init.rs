use log::{LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

/// Logs go to stderr so they never interleave with the game on stdout.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])
}
