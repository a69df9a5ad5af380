use clap::{App, AppSettings, Arg, ArgMatches, ErrorKind};
use log::{info, LevelFilter};
use std::default;
use std::ffi::OsString;
use thiserror::Error;

use rpsls_core::{DEFAULT_TARGET_SCORE, MAX_TARGET_SCORE, MIN_TARGET_SCORE};

/// Launch configuration rejected before any match is created.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("The target score must be between 1 and 10 (got {0})")]
    TargetScore(i64),
    #[error("{flag} expects a whole number (got '{value}')")]
    NotANumber { flag: &'static str, value: String },
    #[error(transparent)]
    Clap(#[from] clap::Error),
}

impl ConfigError {
    /// Help and version requests surface as clap errors but are not failures
    pub fn is_informational(&self) -> bool {
        match self {
            Self::Clap(e) => {
                e.kind == ErrorKind::HelpDisplayed || e.kind == ErrorKind::VersionDisplayed
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Play,
    Rules,
    Demo,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub target_score: u32,
    pub rules_only: bool,
    pub demo: bool,
    pub fast: bool,
    pub seed: Option<u64>,
    pub verbose: bool,
}

impl CliConfig {
    /// Reads the process arguments
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_args(std::env::args_os())
    }

    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = app().get_matches_from_safe(args)?;

        let target_score = parse_target_score(&args)?;
        let seed = match args.value_of("SEED") {
            Some(value) => Some(value.parse::<u64>().map_err(|_| ConfigError::NotANumber {
                flag: "--seed",
                value: value.to_owned(),
            })?),
            None => None,
        };

        Ok(Self {
            target_score,
            rules_only: args.is_present("RULES"),
            demo: args.is_present("DEMO"),
            fast: args.is_present("FAST"),
            seed,
            verbose: args.is_present("VERBOSE"),
        })
    }

    /// Rules win over demo, demo wins over playing
    pub fn mode(&self) -> Mode {
        if self.rules_only {
            Mode::Rules
        } else if self.demo {
            Mode::Demo
        } else {
            Mode::Play
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }

    pub fn log(&self) {
        info!("[Config]");

        let mut default = false;
        if self == &CliConfig::default() {
            default = true;
        }

        info!("Default: {}", default);
        info!("| TARGET_SCORE: {}", self.target_score);
        info!("| MODE: {:?}", self.mode());
        info!("| FAST: {}", self.fast);
        info!("| SEED: {:?}", self.seed);
    }
}

impl default::Default for CliConfig {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            rules_only: false,
            demo: false,
            fast: false,
            seed: None,
            verbose: false,
        }
    }
}

fn app() -> App<'static, 'static> {
    let version = env!("CARGO_PKG_VERSION");
    let authors = env!("CARGO_PKG_AUTHORS");

    App::new("Rock, Paper, Scissors, Lizard, Spock")
        .version(version)
        .author(authors)
        .about("Play Rock, Paper, Scissors, Lizard, Spock against the computer")
        .setting(AppSettings::AllowNegativeNumbers)
        .arg(
            Arg::with_name("SCORE")
                .short("s")
                .long("score")
                .takes_value(true)
                .value_name("N")
                .default_value("3")
                .help("Points needed to win the match (1 to 10)"),
        )
        .arg(
            Arg::with_name("RULES")
                .short("r")
                .long("rules")
                .help("If specified, the rules are printed and the program exits"),
        )
        .arg(
            Arg::with_name("DEMO")
                .short("d")
                .long("demo")
                .help("If specified, every winning combination and the full outcome table are printed"),
        )
        .arg(
            Arg::with_name("FAST")
                .short("f")
                .long("fast")
                .help("If specified, the next round starts without asking to continue"),
        )
        .arg(
            Arg::with_name("SEED")
                .long("seed")
                .takes_value(true)
                .value_name("N")
                .help("Seeds the computer's choices for a reproducible match"),
        )
        .arg(
            Arg::with_name("VERBOSE")
                .short("v")
                .long("verbose")
                .help("If specified, debug logging is written to stderr"),
        )
}

fn parse_target_score(args: &ArgMatches) -> Result<u32, ConfigError> {
    let value = args.value_of("SCORE").unwrap_or("3");
    let score = value
        .trim()
        .parse::<i64>()
        .map_err(|_| ConfigError::NotANumber {
            flag: "--score",
            value: value.to_owned(),
        })?;

    if score < MIN_TARGET_SCORE as i64 || score > MAX_TARGET_SCORE as i64 {
        return Err(ConfigError::TargetScore(score));
    }
    Ok(score as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliConfig, ConfigError> {
        let mut full = vec!["rpsls"];
        full.extend_from_slice(args);
        CliConfig::from_args(full)
    }

    #[test]
    fn defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.target_score, 3);
        assert_eq!(config.mode(), Mode::Play);
        assert_eq!(config.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn target_scores_in_range() {
        for score in 1..=10 {
            let text = score.to_string();
            let config = parse(&["--score", text.as_str()]).unwrap();
            assert_eq!(config.target_score, score);
        }
        assert_eq!(parse(&["-s", "7"]).unwrap().target_score, 7);
        assert_eq!(parse(&["--score=2"]).unwrap().target_score, 2);
    }

    #[test]
    fn target_scores_out_of_range() {
        let tests: Vec<(&str, i64)> = vec![("0", 0), ("11", 11), ("-1", -1), ("500", 500)];
        for (test, expected) in tests {
            match parse(&["--score", test]) {
                Err(ConfigError::TargetScore(n)) => assert_eq!(n, expected),
                other => panic!("{} => {:?}", test, other),
            }
        }
    }

    #[test]
    fn malformed_numbers() {
        for test in vec!["abc", "2.5", "3x"] {
            match parse(&["--score", test]) {
                Err(ConfigError::NotANumber { flag, .. }) => assert_eq!(flag, "--score"),
                other => panic!("{:?} => {:?}", test, other),
            }
        }
        match parse(&["--seed", "soon"]) {
            Err(ConfigError::NotANumber { flag, value }) => {
                assert_eq!(flag, "--seed");
                assert_eq!(value, "soon");
            }
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn modes_and_flags() {
        assert_eq!(parse(&["--rules"]).unwrap().mode(), Mode::Rules);
        assert_eq!(parse(&["-d"]).unwrap().mode(), Mode::Demo);
        assert_eq!(parse(&["--demo", "--rules"]).unwrap().mode(), Mode::Rules);

        let config = parse(&["-f", "-v", "--seed", "42"]).unwrap();
        assert!(config.fast);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn unknown_flags_are_errors() {
        let err = parse(&["--lives", "3"]).unwrap_err();
        assert!(!err.is_informational());
        assert!(ConfigError::TargetScore(0).to_string().contains("between 1 and 10"));
    }

    #[test]
    fn help_is_informational() {
        let err = parse(&["--help"]).unwrap_err();
        assert!(err.is_informational());
    }
}
