//! Anagram Solver - CLI
//!
//! Prints every dictionary word that can be spelled from the given letters,
//! one per line, shortest first.

use anagram_solver::{
    commands::{SolveConfig, solve},
    output::{print_summary, print_words},
};
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, builder::NonEmptyStringValueParser};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "anagram_solver",
    about = "Find every dictionary word that can be spelled from a set of letters",
    version,
    author
)]
struct Cli {
    /// Dictionary file with one word per line
    #[arg(short, long, value_name = "PATH")]
    dict: PathBuf,

    /// Letters to build words from (repeats allowed)
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    letters: String,

    /// Print a summary to stderr after the word list
    #[arg(long)]
    summary: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

impl From<&Cli> for SolveConfig {
    fn from(cli: &Cli) -> Self {
        Self::new(&cli.dict, &cli.letters)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cli.log_level())
        .init();

    let config = SolveConfig::from(&cli);
    let result = solve(&config).context("could not build the dictionary")?;

    print_words(&result.words).context("failed to write results")?;
    if cli.summary {
        print_summary(&result);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parses_required_flags() {
        let cli = Cli::try_parse_from(["anagram_solver", "--dict", "words.txt", "--letters", "cat"])
            .unwrap();
        let config = SolveConfig::from(&cli);

        assert_eq!(config.dictionary_path, PathBuf::from("words.txt"));
        assert_eq!(config.letters, "cat");
        assert!(!cli.summary);
        assert_eq!(cli.log_level(), LevelFilter::WARN);
    }

    #[test]
    fn short_flags() {
        let cli = Cli::try_parse_from(["anagram_solver", "-d", "w.txt", "-l", "abc", "-vv"]).unwrap();
        assert_eq!(cli.letters, "abc");
        assert_eq!(cli.log_level(), LevelFilter::DEBUG);
    }

    #[test]
    fn missing_letters_is_usage_error() {
        let err = Cli::try_parse_from(["anagram_solver", "--dict", "words.txt"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn empty_letters_is_usage_error() {
        let err = Cli::try_parse_from(["anagram_solver", "--dict", "words.txt", "--letters", ""])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn empty_dict_is_usage_error() {
        let result = Cli::try_parse_from(["anagram_solver", "--dict", "", "--letters", "cat"]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_dict_is_usage_error() {
        let err = Cli::try_parse_from(["anagram_solver", "--letters", "cat"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn verbosity_saturates_at_trace() {
        let cli =
            Cli::try_parse_from(["anagram_solver", "-d", "w", "-l", "a", "-vvvvv"]).unwrap();
        assert_eq!(cli.log_level(), LevelFilter::TRACE);
    }
}
