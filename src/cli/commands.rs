//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - name: generate a validated fake full name
//! - check-locale: run the locale-record validator
//! - check-name: run the full-name validator
//! - echo: guard an identity function over dynamic arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vetted - run functions behind input/result validation with retries
#[derive(Parser, Debug)]
#[command(name = "vetted")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute (defaults to `name`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a fake full name for a locale, retrying until it validates
    Name {
        /// Locale tag (e.g. en_GB, ru_RU)
        #[arg(short, long)]
        locale: Option<String>,

        /// Retries after the first invalid name; negative retries forever
        #[arg(short, long, allow_negative_numbers = true)]
        retries: Option<i64>,

        /// Name to print when every attempt is invalid
        #[arg(short, long)]
        fallback: Option<String>,

        /// Seed for deterministic output
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Check a JSON locale record such as '{"locale": "ru_RU"}'
    CheckLocale {
        /// JSON record
        record: String,
    },

    /// Check that a string is a capitalized full name
    CheckName {
        /// Name to check
        name: String,
    },

    /// Call an identity function over the given arguments behind a guard
    Echo {
        /// Positional arguments (parsed as JSON when possible)
        args: Vec<String>,

        /// Named argument as name=value (repeatable)
        #[arg(short, long = "kwarg")]
        kwargs: Vec<String>,

        /// Reject every result to exercise retries
        #[arg(long)]
        reject: bool,

        /// Retries after the first rejected result; negative retries forever
        #[arg(short, long, allow_negative_numbers = true)]
        retries: Option<i64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::try_parse_from(["vetted"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["vetted", "-v"]).unwrap();
        assert!(cli.is_verbose());
    }

    #[test]
    fn test_cli_config_option() {
        let cli = Cli::try_parse_from(["vetted", "-c", "/path/to/vetted.yml"]).unwrap();
        assert_eq!(cli.config.as_ref(), Some(&PathBuf::from("/path/to/vetted.yml")));
    }

    #[test]
    fn test_name_defaults() {
        let cli = Cli::try_parse_from(["vetted", "name"]).unwrap();
        match cli.command {
            Some(Commands::Name {
                locale,
                retries,
                fallback,
                seed,
            }) => {
                assert!(locale.is_none());
                assert!(retries.is_none());
                assert!(fallback.is_none());
                assert!(seed.is_none());
            }
            _ => panic!("Expected name command"),
        }
    }

    #[test]
    fn test_name_with_options() {
        let cli = Cli::try_parse_from([
            "vetted", "name", "-l", "it_IT", "-r", "3", "-f", "Mario Rossi", "-s", "9",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Name {
                locale,
                retries,
                fallback,
                seed,
            }) => {
                assert_eq!(locale.as_deref(), Some("it_IT"));
                assert_eq!(retries, Some(3));
                assert_eq!(fallback.as_deref(), Some("Mario Rossi"));
                assert_eq!(seed, Some(9));
            }
            _ => panic!("Expected name command"),
        }
    }

    #[test]
    fn test_name_negative_retries() {
        let cli = Cli::try_parse_from(["vetted", "name", "--retries", "-1"]).unwrap();
        match cli.command {
            Some(Commands::Name { retries, .. }) => assert_eq!(retries, Some(-1)),
            _ => panic!("Expected name command"),
        }
    }

    #[test]
    fn test_check_locale_command() {
        let cli = Cli::try_parse_from(["vetted", "check-locale", r#"{"locale": "ru_RU"}"#]).unwrap();
        match cli.command {
            Some(Commands::CheckLocale { record }) => {
                assert_eq!(record, r#"{"locale": "ru_RU"}"#);
            }
            _ => panic!("Expected check-locale command"),
        }
    }

    #[test]
    fn test_check_name_command() {
        let cli = Cli::try_parse_from(["vetted", "check-name", "Andy Miller"]).unwrap();
        match cli.command {
            Some(Commands::CheckName { name }) => assert_eq!(name, "Andy Miller"),
            _ => panic!("Expected check-name command"),
        }
    }

    #[test]
    fn test_echo_command() {
        let cli = Cli::try_parse_from(["vetted", "echo", "Привет", "-k", "x=2", "--reject"]).unwrap();
        match cli.command {
            Some(Commands::Echo {
                args,
                kwargs,
                reject,
                retries,
            }) => {
                assert_eq!(args, vec!["Привет".to_string()]);
                assert_eq!(kwargs, vec!["x=2".to_string()]);
                assert!(reject);
                assert!(retries.is_none());
            }
            _ => panic!("Expected echo command"),
        }
    }

    #[test]
    fn test_help_works() {
        // Verify help doesn't panic
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_flag() {
        let result = Cli::try_parse_from(["vetted", "--version"]);
        // Version flag causes early exit with error (expected)
        assert!(result.is_err());
    }
}
