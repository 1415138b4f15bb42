//! CLI module for vetted - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands that drive the guard
//! against the bundled name and locale validators.

pub mod commands;

pub use commands::Cli;
