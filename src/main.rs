use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

use vetted::args::{CallArgs, parse_value};
use vetted::names::FakeNameGenerator;
use vetted::validation::locale::{locale_record, parse_record};
use vetted::validation::{AcceptAll, FullNameValidator, LocaleValidator, Validator};
use vetted::{CallReport, Guard, RetryBudget};

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::Config;

fn setup_logging(log_level: Option<&str>) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vetted")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("vetted.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let env = env_logger::Env::default().default_filter_or(log_level.unwrap_or("info"));
    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None => handle_name_command(None, None, None, None, cli, config),
        Some(Commands::Name {
            locale,
            retries,
            fallback,
            seed,
        }) => handle_name_command(locale.as_deref(), *retries, fallback.as_deref(), *seed, cli, config),
        Some(Commands::CheckLocale { record }) => handle_check_locale_command(record),
        Some(Commands::CheckName { name }) => handle_check_name_command(name),
        Some(Commands::Echo {
            args,
            kwargs,
            reject,
            retries,
        }) => handle_echo_command(args, kwargs, *reject, *retries, cli, config),
    }
}

fn resolve_budget(retries: Option<i64>, config: &Config) -> RetryBudget {
    retries
        .map(RetryBudget::from_signed)
        .unwrap_or_else(|| config.retry.to_budget())
}

/// One-line summary of a call, with the budget in its signed form (-1 = unbounded)
fn format_report(budget: RetryBudget, report: &CallReport) -> String {
    format!(
        "budget {}: {} invocation(s), {} invalid result(s){}",
        budget.as_signed(),
        report.invocations,
        report.failures,
        if report.used_fallback { ", fallback used" } else { "" }
    )
}

fn handle_name_command(
    locale: Option<&str>,
    retries: Option<i64>,
    fallback: Option<&str>,
    seed: Option<u64>,
    cli: &Cli,
    config: &Config,
) -> Result<()> {
    let locale = locale.unwrap_or(&config.names.default_locale);
    let budget = resolve_budget(retries, config);
    info!("Generating name for locale {} with {}", locale, budget);

    let generator = match seed.or(config.names.seed) {
        Some(seed) => FakeNameGenerator::seeded(seed),
        None => FakeNameGenerator::new(),
    };

    let mut guard = Guard::new(LocaleValidator::new(), FullNameValidator::new()).retry_budget(budget);
    if let Some(name) = fallback.map(str::to_string).or_else(|| config.retry.fallback_name.clone()) {
        guard = guard.fallback(move || name.clone());
    }
    let guarded = guard.wrap(|record: &Value| generator.full_name(record));

    let (result, report) = guarded.call_with_report(locale_record(locale));
    let name = result.context(format!("Failed to generate a name for locale {}", locale))?;

    println!("{}", name.green());
    if cli.is_verbose() {
        println!("  {}", format_report(budget, &report));
    }
    Ok(())
}

fn handle_check_locale_command(record: &str) -> Result<()> {
    let record = parse_record(record).context("Locale record is not valid JSON")?;
    if LocaleValidator::new().validate(&record) {
        println!("{} {}", "Valid:".green(), record);
    } else {
        println!("{} {}", "Invalid:".red(), record);
    }
    Ok(())
}

fn handle_check_name_command(name: &str) -> Result<()> {
    let validator = FullNameValidator::new();
    if validator.is_match(name) {
        println!("{} {}", "Valid:".green(), name);
    } else {
        println!("{} {}", "Invalid:".red(), name);
    }
    Ok(())
}

fn handle_echo_command(
    args: &[String],
    kwargs: &[String],
    reject: bool,
    retries: Option<i64>,
    cli: &Cli,
    config: &Config,
) -> Result<()> {
    let mut call_args = CallArgs::new();
    for arg in args {
        call_args = call_args.arg(parse_value(arg));
    }
    for kwarg in kwargs {
        let (name, value) = CallArgs::parse_kwarg(kwarg)?;
        call_args = call_args.kwarg(name, value);
    }
    info!("Echoing {}", call_args);

    let budget = resolve_budget(retries, config);
    let guarded = Guard::new(AcceptAll, move |_: &CallArgs| !reject)
        .retry_budget(budget)
        .wrap(|args: &CallArgs| args.clone());

    let (result, report) = guarded.call_with_report(call_args);
    let echoed = result.context("Echo result rejected")?;

    println!("{} {}", "Result:".green(), echoed);
    if cli.is_verbose() {
        println!("  {}", format_report(budget, &report));
    }
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Setup logging once the configured level is known
    setup_logging(config.log_level.as_deref()).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
