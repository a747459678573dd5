use anyhow::Context;
use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use lpwalk_cli::args::Cli;
use lpwalk_cli::config::{AppConfig, ConfigManager};
use lpwalk_cli::error::{CliError, CliResult, ExitCode};
use lpwalk_cli::orchestrators::{PrintOrchestrator, PrintRequest};
use lpwalk_cli::output;
use lpwalk_cli::prompt::TerminalPrompt;
use lpwalk_cli::terminal;
use lpwalk_core::CupsSpooler;
use std::io;

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on debug flag
    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .filter_module("lpwalk_core", log::LevelFilter::Debug)
            .filter_module("lpwalk_cli", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
        eprintln!("Debug logging enabled");
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprint!("{}", error.format_for_user(cli.debug));
            error.exit_code()
        }
    };

    std::process::exit(code as i32);
}

fn run(cli: &Cli) -> CliResult<ExitCode> {
    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return Ok(ExitCode::Success);
    }

    let manager = match &cli.config {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let config = manager.load()?;

    if !config.output.color_enabled || !terminal::supports_color() {
        colored::control::set_override(false);
    }

    if cli.show_config {
        eprintln!("# {}", manager.get_config_path().display());
        print!("{}", config.to_toml()?);
        return Ok(ExitCode::Success);
    }

    let resource = cli
        .resource
        .clone()
        .ok_or_else(|| CliError::misuse("No file or directory given"))?;

    print(cli, &config, resource)
}

fn print(cli: &Cli, config: &AppConfig, resource: std::path::PathBuf) -> CliResult<ExitCode> {
    let spooler = CupsSpooler::new(config.spooler.clone());
    let prompt = TerminalPrompt::new();
    let policy = config.staple_policy();

    let orchestrator = PrintOrchestrator::new(
        &spooler,
        &prompt,
        &policy,
        config.spooler.submit_command.as_str(),
    )
    .with_traversal(config.traversal_options(cli.include_hidden));

    let request = PrintRequest {
        resource,
        printer: cli.printer.clone().or_else(|| config.printer.default.clone()),
        pattern: cli.regex.clone(),
        include_hidden: cli.include_hidden,
        staple: cli.staple,
        dry_run: cli.dry_run,
    };

    let outcome = orchestrator.run(&request)?;

    output::report(
        &outcome,
        cli.verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
    .context("Failed to write report")?;

    Ok(if outcome.is_success() {
        ExitCode::Success
    } else {
        ExitCode::GeneralError
    })
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    generate(shell, &mut cmd, name, &mut io::stdout());
}
