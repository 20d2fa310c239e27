//! CLI entrypoint for wanxiang-update
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wanxiang_application::{RunUpdateError, RunUpdateInput, RunUpdateUseCase};
use wanxiang_infrastructure::{
    ConfigLoader, ExternalToolInstaller, FileConfig, FileVersionStore, GitHubReleaseFeed,
};
use wanxiang_presentation::{Cli, ConsoleFormatter, OutputFormat, ProgressReporter, SimpleProgress};

/// Exit status when a track failed
const EXIT_TRACK_FAILED: u8 = 1;
/// Exit status when the run could not start
const EXIT_ABORTED: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match init_logging(cli.verbose, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("error: {:#}", e);
            return ExitCode::from(EXIT_ABORTED);
        }
    };

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(EXIT_ABORTED)
        }
    }
}

/// Initialize logging based on verbosity level; `RUST_LOG` wins when set.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("log file {} has no file name", path.display()))?;
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

async fn run(cli: Cli) -> Result<ExitCode> {
    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    if cli.skip_config && cli.skip_dict {
        bail!("--skip-config and --skip-dict together leave nothing to do");
    }

    let file_config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = file_config.validate();
    for issue in &issues {
        warn!("Config: {}", issue);
    }
    if let Some(issue) = issues.iter().find(|i| i.is_error()) {
        bail!("Invalid configuration: {}", issue);
    }

    info!("Starting wanxiang-update");

    // === Dependency Injection ===
    let updater_config = file_config.to_updater_config();
    let behavior = file_config.behavior();
    let feed = GitHubReleaseFeed::new(
        file_config.feed.api_base.clone(),
        file_config.feed.repository.clone(),
        &behavior,
    )?;
    let installer = ExternalToolInstaller::new(file_config.tools.download, &behavior)?
        .with_wget(file_config.tools.wget.clone())
        .with_seven_zip(file_config.tools.seven_zip.clone());
    let missing = installer.missing_tools();
    if !missing.is_empty() && !cli.dry_run {
        warn!("Required tools not found on PATH: {}", missing.join(", "));
    }
    let store = FileVersionStore::new(updater_config.marker_path.clone());

    let use_case = RunUpdateUseCase::new(
        Arc::new(feed),
        Arc::new(installer),
        Arc::new(store),
        updater_config,
    );

    let mut input = RunUpdateInput::new().with_dry_run(cli.dry_run);
    if cli.skip_config {
        input = input.without_configuration();
    }
    if cli.skip_dict {
        input = input.without_dictionary();
    }

    // Progress goes to stderr; stdout carries only the final report
    let result = if cli.quiet {
        use_case.execute(input).await
    } else if cli.verbose > 0 {
        // Spinners and log lines fight over the terminal
        use_case.execute_with_progress(input, &SimpleProgress).await
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await
    };

    let output = match result {
        Ok(output) => output,
        Err(RunUpdateError::LocalState(e)) => {
            bail!("{} (create it with the currently installed version, e.g. v1.0.0)", e)
        }
        Err(e) => return Err(e.into()),
    };

    let text = match cli.output {
        OutputFormat::Text => ConsoleFormatter::format(&output),
        OutputFormat::Json => ConsoleFormatter::format_json(&output),
    };
    println!("{}", text);

    if output.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_TRACK_FAILED))
    }
}
