//! Kumu Gradebook - Main entrypoint.
//!
//! Loads configuration, initializes logging and runs the gradebook shell on
//! standard input and output.

use std::io;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use kumu_grades_lib::config::{self, ConfigLoader, GradesConfig, LogConfig, ENV_PREFIX};
use kumu_grades_lib::error::{set_error_reporter, GradesError, GradesResult, TracingErrorReporter};
use kumu_grades_lib::shell::Shell;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the Kumu gradebook.
#[derive(Parser, Debug)]
#[clap(name = "Kumu Gradebook", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive gradebook (default)
    Run,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr so the
/// shell's own output stays clean.
fn init_logging(log: &LogConfig) -> GradesResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| GradesError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn load_or_exit(loader: &ConfigLoader) -> GradesConfig {
    match loader.load() {
        Ok(config) => config,
        Err(e) => {
            // Logging is not configured yet, fall back to defaults to report the error
            let _ = init_logging(&LogConfig::default());
            tracing::error!("Configuration error: {}", e);
            process::exit(1);
        }
    }
}

/// Main entry point for the application.
fn main() -> GradesResult<()> {
    let args = Args::parse();

    set_error_reporter(Arc::new(TracingErrorReporter));

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    match args.command.unwrap_or(Command::Run) {
        Command::Run => {
            match args.config {
                Some(_) => config::init_global_config(load_or_exit(&config_loader)),
                // Falls back to config/default.toml, then to built-in defaults
                None => kumu_grades_lib::init()?,
            }

            let grades_config = config::get_global_config();
            init_logging(&grades_config.get().log)?;
            info!(
                version = kumu_grades_lib::VERSION,
                output = ?grades_config.get().shell.output,
                "Starting Kumu gradebook"
            );

            let mut shell = Shell::new(grades_config.get());
            let stdin = io::stdin();
            shell.run(stdin.lock(), io::stdout().lock())
        }
        Command::Validate => {
            let grades_config = load_or_exit(&config_loader);
            init_logging(&grades_config.log)?;
            info!("Configuration validated successfully");
            println!("Configuration is valid");
            Ok(())
        }
        Command::GenConfig { output } => {
            init_logging(&LogConfig::default())?;
            info!("Generating default configuration");
            let default_config = GradesConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| GradesError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
