// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Mauka Suggest - terminal front end.
//!
//! Loads configuration and the vocabulary, then answers suggestion queries
//! from the command line or from standard input. Logs go to stderr so stdout
//! carries only suggestions.

use clap::{Parser, Subcommand};
use mauka_suggest_lib::config::{ConfigLoader, LogConfig, MaukaConfig, ENV_PREFIX};
use mauka_suggest_lib::engine::SuggestionEngine;
use mauka_suggest_lib::error::{
    set_error_reporter, MaukaError, MaukaResult, TracingErrorReporter,
};
use mauka_suggest_lib::session::SuggestionSession;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Command line arguments.
#[derive(Parser, Debug)]
#[clap(name = "Mauka Suggest", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Vocabulary file, overriding `vocabulary.path`
    #[clap(long, value_parser)]
    vocabulary: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print suggestions for a single query
    Query {
        /// The text typed so far
        text: String,

        /// Print the result as JSON
        #[clap(long)]
        json: bool,
    },

    /// Read queries from stdin, one per line; `:accept` or a tab takes the top suggestion
    Repl,

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
fn init_logging(log: &LogConfig) -> MaukaResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| MaukaError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Logs a configuration failure through a scoped subscriber writing to `writer`.
///
/// Logging settings come from the configuration, so the global subscriber is
/// not installed yet when this runs.
fn log_config_error<W>(error: &dyn Display, writer: W)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let fallback = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(fallback, || {
        tracing::error!("Configuration error: {}", error);
    });
}

/// Loads configuration, exiting on error the way every subcommand needs.
fn load_config(loader: &ConfigLoader) -> MaukaConfig {
    match loader.load() {
        Ok(config) => config,
        Err(e) => {
            log_config_error(&e, io::stderr);
            process::exit(1);
        }
    }
}

/// Loads configuration, starts logging and builds the engine over the vocabulary.
fn start_engine(
    loader: &ConfigLoader,
    vocabulary: Option<PathBuf>,
) -> MaukaResult<SuggestionEngine> {
    let mut config = load_config(loader);
    init_logging(&config.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));
    if let Some(path) = vocabulary {
        config.vocabulary.path = path;
    }

    let (engine, report) = SuggestionEngine::from_config(&config);
    info!(
        path = %config.vocabulary.path.display(),
        entries = engine.index().len(),
        duplicates = report.duplicates,
        "Vocabulary ready"
    );
    Ok(engine)
}

fn run_query(engine: &SuggestionEngine, text: &str, json: bool) -> MaukaResult<()> {
    let suggestions = engine.suggest(text);
    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &suggestions)?;
        writeln!(out)?;
    } else {
        for entry in &suggestions.entries {
            writeln!(out, "{entry}")?;
        }
    }
    Ok(())
}

/// Handles one REPL line: either the accept gesture or a fresh query.
fn handle_line<W: Write>(
    session: &mut SuggestionSession<'_>,
    line: &str,
    out: &mut W,
) -> io::Result<()> {
    if line == "\t" || line.trim() == ":accept" {
        return match session.accept_top() {
            Some(accepted) => writeln!(out, "> {accepted}"),
            None => writeln!(out, "(nothing to accept)"),
        };
    }

    session.clear();
    session.type_str(line);
    let rendered = session.render();
    if rendered.is_empty() {
        writeln!(out, "(no suggestions)")?;
    } else {
        writeln!(out, "{rendered}")?;
    }
    writeln!(out)?;
    out.flush()
}

fn run_repl<R: BufRead, W: Write>(
    engine: &SuggestionEngine,
    input: R,
    mut out: W,
) -> MaukaResult<()> {
    let mut session = SuggestionSession::new(engine);

    for line in input.lines() {
        handle_line(&mut session, &line?, &mut out)?;
    }

    Ok(())
}

/// Main entry point for the application.
fn main() -> MaukaResult<()> {
    let args = <Args as clap::Parser>::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    match args.command.unwrap_or(Command::Repl) {
        Command::Query { text, json } => {
            let engine = start_engine(&config_loader, args.vocabulary)?;
            run_query(&engine, &text, json)
        }
        Command::Repl => {
            let engine = start_engine(&config_loader, args.vocabulary)?;
            info!("Reading queries from stdin");
            run_repl(&engine, io::stdin().lock(), io::stdout().lock())
        }
        Command::Validate => {
            let config = load_config(&config_loader);
            init_logging(&config.log)?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            init_logging(&LogConfig::default())?;
            info!("Generating default configuration");
            let default_config = MaukaConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| MaukaError::Custom(format!("Failed to serialize config: {e}")))?;

            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
