// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use albumcredits::{config::Settings, path::default_config_file, AlbumCreditsParser, EntryKind};

use anyhow::{Context, Result};
use clap::Parser;
use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
    process::exit,
};
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Clone, Parser)]
#[command(about, version)]
struct Cli {
    /// Directory where album credits should be applied.
    #[arg(short, long, value_name = "path")]
    pub directory: Option<PathBuf>,

    /// Album credits text file to parse.
    #[arg(short, long, value_name = "path")]
    pub credits_file: PathBuf,

    /// Show functions credited across the album instead of credit blocks.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to configuration file.
    #[arg(long, value_name = "path")]
    pub config: Option<PathBuf>,
}

impl Cli {
    fn run(self) -> Result<()> {
        let settings = load_settings(self.config.as_deref()).context(RunError::Config)?;

        let directory = self
            .directory
            .or_else(|| settings.input.directory().map(Path::to_path_buf))
            .ok_or(RunError::MissingDirectory)?;
        if !directory.is_dir() {
            return Err(RunError::InvalidDirectory(directory).into());
        }
        debug!("input directory: {}", directory.display());

        if !self.credits_file.is_file() {
            return Err(RunError::InvalidFile(self.credits_file).into());
        }

        let verbose = self.verbose || settings.output.verbose;
        run_credits(&self.credits_file, &settings, verbose)
            .with_context(|| RunError::Credits(self.credits_file.clone()))
    }
}

fn main() {
    let layer = fmt::layer()
        .compact()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .init();

    if let Err(error) = run() {
        error!("{error:?}");
        exit(exit_code(&error));
    }

    exit(0)
}

fn run() -> Result<()> {
    Cli::parse().run()
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_config_file() {
            Ok(path) if path.is_file() => path,
            _ => {
                debug!("no configuration file found, use defaults");
                return Ok(Settings::default());
            }
        },
    };

    info!("load configuration: {}", path.display());
    let data = read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    Ok(data.parse()?)
}

fn run_credits(path: &Path, settings: &Settings, verbose: bool) -> Result<()> {
    let data = read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let mut parser = AlbumCreditsParser::new(data.lines())?;
    parser.run()?;
    parser.merge(&settings.name_fixups());

    if verbose {
        for kind in EntryKind::WITH_FUNCTION {
            let functions = parser
                .functions(kind)?
                .into_iter()
                .map(|function| function.unwrap_or_else(|| "<none>".into()))
                .collect::<Vec<_>>();
            println!("{kind} functions: {}", functions.join(", "));
        }
    } else {
        println!("{parser}");
    }

    Ok(())
}

fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<RunError>() {
        Some(RunError::MissingDirectory | RunError::InvalidDirectory(_)) => 1,
        Some(RunError::InvalidFile(_)) => 2,
        Some(RunError::Credits(_)) | None => 3,
        Some(RunError::Config) => 4,
    }
}

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error("no input directory given")]
    MissingDirectory,

    #[error("path is not a directory: {}", .0.display())]
    InvalidDirectory(PathBuf),

    #[error("path is not a file: {}", .0.display())]
    InvalidFile(PathBuf),

    #[error("failed to apply album credits from {}", .0.display())]
    Credits(PathBuf),

    #[error("failed to load configuration")]
    Config,
}
