// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Coverpress — cover page and image-to-PDF submission tool.
//
// Entry point. Initialises logging, loads settings, and runs one command.

mod services;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use coverpress_core::error::{CoverpressError, Result};
use coverpress_core::human_errors::public_failure;
use coverpress_core::{AppConfig, MetadataFields, SubmissionRequest, UploadedImage};
use serde::Serialize;

use services::config_dir;
use services::submission::SubmissionService;

#[derive(Parser)]
#[command(name = "coverpress", about = "Cover page + images to a single A4 PDF", version)]
struct Cli {
    /// Settings file (JSON). Defaults to the user config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and store the PDF for one submission, then print its receipt
    Submit {
        /// Image file; repeat for more pages, in order
        #[arg(long = "image", num_args = 1..)]
        images: Vec<PathBuf>,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Render only the cover page to a PNG file
    RenderCover {
        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Write the default settings to a file
    InitConfig {
        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// The six cover fields; all optional.
#[derive(Args)]
struct FieldArgs {
    #[arg(long)]
    student_name: Option<String>,
    #[arg(long)]
    student_id: Option<String>,
    #[arg(long)]
    subject_name: Option<String>,
    #[arg(long)]
    subject_code: Option<String>,
    #[arg(long)]
    instructor_name: Option<String>,
    #[arg(long)]
    section_number: Option<String>,
}

impl From<FieldArgs> for MetadataFields {
    fn from(args: FieldArgs) -> Self {
        MetadataFields {
            student_name: args.student_name,
            student_id: args.student_id,
            subject_name: args.subject_name,
            subject_code: args.subject_code,
            instructor_name: args.instructor_name,
            section_number: args.section_number,
        }
    }
}

/// What a failed command prints on stderr.
#[derive(Serialize)]
struct FailureOutput<'a> {
    status: u16,
    error: &'a str,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Command failed");
            let failure = public_failure(&err);
            let output = FailureOutput {
                status: failure.kind.status_code(),
                error: &failure.message,
            };
            match serde_json::to_string(&output) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("{}", failure.message),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::InitConfig { output } => {
            AppConfig::default().save(&output)?;
            tracing::info!(path = %output.display(), "Default settings written");
            Ok(())
        }
        Commands::Submit { images, fields } => {
            let config = config_dir::load_config(cli.config)?;
            let service = SubmissionService::from_config(&config)?;
            let request = SubmissionRequest {
                fields: fields.into(),
                images: images
                    .iter()
                    .map(|path| read_upload(path))
                    .collect::<Result<Vec<_>>>()?,
            };
            let receipt = service.submit(request)?;
            println!("{}", serde_json::to_string_pretty(&receipt)?);
            Ok(())
        }
        Commands::RenderCover { output, fields } => {
            let config = config_dir::load_config(cli.config)?;
            let service = SubmissionService::from_config(&config)?;
            let cover = service.render_cover(&fields.into());
            std::fs::write(&output, cover.to_png_bytes()?)?;
            tracing::info!(path = %output.display(), "Cover written");
            Ok(())
        }
    }
}

fn read_upload(path: &Path) -> Result<UploadedImage> {
    let bytes = std::fs::read(path).map_err(|err| {
        CoverpressError::Validation(format!("cannot read {}: {}", path.display(), err))
    })?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(UploadedImage { name, bytes })
}
