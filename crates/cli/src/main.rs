#![warn(clippy::pedantic)]

mod logger;
mod output;
mod settings;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use clap::{ArgAction, Parser, Subcommand};
use kraftlog_import_domain as domain;
use kraftlog_import_storage::{muscle_groups, pdf::PdfTextExtractor, xlsx::XlsxGridExtractor};
use log::info;
use serde::Serialize;
use uuid::Uuid;

use settings::Settings;

#[derive(Parser)]
#[command(name = "kraftlog-import", version)]
#[command(about = "Import exercises and routines into the KraftLog catalog")]
struct Cli {
    #[command(flatten)]
    settings: Settings,

    /// Increase log verbosity
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Decrease log verbosity
    #[arg(short, long, action = ArgAction::Count, global = true)]
    quiet: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Import the exercises of a PDF document into the catalog
    Exercises { file: PathBuf },
    /// Import the routine of an XLSX spreadsheet into the catalog
    Routine {
        file: PathBuf,
        #[arg(long)]
        user_id: Uuid,
    },
    /// Print the routine of an XLSX spreadsheet as JSON without importing it
    RoutineJson { file: PathBuf },
    /// Print the exercises of a PDF document as JSON without importing them
    ParsePdf { file: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init(logger::level(cli.verbose, cli.quiet)).context("failed to initialize logger")?;

    let muscle_groups = muscle_groups::load(&cli.settings.muscle_groups)?;

    let output = match &cli.command {
        Command::Exercises { file } => {
            let service = domain::Service::new(cli.settings.catalog()?, muscle_groups);
            json(&import_exercises(&service, &PdfTextExtractor, file)?)?
        }
        Command::Routine { file, user_id } => {
            let service = domain::Service::new(cli.settings.catalog()?, muscle_groups);
            json(&import_routine(
                &service,
                &XlsxGridExtractor,
                file,
                (*user_id).into(),
            )?)?
        }
        Command::RoutineJson { file } => {
            let service = domain::Service::new(cli.settings.catalog()?, muscle_groups);
            json(&preview_routine(&service, &XlsxGridExtractor, file)?)?
        }
        Command::ParsePdf { file } => {
            json(&parse_pdf(&muscle_groups, &PdfTextExtractor, file)?)?
        }
    };

    println!("{output}");

    Ok(())
}

fn import_exercises<C: domain::CatalogRepository>(
    service: &domain::Service<C>,
    extractor: &impl domain::TextExtractor,
    path: &Path,
) -> anyhow::Result<output::ExerciseImport> {
    let document = read_document(path, "pdf")?;
    let result = service.import_exercises_from_pdf(extractor, &document, &file_name(path))?;
    Ok((&result).into())
}

fn import_routine<C: domain::CatalogRepository>(
    service: &domain::Service<C>,
    extractor: &impl domain::GridExtractor,
    path: &Path,
    user_id: domain::UserID,
) -> anyhow::Result<output::RoutineImport> {
    let document = read_document(path, "xlsx")?;
    info!("importing routine from {} for user {user_id}", path.display());
    let result =
        service.import_routine_from_xlsx(extractor, &document, &file_name(path), user_id)?;
    Ok((&result).into())
}

fn preview_routine<C: domain::CatalogRepository>(
    service: &domain::Service<C>,
    extractor: &impl domain::GridExtractor,
    path: &Path,
) -> anyhow::Result<output::RoutinePreview> {
    let document = read_document(path, "xlsx")?;
    let routine = domain::routine::parse_spreadsheet(
        extractor,
        &document,
        &file_name(path),
        &domain::DEFAULT_TEMPLATE,
    )?;
    Ok(service.preview_routine(&routine).into())
}

fn parse_pdf(
    muscle_groups: &domain::MuscleGroupMap,
    extractor: &impl domain::TextExtractor,
    path: &Path,
) -> anyhow::Result<Vec<output::ParsedExercise>> {
    let document = read_document(path, "pdf")?;
    Ok(
        domain::exercise::parse_document(extractor, &document, muscle_groups)?
            .iter()
            .map(|exercise| output::ParsedExercise::new(exercise, muscle_groups))
            .collect(),
    )
}

/// Read a non-empty document with the given file extension.
fn read_document(path: &Path, extension: &str) -> anyhow::Result<Vec<u8>> {
    if !file_name(path)
        .to_lowercase()
        .ends_with(&format!(".{extension}"))
    {
        bail!(
            "{} is not a {} file",
            path.display(),
            extension.to_uppercase()
        );
    }

    let document =
        fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

    if document.is_empty() {
        bail!("{} is empty", path.display());
    }

    Ok(document)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn json(value: &impl Serialize) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output")
}
