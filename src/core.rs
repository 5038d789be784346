use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::builders::build_csv;
use crate::dataset::{filter_comments, Table};
use crate::env::{EnvConfig, EnvVar};
use crate::parsers::html::{decode_document, extract_records, html_to_dom};
use crate::translation::{
    translate_comments, TranslationError, Translator, AUTO_DETECT, DEFAULT_TARGET_LANG,
};

/// Represents errors that can occur while exporting a document
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("unknown input encoding '{0}'")]
    UnknownEncoding(String),

    #[error("input is not valid {encoding}")]
    Decode { encoding: String },

    #[error("entry '{0}' is followed by an empty IP line")]
    BlankAddressLine(String),

    #[error(transparent)]
    Translation(#[from] TranslationError),

    #[error("could not serialize CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("could not write {path}: {source}")]
    Write { path: String, source: io::Error },
}

impl ExportError {
    /// Errors raised while getting the input text, before any processing
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ExportError::Read { .. } | ExportError::UnknownEncoding(_) | ExportError::Decode { .. }
        )
    }
}

/// Configuration options for an export run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub encoding: String,
    pub source_lang: String,
    pub target_lang: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            encoding: "utf-8".to_string(),
            source_lang: AUTO_DETECT.to_string(),
            target_lang: DEFAULT_TARGET_LANG.to_string(),
        }
    }
}

impl From<&EnvConfig> for ExportOptions {
    fn from(config: &EnvConfig) -> Self {
        ExportOptions {
            encoding: config.input_encoding.clone(),
            source_lang: config.translation_source_lang.clone(),
            target_lang: config.translation_target_lang.clone(),
        }
    }
}

/// Result of running the pipeline over one document
#[derive(Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Filtered, translated table and its CSV serialization
    Exported { table: Table, csv: Vec<u8> },
    /// The document produced no `Comments` column; nothing to translate or write
    MissingComments { records: usize },
}

/// Result of exporting a file on disk
#[derive(Debug, PartialEq, Eq)]
pub enum FileExport {
    Saved { path: String, rows: usize },
    MissingComments,
}

/// Runs the whole pipeline over raw document bytes
///
/// Decodes, extracts records, assembles and filters the table, translates
/// every remaining comment and serializes the result. Nothing touches the
/// filesystem.
pub fn export_document<T: Translator + ?Sized>(
    input_data: &[u8],
    options: &ExportOptions,
    translator: &T,
) -> Result<ExportOutcome, ExportError> {
    let html = decode_document(input_data, &options.encoding)?;
    let dom = html_to_dom(&html);

    let records = extract_records(&dom.document)?;
    let table = Table::from_records(&records);
    info!(rows = table.len(), columns = table.columns().len(), "assembled table");

    let mut filtered = match filter_comments(table) {
        Some(filtered) => filtered,
        None => {
            warn!(records = records.len(), "no Comments column in parsed data");
            return Ok(ExportOutcome::MissingComments {
                records: records.len(),
            });
        }
    };

    translate_comments(
        &mut filtered,
        translator,
        &options.source_lang,
        &options.target_lang,
    )?;

    let csv = build_csv(&filtered)?;
    Ok(ExportOutcome::Exported {
        table: filtered,
        csv,
    })
}

/// Exports `input_path` into `<input_path>.csv`
///
/// The CSV is written in one go, and only once every comment has been
/// translated. An existing file at the output path is overwritten.
pub fn export_file<T: Translator + ?Sized>(
    input_path: &str,
    options: &ExportOptions,
    translator: &T,
) -> Result<FileExport, ExportError> {
    let input_data = fs::read(Path::new(input_path)).map_err(|source| ExportError::Read {
        path: input_path.to_string(),
        source,
    })?;

    match export_document(&input_data, options, translator)? {
        ExportOutcome::MissingComments { .. } => Ok(FileExport::MissingComments),
        ExportOutcome::Exported { table, csv } => {
            let output_path = format_output_path(input_path);
            fs::write(&output_path, csv).map_err(|source| ExportError::Write {
                path: output_path.clone(),
                source,
            })?;
            info!(path = %output_path, rows = table.len(), "wrote CSV");

            Ok(FileExport::Saved {
                path: output_path,
                rows: table.len(),
            })
        }
    }
}

/// The output file sits next to the input, with `.csv` appended to its full name
pub fn format_output_path(input_path: &str) -> String {
    format!("{input_path}.csv")
}

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";

/// Prints an error message to stderr
///
/// Colored red only when stderr is a terminal and `NO_COLOR` is unset.
/// `NO_COLOR` is read here rather than from `EnvConfig` so configuration
/// errors honor it too.
pub fn print_error_message(msg: &str) {
    let no_color = crate::env::core::NoColor::get().unwrap_or(false);

    if !no_color && atty::is(atty::Stream::Stderr) {
        eprintln!("{ANSI_COLOR_RED}{msg}{ANSI_COLOR_RESET}");
    } else {
        eprintln!("{msg}");
    }
}

/// Prints an info message to stdout
pub fn print_info_message(msg: &str) {
    println!("{msg}");
}
