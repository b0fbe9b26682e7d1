use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while generating submission PDFs.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("CSV file '{0}' does not exist")]
    RosterNotFound(PathBuf),

    #[error("CSV file is missing the required column(s): {0}")]
    MissingColumns(String),

    #[error("Row {0} is missing a value for a required column")]
    MissingField(usize),

    #[error("Row {0} produced an empty student name")]
    EmptyName(usize),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(#[from] oxidize_pdf::PdfError),

    #[error("Merge error: {0}")]
    Merge(#[from] oxidize_pdf::operations::OperationError),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
