use crate::store::ExportError;
use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum PersistenceError {
    Export(ExportError),
    Serialization(SerdeJsonError),
    Io(io::Error),
    Csv(csv::Error),
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Export(err) => write!(f, "export refused: {err}"),
            PersistenceError::Serialization(err) => write!(f, "serialization error: {err}"),
            PersistenceError::Io(err) => write!(f, "io error: {err}"),
            PersistenceError::Csv(err) => write!(f, "csv error: {err}"),
        }
    }
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistenceError::Export(err) => Some(err),
            PersistenceError::Serialization(err) => Some(err),
            PersistenceError::Io(err) => Some(err),
            PersistenceError::Csv(err) => Some(err),
        }
    }
}

impl From<ExportError> for PersistenceError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}

impl From<SerdeJsonError> for PersistenceError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<io::Error> for PersistenceError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for PersistenceError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// File name the browser download used.
pub const DEFAULT_EXPORT_FILE: &str = "timetable.json";

pub mod file;

pub use file::{export_to_csv, export_to_json, save_document_to_csv, save_document_to_json};
