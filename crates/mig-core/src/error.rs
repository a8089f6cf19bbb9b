use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MigError {
    #[error("The given path either does not exist or is not a directory: {}", path.display())]
    RootNotFound { path: PathBuf },

    #[error("Error creating folder {}: {source}", path.display())]
    DirectoryCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot list folder {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Filename has no usable frame number: {}", path.display())]
    FilenameSort { path: PathBuf },

    #[error("Cannot decode image {}: {source}", path.display())]
    ImageDecode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Cannot write report {}: {source}", path.display())]
    ReportWrite {
        path: PathBuf,
        source: rust_xlsxwriter::XlsxError,
    },

    #[error("Experiment directory contains no images: {}", path.display())]
    EmptyExperiment { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, MigError>;
