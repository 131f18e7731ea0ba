use std::path::PathBuf;

/// Errors produced by core `medshare` operations.
#[derive(Debug, thiserror::Error)]
pub enum MedshareError {
    #[error("medicine not found in catalog: {0}")]
    MedicineNotFound(String),

    #[error("medicine already in catalog: {0}")]
    MedicineAlreadyExists(String),

    #[error("medicine name must not be empty")]
    EmptyMedicineName,

    #[error("failed to read catalog: {0}")]
    CatalogRead(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("failed to write catalog: {0}")]
    CatalogWrite(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("could not determine configuration directories")]
    NoProjectDirs,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
