#[derive(Debug, thiserror::Error)]
pub enum PatientError {
    #[error("Email address already exists: {0}")]
    EmailAlreadyExists(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to create storage directory: {0}")]
    StorageDirCreation(std::io::Error),
    #[error("failed to create patient directory: {0}")]
    PatientDirCreation(std::io::Error),
    #[error("failed to write patient file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to read patient file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to serialize patient: {0}")]
    Serialization(serde_json::Error),
    #[error("patient store unavailable: {0}")]
    StoreUnavailable(String),
}

pub type PatientResult<T> = std::result::Result<T, PatientError>;
