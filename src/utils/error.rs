use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Host probe failed: {message}")]
    ProbeError { message: String },
}

impl ReportError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ReportError::IoError(_) => 3,
            ReportError::ProbeError { .. } => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::IoError(e) => format!("Could not write the report: {}", e),
            ReportError::ProbeError { message } => {
                format!("Could not read host information: {}", message)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
