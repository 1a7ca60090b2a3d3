use std::path::PathBuf;
use thiserror::Error;

pub type InspectResult<T> = Result<T, InspectError>;

#[derive(Error, Debug)]
pub enum InspectError {
    #[error("File not found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("Error analyzing Excel file {}", path.display())]
    Analysis {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl InspectError {
    /// Wrap a workbook reader failure for `path`
    pub fn analysis(path: impl Into<PathBuf>, source: impl Into<calamine::Error>) -> Self {
        InspectError::Analysis {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, InspectError::NotFound(_))
    }
}
