//! Inspection failures

use std::path::PathBuf;
use thiserror::Error;

/// Why an inspection did not produce a report
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to open workbook {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Failed to read sheet '{sheet}': {source}")]
    SheetRead {
        sheet: String,
        #[source]
        source: calamine::Error,
    },
}

/// Coarse failure category, for callers choosing an exit policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    Unreadable,
}

impl FailureKind {
    pub fn as_str(&self) -> &str {
        match self {
            FailureKind::NotFound => "not_found",
            FailureKind::Unreadable => "unreadable",
        }
    }
}

impl InspectError {
    pub fn kind(&self) -> FailureKind {
        match self {
            InspectError::NotFound { .. } => FailureKind::NotFound,
            InspectError::Open { .. } | InspectError::SheetRead { .. } => FailureKind::Unreadable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_and_kind() {
        let err = InspectError::NotFound {
            path: PathBuf::from("missing.xls"),
        };
        assert_eq!(err.to_string(), "File not found: missing.xls");
        assert_eq!(err.kind(), FailureKind::NotFound);
        assert_eq!(err.kind().as_str(), "not_found");
    }

    #[test]
    fn test_open_failure_carries_cause() {
        let err = InspectError::Open {
            path: PathBuf::from("broken.xlsx"),
            source: calamine::Error::Msg("bad zip"),
        };
        assert!(err.to_string().contains("bad zip"));
        assert_eq!(err.kind(), FailureKind::Unreadable);
    }
}
