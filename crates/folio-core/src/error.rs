//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FolioError {
    /// A tab shell was built without any routes
    #[error("Tab shell needs at least one route")]
    EmptyRouteSet,

    /// The same route was registered twice
    #[error("Route registered twice: {0}")]
    DuplicateRoute(String),

    /// Two fixture records of the same kind share an id
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId {
        /// Record kind ("project", "certification", ...)
        kind: &'static str,
        /// The repeated id
        id: String,
    },

    /// A percentage outside 0..=100
    #[error("Level out of range for {name}: {level}")]
    LevelOutOfRange {
        /// Name of the skill or course
        name: String,
        /// The offending value
        level: u8,
    },

    /// Error during serialization
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        FolioError::Serialization(err.to_string())
    }
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::DuplicateId {
            kind: "project",
            id: "2".to_string(),
        };
        assert_eq!(format!("{}", err), "Duplicate project id: 2");
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<u8>("not a number").unwrap_err();
        let err: FolioError = json_err.into();
        assert!(matches!(err, FolioError::Serialization(_)));
    }
}
