#[derive(thiserror::Error, Debug)]
pub enum ImportError {
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("no exercises found in document")]
    NoRecords,
    #[error("failed to create routine: {0}")]
    RoutineCreation(#[source] CatalogError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("failed to read PDF document: {0}")]
    Pdf(String),
    #[error("failed to read spreadsheet: {0}")]
    Spreadsheet(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("authentication failed: {0}")]
    Authentication(String),
    #[error("no connection: {0}")]
    NoConnection(String),
    #[error("{status} {body}")]
    Status { status: u16, body: String },
    #[error("deserialization failed: {0}")]
    Deserialization(String),
    #[error("no identifier returned")]
    MissingIdentifier,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_import_error_from_document_error() {
        assert!(matches!(
            ImportError::from(DocumentError::Pdf("invalid header".to_string())),
            ImportError::Document(DocumentError::Pdf(reason)) if reason == "invalid header"
        ));
    }

    #[test]
    fn test_import_error_display() {
        assert_eq!(
            ImportError::NoRecords.to_string(),
            "no exercises found in document"
        );
        assert_eq!(
            ImportError::RoutineCreation(CatalogError::Status {
                status: 500,
                body: "Internal Server Error".to_string()
            })
            .to_string(),
            "failed to create routine: 500 Internal Server Error"
        );
        assert_eq!(
            ImportError::Document(DocumentError::Spreadsheet("not a zip file".to_string()))
                .to_string(),
            "failed to read spreadsheet: not a zip file"
        );
    }
}
