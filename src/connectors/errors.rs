use crate::helpers::JsonResponse;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::path::PathBuf;

/// Errors raised by the data and delivery collaborators.
#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    /// Snapshot file could not be read
    #[error("Failed to read catalog snapshot {}: {source}", .path.display())]
    SnapshotIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Snapshot file is not a valid catalog
    #[error("Invalid catalog snapshot: {0}")]
    SnapshotParse(#[from] serde_yaml::Error),
    /// Snapshot parsed but breaks a catalog invariant
    #[error("Catalog integrity violation: {0}")]
    Integrity(String),
    /// Downstream service unreachable or refused the request
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl ResponseError for ConnectorError {
    fn error_response(&self) -> HttpResponse {
        let message = match self {
            Self::SnapshotIo { .. } | Self::SnapshotParse(_) | Self::Integrity(_) => {
                "Catalog data unavailable"
            }
            Self::ServiceUnavailable(_) => "Service unavailable",
        };

        HttpResponse::build(self.status_code())
            .json(JsonResponse::<()>::build().into_response(message))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
