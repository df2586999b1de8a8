//! Translation of payload rejections and service failures into JSON error
//! responses of the form `{"error": "..."}`.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::{debug, error};

use crate::domain::ServiceError;
use crate::storage::StorageError;
use shared::ErrorResponse;

pub const DATABASE_ERROR_MESSAGE: &str = "An error occurred while processing your request.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";
pub const INVALID_MODEL_MESSAGE: &str = "Invalid model object";
pub const INVALID_ID_MESSAGE: &str = "ID in the URL must be an integer";

pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Unwrap a JSON body, answering 400 for a `null` body or one that does not
/// deserialize into `T`
pub fn read_payload<T>(
    payload: Result<Json<Option<T>>, JsonRejection>,
    null_message: &str,
) -> Result<T, Response> {
    match payload {
        Ok(Json(Some(value))) => Ok(value),
        Ok(Json(None)) => Err(json_error(StatusCode::BAD_REQUEST, null_message)),
        Err(rejection) => {
            debug!("Rejected request body: {}", rejection.body_text());
            Err(json_error(StatusCode::BAD_REQUEST, INVALID_MODEL_MESSAGE))
        }
    }
}

/// Unwrap a numeric path ID, answering 400 with a JSON body when the
/// segment is not an integer or overflows `i64`
pub fn read_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, Response> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            debug!("Rejected path: {}", rejection.body_text());
            Err(json_error(StatusCode::BAD_REQUEST, INVALID_ID_MESSAGE))
        }
    }
}

/// Generic client-facing message for a persistence failure. Database errors
/// and anything else (such as unreadable rows) are worded differently.
pub fn storage_message(err: &StorageError) -> &'static str {
    match err {
        StorageError::Database(_) => DATABASE_ERROR_MESSAGE,
        _ => UNEXPECTED_ERROR_MESSAGE,
    }
}

/// Default translation of a service failure. 500s are logged with
/// `operation`; the client only sees a generic message.
pub fn service_error_response(err: ServiceError, operation: &str) -> Response {
    match err {
        ServiceError::Validation(message) => json_error(StatusCode::BAD_REQUEST, message),
        ServiceError::NotFound(message) => json_error(StatusCode::NOT_FOUND, message),
        ServiceError::Concurrency { .. } => {
            error!("Concurrency conflict while {}: {}", operation, err);
            json_error(StatusCode::INTERNAL_SERVER_ERROR, DATABASE_ERROR_MESSAGE)
        }
        ServiceError::Write(ref e) | ServiceError::Storage(ref e) => {
            error!("Failed while {}: {}", operation, err);
            json_error(StatusCode::INTERNAL_SERVER_ERROR, storage_message(e))
        }
    }
}
