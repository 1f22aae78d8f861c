use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use bankapi_core::DomainError;

/// Map a domain outcome to its HTTP status. Bodies stay empty.
pub fn domain_error_status(err: &DomainError) -> StatusCode {
    match err {
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::AlreadyExists(_) => StatusCode::BAD_REQUEST,
    }
}

pub fn domain_error_to_response(err: DomainError) -> Response {
    tracing::debug!(error = %err, "request rejected");
    domain_error_status(&err).into_response()
}
