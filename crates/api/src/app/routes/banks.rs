//! Bank service: translates `/banks` requests into data source calls and maps
//! each outcome to a status code and body.
//!
//! | outcome            | status |
//! |--------------------|--------|
//! | list / get / patch | 200    |
//! | create             | 201    |
//! | delete             | 204    |
//! | not found          | 404    |
//! | already exists     | 400    |

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use bankapi_banks::{Bank, BankDataSource};

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route(
            "/banks",
            get(list_banks).post(create_bank).patch(update_bank),
        )
        .route("/banks/:account_number", get(get_bank).delete(delete_bank))
}

pub async fn list_banks(Extension(services): Extension<Arc<AppServices>>) -> Response {
    (StatusCode::OK, Json(services.banks.retrieve_banks())).into_response()
}

pub async fn get_bank(
    Extension(services): Extension<Arc<AppServices>>,
    Path(account_number): Path<String>,
) -> Response {
    match services.banks.retrieve_bank(&account_number) {
        Ok(bank) => (StatusCode::OK, Json(bank)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_bank(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<Bank>,
) -> Response {
    match services.banks.create_bank(body) {
        Ok(bank) => {
            tracing::info!(account_number = %bank.account_number, "bank created");
            (StatusCode::CREATED, Json(bank)).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_bank(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<Bank>,
) -> Response {
    match services.banks.update_bank(body) {
        Ok(bank) => {
            tracing::info!(account_number = %bank.account_number, "bank updated");
            (StatusCode::OK, Json(bank)).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_bank(
    Extension(services): Extension<Arc<AppServices>>,
    Path(account_number): Path<String>,
) -> Response {
    match services.banks.delete_bank(&account_number) {
        Ok(()) => {
            tracing::info!(%account_number, "bank deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
