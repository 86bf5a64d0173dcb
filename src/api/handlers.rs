use crate::api::errors::{api_error, bad_request, ApiError};
use crate::api::response::ApiResponse;
use crate::api::validation::{parse_body, validate_create_request};
use crate::constants::{
    MSG_INVALID_SHIPMENT_ID, MSG_READ_FAILED, MSG_SAVE_FAILED, MSG_SHIPMENT_NOT_FOUND,
    MSG_UNREADABLE_BODY,
};
use crate::db::{SharedRepository, Shipment, ShipmentRepository};
use crate::errors::Error;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use serde::Serialize;
use tracing::{debug, error, info};

/// Payload of the health endpoint
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Runs a blocking repository call off the async worker threads.
async fn with_repository<T, F>(repository: SharedRepository, op: F) -> Result<T, Error>
where
    T: Send + 'static,
    F: FnOnce(&dyn ShipmentRepository) -> Result<T, Error> + Send + 'static,
{
    tokio::task::spawn_blocking(move || op(repository.as_ref())).await?
}

fn read_failure(err: Error) -> ApiError {
    match err {
        Error::NotFound => api_error(StatusCode::NOT_FOUND, MSG_SHIPMENT_NOT_FOUND),
        other => {
            error!("Failed to read shipments: {}", other);
            api_error(StatusCode::INTERNAL_SERVER_ERROR, MSG_READ_FAILED)
        }
    }
}

/// True for an optionally signed run of ASCII digits, whatever its magnitude.
fn is_integer_literal(segment: &str) -> bool {
    let digits = segment
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(segment);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Liveness probe
#[axum::debug_handler]
pub async fn health() -> ApiResponse<HealthStatus> {
    ApiResponse::ok(HealthStatus { status: "ok" })
}

/// Lists every stored shipment
///
/// # Returns
/// * `Result<ApiResponse<Vec<Shipment>>, ApiError>` - All shipments or a 500 error
#[axum::debug_handler]
pub async fn list_shipments(
    Extension(repository): Extension<SharedRepository>,
) -> Result<ApiResponse<Vec<Shipment>>, ApiError> {
    let shipments = with_repository(repository, |repo| repo.list_all())
        .await
        .map_err(read_failure)?;

    debug!("Listing {} shipments", shipments.len());
    Ok(ApiResponse::ok(shipments))
}

/// Retrieves a shipment by its ID
///
/// # Arguments
/// * `id` - Raw path segment; must parse as an integer
/// * `repository` - Shipment repository
///
/// # Returns
/// * `Result<ApiResponse<Shipment>, ApiError>` - The shipment, 400 for a
///   non-integer id, 404 when nothing matches (including integers too large
///   to ever have been assigned)
#[axum::debug_handler]
pub async fn get_shipment(
    Path(id): Path<String>,
    Extension(repository): Extension<SharedRepository>,
) -> Result<ApiResponse<Shipment>, ApiError> {
    let id: i32 = match id.parse() {
        Ok(id) => id,
        Err(_) if is_integer_literal(&id) => {
            return Err(api_error(StatusCode::NOT_FOUND, MSG_SHIPMENT_NOT_FOUND));
        }
        Err(_) => return Err(bad_request(MSG_INVALID_SHIPMENT_ID)),
    };

    let shipment = with_repository(repository, move |repo| repo.get_by_id(id))
        .await
        .map_err(read_failure)?;

    Ok(ApiResponse::ok(shipment))
}

/// Creates a new shipment
///
/// The body is read as raw bytes so that a missing or malformed JSON body
/// reaches validation as an empty object instead of being rejected by the
/// extractor. A body that cannot be buffered at all (e.g. over the size
/// limit) keeps the extractor's status code but gets the error envelope.
///
/// # Returns
/// * `Result<ApiResponse<Shipment>, ApiError>` - 201 with the stored shipment,
///   400 on validation failure, 500 if the insert fails
#[axum::debug_handler]
pub async fn create_shipment(
    Extension(repository): Extension<SharedRepository>,
    body: Result<Bytes, BytesRejection>,
) -> Result<ApiResponse<Shipment>, ApiError> {
    let body = body.map_err(|rejection| {
        debug!("Rejected request body: {}", rejection.body_text());
        api_error(rejection.status(), MSG_UNREADABLE_BODY)
    })?;
    let payload = parse_body(&body);
    let new_shipment = validate_create_request(&payload)?;

    let stored = with_repository(repository, move |repo| repo.insert(&new_shipment))
        .await
        .map_err(|e| {
            error!("Failed to save shipment: {}", e);
            api_error(StatusCode::INTERNAL_SERVER_ERROR, MSG_SAVE_FAILED)
        })?;

    info!("Registered shipment {}", stored.id);
    Ok(ApiResponse::created(stored))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_integers_of_any_magnitude() {
        assert!(is_integer_literal("42"));
        assert!(is_integer_literal("-7"));
        assert!(is_integer_literal("+2147483648"));
        assert!(is_integer_literal("99999999999999999999999999999999999999999"));
    }

    #[test]
    fn rejects_non_integer_segments() {
        for segment in ["", "-", "abc", "1.5", "12a", "0x10", " 1"] {
            assert!(!is_integer_literal(segment), "{segment:?}");
        }
    }
}
