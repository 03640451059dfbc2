use crate::api::errors::APIErrors;
use crate::api::request::Validate;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use serde::de::DeserializeOwned;

/// JSON body that has passed its boundary checks.
///
/// Malformed bodies and failed checks both answer 422 with an `ErrorDetail`. The body is
/// parsed straight from its bytes with `serde_json`, so fields may borrow raw JSON text.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = APIErrors;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json(req.headers()) {
            tracing::warn!("Rejected request without a JSON content type");
            return Err(APIErrors::Validation(
                "Expected request with `Content-Type: application/json`".to_string(),
            ));
        }

        let body = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!("Failed to read request body: {}", rejection.body_text());
            APIErrors::Validation(rejection.body_text())
        })?;

        let value: T = serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!("Rejected request body: {}", e);
            APIErrors::Validation(format!("Invalid JSON body: {}", e))
        })?;

        value.validate().map_err(|detail| {
            tracing::warn!("Request failed validation: {}", detail);
            APIErrors::Validation(detail)
        })?;

        Ok(ValidatedJson(value))
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}
