use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Exact string comparison against the configured key. A missing header
/// never matches.
pub fn verify_api_key(expected: &str, provided: Option<&str>) -> Result<(), AppError> {
    match provided {
        Some(key) if key == expected => Ok(()),
        _ => Err(AppError::Unauthorized),
    }
}

/// Extractor guarding write endpoints with the shared `x-api-key` secret.
/// Place it before any body extractor so the key is checked first.
#[derive(Debug, Clone, Copy)]
pub struct RequireApiKey;

#[async_trait]
impl FromRequestParts<AppState> for RequireApiKey {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let provided = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok());

        verify_api_key(&state.config.api_key, provided).inspect_err(|_| {
            warn!(
                method = %parts.method,
                path = %parts.uri.path(),
                "rejected request with missing or invalid API key"
            )
        })?;
        Ok(Self)
    }
}
