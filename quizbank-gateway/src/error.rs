//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quizbank_core::CoreError;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// An error propagated from the question service.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A path segment, query parameter or body could not be decoded.
    #[error("{0}")]
    InvalidRequest(String),
}

impl GatewayError {
    /// HTTP status this error is reported with.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Core(CoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            GatewayError::Core(CoreError::IdsExhausted) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::Core(_) | GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizbank_core::{QuestionId, ValidationError};

    #[test]
    fn gateway_error_status_codes_map_correctly() {
        let not_found = GatewayError::from(CoreError::NotFound(QuestionId(1)));
        let resp = not_found.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let bad_req = GatewayError::InvalidRequest("invalid question id".to_owned());
        let resp = bad_req.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn gateway_error_validation_variant_returns_400() {
        let err = GatewayError::from(CoreError::from(ValidationError::TextRequired));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST, "validation errors must map to 400");
    }

    #[test]
    fn gateway_error_exhausted_ids_returns_500() {
        let err = GatewayError::from(CoreError::IdsExhausted);
        assert_eq!(
            err.status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "running out of ids is a server fault, not a bad request"
        );
    }

    #[test]
    fn gateway_error_display_is_forwarded_verbatim() {
        let err = GatewayError::from(CoreError::from(ValidationError::InsufficientChoices));
        assert_eq!(err.to_string(), "insufficient choices");

        let err = GatewayError::InvalidRequest("invalid JSON".to_owned());
        assert_eq!(err.to_string(), "invalid JSON");
    }
}
