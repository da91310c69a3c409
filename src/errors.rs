use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::api_response::ErrorResponse;

pub const MISSING_FIELDS_MESSAGE: &str = "Amount and currency are required.";

/// Failures raised while talking to the payment provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The provider answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Decode(String),
}

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingFields,

    #[error("{0}")]
    InvalidBody(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl From<serde_json::Error> for PaymentError {
    fn from(err: serde_json::Error) -> Self {
        PaymentError::InvalidBody(err.to_string())
    }
}

// Every failure collapses to the same 400 shape; the variants only matter for logging.
impl ResponseError for PaymentError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn every_variant_renders_as_bad_request() {
        let errors = vec![
            PaymentError::MissingFields,
            PaymentError::InvalidBody("expected value at line 1 column 1".to_string()),
            PaymentError::Provider(ProviderError::Api {
                status: 401,
                message: "Invalid API Key provided: sk_test_****".to_string(),
            }),
        ];

        for err in errors {
            let expected = err.to_string();
            let response = err.error_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let body = to_bytes(response.into_body()).await.unwrap();
            let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(json, serde_json::json!({ "error": expected }));
        }
    }

    #[test]
    fn provider_message_is_passed_through_verbatim() {
        let err: PaymentError = ProviderError::Api {
            status: 400,
            message: "Invalid currency: zzz".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Invalid currency: zzz");
        assert_eq!(PaymentError::MissingFields.to_string(), MISSING_FIELDS_MESSAGE);
    }
}
