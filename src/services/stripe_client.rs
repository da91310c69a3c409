use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    errors::ProviderError,
    models::intent::{CreateIntentParams, PaymentIntent},
};

/// Anything able to create a payment intent on our behalf.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    async fn create_payment_intent(
        &self,
        params: &CreateIntentParams,
    ) -> Result<PaymentIntent, ProviderError>;
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    message: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    code: Option<String>,
}

#[derive(Clone)]
pub struct StripeClient {
    http: reqwest::Client,
    api_base: String,
    secret_key: String,
}

// Keeps the secret key out of Debug output.
impl std::fmt::Debug for StripeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeClient")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl StripeClient {
    pub fn new(api_base: &str, secret_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            secret_key,
        }
    }

    fn payment_intents_url(&self) -> String {
        format!("{}/v1/payment_intents", self.api_base)
    }
}

/// Strings go out bare, every other JSON value as its JSON text.
fn form_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn form_fields(params: &CreateIntentParams) -> Vec<(&'static str, String)> {
    vec![
        ("amount", form_value(&params.amount)),
        ("currency", form_value(&params.currency)),
        (
            "automatic_payment_methods[enabled]",
            params.automatic_payment_methods.to_string(),
        ),
    ]
}

/// Turns a non-success provider body into a readable message, falling back
/// to the raw text when it is not the provider's error envelope.
fn api_error(status: u16, body: &str) -> ProviderError {
    let message = match serde_json::from_str::<StripeErrorBody>(body) {
        Ok(StripeErrorBody { error }) => {
            debug!(
                "provider error type={:?} code={:?}",
                error.kind, error.code
            );
            error
                .message
                .or(error.code)
                .or(error.kind)
                .unwrap_or_else(|| format!("payment provider returned status {}", status))
        }
        Err(_) if body.trim().is_empty() => format!("payment provider returned status {}", status),
        Err(_) => body.trim().to_string(),
    };
    ProviderError::Api { status, message }
}

#[async_trait]
impl PaymentProvider for StripeClient {
    async fn create_payment_intent(
        &self,
        params: &CreateIntentParams,
    ) -> Result<PaymentIntent, ProviderError> {
        let response = self
            .http
            .post(self.payment_intents_url())
            .bearer_auth(&self.secret_key)
            .form(&form_fields(params))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| ProviderError::Decode(format!("invalid payment intent response: {}", e)))
    }
}
