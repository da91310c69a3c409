use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::PaymentError;

/// Body of `POST /create-payment-intent`, kept as the raw JSON object so
/// presence is checked before anything looks at value types.
#[derive(Debug, Default)]
pub struct IntentRequest {
    fields: Map<String, Value>,
}

impl IntentRequest {
    /// Parses a raw body. Anything but a JSON object is rejected.
    pub fn from_slice(body: &[u8]) -> Result<Self, PaymentError> {
        match serde_json::from_slice::<Value>(body)? {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(PaymentError::InvalidBody(format!(
                "request body must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Absent or `null` counts as missing. Present values go through as they are.
    fn take(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key).filter(|value| !value.is_null())
    }

    /// Both fields present, or `MissingFields`.
    pub fn into_params(mut self) -> Result<CreateIntentParams, PaymentError> {
        match (self.take("amount"), self.take("currency")) {
            (Some(amount), Some(currency)) => Ok(CreateIntentParams {
                amount,
                currency,
                automatic_payment_methods: true,
            }),
            _ => Err(PaymentError::MissingFields),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parameters forwarded to the provider once validation passed. Amount and
/// currency are the caller's values untouched; the provider judges them.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateIntentParams {
    pub amount: Value,
    pub currency: Value,
    pub automatic_payment_methods: bool,
}

/// The subset of the provider's payment intent object we read.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: Option<String>,
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct IntentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}
