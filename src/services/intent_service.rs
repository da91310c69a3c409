use log::{error, info, warn};

use crate::{
    errors::{PaymentError, ProviderError},
    models::intent::{IntentRequest, IntentResponse},
    services::stripe_client::PaymentProvider,
};

pub struct IntentService;

impl IntentService {
    /// Validates the raw body and asks the provider for a new payment intent.
    /// Every call creates a fresh intent; nothing is deduplicated or retried.
    pub async fn create_payment_intent(
        provider: &dyn PaymentProvider,
        body: &[u8],
    ) -> Result<IntentResponse, PaymentError> {
        let params = IntentRequest::from_slice(body)?.into_params()?;

        let intent = provider.create_payment_intent(&params).await?;
        let client_secret = intent.client_secret.ok_or_else(|| {
            ProviderError::Decode(format!("payment intent {} has no client_secret", intent.id))
        })?;

        info!(
            "created payment intent {} for {} {} ({})",
            intent.id,
            intent.amount.unwrap_or_default(),
            intent.currency.as_deref().unwrap_or("?"),
            intent.status.as_deref().unwrap_or("unknown")
        );
        Ok(IntentResponse { client_secret })
    }
}

/// Logs a failed attempt at a level matching its cause.
pub fn log_failure(err: &PaymentError) {
    match err {
        PaymentError::MissingFields | PaymentError::InvalidBody(_) => {
            info!("rejected payment intent request: {}", err)
        }
        PaymentError::Provider(ProviderError::Api { status, message }) => {
            warn!("payment provider refused intent (status {}): {}", status, message)
        }
        PaymentError::Provider(provider_err) => {
            error!("payment provider call failed: {}", provider_err)
        }
    }
}
