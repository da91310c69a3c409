use crate::{
    errors::PaymentError,
    services::{
        intent_service::{log_failure, IntentService},
        stripe_client::PaymentProvider,
    },
};
use actix_web::{post, web, HttpResponse};

// The body is taken raw so malformed JSON gets the same `{"error": ..}` shape
// as every other failure, whatever the Content-Type.
#[post("/create-payment-intent")]
async fn create_payment_intent(
    provider: web::Data<dyn PaymentProvider>,
    body: web::Bytes,
) -> Result<HttpResponse, PaymentError> {
    match IntentService::create_payment_intent(provider.get_ref(), &body).await {
        Ok(intent) => Ok(HttpResponse::Ok().json(intent)),
        Err(e) => {
            log_failure(&e);
            Err(e)
        }
    }
}
