use actix_web::{get, HttpResponse, Responder};

use crate::models::api_response::HelloResponse;

// Liveness placeholder, independent of configuration.
#[get("/")]
async fn read_root() -> impl Responder {
    HttpResponse::Ok().json(HelloResponse::default())
}
