use actix_web::web;
mod handlers;
mod intent_handlers;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::read_root)
        .service(intent_handlers::create_payment_intent);
}
