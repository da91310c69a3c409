pub mod intent_service;
pub mod stripe_client;
