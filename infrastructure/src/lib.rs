pub mod classifier_client;
pub mod config;
