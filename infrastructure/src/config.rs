use dotenvy::dotenv;
use std::env;

pub struct Config {
    pub base_url: String,
}

impl Config {
    pub fn load() -> Self {
        dotenv().ok();
        Self {
            base_url: env::var("FEEDLENS_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
        }
    }
}
