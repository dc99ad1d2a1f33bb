use std::env::var;

#[derive(Debug)]
pub struct EnvConfig {
    pub base_url: String,
    pub request_timeout_secs: u64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvConfig {
    pub fn new() -> Self {
        let base_url = var("PREDICT_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".to_owned());
        let request_timeout_secs = var("REQUEST_TIMEOUT_SECS").unwrap_or_else(|_| "30".to_owned()).parse().unwrap();

        Self {
            base_url,
            request_timeout_secs,
        }
    }
}
