use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::multipart::Form;
use reqwest::Client;

use crate::env_config::EnvConfig;
use crate::prediction::PredictionResponse;

pub struct PredictClient {
    client: Client,
    base_url: String,
}

impl PredictClient {
    pub fn new(config: &EnvConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("building http client")?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// POSTs the form fields as multipart/form-data and decodes the JSON
    /// body. The status code is deliberately not inspected: a non-2xx reply
    /// carrying a parseable JSON body still goes through the normal branch.
    pub async fn predict(&self, fields: &[(String, String)]) -> Result<PredictionResponse> {
        let mut form = Form::new();
        for (name, value) in fields {
            form = form.text(name.clone(), value.clone());
        }

        let response = self
            .client
            .post(self.create_url("predict"))
            .multipart(form)
            .send()
            .await
            .context("sending prediction request")?;

        response
            .json::<PredictionResponse>()
            .await
            .context("decoding prediction response")
    }

    fn create_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}
