use reqwest::Client;
use tracing::debug;

use crate::config::BravoApiConfig;
use crate::error::{parse_error_message, BravoApiError};
use crate::payload::ChatRequest;
use crate::url::chat_url;

/// HTTP client for the Bravo prompt-submission endpoint.
#[derive(Debug)]
pub struct BravoApiClient {
    http: Client,
    config: BravoApiConfig,
}

impl BravoApiClient {
    pub fn new(config: BravoApiConfig) -> Result<Self, BravoApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        let http = builder.build().map_err(BravoApiError::from)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &BravoApiConfig {
        &self.config
    }

    pub fn chat_endpoint(&self) -> String {
        chat_url(&self.config.base_url)
    }

    /// Submit one prompt for a session.
    ///
    /// Any 2xx status means the backend accepted the prompt; the agent's
    /// reply arrives later through the session stream, correlated only by the
    /// shared session id. The response body of an accepted submission is not
    /// consumed.
    pub async fn submit_prompt(
        &self,
        session_id: &str,
        prompt: &str,
    ) -> Result<(), BravoApiError> {
        let body = ChatRequest::new(prompt, session_id);
        let response = self
            .http
            .post(self.chat_endpoint())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!(session_id, "prompt accepted");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(BravoApiError::Status {
            status,
            message: parse_error_message(status, &body),
        })
    }
}
