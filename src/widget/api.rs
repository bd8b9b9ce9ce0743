use crate::utils::error_chain_fmt;
use reqwest::{Client, StatusCode};

// shown when the endpoint gives us nothing better to say
pub(crate) const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(serde::Serialize)]
struct JoinRequest<'a> {
    email: &'a str,
}

#[derive(serde::Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(thiserror::Error)]
pub enum JoinError {
    #[error("The waitlist endpoint answered {status}: {message}")]
    Rejected { status: StatusCode, message: String },
    #[error("Failed to reach the waitlist endpoint.")]
    Transport(#[from] reqwest::Error),
}

impl std::fmt::Debug for JoinError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl JoinError {
    /// The text to put under the form.
    pub fn user_message(&self) -> &str {
        match self {
            JoinError::Rejected { message, .. } => message,
            JoinError::Transport(_) => FALLBACK_MESSAGE,
        }
    }
}

/// Client side of the waitlist endpoint.
pub struct WaitlistApi {
    http_client: Client,
    base_url: String,
}

impl WaitlistApi {
    pub fn new(base_url: String) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http_client: Client, base_url: String) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    #[tracing::instrument(name = "Joining the waitlist", skip(self))]
    pub async fn join(&self, email: &str) -> Result<(), JoinError> {
        let response = self
            .http_client
            .post(format!("{}/api/waitlist", self.base_url))
            .json(&JoinRequest { email })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = response
            .json::<ErrorResponse>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| FALLBACK_MESSAGE.to_string());

        Err(JoinError::Rejected { status, message })
    }
}
