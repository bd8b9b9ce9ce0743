use crate::domain::SubmissionEmail;
use crate::utils::error_chain_fmt;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};

// The record store is a Notion database - every waitlist entry becomes a
// page whose Title and Email properties both hold the submitted address.
//
// curl "https://api.notion.com/v1/pages" \
//     -X POST \
//     -H "Authorization: Bearer <api key>" \
//     -H "Notion-Version: 2022-06-28" \
//     -H "Content-Type: application/json" \
//     -d '{
//     "parent": { "database_id": "<database id>" },
//     "properties": {
//         "Title": { "title": [{ "text": { "content": "a@b.com" } }] },
//         "Email": { "email": "a@b.com" }
//     }
//     }'

#[derive(serde::Serialize)]
struct CreatePageRequest<'a> {
    parent: Parent<'a>,
    properties: Properties<'a>,
}

#[derive(serde::Serialize)]
struct Parent<'a> {
    database_id: &'a str,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")] // the database columns are `Title` and `Email`
struct Properties<'a> {
    title: TitleProperty<'a>,
    email: EmailProperty<'a>,
}

#[derive(serde::Serialize)]
struct TitleProperty<'a> {
    title: [RichText<'a>; 1],
}

#[derive(serde::Serialize)]
struct RichText<'a> {
    text: TextContent<'a>,
}

#[derive(serde::Serialize)]
struct TextContent<'a> {
    content: &'a str,
}

#[derive(serde::Serialize)]
struct EmailProperty<'a> {
    email: &'a str,
}

impl<'a> CreatePageRequest<'a> {
    fn new(database_id: &'a str, email: &'a str) -> Self {
        Self {
            parent: Parent { database_id },
            properties: Properties {
                title: TitleProperty {
                    title: [RichText {
                        text: TextContent { content: email },
                    }],
                },
                email: EmailProperty { email },
            },
        }
    }
}

/// The two secrets needed to write to the record store.
#[derive(Clone, Debug)]
pub struct RecordStoreCredentials {
    pub api_key: Secret<String>,
    pub database_id: String,
}

#[derive(thiserror::Error)]
pub enum RecordStoreError {
    #[error("The record store API key or database id is not configured.")]
    MissingCredentials,
    #[error("The record store rejected the record with status {status}.")]
    Rejected {
        status: StatusCode,
        body: serde_json::Value,
    },
    #[error("Failed to reach the record store.")]
    Transport(#[from] reqwest::Error),
}

impl std::fmt::Debug for RecordStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

// these are costly to connect - instead we make one instance at startup and
// share it between workers
pub struct RecordStoreClient {
    http_client: Client,
    base_url: String,
    api_version: String,
    credentials: Option<RecordStoreCredentials>,
}

impl RecordStoreClient {
    pub fn new(
        base_url: String,
        credentials: Option<RecordStoreCredentials>,
        api_version: String,
        timeout: std::time::Duration,
    ) -> Result<Self, reqwest::Error> {
        // give up on the record store if it does not answer in time
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_version,
            credentials,
        })
    }

    /// Creates one record holding `email`. Nothing is deduplicated - the same
    /// address submitted twice ends up in two records.
    #[tracing::instrument(
        name = "Creating a waitlist record",
        skip_all,
        fields(waitlist_email = %email)
    )]
    pub async fn create_record(&self, email: &SubmissionEmail) -> Result<(), RecordStoreError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(RecordStoreError::MissingCredentials)?;

        let url = format!("{}/v1/pages", self.base_url);
        let request_body = CreatePageRequest::new(&credentials.database_id, email.as_ref());

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(credentials.api_key.expose_secret())
            .header("Notion-Version", &self.api_version)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // the error body is for our logs only - it never reaches the caller
        let body = response
            .json::<serde_json::Value>()
            .await
            .unwrap_or_else(|_| serde_json::json!({}));
        tracing::error!(
            record_store.status = %status,
            record_store.body = %body,
            "Record store API error",
        );

        Err(RecordStoreError::Rejected { status, body })
    }
}
