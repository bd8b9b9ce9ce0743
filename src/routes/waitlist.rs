use crate::domain::WaitlistSubmission;
use crate::record_store_client::{RecordStoreClient, RecordStoreError};
use crate::utils::{error_chain_fmt, json_error};
use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};

// the body the landing page posts: {"email": "..."}
// a missing or non-string email fails deserialisation and ends up as a 400
// through the error handler in `waitlist_json_config`
#[derive(serde::Deserialize)]
pub struct JoinRequest {
    email: String,
}

impl TryFrom<JoinRequest> for WaitlistSubmission {
    type Error = String;

    fn try_from(value: JoinRequest) -> Result<Self, Self::Error> {
        WaitlistSubmission::try_from(value.email)
    }
}

#[derive(serde::Serialize)]
struct JoinResponse {
    success: bool,
}

#[derive(thiserror::Error)]
pub enum WaitlistError {
    #[error("Email is required")]
    InvalidInput,
    #[error("Server misconfigured")]
    Misconfigured,
    // the message is all the caller sees - the cause only goes to the logs
    #[error("Failed to save email")]
    UpstreamFailure(#[source] anyhow::Error),
}

impl std::fmt::Debug for WaitlistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for WaitlistError {
    fn status_code(&self) -> StatusCode {
        match self {
            WaitlistError::InvalidInput => StatusCode::BAD_REQUEST,
            WaitlistError::Misconfigured | WaitlistError::UpstreamFailure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        json_error(self.status_code(), &self.to_string())
    }
}

impl From<RecordStoreError> for WaitlistError {
    fn from(e: RecordStoreError) -> Self {
        match e {
            RecordStoreError::MissingCredentials => WaitlistError::Misconfigured,
            other => WaitlistError::UpstreamFailure(
                anyhow::Error::new(other).context("Failed to create a waitlist record."),
            ),
        }
    }
}

/// Json extractor settings for the waitlist route - any payload that can't be
/// read as `{"email": string}` is answered with our own 400 body.
pub fn waitlist_json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        // the page posts JSON, but don't turn away clients that forget the header
        .content_type_required(false)
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
            tracing::warn!(error.message = %err, "Rejected a waitlist payload");
            WaitlistError::InvalidInput.into()
        })
}

#[tracing::instrument(
    name = "Adding an email to the waitlist",
    skip(body, record_store_client),
    fields(waitlist_email = %body.email)
)]
pub async fn join_waitlist(
    body: web::Json<JoinRequest>,
    record_store_client: web::Data<RecordStoreClient>,
) -> Result<HttpResponse, WaitlistError> {
    let submission: WaitlistSubmission = body
        .0
        .try_into()
        .map_err(|_| WaitlistError::InvalidInput)?;

    // a missing api key / database id surfaces here as `Misconfigured`
    record_store_client.create_record(&submission.email).await?;

    Ok(HttpResponse::Ok().json(JoinResponse { success: true }))
}
