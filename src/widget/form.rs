use crate::widget::WaitlistApi;

/// What the widget shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormView {
    /// The email input and the submit button.
    Idle,
    /// "You're on the list" - there is no way back to the form.
    Confirmation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Confirmed,
    /// Nothing but whitespace in the input, nothing was sent.
    Empty,
    /// The latch is already set, nothing was sent.
    AlreadySubmitted,
    /// The endpoint said no; see `WaitlistForm::error`.
    Failed,
}

/// The email input plus a one-way `has_submitted` latch.
#[derive(Debug, Default)]
pub struct WaitlistForm {
    email_text: String,
    has_submitted: bool,
    error: Option<String>,
}

impl WaitlistForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email_text(&self) -> &str {
        &self.email_text
    }

    pub fn has_submitted(&self) -> bool {
        self.has_submitted
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn view(&self) -> FormView {
        if self.has_submitted {
            FormView::Confirmation
        } else {
            FormView::Idle
        }
    }

    /// Typing clears a previous inline error. Ignored after a submission.
    pub fn set_email_text(&mut self, text: impl Into<String>) {
        if self.has_submitted {
            return;
        }
        self.email_text = text.into();
        self.error = None;
    }

    pub async fn submit(&mut self, api: &WaitlistApi) -> SubmitOutcome {
        if self.has_submitted {
            return SubmitOutcome::AlreadySubmitted;
        }
        let email = self.email_text.trim();
        if email.is_empty() {
            return SubmitOutcome::Empty;
        }

        match api.join(email).await {
            Ok(()) => {
                self.email_text.clear();
                self.error = None;
                self.has_submitted = true;
                SubmitOutcome::Confirmed
            }
            Err(e) => {
                tracing::warn!(error.cause_chain = ?e, "Waitlist submission failed");
                self.error = Some(e.user_message().to_owned());
                SubmitOutcome::Failed
            }
        }
    }
}
