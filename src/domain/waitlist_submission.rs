use crate::domain::SubmissionEmail;

// An interested visitor's request to join the waitlist - built from the
// request body, relayed to the record store, then dropped
#[derive(Debug)]
pub struct WaitlistSubmission {
    pub email: SubmissionEmail,
}

impl TryFrom<String> for WaitlistSubmission {
    type Error = String;

    fn try_from(email: String) -> Result<Self, Self::Error> {
        let email = SubmissionEmail::parse(email)?;
        Ok(Self { email })
    }
}
