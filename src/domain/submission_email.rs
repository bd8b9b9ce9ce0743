// The only check made on a waitlist email is that there is one - the
// record store is trusted with everything else, so no format validation
#[derive(Debug, Clone)]
pub struct SubmissionEmail(String);

impl SubmissionEmail {
    pub fn parse(s: String) -> Result<SubmissionEmail, String> {
        if s.is_empty() {
            Err("Email is required".to_string())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for SubmissionEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubmissionEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
