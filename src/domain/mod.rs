mod submission_email;
mod waitlist_submission;

pub use submission_email::SubmissionEmail;
pub use waitlist_submission::WaitlistSubmission;
