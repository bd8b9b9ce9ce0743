mod health_check;
mod waitlist;

// re-export
pub use health_check::*;
pub use waitlist::*;
