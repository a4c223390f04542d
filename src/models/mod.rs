mod contact_submission;
mod waitlist_entry;

pub use contact_submission::ContactSubmission;
pub use waitlist_entry::WaitlistEntry;
