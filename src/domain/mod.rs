pub mod new_signup;
pub mod sender_email;
pub mod sender_name;
pub mod signup_form;
pub mod submission_status;

pub use new_signup::NewSignup;
pub use sender_email::SenderEmail;
pub use sender_name::SenderName;
pub use signup_form::{FormField, SignupForm, UnknownFormField};
pub use submission_status::SubmissionStatus;
