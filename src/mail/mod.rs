pub mod emailjs;

pub use emailjs::{EmailJsClient, EmailJsCredentials, SubmissionFailure, TemplateParams};
