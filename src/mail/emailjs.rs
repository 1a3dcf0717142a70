//! src/mail/emailjs.rs

use std::fmt::Formatter;

use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

use crate::domain::NewSignup;
use crate::utils::error_chain_fmt;

/// The three deployment identifiers EmailJS needs for every send.
#[derive(Clone)]
pub struct EmailJsCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: Secret<String>,
}

/// Values substituted into the EmailJS message template.
#[derive(serde::Serialize, Debug, PartialEq, Eq)]
pub struct TemplateParams<'a> {
    pub from_name: &'a str,
    pub from_email: &'a str,
    pub friend_name: &'a str,
    pub friend_email: &'a str,
}

impl<'a> From<&'a NewSignup> for TemplateParams<'a> {
    fn from(signup: &'a NewSignup) -> Self {
        Self {
            from_name: signup.name.as_ref(),
            from_email: signup.email.as_ref(),
            friend_name: &signup.friend_name,
            friend_email: &signup.friend_email,
        }
    }
}

#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// Any failed dispatch, whatever the cause.
#[derive(thiserror::Error)]
#[error("Failed to dispatch the signup email through EmailJS")]
pub struct SubmissionFailure(#[from] reqwest::Error);

impl std::fmt::Debug for SubmissionFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub struct EmailJsClient {
    http_client: Client,
    base_url: String,
    credentials: EmailJsCredentials,
}

impl EmailJsClient {
    pub fn new(base_url: String, credentials: EmailJsCredentials) -> Self {
        Self {
            // No timeout: the send settles when EmailJS (or the network) says so.
            http_client: Client::new(),
            base_url,
            credentials,
        }
    }

    #[tracing::instrument(
        name = "Dispatching signup email",
        skip(self, signup),
        fields(template_id = %self.credentials.template_id)
    )]
    pub async fn send(&self, signup: &NewSignup) -> Result<(), SubmissionFailure> {
        let url = format!("{}/api/v1.0/email/send", self.base_url);
        let request_body = SendEmailRequest {
            service_id: &self.credentials.service_id,
            template_id: &self.credentials.template_id,
            user_id: self.credentials.public_key.expose_secret(),
            template_params: signup.into(),
        };

        self.http_client
            .post(&url)
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
