//! src/controller/signup.rs

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::controller::reducer::{reduce, SignupEvent, SignupState};
use crate::domain::{FormField, NewSignup, SubmissionStatus};
use crate::mail::EmailJsClient;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("A submission is already in flight for this form.")]
    InFlight,

    #[error("{0}")]
    MissingRequiredField(String),
}

/// Drives one signup form: field edits, submission and the resulting status.
///
/// At most one dispatch is in flight per controller; a second `on_submit`
/// while the first is pending is refused without touching EmailJS.
pub struct SignupController {
    state: Mutex<SignupState>,
    email_client: Arc<EmailJsClient>,
}

impl SignupController {
    pub fn new(email_client: Arc<EmailJsClient>) -> Self {
        Self {
            state: Mutex::new(SignupState::default()),
            email_client,
        }
    }

    pub async fn snapshot(&self) -> SignupState {
        self.state.lock().await.clone()
    }

    pub async fn on_field_change(&self, field: FormField, value: String) {
        self.apply(SignupEvent::FieldChanged { field, value }).await;
    }

    /// Sends the current form and returns the status it settled on,
    /// either `Success` or `Error`.
    ///
    /// A failed dispatch is not an `Err`: it is logged and reported as
    /// `SubmissionStatus::Error`, with the form left as it was.
    #[tracing::instrument(name = "Submitting signup form", skip(self))]
    pub async fn on_submit(&self) -> Result<SubmissionStatus, SubmitRejected> {
        let signup = {
            let mut state = self.state.lock().await;
            if state.status.is_submitting() {
                tracing::warn!("Ignoring submit while a send is in flight");
                return Err(SubmitRejected::InFlight);
            }
            let signup = NewSignup::try_from(&state.form)
                .map_err(SubmitRejected::MissingRequiredField)?;
            *state = reduce(std::mem::take(&mut *state), SignupEvent::SubmitStarted);
            signup
        };

        let event = match self.email_client.send(&signup).await {
            Ok(()) => {
                tracing::info!("Signup email dispatched");
                SignupEvent::DispatchSucceeded
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to dispatch signup email"
                );
                SignupEvent::DispatchFailed
            }
        };

        Ok(self.apply(event).await)
    }

    async fn apply(&self, event: SignupEvent) -> SubmissionStatus {
        let mut state = self.state.lock().await;
        *state = reduce(std::mem::take(&mut *state), event);
        state.status
    }
}
