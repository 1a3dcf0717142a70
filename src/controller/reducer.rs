//! src/controller/reducer.rs
//!
//! Every change to the signup page goes through [`reduce`], so the whole
//! submit cycle can be exercised without a server or a browser.

use crate::domain::{FormField, SignupForm, SubmissionStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupState {
    pub form: SignupForm,
    pub status: SubmissionStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupEvent {
    FieldChanged { field: FormField, value: String },
    SubmitStarted,
    DispatchSucceeded,
    DispatchFailed,
}

pub fn reduce(state: SignupState, event: SignupEvent) -> SignupState {
    match (state.status, event) {
        // Typing is allowed in every state, including while a send is in flight.
        (status, SignupEvent::FieldChanged { field, value }) => SignupState {
            form: state.form.with_field(field, value),
            status,
        },
        (SubmissionStatus::Submitting, SignupEvent::SubmitStarted) => state,
        (_, SignupEvent::SubmitStarted) => SignupState {
            status: SubmissionStatus::Submitting,
            ..state
        },
        (SubmissionStatus::Submitting, SignupEvent::DispatchSucceeded) => SignupState {
            form: SignupForm::default(),
            status: SubmissionStatus::Success,
        },
        (SubmissionStatus::Submitting, SignupEvent::DispatchFailed) => SignupState {
            status: SubmissionStatus::Error,
            ..state
        },
        // A completion with nothing in flight is stale.
        (_, SignupEvent::DispatchSucceeded | SignupEvent::DispatchFailed) => state,
    }
}
