//! src/routes/signup.rs

use std::fmt::Formatter;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};

use crate::controller::{SignupController, SubmitRejected};
use crate::domain::{FormField, SubmissionStatus, UnknownFormField};
use crate::mail::EmailJsClient;
use crate::routes::landing::{page_response, Notice};
use crate::utils::error_chain_fmt;

#[derive(thiserror::Error)]
pub enum SignupError {
    #[error(transparent)]
    UnknownField(#[from] UnknownFormField),
}

impl std::fmt::Debug for SignupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SignupError {
    fn status_code(&self) -> StatusCode {
        match self {
            SignupError::UnknownField(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Handles the "Get Access" form.
///
/// Each posted pair is applied as a field change on a fresh controller,
/// which then submits; the page is rendered from whatever state it ends in.
#[tracing::instrument(name = "Handling signup form", skip(form, email_client))]
pub async fn signup(
    form: web::Form<Vec<(String, String)>>,
    email_client: web::Data<EmailJsClient>,
) -> Result<HttpResponse, SignupError> {
    let changes = form
        .0
        .into_iter()
        .map(|(key, value)| Ok((key.parse::<FormField>()?, value)))
        .collect::<Result<Vec<_>, SignupError>>()?;

    let controller = SignupController::new(email_client.into_inner());
    for (field, value) in changes {
        controller.on_field_change(field, value).await;
    }

    let outcome = controller.on_submit().await;
    let state = controller.snapshot().await;

    let response = match outcome {
        Ok(SubmissionStatus::Success) => page_response(StatusCode::OK, &state, Notice::None),
        Ok(_) => page_response(StatusCode::INTERNAL_SERVER_ERROR, &state, Notice::None),
        Err(SubmitRejected::MissingRequiredField(_)) => page_response(
            StatusCode::BAD_REQUEST,
            &state,
            Notice::Invalid("Please fill in your name and Spotify email."),
        ),
        Err(e @ SubmitRejected::InFlight) => HttpResponse::Conflict().body(e.to_string()),
    };
    tracing::info!(status = %state.status, "Signup form settled");

    Ok(response)
}
