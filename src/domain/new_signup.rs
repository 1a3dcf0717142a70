//! src/domain/new_signup.rs

use crate::domain::sender_email::SenderEmail;
use crate::domain::sender_name::SenderName;
use crate::domain::signup_form::SignupForm;

/// A signup that passed the required-field check and is ready to dispatch.
#[derive(Debug, Clone)]
pub struct NewSignup {
    pub name: SenderName,
    pub email: SenderEmail,
    pub friend_name: String,
    pub friend_email: String,
}

impl TryFrom<&SignupForm> for NewSignup {
    type Error = String;

    fn try_from(form: &SignupForm) -> Result<Self, Self::Error> {
        let name = SenderName::parse(form.sender_name.clone())?;
        let email = SenderEmail::parse(form.sender_email.clone())?;
        Ok(Self {
            name,
            email,
            friend_name: form.friend_name.clone(),
            friend_email: form.friend_email.clone(),
        })
    }
}
