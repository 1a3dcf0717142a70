//! src/domain/signup_form.rs
//!
//! The four text inputs of the "Get Access" card, held together as one record.

use std::str::FromStr;

/// Keys of the signup form, named after the page's input `name` attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    SenderName,
    SenderEmail,
    FriendName,
    FriendEmail,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::SenderName,
        FormField::SenderEmail,
        FormField::FriendName,
        FormField::FriendEmail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::SenderName => "name",
            FormField::SenderEmail => "email",
            FormField::FriendName => "friendName",
            FormField::FriendEmail => "friendEmail",
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("`{0}` is not a field of the signup form.")]
pub struct UnknownFormField(pub String);

impl FromStr for FormField {
    type Err = UnknownFormField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownFormField(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub sender_name: String,
    pub sender_email: String,
    pub friend_name: String,
    pub friend_email: String,
}

impl SignupForm {
    /// Replaces exactly one field, keeping the other three.
    pub fn with_field(mut self, field: FormField, value: String) -> Self {
        *self.field_mut(field) = value;
        self
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::SenderName => &self.sender_name,
            FormField::SenderEmail => &self.sender_email,
            FormField::FriendName => &self.friend_name,
            FormField::FriendEmail => &self.friend_email,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::SenderName => &mut self.sender_name,
            FormField::SenderEmail => &mut self.sender_email,
            FormField::FriendName => &mut self.friend_name,
            FormField::FriendEmail => &mut self.friend_email,
        }
    }
}
