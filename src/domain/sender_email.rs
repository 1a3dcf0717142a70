//! src/domain/sender_email.rs

/// The signer-up's Spotify email.
///
/// Format checking belongs to the `type="email"` input on the page; here we
/// only insist that something was entered.
#[derive(Debug, Clone)]
pub struct SenderEmail(String);

impl SenderEmail {
    pub fn parse(s: String) -> Result<SenderEmail, String> {
        if s.trim().is_empty() {
            return Err("Your Spotify email is required.".into());
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for SenderEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
