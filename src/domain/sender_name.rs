//! src/domain/sender_name.rs

#[derive(Debug, Clone)]
pub struct SenderName(String);

impl SenderName {
    /// Only presence is checked; the value is forwarded as typed.
    pub fn parse(s: String) -> Result<SenderName, String> {
        if s.trim().is_empty() {
            return Err("Your name is required.".into());
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for SenderName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use claim::{assert_err, assert_ok};
    use fake::faker::name::en::Name;
    use fake::Fake;

    use super::SenderName;

    #[test]
    fn whitespace_only_names_are_rejected() {
        let name = " \t".to_string();
        assert_err!(SenderName::parse(name));
    }

    #[test]
    fn empty_string_is_rejected() {
        let name = "".to_string();
        assert_err!(SenderName::parse(name));
    }

    #[test]
    fn a_valid_name_is_parsed_successfully() {
        let name: String = Name().fake();
        assert_ok!(SenderName::parse(name));
    }

    #[test]
    fn surrounding_whitespace_is_kept() {
        let name = SenderName::parse(" Alice ".to_string()).unwrap();
        assert_eq!(name.as_ref(), " Alice ");
    }
}
