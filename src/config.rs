use std::path::PathBuf;

use secrecy::{ExposeSecret, Secret};
use serde_aux::prelude::deserialize_number_from_string;

use crate::mail::emailjs::EmailJsCredentials;

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other,
            )),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigurationError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("{0}")]
    UnsupportedEnvironment(String),

    #[error("Failed to determine the current directory")]
    WorkingDirectory(#[source] std::io::Error),

    // Names the key so the operator knows which variable to export.
    #[error("`emailjs.{0}` is not set (export APP_EMAILJS__{1})")]
    MissingEmailJsSetting(&'static str, &'static str),
}

#[derive(serde::Deserialize, Clone)]
pub struct AppConfig {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub assets_dir: PathBuf,
}

/// Deployment settings for the EmailJS dispatch call.
///
/// The three identifiers default to blank in `base.yaml` and are expected to
/// come from the environment; use [`EmailJsSettings::credentials`] to turn
/// them into something the client will accept.
#[derive(serde::Deserialize, Clone)]
pub struct EmailJsSettings {
    pub base_url: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: Secret<String>,
}

impl EmailJsSettings {
    pub fn credentials(&self) -> Result<EmailJsCredentials, ConfigurationError> {
        let required = [
            ("service_id", "SERVICE_ID", self.service_id.as_str()),
            ("template_id", "TEMPLATE_ID", self.template_id.as_str()),
            ("public_key", "PUBLIC_KEY", self.public_key.expose_secret().as_str()),
        ];

        if let Some(&(key, variable, _)) = required
            .iter()
            .find(|(_, _, value)| value.trim().is_empty())
        {
            return Err(ConfigurationError::MissingEmailJsSetting(key, variable));
        }

        Ok(EmailJsCredentials {
            service_id: self.service_id.clone(),
            template_id: self.template_id.clone(),
            public_key: self.public_key.clone(),
        })
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct Configuration {
    pub app: AppConfig,
    pub emailjs: EmailJsSettings,
}

pub fn get_configuration() -> Result<Configuration, ConfigurationError> {
    let mut settings = config::Config::default();

    let base_path = std::env::current_dir().map_err(ConfigurationError::WorkingDirectory)?;
    let configuration_directory = base_path.join("configuration");

    // Read in default configuration
    settings.merge(config::File::from(configuration_directory.join("base")).required(true))?;

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigurationError::UnsupportedEnvironment)?;

    // Read in layer environment specific file.
    settings.merge(
        config::File::from(configuration_directory.join(environment.as_str())).required(true),
    )?;

    // e.g. `APP_EMAILJS__SERVICE_ID=service_xyz` sets `emailjs.service_id`.
    settings.merge(config::Environment::with_prefix("app").separator("__"))?;

    Ok(settings.try_into::<Configuration>()?)
}

#[cfg(test)]
mod tests {
    use claim::{assert_err, assert_ok};
    use secrecy::{ExposeSecret, Secret};

    use super::{ConfigurationError, EmailJsSettings, Environment};

    fn settings(service_id: &str, template_id: &str, public_key: &str) -> EmailJsSettings {
        EmailJsSettings {
            base_url: "https://api.emailjs.com".into(),
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: Secret::new(public_key.into()),
        }
    }

    #[test]
    fn complete_settings_produce_credentials() {
        let credentials = settings("service_abc", "template_abc", "public-key")
            .credentials()
            .expect("credentials should be accepted");

        assert_eq!(credentials.service_id, "service_abc");
        assert_eq!(credentials.template_id, "template_abc");
        assert_eq!(credentials.public_key.expose_secret(), "public-key");
    }

    #[test]
    fn each_blank_identifier_is_reported_by_name() {
        let test_cases = vec![
            (settings("", "template_abc", "key"), "service_id"),
            (settings("service_abc", " ", "key"), "template_id"),
            (settings("service_abc", "template_abc", ""), "public_key"),
        ];

        for (settings, expected) in test_cases {
            match settings.credentials() {
                Err(ConfigurationError::MissingEmailJsSetting(key, _)) => {
                    assert_eq!(key, expected)
                }
                _ => panic!("blank `{}` should have been rejected", expected),
            }
        }
    }

    #[test]
    fn environment_names_are_case_insensitive() {
        assert_ok!(Environment::try_from("Production".to_string()));
        assert_ok!(Environment::try_from("local".to_string()));
        assert_err!(Environment::try_from("staging".to_string()));
    }
}
