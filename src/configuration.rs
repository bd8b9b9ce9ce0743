use crate::record_store_client::RecordStoreCredentials;
use secrecy::{ExposeSecret, Secret};
use serde_aux::field_attributes::deserialize_number_from_string;

// this code reads in app-specific settings from the files in configuration/
// and from APP_ prefixed environment variables

// A struct holding settings relevent to this run
#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    // the address the app listens on
    pub application: ApplicationSettings,
    // where waitlist entries are relayed to
    pub record_store: RecordStoreSettings,
}

// port listening on and host environemnt (docker image - production, or debug)
#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    // env vars are always strings - serde-aux parses the number out of them
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

// settings for the external record store (a Notion database)
// the two secrets are optional here - a missing one is reported per request
// as a misconfigured server rather than stopping startup
#[derive(serde::Deserialize, Clone, Debug)]
pub struct RecordStoreSettings {
    pub base_url: String,
    pub api_key: Option<Secret<String>>, // this will be redacted unless unwrapped
    pub database_id: Option<String>,
    pub api_version: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl RecordStoreSettings {
    /// Both secrets, or `None` if either is missing or blank.
    pub fn credentials(&self) -> Option<RecordStoreCredentials> {
        let api_key = self
            .api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())?;
        let database_id = self
            .database_id
            .as_ref()
            .filter(|id| !id.trim().is_empty())?;

        Some(RecordStoreCredentials {
            api_key: api_key.clone(),
            database_id: database_id.clone(),
        })
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }
}

// we will read our configuration settings from the configuration/ directory
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");

    let configuration_directory = base_path.join("configuration");
    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT.");

    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.yaml"),
        ))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // APP_RECORD_STORE__API_KEY maps to Settings.record_store.api_key
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

/// The possible runtime environment for our application.
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

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. \
                Use either `local` or `production`.",
                other
            )),
        }
    }
}
