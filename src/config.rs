use crate::error::NotifyError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const CONFIG_PATH: &str = "config.json";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Upper bound on `timeout_time`, in seconds (one day).
pub const MAX_TIMEOUT_SECS: u64 = 24 * 60 * 60;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "is_false")]
    pub inline: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Embed {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub color: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub webhook_url: String,
    pub username: String,
    pub avatar_url: String,
    pub embed: Embed,
    /// Seconds; zero means "use the default".
    pub timeout_time: u64,
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

pub fn load(path: impl AsRef<Path>) -> Result<Config, NotifyError> {
    let path = path.as_ref();

    let contents = std::fs::read_to_string(path).map_err(|source| NotifyError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json5::from_str::<Config>(&contents).map_err(|source| NotifyError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

impl Config {
    /// Values above [`MAX_TIMEOUT_SECS`] are clamped to it.
    pub fn timeout(&self) -> Duration {
        if self.timeout_time == 0 {
            DEFAULT_TIMEOUT
        } else {
            Duration::from_secs(self.timeout_time.min(MAX_TIMEOUT_SECS))
        }
    }

    /// Checks that every required field is non-empty, reporting all of the
    /// empty ones at once.
    pub fn validate(&self) -> Result<(), NotifyError> {
        let mut missing = Vec::new();

        if self.webhook_url.is_empty() {
            missing.push("webhook_url".to_string());
        }
        if self.embed.title.is_empty() {
            missing.push("embed.title".to_string());
        }
        if self.embed.description.is_empty() {
            missing.push("embed.description".to_string());
        }

        for (i, field) in self.embed.fields.iter().enumerate() {
            if field.name.is_empty() {
                missing.push(format!("embed.fields[{}].name", i));
            }
            if field.value.is_empty() {
                missing.push(format!("embed.fields[{}].value", i));
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(NotifyError::ConfigValidation(missing))
        }
    }
}
