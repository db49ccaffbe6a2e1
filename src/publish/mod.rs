//! Publishing of image posts.

pub mod oauth;
pub mod twitter;

pub use twitter::TwitterPublisher;

use crate::config;
use crate::error::{ArtbotError, Result};
use std::fmt;
use std::path::Path;

/// Something that can publish an image with a caption.
pub trait Publisher {
    fn publish_image_post(&self, image: &Path, caption: &str) -> Result<()>;
}

/// OAuth 1.0a user-context credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_key: String,
    pub access_secret: String,
}

impl Credentials {
    /// Read the four credential values from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build credentials from any key lookup.
    ///
    /// Fails with [`ArtbotError::CredentialsMissing`] naming the first key
    /// that is absent or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ArtbotError::CredentialsMissing(key.to_string()))
        };
        Ok(Self {
            consumer_key: get(config::ENV_API_KEY)?,
            consumer_secret: get(config::ENV_API_SECRET)?,
            access_key: get(config::ENV_ACCESS_KEY)?,
            access_secret: get(config::ENV_ACCESS_SECRET)?,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("access_key", &self.access_key)
            .field("access_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn reads_all_four_values() {
        let vars = env(&[
            ("API_KEY", "ck"),
            ("API_SECRET", "cs"),
            ("ACCESS_KEY", "ak"),
            ("ACCESS_SECRET", "as"),
        ]);
        let creds = Credentials::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(creds.consumer_key, "ck");
        assert_eq!(creds.access_secret, "as");
    }

    #[test]
    fn missing_value_names_the_variable() {
        let vars = env(&[("API_KEY", "ck"), ("API_SECRET", "cs"), ("ACCESS_SECRET", "as")]);
        let err = Credentials::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        match err {
            ArtbotError::CredentialsMissing(name) => assert_eq!(name, "ACCESS_KEY"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let vars = env(&[
            ("API_KEY", ""),
            ("API_SECRET", "cs"),
            ("ACCESS_KEY", "ak"),
            ("ACCESS_SECRET", "as"),
        ]);
        assert!(Credentials::from_lookup(|k| vars.get(k).cloned()).is_err());
    }

    #[test]
    fn debug_redacts_secrets() {
        let creds = Credentials {
            consumer_key: "ck".into(),
            consumer_secret: "top-secret".into(),
            access_key: "ak".into(),
            access_secret: "also-secret".into(),
        };
        let shown = format!("{:?}", creds);
        assert!(!shown.contains("top-secret"));
        assert!(!shown.contains("also-secret"));
    }
}
