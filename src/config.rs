// Configuration is resolved once at startup and passed down explicitly;
// nothing else in the crate reads the process environment.

use crate::error::LookupError;

/// Environment variable holding the Bing search subscription key.
/// Keys are issued at <https://azure.microsoft.com/en-us/try/cognitive-services/>.
pub const KEY_ENV_VAR: &str = "BING_SEARCH_API_KEY";

/// The Ghibli films catalog endpoint. Unauthenticated.
pub const CATALOG_URL: &str = "https://ghibliapi.herokuapp.com/films";

/// The Bing v7 image-search endpoint. Requires the subscription key.
pub const SEARCH_URL: &str = "https://api.cognitive.microsoft.com/bing/v7.0/images/search";

/// Validated configuration for one run of the lookup pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential sent with every image-search request.
    pub subscription_key: String,
    pub catalog_url: String,
    pub search_url: String,
}

impl Config {
    /// Build a configuration, rejecting an empty credential.
    pub fn new(
        subscription_key: impl Into<String>,
        catalog_url: impl Into<String>,
        search_url: impl Into<String>,
    ) -> Result<Self, LookupError> {
        let subscription_key = subscription_key.into();
        if subscription_key.is_empty() {
            return Err(LookupError::MissingCredential { name: KEY_ENV_VAR });
        }
        Ok(Config {
            subscription_key,
            catalog_url: catalog_url.into(),
            search_url: search_url.into(),
        })
    }

    /// Read the credential from `BING_SEARCH_API_KEY` and pair it with
    /// the fixed endpoint URLs. An absent or empty variable is a fatal
    /// configuration error.
    pub fn from_env() -> Result<Self, LookupError> {
        let key = std::env::var(KEY_ENV_VAR).unwrap_or_default();
        Config::new(key, CATALOG_URL, SEARCH_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_credential() {
        let err = Config::new("", CATALOG_URL, SEARCH_URL).unwrap_err();
        assert!(matches!(
            err,
            LookupError::MissingCredential { name: KEY_ENV_VAR }
        ));
    }

    #[test]
    fn accepts_non_empty_credential() {
        let config = Config::new("secret-key", CATALOG_URL, SEARCH_URL).unwrap();
        assert_eq!(config.subscription_key, "secret-key");
        assert_eq!(config.catalog_url, CATALOG_URL);
    }
}
