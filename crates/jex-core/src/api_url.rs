//! Validated API base URL.

use std::fmt;

use url::Url;

use crate::error::Error;

/// Base URL of the production API.
pub const DEFAULT_API_BASE: &str = "https://api.ruguoapp.com";

/// A validated base URL for the Jike API.
///
/// Accepts `https` URLs, plus plain `http` so tests can point the
/// client at a local mock server.
///
/// # Example
///
/// ```
/// use jex_core::ApiUrl;
///
/// let api = ApiUrl::new("https://api.ruguoapp.com").unwrap();
/// assert_eq!(
///     api.endpoint("1.0/personalUpdate/single"),
///     "https://api.ruguoapp.com/1.0/personalUpdate/single"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new API base URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or uses a scheme
    /// other than `http`/`https`.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| Error::InvalidInput {
            message: format!("invalid API base URL '{}': {}", s, e),
        })?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(Error::InvalidInput {
                    message: format!("unsupported API URL scheme '{}'", other),
                });
            }
        }

        Ok(Self(url))
    }

    /// Returns the full URL for an endpoint path under this base.
    pub fn endpoint(&self, path: &str) -> String {
        // The url crate keeps a trailing slash on root paths; strip it
        // so the joined path has exactly one separator.
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, path)
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for ApiUrl {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE).expect("default API base URL is valid")
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
