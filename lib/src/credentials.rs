//! The bearer token presented on every authenticated request, as described in
//! [the documentation](https://www.dropbox.com/developers/reference/auth-types).

use std::fmt;

/// An OAuth2 access token
///
/// The `Debug` implementation never prints the token itself.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_token: String,
}

impl Credentials {
    pub fn access_token<S: Into<String>>(access_token: S) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    /// Creates the credentials from the `DROPBOX_ACCESS_TOKEN` environment variable
    ///
    /// ```rust
    /// use valboks::credentials::Credentials;
    ///
    /// match Credentials::from_env() {
    ///     Some(_) => println!("uses an access token"),
    ///     None => eprintln!("no credentials provided"),
    /// }
    /// ```
    pub fn from_env() -> Option<Self> {
        std::env::var("DROPBOX_ACCESS_TOKEN")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(Self::access_token)
    }

    pub(crate) fn token(&self) -> &str {
        self.access_token.as_str()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"********")
            .finish()
    }
}
