use std::borrow::Cow;
use std::time::Duration;

/// Errors that may occur during client configuration and building.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when no access token has been provided.
    #[error("no access token provided")]
    MissingCredentials,
    /// Returned when the underlying HTTP client could not be built.
    #[error("unable to build reqwest client")]
    Reqwest(#[from] reqwest::Error),
}

/// Reads the request timeout, in milliseconds, from `DROPBOX_TIMEOUT`.
fn timeout_from_env() -> Option<Duration> {
    let value = std::env::var("DROPBOX_TIMEOUT").ok()?;
    match value.parse::<u64>() {
        Ok(millis) => Some(Duration::from_millis(millis)),
        Err(err) => {
            tracing::warn!("ignoring invalid DROPBOX_TIMEOUT value {value:?}: {err}");
            None
        }
    }
}

/// Builder for constructing a [`Client`](crate::Client) with custom configuration.
///
/// This allows specifying the base URLs, the credentials, a timeout and optionally
/// customizing the inner `reqwest::ClientBuilder`.
///
/// ```
/// use valboks::builder::ClientBuilder;
/// use valboks::credentials::Credentials;
///
/// let _client = ClientBuilder::default()
///    .with_credentials(Credentials::access_token("my-token"))
///    .build()
///    .expect("unable to build http client");
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    api_url: Cow<'static, str>,
    content_url: Cow<'static, str>,
    client_builder: Option<reqwest::ClientBuilder>,
    credentials: Option<crate::Credentials>,
    timeout: Option<Duration>,
}

impl Default for ClientBuilder {
    /// Creates a new `ClientBuilder` targeting the public Dropbox endpoints, without credentials.
    fn default() -> Self {
        Self {
            api_url: Cow::Borrowed(crate::API_URL),
            content_url: Cow::Borrowed(crate::CONTENT_URL),
            client_builder: None,
            credentials: None,
            timeout: None,
        }
    }
}

impl ClientBuilder {
    /// Creates a builder pre-configured using environment variables.
    ///
    /// - Uses `DROPBOX_ACCESS_TOKEN` for credentials.
    /// - Uses `DROPBOX_TIMEOUT` for the request timeout, in milliseconds. Invalid values are ignored.
    pub fn from_env() -> Self {
        Self {
            credentials: crate::Credentials::from_env(),
            timeout: timeout_from_env(),
            ..Default::default()
        }
    }
}

impl ClientBuilder {
    /// Sets a custom base URL for the RPC endpoints.
    pub fn set_api_url(&mut self, value: impl Into<Cow<'static, str>>) {
        self.api_url = value.into();
    }

    /// Sets a custom base URL for the RPC endpoints and returns the modified builder.
    pub fn with_api_url(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.set_api_url(value);
        self
    }

    /// Sets a custom base URL for the content endpoints.
    pub fn set_content_url(&mut self, value: impl Into<Cow<'static, str>>) {
        self.content_url = value.into();
    }

    /// Sets a custom base URL for the content endpoints and returns the modified builder.
    pub fn with_content_url(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.set_content_url(value);
        self
    }

    /// Sets a custom `reqwest::ClientBuilder`.
    pub fn set_client_builder(&mut self, client_builder: reqwest::ClientBuilder) {
        self.client_builder = Some(client_builder);
    }

    /// Sets a custom `reqwest::ClientBuilder` and returns the modified builder.
    pub fn with_client_builder(mut self, client_builder: reqwest::ClientBuilder) -> Self {
        self.set_client_builder(client_builder);
        self
    }

    /// Sets the credentials for API authentication.
    pub fn set_credentials(&mut self, credentials: crate::Credentials) {
        self.credentials = Some(credentials);
    }

    /// Sets the credentials and returns the modified builder.
    pub fn with_credentials(mut self, credentials: crate::Credentials) -> Self {
        self.set_credentials(credentials);
        self
    }

    /// Sets the timeout applied to every request, overriding `DROPBOX_TIMEOUT`.
    pub fn set_timeout(&mut self, value: Duration) {
        self.timeout = Some(value);
    }

    /// Sets the request timeout and returns the modified builder.
    pub fn with_timeout(mut self, value: Duration) -> Self {
        self.set_timeout(value);
        self
    }

    /// Builds the [`Client`](crate::Client) with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredentials`] if no credentials were set.
    /// Returns [`Error::Reqwest`] if the HTTP client could not be built.
    pub fn build(self) -> Result<crate::Client, Error> {
        let credentials = self.credentials.ok_or(Error::MissingCredentials)?;
        let builder = self
            .client_builder
            .unwrap_or_default()
            .user_agent(crate::USER_AGENT);
        let builder = match self.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        Ok(crate::Client {
            api_url: self.api_url,
            content_url: self.content_url,
            credentials,
            inner: builder.build()?,
        })
    }
}
