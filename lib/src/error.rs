//! The errors returned by the client

/// Size from which a file cannot be sent in a single upload request (150 MiB)
pub const MAX_UPLOAD_SIZE: u64 = 150 * 1024 * 1024;

/// All the possible errors returned by the client and the API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The access token has been rejected by the service
    #[error("access token rejected: {0}")]
    Auth(String),
    /// The requested path does not exist
    #[error("path not found: {0}")]
    NotFound(String),
    /// Something already exists at the destination
    #[error("conflict at destination: {0}")]
    Conflict(String),
    /// Any other error returned by the service
    #[error("request failed with status {status}: {summary}")]
    Remote { status: u16, summary: String },
    /// The service returned an entry kind this client doesn't know about
    #[error("unknown metadata kind returned for {0:?}")]
    UnknownMetadata(String),
    /// The local file is too big to be sent in a single request
    #[error("file of {size} bytes exceeds the {limit} bytes single upload limit")]
    SizeLimit { size: u64, limit: u64 },
    /// Unable to reach the service
    #[error("unable to send request")]
    Reqwest(#[from] reqwest::Error),
    /// Unable to parse a JSON response
    #[error("unable to read response")]
    SerdeJson(#[from] serde_json::Error),
    /// Error while reading or writing a local file
    #[error("local file error")]
    Io(#[from] std::io::Error),
}

/// Error body of the API, only the summary is relevant for this client
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error_summary: String,
}

impl Error {
    /// Builds the error matching a non successful response
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        let summary = serde_json::from_str::<ErrorBody>(body)
            .map(|inner| inner.error_summary)
            .unwrap_or_else(|_| body.trim().to_string());
        match status {
            401 => Self::Auth(summary),
            409 if summary.contains("not_found") => Self::NotFound(summary),
            409 if summary.contains("conflict") => Self::Conflict(summary),
            _ => Self::Remote { status, summary },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn should_map_unauthorized() {
        let err = Error::from_response(
            401,
            r#"{"error_summary": "invalid_access_token/...", "error": {".tag": "invalid_access_token"}}"#,
        );
        assert!(matches!(err, Error::Auth(ref summary) if summary == "invalid_access_token/..."));
    }

    #[test]
    fn should_map_path_errors() {
        let err = Error::from_response(
            409,
            r#"{"error_summary": "path/not_found/..", "error": {".tag": "path", "path": {".tag": "not_found"}}}"#,
        );
        assert!(err.is_not_found());
        let err = Error::from_response(
            409,
            r#"{"error_summary": "path/conflict/file/...", "error": {".tag": "path"}}"#,
        );
        assert!(matches!(err, Error::Conflict(_)));
        let err = Error::from_response(409, r#"{"error_summary": "path/malformed_path/"}"#);
        assert!(matches!(err, Error::Remote { status: 409, .. }));
    }

    #[test]
    fn should_keep_plain_text_bodies() {
        let err = Error::from_response(400, "Error in call to API function \"files/list_folder\"\n");
        match err {
            Error::Remote { status, summary } => {
                assert_eq!(status, 400);
                assert_eq!(summary, "Error in call to API function \"files/list_folder\"");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
