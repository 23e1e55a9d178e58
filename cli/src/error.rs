use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Usage(String),
    #[error("not authenticated, run `valboks-cli auth --app-key <KEY> --app-secret <SECRET>` first")]
    AuthRequired,
    #[error("authentication with dropbox failed, invalid access token")]
    Auth(#[source] valboks::Error),
    #[error("unable to validate the access token with dropbox")]
    Connection(#[source] valboks::Error),
    #[error("local file {0:?} does not exist")]
    FileNotFound(PathBuf),
    #[error("unable to {operation} {path:?}")]
    Remote {
        operation: &'static str,
        path: String,
        #[source]
        source: valboks::Error,
    },
    #[error(transparent)]
    Config(#[from] crate::config::Error),
    #[error("unable to create dropbox client")]
    Client(#[from] valboks::builder::Error),
    #[error("unable to read from terminal")]
    Prompt(#[source] std::io::Error),
    #[error("unable to write output")]
    Output(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn remote(operation: &'static str, path: &str) -> impl FnOnce(valboks::Error) -> Self {
        let path = path.to_string();
        move |source| Self::Remote {
            operation,
            path,
            source,
        }
    }

    /// Classifies a failed token validation, only a rejection meaning the token is invalid.
    pub(crate) fn validation(source: valboks::Error) -> Self {
        if source.is_auth() {
            Self::Auth(source)
        } else {
            Self::Connection(source)
        }
    }

    /// Process exit code matching the error
    pub fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::Usage(_) => exitcode::USAGE,
            Self::AuthRequired | Self::Auth(_) => exitcode::NOPERM,
            Self::FileNotFound(_) => exitcode::NOINPUT,
            Self::Remote { source, .. } | Self::Connection(source) => match source {
                valboks::Error::Auth(_) => exitcode::NOPERM,
                valboks::Error::Reqwest(_) => exitcode::UNAVAILABLE,
                valboks::Error::Io(_) => exitcode::IOERR,
                _ => exitcode::DATAERR,
            },
            Self::Config(_) => exitcode::CONFIG,
            Self::Client(_) => exitcode::SOFTWARE,
            Self::Prompt(_) | Self::Output(_) => exitcode::IOERR,
        }
    }
}
