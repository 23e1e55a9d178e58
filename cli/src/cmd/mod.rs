pub mod auth;
pub mod delete;
pub mod download;
pub mod info;
pub mod list;
pub mod mkdir;
pub mod upload;

use crate::config::Store;
use crate::prompt::LineReader;
use crate::remote::{Connect, Storage};
use crate::Error;

/// Everything a command needs, built once per invocation
pub struct Context<'a> {
    pub store: &'a mut Store,
    pub connector: &'a dyn Connect,
    pub input: &'a mut dyn LineReader,
    pub output: &'a mut dyn std::io::Write,
}

impl Context<'_> {
    /// Connects with the stored access token, failing when the user never authenticated.
    pub(crate) fn storage(&self) -> Result<Box<dyn Storage>, Error> {
        if !self.store.is_configured() {
            return Err(Error::AuthRequired);
        }
        self.connector
            .connect(self.store.credentials().access_token.as_str())
    }
}
