//! Resources needed to get the metadata of a file or a folder
//!
//! [More about it on the documentation](https://www.dropbox.com/developers/documentation/http/documentation#files-get_metadata).

use super::PathArg;
use crate::entry::{Entry, Metadata};
use crate::Error;

impl crate::Client {
    /// Fetches the metadata of a file or a folder.
    ///
    /// Fails with [`Error::UnknownMetadata`] when the service describes something else.
    #[tracing::instrument(skip(self))]
    pub async fn get_metadata(&self, path: &str) -> Result<Entry, Error> {
        let path = crate::path::normalize(path);
        let result: Metadata = self
            .rpc_request("files/get_metadata", &PathArg { path: &path })
            .await?;
        result
            .into_entry()
            .ok_or_else(|| Error::UnknownMetadata(path))
    }
}
