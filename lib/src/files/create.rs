//! Resources needed to create a folder
//!
//! [More about it on the documentation](https://www.dropbox.com/developers/documentation/http/documentation#files-create_folder).

use super::MetadataResponse;
use crate::entry::Folder;
use crate::Error;

#[derive(Debug, serde::Serialize)]
struct CreateFolderArg<'a> {
    path: &'a str,
    autorename: bool,
}

impl crate::Client {
    /// Creates a folder, failing with [`Error::Conflict`] if something already exists at that path.
    #[tracing::instrument(skip(self))]
    pub async fn create_folder(&self, path: &str) -> Result<Folder, Error> {
        let path = crate::path::normalize(path);
        let result: MetadataResponse<Folder> = self
            .rpc_request(
                "files/create_folder_v2",
                &CreateFolderArg {
                    path: &path,
                    autorename: false,
                },
            )
            .await?;
        Ok(result.metadata)
    }
}
