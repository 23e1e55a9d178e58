//! Resources needed to list the content of a folder
//!
//! [More about it on the documentation](https://www.dropbox.com/developers/documentation/http/documentation#files-list_folder).

use crate::entry::{Entry, Metadata};
use crate::Error;

/// Options to tune a folder listing
#[derive(Debug, Default, Clone, serde::Serialize)]
pub struct ListFolderOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
}

impl ListFolderOptions {
    /// Maximum number of entries returned per page. This is only a hint for the service.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[derive(Debug, serde::Serialize)]
struct ListFolderArg<'a> {
    path: &'a str,
    #[serde(flatten)]
    options: &'a ListFolderOptions,
}

#[derive(Debug, serde::Serialize)]
struct ListFolderContinueArg<'a> {
    cursor: &'a str,
}

#[derive(Debug, serde::Deserialize)]
struct ListFolderResult {
    entries: Vec<Metadata>,
    cursor: String,
    has_more: bool,
}

impl ListFolderResult {
    fn append_to(self, result: &mut Vec<Entry>) -> (String, bool) {
        result.extend(self.entries.into_iter().filter_map(Metadata::into_entry));
        (self.cursor, self.has_more)
    }
}

impl crate::Client {
    /// Lists the content of a folder, following the pages until the end.
    ///
    /// Entries that are neither files nor folders are skipped.
    pub async fn list_folder(&self, path: &str) -> Result<Vec<Entry>, Error> {
        self.list_folder_with_options(path, ListFolderOptions::default())
            .await
    }

    #[tracing::instrument(skip(self, options))]
    pub async fn list_folder_with_options(
        &self,
        path: &str,
        options: ListFolderOptions,
    ) -> Result<Vec<Entry>, Error> {
        let path = crate::path::normalize(path);
        let page: ListFolderResult = self
            .rpc_request(
                "files/list_folder",
                &ListFolderArg {
                    path: &path,
                    options: &options,
                },
            )
            .await?;
        let mut result = Vec::new();
        let (mut cursor, mut has_more) = page.append_to(&mut result);
        while has_more {
            tracing::debug!("fetching next page after {} entries", result.len());
            let page: ListFolderResult = self
                .rpc_request(
                    "files/list_folder/continue",
                    &ListFolderContinueArg { cursor: &cursor },
                )
                .await?;
            (cursor, has_more) = page.append_to(&mut result);
        }
        Ok(result)
    }

    /// Checks that the access token is accepted by doing a single entry listing of the root folder.
    pub async fn test_connection(&self) -> Result<(), Error> {
        let options = ListFolderOptions::default().with_limit(1);
        let _: ListFolderResult = self
            .rpc_request(
                "files/list_folder",
                &ListFolderArg {
                    path: "",
                    options: &options,
                },
            )
            .await?;
        Ok(())
    }
}
