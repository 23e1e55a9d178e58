//! Operations of the [files namespace](https://www.dropbox.com/developers/documentation/http/documentation#files-list_folder)

pub mod create;
pub mod delete;
pub mod download;
pub mod list;
pub mod metadata;
pub mod upload;

/// Arguments of the calls only targeting a path
#[derive(Debug, serde::Serialize)]
pub(crate) struct PathArg<'a> {
    pub path: &'a str,
}

/// Response of the calls wrapping the entry in a `metadata` field
#[derive(Debug, serde::Deserialize)]
pub(crate) struct MetadataResponse<T> {
    pub metadata: T,
}
