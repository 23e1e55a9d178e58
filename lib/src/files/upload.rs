//! Resources needed to upload a file in a single request
//!
//! [More about it on the documentation](https://www.dropbox.com/developers/documentation/http/documentation#files-upload).

use crate::entry::File;
use crate::error::MAX_UPLOAD_SIZE;
use crate::Error;
use std::io::Read;
use std::path::Path;

/// What to do when a file already exists at the destination
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// The upload is rejected with a conflict
    #[default]
    Add,
    /// The existing file is replaced
    Overwrite,
}

impl WriteMode {
    pub fn overwrite(value: bool) -> Self {
        if value {
            Self::Overwrite
        } else {
            Self::Add
        }
    }
}

#[derive(Debug, serde::Serialize)]
struct CommitInfo<'a> {
    path: &'a str,
    mode: WriteMode,
    autorename: bool,
    mute: bool,
}

impl crate::Client {
    /// Uploads the content of a local file.
    ///
    /// Files of 150 MiB or more are rejected with [`Error::SizeLimit`] without contacting the service.
    #[tracing::instrument(skip(self))]
    pub async fn upload_file(
        &self,
        local: &Path,
        remote: &str,
        mode: WriteMode,
    ) -> Result<File, Error> {
        let mut file = std::fs::File::open(local)?;
        let size = file.metadata()?.len();
        if size >= MAX_UPLOAD_SIZE {
            return Err(Error::SizeLimit {
                size,
                limit: MAX_UPLOAD_SIZE,
            });
        }
        let mut payload = Vec::with_capacity(size as usize);
        file.read_to_end(&mut payload)?;
        drop(file);
        self.upload(remote, mode, payload).await
    }

    /// Uploads a buffer to the given remote path.
    #[tracing::instrument(skip(self, payload))]
    pub async fn upload(&self, remote: &str, mode: WriteMode, payload: Vec<u8>) -> Result<File, Error> {
        let size = payload.len() as u64;
        if size >= MAX_UPLOAD_SIZE {
            return Err(Error::SizeLimit {
                size,
                limit: MAX_UPLOAD_SIZE,
            });
        }
        let path = crate::path::normalize(remote);
        self.upload_request(
            "files/upload",
            &CommitInfo {
                path: &path,
                mode,
                autorename: false,
                mute: false,
            },
            payload,
        )
        .await
    }
}
