//! Resources needed to download a file
//!
//! [More about it on the documentation](https://www.dropbox.com/developers/documentation/http/documentation#files-download).

use super::PathArg;
use crate::entry::File;
use crate::Error;
use std::io::Write;

impl crate::Client {
    /// Downloads the content of a file into the writer, returning its metadata and the number of bytes written.
    #[tracing::instrument(skip(self, writer))]
    pub async fn download<W: Write>(&self, path: &str, mut writer: W) -> Result<(File, u64), Error> {
        let path = crate::path::normalize(path);
        let (file, mut res): (File, reqwest::Response) = self
            .download_request("files/download", &PathArg { path: &path })
            .await?;
        let mut written = 0u64;
        while let Some(chunk) = res.chunk().await? {
            writer.write_all(&chunk)?;
            written += chunk.len() as u64;
        }
        writer.flush()?;
        tracing::debug!("downloaded {written} bytes from {path}");
        Ok((file, written))
    }
}

#[cfg(test)]
mod tests {
    #[tokio::test]
    async fn success() {
        crate::tests::init();
        let content = crate::tests::random_binary(1024);
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/files/download")
            .match_header("authorization", "Bearer access-token")
            .match_header("dropbox-api-arg", r#"{"path":"/docs/a.bin"}"#)
            .with_status(200)
            .with_header(
                "dropbox-api-result",
                r#"{"name": "a.bin", "id": "id:a4ayc_80_OEAAAAAAAAAXw", "size": 1024, "path_lower": "/docs/a.bin", "path_display": "/docs/a.bin"}"#,
            )
            .with_body(&content)
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let mut buffer = Vec::new();
        let (file, written) = client.download("docs/a.bin", &mut buffer).await.unwrap();
        assert_eq!(file.name, "a.bin");
        assert_eq!(written, 1024);
        assert_eq!(buffer, content);
        m.assert_async().await;
    }

    #[tokio::test]
    async fn should_fail_on_missing_file() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/files/download")
            .with_status(409)
            .with_body(
                r#"{"error_summary": "path/not_found/..", "error": {".tag": "path", "path": {".tag": "not_found"}}}"#,
            )
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let mut buffer = Vec::new();
        let err = client.download("/missing", &mut buffer).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(buffer.is_empty());
        m.assert_async().await;
    }
}
