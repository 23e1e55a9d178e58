//! Resources needed to delete a file or a folder
//!
//! [More about it on the documentation](https://www.dropbox.com/developers/documentation/http/documentation#files-delete).

use super::{MetadataResponse, PathArg};
use crate::entry::{Entry, Metadata};
use crate::Error;

impl crate::Client {
    /// Deletes a file, or a folder with all its content, and returns what has been deleted.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, path: &str) -> Result<Entry, Error> {
        let path = crate::path::normalize(path);
        let result: MetadataResponse<Metadata> = self
            .rpc_request("files/delete_v2", &PathArg { path: &path })
            .await?;
        result
            .metadata
            .into_entry()
            .ok_or_else(|| Error::UnknownMetadata(path))
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn success() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/files/delete_v2")
            .match_header("authorization", "Bearer access-token")
            .match_body(Matcher::Json(json!({ "path": "/docs/a.txt" })))
            .with_status(200)
            .with_body(
                r#"{
    "metadata": {
        ".tag": "file",
        "name": "a.txt",
        "id": "id:a4ayc_80_OEAAAAAAAAAXw",
        "path_lower": "/docs/a.txt",
        "path_display": "/docs/a.txt",
        "size": 10
    }
}"#,
            )
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let deleted = client.delete("docs/a.txt").await.unwrap();
        assert_eq!(deleted.path(), "/docs/a.txt");
        m.assert_async().await;
    }

    #[tokio::test]
    async fn should_fail_on_missing_path() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/files/delete_v2")
            .with_status(409)
            .with_body(
                r#"{"error_summary": "path_lookup/not_found/...", "error": {".tag": "path_lookup", "path_lookup": {".tag": "not_found"}}}"#,
            )
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let err = client.delete("/missing").await.unwrap_err();
        assert!(err.is_not_found());
        m.assert_async().await;
    }
}
