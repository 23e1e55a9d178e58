//! The remote operations used by the commands, behind a trait so that they can be replaced in tests.

use std::path::{Path, PathBuf};
use valboks::entry::{Entry, File, Folder};
use valboks::files::upload::WriteMode;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    async fn test_connection(&self) -> Result<(), valboks::Error>;

    async fn list_folder(&self, path: &str) -> Result<Vec<Entry>, valboks::Error>;

    async fn upload_file(
        &self,
        local: &Path,
        remote: &str,
        overwrite: bool,
    ) -> Result<File, valboks::Error>;

    async fn delete_path(&self, path: &str) -> Result<Entry, valboks::Error>;

    async fn get_file_info(&self, path: &str) -> Result<Entry, valboks::Error>;

    async fn download_file(&self, remote: &str, local: &Path) -> Result<u64, valboks::Error>;

    async fn create_folder(&self, path: &str) -> Result<Folder, valboks::Error>;
}

#[async_trait::async_trait]
impl Storage for valboks::Client {
    async fn test_connection(&self) -> Result<(), valboks::Error> {
        valboks::Client::test_connection(self).await
    }

    async fn list_folder(&self, path: &str) -> Result<Vec<Entry>, valboks::Error> {
        valboks::Client::list_folder(self, path).await
    }

    async fn upload_file(
        &self,
        local: &Path,
        remote: &str,
        overwrite: bool,
    ) -> Result<File, valboks::Error> {
        valboks::Client::upload_file(self, local, remote, WriteMode::overwrite(overwrite)).await
    }

    async fn delete_path(&self, path: &str) -> Result<Entry, valboks::Error> {
        self.delete(path).await
    }

    async fn get_file_info(&self, path: &str) -> Result<Entry, valboks::Error> {
        self.get_metadata(path).await
    }

    async fn download_file(&self, remote: &str, local: &Path) -> Result<u64, valboks::Error> {
        let partial = partial_path(local);
        let file = std::fs::File::create(&partial)?;
        let result = self
            .download(remote, std::io::BufWriter::new(file))
            .await
            .and_then(|(_, written)| {
                std::fs::rename(&partial, local)?;
                Ok(written)
            });
        if result.is_err() {
            let _ = std::fs::remove_file(&partial);
        }
        result
    }

    async fn create_folder(&self, path: &str) -> Result<Folder, valboks::Error> {
        valboks::Client::create_folder(self, path).await
    }
}

/// Sibling file receiving a download until it completes, so that the target is only replaced on success.
fn partial_path(local: &Path) -> PathBuf {
    let mut name = local.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}

/// Creates a [`Storage`] authenticated with an access token
pub trait Connect {
    fn connect(&self, access_token: &str) -> Result<Box<dyn Storage>, crate::Error>;
}

/// Connects to the Dropbox HTTP API, reading the client settings from the environment
#[derive(Debug, Default)]
pub struct HttpConnector;

impl Connect for HttpConnector {
    fn connect(&self, access_token: &str) -> Result<Box<dyn Storage>, crate::Error> {
        let client = valboks::builder::ClientBuilder::from_env()
            .with_credentials(valboks::Credentials::access_token(access_token))
            .build()?;
        Ok(Box::new(client))
    }
}

#[cfg(test)]
mod tests {
    use super::Storage;
    use temp_dir::TempDir;

    fn client(server: &mockito::Server) -> valboks::Client {
        valboks::builder::ClientBuilder::default()
            .with_api_url(server.url())
            .with_content_url(server.url())
            .with_credentials(valboks::Credentials::access_token("T"))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_replace_local_file_once_downloaded() {
        let root = TempDir::new().unwrap();
        let local = root.child("notes.txt");
        std::fs::write(&local, "previous content").unwrap();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/files/download")
            .with_status(200)
            .with_header(
                "dropbox-api-result",
                r#"{"name": "notes.txt", "id": "id:1", "size": 11, "path_display": "/notes.txt"}"#,
            )
            .with_body("new content")
            .create_async()
            .await;
        let size = client(&server)
            .download_file("/notes.txt", &local)
            .await
            .unwrap();
        assert_eq!(size, 11);
        assert_eq!(std::fs::read_to_string(&local).unwrap(), "new content");
        assert!(!root.child("notes.txt.part").exists());
        m.assert_async().await;
    }

    #[tokio::test]
    async fn should_keep_local_file_when_download_fails() {
        let root = TempDir::new().unwrap();
        let local = root.child("notes.txt");
        std::fs::write(&local, "previous content").unwrap();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/files/download")
            .with_status(409)
            .with_body(r#"{"error_summary": "path/not_found/.."}"#)
            .create_async()
            .await;
        let err = client(&server)
            .download_file("/typo.txt", &local)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(std::fs::read_to_string(&local).unwrap(), "previous content");
        assert!(!root.child("notes.txt.part").exists());
        m.assert_async().await;
    }

    #[tokio::test]
    async fn should_keep_local_file_when_unreachable() {
        let root = TempDir::new().unwrap();
        let local = root.child("notes.txt");
        std::fs::write(&local, "previous content").unwrap();
        let client = valboks::builder::ClientBuilder::default()
            .with_content_url("http://127.0.0.1:9")
            .with_credentials(valboks::Credentials::access_token("T"))
            .build()
            .unwrap();
        let err = client.download_file("/typo.txt", &local).await.unwrap_err();
        assert!(matches!(err, valboks::Error::Reqwest(_)));
        assert_eq!(std::fs::read_to_string(&local).unwrap(), "previous content");
    }
}
