use super::Context;
use crate::Error;
use std::io::Write;
use std::path::PathBuf;

#[derive(clap::Parser)]
pub struct Command {
    /// Remote file to download
    remote_path: String,
    /// Local file to write, the remote file name is appended when it's an existing directory
    local_path: PathBuf,
}

impl Command {
    fn local_path(&self) -> Result<PathBuf, Error> {
        if !self.local_path.is_dir() {
            return Ok(self.local_path.clone());
        }
        match self.remote_path.rsplit('/').find(|v| !v.is_empty()) {
            Some(fname) => Ok(self.local_path.join(fname)),
            None => Err(Error::Usage(format!(
                "unable to get a file name from {:?}",
                self.remote_path
            ))),
        }
    }

    #[tracing::instrument(skip_all)]
    pub async fn execute(self, ctx: &mut Context<'_>) -> Result<(), Error> {
        let storage = ctx.storage()?;
        let local_path = self.local_path()?;
        tracing::info!("downloading {:?} to {local_path:?}", self.remote_path);
        let size = storage
            .download_file(&self.remote_path, &local_path)
            .await
            .map_err(Error::remote("download", &self.remote_path))?;
        writeln!(
            ctx.output,
            "Downloaded {} to {} ({size} bytes)",
            self.remote_path,
            local_path.display()
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::{configured_store, file, run, MockConnector};
    use crate::Error;
    use temp_dir::TempDir;

    #[tokio::test]
    async fn should_download_to_file() {
        let root = TempDir::new().unwrap();
        let target = root.child("copy.txt");
        let target_str = target.to_str().unwrap();
        let mut store = configured_store();
        let connector = MockConnector::default().with_entries(vec![file("a.txt", "/docs/a.txt", 4)]);
        let (result, output) = run(
            &["get", "/docs/a.txt", target_str],
            &mut store,
            &connector,
            &[],
        )
        .await;
        result.unwrap();
        assert_eq!(output, format!("Downloaded /docs/a.txt to {target_str} (4 bytes)\n"));
        assert_eq!(
            connector.calls(),
            vec![
                "connect T".to_string(),
                format!("download_file /docs/a.txt {target_str}"),
            ]
        );
        assert_eq!(std::fs::read(&target).unwrap(), vec![0u8; 4]);
    }

    #[tokio::test]
    async fn should_download_into_directory() {
        let root = TempDir::new().unwrap();
        let mut store = configured_store();
        let connector = MockConnector::default().with_entries(vec![file("a.txt", "/docs/a.txt", 4)]);
        let (result, _) = run(
            &["download", "/docs/a.txt", root.path().to_str().unwrap()],
            &mut store,
            &connector,
            &[],
        )
        .await;
        result.unwrap();
        assert!(root.child("a.txt").is_file());
    }

    #[tokio::test]
    async fn should_fail_on_missing_remote_file() {
        let root = TempDir::new().unwrap();
        let target = root.child("copy.txt");
        let mut store = configured_store();
        let connector = MockConnector::default();
        let (result, _) = run(
            &["download", "/docs/a.txt", target.to_str().unwrap()],
            &mut store,
            &connector,
            &[],
        )
        .await;
        match result.unwrap_err() {
            Error::Remote { source, .. } => assert!(source.is_not_found()),
            other => panic!("unexpected error {other:?}"),
        }
        assert!(!target.exists());
    }

    #[tokio::test]
    async fn should_require_authentication() {
        let root = TempDir::new().unwrap();
        let target = root.child("copy.txt");
        let mut store = crate::config::Store::new("unused.json".into());
        let connector = MockConnector::default().with_entries(vec![file("a.txt", "/docs/a.txt", 4)]);
        let (result, output) = run(
            &["get", "/docs/a.txt", target.to_str().unwrap()],
            &mut store,
            &connector,
            &[],
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::AuthRequired));
        assert!(output.is_empty());
        assert!(connector.calls().is_empty());
        assert!(!target.exists());
    }
}
