use super::Context;
use crate::Error;
use std::io::Write;
use std::path::PathBuf;

#[derive(clap::Parser)]
pub struct Command {
    /// Replace the remote file if it already exists
    #[clap(long)]
    overwrite: bool,

    /// Local file to upload
    local_path: PathBuf,
    /// Remote path to upload to, the local file name is appended when ending with a `/`
    remote_path: String,
}

impl Command {
    fn remote_path(&self) -> Result<String, Error> {
        if !self.remote_path.ends_with('/') {
            return Ok(self.remote_path.clone());
        }
        let Some(fname) = self.local_path.file_name().and_then(|v| v.to_str()) else {
            return Err(Error::Usage(format!(
                "unable to get a file name from {:?}",
                self.local_path
            )));
        };
        Ok(format!("{}{fname}", self.remote_path))
    }

    #[tracing::instrument(skip_all)]
    pub async fn execute(self, ctx: &mut Context<'_>) -> Result<(), Error> {
        let storage = ctx.storage()?;
        if !self.local_path.is_file() {
            return Err(Error::FileNotFound(self.local_path));
        }
        let remote_path = self.remote_path()?;
        tracing::info!(
            "uploading {:?} to {remote_path} (overwrite: {})",
            self.local_path,
            self.overwrite
        );
        let file = storage
            .upload_file(&self.local_path, &remote_path, self.overwrite)
            .await
            .map_err(Error::remote("upload", &remote_path))?;
        writeln!(
            ctx.output,
            "Uploaded {} to {} ({} bytes)",
            self.local_path.display(),
            file.path(),
            file.size
        )?;
        Ok(())
    }
}
