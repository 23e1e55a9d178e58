use super::Context;
use crate::Error;
use std::io::Write;
use valboks::entry::Entry;

fn write_entry(output: &mut dyn Write, entry: &Entry) -> std::io::Result<()> {
    writeln!(output, "Name: {}", entry.name())?;
    writeln!(output, "Path: {}", entry.path())?;
    match entry {
        Entry::File(file) => {
            writeln!(output, "Type: File")?;
            writeln!(output, "Size: {} bytes", file.size)?;
            if let Some(modified) = file.server_modified.or(file.client_modified) {
                writeln!(output, "Modified: {}", modified.to_rfc3339())?;
            }
        }
        Entry::Folder(_) => {
            writeln!(output, "Type: Folder")?;
        }
    }
    Ok(())
}

#[derive(clap::Parser)]
pub struct Command {
    /// Remote file or folder to describe
    path: String,
}

impl Command {
    #[tracing::instrument(skip_all)]
    pub async fn execute(self, ctx: &mut Context<'_>) -> Result<(), Error> {
        let storage = ctx.storage()?;
        tracing::info!("fetching metadata of {:?}", self.path);
        let entry = storage
            .get_file_info(&self.path)
            .await
            .map_err(Error::remote("get information about", &self.path))?;
        write_entry(ctx.output, &entry)?;
        Ok(())
    }
}
