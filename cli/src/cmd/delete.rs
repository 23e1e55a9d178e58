use super::Context;
use crate::prompt::is_affirmative;
use crate::Error;
use std::io::Write;

#[derive(clap::Parser)]
pub struct Command {
    /// Skip the confirmation prompt
    #[clap(short, long)]
    force: bool,

    /// Remote file or folder to delete
    path: String,
}

impl Command {
    #[tracing::instrument(skip_all)]
    pub async fn execute(self, ctx: &mut Context<'_>) -> Result<(), Error> {
        let storage = ctx.storage()?;
        if !self.force {
            let answer = ctx
                .input
                .read_line(&format!(
                    "Are you sure you want to delete '{}'? [y/N]",
                    self.path
                ))
                .map_err(Error::Prompt)?;
            if !is_affirmative(&answer) {
                writeln!(ctx.output, "Deletion cancelled.")?;
                return Ok(());
            }
        }
        tracing::info!("deleting {:?}", self.path);
        let entry = storage
            .delete_path(&self.path)
            .await
            .map_err(Error::remote("delete", &self.path))?;
        let kind = if entry.is_folder() { "folder" } else { "file" };
        writeln!(ctx.output, "Deleted {kind} {}", entry.path())?;
        Ok(())
    }
}
