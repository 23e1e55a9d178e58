use super::Context;
use crate::Error;
use std::io::Write;

#[derive(clap::Parser)]
pub struct Command {
    /// Dropbox API app key
    #[clap(long)]
    app_key: String,
    /// Dropbox API app secret
    #[clap(long)]
    app_secret: String,
}

impl Command {
    #[tracing::instrument(skip_all)]
    pub async fn execute(self, ctx: &mut Context<'_>) -> Result<(), Error> {
        tracing::info!("starting authentication process");
        if self.app_key.trim().is_empty() || self.app_secret.trim().is_empty() {
            return Err(Error::Usage(
                "both --app-key and --app-secret must be provided".into(),
            ));
        }

        writeln!(ctx.output, "Dropbox authentication")?;
        writeln!(ctx.output, "======================")?;
        writeln!(ctx.output, "App key: {}", self.app_key)?;
        writeln!(ctx.output)?;
        writeln!(ctx.output, "To complete the authentication:")?;
        writeln!(ctx.output, "1. Visit https://www.dropbox.com/developers/apps")?;
        writeln!(ctx.output, "2. Find your app and go to the 'Settings' tab")?;
        writeln!(ctx.output, "3. Generate an access token")?;
        writeln!(ctx.output, "4. Enter the access token below")?;
        writeln!(ctx.output)?;

        let token = ctx
            .input
            .read_secret("Enter your access token")
            .map_err(Error::Prompt)?;
        let token = token.trim();
        if token.is_empty() {
            return Err(Error::Usage("access token cannot be empty".into()));
        }

        tracing::info!("testing connection with provided token");
        let storage = ctx.connector.connect(token)?;
        storage
            .test_connection()
            .await
            .map_err(Error::validation)?;

        ctx.store
            .set_credentials(self.app_key, self.app_secret, token);
        ctx.store.save()?;
        writeln!(ctx.output, "Authentication successful!")?;
        tracing::info!("configuration saved to {:?}", ctx.store.path());
        Ok(())
    }
}
