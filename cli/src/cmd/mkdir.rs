use super::Context;
use crate::Error;
use std::io::Write;

#[derive(clap::Parser)]
pub struct Command {
    /// Remote folder to create
    path: String,
}

impl Command {
    #[tracing::instrument(skip_all)]
    pub async fn execute(self, ctx: &mut Context<'_>) -> Result<(), Error> {
        let storage = ctx.storage()?;
        tracing::info!("creating folder {:?}", self.path);
        let folder = storage
            .create_folder(&self.path)
            .await
            .map_err(Error::remote("create folder", &self.path))?;
        writeln!(ctx.output, "Created folder {}", folder.path())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::{configured_store, folder, run, MockConnector};
    use crate::Error;

    #[tokio::test]
    async fn should_create_folder() {
        let mut store = configured_store();
        let connector = MockConnector::default();
        let (result, output) = run(&["mkdir", "/docs/new"], &mut store, &connector, &[]).await;
        result.unwrap();
        assert_eq!(output, "Created folder /docs/new\n");
        assert_eq!(connector.calls(), vec!["connect T", "create_folder /docs/new"]);
    }

    #[tokio::test]
    async fn should_fail_on_existing_folder() {
        let mut store = configured_store();
        let connector = MockConnector::default().with_entries(vec![folder("docs", "/docs")]);
        let (result, _) = run(&["mkdir", "/docs"], &mut store, &connector, &[]).await;
        match result.unwrap_err() {
            Error::Remote { source, .. } => {
                assert!(matches!(source, valboks::Error::Conflict(_)))
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_require_authentication() {
        let mut store = crate::config::Store::new("unused.json".into());
        let connector = MockConnector::default();
        let (result, output) = run(&["mkdir", "/docs/new"], &mut store, &connector, &[]).await;
        assert!(matches!(result.unwrap_err(), Error::AuthRequired));
        assert!(output.is_empty());
        assert!(connector.calls().is_empty());
    }
}
