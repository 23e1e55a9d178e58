use clap::Parser;
use valboks_cli::app::Command;
use valboks_cli::cmd::Context;
use valboks_cli::config::Store;
use valboks_cli::prompt::Terminal;
use valboks_cli::remote::HttpConnector;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cmd = Command::parse();
    cmd.set_log_level();

    let mut store = match Store::load(cmd.config()) {
        Ok(value) => value,
        Err(err) => exit_with(valboks_cli::Error::from(err)),
    };
    let connector = HttpConnector;
    let mut input = Terminal;
    let mut output = std::io::stdout().lock();
    let mut ctx = Context {
        store: &mut store,
        connector: &connector,
        input: &mut input,
        output: &mut output,
    };
    if let Err(err) = cmd.execute(&mut ctx).await {
        exit_with(err);
    }
}

fn exit_with(err: valboks_cli::Error) -> ! {
    tracing::debug!("command failed: {err:?}");
    eprintln!("Error: {err}");
    let mut source = std::error::Error::source(&err);
    while let Some(inner) = source {
        eprintln!("  caused by: {inner}");
        source = std::error::Error::source(inner);
    }
    std::process::exit(err.exit_code())
}
