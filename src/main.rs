use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use wecom_bot_notify::{config::Cli, dispatcher::Dispatcher, http::client::ApiClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> wecom_bot_notify::Result<()> {
    let invocation = cli.into_invocation()?;
    debug!("Message Content: {}", invocation.content);
    debug!("Message Type: {}", invocation.message_type);

    let dispatcher = Dispatcher::new(ApiClient::new(&invocation.webhook_url)?);
    let report = dispatcher
        .dispatch(
            &invocation.keys,
            invocation.message_type,
            &invocation.content,
        )
        .await?
        .into_result()?;
    info!(
        delivered = report.delivered(),
        total = report.total(),
        "all webhook requests delivered"
    );
    Ok(())
}

/// `RUST_LOG` 优先，其次 actions 的 `RUNNER_DEBUG=1`
fn init_tracing() {
    let fallback = match std::env::var("RUNNER_DEBUG").as_deref() {
        Ok("1") => "debug",
        _ => "info",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
