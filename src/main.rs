mod command;
mod repl;
mod terminal;

use std::sync::Arc;

use anyhow::Result;
use jamaat_core::Config;
use jamaat_services::Dashboard;
use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;

use terminal::TerminalSink;

#[tokio::main]
async fn main() -> Result<()> {
    jamaat_core::init()?;

    let (config, _) = Config::load_validated()?;
    let dashboard = Arc::new(Dashboard::new(&config, Arc::new(TerminalSink))?);
    let shutdown = CancellationToken::new();

    let on_ctrl_c = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_ctrl_c.cancel();
        }
    });

    println!("Jamaat - prayer times for {}", dashboard.session().location_text());
    println!("{}", command::HELP);

    let handles = tokio::select! {
        _ = shutdown.cancelled() => Vec::new(),
        handles = jamaat_services::boot(Arc::clone(&dashboard), shutdown.clone()) => handles,
    };

    let stdin = BufReader::new(tokio::io::stdin());
    repl::run(dashboard, stdin, shutdown.clone()).await?;

    tracing::info!("Shutting down");
    shutdown.cancel();
    for handle in handles {
        if let Err(e) = handle.await {
            tracing::warn!("Task ended abnormally: {}", e);
        }
    }

    Ok(())
}
