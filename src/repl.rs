//! Stdin command loop.

use std::sync::Arc;

use jamaat_services::Dashboard;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;

use crate::command::{Command, HELP};

/// Read and dispatch commands until input ends, `quit` is entered, or
/// `shutdown` fires.
///
/// A command still running when `shutdown` fires is dropped.
pub async fn run<R>(
    dashboard: Arc<Dashboard>,
    input: R,
    shutdown: CancellationToken,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    loop {
        let line = tokio::select! {
            _ = shutdown.cancelled() => break,
            line = lines.next_line() => line?,
        };

        // input closed
        let Some(line) = line else { break };

        let command = match Command::parse(&line) {
            Ok(Command::Quit) => {
                shutdown.cancel();
                break;
            }
            Ok(command) => command,
            Err(e) => {
                println!("{}\n{}", e, HELP);
                continue;
            }
        };

        tokio::select! {
            _ = shutdown.cancelled() => {
                tracing::info!("Shutdown during {:?}", command);
                break;
            }
            _ = dispatch(&dashboard, &command) => {}
        }
    }

    Ok(())
}

async fn dispatch(dashboard: &Arc<Dashboard>, command: &Command) {
    match command {
        Command::Location(text) => dashboard.update_location(text).await,
        Command::Fiqh(value) => dashboard.change_fiqh(value.as_deref()).await,
        Command::Search(text) => dashboard.on_search_input(text),
        Command::Pick(n) => {
            if !dashboard.select_suggestion(n - 1).await {
                println!("no suggestion {}", n);
            }
        }
        Command::Refresh => dashboard.refresh_all().await,
        Command::Quit => {}
    }
}
