//! Quit the dashboard on SIGINT/SIGTERM (Ctrl+C on Windows)

use tokio::sync::mpsc;

use crate::message::Message;
use devperf_core::prelude::*;

/// Spawn the watcher that turns a termination signal into `Message::Quit`
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match wait_for_shutdown_signal().await {
            Ok(signal) => {
                info!("{} received, stopping dashboard", signal);
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Dashboard already stopped before {}", signal);
                }
            }
            Err(e) => warn!("Dashboard runs without signal handling: {}", e),
        }
    });
}

/// Resolve with the name of the first termination signal
#[cfg(unix)]
async fn wait_for_shutdown_signal() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: &str| {
        signal(kind).map_err(|e| Error::terminal(format!("cannot watch {}: {}", name, e)))
    };
    let mut interrupt = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut terminate = listen(SignalKind::terminate(), "SIGTERM")?;

    let name = tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
    };
    Ok(name)
}

#[cfg(windows)]
async fn wait_for_shutdown_signal() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("cannot watch Ctrl+C: {}", e)))?;
    Ok("Ctrl+C")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_quit_without_signal() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);

        spawn_signal_handler(tx);
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        assert!(rx.try_recv().is_err());
    }
}
