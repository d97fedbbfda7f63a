//! OS signal handling for graceful shutdown

use avellon_core::prelude::*;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;

/// Listen for SIGINT/SIGTERM (Ctrl+C on Windows) and forward a quit message.
///
/// The terminal runs in raw mode, so keyboard Ctrl+C arrives as a key event;
/// this only fires for signals sent from outside the process.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<Result<()>> {
    tokio::spawn(async move {
        if let Err(e) = wait_for_signal().await {
            error!("Signal handler error: {}", e);
            return Err(e);
        }

        info!("Shutdown signal received");
        forward_quit(&tx).await
    })
}

/// Send the quit message to the event loop.
async fn forward_quit(tx: &mpsc::Sender<Message>) -> Result<()> {
    tx.send(Message::Quit).await.map_err(|e| {
        warn!("Event loop already gone, dropping quit message");
        Error::channel_send(e.to_string())
    })
}

async fn wait_for_signal() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt())
            .map_err(|e| Error::terminal(format!("Failed to create SIGINT handler: {}", e)))?;
        let mut sigterm = signal(SignalKind::terminate())
            .map_err(|e| Error::terminal(format!("Failed to create SIGTERM handler: {}", e)))?;

        tokio::select! {
            _ = sigint.recv() => info!("Received SIGINT"),
            _ = sigterm.recv() => info!("Received SIGTERM"),
        }

        Ok(())
    }

    #[cfg(windows)]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))?;
        info!("Received Ctrl+C");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_signal_handler_waits_quietly() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);

        let handle = spawn_signal_handler(tx);
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        // No signal sent, nothing forwarded
        assert!(rx.try_recv().is_err());
        assert!(!handle.is_finished());
        handle.abort();
    }

    #[tokio::test]
    async fn test_forward_quit_delivers_message() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);
        forward_quit(&tx).await.unwrap();
        assert!(matches!(rx.recv().await, Some(Message::Quit)));
    }

    #[tokio::test]
    async fn test_forward_quit_without_receiver_fails() {
        let (tx, rx) = mpsc::channel::<Message>(1);
        drop(rx);

        let err = forward_quit(&tx).await.unwrap_err();
        assert!(matches!(err, Error::ChannelSend { .. }));
        assert!(err.is_recoverable());
    }
}
