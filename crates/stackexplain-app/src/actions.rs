//! Action handlers: UpdateAction dispatch and background task spawning

use std::process::Command;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::message::{Message, RequestId};
use crate::UpdateAction;
use stackexplain_client::ExplainBackend;
use stackexplain_core::prelude::*;
use stackexplain_core::ExplainRequest;

/// Execute an action by spawning a background task
pub fn handle_action<B>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, backend: Arc<B>)
where
    B: ExplainBackend + Sync + 'static,
{
    match action {
        UpdateAction::SendExplainRequest {
            request_id,
            request,
        } => {
            tokio::spawn(async move {
                let message = settle_request(backend.as_ref(), request_id, &request).await;
                if msg_tx.send(message).await.is_err() {
                    debug!("Event loop gone before request {} settled", request_id);
                }
            });
        }

        UpdateAction::OpenUrl { url, browser } => {
            tokio::spawn(async move {
                if let Err(e) = open_url_in_browser(&url, &browser) {
                    error!("Failed to open {url}: {e}");
                }
            });
        }
    }
}

/// Run one backend exchange and turn its outcome into a settlement message
pub async fn settle_request<B>(backend: &B, request_id: RequestId, request: &ExplainRequest) -> Message
where
    B: ExplainBackend + Sync,
{
    match backend.explain(request).await {
        Ok(record) => {
            info!("Request {} answered", request_id);
            Message::ExplanationReceived { request_id, record }
        }
        Err(e) => {
            warn!("Request {} failed: {}", request_id, e);
            Message::ExplanationFailed {
                request_id,
                error: e.to_string(),
            }
        }
    }
}

/// Open `url` with `browser`, or the platform opener when `browser` is empty
pub(crate) fn open_url_in_browser(url: &str, browser: &str) -> std::io::Result<()> {
    if !browser.is_empty() {
        Command::new(browser).arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no browser opener available for this platform",
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}
