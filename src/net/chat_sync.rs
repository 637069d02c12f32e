//! Polling synchronizer for a chamado's message transcript.
//!
//! SCHEDULING
//! ==========
//! One refresh runs immediately when the loop is spawned, then one per
//! `POLL_INTERVAL` for as long as the page is alive. Failures never stop
//! the timer — the next cycle is the retry. A `ChatSyncHandle` lets the
//! send path request one extra cycle and lets the page stop the loop on
//! navigation.
//!
//! Every cycle folds the complete fetched list into `ChatState` (full
//! replace), so cycles are idempotent and a late completion simply
//! overwrites the pane with its own self-contained result.

#[cfg(test)]
#[path = "chat_sync_test.rs"]
mod chat_sync_test;

use std::time::Duration;

use leptos::prelude::RwSignal;

use crate::net::api::ApiError;
use crate::net::types::Mensagem;
use crate::state::chat::{ChatMessage, ChatState, Feed};

/// Fixed delay between poll cycles.
pub const POLL_INTERVAL: Duration = Duration::from_millis(5000);

/// Whether the widget found a chamado to poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncMode {
    /// The hosting page provided no usable chamado id; stay inert and
    /// issue no network activity at all.
    Disabled,
    /// Poll this chamado's message feed.
    Enabled { chamado_id: i64 },
}

/// Resolve the widget's mode from the raw route segment.
///
/// Only a positive integer enables polling; anything else (absent route
/// context, junk, zero, negatives) is the explicit disabled mode.
pub fn resolve_mode(raw: Option<&str>) -> SyncMode {
    match raw.and_then(|v| v.trim().parse::<i64>().ok()) {
        Some(chamado_id) if chamado_id > 0 => SyncMode::Enabled { chamado_id },
        _ => SyncMode::Disabled,
    }
}

/// Trim an outgoing message body. Whitespace-only input yields `None`
/// and must not reach the network.
pub fn prepare_outgoing(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Fold one fetch outcome into the chat state.
///
/// Full replace: after this returns, the feed reflects exactly this
/// fetch's result — no merge with whatever was displayed before.
pub fn apply_refresh(chat: &mut ChatState, result: Result<Vec<Mensagem>, ApiError>) {
    chat.feed = match result {
        Ok(list) => Feed::Ready(list.into_iter().map(ChatMessage::from).collect()),
        Err(_) => Feed::Failed,
    };
}

/// Control events accepted by the sync loop.
#[cfg(feature = "hydrate")]
enum SyncEvent {
    Refresh,
    Stop,
}

/// Handle to a running sync loop; cheap to clone.
///
/// Dropping every clone stops the loop too, but pages should call
/// [`ChatSyncHandle::stop`] from `on_cleanup` so teardown is explicit.
#[derive(Clone, Default)]
pub struct ChatSyncHandle {
    #[cfg(feature = "hydrate")]
    tx: Option<futures::channel::mpsc::UnboundedSender<SyncEvent>>,
}

impl ChatSyncHandle {
    /// A handle wired to nothing, for the disabled mode.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Ask the loop for one out-of-schedule refresh, e.g. right after a
    /// successful send so the author sees their message without waiting
    /// for the next tick.
    pub fn request_refresh(&self) {
        #[cfg(feature = "hydrate")]
        if let Some(tx) = &self.tx {
            let _ = tx.unbounded_send(SyncEvent::Refresh);
        }
    }

    /// Stop the polling timer; the loop exits after the current cycle.
    pub fn stop(&self) {
        #[cfg(feature = "hydrate")]
        if let Some(tx) = &self.tx {
            let _ = tx.unbounded_send(SyncEvent::Stop);
        }
    }
}

/// Spawn the poll loop for a chamado as a local async task and return
/// its handle. Outside the browser this returns a disabled handle.
pub fn spawn_chat_sync(chamado_id: i64, chat: RwSignal<ChatState>) -> ChatSyncHandle {
    #[cfg(feature = "hydrate")]
    {
        let (tx, rx) = futures::channel::mpsc::unbounded::<SyncEvent>();
        leptos::task::spawn_local(sync_loop(chamado_id, chat, rx));
        ChatSyncHandle { tx: Some(tx) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chamado_id, chat);
        ChatSyncHandle::default()
    }
}

/// Refresh, then sleep until the next tick or a manual wake, forever.
#[cfg(feature = "hydrate")]
async fn sync_loop(
    chamado_id: i64,
    chat: RwSignal<ChatState>,
    mut rx: futures::channel::mpsc::UnboundedReceiver<SyncEvent>,
) {
    use futures::StreamExt;
    use futures::future::{Either, select};
    use leptos::prelude::Update;

    loop {
        let result = crate::net::api::fetch_mensagens(chamado_id).await;
        if let Err(e) = &result {
            leptos::logging::warn!("refresh do chamado {chamado_id} falhou: {e}");
        }
        chat.update(|c| apply_refresh(c, result));

        let tick = gloo_timers::future::sleep(POLL_INTERVAL);
        match select(Box::pin(tick), rx.next()).await {
            // Timer elapsed, or a send asked for an immediate cycle.
            Either::Left(((), _)) | Either::Right((Some(SyncEvent::Refresh), _)) => {}
            // Explicit stop, or every handle was dropped.
            Either::Right((Some(SyncEvent::Stop) | None, _)) => break,
        }
    }
}
