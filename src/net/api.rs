//! REST helpers for the chamado message endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, relative to the
//! hosting origin so the browser's session cookie rides along.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Both operations surface `ApiError` so callers can degrade the UI
//! (inline placeholder on reads, alert on writes) without panicking.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::Mensagem;
#[cfg(feature = "hydrate")]
use super::types::NovaMensagem;

/// Failures surfaced by the message endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed: network unreachable, aborted, or the
    /// response body could not be decoded.
    #[error("falha de transporte: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("servidor respondeu {0}")]
    Status(u16),
}

#[cfg(any(test, feature = "hydrate"))]
fn mensagens_endpoint(chamado_id: i64) -> String {
    format!("/chamados/api/{chamado_id}/mensagens")
}

/// Fetch the full message list of a chamado, oldest first (the server
/// defines the order; the client never re-sorts).
///
/// # Errors
///
/// Returns `ApiError::Transport` when the request or decoding fails and
/// `ApiError::Status` on a non-success HTTP status.
pub async fn fetch_mensagens(chamado_id: i64) -> Result<Vec<Mensagem>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = mensagens_endpoint(chamado_id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<Vec<Mensagem>>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = chamado_id;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Post a new message to a chamado. Any OK status is success; the
/// response body is ignored.
///
/// # Errors
///
/// Returns `ApiError::Transport` when the request fails and
/// `ApiError::Status` on a non-success HTTP status (empty body, missing
/// session, or a server-side notification failure).
pub async fn enviar_mensagem(chamado_id: i64, mensagem: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = mensagens_endpoint(chamado_id);
        let payload = NovaMensagem {
            mensagem: mensagem.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&url)
            .json(&payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chamado_id, mensagem);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}
