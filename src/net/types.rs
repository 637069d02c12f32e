//! Wire DTOs for the chamado message API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON verbatim so the derives need no
//! renaming and payloads stay greppable against server logs.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One interaction of a chamado, as returned by
/// `GET /chamados/api/{chamado_id}/mensagens`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mensagem {
    /// Interaction identifier, assigned by the server.
    pub id: i64,
    /// Chamado this message belongs to.
    pub chamado_id: i64,
    /// Author's user identifier.
    pub usuario_id: i64,
    /// Author's display name, joined in by the server.
    pub usuario_nome: String,
    /// Message body.
    pub mensagem: String,
    /// Creation timestamp already formatted by the server
    /// (`dd/mm/aaaa hh:mm`); shown verbatim, never parsed.
    pub data_criacao: String,
    /// Channel the message arrived through (`"painel"`, `"telegram"`, ...)
    /// when the server recorded one.
    #[serde(default)]
    pub origem: Option<String>,
}

/// JSON payload for `POST /chamados/api/{chamado_id}/mensagens`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NovaMensagem {
    /// Message body, already trimmed.
    pub mensagem: String,
}
