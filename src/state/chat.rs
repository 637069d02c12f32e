//! State for the chamado chat panel.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::Mensagem;

/// What the chat panel currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    pub feed: Feed,
}

/// What the panel knows about the server-side transcript.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Feed {
    /// The first fetch has not completed yet.
    #[default]
    Loading,
    /// Exactly the list of the most recent successful fetch, in server
    /// order. An empty list renders the "no messages yet" placeholder.
    Ready(Vec<ChatMessage>),
    /// The last fetch failed; the next poll cycle is the retry.
    Failed,
}

/// A single rendered chat message.
///
/// Carries no server identifier: the pane is rebuilt in full on every
/// refresh, so rows need no identity tracking across cycles.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub usuario_id: i64,
    pub usuario_nome: String,
    pub mensagem: String,
    pub data_criacao: String,
    pub origem: Option<String>,
}

impl ChatMessage {
    /// Which side of the pane the row lands on. Display only — the
    /// server decides what the viewer may read at all.
    pub fn authorship(&self, viewer_id: Option<i64>) -> Authorship {
        if viewer_id == Some(self.usuario_id) {
            Authorship::Mine
        } else {
            Authorship::Theirs
        }
    }
}

impl From<Mensagem> for ChatMessage {
    fn from(m: Mensagem) -> Self {
        Self {
            usuario_id: m.usuario_id,
            usuario_nome: m.usuario_nome,
            mensagem: m.mensagem,
            data_criacao: m.data_criacao,
            origem: m.origem,
        }
    }
}

/// Left/right placement of a message row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Authorship {
    Mine,
    Theirs,
}
