use super::*;

fn mensagem(usuario_id: i64) -> Mensagem {
    Mensagem {
        id: 10,
        chamado_id: 7,
        usuario_id,
        usuario_nome: "Ana".to_owned(),
        mensagem: "tudo certo?".to_owned(),
        data_criacao: "05/08/2026 11:45".to_owned(),
        origem: Some("telegram".to_owned()),
    }
}

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_is_loading() {
    let state = ChatState::default();
    assert_eq!(state.feed, Feed::Loading);
}

// =============================================================
// Mensagem -> ChatMessage
// =============================================================

#[test]
fn chat_message_from_mensagem_keeps_display_fields() {
    let msg = ChatMessage::from(mensagem(3));
    assert_eq!(msg.usuario_id, 3);
    assert_eq!(msg.usuario_nome, "Ana");
    assert_eq!(msg.mensagem, "tudo certo?");
    assert_eq!(msg.data_criacao, "05/08/2026 11:45");
    assert_eq!(msg.origem.as_deref(), Some("telegram"));
}

// =============================================================
// Authorship classification
// =============================================================

#[test]
fn authorship_matching_viewer_is_mine() {
    let msg = ChatMessage::from(mensagem(3));
    assert_eq!(msg.authorship(Some(3)), Authorship::Mine);
}

#[test]
fn authorship_other_author_is_theirs() {
    let msg = ChatMessage::from(mensagem(3));
    assert_eq!(msg.authorship(Some(8)), Authorship::Theirs);
}

#[test]
fn authorship_without_viewer_defaults_to_theirs() {
    // A page that never stamps the viewer id classifies everything as
    // Theirs, the viewer's own rows included.
    let msg = ChatMessage::from(mensagem(3));
    assert_eq!(msg.authorship(None), Authorship::Theirs);
}
