use super::*;

// =============================================================
// Mensagem decoding
// =============================================================

#[test]
fn mensagem_decodes_server_row() {
    let json = r#"{
        "id": 42,
        "chamado_id": 7,
        "usuario_id": 3,
        "usuario_nome": "Ana Souza",
        "mensagem": "Bom dia, consegue acessar agora?",
        "data_criacao": "05/08/2026 14:32",
        "origem": "painel"
    }"#;

    let msg: Mensagem = serde_json::from_str(json).expect("decode row");
    assert_eq!(msg.id, 42);
    assert_eq!(msg.chamado_id, 7);
    assert_eq!(msg.usuario_id, 3);
    assert_eq!(msg.usuario_nome, "Ana Souza");
    assert_eq!(msg.data_criacao, "05/08/2026 14:32");
    assert_eq!(msg.origem.as_deref(), Some("painel"));
}

#[test]
fn mensagem_accepts_null_or_missing_origem() {
    let with_null = r#"{
        "id": 1, "chamado_id": 1, "usuario_id": 1,
        "usuario_nome": "Ana", "mensagem": "oi",
        "data_criacao": "01/01/2026 08:00", "origem": null
    }"#;
    let msg: Mensagem = serde_json::from_str(with_null).expect("null origem");
    assert!(msg.origem.is_none());

    let without = r#"{
        "id": 1, "chamado_id": 1, "usuario_id": 1,
        "usuario_nome": "Ana", "mensagem": "oi",
        "data_criacao": "01/01/2026 08:00"
    }"#;
    let msg: Mensagem = serde_json::from_str(without).expect("missing origem");
    assert!(msg.origem.is_none());
}

#[test]
fn mensagem_list_preserves_server_order() {
    let json = r#"[
        {"id": 2, "chamado_id": 7, "usuario_id": 1, "usuario_nome": "Ana",
         "mensagem": "primeira", "data_criacao": "05/08/2026 09:00"},
        {"id": 9, "chamado_id": 7, "usuario_id": 2, "usuario_nome": "Bruno",
         "mensagem": "segunda", "data_criacao": "05/08/2026 09:05"}
    ]"#;

    let list: Vec<Mensagem> = serde_json::from_str(json).expect("decode list");
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].mensagem, "primeira");
    assert_eq!(list[1].mensagem, "segunda");
}

// =============================================================
// NovaMensagem encoding
// =============================================================

#[test]
fn nova_mensagem_serializes_expected_payload() {
    let payload = NovaMensagem {
        mensagem: "preciso de ajuda".to_owned(),
    };
    let json = serde_json::to_value(&payload).expect("encode payload");
    assert_eq!(json, serde_json::json!({ "mensagem": "preciso de ajuda" }));
}
