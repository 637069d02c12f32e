use super::*;

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_state_default_has_no_viewer() {
    let state = SessionState::default();
    assert!(state.usuario_id.is_none());
}

// =============================================================
// parse_usuario_id
// =============================================================

#[test]
fn parse_usuario_id_accepts_positive_integer() {
    assert_eq!(parse_usuario_id(Some("3".to_owned())), Some(3));
    assert_eq!(parse_usuario_id(Some(" 15 ".to_owned())), Some(15));
}

#[test]
fn parse_usuario_id_rejects_missing_or_junk_values() {
    assert_eq!(parse_usuario_id(None), None);
    assert_eq!(parse_usuario_id(Some(String::new())), None);
    assert_eq!(parse_usuario_id(Some("ana".to_owned())), None);
    assert_eq!(parse_usuario_id(Some("0".to_owned())), None);
    assert_eq!(parse_usuario_id(Some("-2".to_owned())), None);
}
