//! Identity of the locally authenticated viewer.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Viewer identity captured from the hosting page.
///
/// Used only to classify message authorship for display side; the
/// browser's session cookie is what actually authorizes requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub usuario_id: Option<i64>,
}

/// Parse the hosting page's viewer attribute value.
pub fn parse_usuario_id(raw: Option<String>) -> Option<i64> {
    let id = raw?.trim().parse::<i64>().ok()?;
    (id > 0).then_some(id)
}
