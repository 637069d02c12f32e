//! Access to the hosting page's contract with the backend.
//!
//! The backend stamps the authenticated viewer's id as a data attribute
//! on `<body>` when it renders the shell. Requires a browser environment;
//! on the server both helpers are inert.

#[cfg(feature = "hydrate")]
const USUARIO_ATTR: &str = "data-usuario-id";

/// Read the viewer's user id from the `data-usuario-id` attribute on
/// `<body>`. Returns `None` outside the browser or when the page does
/// not carry the attribute.
pub fn read_usuario_id() -> Option<i64> {
    #[cfg(feature = "hydrate")]
    {
        let body = web_sys::window()?.document()?.body()?;
        crate::state::session::parse_usuario_id(body.get_attribute(USUARIO_ATTR))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Show a blocking browser alert.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
