use super::*;

#[test]
fn mensagens_endpoint_formats_expected_path() {
    assert_eq!(mensagens_endpoint(12), "/chamados/api/12/mensagens");
}

#[test]
fn api_error_display_names_the_failure() {
    let transport = ApiError::Transport("connection refused".to_owned());
    assert_eq!(transport.to_string(), "falha de transporte: connection refused");

    let status = ApiError::Status(500);
    assert_eq!(status.to_string(), "servidor respondeu 500");
}
