//! Integration tests for the identity client using wiremock mock server

use st_auth::{AuthError, IdentityProvider};
use st_client::{AuthTokenCache, IdentityToolkitClient};
use st_core::Credentials;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path, query_param},
};

const API_KEY: &str = "test-key";

fn error_body(message: &str) -> serde_json::Value {
    json!({
        "error": {
            "code": 400,
            "message": message,
            "errors": [{ "message": message, "domain": "global", "reason": "invalid" }]
        }
    })
}

#[tokio::test]
async fn test_sign_in_success_caches_identity_and_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .and(query_param("key", API_KEY))
        .and(body_json(json!({
            "email": "a@x.com",
            "password": "pw1",
            "returnSecureToken": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "identitytoolkit#VerifyPasswordResponse",
            "localId": "u1",
            "email": "a@x.com",
            "idToken": "token-1",
            "registered": true,
            "refreshToken": "refresh-1",
            "expiresIn": "3600"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tokens = AuthTokenCache::new();
    let client = IdentityToolkitClient::new(&mock_server.uri(), API_KEY, tokens.clone());
    let identity = client
        .sign_in(&Credentials::new("a@x.com", "pw1"))
        .await
        .unwrap();

    assert_eq!(identity.as_str(), "u1");
    assert_eq!(client.current_user(), Some(identity));
    assert_eq!(tokens.id_token().as_deref(), Some("token-1"));
}

#[tokio::test]
async fn test_sign_up_success_returns_new_identity() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .and(query_param("key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "localId": "new-user",
            "idToken": "token-2"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = IdentityToolkitClient::new(&mock_server.uri(), API_KEY, AuthTokenCache::new());
    let identity = client
        .sign_up(&Credentials::new("new@x.com", "secret1"))
        .await
        .unwrap();

    assert_eq!(identity.as_str(), "new-user");
    assert_eq!(client.tokens().id_token().as_deref(), Some("token-2"));
}

#[tokio::test]
async fn test_sign_in_wrong_password_is_invalid_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(400).set_body_json(error_body("INVALID_PASSWORD")))
        .mount(&mock_server)
        .await;

    let client = IdentityToolkitClient::new(&mock_server.uri(), API_KEY, AuthTokenCache::new());
    let result = client.sign_in(&Credentials::new("a@x.com", "bad")).await;

    assert!(matches!(result, Err(AuthError::InvalidCredentials { .. })));
    assert_eq!(client.current_user(), None);
}

#[tokio::test]
async fn test_sign_in_unknown_login_is_invalid_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(error_body("INVALID_LOGIN_CREDENTIALS")),
        )
        .mount(&mock_server)
        .await;

    let client = IdentityToolkitClient::new(&mock_server.uri(), API_KEY, AuthTokenCache::new());
    let result = client.sign_in(&Credentials::new("nobody@x.com", "pw")).await;

    assert!(matches!(result, Err(AuthError::InvalidCredentials { .. })));
}

#[tokio::test]
async fn test_sign_up_existing_email_is_account_exists() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .respond_with(ResponseTemplate::new(400).set_body_json(error_body("EMAIL_EXISTS")))
        .mount(&mock_server)
        .await;

    let client = IdentityToolkitClient::new(&mock_server.uri(), API_KEY, AuthTokenCache::new());
    let result = client.sign_up(&Credentials::new("a@x.com", "pw1")).await;

    match result {
        Err(AuthError::AccountExists { email, .. }) => assert_eq!(email, "a@x.com"),
        other => panic!("expected AccountExists, got {other:?}"),
    }
}

#[tokio::test]
async fn test_sign_up_weak_password_is_provider_error_with_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .respond_with(ResponseTemplate::new(400).set_body_json(error_body(
            "WEAK_PASSWORD : Password should be at least 6 characters",
        )))
        .mount(&mock_server)
        .await;

    let client = IdentityToolkitClient::new(&mock_server.uri(), API_KEY, AuthTokenCache::new());
    let err = client
        .sign_up(&Credentials::new("b@x.com", "123"))
        .await
        .unwrap_err();

    match &err {
        AuthError::Provider { code, message, .. } => {
            assert_eq!(code, "WEAK_PASSWORD");
            assert!(message.contains("at least 6 characters"));
        }
        other => panic!("expected Provider, got {other:?}"),
    }
    assert!(!err.is_transient());
}

#[tokio::test]
async fn test_sign_in_unreachable_service_is_transport_error() {
    // Nothing listens on port 9 in the test environment.
    let client = IdentityToolkitClient::new("http://127.0.0.1:9", API_KEY, AuthTokenCache::new());
    let err = client
        .sign_in(&Credentials::new("a@x.com", "pw1"))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Transport { .. }));
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_sign_out_clears_cached_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "localId": "u1",
            "idToken": "token-1"
        })))
        .mount(&mock_server)
        .await;

    let tokens = AuthTokenCache::new();
    let client = IdentityToolkitClient::new(&mock_server.uri(), API_KEY, tokens.clone());
    client
        .sign_in(&Credentials::new("a@x.com", "pw1"))
        .await
        .unwrap();

    client.sign_out();

    assert_eq!(client.current_user(), None);
    assert_eq!(tokens.id_token(), None);
}
