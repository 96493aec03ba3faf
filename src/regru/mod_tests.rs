// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Tests for `RegruClient` construction and response classification.

#[cfg(test)]
mod tests {
    use crate::dns_errors::{ConfigError, DecodeError, RegruError, RemoteError, TransportError};
    use crate::regru::{Credentials, RegruClient, TransportConfig, ZoneApi};
    use serde_json::json;
    use std::io::Write;
    use std::time::Duration;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> RegruClient {
        RegruClient::new(
            Credentials::new("test", "secret"),
            Some(&server.uri()),
            &TransportConfig::Basic,
        )
        .unwrap()
    }

    // =====================================================
    // Construction
    // =====================================================

    #[test]
    fn test_default_endpoint() {
        let client =
            RegruClient::new(Credentials::new("u", "p"), None, &TransportConfig::Basic).unwrap();
        assert_eq!(client.endpoint().as_str(), "https://api.reg.ru/api/regru2/");
    }

    #[test]
    fn test_empty_endpoint_uses_default() {
        let client = RegruClient::new(Credentials::new("u", "p"), Some(""), &TransportConfig::Basic)
            .unwrap();
        assert_eq!(client.endpoint().as_str(), "https://api.reg.ru/api/regru2/");
    }

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        let err = RegruClient::new(
            Credentials::new("u", "p"),
            Some("::not-a-url::"),
            &TransportConfig::Basic,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            RegruError::Transport(TransportError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_transport_timeouts() {
        assert_eq!(TransportConfig::Basic.timeout(), Duration::from_secs(5));
        let mtls = TransportConfig::MutualTls {
            cert_file: "client.crt".into(),
            key_file: "client.key".into(),
        };
        assert_eq!(mtls.timeout(), Duration::from_secs(30));
    }

    const CLIENT_CERT_PEM: &str = include_str!("../../tests/fixtures/client.crt");
    const CLIENT_KEY_PEM: &str = include_str!("../../tests/fixtures/client.key");

    #[test]
    fn test_mutual_tls_client_from_valid_pem() {
        let dir = tempfile::tempdir().unwrap();
        let cert_path = dir.path().join("client.crt");
        let key_path = dir.path().join("client.key");
        std::fs::write(&cert_path, CLIENT_CERT_PEM).unwrap();
        std::fs::write(&key_path, CLIENT_KEY_PEM).unwrap();

        let transport = TransportConfig::MutualTls {
            cert_file: cert_path,
            key_file: key_path,
        };

        let client = RegruClient::new(Credentials::new("u", "p"), None, &transport).unwrap();
        assert_eq!(client.timeout(), Duration::from_secs(30));
        assert_eq!(client.endpoint().as_str(), "https://api.reg.ru/api/regru2/");
    }

    #[test]
    fn test_garbage_pem_fails_construction() {
        let dir = tempfile::tempdir().unwrap();
        let cert_path = dir.path().join("client.crt");
        let key_path = dir.path().join("client.key");
        std::fs::write(&cert_path, "this is not a certificate").unwrap();
        std::fs::write(&key_path, "this is not a key").unwrap();

        let transport = TransportConfig::MutualTls {
            cert_file: cert_path,
            key_file: key_path,
        };

        let err = RegruClient::new(Credentials::new("u", "p"), None, &transport).unwrap_err();
        match err {
            RegruError::Config(ConfigError::Certificate { path, .. }) => {
                assert!(path.ends_with("client.crt"));
            }
            other => panic!("expected certificate error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_certificate_file_fails_construction() {
        let dir = tempfile::tempdir().unwrap();
        let transport = TransportConfig::MutualTls {
            cert_file: dir.path().join("missing.crt"),
            key_file: dir.path().join("missing.key"),
        };

        let err = RegruClient::new(Credentials::new("u", "p"), None, &transport).unwrap_err();
        match err {
            RegruError::Config(ConfigError::Certificate { path, .. }) => {
                assert!(path.ends_with("missing.crt"));
            }
            other => panic!("expected certificate error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_key_file_fails_construction() {
        let dir = tempfile::tempdir().unwrap();
        let cert_path = dir.path().join("client.crt");
        let mut cert = std::fs::File::create(&cert_path).unwrap();
        writeln!(cert, "-----BEGIN CERTIFICATE-----").unwrap();

        let transport = TransportConfig::MutualTls {
            cert_file: cert_path,
            key_file: dir.path().join("missing.key"),
        };

        let err = RegruClient::new(Credentials::new("u", "p"), None, &transport).unwrap_err();
        match err {
            RegruError::Config(ConfigError::Certificate { path, .. }) => {
                assert!(path.ends_with("missing.key"));
            }
            other => panic!("expected certificate error, got {other:?}"),
        }
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let rendered = format!("{:?}", Credentials::new("user", "hunter2"));
        assert!(rendered.contains("user"));
        assert!(!rendered.contains("hunter2"));
    }

    // =====================================================
    // Response classification
    // =====================================================

    #[tokio::test]
    async fn test_success_envelope_is_returned() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/zone/add_alias"))
            .and(body_string_contains("username=test"))
            .and(body_string_contains("password=secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success"})))
            .expect(1)
            .mount(&server)
            .await;

        let envelope = client_for(&server)
            .send(&json!({"domain_name": "example.com"}), &["zone", "add_alias"])
            .await
            .unwrap();

        assert_eq!(envelope.result, "success");
        assert!(envelope.has_error().is_ok());
    }

    #[tokio::test]
    async fn test_error_envelope_on_2xx_is_returned_for_caller_to_check() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/zone/add_txt"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": "error",
                "error_code": "NO_SUCH_DOMAIN",
                "error_text": "Domain not found",
            })))
            .mount(&server)
            .await;

        let envelope = client_for(&server)
            .send(&json!({"domains": [{"dname": "example.com"}]}), &["zone", "add_txt"])
            .await
            .unwrap();

        let err = envelope.has_error().unwrap_err();
        assert!(err.to_string().contains("NO_SUCH_DOMAIN"));
    }

    #[tokio::test]
    async fn test_non_2xx_with_envelope_is_remote_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "result": "error",
                "error_code": "PASSWORD_AUTH_FAILED",
                "error_text": "Username/password Incorrect",
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .send(&json!({}), &["zone", "add_alias"])
            .await
            .unwrap_err();

        assert_eq!(
            err,
            RegruError::Remote(RemoteError::HttpStatus {
                status_code: 401,
                result: "error".to_string(),
                error_code: "PASSWORD_AUTH_FAILED".to_string(),
                error_text: "Username/password Incorrect".to_string(),
            })
        );
        assert_eq!(err.status_reason(), "AuthFailed");
    }

    #[tokio::test]
    async fn test_non_2xx_with_unparseable_body_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .send(&json!({}), &["zone", "add_alias"])
            .await
            .unwrap_err();

        match err {
            RegruError::Transport(TransportError::UnexpectedStatus {
                status_code, body, ..
            }) => {
                assert_eq!(status_code, 502);
                assert!(body.contains("Bad Gateway"));
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_2xx_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .send(&json!({}), &["zone", "add_alias"])
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RegruError::Decode(DecodeError::MalformedEnvelope { .. })
        ));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Reserve a free port, then release it so nothing is listening there
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = RegruClient::new(
            Credentials::new("test", "secret"),
            Some(&format!("http://127.0.0.1:{port}/api/regru2/")),
            &TransportConfig::Basic,
        )
        .unwrap();

        let err = client
            .send(&json!({}), &["zone", "add_alias"])
            .await
            .unwrap_err();

        match &err {
            RegruError::Transport(TransportError::RequestFailed { endpoint, .. }) => {
                assert!(endpoint.ends_with("/api/regru2/zone/add_alias"));
            }
            other => panic!("expected connection failure, got {other:?}"),
        }
        assert!(err.is_transient());
        assert_eq!(err.status_reason(), "RegistrarUnreachable");
    }

    #[tokio::test]
    async fn test_single_attempt_on_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server)
            .send(&json!({}), &["zone", "add_alias"])
            .await;

        assert!(result.is_err());
        // MockServer verifies `expect(1)` on drop
    }
}
