//! Login and session persistence integration tests

#[cfg(test)]
mod tests {
    use crate::common::MockApi;
    use crate::common::server::ok;
    use batchdesk::auth::{FileStorage, SessionContext, TOKEN_KEY, USER_DETAILS_KEY};
    use batchdesk::auth::KeyValueStorage;
    use batchdesk::config::{ApiConfig, SessionConfig};
    use batchdesk::{ApiClient, AuthService, Credentials, auth};
    use serde_json::json;
    use std::sync::Arc;
    use tempfile::TempDir;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, ResponseTemplate};

    #[tokio::test]
    async fn test_login_persists_to_file_and_authorizes_requests() {
        let api = MockApi::start().await;
        api.respond(
            "POST",
            "BatchUser/login",
            200,
            json!({
                "result": true,
                "message": "Welcome",
                "token": "file-token",
                "data": {"userId": 1, "userName": "admin", "email": "admin@example.com", "role": "Super Admin"}
            }),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/api/Batches"))
            .and(header("authorization", "Bearer file-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok("", json!([]))))
            .expect(1)
            .mount(&api.server)
            .await;

        let dir = TempDir::new().unwrap();
        let session_config = SessionConfig {
            file: dir
                .path()
                .join("session.json")
                .to_string_lossy()
                .into_owned(),
        };

        let session = auth::open_session(&session_config).unwrap();
        assert!(!session.is_logged_in());
        let client = ApiClient::new(&api.config(), session.clone()).unwrap();
        let service = AuthService::new(client);

        let outcome = service
            .login(&Credentials::new("admin@example.com", "admin123"))
            .await
            .unwrap();
        assert!(outcome.succeeded);

        let storage = FileStorage::new(session_config.path());
        assert_eq!(storage.get(TOKEN_KEY).unwrap().as_deref(), Some("file-token"));
        assert!(storage.get(USER_DETAILS_KEY).unwrap().unwrap().contains("Super Admin"));

        // A second process picks the session up from disk
        let reopened = auth::open_session(&session_config).unwrap();
        assert_eq!(reopened.user().unwrap().role, "Super Admin");
        let client = ApiClient::new(&api.config(), reopened.clone()).unwrap();
        let outcome = client.get::<Vec<serde_json::Value>>("Batches").await;
        assert!(outcome.succeeded);

        AuthService::new(client).logout().unwrap();
        assert!(!reopened.is_logged_in());
        assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_logged_out_requests_have_no_authorization() {
        let api = MockApi::start().await;
        Mock::given(method("GET"))
            .and(path("/api/Batches"))
            .and(header("authorization", "Bearer stale"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&api.server)
            .await;
        api.respond("GET", "Batches", 401, json!({"message": "Unauthorized"}))
            .await;

        let session = Arc::new(SessionContext::new(Box::new(
            batchdesk::auth::MemoryStorage::new(),
        )));
        let config = ApiConfig {
            base_url: format!("{}/api/", api.server.uri()),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config, session).unwrap();
        let outcome = client.get::<Vec<serde_json::Value>>("Batches").await;

        assert!(!outcome.succeeded);
        assert_eq!(outcome.message, "Unauthorized");
    }
}
