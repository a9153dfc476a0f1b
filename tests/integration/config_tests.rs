//! Configuration integration tests
//!
//! Loading from YAML files, validation failures and environment overrides.

#[cfg(test)]
mod tests {
    use batchdesk::config::{
        Config, ENV_API_URL, ENV_PAGE_SIZE, ENV_SESSION_FILE, ENV_TIMEOUT_MS,
    };
    use batchdesk::BatchDeskError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn yaml_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_full_file_loads() {
        let file = yaml_file(
            r#"
api:
  base_url: "https://training.example.com/api"
  timeout_ms: 5000
ui:
  page_size: 25
  notification_timeout_ms: 3000
session:
  file: "/tmp/batchdesk-session.json"
"#,
        );

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.api().base_url, "https://training.example.com/api");
        assert_eq!(config.api().timeout_ms, 5000);
        assert_eq!(config.ui().page_size, 25);
        assert_eq!(config.ui().notification_timeout_ms, 3000);
        assert_eq!(config.session().file, "/tmp/batchdesk-session.json");
    }

    #[tokio::test]
    async fn test_partial_file_uses_defaults() {
        let file = yaml_file("ui:\n  page_size: 5\n");
        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.ui().page_size, 5);
        assert_eq!(config.api().base_url, "http://localhost:5000/api/");
        assert_eq!(config.session().file, ".batchdesk/session.json");
    }

    #[tokio::test]
    async fn test_invalid_values_rejected() {
        for content in [
            "ui:\n  page_size: 0\n",
            "api:\n  base_url: \"not a url\"\n",
            "api:\n  timeout_ms: 0\n",
            "session:\n  file: \"\"\n",
        ] {
            let file = yaml_file(content);
            let err = Config::from_file(file.path()).await.unwrap_err();
            assert!(
                matches!(err, BatchDeskError::Config(_)),
                "expected config error for {:?}, got {:?}",
                content,
                err
            );
        }
    }

    /// The file's `page_size: 0` alone is invalid; the override repairs it
    #[tokio::test]
    async fn test_environment_overrides_file() {
        let file = yaml_file(
            "api:\n  base_url: \"http://file.example.com/api/\"\nui:\n  page_size: 0\n",
        );

        // Environment mutation is process-wide; keep it to this one test
        unsafe {
            std::env::set_var(ENV_API_URL, "http://env.example.com/api/");
            std::env::set_var(ENV_PAGE_SIZE, "7");
            std::env::set_var(ENV_SESSION_FILE, "/tmp/env-session.json");
        }
        let loaded = Config::load(Some(file.path())).await;
        unsafe {
            std::env::set_var(ENV_TIMEOUT_MS, "soon");
        }
        let bad_timeout = Config::load(None).await;
        unsafe {
            std::env::remove_var(ENV_API_URL);
            std::env::remove_var(ENV_PAGE_SIZE);
            std::env::remove_var(ENV_SESSION_FILE);
            std::env::remove_var(ENV_TIMEOUT_MS);
        }

        let config = loaded.unwrap();
        assert_eq!(config.api().base_url, "http://env.example.com/api/");
        assert_eq!(config.ui().page_size, 7);
        assert_eq!(config.session().file, "/tmp/env-session.json");
        assert!(matches!(bad_timeout, Err(BatchDeskError::Config(_))));
    }
}
