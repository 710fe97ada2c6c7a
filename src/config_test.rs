use super::*;
use serial_test::serial;
use tempfile::TempDir;

fn clear_env() {
    std::env::remove_var(ENV_DATA_DIR);
    std::env::remove_var(ENV_PORTAL_URL);
}

#[test]
fn test_http_config_default() {
    let config = HttpConfig::default();
    assert_eq!(config.user_agent, "sgal-cli");
    assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
}

#[test]
fn test_http_config_zero_timeout_disables_timeout() {
    let config = HttpConfig {
        timeout_secs: 0,
        ..HttpConfig::default()
    };
    assert_eq!(config.timeout(), None);
}

#[test]
#[serial]
fn test_load_from_missing_file_uses_defaults() {
    clear_env();
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");

    let config = GalleryConfig::load_from(&temp.path().join("config.toml"), &data).unwrap();

    assert_eq!(config.data_dir, data);
    assert_eq!(config.portal_url, DEFAULT_PORTAL_URL);
    assert_eq!(config.http.user_agent, "sgal-cli");
}

#[test]
#[serial]
fn test_load_from_file() {
    clear_env();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
data_dir = "/srv/sample-data"
portal_url = "https://portal.example.com/"

[http]
timeout_secs = 5
"#,
    )
    .unwrap();

    let config = GalleryConfig::load_from(&path, temp.path()).unwrap();

    assert_eq!(config.data_dir, PathBuf::from("/srv/sample-data"));
    // 末尾のスラッシュは除去される
    assert_eq!(config.portal_url, "https://portal.example.com");
    assert_eq!(config.http.timeout_secs, 5);
    // 未指定フィールドはデフォルト
    assert_eq!(config.http.user_agent, "sgal-cli");
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "data_dir = \"/from/file\"\n").unwrap();

    std::env::set_var(ENV_DATA_DIR, "/from/env");
    std::env::set_var(ENV_PORTAL_URL, "https://env.example.com");
    let config = GalleryConfig::load_from(&path, temp.path()).unwrap();
    clear_env();

    assert_eq!(config.data_dir, PathBuf::from("/from/env"));
    assert_eq!(config.portal_url, "https://env.example.com");
}

#[test]
#[serial]
fn test_invalid_toml_is_error() {
    clear_env();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "data_dir = [").unwrap();

    let result = GalleryConfig::load_from(&path, temp.path());
    assert!(matches!(result, Err(GalleryError::Toml(_))));
}

#[test]
#[serial]
fn test_item_dir_joins_item_id() {
    clear_env();
    let temp = TempDir::new().unwrap();
    let config = GalleryConfig::load_from(&temp.path().join("none.toml"), temp.path()).unwrap();
    assert_eq!(config.item_dir("abc123"), temp.path().join("abc123"));
}
