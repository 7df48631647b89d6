use armada_core::ArmadaConfig;
use tempfile::TempDir;

#[test]
fn load_returns_defaults_when_no_config_file() {
    let tmp = TempDir::new().unwrap();
    let config = ArmadaConfig::load(tmp.path()).unwrap();

    assert_eq!(
        config.registry.repository,
        "khulnasoft/uvicorn-gunicorn-readyapi"
    );
    assert_eq!(config.registry.username_env, "DOCKER_USERNAME");
    assert_eq!(config.registry.password_env, "DOCKER_PASSWORD");
    assert_eq!(
        config.matrix.python_versions,
        vec!["3.11", "3.10", "3.9", "3.8", "3.7"]
    );
    assert_eq!(config.matrix.flavors, vec!["full", "slim", "alpine"]);
    assert_eq!(config.matrix.latest, "python3.11");
    assert_eq!(config.image.app_dir, "app");
    assert_eq!(config.image.requirements, "requirements.txt");
    assert_eq!(config.image.port, 80);
    assert_eq!(config.image.workers, 2);
    assert_eq!(config.image.log_level, "info");
    assert_eq!(config.image.user, "appuser");
    assert_eq!(config.image.uid, 1000);
    assert_eq!(config.image.healthcheck.path, "/health");
    assert_eq!(config.image.healthcheck.interval_secs, 30);
    assert_eq!(config.image.healthcheck.timeout_secs, 5);
    assert_eq!(config.image.healthcheck.retries, 3);
    assert_eq!(config.release.images_dir, "images");
}

#[test]
fn load_parses_full_config() {
    let tmp = TempDir::new().unwrap();
    let toml = r#"
[registry]
repository = "acme/asgi-base"
username_env = "REGISTRY_USER"
password_env = "REGISTRY_TOKEN"
readme = "docs/HUB.md"

[matrix]
python_versions = ["3.12", "3.11"]
flavors = ["full", "slim"]
latest = "python3.12"

[image]
app_dir = "service"
requirements = "deps.txt"
port = 8080
workers = 4
log_level = "debug"
user = "svc"
uid = 1001

[image.healthcheck]
path = "/live"
interval_secs = 10
timeout_secs = 2
retries = 5
start_period_secs = 3

[release]
images_dir = "dockerfiles"
"#;
    std::fs::write(tmp.path().join("armada.toml"), toml).unwrap();

    let config = ArmadaConfig::load(tmp.path()).unwrap();

    assert_eq!(config.registry.repository, "acme/asgi-base");
    assert_eq!(config.registry.username_env, "REGISTRY_USER");
    assert_eq!(config.registry.password_env, "REGISTRY_TOKEN");
    assert_eq!(config.registry.readme, "docs/HUB.md");
    assert_eq!(config.matrix.python_versions, vec!["3.12", "3.11"]);
    assert_eq!(config.matrix.flavors, vec!["full", "slim"]);
    assert_eq!(config.matrix.latest, "python3.12");
    assert_eq!(config.image.app_dir, "service");
    assert_eq!(config.image.requirements, "deps.txt");
    assert_eq!(config.image.port, 8080);
    assert_eq!(config.image.workers, 4);
    assert_eq!(config.image.log_level, "debug");
    assert_eq!(config.image.user, "svc");
    assert_eq!(config.image.uid, 1001);
    assert_eq!(config.image.healthcheck.path, "/live");
    assert_eq!(config.image.healthcheck.interval_secs, 10);
    assert_eq!(config.image.healthcheck.timeout_secs, 2);
    assert_eq!(config.image.healthcheck.retries, 5);
    assert_eq!(config.image.healthcheck.start_period_secs, 3);
    assert_eq!(config.release.images_dir, "dockerfiles");
}

#[test]
fn load_partial_config_fills_defaults() {
    let tmp = TempDir::new().unwrap();
    let toml = r#"
[registry]
repository = "acme/asgi-base"
"#;
    std::fs::write(tmp.path().join("armada.toml"), toml).unwrap();

    let config = ArmadaConfig::load(tmp.path()).unwrap();

    assert_eq!(config.registry.repository, "acme/asgi-base");
    // Defaults preserved
    assert_eq!(config.registry.username_env, "DOCKER_USERNAME");
    assert_eq!(config.matrix.latest, "python3.11");
    assert_eq!(config.image.port, 80);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("armada.toml"), "not valid {{{{ toml").unwrap();

    let result = ArmadaConfig::load(tmp.path());
    assert!(result.is_err());

    let err = result.unwrap_err().to_string();
    assert!(err.contains("failed to parse config"));
}
