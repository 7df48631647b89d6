use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn armada() -> assert_cmd::Command {
    cargo_bin_cmd!("armada")
}

// ── Help / Version ──

#[test]
fn shows_help() {
    armada()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Build and publish a fleet of Python ASGI base images",
        ));
}

#[test]
fn shows_version() {
    armada()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("armada"));
}

// ── Init Command ──

#[test]
fn init_creates_project_structure() {
    let tmp = TempDir::new().unwrap();

    armada()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created armada.toml"));

    assert!(tmp.path().join("armada.toml").exists());
    assert!(tmp.path().join("app/main.py").exists());
    assert!(tmp.path().join("requirements.txt").exists());
    assert!(tmp.path().join(".env.example").exists());
}

#[test]
fn init_requirements_are_pinned() {
    let tmp = TempDir::new().unwrap();

    armada()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success();

    let content = std::fs::read_to_string(tmp.path().join("requirements.txt")).unwrap();
    for line in content.lines().filter(|l| !l.trim().is_empty()) {
        assert!(line.contains("=="), "unpinned requirement: {line}");
    }
}

#[test]
fn init_app_serves_health_endpoint() {
    let tmp = TempDir::new().unwrap();

    armada()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success();

    let content = std::fs::read_to_string(tmp.path().join("app/main.py")).unwrap();
    assert!(content.contains("/health"));
    assert!(content.contains("app = ReadyAPI"));
}

#[test]
fn init_twice_skips_existing_files() {
    let tmp = TempDir::new().unwrap();

    armada()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success();

    armada()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to create"))
        .stderr(predicate::str::contains("armada.toml already exists"));
}

// ── Matrix Command ──

#[test]
fn matrix_lists_default_variants() {
    let tmp = TempDir::new().unwrap();

    armada()
        .current_dir(tmp.path())
        .arg("matrix")
        .assert()
        .success()
        .stdout(predicate::str::contains("khulnasoft/uvicorn-gunicorn-readyapi"))
        .stdout(predicate::str::contains("latest"))
        .stdout(predicate::str::contains("python3.11.dockerfile"))
        .stdout(predicate::str::contains("python3.7-alpine"));
}

#[test]
fn matrix_respects_config_file() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("armada.toml"),
        r#"
[registry]
repository = "acme/asgi-base"

[matrix]
python_versions = ["3.12"]
flavors = ["slim"]
latest = "python3.12-slim"
"#,
    )
    .unwrap();

    armada()
        .current_dir(tmp.path())
        .arg("matrix")
        .assert()
        .success()
        .stdout(predicate::str::contains("acme/asgi-base"))
        .stdout(predicate::str::contains("python3.12-slim"))
        .stdout(predicate::str::contains("latest"));
}

#[test]
fn matrix_rejects_dangling_alias() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("armada.toml"),
        r#"
[matrix]
python_versions = ["3.12"]
flavors = ["slim"]
latest = "python3.11"
"#,
    )
    .unwrap();

    armada()
        .current_dir(tmp.path())
        .arg("matrix")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'latest' aliases 'python3.11'"));
}

// ── Eject Command ──

#[test]
fn eject_writes_dockerfile_per_matrix_entry() {
    let tmp = TempDir::new().unwrap();

    armada()
        .current_dir(tmp.path())
        .arg("eject")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ejected 15 Dockerfiles to images/"));

    // latest shares the python3.11 Dockerfile
    assert!(tmp.path().join("images/python3.11.dockerfile").exists());
    assert!(tmp.path().join("images/python3.7-alpine.dockerfile").exists());
    assert!(!tmp.path().join("images/latest.dockerfile").exists());

    let content =
        std::fs::read_to_string(tmp.path().join("images/python3.9-slim.dockerfile")).unwrap();
    assert!(content.contains("FROM python:3.9-slim"));
}

#[test]
fn eject_twice_fails() {
    let tmp = TempDir::new().unwrap();

    armada()
        .current_dir(tmp.path())
        .arg("eject")
        .assert()
        .success();

    armada()
        .current_dir(tmp.path())
        .arg("eject")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already ejected"));
}

// ── Ci Command ──

#[test]
fn ci_init_generates_workflow() {
    let tmp = TempDir::new().unwrap();

    armada()
        .current_dir(tmp.path())
        .args(["ci", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Generated: .github/workflows/deploy.yml",
        ))
        .stdout(predicate::str::contains("every Monday at 00:00"));

    let yaml =
        std::fs::read_to_string(tmp.path().join(".github/workflows/deploy.yml")).unwrap();
    assert!(yaml.contains("cron: \"0 0 * * 1\""));
    assert!(yaml.contains("- name: latest"));
    assert!(yaml.contains("DOCKER_USERNAME: ${{ secrets.DOCKER_USERNAME }}"));
}

#[test]
fn ci_init_refuses_to_overwrite() {
    let tmp = TempDir::new().unwrap();

    armada()
        .current_dir(tmp.path())
        .args(["ci", "init"])
        .assert()
        .success();

    armada()
        .current_dir(tmp.path())
        .args(["ci", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Workflow already exists"));
}

// ── Target Selection ──

#[test]
fn build_requires_name_or_all() {
    let tmp = TempDir::new().unwrap();

    armada()
        .current_dir(tmp.path())
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("specify an image name or --all"));
}

#[test]
fn restore_missing_tarball_fails() {
    let tmp = TempDir::new().unwrap();

    armada()
        .current_dir(tmp.path())
        .args(["restore", "missing.tar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no tarball at"));
}
