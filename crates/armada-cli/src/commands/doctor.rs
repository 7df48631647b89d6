use armada_build::eject as eject_mod;
use armada_core::{ArmadaConfig, BuildMatrix};
use armada_registry::{CheckResult, DockerClient};
use std::path::{Path, PathBuf};

/// Diagnostic report: docker-side checks plus config, credentials, and
/// matrix/Dockerfile consistency. Prints every check, then fails if any
/// check failed.
pub async fn doctor() -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let client = DockerClient::new();
    let mut report = client.doctor().await;

    // Config file check
    if project_dir.join("armada.toml").exists() {
        report.config_file = CheckResult::ok("Found");
    } else {
        // Built-in defaults cover the published image family
        report.config_file = CheckResult::ok("Not found (defaults in use)");
    }

    match ArmadaConfig::load(&project_dir) {
        Ok(config) => {
            fill_config_checks(&mut report, &project_dir, &config);
        }
        Err(e) => {
            report.config_file = CheckResult::fail(&e.to_string());
        }
    }

    println!();
    println!("{report}");

    if !report.all_passed() {
        anyhow::bail!("some checks failed — see above for details");
    }

    Ok(())
}

fn fill_config_checks(
    report: &mut armada_registry::DoctorReport,
    project_dir: &Path,
    config: &ArmadaConfig,
) {
    // Registry credentials present in the environment
    let missing: Vec<&str> = [&config.registry.username_env, &config.registry.password_env]
        .into_iter()
        .filter(|env| std::env::var(env).is_err())
        .map(String::as_str)
        .collect();
    report.credentials = if missing.is_empty() {
        CheckResult::ok("Set")
    } else {
        CheckResult::fail(&format!("{} not set", missing.join(", ")))
    };

    let matrix = match BuildMatrix::from_config(&config.matrix) {
        Ok(matrix) => matrix,
        Err(e) => {
            report.alias = CheckResult::fail(&e.to_string());
            report.dockerfiles = CheckResult::fail("matrix invalid");
            return;
        }
    };

    // Alias correctness: latest must resolve to its target's Dockerfile
    match matrix.resolve("latest") {
        Ok(latest) => {
            report.alias = CheckResult::ok(&format!("latest -> {}", latest.dockerfile_name()));
        }
        Err(e) => report.alias = CheckResult::fail(&e.to_string()),
    }

    // Every matrix entry needs its Dockerfile once ejected
    let images_dir = &config.release.images_dir;
    if project_dir.join(images_dir).is_dir() {
        let missing: Vec<String> = matrix
            .variants()
            .iter()
            .filter(|v| !eject_mod::is_ejected(project_dir, images_dir, &v.dockerfile_name()))
            .map(|v| v.dockerfile_name())
            .collect();
        report.dockerfiles = if missing.is_empty() {
            CheckResult::ok(&format!("All present in {images_dir}/"))
        } else {
            CheckResult::fail(&format!("missing from {images_dir}/: {}", missing.join(", ")))
        };
    } else {
        report.dockerfiles = CheckResult::ok("Generated at build time");
    }
}
