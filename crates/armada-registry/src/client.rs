use crate::docker::DockerError;
use crate::executor::{DockerExecutor, RealExecutor};
use std::fmt;
use std::path::Path;

/// Docker operations client, parameterized over the executor for testability.
pub struct DockerClient<E: DockerExecutor = RealExecutor> {
    executor: E,
}

impl DockerClient<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor,
        }
    }
}

impl Default for DockerClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: DockerExecutor> DockerClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    // ── Preflight ──

    /// Verify the docker CLI is installed and the daemon is reachable.
    pub async fn check_prerequisites(&self) -> Result<PreflightReport, PreflightError> {
        let mut report = PreflightReport::default();

        // 1. docker CLI available
        match self
            .executor
            .exec(&args(["version", "--format", "{{.Client.Version}}"]))
            .await
        {
            Ok(version) => report.cli_version = Some(version.trim().to_owned()),
            Err(_) => return Err(PreflightError::CliNotInstalled),
        }

        // 2. Daemon reachable
        match self
            .executor
            .exec(&args(["info", "--format", "{{.ServerVersion}}"]))
            .await
        {
            Ok(version) => report.daemon_version = Some(version.trim().to_owned()),
            Err(_) => return Err(PreflightError::DaemonUnreachable),
        }

        Ok(report)
    }

    // ── Doctor ──

    /// Run the docker-side diagnostic checks without early return.
    ///
    /// The CLI fills in the config-side checks (credentials, config
    /// file, matrix/Dockerfile consistency) before printing.
    pub async fn doctor(&self) -> DoctorReport {
        let mut report = DoctorReport::default();

        match self
            .executor
            .exec(&args(["version", "--format", "{{.Client.Version}}"]))
            .await
        {
            Ok(v) => report.cli = CheckResult::ok(v.trim()),
            Err(e) => {
                report.cli = CheckResult::fail(&e.to_string());
                return report;
            }
        }

        match self
            .executor
            .exec(&args(["info", "--format", "{{.ServerVersion}}"]))
            .await
        {
            Ok(v) => report.daemon = CheckResult::ok(v.trim()),
            Err(_) => report.daemon = CheckResult::fail("daemon not reachable"),
        }

        report
    }

    // ── Auth ──

    /// Log in to the registry, passing the password via stdin so it
    /// never appears in process arguments.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), PublishError> {
        self.executor
            .exec_with_stdin(
                &args(["login", "--username", username, "--password-stdin"]),
                password.as_bytes(),
            )
            .await
            .map_err(|e| PublishError::Login { source: e })?;

        Ok(())
    }

    // ── Build ──

    /// Build the assembled context into `tag`, streaming build output.
    pub async fn build(&self, context_dir: &Path, tag: &str) -> Result<(), BuildError> {
        let context = context_dir
            .to_str()
            .ok_or_else(|| BuildError::InvalidPath(context_dir.to_path_buf()))?;

        self.executor
            .exec_streaming(&args(["build", "--pull", "-t", tag, context]))
            .await
            .map_err(|e| BuildError::Build { source: e })
    }

    pub async fn tag(&self, source: &str, target: &str) -> Result<(), PublishError> {
        self.executor
            .exec(&args(["tag", source, target]))
            .await
            .map_err(|e| PublishError::Tag { source: e })?;

        Ok(())
    }

    pub async fn push(&self, tag: &str) -> Result<(), PublishError> {
        self.executor
            .exec_streaming(&args(["push", tag]))
            .await
            .map_err(|e| PublishError::Push { source: e })
    }

    pub async fn image_exists(&self, tag: &str) -> bool {
        self.executor
            .exec(&args(["image", "inspect", tag, "--format", "{{.Id}}"]))
            .await
            .is_ok()
    }

    /// Remove an image. Already-absent images are fine; cleanup stays
    /// idempotent.
    pub async fn remove_image(&self, tag: &str) -> Result<(), LifecycleError> {
        match self.executor.exec(&args(["rmi", tag])).await {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found_target() => Ok(()),
            Err(e) => Err(LifecycleError::Remove { source: e }),
        }
    }

    // ── Container lifecycle ──

    /// Start a container detached, mapping `host_port` to the image's
    /// serving port and forwarding env overrides. Returns the container id.
    pub async fn run_detached(
        &self,
        image: &str,
        name: &str,
        host_port: u16,
        container_port: u16,
        env: &[(String, String)],
    ) -> Result<String, LifecycleError> {
        let publish = format!("{host_port}:{container_port}");
        let mut run_args = args(["run", "-d", "--name", name, "-p", &publish]);
        for (key, value) in env {
            run_args.push("-e".to_owned());
            run_args.push(format!("{key}={value}"));
        }
        run_args.push(image.to_owned());

        let output = self
            .executor
            .exec(&run_args)
            .await
            .map_err(|e| LifecycleError::Run { source: e })?;

        Ok(output.trim().to_owned())
    }

    /// Force-remove a container. Absent containers are fine; `down`
    /// twice in a row must not error.
    pub async fn stop_and_remove(&self, name: &str) -> Result<(), LifecycleError> {
        match self.executor.exec(&args(["rm", "-f", name])).await {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found_target() => Ok(()),
            Err(e) => Err(LifecycleError::Remove { source: e }),
        }
    }

    /// Run a command inside the container and capture its output.
    pub async fn exec_capture(&self, name: &str, cmd: &[&str]) -> Result<String, LifecycleError> {
        let mut exec_args = args(["exec", name]);
        exec_args.extend(cmd.iter().map(|s| (*s).to_owned()));

        self.executor
            .exec(&exec_args)
            .await
            .map_err(|e| LifecycleError::Exec { source: e })
    }

    /// The uid the container's main process runs as.
    pub async fn container_user_id(&self, name: &str) -> Result<String, LifecycleError> {
        let output = self.exec_capture(name, &["id", "-u"]).await?;
        Ok(output.trim().to_owned())
    }

    /// Current health-check state from `docker inspect`.
    pub async fn health_state(&self, name: &str) -> Result<HealthState, LifecycleError> {
        let output = self
            .executor
            .exec(&args([
                "inspect",
                "--format",
                "{{json .State.Health}}",
                name,
            ]))
            .await
            .map_err(|e| LifecycleError::Inspect { source: e })?;

        let output = output.trim();
        if output.is_empty() || output == "null" {
            return Ok(HealthState::NoneDeclared);
        }

        #[derive(serde::Deserialize)]
        struct Health {
            #[serde(rename = "Status")]
            status: String,
        }

        let health: Health =
            serde_json::from_str(output).map_err(|e| LifecycleError::HealthParse {
                detail: e.to_string(),
            })?;

        Ok(match health.status.as_str() {
            "starting" => HealthState::Starting,
            "healthy" => HealthState::Healthy,
            "unhealthy" => HealthState::Unhealthy,
            other => {
                return Err(LifecycleError::HealthParse {
                    detail: format!("unknown health status '{other}'"),
                });
            }
        })
    }

    // ── Backup / restore ──

    pub async fn save(&self, tag: &str, output: &Path) -> Result<(), LifecycleError> {
        let output_str = output
            .to_str()
            .ok_or_else(|| LifecycleError::InvalidPath(output.to_path_buf()))?;

        self.executor
            .exec(&args(["save", "-o", output_str, tag]))
            .await
            .map_err(|e| LifecycleError::Save { source: e })?;

        Ok(())
    }

    pub async fn load(&self, input: &Path) -> Result<(), LifecycleError> {
        let input_str = input
            .to_str()
            .ok_or_else(|| LifecycleError::InvalidPath(input.to_path_buf()))?;

        self.executor
            .exec_streaming(&args(["load", "-i", input_str]))
            .await
            .map_err(|e| LifecycleError::Load { source: e })
    }
}

// ── Helper ──

fn args<const N: usize>(a: [&str; N]) -> Vec<String> {
    a.iter().map(|s| (*s).to_owned()).collect()
}

// ── Report types ──

#[derive(Debug, Default)]
pub struct PreflightReport {
    pub cli_version: Option<String>,
    pub daemon_version: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum PreflightError {
    #[error("docker CLI not installed — https://docs.docker.com/engine/install/")]
    CliNotInstalled,

    #[error("docker daemon not reachable — is it running?")]
    DaemonUnreachable,
}

/// Container health-check state as reported by `docker inspect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthState {
    Starting,
    Healthy,
    Unhealthy,
    /// The image declares no health check.
    NoneDeclared,
}

// ── Doctor types ──

#[derive(Debug, Default)]
pub struct DoctorReport {
    pub cli: CheckResult,
    pub daemon: CheckResult,
    pub credentials: CheckResult,
    pub config_file: CheckResult,
    pub dockerfiles: CheckResult,
    pub alias: CheckResult,
}

impl DoctorReport {
    pub fn all_passed(&self) -> bool {
        self.cli.passed
            && self.daemon.passed
            && self.credentials.passed
            && self.config_file.passed
            && self.dockerfiles.passed
            && self.alias.passed
    }
}

impl fmt::Display for DoctorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = [
            ("Docker CLI", &self.cli),
            ("Docker daemon", &self.daemon),
            ("Registry credentials", &self.credentials),
            ("Config file", &self.config_file),
            ("Matrix Dockerfiles", &self.dockerfiles),
            ("latest alias", &self.alias),
        ];
        for (label, check) in rows {
            writeln!(f, "  [{}] {label:<22} {}", check.icon(), check.detail)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct CheckResult {
    pub passed: bool,
    pub detail: String,
}

impl CheckResult {
    pub fn ok(detail: &str) -> Self {
        Self {
            passed: true,
            detail: detail.to_owned(),
        }
    }

    pub fn fail(detail: &str) -> Self {
        Self {
            passed: false,
            detail: detail.to_owned(),
        }
    }

    pub fn icon(&self) -> &'static str {
        if self.passed { "OK" } else { "NG" }
    }
}

// ── Error types ──

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("context path is not valid UTF-8: {0}")]
    InvalidPath(std::path::PathBuf),

    #[error("docker build failed")]
    Build { source: DockerError },
}

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("registry login failed")]
    Login { source: DockerError },

    #[error("failed to tag image")]
    Tag { source: DockerError },

    #[error("failed to push image")]
    Push { source: DockerError },
}

#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    #[error("failed to start container")]
    Run { source: DockerError },

    #[error("failed to exec in container")]
    Exec { source: DockerError },

    #[error("failed to inspect container")]
    Inspect { source: DockerError },

    #[error("unexpected health payload: {detail}")]
    HealthParse { detail: String },

    #[error("failed to remove")]
    Remove { source: DockerError },

    #[error("failed to save image")]
    Save { source: DockerError },

    #[error("failed to load image")]
    Load { source: DockerError },

    #[error("path is not valid UTF-8: {0}")]
    InvalidPath(std::path::PathBuf),
}
