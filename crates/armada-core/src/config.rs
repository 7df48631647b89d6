use serde::{Deserialize, Serialize};

/// armada.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArmadaConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub matrix: MatrixConfig,
    #[serde(default)]
    pub image: ImageConfig,
    #[serde(default)]
    pub release: ReleaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Registry repository the variants are published under
    #[serde(default = "default_repository")]
    pub repository: String,
    /// Environment variable holding the registry username
    #[serde(default = "default_username_env")]
    pub username_env: String,
    /// Environment variable holding the registry password or token
    #[serde(default = "default_password_env")]
    pub password_env: String,
    /// README pushed to the registry as the repository description
    #[serde(default = "default_readme")]
    pub readme: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixConfig {
    /// Python interpreter versions, newest first
    #[serde(default = "default_python_versions")]
    pub python_versions: Vec<String>,
    /// Base flavors built for every version
    #[serde(default = "default_flavors")]
    pub flavors: Vec<String>,
    /// Image name the `latest` tag aliases
    #[serde(default = "default_latest")]
    pub latest: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Application directory copied into the image
    #[serde(default = "default_app_dir")]
    pub app_dir: String,
    /// Requirements manifest installed via pip
    #[serde(default = "default_requirements")]
    pub requirements: String,
    /// Port the ASGI server binds and the image exposes
    #[serde(default = "default_port")]
    pub port: u16,
    /// Default gunicorn worker count
    #[serde(default = "default_workers")]
    pub workers: u32,
    /// Default log level for the server process
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Non-root user the container runs as
    #[serde(default = "default_user")]
    pub user: String,
    /// Numeric uid for the non-root user
    #[serde(default = "default_uid")]
    pub uid: u32,
    #[serde(default)]
    pub healthcheck: HealthcheckConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthcheckConfig {
    /// HTTP path polled by the container health check
    #[serde(default = "default_health_path")]
    pub path: String,
    #[serde(default = "default_health_interval")]
    pub interval_secs: u64,
    #[serde(default = "default_health_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_health_retries")]
    pub retries: u32,
    #[serde(default = "default_health_start_period")]
    pub start_period_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseConfig {
    /// Directory ejected Dockerfiles are written to
    #[serde(default = "default_images_dir")]
    pub images_dir: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            repository: default_repository(),
            username_env: default_username_env(),
            password_env: default_password_env(),
            readme: default_readme(),
        }
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            python_versions: default_python_versions(),
            flavors: default_flavors(),
            latest: default_latest(),
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            app_dir: default_app_dir(),
            requirements: default_requirements(),
            port: default_port(),
            workers: default_workers(),
            log_level: default_log_level(),
            user: default_user(),
            uid: default_uid(),
            healthcheck: HealthcheckConfig::default(),
        }
    }
}

impl Default for HealthcheckConfig {
    fn default() -> Self {
        Self {
            path: default_health_path(),
            interval_secs: default_health_interval(),
            timeout_secs: default_health_timeout(),
            retries: default_health_retries(),
            start_period_secs: default_health_start_period(),
        }
    }
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            images_dir: default_images_dir(),
        }
    }
}

impl ArmadaConfig {
    /// Load from armada.toml at the given path, or return defaults if not found.
    pub fn load(project_dir: &std::path::Path) -> crate::Result<Self> {
        let config_path = project_dir.join("armada.toml");
        if config_path.exists() {
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path,
                source: e,
            })
        } else {
            Ok(Self::default())
        }
    }
}

fn default_repository() -> String {
    "khulnasoft/uvicorn-gunicorn-readyapi".to_owned()
}

fn default_username_env() -> String {
    "DOCKER_USERNAME".to_owned()
}

fn default_password_env() -> String {
    "DOCKER_PASSWORD".to_owned()
}

fn default_readme() -> String {
    "README.md".to_owned()
}

fn default_python_versions() -> Vec<String> {
    ["3.11", "3.10", "3.9", "3.8", "3.7"]
        .map(str::to_owned)
        .to_vec()
}

fn default_flavors() -> Vec<String> {
    ["full", "slim", "alpine"].map(str::to_owned).to_vec()
}

fn default_latest() -> String {
    "python3.11".to_owned()
}

fn default_app_dir() -> String {
    "app".to_owned()
}

fn default_requirements() -> String {
    "requirements.txt".to_owned()
}

fn default_port() -> u16 {
    80
}

fn default_workers() -> u32 {
    2
}

fn default_log_level() -> String {
    "info".to_owned()
}

fn default_user() -> String {
    "appuser".to_owned()
}

fn default_uid() -> u32 {
    1000
}

fn default_health_path() -> String {
    "/health".to_owned()
}

fn default_health_interval() -> u64 {
    30
}

fn default_health_timeout() -> u64 {
    5
}

fn default_health_retries() -> u32 {
    3
}

fn default_health_start_period() -> u64 {
    10
}

fn default_images_dir() -> String {
    "images".to_owned()
}
