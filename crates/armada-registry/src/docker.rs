#[derive(Debug, thiserror::Error)]
pub enum DockerError {
    #[error("docker CLI not found — install: https://docs.docker.com/engine/install/")]
    NotFound { source: std::io::Error },

    #[error("docker command failed: {args:?}\n{stderr}")]
    CommandFailed { args: Vec<String>, stderr: String },

    #[error("docker output was not valid UTF-8")]
    InvalidUtf8 { source: std::string::FromUtf8Error },

    #[error("failed to write to docker stdin")]
    StdinWrite { source: std::io::Error },
}

impl DockerError {
    /// Whether the failure means "the target does not exist".
    ///
    /// Cleanup paths treat these as success so repeat invocations stay
    /// idempotent.
    pub fn is_not_found_target(&self) -> bool {
        match self {
            Self::CommandFailed { stderr, .. } => {
                let stderr = stderr.to_ascii_lowercase();
                stderr.contains("no such container")
                    || stderr.contains("no such image")
                    || stderr.contains("no such object")
                    || stderr.contains("not found")
            }
            _ => false,
        }
    }
}
