use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    // ── Build matrix ──
    #[error("unknown image '{name}'; known images: {}", format_names(known))]
    UnknownVariant { name: String, known: Vec<String> },

    #[error("duplicate image name '{name}' in build matrix")]
    DuplicateVariant { name: String },

    #[error("'latest' aliases '{target}', which is not in the build matrix")]
    AliasTargetMissing { target: String },

    #[error("unknown base flavor '{value}'; expected one of: full, slim, alpine")]
    UnknownFlavor { value: String },

    // ── Schedule ──
    #[error("invalid cron expression '{expr}': {reason}")]
    InvalidSchedule { expr: String, reason: String },

    // ── Requirements manifest ──
    #[error("failed to read requirements manifest at {path}")]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn format_names(names: &[String]) -> String {
    if names.is_empty() {
        "(none)".to_owned()
    } else {
        names.join(", ")
    }
}
