use armada_core::ImageConfig;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Root directory build contexts are assembled under.
const CONTEXT_ROOT: &str = ".armada/build";

/// Assembles a docker build context for one variant.
///
/// The context gets the application directory, the requirements
/// manifest, and the rendered (or ejected) Dockerfile, nothing else,
/// so stray project files never leak into image layers.
pub fn assemble_context(
    project_dir: &Path,
    variant_name: &str,
    image: &ImageConfig,
    dockerfile_content: &str,
) -> Result<PathBuf, ContextError> {
    let context_dir = project_dir.join(CONTEXT_ROOT).join(variant_name);

    // Clean previous context
    if context_dir.exists() {
        std::fs::remove_dir_all(&context_dir).map_err(|e| ContextError::Cleanup {
            path: context_dir.clone(),
            source: e,
        })?;
    }
    std::fs::create_dir_all(&context_dir).map_err(|e| ContextError::Create {
        path: context_dir.clone(),
        source: e,
    })?;

    // Application directory, copied verbatim
    let app_src = project_dir.join(&image.app_dir);
    if !app_src.is_dir() {
        return Err(ContextError::MissingAppDir { path: app_src });
    }
    copy_dir(&app_src, &context_dir.join(&image.app_dir))?;

    // Requirements manifest
    let req_src = project_dir.join(&image.requirements);
    if !req_src.is_file() {
        return Err(ContextError::MissingRequirements { path: req_src });
    }
    let req_dst = context_dir.join(&image.requirements);
    if let Some(parent) = req_dst.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ContextError::Create {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::copy(&req_src, &req_dst).map_err(|e| ContextError::CopyFile {
        path: req_src,
        source: e,
    })?;

    // Dockerfile
    std::fs::write(context_dir.join("Dockerfile"), dockerfile_content).map_err(|e| {
        ContextError::WriteDockerfile {
            path: context_dir.join("Dockerfile"),
            source: e,
        }
    })?;

    Ok(context_dir)
}

/// Remove all assembled build contexts. Missing directory is fine —
/// repeated cleanup stays a no-op.
pub fn remove_contexts(project_dir: &Path) -> Result<(), ContextError> {
    let root = project_dir.join(".armada");
    match std::fs::remove_dir_all(&root) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ContextError::Cleanup {
            path: root,
            source: e,
        }),
    }
}

fn copy_dir(src: &Path, dst: &Path) -> Result<(), ContextError> {
    std::fs::create_dir_all(dst).map_err(|e| ContextError::Create {
        path: dst.to_path_buf(),
        source: e,
    })?;

    let entries = std::fs::read_dir(src).map_err(|e| ContextError::CopyFile {
        path: src.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ContextError::CopyFile {
            path: src.to_path_buf(),
            source: e,
        })?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path).map_err(|e| ContextError::CopyFile {
                path: src_path,
                source: e,
            })?;
        }
    }

    Ok(())
}

/// Checks whether the git working tree has uncommitted changes.
pub fn is_dirty(project_dir: &Path) -> Result<bool, ContextError> {
    let output = Command::new("git")
        .args(["status", "--porcelain"])
        .current_dir(project_dir)
        .output()
        .map_err(|e| ContextError::GitCommand {
            detail: "failed to execute git status".to_owned(),
            source: e,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ContextError::GitFailed {
            detail: format!(
                "git status exited with {}: {}",
                output.status,
                stderr.trim()
            ),
        });
    }

    Ok(!output.stdout.is_empty())
}

#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("failed to clean up build context {path}")]
    Cleanup {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("failed to create directory {path}")]
    Create {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("application directory not found at {path}")]
    MissingAppDir { path: std::path::PathBuf },
    #[error("requirements manifest not found at {path}")]
    MissingRequirements { path: std::path::PathBuf },
    #[error("failed to copy {path}")]
    CopyFile {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write Dockerfile at {path}")]
    WriteDockerfile {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("git command failed: {detail}")]
    GitCommand {
        detail: String,
        source: std::io::Error,
    },
    #[error("git failed: {detail}")]
    GitFailed { detail: String },
}
