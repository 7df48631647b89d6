use std::path::{Path, PathBuf};

/// Ejects rendered Dockerfiles into the images directory.
///
/// After ejecting, builds load `<images_dir>/<name>.dockerfile` instead
/// of rendering, so variants can be customized by hand.
pub fn eject(
    project_dir: &Path,
    images_dir: &str,
    rendered: &[(String, String)],
) -> Result<(), EjectError> {
    let dir = project_dir.join(images_dir);
    std::fs::create_dir_all(&dir).map_err(|e| EjectError::CreateDir {
        path: dir.clone(),
        source: e,
    })?;

    for (file_name, _) in rendered {
        let path = dir.join(file_name);
        if path.exists() {
            return Err(EjectError::AlreadyEjected(path));
        }
    }

    for (file_name, content) in rendered {
        let path = dir.join(file_name);
        std::fs::write(&path, content).map_err(|e| EjectError::Write { path, source: e })?;
    }

    Ok(())
}

/// Check whether a variant's Dockerfile has been ejected.
pub fn is_ejected(project_dir: &Path, images_dir: &str, dockerfile_name: &str) -> bool {
    dockerfile_path(project_dir, images_dir, dockerfile_name).exists()
}

/// Load an ejected Dockerfile's content.
pub fn load_ejected(
    project_dir: &Path,
    images_dir: &str,
    dockerfile_name: &str,
) -> Result<String, EjectError> {
    let path = dockerfile_path(project_dir, images_dir, dockerfile_name);
    std::fs::read_to_string(&path).map_err(|e| EjectError::Read { path, source: e })
}

fn dockerfile_path(project_dir: &Path, images_dir: &str, dockerfile_name: &str) -> PathBuf {
    project_dir.join(images_dir).join(dockerfile_name)
}

#[derive(Debug, thiserror::Error)]
pub enum EjectError {
    #[error("failed to create images directory at {path}")]
    CreateDir {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("Dockerfile already ejected at {0} — edit directly or delete to re-eject")]
    AlreadyEjected(std::path::PathBuf),
    #[error("failed to write {path}")]
    Write {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read ejected Dockerfile at {path}")]
    Read {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}
