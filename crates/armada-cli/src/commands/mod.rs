mod backup;
mod build;
mod ci;
mod clean;
mod doctor;
mod eject;
mod init;
mod lifecycle;
mod matrix;
mod publish;
mod release;
mod scan;
mod verify;

use armada_build::dockerfile::DockerfileGenerator;
use armada_build::eject as eject_mod;
use armada_core::{ArmadaConfig, BuildMatrix, ImageVariant};
use std::path::Path;

pub use backup::{backup, restore};
pub use build::build;
pub use ci::ci_init;
pub use clean::clean;
pub use doctor::doctor;
pub use eject::eject;
pub use init::init_project;
pub use lifecycle::{down, up};
pub use matrix::matrix;
pub use publish::{describe, publish};
pub use release::release;
pub use scan::scan;
pub use verify::verify;

/// Container name used by `up`/`down`.
pub(crate) const LOCAL_CONTAINER: &str = "armada-app";

/// Container name used by `verify`.
pub(crate) const VERIFY_CONTAINER: &str = "armada-verify";

/// Load config and enumerate the build matrix.
pub(crate) fn load_project(project_dir: &Path) -> anyhow::Result<(ArmadaConfig, BuildMatrix)> {
    let config = ArmadaConfig::load(project_dir)?;
    let matrix = BuildMatrix::from_config(&config.matrix)?;
    Ok((config, matrix))
}

/// Dockerfile content for a variant: the ejected file when present,
/// rendered otherwise.
pub(crate) fn dockerfile_content(
    project_dir: &Path,
    config: &ArmadaConfig,
    variant: &ImageVariant,
) -> anyhow::Result<String> {
    let file = variant.dockerfile_name();
    let images_dir = &config.release.images_dir;

    if eject_mod::is_ejected(project_dir, images_dir, &file) {
        Ok(eject_mod::load_ejected(project_dir, images_dir, &file)?)
    } else {
        Ok(DockerfileGenerator::new(&config.image, variant).render())
    }
}

/// Registry credentials from the configured environment variables.
pub(crate) fn credentials(config: &ArmadaConfig) -> anyhow::Result<(String, String)> {
    let username = std::env::var(&config.registry.username_env).map_err(|_| {
        anyhow::anyhow!(
            "{env} not set — export it or add it to .env",
            env = config.registry.username_env
        )
    })?;
    let password = std::env::var(&config.registry.password_env).map_err(|_| {
        anyhow::anyhow!(
            "{env} not set — export it or add it to .env",
            env = config.registry.password_env
        )
    })?;
    Ok((username, password))
}

/// Resolve the variants a command operates on: one by name, or the
/// whole matrix with `--all`.
pub(crate) fn select_targets<'a>(
    matrix: &'a BuildMatrix,
    name: Option<&str>,
    all: bool,
) -> anyhow::Result<Vec<&'a ImageVariant>> {
    match (name, all) {
        (Some(name), false) => Ok(vec![matrix.resolve(name)?]),
        (None, true) => Ok(matrix.variants().iter().collect()),
        _ => anyhow::bail!("specify an image name or --all"),
    }
}
