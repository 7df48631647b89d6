use armada_build::context;
use armada_core::{ArmadaConfig, ImageVariant};
use armada_registry::{DockerClient, DockerExecutor};
use std::path::{Path, PathBuf};

/// Build one variant, or the whole matrix with `--all`.
pub async fn build(name: Option<String>, all: bool, tag: Option<String>) -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let (config, matrix) = super::load_project(&project_dir)?;

    let targets = super::select_targets(&matrix, name.as_deref(), all)?;
    if tag.is_some() && targets.len() > 1 {
        anyhow::bail!("--tag applies to a single image, not --all");
    }

    let client = DockerClient::new();
    client.check_prerequisites().await?;

    for variant in &targets {
        build_variant(&client, &project_dir, &config, variant, tag.as_deref()).await?;
    }

    println!();
    println!(
        "Built {count} image{s}.",
        count = targets.len(),
        s = if targets.len() == 1 { "" } else { "s" }
    );

    Ok(())
}

/// Assemble the context for one variant and run `docker build`.
/// Returns the tag the image was built as.
pub(super) async fn build_variant<E: DockerExecutor>(
    client: &DockerClient<E>,
    project_dir: &Path,
    config: &ArmadaConfig,
    variant: &ImageVariant,
    tag_override: Option<&str>,
) -> anyhow::Result<String> {
    let tag = match tag_override {
        Some(tag) => tag.to_owned(),
        None => variant.image_ref(&config.registry.repository),
    };

    println!(
        "Building {tag} from {dockerfile}...",
        dockerfile = variant.dockerfile_name()
    );

    let dockerfile = super::dockerfile_content(project_dir, config, variant)?;
    let context_dir = context::assemble_context(project_dir, &variant.name, &config.image, &dockerfile)?;

    client.build(&context_dir, &tag).await?;

    Ok(tag)
}
