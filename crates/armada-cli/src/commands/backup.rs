use armada_registry::DockerClient;
use std::path::{Path, PathBuf};

/// Save a built variant to a tarball.
pub async fn backup(name: &str, output: Option<PathBuf>) -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let (config, matrix) = super::load_project(&project_dir)?;
    let variant = matrix.resolve(name)?;
    let tag = variant.image_ref(&config.registry.repository);
    let client = DockerClient::new();

    if !client.image_exists(&tag).await {
        anyhow::bail!("{tag} is not built — run: armada build {name}");
    }

    let output = output.unwrap_or_else(|| PathBuf::from(format!("{name}.tar")));
    client.save(&tag, &output).await?;

    println!("Saved {tag} to {path}", path = output.display());
    Ok(())
}

/// Load a variant tarball back into docker.
pub async fn restore(input: &Path) -> anyhow::Result<()> {
    if !input.is_file() {
        anyhow::bail!("no tarball at {path}", path = input.display());
    }

    let client = DockerClient::new();
    client.load(input).await?;

    println!("Restored images from {path}", path = input.display());
    Ok(())
}
