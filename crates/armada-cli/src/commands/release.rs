use armada_build::context;
use armada_core::RequirementsManifest;
use armada_registry::DockerClient;
use std::path::PathBuf;

/// Publish every variant, then push an additional `<repository>:<version>`
/// tag so consumers can pin a release of the whole family.
pub async fn release(version: &str, allow_dirty: bool, allow_unpinned: bool) -> anyhow::Result<()> {
    if version.trim().is_empty() || version.contains(char::is_whitespace) {
        anyhow::bail!("'{version}' is not a usable version tag");
    }

    let project_dir = PathBuf::from(".");
    let (config, matrix) = super::load_project(&project_dir)?;

    // Dirty check: refuse to release uncommitted changes unless --allow-dirty
    if !allow_dirty && context::is_dirty(&project_dir)? {
        anyhow::bail!(
            "uncommitted changes detected.\n\
             Commit your changes, or use `armada release --allow-dirty` to release anyway."
        );
    }

    // Published images must be reproducible: every requirement pinned.
    let manifest = RequirementsManifest::load(&project_dir.join(&config.image.requirements))?;
    let unpinned = manifest.unpinned();
    if !unpinned.is_empty() && !allow_unpinned {
        let names: Vec<&str> = unpinned.iter().map(|r| r.name.as_str()).collect();
        anyhow::bail!(
            "unpinned requirements: {list}.\n\
             Pin them with ==, or use `armada release --allow-unpinned`.",
            list = names.join(", ")
        );
    }

    super::publish(None, true).await?;

    // Versioned tag rides on the latest alias
    let latest = matrix.resolve("latest")?;
    let source = latest.image_ref(&config.registry.repository);
    let versioned = format!("{repo}:{version}", repo = config.registry.repository);

    let client = DockerClient::new();
    client.tag(&source, &versioned).await?;
    println!("Pushing {versioned}...");
    client.push(&versioned).await?;

    println!();
    println!("Released {versioned}");
    Ok(())
}
