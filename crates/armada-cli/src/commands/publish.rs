use armada_registry::{DockerClient, HubClient};
use std::path::PathBuf;

/// Build and push variants to the registry. This is the CI entrypoint:
/// the deploy workflow runs `armada publish <name>` once per matrix job.
pub async fn publish(name: Option<String>, all: bool) -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let (config, matrix) = super::load_project(&project_dir)?;

    let targets = super::select_targets(&matrix, name.as_deref(), all)?;

    let client = DockerClient::new();
    client.check_prerequisites().await?;
    let (username, password) = super::credentials(&config)?;

    println!("Logging in to registry as {username}...");
    client.login(&username, &password).await?;

    for variant in &targets {
        let tag = super::build::build_variant(&client, &project_dir, &config, variant, None).await?;
        println!("Pushing {tag}...");
        client.push(&tag).await?;
    }

    println!();
    println!(
        "Published {count} image{s} to {repo}.",
        count = targets.len(),
        s = if targets.len() == 1 { "" } else { "s" },
        repo = config.registry.repository
    );

    // A full publish also refreshes the repository description.
    if all {
        describe().await?;
    }

    Ok(())
}

/// Push the README to the registry as the repository description.
pub async fn describe() -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let (config, _) = super::load_project(&project_dir)?;
    let (username, password) = super::credentials(&config)?;

    let readme_path = project_dir.join(&config.registry.readme);
    let readme = std::fs::read_to_string(&readme_path).map_err(|e| {
        anyhow::anyhow!(
            "failed to read {path}: {e}",
            path = readme_path.display()
        )
    })?;

    println!("Refreshing description of {}...", config.registry.repository);

    let hub = HubClient::new();
    let token = hub.login(&username, &password).await?;
    hub.update_description(&token, &config.registry.repository, &readme)
        .await?;

    println!("Description updated.");

    Ok(())
}
