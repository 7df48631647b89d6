use super::LOCAL_CONTAINER;
use armada_registry::DockerClient;
use std::path::PathBuf;

/// Start a variant locally, replacing any previous local container.
pub async fn up(
    name: &str,
    port: u16,
    workers: Option<u32>,
    log_level: Option<String>,
) -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let (config, matrix) = super::load_project(&project_dir)?;
    let variant = matrix.resolve(name)?;
    let tag = variant.image_ref(&config.registry.repository);
    let client = DockerClient::new();

    client.check_prerequisites().await?;

    if !client.image_exists(&tag).await {
        anyhow::bail!("{tag} is not built — run: armada build {name}");
    }

    let mut env = Vec::new();
    if let Some(workers) = workers {
        env.push(("WORKERS".to_owned(), workers.to_string()));
    }
    if let Some(log_level) = log_level {
        env.push(("LOG_LEVEL".to_owned(), log_level));
    }

    client.stop_and_remove(LOCAL_CONTAINER).await?;
    client
        .run_detached(&tag, LOCAL_CONTAINER, port, config.image.port, &env)
        .await?;

    println!("Serving {tag} on http://localhost:{port} (container {LOCAL_CONTAINER})");
    println!("Stop with: armada down");
    Ok(())
}

/// Stop and remove the local container. A second `down` is a no-op.
pub async fn down() -> anyhow::Result<()> {
    let client = DockerClient::new();
    client.stop_and_remove(LOCAL_CONTAINER).await?;
    println!("Stopped.");
    Ok(())
}
