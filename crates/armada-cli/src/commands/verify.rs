use super::VERIFY_CONTAINER;
use armada_core::ArmadaConfig;
use armada_registry::{DockerClient, DockerExecutor, HealthState};
use std::path::PathBuf;
use std::time::Duration;

/// Run a built variant and check it the way the registry's consumers
/// would: the health check must go healthy, the HTTP endpoint must
/// answer, and the main process must not run as root.
pub async fn verify(name: &str, port: u16, timeout: u64) -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let (config, matrix) = super::load_project(&project_dir)?;
    let variant = matrix.resolve(name)?;
    let tag = variant.image_ref(&config.registry.repository);
    let client = DockerClient::new();

    client.check_prerequisites().await?;

    if !client.image_exists(&tag).await {
        anyhow::bail!("{tag} is not built — run: armada build {name}");
    }

    // Fresh container; leftovers from an aborted run are removed first.
    client.stop_and_remove(VERIFY_CONTAINER).await?;
    println!("Starting {tag} on port {port}...");
    client
        .run_detached(&tag, VERIFY_CONTAINER, port, config.image.port, &[])
        .await?;

    let result = run_checks(&client, &config, port, timeout).await;

    // Always clean up, pass or fail
    client.stop_and_remove(VERIFY_CONTAINER).await?;

    result?;
    println!();
    println!("{tag} verified.");
    Ok(())
}

async fn run_checks<E: DockerExecutor>(
    client: &DockerClient<E>,
    config: &ArmadaConfig,
    port: u16,
    timeout: u64,
) -> anyhow::Result<()> {
    // 1. Health check reaches healthy within the deadline
    let deadline = tokio::time::Instant::now() + Duration::from_secs(timeout);
    loop {
        match client.health_state(VERIFY_CONTAINER).await? {
            HealthState::Healthy => {
                println!("  health: healthy");
                break;
            }
            HealthState::NoneDeclared => {
                println!("  health: no health check declared");
                // Give the server a moment before probing directly
                tokio::time::sleep(Duration::from_secs(3)).await;
                break;
            }
            HealthState::Unhealthy => {
                anyhow::bail!("container reported unhealthy");
            }
            HealthState::Starting => {
                if tokio::time::Instant::now() >= deadline {
                    anyhow::bail!("container did not become healthy within {timeout}s");
                }
                tokio::time::sleep(Duration::from_secs(2)).await;
            }
        }
    }

    // 2. HTTP endpoint answers
    let url = format!(
        "http://localhost:{port}{path}",
        path = config.image.healthcheck.path
    );
    let response = reqwest::get(&url)
        .await
        .map_err(|e| anyhow::anyhow!("request to {url} failed: {e}"))?;
    if !response.status().is_success() {
        anyhow::bail!("{url} returned {status}", status = response.status());
    }
    println!("  http: {url} -> {status}", status = response.status());

    // 3. Non-root user
    let uid = client.container_user_id(VERIFY_CONTAINER).await?;
    if uid == "0" {
        anyhow::bail!("container runs as root (uid 0)");
    }
    println!("  user: uid {uid} (non-root)");

    Ok(())
}
