use armada_registry::DockerClient;
use std::path::PathBuf;

/// Security-scan a built variant with trivy.
pub async fn scan(name: &str) -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let (config, matrix) = super::load_project(&project_dir)?;
    let variant = matrix.resolve(name)?;
    let tag = variant.image_ref(&config.registry.repository);
    let client = DockerClient::new();

    if !client.image_exists(&tag).await {
        anyhow::bail!("{tag} is not built — run: armada build {name}");
    }

    println!("Scanning {tag}...");

    let status = tokio::process::Command::new("trivy")
        .args(["image", "--severity", "HIGH,CRITICAL", "--exit-code", "1", &tag])
        .status()
        .await
        .map_err(|_| anyhow::anyhow!("trivy not found. Install: https://trivy.dev"))?;

    if !status.success() {
        anyhow::bail!("vulnerabilities found in {tag}");
    }

    println!("No HIGH or CRITICAL vulnerabilities in {tag}.");
    Ok(())
}
