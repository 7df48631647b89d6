use super::{LOCAL_CONTAINER, VERIFY_CONTAINER};
use armada_build::context;
use armada_registry::DockerClient;
use std::path::PathBuf;

/// Best-effort cleanup of everything armada created locally.
/// Safe to run repeatedly; a second pass on a clean machine is a no-op.
pub async fn clean(images: bool) -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let (config, matrix) = super::load_project(&project_dir)?;
    let client = DockerClient::new();

    client.stop_and_remove(LOCAL_CONTAINER).await?;
    client.stop_and_remove(VERIFY_CONTAINER).await?;
    context::remove_contexts(&project_dir)?;
    println!("Removed containers and build contexts.");

    if images {
        for variant in matrix.variants() {
            client
                .remove_image(&variant.image_ref(&config.registry.repository))
                .await?;
        }
        println!(
            "Removed {count} variant images.",
            count = matrix.variants().len()
        );
    }

    Ok(())
}
