use armada_build::dockerfile::DockerfileGenerator;
use armada_build::eject as eject_mod;
use std::path::PathBuf;

/// Materialize every variant's Dockerfile into the images directory.
pub async fn eject() -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let (config, matrix) = super::load_project(&project_dir)?;

    let rendered: Vec<(String, String)> = matrix
        .dockerfile_names()
        .into_iter()
        .map(|file| {
            let stem = file.trim_end_matches(".dockerfile").to_owned();
            let variant = matrix.resolve(&stem)?;
            let content = DockerfileGenerator::new(&config.image, variant).render();
            Ok((file, content))
        })
        .collect::<anyhow::Result<_>>()?;

    eject_mod::eject(&project_dir, &config.release.images_dir, &rendered)?;

    println!(
        "Ejected {count} Dockerfiles to {dir}/",
        count = rendered.len(),
        dir = config.release.images_dir
    );
    println!("You can now edit them directly. armada build will use these files.");
    Ok(())
}
