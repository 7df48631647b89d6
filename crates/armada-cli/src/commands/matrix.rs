use std::path::PathBuf;

/// Print the build matrix: published name, Python version, Dockerfile.
pub async fn matrix() -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let (config, matrix) = super::load_project(&project_dir)?;

    println!("Repository: {}", config.registry.repository);
    println!();
    println!("{:<22}{:<10}{}", "NAME", "PYTHON", "DOCKERFILE");
    for variant in matrix.variants() {
        println!(
            "{:<22}{:<10}{}",
            variant.name,
            variant.python_version,
            variant.dockerfile_name()
        );
    }

    Ok(())
}
