use armada_build::workflow::WorkflowGenerator;
use armada_core::Schedule;
use std::path::{Path, PathBuf};

pub(super) const WORKFLOW_PATH: &str = ".github/workflows/deploy.yml";

/// Generate the deploy workflow from the build matrix.
pub async fn ci_init() -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let (config, matrix) = super::load_project(&project_dir)?;

    // ── Guard: workflow already exists ──
    let workflow_path = Path::new(WORKFLOW_PATH);
    if workflow_path.exists() {
        anyhow::bail!(
            "Workflow already exists at {WORKFLOW_PATH} — edit it directly, or delete it to re-run ci init"
        );
    }

    let schedule = Schedule::weekly();
    let generator = WorkflowGenerator::new(&matrix, &schedule, &config.registry);

    if let Some(parent) = workflow_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(workflow_path, generator.render())?;

    println!("Generated: {WORKFLOW_PATH}");
    println!(
        "Publishes {count} variants on push to main, manual dispatch, and {when}.",
        count = matrix.variants().len(),
        when = schedule.describe()
    );
    println!();
    println!(
        "Add the {user} and {pass} repository secrets before the first run.",
        user = config.registry.username_env,
        pass = config.registry.password_env
    );
    Ok(())
}
