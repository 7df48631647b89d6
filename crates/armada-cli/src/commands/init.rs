use std::path::Path;

/// Initialize an armada project: config, demo application, pinned
/// requirements, and a credentials template.
pub async fn init_project() -> anyhow::Result<()> {
    let mut created = Vec::new();

    // armada.toml
    let config_path = Path::new("armada.toml");
    if config_path.exists() {
        eprintln!("armada.toml already exists, skipping");
    } else {
        let config = r#"[registry]
# repository = "khulnasoft/uvicorn-gunicorn-readyapi"
# username_env = "DOCKER_USERNAME"
# password_env = "DOCKER_PASSWORD"

[matrix]
# python_versions = ["3.11", "3.10", "3.9", "3.8", "3.7"]
# flavors = ["full", "slim", "alpine"]
# latest = "python3.11"

[image]
# port = 80
# workers = 2
# log_level = "info"
# user = "appuser"
"#;
        std::fs::write(config_path, config)?;
        created.push("armada.toml");
    }

    // Demo ASGI application
    let app_main = Path::new("app/main.py");
    if app_main.exists() {
        eprintln!("app/main.py already exists, skipping");
    } else {
        std::fs::create_dir_all("app")?;
        let main_py = r#"import sys

from readyapi import ReadyAPI

version = f"{sys.version_info.major}.{sys.version_info.minor}"

app = ReadyAPI(title="armada-base")


@app.get("/")
async def read_root():
    return {"message": f"Hello from Python {version}", "status": "ok"}


@app.get("/health")
async def health():
    return {"status": "healthy"}
"#;
        std::fs::write(app_main, main_py)?;
        created.push("app/main.py");
    }

    // Pinned requirements
    let requirements_path = Path::new("requirements.txt");
    if requirements_path.exists() {
        eprintln!("requirements.txt already exists, skipping");
    } else {
        let requirements = r#"readyapi==0.109.0
uvicorn[standard]==0.27.0
gunicorn==21.2.0
"#;
        std::fs::write(requirements_path, requirements)?;
        created.push("requirements.txt");
    }

    // .env.example
    let env_example_path = Path::new(".env.example");
    if env_example_path.exists() {
        eprintln!(".env.example already exists, skipping");
    } else {
        let env_example = r#"DOCKER_USERNAME=your-registry-username
DOCKER_PASSWORD=your-registry-token
"#;
        std::fs::write(env_example_path, env_example)?;
        created.push(".env.example");
    }

    if created.is_empty() {
        println!("Nothing to create — already initialized.");
    } else {
        for f in &created {
            println!("Created {f}");
        }
    }

    println!();
    println!("Next steps:");
    println!();
    println!("  1. Configure registry credentials:");
    println!("     cp .env.example .env");
    println!();
    println!("  2. Build and check an image:");
    println!("     armada build latest");
    println!("     armada verify latest");
    println!();
    println!("  3. Set up CI and publish everything:");
    println!("     armada ci init");
    println!("     armada publish --all");

    Ok(())
}
