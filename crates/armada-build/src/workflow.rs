use armada_core::{BuildMatrix, RegistryConfig, Schedule};
use std::fmt::Write;

/// Generates the CI deploy workflow from the build matrix.
///
/// One matrix job per variant, triggered by pushes to the default
/// branch, manual dispatch, and the weekly schedule. Rendering from
/// [`BuildMatrix`] keeps the workflow's matrix and the local builds in
/// lockstep.
pub struct WorkflowGenerator<'a> {
    matrix: &'a BuildMatrix,
    schedule: &'a Schedule,
    registry: &'a RegistryConfig,
}

impl<'a> WorkflowGenerator<'a> {
    pub fn new(
        matrix: &'a BuildMatrix,
        schedule: &'a Schedule,
        registry: &'a RegistryConfig,
    ) -> Self {
        Self {
            matrix,
            schedule,
            registry,
        }
    }

    pub fn render(&self) -> String {
        let mut yaml = String::new();

        let _ = writeln!(yaml, "# Generated by: armada ci init");
        let _ = writeln!(
            yaml,
            "# Publishes every image variant {}.",
            self.schedule.describe()
        );
        yaml.push_str("name: Deploy\n\n");

        yaml.push_str("on:\n  push:\n    branches: [main]\n  workflow_dispatch:\n");
        let _ = writeln!(
            yaml,
            "  schedule:\n    - cron: \"{}\"\n",
            self.schedule.expression()
        );

        yaml.push_str("jobs:\n  publish:\n    runs-on: ubuntu-latest\n");
        yaml.push_str("    strategy:\n      fail-fast: false\n      matrix:\n        include:\n");
        for variant in self.matrix.variants() {
            let _ = writeln!(yaml, "          - name: {}", variant.name);
            let _ = writeln!(
                yaml,
                "            python_version: \"{}\"",
                variant.python_version
            );
        }

        yaml.push_str("    env:\n");
        let _ = writeln!(
            yaml,
            "      {env}: ${{{{ secrets.{env} }}}}",
            env = self.registry.username_env
        );
        let _ = writeln!(
            yaml,
            "      {env}: ${{{{ secrets.{env} }}}}",
            env = self.registry.password_env
        );

        yaml.push_str(
            r#"    steps:
      - uses: actions/checkout@v4

      - name: Install Rust
        uses: dtolnay/rust-toolchain@stable

      - name: Cache armada binary
        uses: actions/cache@v4
        with:
          path: ~/.cargo/bin/armada
          key: armada-cli-${{ hashFiles('Cargo.lock') }}

      - name: Install armada
        run: |
          if ! command -v armada &> /dev/null; then
            cargo install armada-cli
          fi

      - name: Publish ${{ matrix.name }}
        run: armada publish ${{ matrix.name }}

  description:
    runs-on: ubuntu-latest
    needs: publish
"#,
        );

        yaml.push_str("    env:\n");
        let _ = writeln!(
            yaml,
            "      {env}: ${{{{ secrets.{env} }}}}",
            env = self.registry.username_env
        );
        let _ = writeln!(
            yaml,
            "      {env}: ${{{{ secrets.{env} }}}}",
            env = self.registry.password_env
        );

        yaml.push_str(
            r#"    steps:
      - uses: actions/checkout@v4

      - name: Install armada
        run: cargo install armada-cli

      - name: Refresh registry description
        run: armada describe
"#,
        );

        yaml
    }
}
