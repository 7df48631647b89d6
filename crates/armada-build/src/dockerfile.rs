use armada_core::{ImageConfig, ImageVariant};

/// Generates the Dockerfile for one image variant.
pub struct DockerfileGenerator<'a> {
    image: &'a ImageConfig,
    variant: &'a ImageVariant,
}

impl<'a> DockerfileGenerator<'a> {
    pub fn new(image: &'a ImageConfig, variant: &'a ImageVariant) -> Self {
        Self { image, variant }
    }

    pub fn render(&self) -> String {
        let health = &self.image.healthcheck;

        // curl backs the health probe; alpine bases ship apk, the rest apt.
        let probe_packages = if self.variant.flavor.is_alpine() {
            "RUN apk add --no-cache curl".to_owned()
        } else {
            "RUN apt-get update \\\n    && apt-get install -y --no-install-recommends curl \\\n    && rm -rf /var/lib/apt/lists/*".to_owned()
        };

        let create_user = if self.variant.flavor.is_alpine() {
            format!(
                "RUN adduser -D -u {uid} {user}",
                uid = self.image.uid,
                user = self.image.user,
            )
        } else {
            format!(
                "RUN useradd --uid {uid} --create-home {user}",
                uid = self.image.uid,
                user = self.image.user,
            )
        };

        format!(
            r#"# === Base: {base} ===
FROM {base}

LABEL org.opencontainers.image.title="{name}" \
      org.opencontainers.image.description="Python {version} ASGI base image (uvicorn + gunicorn)" \
      org.opencontainers.image.base.name="docker.io/library/{base}"

{probe_packages}

{create_user}

# === Dependencies ===
COPY {requirements} /tmp/requirements.txt
RUN pip install --no-cache-dir -r /tmp/requirements.txt \
    && rm /tmp/requirements.txt

# === Application ===
COPY --chown={user} {app_dir}/ /app/
WORKDIR /app

ENV PORT={port} \
    WORKERS={workers} \
    LOG_LEVEL={log_level}
EXPOSE {port}

HEALTHCHECK --interval={interval}s --timeout={timeout}s --start-period={start_period}s --retries={retries} \
    CMD curl --fail http://localhost:{port}{health_path} || exit 1

USER {user}

CMD ["sh", "-c", "gunicorn main:app --workers ${{WORKERS}} --worker-class uvicorn.workers.UvicornWorker --bind 0.0.0.0:${{PORT}} --log-level ${{LOG_LEVEL}}"]
"#,
            base = self.variant.base_image(),
            name = self.variant.name,
            version = self.variant.python_version,
            probe_packages = probe_packages,
            create_user = create_user,
            requirements = self.image.requirements,
            app_dir = self.image.app_dir.trim_end_matches('/'),
            user = self.image.user,
            port = self.image.port,
            workers = self.image.workers,
            log_level = self.image.log_level,
            interval = health.interval_secs,
            timeout = health.timeout_secs,
            start_period = health.start_period_secs,
            retries = health.retries,
            health_path = health.path,
        )
    }
}
