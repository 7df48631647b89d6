//! Registry-side operations for armada: a mockable docker CLI executor,
//! the docker operations client (build, push, run, health, backup), and
//! the Docker Hub API client used to refresh the repository description.

pub mod client;
pub mod docker;
pub mod executor;
pub mod hub;

pub use client::{
    BuildError, CheckResult, DockerClient, DoctorReport, HealthState, LifecycleError,
    PreflightError, PreflightReport, PublishError,
};
pub use docker::DockerError;
pub use executor::{DockerExecutor, RealExecutor};
pub use hub::{HubClient, HubError};
