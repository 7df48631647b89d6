//! Core types and configuration for armada.
//!
//! This crate defines the `armada.toml` schema ([`ArmadaConfig`]), the
//! build matrix ([`BuildMatrix`]) mapping published image names to
//! Dockerfiles, the CI schedule ([`Schedule`]), requirements-manifest
//! parsing, and shared error types.

pub mod config;
pub mod error;
pub mod manifest;
pub mod matrix;
pub mod schedule;

pub use config::{
    ArmadaConfig, HealthcheckConfig, ImageConfig, MatrixConfig, RegistryConfig, ReleaseConfig,
};
pub use error::{Error, Result};
pub use manifest::{Requirement, RequirementsManifest};
pub use matrix::{BaseFlavor, BuildMatrix, ImageVariant};
pub use schedule::Schedule;
