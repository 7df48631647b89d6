//! Build-side generation for armada: per-variant Dockerfiles, docker
//! build contexts, ejected-Dockerfile handling, and the CI deploy
//! workflow. Everything renders from the same [`armada_core::BuildMatrix`]
//! so local builds and CI cannot drift apart.

pub mod context;
pub mod dockerfile;
pub mod eject;
pub mod workflow;
