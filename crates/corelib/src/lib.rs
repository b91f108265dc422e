//! Core types: math re-exports, errors, orbit camera, input, clock, scene.

use thiserror::Error;

pub use glam::{Mat4, Quat, Vec3, vec3};

pub mod camera;
pub mod clock;
pub mod input;
pub mod scene;
pub mod transform;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid scene: {0}")]
    InvalidScene(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
