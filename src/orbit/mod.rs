//! Orbit motion core
//!
//! Engine-agnostic polar-coordinate motion: the per-tick rotation state
//! update, coordinate helpers and the set-once orbit settings. Nothing in
//! here touches the ECS; the `ecs` module drives it once per fixed tick.

pub mod polar;
pub mod settings;
pub mod state;

pub use polar::{polar_to_cartesian, spin_about_vertical};
pub use settings::{InputTrigger, MotionModel, OrbitSettings};
pub use state::{AccelerationInput, MotionOutput, RotationState};
