//! Bevy systems
//!
//! This module contains all the systems that operate on orbit entities
//! and resources in the Bevy ECS.

pub mod lifecycle;
pub mod motion;
pub mod scene;
pub mod telemetry;

pub use lifecycle::exit_on_shutdown_request;
pub use motion::{advance_orbiters, place_new_orbiters};
pub use scene::setup_scene;
pub use telemetry::{publish_orbit_snapshots, stream_orbit_snapshots};
