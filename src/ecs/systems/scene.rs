//! Scene setup system
//!
//! This module spawns the default scene: one pivot and one orbiter.

use bevy::prelude::*;

use crate::config::orbit::PIVOT_POSITION;
use crate::ecs::components::{OrbitPivot, Orbiter};
use crate::ecs::resources::SceneSettings;

/// Spawn the pivot and an orbiter configured from [`SceneSettings`]
pub fn setup_scene(mut commands: Commands, settings: Option<Res<SceneSettings>>) {
    info!("[Bevy] Setting up scene...");

    let settings = settings.map(|s| s.0.clone()).unwrap_or_default();

    let pivot = commands
        .spawn((
            Name::new("Pivot"),
            Transform::from_translation(Vec3::from_array(PIVOT_POSITION)),
            OrbitPivot,
        ))
        .id();

    commands.spawn((Name::new("Orbiter"), Transform::default(), Orbiter::new(pivot, &settings)));

    info!(
        "[Bevy] Scene setup complete! distance={} max_velocity={} initial_angle={}deg",
        settings.distance, settings.max_velocity, settings.initial_angle_degrees
    );
}
