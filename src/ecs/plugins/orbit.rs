//! Plugin that drives orbiters

use bevy::prelude::*;

use crate::ecs::resources::{OrbitTicks, SnapshotTimings};
use crate::ecs::systems::{
    advance_orbiters, exit_on_shutdown_request, place_new_orbiters, publish_orbit_snapshots,
    stream_orbit_snapshots,
};

/// Registers the orbit resources and systems
///
/// Orbiters advance in `FixedUpdate`, so the tick rate follows `Time<Fixed>`.
/// Every tick is streamed from `FixedPostUpdate`; the latest-state buffer is
/// refreshed in `Last`.
/// Host bridge resources are optional; without them the plugin only reads
/// local `ButtonInput`.
pub struct OrbitPlugin;

impl Plugin for OrbitPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitTicks>()
            .init_resource::<SnapshotTimings>()
            .add_systems(PreUpdate, place_new_orbiters)
            .add_systems(FixedUpdate, advance_orbiters)
            .add_systems(FixedPostUpdate, stream_orbit_snapshots)
            .add_systems(Update, exit_on_shutdown_request)
            .add_systems(Last, publish_orbit_snapshots);
    }
}
