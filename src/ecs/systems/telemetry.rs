//! Snapshot publishing systems
//!
//! This module copies the orbit state out of the ECS so the host can read it
//! without touching the Bevy world: every fixed tick is streamed, and the
//! latest state is written to the shared buffer once per frame.

use bevy::{prelude::*, time::Time};
use crossbeam_channel::TrySendError;

use crate::bridge::shared_state::OrbitSnapshot;
use crate::config::telemetry::STATS_PRINT_INTERVAL;
use crate::ecs::components::Orbiter;
use crate::ecs::resources::{OrbitTicks, SnapshotBufferRes, SnapshotSenderRes, SnapshotTimings};

/// Build the snapshot of one orbiter
pub fn snapshot_of(
    entity: Entity,
    orbiter: &Orbiter,
    transform: &Transform,
    tick: u64,
) -> OrbitSnapshot {
    OrbitSnapshot {
        tick,
        entity: entity.to_bits(),
        angle: orbiter.state.angle,
        angular_velocity: orbiter.state.angular_velocity,
        accelerating: orbiter.last_input.accelerate,
        decelerating: orbiter.last_input.decelerate,
        position: transform.translation.to_array(),
        rotation: transform.rotation.to_array(),
    }
}

/// Stream snapshots of all orbiters; runs after every fixed tick
pub fn stream_orbit_snapshots(
    query: Query<(Entity, &Orbiter, &Transform)>,
    sender: Option<Res<SnapshotSenderRes>>,
    ticks: Res<OrbitTicks>,
    mut timings: ResMut<SnapshotTimings>,
) {
    let Some(sender) = sender else { return };

    for (entity, orbiter, transform) in query.iter() {
        match sender.0 .0.try_send(snapshot_of(entity, orbiter, transform, ticks.0)) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => timings.dropped += 1,
            // Host is gone, nothing left to stream to
            Err(TrySendError::Disconnected(_)) => break,
        }
    }
}

/// Publish the latest snapshots of all orbiters once per frame with a new tick
pub fn publish_orbit_snapshots(
    query: Query<(Entity, &Orbiter, &Transform)>,
    buffer: Option<Res<SnapshotBufferRes>>,
    ticks: Res<OrbitTicks>,
    mut timings: ResMut<SnapshotTimings>,
    time: Option<Res<Time>>,
) {
    // Fixed ticks may not run every frame
    if ticks.0 == timings.last_published_tick {
        return;
    }
    timings.last_published_tick = ticks.0;

    let snapshots: Vec<OrbitSnapshot> = query
        .iter()
        .map(|(entity, orbiter, transform)| snapshot_of(entity, orbiter, transform, ticks.0))
        .collect();

    // Print stats periodically
    if let Some(time) = &time {
        let current_time = time.elapsed_secs_f64();
        if current_time - timings.last_print_time >= STATS_PRINT_INTERVAL {
            for snapshot in &snapshots {
                let [x, y, z] = snapshot.position;
                info!(
                    "[Bevy] Tick {} | Angle {:.3} | Velocity {:.4} | Pos ({x:.2}, {y:.2}, {z:.2})",
                    snapshot.tick, snapshot.angle, snapshot.angular_velocity
                );
            }
            if timings.dropped > 0 {
                info!("[Bevy] Snapshots dropped so far: {}", timings.dropped);
            }
            timings.last_print_time = current_time;
        }
    }

    if let Some(b) = buffer {
        if let Ok(mut guard) = b.0 .0.lock() {
            *guard = snapshots;
        }
    }
}
