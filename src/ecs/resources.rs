//! Bevy resource definitions
//!
//! This module contains all global resources used by Bevy systems.
//! Resources are singleton data that can be accessed by any system.

use bevy::prelude::*;

use crate::bridge::shared_state::{
    SharedOrbitInput, SharedShutdown, SharedSnapshotBuffer, SnapshotSender,
};
use crate::orbit::OrbitSettings;

// =============================================================================
// Scene
// =============================================================================

/// Settings used by the default scene to spawn its orbiter
#[derive(Resource, Clone, Default)]
pub struct SceneSettings(pub OrbitSettings);

// =============================================================================
// Host Bridge
// =============================================================================

/// Resource to hold the host-held acceleration signals in Bevy
#[derive(Resource)]
pub struct OrbitInputRes(pub SharedOrbitInput);

/// Latest snapshots shared with the host
#[derive(Resource, Clone)]
pub struct SnapshotBufferRes(pub SharedSnapshotBuffer);

/// Streams the snapshot of every fixed tick to the host
#[derive(Resource, Deref)]
pub struct SnapshotSenderRes(pub SnapshotSender);

/// Shutdown flag raised by the host
#[derive(Resource)]
pub struct ShutdownRes(pub SharedShutdown);

// =============================================================================
// Tick Management
// =============================================================================

/// Number of fixed ticks the orbiters have been advanced
#[derive(Resource, Default)]
pub struct OrbitTicks(pub u64);

/// Snapshot publishing bookkeeping
#[derive(Resource, Default)]
pub struct SnapshotTimings {
    pub last_print_time: f64,
    pub last_published_tick: u64,
    /// Snapshots dropped because the host stopped draining the stream
    pub dropped: u64,
}
