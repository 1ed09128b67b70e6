//! Shared state structures for communication between the host and Bevy
//!
//! This module defines thread-safe data structures that allow bidirectional
//! communication between the host thread and the Bevy simulation thread.

use crossbeam_channel::{Receiver, Sender};
use serde::{Deserialize, Serialize};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

use crate::config::telemetry::SNAPSHOT_CHANNEL_CAPACITY;
use crate::orbit::AccelerationInput;

// =============================================================================
// Orbit Input
// =============================================================================

/// Acceleration signals held by the host
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrbitInput {
    /// Accelerate signal is held
    pub accelerate: bool,
    /// Decelerate signal is held
    pub decelerate: bool,
}

impl From<OrbitInput> for AccelerationInput {
    fn from(input: OrbitInput) -> Self {
        AccelerationInput::new(input.accelerate, input.decelerate)
    }
}

/// Thread-safe orbit input shared between the host and Bevy
/// Holds the current button state, not accumulated deltas
#[derive(Clone, Default)]
pub struct SharedOrbitInput(pub Arc<Mutex<OrbitInput>>);

// =============================================================================
// Snapshots
// =============================================================================

/// Motion state of one orbiter after a tick
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct OrbitSnapshot {
    /// Fixed tick the snapshot was taken after
    pub tick: u64,
    /// `Entity::to_bits` of the orbiter
    pub entity: u64,
    /// Polar angle (radians)
    pub angle: f32,
    pub angular_velocity: f32,
    pub accelerating: bool,
    pub decelerating: bool,
    /// World translation
    pub position: [f32; 3],
    /// World rotation as a quaternion (x, y, z, w)
    pub rotation: [f32; 4],
}

/// Latest snapshots of every orbiter, overwritten after each tick
#[derive(Clone, Default)]
pub struct SharedSnapshotBuffer(pub Arc<Mutex<Vec<OrbitSnapshot>>>);

/// Sending half of the snapshot stream, owned by the Bevy world
#[derive(Clone)]
pub struct SnapshotSender(pub Sender<OrbitSnapshot>);

/// Receiving half of the snapshot stream, owned by the host
#[derive(Clone)]
pub struct SnapshotReceiver(pub Receiver<OrbitSnapshot>);

/// Create the bounded snapshot stream
pub fn snapshot_channel() -> (SnapshotSender, SnapshotReceiver) {
    let (tx, rx) = crossbeam_channel::bounded(SNAPSHOT_CHANNEL_CAPACITY);
    (SnapshotSender(tx), SnapshotReceiver(rx))
}

// =============================================================================
// Shutdown
// =============================================================================

/// Raised by the host to stop the simulation loop
#[derive(Clone, Default)]
pub struct SharedShutdown(pub Arc<AtomicBool>);

impl SharedShutdown {
    pub fn request(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}
