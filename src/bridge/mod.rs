//! Bridge layer between the host and Bevy
//!
//! This module handles all communication between the host thread and the
//! Bevy simulation thread, including command handlers and shared state.

pub mod commands;
pub mod shared_state;

// Re-export commonly used types
pub use shared_state::{
    snapshot_channel, OrbitInput, OrbitSnapshot, SharedOrbitInput, SharedShutdown,
    SharedSnapshotBuffer, SnapshotReceiver, SnapshotSender,
};
