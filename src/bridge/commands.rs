//! Host command handlers
//!
//! This module contains the functions the host thread calls to drive the
//! simulation and read its state back.

use super::shared_state::{
    OrbitInput, OrbitSnapshot, SharedOrbitInput, SharedShutdown, SharedSnapshotBuffer,
    SnapshotReceiver,
};

/// Set the held state of the acceleration signals
/// The state persists until the next call
pub fn send_orbit_input(
    state: &SharedOrbitInput,
    accelerate: bool,
    decelerate: bool,
) -> Result<(), String> {
    let mut guard = state.0.lock().map_err(|e| e.to_string())?;
    guard.accelerate = accelerate;
    guard.decelerate = decelerate;
    Ok(())
}

/// Get the signals currently held by the host
pub fn get_orbit_input(state: &SharedOrbitInput) -> Result<OrbitInput, String> {
    let guard = state.0.lock().map_err(|e| e.to_string())?;
    Ok(*guard)
}

/// Get the latest snapshot of every orbiter
pub fn get_snapshots(buffer: &SharedSnapshotBuffer) -> Result<Vec<OrbitSnapshot>, String> {
    let guard = buffer.0.lock().map_err(|e| e.to_string())?;
    if guard.is_empty() {
        return Err("No snapshot yet (simulation still starting)".into());
    }
    Ok(guard.clone())
}

/// Latest snapshots as JSON
pub fn get_snapshots_json(buffer: &SharedSnapshotBuffer) -> Result<Vec<u8>, String> {
    let snapshots = get_snapshots(buffer)?;
    serde_json::to_vec(&snapshots).map_err(|e| e.to_string())
}

/// Take every snapshot streamed since the last call, oldest first
pub fn drain_snapshots(receiver: &SnapshotReceiver) -> Vec<OrbitSnapshot> {
    receiver.0.try_iter().collect()
}

/// Ask the simulation to exit after its current frame
pub fn request_shutdown(shutdown: &SharedShutdown) {
    shutdown.request();
}
