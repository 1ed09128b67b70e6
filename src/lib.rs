//! Polar Orbit: player-accelerated rotation around a pivot
//!
//! An entity moves on a polar orbit around a pivot entity. Two held signals
//! (accelerate / decelerate) nudge the angular acceleration each tick; angle
//! and velocity are integrated with explicit Euler steps and the velocity can
//! be capped.
//!
//! Architecture:
//! - The motion core is a pure per-tick update with no ECS access
//! - Bevy runs in a background thread with NO window (headless run loop)
//! - Orbiters advance once per fixed tick
//! - The host feeds signals and reads snapshots through shared state
//!
//! # Module Structure
//!
//! - `config`: Configuration constants and settings
//! - `orbit`: Engine-agnostic motion core
//!   - `state`: Rotation state and the per-tick update
//!   - `polar`: Coordinate helpers
//!   - `settings`: Set-once orbit configuration
//! - `bridge`: Bridge layer between the host and Bevy
//!   - `shared_state`: Thread-safe data structures
//!   - `commands`: Host command handlers
//! - `ecs`: Bevy engine integration
//!   - `components`: ECS components
//!   - `resources`: Global resources
//!   - `plugins`: Custom plugins
//!   - `systems`: Simulation systems
//!   - `app`: Application setup

pub mod bridge;
pub mod config;
pub mod ecs;
pub mod orbit;

use bevy::log::info;
use std::{
    thread,
    time::{Duration, Instant},
};

use bridge::commands;
use bridge::{snapshot_channel, SharedOrbitInput, SharedShutdown, SharedSnapshotBuffer};
use config::{demo::*, STARTUP_WAIT_MS};
use orbit::OrbitSettings;

/// Main entry point: runs the scripted host scenario against a default orbit
pub fn run() -> Result<(), String> {
    run_with_settings(OrbitSettings::default())
}

/// Run the simulation with `settings`, holding accelerate for
/// `ACCELERATE_SECS`, then coasting for `COAST_SECS` before shutting down
pub fn run_with_settings(settings: OrbitSettings) -> Result<(), String> {
    // Create shared state
    let orbit_input = SharedOrbitInput::default();
    let buffer = SharedSnapshotBuffer::default();
    let shutdown = SharedShutdown::default();
    let (sender, receiver) = snapshot_channel();

    // Start Bevy in background thread
    let handle = ecs::start_orbit(
        settings,
        orbit_input.clone(),
        buffer.clone(),
        sender,
        shutdown.clone(),
    );

    // Wait for Bevy to initialize
    thread::sleep(Duration::from_millis(STARTUP_WAIT_MS));
    info!("[Host] Holding accelerate for {ACCELERATE_SECS}s");
    commands::send_orbit_input(&orbit_input, true, false)?;

    let start = Instant::now();
    let mut coasting = false;
    let mut streamed = 0usize;
    loop {
        thread::sleep(Duration::from_millis(POLL_INTERVAL_MS));
        streamed += commands::drain_snapshots(&receiver).len();

        let elapsed = start.elapsed().as_secs_f64();
        if !coasting && elapsed >= ACCELERATE_SECS {
            info!("[Host] Releasing accelerate, coasting for {COAST_SECS}s");
            commands::send_orbit_input(&orbit_input, false, false)?;
            coasting = true;
        }

        match commands::get_snapshots(&buffer) {
            Ok(snapshots) => {
                for s in snapshots {
                    info!(
                        "[Host] Tick {} | Velocity: {:.4} | Accelerating: {} | Streamed: {}",
                        s.tick, s.angular_velocity, s.accelerating, streamed
                    );
                }
            }
            Err(e) => info!("[Host] {e}"),
        }

        if elapsed >= ACCELERATE_SECS + COAST_SECS || handle.is_finished() {
            break;
        }
    }

    commands::request_shutdown(&shutdown);
    handle
        .join()
        .map_err(|_| "Orbit thread panicked".to_string())?;
    info!("[Host] Done, {streamed} snapshots streamed");
    Ok(())
}
