//! Configuration constants and settings for the orbit simulation
//!
//! This module contains all configurable parameters such as loop rates,
//! default orbit parameters, telemetry and demo timings.

/// Target frames per second for the Bevy run loop
pub const TARGET_FPS: f64 = 60.0;

/// Rate of the fixed simulation tick; one orbit update per tick
pub const FIXED_TICK_HZ: f64 = 60.0;

/// Time the host waits for the Bevy thread to come up (milliseconds)
pub const STARTUP_WAIT_MS: u64 = 500;

/// Default orbit parameters
pub mod orbit {
    /// Distance from the pivot, polar coordinate "r"
    pub const DISTANCE: f32 = 5.0;

    /// Angular velocity cap; zero or negative disables the cap
    pub const MAX_VELOCITY: f32 = 0.05;

    /// Initial angle in degrees, polar coordinate "theta"
    pub const INITIAL_ANGLE_DEGREES: f32 = 0.0;

    /// Change of angular acceleration per tick while a trigger is held
    pub const ACCELERATION_INCREMENT: f32 = 0.0001;

    /// World position of the pivot spawned by the default scene
    pub const PIVOT_POSITION: [f32; 3] = [0.0, 0.0, 0.0];
}

/// Telemetry settings
pub mod telemetry {
    /// Interval for printing orbit stats (seconds)
    pub const STATS_PRINT_INTERVAL: f64 = 2.0;

    /// Snapshots buffered for the host before new ones are dropped
    pub const SNAPSHOT_CHANNEL_CAPACITY: usize = 256;
}

/// Scripted host scenario run by [`crate::run`]
pub mod demo {
    /// How long the host holds the accelerate signal (seconds)
    pub const ACCELERATE_SECS: f64 = 20.0;

    /// How long the host coasts with both signals released (seconds)
    pub const COAST_SECS: f64 = 5.0;

    /// How often the host polls and logs the latest snapshot (milliseconds)
    pub const POLL_INTERVAL_MS: u64 = 1000;
}
