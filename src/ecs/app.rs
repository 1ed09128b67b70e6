//! Bevy application setup and execution
//!
//! This module handles the creation and configuration of the Bevy app,
//! including plugin registration and system scheduling.

use bevy::{
    app::{App, ScheduleRunnerPlugin},
    input::InputPlugin,
    log::LogPlugin,
    prelude::*,
};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::bridge::shared_state::{
    SharedOrbitInput, SharedShutdown, SharedSnapshotBuffer, SnapshotSender,
};
use crate::config::{FIXED_TICK_HZ, TARGET_FPS};
use crate::ecs::plugins::OrbitPlugin;
use crate::ecs::resources::*;
use crate::ecs::systems::setup_scene;
use crate::orbit::OrbitSettings;

/// Create and configure the Bevy application
pub fn create_app(
    settings: OrbitSettings,
    orbit_input: SharedOrbitInput,
    snapshot_buffer: SharedSnapshotBuffer,
    snapshot_sender: SnapshotSender,
    shutdown: SharedShutdown,
) -> App {
    let mut app = App::new();

    // Headless: no window, no renderer, a plain run loop at the target rate
    app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
        Duration::from_secs_f64(1.0 / TARGET_FPS),
    )));
    app.add_plugins(LogPlugin::default());
    app.add_plugins(InputPlugin);

    // Add custom plugins
    app.add_plugins(OrbitPlugin);

    // Register systems
    app.add_systems(Startup, setup_scene);

    // Insert resources
    app.insert_resource(Time::<Fixed>::from_hz(FIXED_TICK_HZ));
    app.insert_resource(SceneSettings(settings));
    app.insert_resource(OrbitInputRes(orbit_input));
    app.insert_resource(SnapshotBufferRes(snapshot_buffer));
    app.insert_resource(SnapshotSenderRes(snapshot_sender));
    app.insert_resource(ShutdownRes(shutdown));

    info!("[Bevy] App configured (headless, fixed tick at {FIXED_TICK_HZ} Hz)");
    app
}

/// Start the orbit simulation in a background thread
pub fn start_orbit(
    settings: OrbitSettings,
    orbit_input: SharedOrbitInput,
    snapshot_buffer: SharedSnapshotBuffer,
    snapshot_sender: SnapshotSender,
    shutdown: SharedShutdown,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut app = create_app(
            settings,
            orbit_input,
            snapshot_buffer,
            snapshot_sender,
            shutdown,
        );
        info!("[Bevy] Running orbit loop...");
        let exit = app.run();
        info!("[Bevy] Orbit loop stopped: {exit:?}");
    })
}
