//! Lifecycle systems

use bevy::prelude::*;

use crate::ecs::resources::ShutdownRes;

/// Exit the app once the host has requested a shutdown
pub fn exit_on_shutdown_request(
    shutdown: Option<Res<ShutdownRes>>,
    mut exit: MessageWriter<AppExit>,
) {
    let Some(shutdown) = shutdown else { return };

    if shutdown.0.is_requested() {
        info!("[Bevy] Shutdown requested by host, exiting");
        exit.write(AppExit::Success);
    }
}
