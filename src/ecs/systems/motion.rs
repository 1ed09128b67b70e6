//! Orbit motion systems
//!
//! This module places new orbiters on their initial polar position and
//! advances every orbiter once per fixed tick.

use bevy::{log::warn_once, prelude::*};

use crate::ecs::components::Orbiter;
use crate::ecs::resources::{OrbitInputRes, OrbitTicks};
use crate::orbit::AccelerationInput;

/// Put newly added orbiters at the position given by their initial angle
pub fn place_new_orbiters(mut query: Query<(&Orbiter, &mut Transform), Added<Orbiter>>) {
    for (orbiter, mut transform) in query.iter_mut() {
        transform.translation = orbiter.state.position();
        debug!("[Bevy] Orbiter placed at {}", transform.translation);
    }
}

/// Signals for one orbiter: its own triggers or the host bridge
fn held_input(
    orbiter: &Orbiter,
    mouse: Option<&ButtonInput<MouseButton>>,
    keys: Option<&ButtonInput<KeyCode>>,
    host: AccelerationInput,
) -> AccelerationInput {
    let local = AccelerationInput::new(
        orbiter.accelerate.is_held(mouse, keys),
        orbiter.decelerate.is_held(mouse, keys),
    );
    local.merge(host)
}

/// Advance every orbiter by one tick and write the result to its transform
pub fn advance_orbiters(
    mouse: Option<Res<ButtonInput<MouseButton>>>,
    keys: Option<Res<ButtonInput<KeyCode>>>,
    host_input: Option<Res<OrbitInputRes>>,
    mut ticks: ResMut<OrbitTicks>,
    pivots: Query<&Transform, Without<Orbiter>>,
    mut orbiters: Query<(&mut Orbiter, &mut Transform)>,
) {
    // Read host signals once per tick
    let host = match host_input.as_deref() {
        Some(res) => match res.0 .0.lock() {
            Ok(guard) => AccelerationInput::from(*guard),
            Err(_) => AccelerationInput::default(),
        },
        None => AccelerationInput::default(),
    };

    for (mut orbiter, mut transform) in orbiters.iter_mut() {
        let input = held_input(&orbiter, mouse.as_deref(), keys.as_deref(), host);

        let pivot = match pivots.get(orbiter.pivot) {
            Ok(pivot_transform) => pivot_transform.translation,
            Err(_) => {
                warn_once!("[Bevy] Orbiter pivot entity is missing, rotating around the origin");
                Vec3::ZERO
            }
        };

        let output = orbiter.state.update(input);
        orbiter.last_input = input;
        output.apply(&mut transform, pivot);
    }

    ticks.0 += 1;
}
