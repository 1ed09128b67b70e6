//! Bevy component definitions
//!
//! This module contains all component markers and data structures used
//! to tag and drive entities in the Bevy ECS (Entity Component System).

use bevy::prelude::*;

use crate::orbit::{AccelerationInput, InputTrigger, OrbitSettings, RotationState};

/// Marker component for entities that orbiters rotate around
#[derive(Component)]
pub struct OrbitPivot;

/// An entity moving on a polar orbit around its pivot
///
/// Entities with this component are advanced once per fixed tick by
/// [`advance_orbiters`](crate::ecs::systems::advance_orbiters).
#[derive(Component, Debug, Clone)]
pub struct Orbiter {
    /// Entity whose translation is the rotation center; never mutated here
    pub pivot: Entity,
    /// Trigger that applies positive acceleration while held
    pub accelerate: InputTrigger,
    /// Trigger that applies negative acceleration while held
    pub decelerate: InputTrigger,
    pub state: RotationState,
    /// Signals seen on the most recent tick
    pub last_input: AccelerationInput,
}

impl Orbiter {
    pub fn new(pivot: Entity, settings: &OrbitSettings) -> Self {
        Self {
            pivot,
            accelerate: settings.accelerate,
            decelerate: settings.decelerate,
            state: RotationState::from_settings(settings),
            last_input: AccelerationInput::default(),
        }
    }
}
