//! Set-once orbit configuration

use bevy::input::{keyboard::KeyCode, mouse::MouseButton, ButtonInput};
use serde::{Deserialize, Serialize};

use crate::config::orbit::*;

/// A button that produces one of the acceleration signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputTrigger {
    Mouse(MouseButton),
    Key(KeyCode),
}

impl InputTrigger {
    /// Whether the trigger is held; a missing input source counts as released
    pub fn is_held(
        &self,
        mouse: Option<&ButtonInput<MouseButton>>,
        keys: Option<&ButtonInput<KeyCode>>,
    ) -> bool {
        match *self {
            InputTrigger::Mouse(button) => mouse.is_some_and(|m| m.pressed(button)),
            InputTrigger::Key(key) => keys.is_some_and(|k| k.pressed(key)),
        }
    }
}

/// How the tick output moves the orbiter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionModel {
    /// Recompute the polar position, then spin around the pivot about the
    /// vertical axis by the angular velocity in degrees
    #[default]
    PolarWithPivotSpin,
    /// Recompute the polar position only
    PolarOnly,
}

/// Orbit configuration; every field falls back to `config::orbit` when absent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitSettings {
    pub distance: f32,
    /// Zero or negative disables the cap
    pub max_velocity: f32,
    pub initial_angle_degrees: f32,
    pub acceleration_increment: f32,
    pub accelerate: InputTrigger,
    pub decelerate: InputTrigger,
    pub model: MotionModel,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            distance: DISTANCE,
            max_velocity: MAX_VELOCITY,
            initial_angle_degrees: INITIAL_ANGLE_DEGREES,
            acceleration_increment: ACCELERATION_INCREMENT,
            accelerate: InputTrigger::Mouse(MouseButton::Left),
            decelerate: InputTrigger::Mouse(MouseButton::Right),
            model: MotionModel::default(),
        }
    }
}

impl OrbitSettings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid orbit settings: {e}"))
    }
}
