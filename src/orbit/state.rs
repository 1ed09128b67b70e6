//! Rotation state and the per-tick update
//!
//! One [`RotationState`] is advanced exactly once per simulation tick:
//! input adjusts the angular acceleration, Euler integration moves angle and
//! velocity, the velocity is capped, and the resulting pose is returned as a
//! [`MotionOutput`] for the caller to apply to its transform.

use bevy::math::{Quat, Vec3};
use bevy::transform::components::Transform;
use serde::{Deserialize, Serialize};

use super::polar::{polar_to_cartesian, spin_about_vertical};
use super::settings::{MotionModel, OrbitSettings};

/// The two acceleration signals for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccelerationInput {
    /// Accelerate signal is held
    pub accelerate: bool,
    /// Decelerate signal is held
    pub decelerate: bool,
}

impl AccelerationInput {
    pub fn new(accelerate: bool, decelerate: bool) -> Self {
        Self {
            accelerate,
            decelerate,
        }
    }

    /// +1 for accelerate only, -1 for decelerate only, 0 for both or neither
    pub fn direction(self) -> f32 {
        match (self.accelerate, self.decelerate) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    /// Combine two input sources; a signal is held if either source holds it
    pub fn merge(self, other: Self) -> Self {
        Self {
            accelerate: self.accelerate || other.accelerate,
            decelerate: self.decelerate || other.decelerate,
        }
    }
}

/// Result of one tick: where the orbiter is and how it turns around the pivot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionOutput {
    /// Position recomputed from (distance, angle)
    pub position: Vec3,
    /// Incremental rotation applied around the pivot after the position
    pub rotation_delta: Quat,
}

impl MotionOutput {
    /// Assign the position, then rotate the transform around `pivot`
    pub fn apply(&self, transform: &mut Transform, pivot: Vec3) {
        transform.translation = self.position;
        transform.rotate_around(pivot, self.rotation_delta);
    }
}

/// Angular motion state of a single orbiter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    /// Polar angle in radians
    pub angle: f32,
    /// Added to the angle each tick; also the pivot spin in degrees
    pub angular_velocity: f32,
    /// Impulse for the current tick, zeroed at the end of every update
    pub angular_acceleration: f32,
    /// Polar radius
    pub distance: f32,
    /// Velocity cap, disabled when zero or negative
    pub max_velocity: f32,
    /// Acceleration change per tick while a signal is held
    pub acceleration_increment: f32,
    pub model: MotionModel,
}

impl RotationState {
    /// Create a state at rest; `initial_angle_degrees` is converted to radians here
    pub fn new(
        distance: f32,
        initial_angle_degrees: f32,
        max_velocity: f32,
        acceleration_increment: f32,
    ) -> Self {
        Self {
            angle: initial_angle_degrees.to_radians(),
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
            distance,
            max_velocity,
            acceleration_increment,
            model: MotionModel::default(),
        }
    }

    pub fn from_settings(settings: &OrbitSettings) -> Self {
        Self {
            model: settings.model,
            ..Self::new(
                settings.distance,
                settings.initial_angle_degrees,
                settings.max_velocity,
                settings.acceleration_increment,
            )
        }
    }

    pub fn with_model(mut self, model: MotionModel) -> Self {
        self.model = model;
        self
    }

    /// The velocity cap, if one is configured
    pub fn velocity_cap(&self) -> Option<f32> {
        (self.max_velocity > 0.0).then_some(self.max_velocity)
    }

    /// Current Cartesian position relative to the origin of the polar frame
    pub fn position(&self) -> Vec3 {
        polar_to_cartesian(self.distance, self.angle)
    }

    /// Adjust the acceleration by one increment in the held direction
    pub fn apply_input(&mut self, input: AccelerationInput) {
        self.angular_acceleration += input.direction() * self.acceleration_increment;
    }

    /// Explicit Euler step: angle moves by the old velocity, then velocity by
    /// the acceleration
    pub fn integrate(&mut self) {
        self.angle += self.angular_velocity;
        self.angular_velocity += self.angular_acceleration;
    }

    pub fn clamp_velocity(&mut self) {
        if let Some(cap) = self.velocity_cap() {
            self.angular_velocity = self.angular_velocity.clamp(0.0, cap);
        }
    }

    /// Advance one tick
    pub fn update(&mut self, input: AccelerationInput) -> MotionOutput {
        self.apply_input(input);
        self.integrate();
        self.clamp_velocity();

        let rotation_delta = match self.model {
            MotionModel::PolarWithPivotSpin => spin_about_vertical(self.angular_velocity),
            MotionModel::PolarOnly => Quat::IDENTITY,
        };
        let output = MotionOutput {
            position: self.position(),
            rotation_delta,
        };

        self.angular_acceleration = 0.0;
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDLE: AccelerationInput = AccelerationInput {
        accelerate: false,
        decelerate: false,
    };
    const ACCELERATE: AccelerationInput = AccelerationInput {
        accelerate: true,
        decelerate: false,
    };
    const DECELERATE: AccelerationInput = AccelerationInput {
        accelerate: false,
        decelerate: true,
    };

    fn uncapped() -> RotationState {
        RotationState::new(10.0, 0.0, 0.0, 0.0001)
    }

    #[test]
    fn initial_angle_is_converted_to_radians() {
        let state = RotationState::new(10.0, 90.0, 0.0, 0.0001);
        assert!((state.angle - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        let p = state.position();
        assert!(p.x.abs() < 1e-4);
        assert!((p.y - 10.0).abs() < 1e-4);
    }

    #[test]
    fn idle_input_leaves_acceleration_and_zeroes_it_after_tick() {
        let mut state = uncapped();
        state.angular_acceleration = 0.25;
        state.apply_input(IDLE);
        assert_eq!(state.angular_acceleration, 0.25);

        state.update(IDLE);
        assert_eq!(state.angular_acceleration, 0.0);
    }

    #[test]
    fn both_signals_cancel() {
        let mut state = uncapped();
        state.update(AccelerationInput::new(true, true));
        assert_eq!(state.angular_velocity, 0.0);
        assert_eq!(state.angle, 0.0);
    }

    #[test]
    fn holding_accelerate_grows_velocity_linearly() {
        let mut state = uncapped();
        let n = 200;
        for _ in 0..n {
            state.update(ACCELERATE);
        }
        let expected = n as f32 * state.acceleration_increment;
        assert!((state.angular_velocity - expected).abs() < 1e-5);
    }

    #[test]
    fn angle_uses_velocity_from_before_the_step() {
        let mut state = uncapped();
        state.update(ACCELERATE);
        assert_eq!(state.angle, 0.0);
        assert!((state.angular_velocity - 0.0001).abs() < 1e-9);

        state.update(IDLE);
        assert!((state.angle - 0.0001).abs() < 1e-9);
    }

    #[test]
    fn idle_ticks_move_at_constant_velocity() {
        let mut state = uncapped();
        state.angular_velocity = 0.01;
        for _ in 0..50 {
            let before = state.angle;
            state.update(IDLE);
            assert!((state.angle - before - 0.01).abs() < 1e-6);
            assert_eq!(state.angular_velocity, 0.01);
        }
    }

    #[test]
    fn capped_velocity_stays_in_range() {
        let mut state = RotationState::new(5.0, 0.0, 0.003, 0.0001);
        let pattern = [ACCELERATE, ACCELERATE, IDLE, DECELERATE, ACCELERATE];
        for tick in 0..2000 {
            // Long stretches of each signal, so both bounds get hit
            let input = pattern[(tick / 150) % pattern.len()];
            state.update(input);
            assert!(state.angular_velocity >= 0.0);
            assert!(state.angular_velocity <= 0.003);
        }
    }

    #[test]
    fn uncapped_velocity_can_go_negative() {
        let mut state = uncapped();
        for _ in 0..10 {
            state.update(DECELERATE);
        }
        assert!(state.angular_velocity < 0.0);
        assert_eq!(state.velocity_cap(), None);
    }

    #[test]
    fn negative_cap_means_uncapped() {
        let mut state = RotationState::new(10.0, 0.0, -1.0, 0.0001);
        assert_eq!(state.velocity_cap(), None);
        for _ in 0..10 {
            state.update(DECELERATE);
        }
        assert!((state.angular_velocity + 10.0 * 0.0001).abs() < 1e-6);
    }

    #[test]
    fn accelerating_saturates_at_cap_on_a_circle() {
        let mut state = RotationState::new(5.0, 0.0, 0.05, 0.0001);
        for _ in 0..1000 {
            let output = state.update(ACCELERATE);
            assert!((output.position.length() - 5.0).abs() < 1e-3);
        }
        assert!((state.angular_velocity - 0.05).abs() < 1e-6);
    }

    #[test]
    fn pivot_spin_follows_velocity_in_degrees() {
        let mut state = uncapped();
        state.angular_velocity = 45.0;
        let output = state.update(IDLE);
        let expected = spin_about_vertical(45.0);
        assert!(output.rotation_delta.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn polar_only_model_has_no_spin() {
        let mut state = uncapped().with_model(MotionModel::PolarOnly);
        state.angular_velocity = 10.0;
        let output = state.update(IDLE);
        assert_eq!(output.rotation_delta, Quat::IDENTITY);
    }

    #[test]
    fn apply_rotates_recomputed_position_around_pivot() {
        let output = MotionOutput {
            position: Vec3::new(5.0, 0.0, 0.0),
            rotation_delta: spin_about_vertical(90.0),
        };
        let pivot = Vec3::new(1.0, 0.0, 0.0);
        let mut transform = Transform::from_xyz(100.0, 100.0, 100.0);
        output.apply(&mut transform, pivot);

        assert!(((transform.translation - pivot).length() - 4.0).abs() < 1e-4);
        assert!(transform.translation.y.abs() < 1e-5);
        assert!(transform.rotation.abs_diff_eq(output.rotation_delta, 1e-5));
    }
}
