//! Bounds for the edited value.

use tracing::debug;

/// Smallest value a screen can hold.
pub const VALUE_MIN: i32 = 0;
/// Largest value a screen can hold.
pub const VALUE_MAX: i32 = 100;

/// Clamp `value` into `[VALUE_MIN, VALUE_MAX]`.
pub fn clamp_value(value: i32) -> i32 {
    let clamped = value.clamp(VALUE_MIN, VALUE_MAX);
    if clamped != value {
        debug!("Clamped {} to {}", value, clamped);
    }
    clamped
}

/// Move `current` by `delta`, staying in bounds.
pub fn step_value(current: i32, delta: i32) -> i32 {
    clamp_value(current.saturating_add(delta))
}

/// Position of `value` in the range as a ratio in `[0.0, 1.0]`.
pub fn value_ratio(value: i32) -> f64 {
    let span = f64::from(VALUE_MAX - VALUE_MIN);
    (f64::from(clamp_value(value) - VALUE_MIN) / span).clamp(0.0, 1.0)
}
