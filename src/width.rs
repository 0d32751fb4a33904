use crate::geometry::Velocity;

/// Pointer speed (points per second) that maps to a unit of "pen speed".
const VELOCITY_SCALE: f32 = 600.0;

/// Weight of the current sample's speed against the previous one.
const CURRENT_SPEED_WEIGHT: f32 = 0.6;
const PREVIOUS_SPEED_WEIGHT: f32 = 0.4;

/// How far a segment may deviate from the width of the segment before it.
const MAX_SHRINK: f32 = 0.8;
const MAX_GROWTH: f32 = 1.2;

/// Overall limits relative to the configured base width.
const MIN_BASE_FACTOR: f32 = 0.5;
const MAX_BASE_FACTOR: f32 = 1.5;

/// Computes the width of the next stroke segment from pointer velocity.
///
/// Fast motion thins the line and slow motion thickens it. The change per
/// segment is damped against `previous_width`, and the result always stays
/// within half and one and a half times `base_width`.
///
/// At the start of a stroke there is no previous width; callers pass
/// `base_width` instead.
pub fn modulated_width(
    base_width: f32,
    velocity: Velocity,
    previous_velocity: Velocity,
    previous_width: f32,
) -> f32 {
    let speed = velocity.length() / VELOCITY_SCALE;
    let previous_speed = previous_velocity.length() / VELOCITY_SCALE;
    let weighted_speed = CURRENT_SPEED_WEIGHT * speed + PREVIOUS_SPEED_WEIGHT * previous_speed;

    // A pointer at rest has no speed to divide by; the limits below decide.
    let modulated = if weighted_speed > f32::EPSILON {
        base_width / weighted_speed
    } else {
        f32::INFINITY
    };

    let limited = limit(
        modulated,
        previous_width * MAX_SHRINK,
        previous_width * MAX_GROWTH,
    );
    limit(
        limited,
        base_width * MIN_BASE_FACTOR,
        base_width * MAX_BASE_FACTOR,
    )
}

// `f32::clamp` panics on inverted bounds; widths coming from the host are
// validated but this keeps the function total.
fn limit(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}
