use crate::animation::ease::Ease;
use crate::foundation::math::interpolate_clamped;

/// Triangle wave `1 -> peak -> 1` repeating every `period` frames.
///
/// Negative offsets wrap the same way positive ones do. A zero period holds at 1.
pub(crate) fn triangle_pulse(local_frame: i64, period: u32, peak: f64) -> f64 {
    if period == 0 || !peak.is_finite() {
        return 1.0;
    }
    let period_i = i64::from(period);
    let phase = local_frame.rem_euclid(period_i) as f64;
    let p = f64::from(period);
    interpolate_clamped(phase, &[0.0, p / 2.0, p], &[1.0, peak, 1.0], Ease::Linear)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/wave.rs"]
mod tests;
