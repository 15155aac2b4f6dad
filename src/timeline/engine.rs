//! Per-frame overlay math.
//!
//! Every function here is total: malformed records degrade to "nothing to draw" or identity
//! values instead of erroring, since they run once per rendered frame.

use crate::animation::ease::Ease;
use crate::animation::wave::triangle_pulse;
use crate::foundation::core::{Point, Vec2, is_finite_point};
use crate::foundation::math::interpolate_clamped;
use crate::timeline::annotation::{Annotation, AnnotationKind};
use crate::timeline::opts::TimingOpts;

/// Animation values for one annotation at one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct AnimationState {
    /// Entrance progress in `[0, 1]`.
    pub progress: f64,
    /// `min(progress, exit fade)`.
    pub opacity: f64,
    /// Scale multiplier in `[1, peak]`.
    pub pulse: f64,
}

/// Camera zoom for a frame: scale around a canvas-percentage origin.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ZoomTarget {
    /// Origin x in canvas percent.
    pub x: f64,
    /// Origin y in canvas percent.
    pub y: f64,
    /// Scale factor, 1 for none.
    pub scale: f64,
}

impl ZoomTarget {
    /// Centered, unscaled.
    pub const IDENTITY: Self = Self {
        x: 50.0,
        y: 50.0,
        scale: 1.0,
    };
}

impl Default for ZoomTarget {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Direction and length of an arrow shaft.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ArrowGeometry {
    /// `atan2(dy, dx)` in radians.
    pub angle_radians: f64,
    /// Euclidean distance from position to target.
    pub length: f64,
}

/// Annotations whose closed window contains `frame`, in input order.
pub fn active_annotations(all: &[Annotation], frame: i64) -> Vec<&Annotation> {
    all.iter().filter(|a| a.span().contains(frame)).collect()
}

/// Entrance, exit and pulse values for `annotation` at `frame`.
pub fn animation_state(annotation: &Annotation, frame: i64, opts: &TimingOpts) -> AnimationState {
    let span = annotation.span();
    let local = span.local(frame);

    let progress = opts
        .spring
        .settle_within(local, opts.entrance_window, opts.fps);
    let exit = exit_opacity(local, span.duration(), opts.exit_window);
    let pulse = triangle_pulse(
        local,
        opts.pulse_period,
        opts.pulse_peak_for(annotation.kind),
    );

    AnimationState {
        progress,
        opacity: progress.min(exit),
        pulse,
    }
}

/// Linear fade `1 -> 0` across `[duration - window, duration]`.
pub(crate) fn exit_opacity(local: i64, duration: i64, window: u32) -> f64 {
    if local >= duration {
        return 0.0;
    }
    let end = duration as f64;
    let start = end - f64::from(window);
    interpolate_clamped(local as f64, &[start, end], &[1.0, 0.0], Ease::Linear)
}

/// Zoom driven by the first highlight in `active`.
///
/// The scale follows a trapezoid over the highlight's window: ramp up over `zoom_ramp_in`
/// frames, hold at `zoom_peak`, ramp down over the final `zoom_ramp_out` frames. Windows too short
/// for both ramps meet in the middle.
pub fn zoom_target(active: &[&Annotation], frame: i64, opts: &TimingOpts) -> ZoomTarget {
    let Some(highlight) = active
        .iter()
        .find(|a| a.kind == AnnotationKind::Highlight)
    else {
        return ZoomTarget::IDENTITY;
    };
    let Some(origin) = highlight.position.filter(|p| is_finite_point(*p)) else {
        return ZoomTarget::IDENTITY;
    };

    let span = highlight.span();
    let duration = span.duration().max(0) as f64;
    let local = span.local(frame) as f64;

    let ramp_in = f64::from(opts.zoom_ramp_in).min(duration / 2.0);
    let hold_end = (duration - f64::from(opts.zoom_ramp_out)).max(ramp_in);
    let peak = if opts.zoom_peak.is_finite() {
        opts.zoom_peak
    } else {
        1.0
    };

    let scale = interpolate_clamped(
        local,
        &[0.0, ramp_in, hold_end, duration],
        &[1.0, peak, peak, 1.0],
        opts.zoom_ease,
    );

    ZoomTarget {
        x: origin.x,
        y: origin.y,
        scale,
    }
}

/// Angle and length of the segment from `position` to `target`.
pub fn arrow_geometry(position: Point, target: Point) -> ArrowGeometry {
    let v: Vec2 = target - position;
    ArrowGeometry {
        angle_radians: v.atan2(),
        length: v.hypot(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/engine.rs"]
mod tests;
