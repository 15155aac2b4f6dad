use rayon::prelude::*;

use crate::foundation::core::{FrameRange, Point, is_finite_point};
use crate::timeline::annotation::{Annotation, AnnotationKind};
use crate::timeline::engine::{
    ArrowGeometry, ZoomTarget, active_annotations, animation_state, arrow_geometry, zoom_target,
};
use crate::timeline::layer::{Layer, paint_order};
use crate::timeline::opts::TimingOpts;

/// Everything a view layer needs to draw one overlay.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OverlayState {
    /// Source annotation id.
    pub id: String,
    /// Source annotation kind.
    pub kind: AnnotationKind,
    /// Display text.
    pub text: String,
    /// Resolved color.
    pub color: String,
    /// Anchor in canvas percent.
    pub position: Point,
    /// Paint layer.
    pub layer: Layer,
    /// Stacking value; larger paints on top.
    pub z_index: i64,
    /// Entrance progress in `[0, 1]`.
    pub progress: f64,
    /// Final opacity in `[0, 1]`.
    pub opacity: f64,
    /// Size preset x entrance growth x pulse.
    pub scale: f64,
    /// Shaft geometry; only set for arrows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrow: Option<ArrowGeometry>,
}

/// Evaluated overlay state for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameState {
    /// Frame that was evaluated.
    pub frame: i64,
    /// `frame` in seconds at the timing fps.
    pub time_secs: f64,
    /// Camera zoom.
    pub zoom: ZoomTarget,
    /// Drawable overlays, back to front.
    pub overlays: Vec<OverlayState>,
}

/// Entrance scale grows from half size to full size with progress.
fn entrance_scale(progress: f64) -> f64 {
    0.5 + 0.5 * progress
}

fn overlay_state(
    annotation: &Annotation,
    layer: Layer,
    z_index: i64,
    frame: i64,
    opts: &TimingOpts,
) -> Option<OverlayState> {
    let position = annotation.position.filter(|p| is_finite_point(*p))?;
    let color = annotation.resolved_color()?;

    let arrow = match annotation.kind {
        AnnotationKind::Arrow => {
            let target = annotation.target.filter(|p| is_finite_point(*p))?;
            Some(arrow_geometry(position, target))
        }
        _ => None,
    };

    let state = animation_state(annotation, frame, opts);
    Some(OverlayState {
        id: annotation.id.clone(),
        kind: annotation.kind,
        text: annotation.text.clone(),
        color: color.to_owned(),
        position,
        layer,
        z_index,
        progress: state.progress,
        opacity: state.opacity,
        scale: annotation.size.multiplier() * entrance_scale(state.progress) * state.pulse,
        arrow,
    })
}

/// Evaluate every overlay for `frame`.
///
/// Annotations that cannot be drawn (unknown kind, no usable position, arrow without target) are
/// left out of `overlays`; they still count toward the active set, so highlights among them can
/// drive the zoom.
#[tracing::instrument(level = "trace", skip(annotations, opts))]
pub fn evaluate_frame(annotations: &[Annotation], frame: i64, opts: &TimingOpts) -> FrameState {
    let active = active_annotations(annotations, frame);
    let overlays: Vec<OverlayState> = paint_order(&active)
        .into_iter()
        .filter_map(|l| overlay_state(l.annotation, l.layer, l.z_index, frame, opts))
        .collect();

    if overlays.len() < active.len() {
        tracing::trace!(
            frame,
            active = active.len(),
            drawn = overlays.len(),
            "skipped undrawable annotations"
        );
    }

    FrameState {
        frame,
        time_secs: opts.fps.frames_to_secs(frame),
        zoom: zoom_target(&active, frame, opts),
        overlays,
    }
}

/// Evaluate each frame of `range` in order, optionally across the rayon pool.
#[tracing::instrument(skip(annotations, opts), fields(frames = range.len_frames()))]
pub fn evaluate_range(
    annotations: &[Annotation],
    range: FrameRange,
    opts: &TimingOpts,
    parallel: bool,
) -> Vec<FrameState> {
    if parallel {
        range
            .frames()
            .into_par_iter()
            .map(|f| evaluate_frame(annotations, f, opts))
            .collect()
    } else {
        range
            .frames()
            .map(|f| evaluate_frame(annotations, f, opts))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/frame.rs"]
mod tests;
