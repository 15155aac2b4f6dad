use crate::animation::ease::Ease;
use crate::animation::spring::Spring;
use crate::foundation::core::Fps;
use crate::foundation::error::{FramelineError, FramelineResult};
use crate::timeline::annotation::AnnotationKind;

/// Frames over which an overlay fades out before its last frame.
pub const DEFAULT_EXIT_WINDOW: u32 = 10;
/// Frames over which the entrance spring settles.
pub const DEFAULT_ENTRANCE_WINDOW: u32 = 15;
/// Frames per pulse cycle.
pub const DEFAULT_PULSE_PERIOD: u32 = 30;
/// Frames for the zoom ramp at each end of a highlight.
pub const DEFAULT_ZOOM_RAMP: u32 = 15;

/// Animation constants shared by every overlay.
///
/// Scenes carry this under `timing`; missing fields take the defaults below.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimingOpts {
    /// Time base for the entrance spring. Scenes overwrite this with their own fps.
    #[serde(skip)]
    pub fps: Fps,
    /// Entrance spring shape.
    pub spring: Spring,
    /// Frames until the entrance reaches full progress.
    pub entrance_window: u32,
    /// Frames of linear fade-out ending on the last active frame.
    pub exit_window: u32,
    /// Frames per pulse cycle.
    pub pulse_period: u32,
    /// Pulse scale peak for most kinds.
    pub pulse_peak: f64,
    /// Pulse scale peak for warnings.
    pub warning_pulse_peak: f64,
    /// Frames to ramp the zoom up after a highlight appears.
    pub zoom_ramp_in: u32,
    /// Frames to ramp the zoom back down before a highlight ends.
    pub zoom_ramp_out: u32,
    /// Zoom scale held between the ramps.
    pub zoom_peak: f64,
    /// Shape of both zoom ramps.
    pub zoom_ease: Ease,
}

impl Default for TimingOpts {
    fn default() -> Self {
        Self {
            fps: Fps::default(),
            spring: Spring::default(),
            entrance_window: DEFAULT_ENTRANCE_WINDOW,
            exit_window: DEFAULT_EXIT_WINDOW,
            pulse_period: DEFAULT_PULSE_PERIOD,
            pulse_peak: 1.1,
            warning_pulse_peak: 1.15,
            zoom_ramp_in: DEFAULT_ZOOM_RAMP,
            zoom_ramp_out: DEFAULT_ZOOM_RAMP,
            zoom_peak: 1.2,
            zoom_ease: Ease::Linear,
        }
    }
}

impl TimingOpts {
    /// Pulse peak for `kind`.
    pub fn pulse_peak_for(&self, kind: AnnotationKind) -> f64 {
        match kind {
            AnnotationKind::Warning => self.warning_pulse_peak,
            _ => self.pulse_peak,
        }
    }

    /// Reject constants the engine would have to silently paper over.
    pub fn validate(&self) -> FramelineResult<()> {
        if self.exit_window == 0 {
            return Err(FramelineError::validation("timing.exit_window must be > 0"));
        }
        if self.pulse_period == 0 {
            return Err(FramelineError::validation("timing.pulse_period must be > 0"));
        }
        for (name, v) in [
            ("pulse_peak", self.pulse_peak),
            ("warning_pulse_peak", self.warning_pulse_peak),
            ("zoom_peak", self.zoom_peak),
        ] {
            if !v.is_finite() || v < 1.0 {
                return Err(FramelineError::validation(format!(
                    "timing.{name} must be finite and >= 1, got {v}"
                )));
            }
        }
        for (name, v) in [
            ("spring.stiffness", self.spring.stiffness),
            ("spring.damping", self.spring.damping),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(FramelineError::validation(format!(
                    "timing.{name} must be finite and >= 0, got {v}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/opts.rs"]
mod tests;
