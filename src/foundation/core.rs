use crate::foundation::error::{FramelineError, FramelineResult};

pub use kurbo::{Point, Vec2};

/// Closed frame window `[start, end]` during which an annotation is on screen.
///
/// Unlike [`FrameRange`], both bounds are inclusive: a window with `start == end` is active for
/// exactly one frame. Windows with `end < start` are representable and never active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameSpan {
    /// First active frame.
    pub start: i64,
    /// Last active frame (inclusive).
    pub end: i64,
}

impl FrameSpan {
    /// Build a span without validation.
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Return `true` when `start <= frame <= end`.
    pub fn contains(self, frame: i64) -> bool {
        self.start <= frame && frame <= self.end
    }

    /// Frames elapsed between `start` and `end` (`end - start`), saturating.
    ///
    /// Negative for inverted windows.
    pub fn duration(self) -> i64 {
        self.end.saturating_sub(self.start)
    }

    /// Offset of `frame` relative to the window start (`frame - start`), saturating.
    pub fn local(self, frame: i64) -> i64 {
        frame.saturating_sub(self.start)
    }

    /// Return `true` when the window is inverted (`end < start`).
    pub fn is_inverted(self) -> bool {
        self.end < self.start
    }
}

/// Half-open frame range `[start, end)` used when sampling many frames at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// Inclusive range start.
    pub start: i64,
    /// Exclusive range end.
    pub end: i64,
}

impl FrameRange {
    /// Create a validated range with `start <= end`.
    pub fn new(start: i64, end: i64) -> FramelineResult<Self> {
        if start > end {
            return Err(FramelineError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames contained in the range.
    pub fn len_frames(self) -> u64 {
        self.end.saturating_sub(self.start).max(0) as u64
    }

    /// Return `true` when the range has no frames.
    pub fn is_empty(self) -> bool {
        self.start >= self.end
    }

    /// Return `true` when `f` is inside `[start, end)`.
    pub fn contains(self, f: i64) -> bool {
        self.start <= f && f < self.end
    }

    /// Iterate the frames of the range in order.
    pub fn frames(self) -> std::ops::Range<i64> {
        self.start..self.end
    }
}

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> FramelineResult<Self> {
        if den == 0 {
            return Err(FramelineError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(FramelineError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    ///
    /// A zero denominator (only reachable by skipping validation) reads as 0 fps.
    pub fn as_f64(self) -> f64 {
        if self.den == 0 {
            return 0.0;
        }
        f64::from(self.num) / f64::from(self.den)
    }

    /// Convert a (possibly negative) frame offset to seconds.
    pub fn frames_to_secs(self, frames: i64) -> f64 {
        let fps = self.as_f64();
        if fps <= 0.0 {
            return 0.0;
        }
        (frames as f64) / fps
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 30, den: 1 }
    }
}

/// Return `true` when both coordinates are finite.
pub(crate) fn is_finite_point(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
