use crate::foundation::core::Fps;

/// Unit-mass spring released from rest at 0 toward a target of 1, used for overlay entrances.
///
/// The natural frequency is `sqrt(stiffness)` (rad/s). Damping below the critical value
/// `2 * sqrt(stiffness)` is raised to critical, so the response never overshoots and rises
/// monotonically. At critical damping the step response is `1 - e^(-w t) * (1 + w t)`; above it
/// the spring is overdamped and settles more slowly.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Spring {
    /// Spring constant; higher settles faster.
    pub stiffness: f64,
    /// Damping coefficient, floored at critical; higher (overdamped) settles slower.
    pub damping: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 12.0,
        }
    }
}

fn non_negative(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

impl Spring {
    /// Natural frequency in rad/s.
    pub fn omega(self) -> f64 {
        non_negative(self.stiffness).sqrt()
    }

    /// Damping coefficient actually applied (never below critical).
    pub fn effective_damping(self) -> f64 {
        non_negative(self.damping).max(2.0 * self.omega())
    }

    /// Step response after `t` seconds.
    fn displacement(self, t: f64) -> f64 {
        let omega = self.omega();
        if omega <= 0.0 || t <= 0.0 {
            return 0.0;
        }
        let k = omega * omega;
        let c = self.effective_damping();
        let disc = (c * c - 4.0 * k).max(0.0).sqrt();
        if disc <= 1e-9 * c {
            let wt = omega * t;
            return 1.0 - (-wt).exp() * (1.0 + wt);
        }
        // Real roots r_slow * r_fast = k; dividing avoids cancellation in the slow root.
        let r_fast = -(c + disc) / 2.0;
        let r_slow = k / r_fast;
        1.0 - (r_fast * (r_slow * t).exp() - r_slow * (r_fast * t).exp()) / (r_fast - r_slow)
    }

    /// Raw response after `frames` frames at `fps`. Returns 0 for `frames <= 0`.
    pub fn response(self, frames: i64, fps: Fps) -> f64 {
        if frames <= 0 {
            return 0.0;
        }
        self.displacement(fps.frames_to_secs(frames)).clamp(0.0, 1.0)
    }

    /// Response rescaled so it lands exactly on 1 at `window` frames and holds there.
    ///
    /// A zero window jumps straight to 1 on the first frame after the start.
    pub fn settle_within(self, frames: i64, window: u32, fps: Fps) -> f64 {
        if frames <= 0 {
            return 0.0;
        }
        if window == 0 || frames >= i64::from(window) {
            return 1.0;
        }
        let end = self.response(i64::from(window), fps);
        if end <= 0.0 {
            // No usable time base or stiffness; fall back to a linear ramp.
            return frames as f64 / f64::from(window);
        }
        (self.response(frames, fps) / end).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
