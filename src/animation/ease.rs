/// Shape of the zoom ramps between keyframes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant speed.
    #[default]
    Linear,
    /// Fast start, slow landing on the peak.
    OutCubic,
    /// Symmetric slow start and slow landing.
    InOutQuad,
}

impl Ease {
    /// Map ramp progress `t` to eased progress. `t` is clamped to `[0, 1]`; NaN reads as 0.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let rest = 1.0 - t;
        match self {
            Self::Linear => t,
            Self::OutCubic => 1.0 - rest * rest * rest,
            Self::InOutQuad if t < 0.5 => 2.0 * t * t,
            Self::InOutQuad => 1.0 - 2.0 * rest * rest,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
