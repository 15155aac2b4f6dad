use crate::foundation::core::{FrameSpan, Point, is_finite_point};
use crate::foundation::error::{FramelineError, FramelineResult};

/// Closed set of overlay variants.
///
/// Unrecognized kind strings deserialize to [`AnnotationKind::Unknown`], which the engine keeps in
/// the active set but never draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationKind {
    /// Speech-bubble style label.
    Callout,
    /// Background circle drawing attention to a region; also drives the zoom envelope.
    Highlight,
    /// Pointer from `position` to `target`.
    Arrow,
    /// Informational badge.
    Info,
    /// Warning badge; pulses harder than the others.
    Warning,
    /// Success badge.
    Success,
    /// Anything else found in input data.
    #[serde(other)]
    Unknown,
}

impl AnnotationKind {
    /// Color used when an annotation carries no override. `None` for unknown kinds.
    pub fn default_color(self) -> Option<&'static str> {
        match self {
            Self::Callout | Self::Info => Some("#2196f3"),
            Self::Highlight => Some("#ffeb3b"),
            Self::Arrow => Some("#f44336"),
            Self::Warning => Some("#ff9800"),
            Self::Success => Some("#4caf50"),
            Self::Unknown => None,
        }
    }
}

/// Overlay size preset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationSize {
    /// 0.8x.
    Small,
    /// 1.0x.
    #[default]
    Medium,
    /// 1.2x.
    Large,
}

impl AnnotationSize {
    /// Scale multiplier for this preset.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Small => 0.8,
            Self::Medium => 1.0,
            Self::Large => 1.2,
        }
    }
}

/// A timed visual overlay.
///
/// Annotations are immutable values handed to the engine on every evaluation. Coordinates are
/// percentages of the canvas (0..100 nominal, not enforced). `position` is optional so that
/// partially specified records can still be loaded; such annotations simply draw nothing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Annotation {
    /// Caller-assigned identifier, unique within one collection.
    pub id: String,
    /// Overlay variant.
    pub kind: AnnotationKind,
    /// Display text; may be empty.
    #[serde(default)]
    pub text: String,
    /// First active frame.
    #[serde(alias = "startFrame")]
    pub start_frame: i64,
    /// Last active frame (inclusive).
    #[serde(alias = "endFrame")]
    pub end_frame: i64,
    /// Anchor point in canvas percentages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
    /// Arrow tip in canvas percentages; only meaningful for [`AnnotationKind::Arrow`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Point>,
    /// Color override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Size preset.
    #[serde(default)]
    pub size: AnnotationSize,
}

impl Annotation {
    /// Build an annotation with empty text, default size and no color override.
    pub fn new(
        id: impl Into<String>,
        kind: AnnotationKind,
        start_frame: i64,
        end_frame: i64,
        position: Point,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            text: String::new(),
            start_frame,
            end_frame,
            position: Some(position),
            target: None,
            color: None,
            size: AnnotationSize::default(),
        }
    }

    /// Set the display text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the arrow target.
    pub fn with_target(mut self, target: Point) -> Self {
        self.target = Some(target);
        self
    }

    /// Override the kind's default color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the size preset.
    pub fn with_size(mut self, size: AnnotationSize) -> Self {
        self.size = size;
        self
    }

    /// Active window as a [`FrameSpan`].
    pub fn span(&self) -> FrameSpan {
        FrameSpan::new(self.start_frame, self.end_frame)
    }

    /// Color to draw with: the override if present, otherwise the kind default.
    pub fn resolved_color(&self) -> Option<&str> {
        match &self.color {
            Some(c) => Some(c.as_str()),
            None => self.kind.default_color(),
        }
    }

    /// Check the record before it enters the per-frame path.
    ///
    /// Rejects inverted windows, missing or non-finite coordinates and target-less arrows.
    /// Out-of-canvas coordinates are allowed.
    pub fn validate(&self) -> FramelineResult<()> {
        if self.id.is_empty() {
            return Err(FramelineError::validation("annotation id must not be empty"));
        }
        if self.span().is_inverted() {
            return Err(FramelineError::validation(format!(
                "annotation '{}': end_frame {} is before start_frame {}",
                self.id, self.end_frame, self.start_frame
            )));
        }
        let Some(position) = self.position else {
            return Err(FramelineError::validation(format!(
                "annotation '{}': missing position",
                self.id
            )));
        };
        if !is_finite_point(position) {
            return Err(FramelineError::validation(format!(
                "annotation '{}': position must be finite",
                self.id
            )));
        }
        match (self.kind, self.target) {
            (AnnotationKind::Arrow, None) => Err(FramelineError::validation(format!(
                "annotation '{}': arrow requires a target",
                self.id
            ))),
            (_, Some(t)) if !is_finite_point(t) => Err(FramelineError::validation(format!(
                "annotation '{}': target must be finite",
                self.id
            ))),
            _ => Ok(()),
        }
    }

    /// Return `true` when either point lies outside the nominal 0..100 canvas range.
    pub fn is_off_canvas(&self) -> bool {
        fn off(p: Point) -> bool {
            !(0.0..=100.0).contains(&p.x) || !(0.0..=100.0).contains(&p.y)
        }
        self.position.is_some_and(off) || self.target.is_some_and(off)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/annotation.rs"]
mod tests;
