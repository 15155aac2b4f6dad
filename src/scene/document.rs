use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::{FrameRange, Fps};
use crate::foundation::error::{FramelineError, FramelineResult};
use crate::scene::model::SceneDef;
use crate::timeline::annotation::Annotation;
use crate::timeline::frame::{FrameState, evaluate_frame, evaluate_range};
use crate::timeline::opts::TimingOpts;

/// Scene boundary object: a frame rate, timing constants and the annotation list.
///
/// This is the JSON-facing representation written by scene authors. Validation happens here,
/// once, so that per-frame evaluation can stay total and check-free.
#[derive(Debug, Clone)]
pub struct Scene {
    def: SceneDef,
}

impl Scene {
    /// Build a scene in code at the default 30 fps and default timing.
    pub fn new(annotations: Vec<Annotation>) -> Self {
        Self {
            def: SceneDef {
                annotations,
                ..SceneDef::default()
            },
        }
    }

    /// Replace the frame rate.
    pub fn with_fps(mut self, fps: Fps) -> Self {
        self.def.fps = fps;
        self
    }

    /// Replace the timing constants.
    pub fn with_timing(mut self, timing: TimingOpts) -> Self {
        self.def.timing = timing;
        self
    }

    /// Parse a scene from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FramelineResult<Self> {
        let def: SceneDef = serde_json::from_reader(r)
            .map_err(|e| FramelineError::serde(format!("parse scene JSON: {e}")))?;
        Ok(Self { def })
    }

    /// Parse a scene from a JSON string.
    pub fn from_json_str(s: &str) -> FramelineResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FramelineResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FramelineError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize back to pretty JSON.
    pub fn to_json_string(&self) -> FramelineResult<String> {
        serde_json::to_string_pretty(&self.def)
            .map_err(|e| FramelineError::serde(format!("serialize scene JSON: {e}")))
    }

    /// Check fps, timing constants and every annotation.
    ///
    /// Overlays placed outside the 0..100 canvas are allowed and only logged.
    pub fn validate(&self) -> FramelineResult<()> {
        Fps::new(self.def.fps.num, self.def.fps.den)?;
        self.def.timing.validate()?;

        let mut seen = BTreeSet::new();
        for a in &self.def.annotations {
            a.validate()?;
            if !seen.insert(a.id.as_str()) {
                return Err(FramelineError::validation(format!(
                    "duplicate annotation id '{}'",
                    a.id
                )));
            }
            if a.is_off_canvas() {
                tracing::warn!(annotation = %a.id, "annotation extends outside the 0..100 canvas");
            }
        }
        Ok(())
    }

    /// Annotations in authoring order.
    pub fn annotations(&self) -> &[Annotation] {
        &self.def.annotations
    }

    /// Scene frame rate.
    pub fn fps(&self) -> Fps {
        self.def.fps
    }

    /// Declared duration, or one past the last annotation frame when undeclared.
    pub fn duration_frames(&self) -> u64 {
        if let Some(d) = self.def.duration {
            return d;
        }
        self.def
            .annotations
            .iter()
            .map(|a| a.end_frame.saturating_add(1).max(0) as u64)
            .max()
            .unwrap_or(0)
    }

    /// `[0, duration)`.
    pub fn full_range(&self) -> FrameRange {
        let end = i64::try_from(self.duration_frames()).unwrap_or(i64::MAX);
        FrameRange { start: 0, end }
    }

    /// Timing constants with the scene fps as the spring time base.
    pub fn timing(&self) -> TimingOpts {
        TimingOpts {
            fps: self.def.fps,
            ..self.def.timing.clone()
        }
    }

    /// Mutable access for overrides (e.g. from CLI flags).
    pub fn timing_mut(&mut self) -> &mut TimingOpts {
        &mut self.def.timing
    }

    /// Evaluate one frame.
    pub fn evaluate_frame(&self, frame: i64) -> FrameState {
        evaluate_frame(&self.def.annotations, frame, &self.timing())
    }

    /// Evaluate `range` frame by frame.
    pub fn evaluate_range(&self, range: FrameRange, parallel: bool) -> Vec<FrameState> {
        evaluate_range(&self.def.annotations, range, &self.timing(), parallel)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/document.rs"]
mod tests;
