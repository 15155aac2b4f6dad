use serde::{Deserialize, Serialize};

use crate::foundation::core::Fps;
use crate::timeline::annotation::Annotation;
use crate::timeline::opts::TimingOpts;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct SceneDef {
    #[serde(default)]
    pub(crate) fps: Fps,
    /// Length in frames; derived from the annotations when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) duration: Option<u64>,
    #[serde(default)]
    pub(crate) timing: TimingOpts,
    #[serde(default)]
    pub(crate) annotations: Vec<Annotation>,
}
