use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::foundation::error::{FramelineError, FramelineResult};

/// Job priority. Declaration order is dequeue order reversed: `High` goes first.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Rank 1.
    Low,
    /// Rank 2.
    #[default]
    Medium,
    /// Rank 3.
    High,
}

impl Priority {
    /// Numeric rank (`low = 1`, `medium = 2`, `high = 3`).
    pub fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }
}

/// A unit of deferred work. The queue only reads `priority`; `payload` rides along untouched.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProcessingJob<P = MediaJobPayload> {
    /// Caller-assigned identifier.
    pub id: String,
    /// Scheduling priority.
    #[serde(default)]
    pub priority: Priority,
    /// Opaque job body.
    #[serde(flatten)]
    pub payload: P,
}

impl<P> ProcessingJob<P> {
    /// Build a job.
    pub fn new(id: impl Into<String>, priority: Priority, payload: P) -> Self {
        Self {
            id: id.into(),
            priority,
            payload,
        }
    }
}

/// Media transcode request: where to read, where to write, free-form encoder options.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MediaJobPayload {
    /// Source media path.
    pub input_path: PathBuf,
    /// Destination media path.
    pub output_path: PathBuf,
    /// Encoder options, passed through as-is.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, serde_json::Value>,
}

/// A file of jobs to enqueue, as read by the CLI.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct JobBatch {
    /// Jobs in submission order.
    pub jobs: Vec<ProcessingJob<MediaJobPayload>>,
}

impl JobBatch {
    /// Parse a batch from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FramelineResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FramelineError::serde(format!("parse job batch JSON: {e}")))
    }

    /// Parse a batch from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FramelineResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FramelineError::validation(format!("open job batch JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject empty or duplicate job ids.
    pub fn validate(&self) -> FramelineResult<()> {
        let mut seen = BTreeSet::new();
        for job in &self.jobs {
            if job.id.is_empty() {
                return Err(FramelineError::validation("job id must not be empty"));
            }
            if !seen.insert(job.id.as_str()) {
                return Err(FramelineError::validation(format!(
                    "duplicate job id '{}'",
                    job.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/queue/job.rs"]
mod tests;
