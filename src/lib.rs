//! frameline schedules timed overlays on a video timeline and samples their animation per frame.
//!
//! Two independent pieces:
//!
//! - The annotation timeline: given annotations with closed frame windows and a frame number,
//!   compute the active set, entrance/exit/pulse values, paint order, camera zoom and arrow
//!   geometry. Everything here is a pure, total function of `(annotations, frame)`; see
//!   [`evaluate_frame`] and [`Scene`].
//! - [`ProcessingQueue`]: an in-memory priority queue of processing jobs with a single-flight
//!   guard.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod queue;
pub(crate) mod scene;
pub(crate) mod timeline;

pub use crate::foundation::core::{Fps, FrameRange, FrameSpan, Point, Vec2};
pub use crate::foundation::error::{FramelineError, FramelineResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::spring::Spring;

pub use crate::timeline::annotation::{Annotation, AnnotationKind, AnnotationSize};
pub use crate::timeline::engine::{
    AnimationState, ArrowGeometry, ZoomTarget, active_annotations, animation_state,
    arrow_geometry, zoom_target,
};
pub use crate::timeline::frame::{FrameState, OverlayState, evaluate_frame, evaluate_range};
pub use crate::timeline::layer::{LAYER_STRIDE, LAYER_TABLE, Layer, Layered, paint_order};
pub use crate::timeline::opts::{
    DEFAULT_ENTRANCE_WINDOW, DEFAULT_EXIT_WINDOW, DEFAULT_PULSE_PERIOD, DEFAULT_ZOOM_RAMP,
    TimingOpts,
};

pub use crate::queue::job::{JobBatch, MediaJobPayload, Priority, ProcessingJob};
pub use crate::queue::processing::{ProcessingQueue, QueueStatus};

pub use crate::scene::document::Scene;
