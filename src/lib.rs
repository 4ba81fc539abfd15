//! Strokematch is a point-cloud gesture recognizer for multi-stroke input.
//!
//! Raw stroke points are normalized into fixed-size canonical clouds and
//! classified against a template store with a greedy, stroke-order-tolerant
//! correspondence metric. Template scoring can run in parallel via the
//! `rayon` feature; span/event instrumentation is available behind the
//! `tracing` feature.

pub mod matcher;
pub mod normalize;
pub mod point;
pub mod recognizer;
pub mod template;
mod trace;
pub mod util;

pub use matcher::{cloud_distance, greedy_cloud_match};
pub use normalize::NUM_POINTS;
pub use point::{Point, ORIGIN};
pub use recognizer::{Recognition, Recognizer, RecognizerConfig, NO_MATCH_NAME};
pub use template::{PointCloud, TemplateStore};
pub use util::{StrokeMatchError, StrokeMatchResult};
