//! Gesture recognition against the template store.

use std::time::Instant;

use crate::matcher;
use crate::point::Point;
use crate::template::{PointCloud, TemplateStore};
use crate::trace::{trace_event, trace_span};
use crate::util::StrokeMatchResult;

/// Name reported when the store has no templates to match against.
pub const NO_MATCH_NAME: &str = "No match.";

/// Outcome of one recognition call.
#[derive(Clone, Debug, PartialEq)]
pub struct Recognition {
    /// Name of the best-matching template, or [`NO_MATCH_NAME`].
    pub name: String,
    /// Confidence in `[0, 1]`; distances at or below 1.0 saturate to 1.0.
    pub score: f64,
    /// Wall-clock time spent recognizing, in milliseconds.
    pub elapsed_ms: u64,
}

/// Tuning knobs for recognition.
#[derive(Clone, Debug, Default)]
pub struct RecognizerConfig {
    /// Score templates in parallel. Requires the `rayon` feature; without it
    /// the flag is ignored and the scan stays sequential.
    pub parallel: bool,
}

/// Point-cloud gesture recognizer owning its template store.
///
/// `recognize` never mutates the store, so a shared recognizer can serve
/// concurrent lookups; `add_gesture` and `delete_user_gestures` must be
/// serialized against in-flight recognitions by the host (a reader-writer
/// lock is enough).
#[derive(Clone, Debug)]
pub struct Recognizer {
    store: TemplateStore,
    config: RecognizerConfig,
}

impl Recognizer {
    /// Creates a recognizer seeded with the stock gesture catalog.
    pub fn new() -> Self {
        Self::with_store(TemplateStore::with_catalog())
    }

    /// Creates a recognizer over a caller-supplied store.
    pub fn with_store(store: TemplateStore) -> Self {
        Self {
            store,
            config: RecognizerConfig::default(),
        }
    }

    /// Replaces the recognizer configuration.
    pub fn with_config(mut self, config: RecognizerConfig) -> Self {
        self.config = config;
        self
    }

    /// Read access to the template store.
    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    /// Classifies a raw gesture against every stored template.
    ///
    /// Raw stroke ids must be non-decreasing in capture order; that is a
    /// caller contract, not something the recognizer validates. Fails only
    /// when the gesture is too short to normalize.
    pub fn recognize(&self, points: &[Point]) -> StrokeMatchResult<Recognition> {
        let t0 = Instant::now();
        let candidate = PointCloud::new("", points)?;
        let _span = trace_span!("recognize", templates = self.store.len()).entered();

        let best = self.best_template(candidate.points());
        let elapsed_ms = t0.elapsed().as_millis() as u64;
        let recognition = match best {
            None => Recognition {
                name: NO_MATCH_NAME.to_string(),
                score: 0.0,
                elapsed_ms,
            },
            Some((index, b)) => {
                let name = self.store.as_slice()[index].name().to_string();
                // Distances inside the unit box already mean a solid match;
                // the score saturates there instead of rescaling.
                let score = if b > 1.0 { 1.0 / b } else { 1.0 };
                Recognition {
                    name,
                    score,
                    elapsed_ms,
                }
            }
        };
        trace_event!(
            "recognized",
            best = recognition.name.as_str(),
            score = recognition.score,
            elapsed_ms = recognition.elapsed_ms
        );
        Ok(recognition)
    }

    fn best_template(&self, candidate: &[Point]) -> Option<(usize, f64)> {
        #[cfg(feature = "rayon")]
        if self.config.parallel {
            return matcher::rayon::best_template_par(candidate, self.store.as_slice());
        }
        matcher::best_template(candidate, self.store.as_slice())
    }

    /// Normalizes a raw gesture and stores it as a user template.
    ///
    /// Returns how many templates now carry `name`, counting this one, so a
    /// host can keep several examples per class.
    pub fn add_gesture(&mut self, name: impl Into<String>, points: &[Point]) -> StrokeMatchResult<u32> {
        let cloud = PointCloud::new(name, points)?;
        Ok(self.store.add(cloud))
    }

    /// Drops every user template, restoring the built-in catalog. Returns
    /// the resulting template count.
    pub fn delete_user_gestures(&mut self) -> u32 {
        self.store.clear_user()
    }
}

impl Default for Recognizer {
    fn default() -> Self {
        Self::new()
    }
}
