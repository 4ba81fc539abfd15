//! Rayon-parallel template scan (feature-gated).
//!
//! Recognition is read-only with respect to the template list, so scoring
//! every template is a pure data-parallel map followed by a min-reduce.

use rayon::prelude::*;

use crate::matcher::greedy_cloud_match;
use crate::point::Point;
use crate::template::PointCloud;

/// Parallel scan for the template closest to `candidate`.
///
/// Ties between equal distances resolve to the lowest template index, so the
/// result is identical to the sequential scan.
pub(crate) fn best_template_par(
    candidate: &[Point],
    templates: &[PointCloud],
) -> Option<(usize, f64)> {
    templates
        .par_iter()
        .enumerate()
        .map(|(i, tpl)| (i, greedy_cloud_match(candidate, tpl.points())))
        .min_by(|(i, a), (j, b)| a.total_cmp(b).then_with(|| i.cmp(j)))
}
