//! Canonical point clouds and the template store.

mod catalog;

use crate::normalize::normalize;
use crate::point::Point;
use crate::util::{StrokeMatchError, StrokeMatchResult};

/// A named gesture in canonical form: resampled to [`NUM_POINTS`](crate::normalize::NUM_POINTS) points,
/// scaled to the unit box, centroid at the origin.
#[derive(Clone, Debug)]
pub struct PointCloud {
    name: String,
    points: Vec<Point>,
}

impl PointCloud {
    /// Normalizes raw gesture points into a canonical cloud.
    ///
    /// Fails when the gesture has fewer than two points, since a single
    /// point defines no path to resample.
    pub fn new(name: impl Into<String>, raw: &[Point]) -> StrokeMatchResult<Self> {
        if raw.len() < 2 {
            return Err(StrokeMatchError::TooFewPoints { got: raw.len() });
        }
        Ok(Self {
            name: name.into(),
            points: normalize(raw),
        })
    }

    /// Name of the gesture class this cloud represents.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical points, always [`NUM_POINTS`](crate::normalize::NUM_POINTS) of them.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// Ordered template collection with an immutable built-in prefix.
///
/// Templates added at runtime land after the built-ins and can be cleared as
/// a group; the built-in prefix survives every mutation.
#[derive(Clone, Debug)]
pub struct TemplateStore {
    clouds: Vec<PointCloud>,
    builtin_len: usize,
}

impl TemplateStore {
    /// Creates a store seeded with the full stock gesture catalog.
    ///
    /// Only the first sixteen catalog classes form the permanent built-in
    /// prefix; the remaining entries load like user templates, so
    /// [`TemplateStore::clear_user`] removes them along with anything added
    /// at runtime.
    pub fn with_catalog() -> Self {
        let clouds: Vec<PointCloud> = catalog::GESTURES
            .iter()
            .map(|g| {
                let raw: Vec<Point> = g
                    .points
                    .iter()
                    .map(|&(x, y, id)| Point::new(x, y, id))
                    .collect();
                // Catalog entries all have >= 2 points.
                PointCloud::new(g.name, &raw).expect("catalog gesture is well-formed")
            })
            .collect();
        Self {
            clouds,
            builtin_len: catalog::BUILTIN_LEN,
        }
    }

    /// Creates a store with no templates at all; every entry added later
    /// counts as a user template.
    pub fn empty() -> Self {
        Self {
            clouds: Vec::new(),
            builtin_len: 0,
        }
    }

    /// Appends a template and returns how many templates now share its name.
    pub fn add(&mut self, cloud: PointCloud) -> u32 {
        self.clouds.push(cloud);
        let name = self.clouds[self.clouds.len() - 1].name();
        self.clouds.iter().filter(|c| c.name() == name).count() as u32
    }

    /// Removes every user template, keeping the built-in prefix. Returns the
    /// resulting template count.
    pub fn clear_user(&mut self) -> u32 {
        self.clouds.truncate(self.builtin_len);
        self.builtin_len as u32
    }

    /// Number of templates currently stored.
    pub fn len(&self) -> usize {
        self.clouds.len()
    }

    /// True when the store holds no templates.
    pub fn is_empty(&self) -> bool {
        self.clouds.is_empty()
    }

    /// Number of built-in templates at the front of the store.
    pub fn builtin_len(&self) -> usize {
        self.builtin_len
    }

    /// Iterates over the stored templates in order.
    pub fn iter(&self) -> impl Iterator<Item = &PointCloud> {
        self.clouds.iter()
    }

    pub(crate) fn as_slice(&self) -> &[PointCloud] {
        &self.clouds
    }
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::with_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::{PointCloud, TemplateStore};
    use crate::normalize::NUM_POINTS;
    use crate::point::Point;
    use crate::util::StrokeMatchError;

    #[test]
    fn catalog_store_holds_all_classes_behind_a_sixteen_class_prefix() {
        let store = TemplateStore::with_catalog();
        assert_eq!(store.len(), 37);
        assert_eq!(store.builtin_len(), 16);
        for cloud in store.iter() {
            assert_eq!(cloud.points().len(), NUM_POINTS);
        }
    }

    #[test]
    fn add_counts_templates_sharing_the_name() {
        let mut store = TemplateStore::empty();
        let raw = [Point::new(0.0, 0.0, 1), Point::new(1.0, 1.0, 1)];
        assert_eq!(store.add(PointCloud::new("x", &raw).unwrap()), 1);
        assert_eq!(store.add(PointCloud::new("y", &raw).unwrap()), 1);
        assert_eq!(store.add(PointCloud::new("x", &raw).unwrap()), 2);
    }

    #[test]
    fn clear_user_keeps_only_the_builtin_prefix() {
        let mut store = TemplateStore::with_catalog();
        let raw = [Point::new(0.0, 0.0, 1), Point::new(1.0, 1.0, 1)];
        store.add(PointCloud::new("user", &raw).unwrap());
        assert_eq!(store.len(), 38);
        assert_eq!(store.clear_user(), 16);
        assert_eq!(store.len(), 16);
        assert!(store.iter().all(|c| c.name() != "user"));
        // Catalog entries past the prefix clear along with user templates.
        assert!(store.iter().all(|c| c.name() != "Er"));
    }

    #[test]
    fn single_point_gesture_is_rejected() {
        let raw = [Point::new(1.0, 1.0, 1)];
        let err = PointCloud::new("dot", &raw).unwrap_err();
        assert_eq!(err, StrokeMatchError::TooFewPoints { got: 1 });
    }
}
