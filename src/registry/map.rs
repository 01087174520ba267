use crate::matcher::{extract_params, interpret};
use crate::path::segment_count;
use crate::registry::{RegistryError, RegistryMetrics, RegistryResult};
use crate::route::Route;
use crate::types::RouteParams;
use hashbrown::HashMap;
use std::sync::Arc;

/// Indexed store of installed routes.
///
/// Three indices are kept in lockstep: by unique name, by unique composed
/// path, and by segment count. The segment-count buckets exist because a
/// candidate path can only ever match routes of its own length — path lookup
/// scans one bucket instead of every installed route.
#[derive(Debug, Default)]
pub struct RouteMap {
    by_name: HashMap<String, Arc<Route>>,
    by_path: HashMap<String, Arc<Route>>,
    by_segments: HashMap<usize, Vec<Arc<Route>>>,
    metrics: RegistryMetrics,
}

impl RouteMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a route in all three indices.
    ///
    /// Both uniqueness constraints are validated before any index is touched,
    /// so a rejected route is present in no index at all.
    pub fn register(&mut self, route: Arc<Route>) -> RegistryResult<()> {
        if self.by_name.contains_key(route.name()) {
            return Err(RegistryError::DuplicateName {
                name: route.name().to_string(),
            });
        }

        if self.by_path.contains_key(route.path()) {
            return Err(RegistryError::DuplicatePath {
                path: route.path().to_string(),
            });
        }

        let length = route.pattern().len();
        let new_bucket = !self.by_segments.contains_key(&length);

        self.by_name
            .insert(route.name().to_string(), route.clone());
        self.by_path
            .insert(route.path().to_string(), route.clone());
        self.by_segments.entry(length).or_default().push(route);
        self.metrics.record_register(new_bucket);

        Ok(())
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Arc<Route>> {
        self.by_name.get(name)
    }

    /// Finds the first installed route matching a candidate path and returns
    /// it with its extracted parameters.
    ///
    /// Only the bucket with the candidate's segment count is scanned, in
    /// registration order; among overlapping patterns of equal length the
    /// first-registered route wins. Installers who want a literal route such
    /// as `/profile/settings` to shadow `/profile/:id` must register the
    /// literal one first.
    #[tracing::instrument(level = "trace", skip(self), fields(path = %path))]
    pub fn find_by_path(&self, path: &str) -> Option<(Arc<Route>, RouteParams)> {
        let bucket = self.by_segments.get(&segment_count(path))?;

        for route in bucket {
            if interpret(route.pattern(), path) {
                let params = extract_params(route.pattern(), path);
                return Some((route.clone(), params));
            }
        }

        None
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.by_path.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn metrics(&self) -> &RegistryMetrics {
        &self.metrics
    }
}
