use crate::registry::{RegistryError, RouteMap};
use crate::route::Route;
use crate::router::{RouterError, RouterResult};
use crate::screen::{ScreenFactory, ScreenHandle};
use crate::types::RouteParams;
use parking_lot::RwLock;
use std::sync::Arc;

struct RouterState {
    map: RouteMap,
    factory: Box<dyn ScreenFactory>,
    history: Vec<Arc<Route>>,
}

/// The public orchestration surface: route installation, navigation by name
/// or by path, screen construction through the build collaborator, and the
/// history stack.
///
/// Navigation is expected to run on one dispatch thread; the lock merely
/// serializes registry and history mutation behind `&self` methods so a
/// shared router handle stays safe to pass around.
pub struct Router {
    inner: RwLock<RouterState>,
}

impl Router {
    pub fn new(factory: Box<dyn ScreenFactory>) -> Self {
        Self {
            inner: RwLock::new(RouterState {
                map: RouteMap::new(),
                factory,
                history: Vec::new(),
            }),
        }
    }

    /// Installs a route and, recursively, every child currently composed
    /// under it.
    ///
    /// Children must be attached via [`Route::add_child`] before this call;
    /// a child attached afterwards never reaches the registry. Duplicate
    /// name or path is rejected here as well as in the registry so both entry
    /// points share one error surface.
    pub fn install_route(&self, route: Route) -> RouterResult<()> {
        let mut guard = self.inner.write();
        Self::install_into(&mut guard.map, route)
    }

    fn install_into(map: &mut RouteMap, mut route: Route) -> RouterResult<()> {
        if map.contains_name(route.name()) {
            return Err(RegistryError::DuplicateName {
                name: route.name().to_string(),
            }
            .into());
        }

        if map.contains_path(route.path()) {
            return Err(RegistryError::DuplicatePath {
                path: route.path().to_string(),
            }
            .into());
        }

        let children = route.take_children();

        tracing::debug!(name = route.name(), path = route.path(), "installing route");
        map.register(Arc::new(route))?;

        for child in children {
            Self::install_into(map, child)?;
        }

        Ok(())
    }

    /// Resolves a route by name, builds its screen with the given parameters,
    /// and records the visit in history.
    pub fn go_by_name(&self, name: &str, params: &RouteParams) -> RouterResult<ScreenHandle> {
        let mut guard = self.inner.write();

        let route = guard
            .map
            .get_by_name(name)
            .cloned()
            .ok_or_else(|| RouterError::NameNotFound {
                name: name.to_string(),
            })?;

        Self::build(&mut guard, route, params)
    }

    /// Resolves a route by matching a candidate path, builds its screen with
    /// the extracted parameters, and records the visit in history.
    pub fn go_by_path(&self, path: &str) -> RouterResult<ScreenHandle> {
        let mut guard = self.inner.write();

        let (route, params) =
            guard
                .map
                .find_by_path(path)
                .ok_or_else(|| RouterError::PathNotFound {
                    path: path.to_string(),
                })?;

        Self::build(&mut guard, route, &params)
    }

    // The screen is built before history is touched, so a failed navigation
    // leaves the stack exactly as it was.
    fn build(
        state: &mut RouterState,
        route: Arc<Route>,
        params: &RouteParams,
    ) -> RouterResult<ScreenHandle> {
        let screen = state.factory.build(route.screen(), params)?;
        state.history.push(route);
        Ok(screen)
    }

    /// Read-only view of the visited routes, most recent last.
    pub fn history(&self) -> Vec<Arc<Route>> {
        self.inner.read().history.clone()
    }

    pub fn clear_history(&self) {
        self.inner.write().history.clear();
    }

    /// Steps back to the previous route and returns it as the new current
    /// location.
    ///
    /// With fewer than two history entries there is nowhere to go back to;
    /// this is a routine condition, answered with `None` and no mutation.
    pub fn go_back(&self) -> Option<Arc<Route>> {
        let mut guard = self.inner.write();

        if guard.history.len() < 2 {
            return None;
        }

        guard.history.pop();
        guard.history.last().cloned()
    }

    pub fn route_count(&self) -> usize {
        self.inner.read().map.len()
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let guard = self.inner.read();
        f.debug_struct("Router")
            .field("routes", &guard.map.len())
            .field("history_depth", &guard.history.len())
            .finish()
    }
}
