use crate::screen::{ScreenError, ScreenResult};
use crate::types::RouteParams;
use hashbrown::HashMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Opaque identifier for a screen, forwarded untouched from a route to the
/// build collaborator. The routing core never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScreenId(Box<str>);

impl ScreenId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().into_boxed_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScreenId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A renderable unit produced by a screen factory.
///
/// Re-parameterization is a capability: a screen that can rebind to a new
/// parameter set overrides [`Screen::apply_params`] and returns `true`. The
/// default implementation declines, which tells a caching factory to hand the
/// cached instance back unchanged.
pub trait Screen {
    fn apply_params(&mut self, params: &RouteParams) -> bool {
        let _ = params;
        false
    }
}

/// Screen instances are UI objects confined to the dispatch thread.
pub type ScreenHandle = Rc<RefCell<dyn Screen>>;

pub type ScreenCtor = Box<dyn Fn() -> ScreenHandle>;

/// The narrow interface the router consumes: given a screen identifier and
/// the extracted route parameters, produce a renderable unit.
pub trait ScreenFactory {
    fn build(&mut self, screen: &ScreenId, params: &RouteParams) -> ScreenResult<ScreenHandle>;
}

/// Factory that keeps at most one live instance per screen identifier.
///
/// The instance cache is owned by the factory, not shared process-wide; drop
/// the factory and its screens go with it. On a repeat navigation with a
/// non-empty parameter set the cached instance is offered the new parameters
/// through [`Screen::apply_params`]; instances without that capability are
/// returned unchanged.
#[derive(Default)]
pub struct CachingScreenFactory {
    constructors: HashMap<ScreenId, ScreenCtor>,
    instances: HashMap<ScreenId, ScreenHandle>,
}

impl CachingScreenFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the constructor used the first time `screen` is built.
    /// A later registration under the same identifier replaces the earlier
    /// constructor but leaves an already-built instance in place.
    pub fn register(&mut self, screen: ScreenId, ctor: ScreenCtor) {
        self.constructors.insert(screen, ctor);
    }

    pub fn has_instance(&self, screen: &ScreenId) -> bool {
        self.instances.contains_key(screen)
    }
}

impl ScreenFactory for CachingScreenFactory {
    fn build(&mut self, screen: &ScreenId, params: &RouteParams) -> ScreenResult<ScreenHandle> {
        let handle = match self.instances.get(screen) {
            Some(instance) => instance.clone(),
            None => {
                let ctor =
                    self.constructors
                        .get(screen)
                        .ok_or_else(|| ScreenError::UnknownScreen {
                            screen: screen.clone(),
                        })?;
                let instance = ctor();
                self.instances.insert(screen.clone(), instance.clone());
                instance
            }
        };

        if !params.is_empty() {
            handle.borrow_mut().apply_params(params);
        }

        Ok(handle)
    }
}

impl fmt::Debug for CachingScreenFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachingScreenFactory")
            .field("constructors", &self.constructors.len())
            .field("instances", &self.instances.len())
            .finish()
    }
}
