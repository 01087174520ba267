use crate::pattern::{self, TokenList};
use crate::route::RouteResult;
use crate::screen::ScreenId;

/// Identity data for one route: its composed path, unique name, the opaque
/// screen identifier handed to the build collaborator, and the compiled
/// pattern derived from the path.
#[derive(Debug, Clone)]
pub struct RouteNode {
    path: String,
    name: String,
    screen: ScreenId,
    pattern: TokenList,
}

impl RouteNode {
    pub(crate) fn new(path: String, name: String, screen: ScreenId) -> RouteResult<Self> {
        let pattern = pattern::compile(&path)?;
        Ok(Self {
            path,
            name,
            screen,
            pattern,
        })
    }

    /// Replaces the path and recompiles the pattern. Invoked exactly once per
    /// node, when it is composed under a parent.
    pub(crate) fn set_path(&mut self, path: String) -> RouteResult<()> {
        self.pattern = pattern::compile(&path)?;
        self.path = path;
        Ok(())
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn screen(&self) -> &ScreenId {
        &self.screen
    }

    pub fn pattern(&self) -> &TokenList {
        &self.pattern
    }
}
