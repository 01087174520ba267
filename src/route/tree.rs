use crate::path::{compose_paths, require_leading_slash, split_segments};
use crate::pattern::{TokenList, VARIABLE_MARKER};
use crate::route::{RouteError, RouteNode, RouteResult};
use crate::screen::ScreenId;

/// A declared route: one [`RouteNode`] plus the child routes composed under
/// it.
///
/// Routes are built in two ordered phases. First each route is constructed
/// with its own path; then [`Route::add_child`] rewrites the child's path to
/// `parent-path + child-path` and recompiles its pattern. Composition must
/// finish before the tree is installed into a router — children attached
/// after installation never reach the registry.
#[derive(Debug, Clone)]
pub struct Route {
    node: RouteNode,
    children: Vec<Route>,
}

impl Route {
    /// Declares a route whose name defaults to its first path segment.
    ///
    /// Fails when the path does not start with `/`, when the first segment is
    /// a variable segment (the derived name would be ambiguous), or when the
    /// path is the root `/` (no segment to derive a name from).
    pub fn new(path: &str, screen: ScreenId) -> RouteResult<Self> {
        require_leading_slash(path)?;

        let first = split_segments(path)
            .first()
            .copied()
            .ok_or_else(|| RouteError::MissingName {
                path: path.to_string(),
            })?;

        if first.starts_with(VARIABLE_MARKER) {
            return Err(RouteError::AnonymousVariableRoute {
                path: path.to_string(),
            });
        }

        Ok(Self {
            node: RouteNode::new(path.to_string(), first.to_string(), screen)?,
            children: Vec::new(),
        })
    }

    /// Declares a route with an explicit name. Required for the root route
    /// and for any route whose path begins with a variable segment.
    pub fn with_name(path: &str, screen: ScreenId, name: &str) -> RouteResult<Self> {
        require_leading_slash(path)?;

        Ok(Self {
            node: RouteNode::new(path.to_string(), name.to_string(), screen)?,
            children: Vec::new(),
        })
    }

    /// Composes `child` under this route.
    ///
    /// The child's path is rewritten to this route's path followed by the
    /// child's own segments, its pattern is recompiled, and it is appended to
    /// the ordered child list. Descendants the child already owns are
    /// recomposed with it, so subtrees are built bottom-up: attach
    /// grandchildren to the child first, then the child to its parent.
    pub fn add_child(&mut self, mut child: Route) -> RouteResult<()> {
        child.recompose(self.node.path())?;
        self.children.push(child);
        Ok(())
    }

    // Every path in the subtree already starts with this node's own segments,
    // so prefixing the parent's segments rewrites the whole subtree.
    fn recompose(&mut self, parent_path: &str) -> RouteResult<()> {
        let composed = compose_paths(parent_path, self.node.path());
        self.node.set_path(composed)?;

        for child in &mut self.children {
            child.recompose(parent_path)?;
        }

        Ok(())
    }

    /// Composes every route of an ordered collection under this one, in
    /// order.
    pub fn add_children(&mut self, children: impl IntoIterator<Item = Route>) -> RouteResult<()> {
        for child in children {
            self.add_child(child)?;
        }
        Ok(())
    }

    pub fn node(&self) -> &RouteNode {
        &self.node
    }

    pub fn children(&self) -> &[Route] {
        &self.children
    }

    pub(crate) fn take_children(&mut self) -> Vec<Route> {
        std::mem::take(&mut self.children)
    }

    pub fn path(&self) -> &str {
        self.node.path()
    }

    pub fn name(&self) -> &str {
        self.node.name()
    }

    pub fn screen(&self) -> &ScreenId {
        self.node.screen()
    }

    pub fn pattern(&self) -> &TokenList {
        self.node.pattern()
    }
}
