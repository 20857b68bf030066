//! Route tree declaration and path matching.
//!
//! [`ROUTE_TREE`] is the single declaration of every route node: its parent,
//! its path segment, and the view it renders. The router in [`crate::App`]
//! mounts these nodes, and the route inspector reads the same table to show
//! which chain matched the current location.

mod home;
mod main_layout;
mod root;

use std::fmt;

use leptos::*;
use thiserror::Error;

pub use home::HomePage;
pub use main_layout::{MainLayout, MainLayoutRoute};
pub use root::{RootLayout, RootRoute};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Stable identifier of a declared route node.
pub enum RouteId {
    /// Tree root: owns the cache context and developer overlays.
    Root,
    /// Pathless layout wrapping every page in the page chrome.
    MainLayout,
    /// Index page.
    Home,
}

impl RouteId {
    /// Route id as shown by the route inspector.
    pub fn name(self) -> &'static str {
        match self {
            Self::Root => "__root__",
            Self::MainLayout => "/_main",
            Self::Home => "/_main/",
        }
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Structural role of a route node.
pub enum RouteKind {
    /// The single tree root.
    Root,
    /// Interior node rendering an outlet.
    Layout,
    /// Terminal page.
    Leaf,
}

#[derive(Clone, Copy)]
/// One position in the route tree.
pub struct RouteNode {
    /// Node identifier.
    pub id: RouteId,
    /// Parent node; `None` only for the root.
    pub parent: Option<RouteId>,
    /// URL segment contributed by the node. Empty for pathless nodes.
    pub segment: &'static str,
    /// Structural role.
    pub kind: RouteKind,
    /// Render function mounted by the router.
    pub view: fn() -> View,
}

impl fmt::Debug for RouteNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteNode")
            .field("id", &self.id)
            .field("parent", &self.parent)
            .field("segment", &self.segment)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

fn root_view() -> View {
    view! { <RootRoute /> }.into_view()
}

fn main_layout_view() -> View {
    view! { <MainLayoutRoute /> }.into_view()
}

fn home_view() -> View {
    view! { <HomePage /> }.into_view()
}

/// Root node.
pub const ROOT: RouteNode = RouteNode {
    id: RouteId::Root,
    parent: None,
    segment: "",
    kind: RouteKind::Root,
    view: root_view,
};

/// Layout node.
pub const MAIN_LAYOUT: RouteNode = RouteNode {
    id: RouteId::MainLayout,
    parent: Some(RouteId::Root),
    segment: "",
    kind: RouteKind::Layout,
    view: main_layout_view,
};

/// Index page node.
pub const HOME: RouteNode = RouteNode {
    id: RouteId::Home,
    parent: Some(RouteId::MainLayout),
    segment: "",
    kind: RouteKind::Leaf,
    view: home_view,
};

/// The application route tree.
pub const ROUTE_TREE: RouteTree<'static> = RouteTree::new(&[ROOT, MAIN_LAYOUT, HOME]);

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Structural defects found by [`RouteTree::validate`].
pub enum RouteTreeError {
    /// No node without a parent.
    #[error("route tree has no root")]
    MissingRoot,
    /// More than one node without a parent.
    #[error("route tree has more than one root: {0} and {1}")]
    MultipleRoots(RouteId, RouteId),
    /// Two nodes share an id.
    #[error("route {0} is declared more than once")]
    DuplicateNode(RouteId),
    /// A node names a parent that is not declared.
    #[error("route {0} names undeclared parent {1}")]
    UnknownParent(RouteId, RouteId),
    /// A node cannot be reached from the root.
    #[error("route {0} is not reachable from the root")]
    Unreachable(RouteId),
}

#[derive(Debug, Clone, Copy)]
/// Read-only view over a slice of [`RouteNode`]s.
pub struct RouteTree<'a> {
    nodes: &'a [RouteNode],
}

impl<'a> RouteTree<'a> {
    /// Wraps `nodes` without validating them.
    pub const fn new(nodes: &'a [RouteNode]) -> Self {
        Self { nodes }
    }

    /// Declared nodes in declaration order.
    pub fn nodes(&self) -> &'a [RouteNode] {
        self.nodes
    }

    /// Looks up a node by id.
    pub fn node(&self, id: RouteId) -> Option<&'a RouteNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Direct children of `id`, in declaration order.
    pub fn children(&self, id: RouteId) -> impl Iterator<Item = &'a RouteNode> + 'a {
        self.nodes
            .iter()
            .filter(move |node| node.parent == Some(id))
    }

    /// Checks the single-root and single-parent invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`RouteTreeError`] found.
    pub fn validate(&self) -> Result<(), RouteTreeError> {
        for (index, node) in self.nodes.iter().enumerate() {
            if self.nodes[..index].iter().any(|seen| seen.id == node.id) {
                return Err(RouteTreeError::DuplicateNode(node.id));
            }
        }

        let mut roots = self.nodes.iter().filter(|node| node.parent.is_none());
        let root = roots.next().ok_or(RouteTreeError::MissingRoot)?;
        if let Some(extra) = roots.next() {
            return Err(RouteTreeError::MultipleRoots(root.id, extra.id));
        }

        for node in self.nodes {
            if let Some(parent) = node.parent {
                if self.node(parent).is_none() {
                    return Err(RouteTreeError::UnknownParent(node.id, parent));
                }
            }
            if self.ancestry(node.id).first() != Some(&root.id) {
                return Err(RouteTreeError::Unreachable(node.id));
            }
        }
        Ok(())
    }

    /// Root-to-node chain of ids ending at `id`.
    ///
    /// The walk is bounded by the node count, so a parent cycle yields a chain
    /// that does not start at the root instead of looping.
    pub fn ancestry(&self, id: RouteId) -> Vec<RouteId> {
        let mut chain = vec![id];
        let mut current = self.node(id).and_then(|node| node.parent);
        while let Some(parent) = current {
            if chain.len() > self.nodes.len() {
                break;
            }
            chain.push(parent);
            current = self.node(parent).and_then(|node| node.parent);
        }
        chain.reverse();
        chain
    }

    /// Nesting depth of `id`; the root is `0`.
    pub fn depth(&self, id: RouteId) -> usize {
        self.ancestry(id).len().saturating_sub(1)
    }

    /// URL path a node answers to, built from the non-empty segments of its ancestry.
    pub fn full_path(&self, id: RouteId) -> String {
        let segments: Vec<&str> = self
            .ancestry(id)
            .into_iter()
            .filter_map(|ancestor| self.node(ancestor))
            .map(|node| node.segment.trim_matches('/'))
            .filter(|segment| !segment.is_empty())
            .collect();
        format!("/{}", segments.join("/"))
    }

    /// Resolves `path` to the root-to-leaf chain that renders it.
    ///
    /// Query strings, fragments, and trailing slashes are ignored. Returns
    /// `None` when no leaf answers to the path.
    pub fn match_path(&self, path: &str) -> Option<Vec<RouteId>> {
        let wanted = normalize_path(path);
        self.nodes
            .iter()
            .filter(|node| node.kind == RouteKind::Leaf)
            .find(|node| self.full_path(node.id) == wanted)
            .map(|leaf| self.ancestry(leaf.id))
    }
}

fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();
    format!("/{}", segments.join("/"))
}
