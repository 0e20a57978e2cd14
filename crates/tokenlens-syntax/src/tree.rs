// ABOUTME: Arena-backed syntax tree the host fills from its own parser
// ABOUTME: Nodes carry a kind, a byte span and ordered children

use slotmap::{SlotMap, new_key_type};
use tokenlens_types::TextSpan;

new_key_type! {
    /// Handle to a node in a [`SyntaxTree`].
    pub struct NodeId;
}

/// The node kinds the locator distinguishes. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    SourceFile,
    CallExpression,
    Identifier,
    PropertyAssignment,
    ObjectLiteral,
    StringLiteral,
    JsxOpeningElement,
    JsxSelfClosingElement,
    JsxAttribute,
    JsxSpreadAttribute,
    JsxExpression,
    Other,
}

impl SyntaxKind {
    pub fn is_jsx_element(self) -> bool {
        matches!(
            self,
            SyntaxKind::JsxOpeningElement | SyntaxKind::JsxSelfClosingElement
        )
    }
}

#[derive(Debug, Clone)]
pub struct SyntaxNode {
    pub kind: SyntaxKind,
    pub span: TextSpan,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// A nested node description, for hosts that already have an owned tree.
#[derive(Debug, Clone)]
pub struct OutlineNode {
    pub kind: SyntaxKind,
    pub span: TextSpan,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    pub fn new(kind: SyntaxKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            span: TextSpan::new(start, end),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: OutlineNode) -> Self {
        self.children.push(child);
        self
    }
}

#[derive(Debug, Clone)]
pub struct SyntaxTree {
    nodes: SlotMap<NodeId, SyntaxNode>,
    root: NodeId,
}

impl SyntaxTree {
    /// A tree holding only a `SourceFile` root spanning `0..len`.
    pub fn new(len: usize) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(SyntaxNode {
            kind: SyntaxKind::SourceFile,
            span: TextSpan::new(0, len),
            parent: None,
            children: Vec::new(),
        });
        Self { nodes, root }
    }

    pub fn from_outline(outline: &OutlineNode) -> Self {
        let mut tree = Self::new(outline.span.end);
        if let Some(root) = tree.nodes.get_mut(tree.root) {
            root.kind = outline.kind;
            root.span = outline.span;
        }
        let root = tree.root;
        for child in &outline.children {
            tree.push_outline(root, child);
        }
        tree
    }

    fn push_outline(&mut self, parent: NodeId, outline: &OutlineNode) {
        let id = self.push(parent, outline.kind, outline.span);
        for child in &outline.children {
            self.push_outline(id, child);
        }
    }

    /// Append a child to `parent`. Children must be pushed in source order.
    pub fn push(&mut self, parent: NodeId, kind: SyntaxKind, span: TextSpan) -> NodeId {
        let id = self.nodes.insert(SyntaxNode {
            kind,
            span,
            parent: Some(parent),
            children: Vec::new(),
        });
        if let Some(parent) = self.nodes.get_mut(parent) {
            parent.children.push(id);
        }
        id
    }

    pub(crate) fn set_end(&mut self, id: NodeId, end: usize) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.span.end = end;
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&SyntaxNode> {
        self.nodes.get(id)
    }

    pub fn kind(&self, id: NodeId) -> Option<SyntaxKind> {
        self.nodes.get(id).map(|node| node.kind)
    }

    pub fn span(&self, id: NodeId) -> Option<TextSpan> {
        self.nodes.get(id).map(|node| node.span)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn first_child_of_kind(&self, id: NodeId, kind: SyntaxKind) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|child| self.kind(*child) == Some(kind))
    }

    /// Source text covered by `id`; empty if the span falls outside `source`.
    pub fn text<'s>(&self, id: NodeId, source: &'s str) -> &'s str {
        self.span(id)
            .and_then(|span| source.get(span.start..span.end))
            .unwrap_or("")
    }

    /// Nodes enclosing `position`, innermost first, not including the root.
    ///
    /// At each level the first child whose span touches `position` is taken,
    /// so a position on the boundary of two siblings belongs to the earlier one.
    pub fn path_at(&self, position: usize) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = self.root;
        while let Some(next) = self
            .children(current)
            .iter()
            .copied()
            .find(|child| self.span(*child).is_some_and(|span| span.touches(position)))
        {
            path.push(next);
            current = next;
        }
        path.reverse();
        path
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }
}
