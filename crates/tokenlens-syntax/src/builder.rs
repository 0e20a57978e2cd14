// ABOUTME: Builds source text and its syntax tree together from fragments
// ABOUTME: Only compiled for tests and the test-support feature

use tokenlens_types::TextSpan;

use crate::tree::{NodeId, SyntaxKind, SyntaxTree};

/// Appends text fragments while opening and closing nodes around them.
///
/// ```ignore
/// let mut b = TreeBuilder::new();
/// b.open(SyntaxKind::CallExpression);
/// b.leaf(SyntaxKind::Identifier, "foo");
/// b.text("(");
/// let literal = b.leaf(SyntaxKind::StringLiteral, "\"$2\"");
/// b.text(")");
/// b.close();
/// let (source, tree) = b.finish();
/// ```
pub struct TreeBuilder {
    source: String,
    tree: SyntaxTree,
    stack: Vec<NodeId>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        let tree = SyntaxTree::new(0);
        let root = tree.root();
        Self {
            source: String::new(),
            tree,
            stack: vec![root],
        }
    }

    fn parent(&self) -> NodeId {
        self.stack.last().copied().unwrap_or_else(|| self.tree.root())
    }

    /// Current byte offset.
    pub fn offset(&self) -> usize {
        self.source.len()
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.source.push_str(text);
        self
    }

    pub fn open(&mut self, kind: SyntaxKind) -> NodeId {
        let start = self.offset();
        let parent = self.parent();
        let id = self.tree.push(parent, kind, TextSpan::new(start, start));
        self.stack.push(id);
        id
    }

    pub fn close(&mut self) -> &mut Self {
        if self.stack.len() > 1 {
            if let Some(id) = self.stack.pop() {
                let end = self.offset();
                self.tree.set_end(id, end);
            }
        }
        self
    }

    pub fn leaf(&mut self, kind: SyntaxKind, text: &str) -> NodeId {
        let id = self.open(kind);
        self.text(text);
        self.close();
        id
    }

    /// `name: literal` as a property assignment. Returns the literal node.
    pub fn property(&mut self, name: &str, literal: &str) -> NodeId {
        self.open(SyntaxKind::PropertyAssignment);
        self.leaf(SyntaxKind::Identifier, name);
        self.text(": ");
        let value = self.leaf(SyntaxKind::StringLiteral, literal);
        self.close();
        value
    }

    /// `name=literal` or `name={literal}` as a JSX attribute. Returns the literal node.
    pub fn attribute(&mut self, name: &str, literal: &str, braced: bool) -> NodeId {
        self.open(SyntaxKind::JsxAttribute);
        self.leaf(SyntaxKind::Identifier, name);
        self.text("=");
        let value = if braced {
            self.open(SyntaxKind::JsxExpression);
            self.text("{");
            let value = self.leaf(SyntaxKind::StringLiteral, literal);
            self.text("}");
            self.close();
            value
        } else {
            self.leaf(SyntaxKind::StringLiteral, literal)
        };
        self.close();
        value
    }

    /// Close any open nodes and size the root to the whole source.
    pub fn finish(mut self) -> (String, SyntaxTree) {
        while self.stack.len() > 1 {
            self.close();
        }
        let root = self.tree.root();
        let end = self.offset();
        self.tree.set_end(root, end);
        (self.source, self.tree)
    }
}
