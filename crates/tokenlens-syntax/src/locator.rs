// ABOUTME: Decides whether a position sits inside a themed style property
// ABOUTME: Folds once over the enclosing nodes, innermost first, filling fixed finding slots

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::ControlFlow;

use tokenlens_logging::debug;
use tokenlens_types::{ScopeRules, TextSpan};

use crate::oracle::{TypeHandle, TypeOracle, is_themed_type};
use crate::tree::{NodeId, SyntaxKind, SyntaxTree};

static ASSIGNMENT_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+)\s*:").expect("valid assignment regex"));
static ATTRIBUTE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+)\s*=").expect("valid attribute regex"));

const QUOTES: [char; 3] = ['"', '\'', '`'];

/// What the locator found at a position. Everything but `origin_node` is
/// empty unless `in_scope`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeMatch {
    pub in_scope: bool,
    pub property_name: Option<String>,
    /// Literal text under the cursor without its quotes
    pub literal_value: Option<String>,
    /// Exactly the unquoted literal
    pub literal_span: Option<TextSpan>,
    /// The themed tag's variant props type, if it has one
    pub variants_type: Option<TypeHandle>,
    /// Innermost node at the position
    pub origin_node: Option<NodeId>,
}

impl ScopeMatch {
    pub fn miss(origin_node: Option<NodeId>) -> Self {
        Self {
            origin_node,
            ..Self::default()
        }
    }

    pub fn property(&self) -> Option<&str> {
        self.property_name.as_deref()
    }

    pub fn literal(&self) -> Option<&str> {
        self.literal_value.as_deref()
    }
}

/// The node that ended the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    StyledCall,
    ThemedType,
    ThemedTag,
    /// A tag whose type could not be checked
    LexicalTag,
    PlainTag,
    /// A call reached before any property
    PlainCall,
}

impl Boundary {
    fn in_scope(self) -> bool {
        matches!(
            self,
            Boundary::StyledCall | Boundary::ThemedType | Boundary::ThemedTag | Boundary::LexicalTag
        )
    }
}

/// Each slot is written at most once.
#[derive(Debug, Default)]
struct Findings {
    literal: Option<(String, TextSpan)>,
    property: Option<String>,
    boundary: Option<Boundary>,
    variants: Option<TypeHandle>,
}

struct Locator<'a> {
    source: &'a str,
    tree: &'a SyntaxTree,
    oracle: Option<&'a dyn TypeOracle>,
    rules: &'a ScopeRules,
}

/// Locate the style context at `position`.
///
/// Without an oracle, JSX tags are accepted on syntax alone and only styled
/// calls and tags can bound a scope.
pub fn locate(
    source: &str,
    tree: &SyntaxTree,
    position: usize,
    oracle: Option<&dyn TypeOracle>,
    rules: &ScopeRules,
) -> ScopeMatch {
    let path = tree.path_at(position);
    let origin = path.first().copied();
    if path.len() < 2 {
        debug!(position, depth = path.len(), "Too few enclosing nodes for a style context");
        return ScopeMatch::miss(origin);
    }

    let locator = Locator {
        source,
        tree,
        oracle,
        rules,
    };
    let findings = match path
        .iter()
        .try_fold(Findings::default(), |found, &node| locator.step(found, node))
    {
        ControlFlow::Break(found) | ControlFlow::Continue(found) => found,
    };

    let in_scope =
        findings.boundary.is_some_and(Boundary::in_scope) && findings.property.is_some();
    debug!(
        position,
        in_scope,
        boundary = ?findings.boundary,
        property = ?findings.property,
        literal = ?findings.literal,
        "Located style context"
    );
    if !in_scope {
        return ScopeMatch::miss(origin);
    }

    let (literal_value, literal_span) = findings.literal.unzip();
    ScopeMatch {
        in_scope: true,
        property_name: findings.property,
        literal_value,
        literal_span,
        variants_type: findings.variants,
        origin_node: origin,
    }
}

impl Locator<'_> {
    fn step(&self, mut found: Findings, node: NodeId) -> ControlFlow<Findings, Findings> {
        let Some(kind) = self.tree.kind(node) else {
            return ControlFlow::Continue(found);
        };

        if found.property.is_none() && found.literal.is_none() {
            found.literal = self.literal_at(node, kind);
        }
        if found.property.is_none()
            && matches!(kind, SyntaxKind::PropertyAssignment | SyntaxKind::JsxAttribute)
        {
            found.property = self.property_name(node, kind);
        }

        if kind == SyntaxKind::CallExpression && self.is_styled_call(node) {
            found.boundary = Some(Boundary::StyledCall);
            return ControlFlow::Break(found);
        }
        if kind.is_jsx_element() {
            let (boundary, variants) = self.tag_boundary(node);
            found.boundary = Some(boundary);
            found.variants = variants;
            return ControlFlow::Break(found);
        }
        if self.has_themed_type(node) {
            found.boundary = Some(Boundary::ThemedType);
            return ControlFlow::Break(found);
        }
        if kind == SyntaxKind::CallExpression && found.property.is_none() {
            found.boundary = Some(Boundary::PlainCall);
            return ControlFlow::Break(found);
        }
        ControlFlow::Continue(found)
    }

    fn literal_at(&self, node: NodeId, kind: SyntaxKind) -> Option<(String, TextSpan)> {
        match kind {
            SyntaxKind::StringLiteral => self.unquoted(node),
            // The attribute itself is under the cursor: use its initializer,
            // looking through one `{ }` container.
            SyntaxKind::JsxAttribute => self
                .tree
                .children(node)
                .iter()
                .skip(1)
                .find_map(|&child| match self.tree.kind(child)? {
                    SyntaxKind::StringLiteral => Some(child),
                    SyntaxKind::JsxExpression => {
                        self.tree.first_child_of_kind(child, SyntaxKind::StringLiteral)
                    }
                    _ => None,
                })
                .and_then(|literal| self.unquoted(literal)),
            SyntaxKind::Other if self.has_string_literal_type(node) => self.unquoted(node),
            _ => None,
        }
    }

    fn unquoted(&self, node: NodeId) -> Option<(String, TextSpan)> {
        let span = self.tree.span(node)?;
        let (inner, start, end) = strip_quotes(self.tree.text(node, self.source));
        Some((inner.to_string(), TextSpan::new(span.start + start, span.start + end)))
    }

    fn property_name(&self, node: NodeId, kind: SyntaxKind) -> Option<String> {
        let structured = self.tree.children(node).first().and_then(|&name| {
            let text = self.tree.text(name, self.source);
            match self.tree.kind(name)? {
                SyntaxKind::Identifier => Some(text.to_string()),
                SyntaxKind::StringLiteral => Some(strip_quotes(text).0.to_string()),
                _ => None,
            }
        });
        structured
            .filter(|name| !name.is_empty())
            .or_else(|| lexical_property_name(self.tree.text(node, self.source), kind))
    }

    fn is_styled_call(&self, call: NodeId) -> bool {
        let Some(&callee) = self.tree.children(call).first() else {
            return false;
        };
        let callee = self.tree.text(callee, self.source).trim();
        let name = callee.rsplit('.').next().unwrap_or(callee);
        self.rules.is_styled_factory(name)
    }

    fn tag_boundary(&self, element: NodeId) -> (Boundary, Option<TypeHandle>) {
        let Some(oracle) = self.oracle else {
            return (Boundary::LexicalTag, None);
        };
        // The tag name may be an identifier or a member access (`Ui.Box`).
        let Some(&tag) = self.tree.children(element).first() else {
            return (Boundary::LexicalTag, None);
        };
        let Some(ty) = oracle.resolve_type_at(tag) else {
            return (Boundary::LexicalTag, None);
        };

        if is_themed_type(oracle, ty, self.rules) {
            let variants = oracle.property_type(ty, &self.rules.variant_props_marker);
            (Boundary::ThemedTag, variants)
        } else {
            debug!(
                tag = self.tree.text(tag, self.source),
                type_name = %oracle.type_name(ty),
                "Tag is not a themed component"
            );
            (Boundary::PlainTag, None)
        }
    }

    fn has_themed_type(&self, node: NodeId) -> bool {
        self.oracle.is_some_and(|oracle| {
            oracle
                .resolve_type_at(node)
                .is_some_and(|ty| is_themed_type(oracle, ty, self.rules))
        })
    }

    fn has_string_literal_type(&self, node: NodeId) -> bool {
        self.oracle.is_some_and(|oracle| {
            oracle
                .resolve_type_at(node)
                .is_some_and(|ty| oracle.is_string_literal(ty))
        })
    }
}

/// Leading identifier of an assignment (`name:`) or attribute (`name=`).
///
/// Used when the host tree does not give the name its own node.
pub fn lexical_property_name(text: &str, kind: SyntaxKind) -> Option<String> {
    let pattern = match kind {
        SyntaxKind::PropertyAssignment => &ASSIGNMENT_NAME,
        SyntaxKind::JsxAttribute => &ATTRIBUTE_NAME,
        _ => return None,
    };
    pattern
        .captures(text.trim_start())
        .map(|captures| captures[1].to_string())
}

/// Strip one quote character from each end. Returns the inner text and its
/// byte range within `text`.
fn strip_quotes(text: &str) -> (&str, usize, usize) {
    let start = usize::from(text.starts_with(QUOTES));
    let end = if text.len() > start && text.ends_with(QUOTES) {
        text.len() - 1
    } else {
        text.len()
    };
    (&text[start..end], start, end)
}
