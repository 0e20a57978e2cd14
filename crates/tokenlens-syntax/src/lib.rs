// ABOUTME: Host syntax tree, type capability and the style-context locator
// ABOUTME: The host converts its own AST into this arena before each request

pub mod locator;
pub mod oracle;
pub mod tree;

#[cfg(any(test, feature = "test-support"))]
pub mod builder;
#[cfg(any(test, feature = "test-support"))]
pub mod mock_oracle;

#[cfg(test)]
mod locator_tests;

pub use locator::{ScopeMatch, lexical_property_name, locate};
pub use oracle::{TypeHandle, TypeOracle, is_themed_type};
pub use tree::{NodeId, OutlineNode, SyntaxKind, SyntaxNode, SyntaxTree};
