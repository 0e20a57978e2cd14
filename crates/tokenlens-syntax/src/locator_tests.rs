// ABOUTME: Scenario tests for the style-context locator
// ABOUTME: Trees are built from fragments, types come from the mock oracle

use tokenlens_types::{ScopeRules, TextSpan};

use crate::builder::TreeBuilder;
use crate::locator::{lexical_property_name, locate};
use crate::mock_oracle::MockOracle;
use crate::tree::{NodeId, SyntaxKind, SyntaxTree};

struct Fixture {
    source: String,
    tree: SyntaxTree,
    literal: NodeId,
}

impl Fixture {
    fn inside_literal(&self) -> usize {
        self.tree.span(self.literal).unwrap().start + 1
    }
}

/// `styled(View, { <property>: <literal> })`
fn styled_call(factory: &str, property: &str, literal: &str) -> Fixture {
    let mut b = TreeBuilder::new();
    b.open(SyntaxKind::CallExpression);
    b.leaf(SyntaxKind::Identifier, factory);
    b.text("(");
    b.leaf(SyntaxKind::Identifier, "View");
    b.text(", ");
    b.open(SyntaxKind::ObjectLiteral);
    b.text("{ ");
    let literal = b.property(property, literal);
    b.text(" })");
    let (source, tree) = b.finish();
    Fixture {
        source,
        tree,
        literal,
    }
}

/// `<Tag name=literal />`, returning the tag identifier too.
fn jsx_element(tag: &str, name: &str, literal: &str, braced: bool) -> (Fixture, NodeId) {
    let mut b = TreeBuilder::new();
    b.open(SyntaxKind::JsxSelfClosingElement);
    b.text("<");
    let tag = b.leaf(SyntaxKind::Identifier, tag);
    b.text(" ");
    b.open(SyntaxKind::Other);
    let literal = b.attribute(name, literal, braced);
    b.close();
    b.text(" />");
    let (source, tree) = b.finish();
    (
        Fixture {
            source,
            tree,
            literal,
        },
        tag,
    )
}

#[test]
fn test_styled_call_property_is_in_scope() {
    let fixture = styled_call("styled", "padding", "\"$2\"");
    let found = locate(
        &fixture.source,
        &fixture.tree,
        fixture.inside_literal(),
        None,
        &ScopeRules::default(),
    );

    assert!(found.in_scope);
    assert_eq!(found.property(), Some("padding"));
    assert_eq!(found.literal(), Some("$2"));
    let span = found.literal_span.unwrap();
    assert_eq!(&fixture.source[span.start..span.end], "$2");
    assert_eq!(found.origin_node, Some(fixture.literal));
}

#[test]
fn test_unknown_factory_is_not_a_scope() {
    let fixture = styled_call("create", "padding", "\"$2\"");
    let found = locate(
        &fixture.source,
        &fixture.tree,
        fixture.inside_literal(),
        None,
        &ScopeRules::default(),
    );
    assert!(!found.in_scope);
    assert_eq!(found.property(), None);

    let rules = ScopeRules {
        styled_factories: vec!["create".to_string()],
        ..Default::default()
    };
    let found = locate(
        &fixture.source,
        &fixture.tree,
        fixture.inside_literal(),
        None,
        &rules,
    );
    assert!(found.in_scope);
}

#[test]
fn test_plain_call_argument_is_out_of_scope() {
    let mut b = TreeBuilder::new();
    b.open(SyntaxKind::CallExpression);
    b.leaf(SyntaxKind::Identifier, "foo");
    b.text("(");
    let literal = b.leaf(SyntaxKind::StringLiteral, "\"$2\"");
    b.text(")");
    let (source, tree) = b.finish();
    let position = tree.span(literal).unwrap().start + 1;

    let found = locate(&source, &tree, position, None, &ScopeRules::default());
    assert!(!found.in_scope);
    assert_eq!(found.literal(), None);
    assert_eq!(found.origin_node, Some(literal));
}

#[test]
fn test_nested_call_inside_styled_object_is_out_of_scope() {
    let mut b = TreeBuilder::new();
    b.open(SyntaxKind::CallExpression);
    b.leaf(SyntaxKind::Identifier, "styled");
    b.text("(View, ");
    b.open(SyntaxKind::ObjectLiteral);
    b.text("{ ");
    b.open(SyntaxKind::PropertyAssignment);
    b.leaf(SyntaxKind::Identifier, "padding");
    b.text(": ");
    b.open(SyntaxKind::CallExpression);
    b.leaf(SyntaxKind::Identifier, "calc");
    b.text("(");
    let literal = b.leaf(SyntaxKind::StringLiteral, "\"$2\"");
    b.text(")");
    b.close();
    b.close();
    b.text(" })");
    let (source, tree) = b.finish();
    let position = tree.span(literal).unwrap().start + 1;

    let found = locate(&source, &tree, position, None, &ScopeRules::default());
    assert!(!found.in_scope);
}

#[test]
fn test_short_path_is_out_of_scope() {
    let mut b = TreeBuilder::new();
    let literal = b.leaf(SyntaxKind::StringLiteral, "\"$2\"");
    let (source, tree) = b.finish();
    let found = locate(&source, &tree, 1, None, &ScopeRules::default());
    assert!(!found.in_scope);
    assert_eq!(found.origin_node, Some(literal));
}

#[test]
fn test_literal_without_property_is_out_of_scope() {
    let mut b = TreeBuilder::new();
    b.open(SyntaxKind::CallExpression);
    b.leaf(SyntaxKind::Identifier, "styled");
    b.text("(");
    let literal = b.leaf(SyntaxKind::StringLiteral, "\"$2\"");
    b.text(")");
    let (source, tree) = b.finish();
    let position = tree.span(literal).unwrap().start + 1;

    let found = locate(&source, &tree, position, None, &ScopeRules::default());
    assert!(!found.in_scope);
}

#[test]
fn test_jsx_attribute_without_oracle_degrades_to_syntax() {
    let (fixture, _) = jsx_element("View", "bg", "\"$blue\"", false);
    let found = locate(
        &fixture.source,
        &fixture.tree,
        fixture.inside_literal(),
        None,
        &ScopeRules::default(),
    );
    assert!(found.in_scope);
    assert_eq!(found.property(), Some("bg"));
    assert_eq!(found.literal(), Some("$blue"));
    assert_eq!(found.variants_type, None);
}

#[test]
fn test_attribute_name_unwraps_braced_literal() {
    let (fixture, _) = jsx_element("View", "bg", "'$blue'", true);
    let on_name = fixture.source.find("bg").unwrap() + 1;

    let found = locate(
        &fixture.source,
        &fixture.tree,
        on_name,
        None,
        &ScopeRules::default(),
    );
    assert!(found.in_scope);
    assert_eq!(found.property(), Some("bg"));
    assert_eq!(found.literal(), Some("$blue"));
    let span = found.literal_span.unwrap();
    assert_eq!(&fixture.source[span.start..span.end], "$blue");
}

#[test]
fn test_themed_tag_reports_variants_type() {
    let (fixture, tag) = jsx_element("Button", "size", "\"$4\"", false);
    let mut oracle = MockOracle::new();
    let component = oracle.define("TamaguiComponent<ButtonProps>");
    let variants = oracle.define("ButtonVariants");
    oracle
        .add_property(component, "___variantProps", variants)
        .assign(tag, component);

    let found = locate(
        &fixture.source,
        &fixture.tree,
        fixture.inside_literal(),
        Some(&oracle),
        &ScopeRules::default(),
    );
    assert!(found.in_scope);
    assert_eq!(found.variants_type, Some(variants));
}

#[test]
fn test_marker_property_marks_tag_as_themed() {
    let (fixture, tag) = jsx_element("Card", "padding", "\"$4\"", false);
    let mut oracle = MockOracle::new();
    let component = oracle.define("NamedExoticComponent<CardProps>");
    let config = oracle.define("StaticConfig");
    oracle
        .add_property(component, "staticConfig", config)
        .assign(tag, component);

    let found = locate(
        &fixture.source,
        &fixture.tree,
        fixture.inside_literal(),
        Some(&oracle),
        &ScopeRules::default(),
    );
    assert!(found.in_scope);
    assert_eq!(found.variants_type, None);
}

#[test]
fn test_plain_tag_with_type_information_is_out_of_scope() {
    let (fixture, tag) = jsx_element("div", "color", "\"$blue\"", false);
    let mut oracle = MockOracle::new();
    let intrinsic = oracle.define("DetailedHTMLProps<HTMLDivElement>");
    oracle.assign(tag, intrinsic);

    let found = locate(
        &fixture.source,
        &fixture.tree,
        fixture.inside_literal(),
        Some(&oracle),
        &ScopeRules::default(),
    );
    assert!(!found.in_scope);
}

#[test]
fn test_unresolved_tag_type_degrades_to_syntax() {
    let (fixture, _) = jsx_element("View", "bg", "\"$blue\"", false);
    let oracle = MockOracle::new();
    let found = locate(
        &fixture.source,
        &fixture.tree,
        fixture.inside_literal(),
        Some(&oracle),
        &ScopeRules::default(),
    );
    assert!(found.in_scope);
}

#[test]
fn test_themed_expression_type_bounds_the_scope() {
    let mut b = TreeBuilder::new();
    let call = b.open(SyntaxKind::CallExpression);
    b.leaf(SyntaxKind::Identifier, "make");
    b.text("(");
    b.open(SyntaxKind::ObjectLiteral);
    b.text("{ ");
    let literal = b.property("borderRadius", "\"$4\"");
    b.text(" })");
    let (source, tree) = b.finish();
    let position = tree.span(literal).unwrap().start + 1;

    assert!(!locate(&source, &tree, position, None, &ScopeRules::default()).in_scope);

    let mut oracle = MockOracle::new();
    let themed = oracle.define("TamaguiComponent");
    oracle.assign(call, themed);
    let found = locate(&source, &tree, position, Some(&oracle), &ScopeRules::default());
    assert!(found.in_scope);
    assert_eq!(found.property(), Some("borderRadius"));
}

#[test]
fn test_string_literal_typed_node_is_a_literal() {
    let mut b = TreeBuilder::new();
    b.open(SyntaxKind::CallExpression);
    b.leaf(SyntaxKind::Identifier, "styled");
    b.text("(View, ");
    b.open(SyntaxKind::ObjectLiteral);
    b.text("{ ");
    b.open(SyntaxKind::PropertyAssignment);
    b.leaf(SyntaxKind::Identifier, "margin");
    b.text(": ");
    let template = b.leaf(SyntaxKind::Other, "`$3`");
    b.close();
    b.text(" })");
    let (source, tree) = b.finish();
    let position = tree.span(template).unwrap().start + 1;

    let mut oracle = MockOracle::new();
    let literal_type = oracle.define("\"$3\"");
    oracle.mark_string_literal(literal_type).assign(template, literal_type);

    let found = locate(&source, &tree, position, Some(&oracle), &ScopeRules::default());
    assert!(found.in_scope);
    assert_eq!(found.literal(), Some("$3"));
    assert_eq!(found.literal_span.map(|span| span.len()), Some(2));
}

#[test]
fn test_quoted_property_key() {
    let mut b = TreeBuilder::new();
    b.open(SyntaxKind::CallExpression);
    b.leaf(SyntaxKind::Identifier, "styled");
    b.text("(View, ");
    b.open(SyntaxKind::ObjectLiteral);
    b.text("{ ");
    b.open(SyntaxKind::PropertyAssignment);
    b.leaf(SyntaxKind::StringLiteral, "\"paddingTop\"");
    b.text(": ");
    let literal = b.leaf(SyntaxKind::StringLiteral, "'$1'");
    b.close();
    b.text(" })");
    let (source, tree) = b.finish();
    let position = tree.span(literal).unwrap().start + 1;

    let found = locate(&source, &tree, position, None, &ScopeRules::default());
    assert!(found.in_scope);
    assert_eq!(found.property(), Some("paddingTop"));
    assert_eq!(found.literal(), Some("$1"));
}

#[test]
fn test_structured_and_lexical_names_agree() {
    let cases = [
        ("padding", "\"$2\""),
        ("bg", "'$blue'"),
        ("zIndex", "\"$1\""),
        ("borderTopLeftRadius", "\"$true\""),
    ];
    for (name, literal) in cases {
        let fixture = styled_call("styled", name, literal);
        let assignment = fixture
            .tree
            .node(fixture.literal)
            .and_then(|node| node.parent)
            .unwrap();
        let text = fixture.tree.text(assignment, &fixture.source);
        assert_eq!(
            lexical_property_name(text, SyntaxKind::PropertyAssignment).as_deref(),
            Some(name)
        );
        let found = locate(
            &fixture.source,
            &fixture.tree,
            fixture.inside_literal(),
            None,
            &ScopeRules::default(),
        );
        assert_eq!(found.property(), Some(name));

        let (fixture, _) = jsx_element("View", name, literal, false);
        let attribute = fixture
            .tree
            .node(fixture.literal)
            .and_then(|node| node.parent)
            .unwrap();
        let text = fixture.tree.text(attribute, &fixture.source);
        assert_eq!(
            lexical_property_name(text, SyntaxKind::JsxAttribute).as_deref(),
            Some(name)
        );
    }
}

#[test]
fn test_literal_span_excludes_quotes() {
    let fixture = styled_call("styled", "padding", "\"$space.2\"");
    let found = locate(
        &fixture.source,
        &fixture.tree,
        fixture.inside_literal(),
        None,
        &ScopeRules::default(),
    );
    let literal_span = fixture.tree.span(fixture.literal).unwrap();
    assert_eq!(
        found.literal_span,
        Some(TextSpan::new(literal_span.start + 1, literal_span.end - 1))
    );
}

/// `<Ui.Box padding="$2" />`, returning the member-access tag node.
fn member_tag_element() -> (Fixture, NodeId) {
    let mut b = TreeBuilder::new();
    b.open(SyntaxKind::JsxSelfClosingElement);
    b.text("<");
    let tag = b.open(SyntaxKind::Other);
    b.leaf(SyntaxKind::Identifier, "Ui");
    b.text(".");
    b.leaf(SyntaxKind::Identifier, "Box");
    b.close();
    b.text(" ");
    b.open(SyntaxKind::Other);
    let literal = b.attribute("padding", "\"$2\"", false);
    b.close();
    b.text(" />");
    let (source, tree) = b.finish();
    (
        Fixture {
            source,
            tree,
            literal,
        },
        tag,
    )
}

#[test]
fn test_member_access_tag_is_type_checked() {
    let (fixture, tag) = member_tag_element();
    let mut oracle = MockOracle::new();
    let plain = oracle.define("FC<BoxProps>");
    oracle.assign(tag, plain);

    let found = locate(
        &fixture.source,
        &fixture.tree,
        fixture.inside_literal(),
        Some(&oracle),
        &ScopeRules::default(),
    );
    assert!(!found.in_scope);

    let mut oracle = MockOracle::new();
    let themed = oracle.define("TamaguiComponent<BoxProps>");
    oracle.assign(tag, themed);
    let found = locate(
        &fixture.source,
        &fixture.tree,
        fixture.inside_literal(),
        Some(&oracle),
        &ScopeRules::default(),
    );
    assert!(found.in_scope);
    assert_eq!(found.property(), Some("padding"));
    assert_eq!(found.literal(), Some("$2"));
}
