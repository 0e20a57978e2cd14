// ABOUTME: End-to-end tests of the completion, completion-resolve and hover hooks
// ABOUTME: Documents come from a fixture host; types from the syntax crate's mock oracle

use lsp_types::{
    CompletionItem, CompletionItemKind, CompletionList, CompletionResponse, Documentation, Hover,
    HoverContents, MarkupContent, MarkupKind, Position, Range,
};
use std::sync::Arc;

use tokenlens_core::{ConfigStore, TokenConfig, sort_key};
use tokenlens_syntax::builder::TreeBuilder;
use tokenlens_syntax::mock_oracle::MockOracle;
use tokenlens_syntax::{NodeId, SyntaxKind, SyntaxTree, TypeOracle};
use tokenlens_types::{Category, CustomFilter, PluginOptions};

use crate::host::{DocumentHost, HostDocument};
use crate::service::TokenLens;

const FILE: &str = "/app/src/Box.tsx";

struct FixtureHost {
    source: String,
    tree: SyntaxTree,
    oracle: Option<MockOracle>,
    literal: NodeId,
}

impl DocumentHost for FixtureHost {
    fn document(&self, file: &str) -> Option<HostDocument<'_>> {
        (file == FILE).then(|| HostDocument {
            source: &self.source,
            tree: &self.tree,
            oracle: self.oracle.as_ref().map(|oracle| oracle as &dyn TypeOracle),
        })
    }
}

impl FixtureHost {
    fn inside_literal(&self) -> usize {
        self.tree.span(self.literal).unwrap().start + 1
    }
}

/// `styled(View, { <property>: <literal> })`
fn styled_host(property: &str, literal: &str) -> FixtureHost {
    let mut b = TreeBuilder::new();
    b.open(SyntaxKind::CallExpression);
    b.leaf(SyntaxKind::Identifier, "styled");
    b.text("(View, ");
    b.open(SyntaxKind::ObjectLiteral);
    b.text("{ ");
    let literal = b.property(property, literal);
    b.text(" })");
    let (source, tree) = b.finish();
    FixtureHost {
        source,
        tree,
        oracle: None,
        literal,
    }
}

/// `foo(<literal>)`
fn plain_call_host(literal: &str) -> FixtureHost {
    let mut b = TreeBuilder::new();
    b.open(SyntaxKind::CallExpression);
    b.leaf(SyntaxKind::Identifier, "foo");
    b.text("(");
    let literal = b.leaf(SyntaxKind::StringLiteral, literal);
    b.text(")");
    let (source, tree) = b.finish();
    FixtureHost {
        source,
        tree,
        oracle: None,
        literal,
    }
}

/// `<Button size=<literal> />` with a themed tag type that has variants.
fn themed_button_host(literal: &str) -> FixtureHost {
    let mut b = TreeBuilder::new();
    b.open(SyntaxKind::JsxSelfClosingElement);
    b.text("<");
    let tag = b.leaf(SyntaxKind::Identifier, "Button");
    b.text(" ");
    b.open(SyntaxKind::Other);
    let literal = b.attribute("size", literal, false);
    b.close();
    b.text(" />");
    let (source, tree) = b.finish();

    let mut oracle = MockOracle::new();
    let component = oracle.define("TamaguiComponent<ButtonProps>");
    let variants = oracle.define("ButtonVariants");
    oracle
        .add_property(component, "___variantProps", variants)
        .assign(tag, component)
        .set_variants(
            variants,
            &[("size", &["small", "large"][..]), ("chromeless", &["true"][..])],
        );

    FixtureHost {
        source,
        tree,
        oracle: Some(oracle),
        literal,
    }
}

fn config() -> TokenConfig {
    TokenConfig::new()
        .with_token(Category::Space, "$2", "8px")
        .with_token(Category::Space, "$10", "40px")
        .with_token(Category::Space, "$true", "16px")
        .with_token(Category::Size, "$4", "44px")
        .with_token(Category::Color, "$red", "#ff0000")
        .with_shorthand("px", "paddingHorizontal")
        .with_shorthand("bg", "backgroundColor")
        .with_theme_color("$blue", "dark", "#3333ff")
        .with_theme_color("$blue", "light", "#0000ff")
}

fn service(options: PluginOptions) -> TokenLens {
    TokenLens::new(options, Arc::new(ConfigStore::with_config(config())))
}

fn dark_options() -> PluginOptions {
    PluginOptions {
        default_theme: "dark".to_string(),
        ..Default::default()
    }
}

fn items(labels: &[&str]) -> CompletionResponse {
    CompletionResponse::Array(
        labels
            .iter()
            .map(|label| CompletionItem::new_simple(label.to_string(), String::new()))
            .collect(),
    )
}

fn item_list(response: CompletionResponse) -> Vec<CompletionItem> {
    match response {
        CompletionResponse::Array(items) => items,
        CompletionResponse::List(list) => list.items,
    }
}

fn markdown(documentation: Option<&Documentation>) -> String {
    match documentation {
        Some(Documentation::MarkupContent(content)) => content.value.clone(),
        other => panic!("expected markdown documentation, got {other:?}"),
    }
}

fn hover_text(hover: &Hover) -> String {
    match &hover.contents {
        HoverContents::Markup(content) => content.value.clone(),
        other => panic!("expected markup hover, got {other:?}"),
    }
}

#[test]
fn test_space_completions_are_labelled_and_sorted() {
    let host = styled_host("padding", "\"$2\"");
    let lens = service(PluginOptions::default());

    let response = lens
        .completions(&host, FILE, host.inside_literal(), Some(items(&["$2", "$10", "$unknown"])))
        .unwrap();
    let items = item_list(response);
    assert_eq!(items.len(), 3);

    let two = &items[0];
    assert_eq!(two.sort_text.as_deref(), Some(sort_key("$2").as_str()));
    let details = two.label_details.as_ref().unwrap();
    assert_eq!(details.detail.as_deref(), Some(" 8px"));
    assert_eq!(details.description.as_deref(), Some("SpaceToken"));
    assert_eq!(two.kind, None);

    assert!(items[0].sort_text < items[1].sort_text);
    assert_eq!(items[2].label_details, None);
    assert_eq!(items[2].sort_text, None);
}

#[test]
fn test_completion_list_shape_is_kept() {
    let host = styled_host("padding", "\"$2\"");
    let lens = service(PluginOptions::default());
    let base = CompletionResponse::List(CompletionList {
        is_incomplete: true,
        items: vec![CompletionItem::new_simple("$2".to_string(), String::new())],
    });

    match lens.completions(&host, FILE, host.inside_literal(), Some(base)) {
        Some(CompletionResponse::List(list)) => {
            assert!(list.is_incomplete);
            assert!(list.items[0].label_details.is_some());
        }
        other => panic!("expected a completion list, got {other:?}"),
    }
}

#[test]
fn test_theme_colors_sort_first_with_default_theme_value() {
    let host = styled_host("bg", "\"$blue\"");
    let lens = service(dark_options());

    let response = lens
        .completions(&host, FILE, host.inside_literal(), Some(items(&["$red", "$blue"])))
        .unwrap();
    let items = item_list(response);

    let red = &items[0];
    let blue = &items[1];
    assert_eq!(blue.kind, Some(CompletionItemKind::COLOR));
    assert_eq!(red.kind, Some(CompletionItemKind::COLOR));
    let details = blue.label_details.as_ref().unwrap();
    assert_eq!(details.detail.as_deref(), Some(" #3333ff"));
    assert_eq!(details.description.as_deref(), Some("ThemeToken"));
    assert_eq!(
        red.label_details.as_ref().unwrap().description.as_deref(),
        Some("ColorToken")
    );
    assert!(blue.sort_text < red.sort_text);
}

#[test]
fn test_completion_filters() {
    let host = styled_host("padding", "\"$2\"");
    let mut options = PluginOptions::default();
    options.completion_filters.show_true_tokens = false;
    options
        .completion_filters
        .custom
        .deny
        .insert("space".to_string(), vec!["$10".to_string()]);
    let lens = service(options);

    let response = lens
        .completions(&host, FILE, host.inside_literal(), Some(items(&["$2", "$10", "$true"])))
        .unwrap();
    let labels: Vec<String> = item_list(response).into_iter().map(|item| item.label).collect();
    assert_eq!(labels, vec!["$2"]);
}

#[test]
fn test_color_scale_filter_keeps_theme_colors() {
    let host = styled_host("color", "\"$blue\"");
    let mut options = dark_options();
    options.completion_filters.show_color_tokens = false;
    let lens = service(options);

    let response = lens
        .completions(&host, FILE, host.inside_literal(), Some(items(&["$red", "$blue"])))
        .unwrap();
    let labels: Vec<String> = item_list(response).into_iter().map(|item| item.label).collect();
    assert_eq!(labels, vec!["$blue"]);
}

#[test]
fn test_custom_predicate_hides_theme_colors() {
    let host = styled_host("color", "\"$blue\"");
    let mut options = dark_options();
    options.completion_filters.custom =
        CustomFilter::default().with_predicate(|category, token| category == "themeColor" && token == "$blue");
    let lens = service(options);

    let response = lens
        .completions(&host, FILE, host.inside_literal(), Some(items(&["$red", "$blue"])))
        .unwrap();
    let labels: Vec<String> = item_list(response).into_iter().map(|item| item.label).collect();
    assert_eq!(labels, vec!["$red"]);
}

#[test]
fn test_details_document_space_token() {
    let host = styled_host("padding", "\"$2\"");
    let lens = service(PluginOptions::default());
    let base = CompletionItem::new_simple("$2".to_string(), String::new());

    let item = lens
        .completion_details(&host, FILE, host.inside_literal(), "$2", Some(base))
        .unwrap();
    let doc = markdown(item.documentation.as_ref());
    assert!(doc.starts_with("| Scale | Value |\n| --- | --- |\n| Space | 8px |"));
    assert!(!doc.contains("short for"));
}

#[test]
fn test_details_for_shorthand_are_idempotent() {
    let host = styled_host("px", "\"$2\"");
    let lens = service(PluginOptions::default());
    let base = CompletionItem {
        documentation: Some(Documentation::String("host docs".to_string())),
        ..CompletionItem::new_simple("'$2'".to_string(), String::new())
    };

    let once = lens
        .completion_details(&host, FILE, host.inside_literal(), "'$2'", Some(base))
        .unwrap();
    let twice = lens
        .completion_details(&host, FILE, host.inside_literal(), "'$2'", Some(once.clone()))
        .unwrap();

    let doc = markdown(twice.documentation.as_ref());
    assert_eq!(doc, markdown(once.documentation.as_ref()));
    assert_eq!(doc.matches("`px` is short for `paddingHorizontal`").count(), 1);
    assert_eq!(doc.matches("| Space | 8px |").count(), 1);
    assert!(doc.ends_with("host docs"));
}

#[test]
fn test_details_without_base_stay_absent() {
    let host = styled_host("padding", "\"$2\"");
    let lens = service(PluginOptions::default());
    assert_eq!(
        lens.completion_details(&host, FILE, host.inside_literal(), "$2", None),
        None
    );
}

#[test]
fn test_hover_creates_theme_table_for_shorthand() {
    let host = styled_host("bg", "\"$blue\"");
    let lens = service(dark_options());

    let hover = lens.hover(&host, FILE, host.inside_literal(), None).unwrap();
    let text = hover_text(&hover);
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows[0], "| Color | Theme | Value |");
    assert!(rows[2].contains("**Dark**"));
    assert!(rows[2].ends_with("`#3333ff` |"));
    assert!(text.contains("`bg` is short for `backgroundColor`"));

    let literal_start = host.source.find("$blue").unwrap() as u32;
    assert_eq!(
        hover.range,
        Some(Range::new(
            Position::new(0, literal_start),
            Position::new(0, literal_start + 5)
        ))
    );
}

#[test]
fn test_hover_keeps_host_range_and_text() {
    let host = styled_host("padding", "\"$2\"");
    let lens = service(PluginOptions::default());
    let range = Range::new(Position::new(0, 0), Position::new(0, 1));
    let base = Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value: "(property) padding".to_string(),
        }),
        range: Some(range),
    };

    let hover = lens
        .hover(&host, FILE, host.inside_literal(), Some(base))
        .unwrap();
    assert_eq!(hover.range, Some(range));
    let text = hover_text(&hover);
    assert!(text.starts_with("| Scale | Value |"));
    assert!(text.ends_with("(property) padding"));
}

#[test]
fn test_hover_includes_variants_summary() {
    let host = themed_button_host("\"$4\"");
    let lens = service(PluginOptions::default());

    let hover = lens.hover(&host, FILE, host.inside_literal(), None).unwrap();
    let text = hover_text(&hover);
    assert!(text.contains("| Size | 44px |"));
    assert!(text.contains("| `size` | `small`, `large` |"));
    assert!(text.contains("| `chromeless` | `true` |"));
    assert!(text.find("| Scale |") < text.find("| Variant |"));
}

#[test]
fn test_existing_hover_keeps_variants_without_token() {
    let host = themed_button_host("\"$nope\"");
    let lens = service(PluginOptions::default());
    let range = Range::new(Position::new(0, 1), Position::new(0, 7));
    let base = Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value: "host".to_string(),
        }),
        range: Some(range),
    };

    let hover = lens
        .hover(&host, FILE, host.inside_literal(), Some(base))
        .unwrap();
    let text = hover_text(&hover);
    assert!(text.starts_with("| Variant | Values |"));
    assert!(text.contains("| `size` | `small`, `large` |"));
    assert!(!text.contains("| Scale |"));
    assert!(text.ends_with("host"));
    assert_eq!(hover.range, Some(range));

    assert_eq!(lens.hover(&host, FILE, host.inside_literal(), None), None);
}

#[test]
fn test_hover_without_documentation_is_not_created() {
    let host = styled_host("padding", "\"$missing\"");
    let lens = service(PluginOptions::default());
    assert_eq!(lens.hover(&host, FILE, host.inside_literal(), None), None);
}

#[test]
fn test_out_of_scope_passes_results_through() {
    let host = plain_call_host("\"$2\"");
    let lens = service(PluginOptions::default());
    let position = host.inside_literal();

    let base = items(&["$2"]);
    assert_eq!(
        lens.completions(&host, FILE, position, Some(base.clone())),
        Some(base)
    );
    assert_eq!(lens.completions(&host, FILE, position, None), None);

    let base = CompletionItem::new_simple("$2".to_string(), String::new());
    assert_eq!(
        lens.completion_details(&host, FILE, position, "$2", Some(base.clone())),
        Some(base)
    );

    assert_eq!(lens.hover(&host, FILE, position, None), None);
}

#[test]
fn test_unknown_file_and_missing_config_pass_through() {
    let host = styled_host("padding", "\"$2\"");
    let lens = service(PluginOptions::default());
    let base = items(&["$2"]);
    assert_eq!(
        lens.completions(&host, "/other.tsx", host.inside_literal(), Some(base.clone())),
        Some(base.clone())
    );

    let unloaded = TokenLens::new(PluginOptions::default(), Arc::new(ConfigStore::new()));
    assert_eq!(
        unloaded.completions(&host, FILE, host.inside_literal(), Some(base.clone())),
        Some(base)
    );
    assert_eq!(unloaded.hover(&host, FILE, host.inside_literal(), None), None);
}

#[test]
fn test_shorthand_notes_can_be_disabled() {
    let host = styled_host("px", "\"$2\"");
    let options = PluginOptions {
        show_shorthand_translations: false,
        ..Default::default()
    };
    let lens = service(options);
    let hover = lens.hover(&host, FILE, host.inside_literal(), None).unwrap();
    assert!(!hover_text(&hover).contains("short for"));
}

#[test]
fn test_start_loads_config_from_project() {
    let root = tempfile::TempDir::new().unwrap();
    let options = PluginOptions::default();
    let path = options.token_config_path(root.path());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        r##"{"tokens": {"space": {"$2": 8}}, "themes": {"light": {"blue": "#00f"}}}"##,
    )
    .unwrap();

    let lens = TokenLens::start(root.path(), options);
    assert_eq!(lens.store().version(), 1);

    let host = styled_host("padding", "\"$2\"");
    let hover = lens.hover(&host, FILE, host.inside_literal(), None).unwrap();
    assert!(hover_text(&hover).contains("| Space | 8px |"));

    let missing = TokenLens::start(&root.path().join("nowhere"), PluginOptions::default());
    assert!(missing.store().snapshot().is_none());
}
