// ABOUTME: Reads and writes the markdown carried by LSP documentation and hover records
// ABOUTME: Plain strings and marked strings are folded into a single markdown document

use lsp_types::{Documentation, HoverContents, MarkedString, MarkupContent, MarkupKind};

pub fn documentation_markdown(documentation: Option<&Documentation>) -> String {
    match documentation {
        None => String::new(),
        Some(Documentation::String(text)) => text.clone(),
        Some(Documentation::MarkupContent(content)) => content.value.clone(),
    }
}

pub fn markdown_documentation(value: String) -> Documentation {
    Documentation::MarkupContent(markdown_content(value))
}

pub fn hover_markdown(contents: &HoverContents) -> String {
    match contents {
        HoverContents::Scalar(marked) => marked_markdown(marked),
        HoverContents::Array(items) => items
            .iter()
            .map(marked_markdown)
            .collect::<Vec<_>>()
            .join("\n\n"),
        HoverContents::Markup(content) => content.value.clone(),
    }
}

pub fn markdown_hover_contents(value: String) -> HoverContents {
    HoverContents::Markup(markdown_content(value))
}

fn markdown_content(value: String) -> MarkupContent {
    MarkupContent {
        kind: MarkupKind::Markdown,
        value,
    }
}

fn marked_markdown(marked: &MarkedString) -> String {
    match marked {
        MarkedString::String(text) => text.clone(),
        MarkedString::LanguageString(code) => {
            format!("```{}\n{}\n```", code.language, code.value)
        }
    }
}
