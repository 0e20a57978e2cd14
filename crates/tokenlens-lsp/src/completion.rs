// ABOUTME: Completion-list hook: decorates and filters token suggestions
// ABOUTME: Theme colours sort ahead of scale tokens and show their default-theme value

use lsp_types::{CompletionItem, CompletionItemKind, CompletionItemLabelDetails, CompletionResponse};

use tokenlens_core::{resolve, sanitize_quoted, sort_key};
use tokenlens_logging::debug;
use tokenlens_types::{Category, ResolvedToken, THEME_COLOR_FILTER_KEY};

use crate::host::DocumentHost;
use crate::service::{RequestContext, TokenLens};

impl TokenLens {
    /// Augment the host's completion list for the position at byte `offset`.
    ///
    /// An absent list stays absent; out of scope the list is returned as is.
    pub fn completions(
        &self,
        host: &dyn DocumentHost,
        file: &str,
        offset: usize,
        base: Option<CompletionResponse>,
    ) -> Option<CompletionResponse> {
        let mut response = base?;
        debug!(file, offset, "Computing token completions");

        let Some(context) = host
            .document(file)
            .and_then(|document| self.request_context(&document, offset))
        else {
            return Some(response);
        };

        let items = match &mut response {
            CompletionResponse::Array(items) => items,
            CompletionResponse::List(list) => &mut list.items,
        };
        let before = items.len();
        *items = std::mem::take(items)
            .into_iter()
            .filter_map(|item| self.decorate_completion(item, &context))
            .collect();
        debug!(
            category = %context.property.category,
            kept = items.len(),
            dropped = before - items.len(),
            "Decorated token completions"
        );

        Some(response)
    }

    /// `None` drops the item.
    fn decorate_completion(
        &self,
        mut item: CompletionItem,
        context: &RequestContext,
    ) -> Option<CompletionItem> {
        let filters = &self.options().completion_filters;
        let name = sanitize_quoted(&item.label).to_string();

        let Some(resolved) = resolve(&name, context.property.category, &context.config) else {
            return Some(item);
        };

        match resolved {
            ResolvedToken::Theme(theme) => {
                if filters.custom.hides(THEME_COLOR_FILTER_KEY, &theme.token) {
                    return None;
                }
                let default_value = theme
                    .value_for(&self.options().default_theme)
                    .unwrap_or_default();
                item.kind = Some(CompletionItemKind::COLOR);
                item.sort_text = Some(format!("${}", sort_key(&name)));
                item.label_details = Some(label_details(default_value, "ThemeToken".to_string()));
            }
            ResolvedToken::Scale(scale) => {
                if filters.custom.hides(scale.category.as_str(), &scale.token) {
                    return None;
                }
                let is_true_token = matches!(scale.category, Category::Space | Category::Size)
                    && (scale.token == "$true" || scale.token == "$-true");
                if is_true_token && !filters.show_true_tokens {
                    return None;
                }
                let is_color = scale.category == Category::Color;
                if is_color && !filters.show_color_tokens {
                    return None;
                }
                if is_color {
                    item.kind = Some(CompletionItemKind::COLOR);
                }
                item.sort_text = Some(sort_key(&name));
                item.label_details = Some(label_details(
                    &scale.value,
                    format!("{}Token", scale.category.title()),
                ));
            }
        }

        Some(item)
    }
}

fn label_details(value: &str, description: String) -> CompletionItemLabelDetails {
    CompletionItemLabelDetails {
        detail: Some(format!(" {value}")),
        description: Some(description),
    }
}
