// ABOUTME: Completion-resolve hook: attaches shorthand and token documentation
// ABOUTME: Blocks are tagged so resolving the same item twice does not duplicate them

use lsp_types::CompletionItem;

use tokenlens_logging::debug;

use crate::host::DocumentHost;
use crate::markdown::{documentation_markdown, markdown_documentation};
use crate::service::TokenLens;

impl TokenLens {
    /// Document `entry_name` as suggested at byte `offset`.
    pub fn completion_details(
        &self,
        host: &dyn DocumentHost,
        file: &str,
        offset: usize,
        entry_name: &str,
        base: Option<CompletionItem>,
    ) -> Option<CompletionItem> {
        let mut item = base?;
        debug!(file, offset, entry_name, "Computing token completion details");

        let Some(context) = host
            .document(file)
            .and_then(|document| self.request_context(&document, offset))
        else {
            return Some(item);
        };

        let mut doc = documentation_markdown(item.documentation.as_ref());
        let shorthand = self.insert_shorthand_note(&mut doc, &context.property);
        let token = self.insert_token_table(&mut doc, &context, entry_name);
        if shorthand || token {
            item.documentation = Some(markdown_documentation(doc));
        }
        Some(item)
    }
}
