// ABOUTME: Hover hook: documents the token literal under the cursor
// ABOUTME: Creates a hover only when a shorthand note or token table was added

use lsp_types::Hover;

use tokenlens_core::BlockId;
use tokenlens_core::docs::variants_summary;
use tokenlens_core::insert_block;
use tokenlens_logging::debug;

use crate::host::DocumentHost;
use crate::markdown::{hover_markdown, markdown_hover_contents};
use crate::position::span_to_range;
use crate::service::TokenLens;

impl TokenLens {
    /// Augment the host's hover for byte `offset`.
    pub fn hover(
        &self,
        host: &dyn DocumentHost,
        file: &str,
        offset: usize,
        base: Option<Hover>,
    ) -> Option<Hover> {
        debug!(file, offset, "Computing token hover");

        let Some(document) = host.document(file) else {
            return base;
        };
        let Some(context) = self.request_context(&document, offset) else {
            return base;
        };

        let mut doc = base
            .as_ref()
            .map(|hover| hover_markdown(&hover.contents))
            .unwrap_or_default();

        let shorthand = self.insert_shorthand_note(&mut doc, &context.property);

        let mut variants = false;
        if let (Some(variants_type), Some(oracle)) = (context.scope.variants_type, document.oracle)
        {
            let summary = variants_summary(&oracle.describe_variants(variants_type));
            variants = summary.is_some();
            insert_block(&mut doc, BlockId::Variants, summary.as_deref());
        }

        let literal = context.scope.literal().unwrap_or_default().to_string();
        let token = self.insert_token_table(&mut doc, &context, &literal);

        match base {
            // The host's hover keeps any block we added, variants included.
            Some(hover) if shorthand || token || variants => Some(Hover {
                contents: markdown_hover_contents(doc),
                range: hover.range,
            }),
            Some(hover) => Some(hover),
            // Variants alone do not justify a hover the host did not produce.
            None if shorthand || token => Some(Hover {
                contents: markdown_hover_contents(doc),
                range: context
                    .scope
                    .literal_span
                    .map(|span| span_to_range(document.source, span)),
            }),
            None => None,
        }
    }
}
