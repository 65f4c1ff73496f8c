//! PRD parsing pipeline.
//!
//! Converts a Markdown PRD (optional YAML frontmatter + body) into a
//! [`Presentation`]. The deterministic parse is synchronous, pure, and
//! holds no state across calls; AI enhancement is layered on top as a
//! best-effort step that can never invalidate the base parse.

pub mod frontmatter;
pub mod metadata;
pub mod slides;

use crate::enhance::types::EnhancedPresentation;
use crate::enhance::{Enhancer, OpenAiClient};
use crate::types::Presentation;

/// Parser for PRD documents.
///
/// Stateless; a single instance can be shared freely and invoked
/// concurrently.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrdParser;

impl PrdParser {
    /// Create a new parser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parse a PRD into a presentation.
    ///
    /// Total over any input: empty or malformed text yields a presentation
    /// with default metadata and zero slides rather than an error.
    #[must_use]
    pub fn parse(&self, content: &str) -> Presentation {
        let (fm, body) = frontmatter::split(content);
        let meta = metadata::extract_metadata(&fm);
        let slides = slides::parse_slides(body);
        Presentation { meta, slides }
    }

    /// Parse a PRD and attempt AI enhancement of the raw text.
    ///
    /// The enhancer receives the original Markdown, not the parsed model.
    /// Enhancement failure is logged and degraded to `None`; the
    /// deterministic parse result is always returned intact.
    pub async fn parse_with_enhancement(
        &self,
        content: &str,
        client: &OpenAiClient,
    ) -> (Presentation, Option<EnhancedPresentation>) {
        let presentation = self.parse(content);

        let enhanced = match Enhancer::new(client).enhance(content).await {
            Ok(result) => {
                tracing::info!(
                    "AI enhancement produced {} HTML slides",
                    result.html_slides.len()
                );
                Some(result)
            }
            Err(e) => {
                tracing::warn!("AI enhancement failed, using parsed slides: {e}");
                None
            }
        };

        (presentation, enhanced)
    }
}
