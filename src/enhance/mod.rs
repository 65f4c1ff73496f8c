//! AI slide enhancement.
//!
//! Takes the raw PRD Markdown (not the parsed model) and asks a language
//! model to re-render it as styled HTML slides. Strictly best-effort:
//! one request, no retries, and callers fall back to the deterministic
//! parse when this fails.

pub mod api;
pub mod prompt;
pub mod response;
pub mod types;

pub use api::OpenAiClient;

use crate::error::{Error, Result};
use types::EnhancedPresentation;

/// Facade over prompt construction, the API call, and response reparsing.
///
/// Holds a borrowed client so the collaborator is injected explicitly
/// rather than living in ambient global state.
#[derive(Debug, Clone, Copy)]
pub struct Enhancer<'a> {
    client: &'a OpenAiClient,
}

impl<'a> Enhancer<'a> {
    /// Create an enhancer around an existing client.
    #[must_use]
    pub const fn new(client: &'a OpenAiClient) -> Self {
        Self { client }
    }

    /// Generate an AI-rendered HTML version of the PRD.
    pub async fn enhance(&self, prd_content: &str) -> Result<EnhancedPresentation> {
        let system = prompt::build_system_prompt();
        let user = prompt::build_user_prompt(prd_content);

        let reply = self.client.chat(&system, &user).await?;
        response::parse_response(&reply)
    }

    /// Rewrite the PRD itself according to a modification request.
    ///
    /// Returns the full updated PRD text. Replies that do not look like a
    /// PRD (neither frontmatter nor a heading at the start) are rejected.
    pub async fn modify_prd(&self, prd_content: &str, description: &str) -> Result<String> {
        let system = prompt::build_modify_system_prompt();
        let user = prompt::build_modify_user_prompt(prd_content, description);

        let reply = self.client.chat(&system, &user).await?;
        let modified = strip_markdown_fence(reply.trim());

        if !modified.starts_with("---") && !modified.starts_with('#') {
            return Err(Error::parse(
                "AI response does not appear to be a valid PRD",
                None,
            ));
        }

        Ok(modified.to_string())
    }
}

/// Strip a surrounding ```markdown fence from a reply, when present.
fn strip_markdown_fence(reply: &str) -> &str {
    let without_open = reply
        .strip_prefix("```markdown\n")
        .or_else(|| reply.strip_prefix("```\n"))
        .unwrap_or(reply);
    without_open
        .strip_suffix("\n```")
        .or_else(|| without_open.strip_suffix("```"))
        .unwrap_or(without_open)
        .trim()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn fence_stripping_handles_labelled_fences() {
        let reply = "```markdown\n---\ntitle: T\n---\n# Body\n```";
        assert_eq!(strip_markdown_fence(reply), "---\ntitle: T\n---\n# Body");
    }

    #[test]
    fn fence_stripping_leaves_plain_text_alone() {
        assert_eq!(strip_markdown_fence("# Plain"), "# Plain");
    }

    #[test]
    fn fence_stripping_handles_unlabelled_fences() {
        assert_eq!(strip_markdown_fence("```\n# Doc\n```"), "# Doc");
    }
}
