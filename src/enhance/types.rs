//! Data types for AI-enhanced presentations.

use serde::{Deserialize, Serialize};

/// Per-slide rendering metadata recovered from the model output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideMetadata {
    /// Slide type, e.g. "hero", "bullet", "summary".
    #[serde(rename = "type")]
    pub kind: String,
    /// Visual style, e.g. "dark", "accent".
    pub style: String,
    /// Transition name.
    pub transition: String,
}

/// One AI-rendered HTML slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedSlide {
    /// Identifier matching the manifest entry, `slide-1` based.
    pub id: String,
    /// Self-contained HTML for the slide.
    pub html_content: String,
    /// Rendering metadata.
    pub metadata: SlideMetadata,
}

/// Theme summary inside the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestTheme {
    /// Primary brand color.
    pub primary: String,
    /// Secondary brand color.
    pub secondary: String,
    /// Narrative tone.
    pub tone: String,
    /// Narrative voice.
    pub voice: String,
}

/// Presentation-level manifest metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestMeta {
    /// Presentation title.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Theme summary.
    pub theme: ManifestTheme,
}

/// One slide entry in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestSlide {
    /// Slide identifier.
    pub id: String,
    /// Slide title.
    #[serde(default)]
    pub title: String,
    /// Slide type.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Visual style.
    #[serde(default)]
    pub style: String,
    /// Transition name.
    #[serde(default)]
    pub transition: String,
    /// Short content description.
    #[serde(default)]
    pub content_summary: String,
}

/// Structured manifest emitted alongside the HTML slides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Presentation metadata.
    pub meta: ManifestMeta,
    /// Per-slide entries.
    #[serde(default)]
    pub slides: Vec<ManifestSlide>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            meta: ManifestMeta {
                title: "AI Generated Presentation".to_string(),
                author: "Preso AI".to_string(),
                theme: ManifestTheme {
                    primary: "#00E0FF".to_string(),
                    secondary: "#FF00AA".to_string(),
                    tone: "professional".to_string(),
                    voice: "engaging".to_string(),
                },
            },
            slides: Vec::new(),
        }
    }
}

/// Complete AI-enhanced rendering of a presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedPresentation {
    /// Structured manifest.
    pub manifest: Manifest,
    /// Rendered HTML slides in document order.
    pub html_slides: Vec<EnhancedSlide>,
}
