//! Core data model for parsed presentations.
//!
//! Serde renames keep the emitted JSON compatible with the historical
//! document shape (`figmaUrl`, `asciiDiagram`, camelCase keys).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::constants::{meta, slides, theme};

/// Font size tokens for the four text roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSizes {
    /// Title text size.
    pub title: String,
    /// Subtitle text size.
    pub subtitle: String,
    /// Body text size.
    pub body: String,
    /// Caption text size.
    pub caption: String,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            title: theme::FONT_SIZE_TITLE.to_string(),
            subtitle: theme::FONT_SIZE_SUBTITLE.to_string(),
            body: theme::FONT_SIZE_BODY.to_string(),
            caption: theme::FONT_SIZE_CAPTION.to_string(),
        }
    }
}

/// Spacing tokens for vertical rhythm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spacing {
    /// Space between sections.
    pub section: String,
    /// Space between paragraphs.
    pub paragraph: String,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            section: theme::SPACING_SECTION.to_string(),
            paragraph: theme::SPACING_PARAGRAPH.to_string(),
        }
    }
}

/// Animation descriptor for slide transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    /// Duration in seconds.
    pub duration: f64,
    /// CSS easing curve name.
    pub easing: String,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            duration: theme::ANIMATION_DURATION,
            easing: theme::ANIMATION_EASING.to_string(),
        }
    }
}

/// Presentation theme configuration.
///
/// All fields have hard-coded defaults; frontmatter supplies only overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Primary brand color (CSS color string).
    pub primary_color: String,
    /// Secondary brand color.
    pub secondary_color: String,
    /// Slide background color.
    pub background_color: String,
    /// Body text color.
    pub text_color: String,
    /// Accent/highlight color.
    pub accent_color: String,
    /// Font family stack.
    pub font_family: String,
    /// Font size tokens.
    pub font_size: FontSizes,
    /// Spacing tokens.
    pub spacing: Spacing,
    /// Transition animation descriptor.
    pub animation: Animation,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: theme::PRIMARY_COLOR.to_string(),
            secondary_color: theme::SECONDARY_COLOR.to_string(),
            background_color: theme::BACKGROUND_COLOR.to_string(),
            text_color: theme::TEXT_COLOR.to_string(),
            accent_color: theme::ACCENT_COLOR.to_string(),
            font_family: theme::FONT_FAMILY.to_string(),
            font_size: FontSizes::default(),
            spacing: Spacing::default(),
            animation: Animation::default(),
        }
    }
}

/// Narrative voice configuration resolved from frontmatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    /// Tone, e.g. "professional", "casual", "technical".
    pub tone: String,
    /// Style, e.g. "formal", "conversational", "storytelling".
    pub style: String,
}

impl Default for Voice {
    fn default() -> Self {
        Self {
            tone: meta::DEFAULT_TONE.to_string(),
            style: meta::DEFAULT_STYLE.to_string(),
        }
    }
}

/// Presentation-level metadata extracted from frontmatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationMeta {
    /// Presentation title.
    pub title: String,
    /// Optional subtitle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Author name.
    pub author: String,
    /// Optional date string, passed through verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Document version.
    pub version: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Resolved theme configuration.
    pub theme: Theme,
    /// Resolved voice configuration.
    pub voice: Voice,
}

impl Default for PresentationMeta {
    fn default() -> Self {
        Self {
            title: meta::DEFAULT_TITLE.to_string(),
            subtitle: None,
            author: meta::DEFAULT_AUTHOR.to_string(),
            date: None,
            version: meta::DEFAULT_VERSION.to_string(),
            description: None,
            theme: Theme::default(),
            voice: Voice::default(),
        }
    }
}

/// One typed content block within a slide.
///
/// Closed sum type so "which fields are valid for which kind" is a
/// compile-time property; consumers match exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SlideContent {
    /// Title/subtitle text.
    Title {
        /// Title text.
        title: String,
        /// Optional subtitle text.
        #[serde(skip_serializing_if = "Option::is_none")]
        subtitle: Option<String>,
    },
    /// Free prose.
    Content {
        /// Raw trimmed prose text.
        content: String,
    },
    /// Bullet or numbered list with markers stripped.
    List {
        /// List item strings, always non-empty.
        items: Vec<String>,
    },
    /// Quoted text with optional attribution.
    Quote {
        /// Quote text with the `>` marker stripped.
        content: String,
        /// Optional source attribution.
        #[serde(skip_serializing_if = "Option::is_none")]
        source: Option<String>,
    },
    /// Raw multi-line ASCII/box-drawing diagram, never re-interpreted.
    Diagram {
        /// Raw diagram text, not reformatted.
        #[serde(rename = "asciiDiagram")]
        ascii_diagram: String,
    },
    /// Embedded external design link.
    Image {
        /// Extracted design-tool URL.
        #[serde(rename = "figmaUrl")]
        figma_url: String,
        /// Caption title for the link.
        title: String,
    },
}

impl SlideContent {
    /// Short name of this block's kind, matching the serialized tag.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Title { .. } => "title",
            Self::Content { .. } => "content",
            Self::List { .. } => "list",
            Self::Quote { .. } => "quote",
            Self::Diagram { .. } => "diagram",
            Self::Image { .. } => "image",
        }
    }
}

/// One presentation slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// Positional identifier, `slide-0`, `slide-1`, ... in document order.
    pub id: String,
    /// Slide title (first heading, or positional placeholder).
    pub title: String,
    /// Ordered typed content blocks.
    pub content: Vec<SlideContent>,
    /// Optional speaker notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Transition name, defaulting to "fade".
    pub transition: String,
    /// Slide type promoted from a directive, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide_type: Option<String>,
    /// Slide style promoted from a directive, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide_style: Option<String>,
    /// Raw key/value pairs from the generation directive.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub directives: HashMap<String, String>,
}

impl Slide {
    /// Create an empty slide with the positional id and placeholder title.
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self {
            id: format!("slide-{index}"),
            title: format!("Slide {}", index + 1),
            content: Vec::new(),
            notes: None,
            transition: slides::DEFAULT_TRANSITION.to_string(),
            slide_type: None,
            slide_style: None,
            directives: HashMap::new(),
        }
    }
}

/// Root parse output: metadata plus ordered slides.
///
/// Built in one pass and immutable after construction; later components
/// serialize or copy it but never mutate it in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    /// Presentation-level metadata.
    pub meta: PresentationMeta,
    /// Ordered slides.
    pub slides: Vec<Slide>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn slide_ids_are_positional() {
        let slide = Slide::new(0);
        assert_eq!(slide.id, "slide-0");
        assert_eq!(slide.title, "Slide 1");
        assert_eq!(slide.transition, "fade");
    }

    #[test]
    fn content_serializes_with_tagged_type() {
        let block = SlideContent::Image {
            figma_url: "https://www.figma.com/file/abc".to_string(),
            title: "Mockup".to_string(),
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "image");
        assert_eq!(json["figmaUrl"], "https://www.figma.com/file/abc");
    }

    #[test]
    fn theme_defaults_match_historical_values() {
        let theme = Theme::default();
        assert_eq!(theme.accent_color, "hsl(217, 91%, 60%)");
        assert_eq!(theme.font_size.body, "1.125rem");
        assert_eq!(theme.spacing.section, "2rem");
        assert_eq!(theme.spacing.paragraph, "1rem");
        assert!((theme.animation.duration - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn diagram_round_trips_through_json() {
        let block = SlideContent::Diagram {
            ascii_diagram: "┌──┐\n└──┘".to_string(),
        };
        let json = serde_json::to_string(&block).unwrap();
        let back: SlideContent = serde_json::from_str(&json).unwrap();
        assert_eq!(block, back);
    }
}
