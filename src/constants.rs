//! Application constants.
//!
//! Centralizes magic numbers and default values for better maintainability.

/// Default theme values applied when frontmatter supplies no overrides.
pub mod theme {
    /// Default primary color.
    pub const PRIMARY_COLOR: &str = "hsl(210, 40%, 98%)";

    /// Default secondary color.
    pub const SECONDARY_COLOR: &str = "hsl(210, 40%, 96%)";

    /// Default background color.
    pub const BACKGROUND_COLOR: &str = "hsl(224, 71%, 4%)";

    /// Default text color.
    pub const TEXT_COLOR: &str = "hsl(210, 40%, 98%)";

    /// Default accent color.
    pub const ACCENT_COLOR: &str = "hsl(217, 91%, 60%)";

    /// Default font family stack.
    pub const FONT_FAMILY: &str = "Inter, system-ui, sans-serif";

    /// Default title font size.
    pub const FONT_SIZE_TITLE: &str = "3rem";

    /// Default subtitle font size.
    pub const FONT_SIZE_SUBTITLE: &str = "1.5rem";

    /// Default body font size.
    pub const FONT_SIZE_BODY: &str = "1.125rem";

    /// Default caption font size.
    pub const FONT_SIZE_CAPTION: &str = "0.875rem";

    /// Default spacing between sections.
    pub const SPACING_SECTION: &str = "2rem";

    /// Default spacing between paragraphs.
    pub const SPACING_PARAGRAPH: &str = "1rem";

    /// Default animation duration in seconds.
    pub const ANIMATION_DURATION: f64 = 0.6;

    /// Default animation easing curve.
    pub const ANIMATION_EASING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";
}

/// Metadata fallback values.
pub mod meta {
    /// Placeholder title when frontmatter has none.
    pub const DEFAULT_TITLE: &str = "Untitled Presentation";

    /// Placeholder author when frontmatter has none.
    pub const DEFAULT_AUTHOR: &str = "Unknown Author";

    /// Default document version.
    pub const DEFAULT_VERSION: &str = "1.0";

    /// Default voice tone.
    pub const DEFAULT_TONE: &str = "professional";

    /// Default voice style.
    pub const DEFAULT_STYLE: &str = "formal";
}

/// Slide classification constants.
pub mod slides {
    /// Slide transition applied when no directive supplies one.
    pub const DEFAULT_TRANSITION: &str = "fade";

    /// Caption used for a design link when no label can be extracted.
    pub const DEFAULT_FIGMA_TITLE: &str = "Figma Design";

    /// Minimum trimmed line length for the loose `+`/`-`/`|` diagram check.
    pub const DIAGRAM_MIN_LINE_LEN: usize = 10;

    /// Unicode box-drawing characters that mark a line as diagram content.
    pub const BOX_DRAWING_CHARS: &[char] = &[
        '┌', '┐', '└', '┘', '├', '┤', '┬', '┴', '┼', '│', '─',
        '╔', '╗', '╚', '╝', '╠', '╣', '╦', '╩', '╬', '║', '═',
        '▲', '▼', '◄', '►', '□', '■', '○', '●',
    ];
}

/// `OpenAI` request constants.
pub mod openai {
    /// Chat completions endpoint.
    pub const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

    /// Default model when `OPENAI_MODEL` is unset.
    pub const DEFAULT_MODEL: &str = "gpt-4o";

    /// Default request timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Lower temperature for more consistent slide output.
    pub const TEMPERATURE: f64 = 0.3;

    /// Token ceiling sized to handle multi-slide responses.
    pub const MAX_TOKENS: u32 = 4000;

    /// Fallback metadata for slides missing data attributes.
    pub const FALLBACK_SLIDE_TYPE: &str = "content";

    /// Fallback style for slides missing data attributes.
    pub const FALLBACK_SLIDE_STYLE: &str = "dark";
}

/// Presentation store constants.
pub mod storage {
    /// Maximum stored presentations before oldest entries are evicted.
    pub const MAX_PRESENTATIONS: usize = 50;

    /// Length of generated URL-friendly presentation ids.
    pub const ID_LENGTH: usize = 8;
}
