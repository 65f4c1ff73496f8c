//! Prompt construction for AI slide generation.
//!
//! Best-effort text templating: the deterministic parser is reused to
//! detect frontmatter and count sections so the prompt and the base parse
//! agree on slide structure.

use std::fmt::Write;

use crate::parser::{frontmatter, metadata, slides};

/// Style guidance for one tone + voice pairing.
struct StyleGuidelines {
    colors: &'static str,
    typography: &'static str,
    layout: &'static str,
    animations: &'static str,
}

/// Look up guidance for a `"{tone}-{style}"` pairing, falling back to
/// professional-formal.
fn style_guidelines(tone: &str, style: &str) -> &'static StyleGuidelines {
    const PROFESSIONAL_FORMAL: StyleGuidelines = StyleGuidelines {
        colors: "Conservative palette, high contrast, navy/gray base with accent highlights",
        typography: "Clean sans-serif, large headers, generous whitespace, left-aligned content",
        layout: "Grid-based, structured sections, minimal decorative elements",
        animations: "Subtle fade transitions, no bounce or dynamic effects",
    };
    const CASUAL_CONVERSATIONAL: StyleGuidelines = StyleGuidelines {
        colors: "Warm, approachable colors, softer contrasts, friendly blues and greens",
        typography: "Rounded fonts, medium sizes, comfortable line height, mixed alignments",
        layout: "Organic flow, asymmetrical elements, friendly spacing",
        animations: "Gentle slides, soft transitions, subtle hover effects",
    };
    const CREATIVE_STORYTELLING: StyleGuidelines = StyleGuidelines {
        colors: "Bold, vibrant palette, dramatic contrasts, artistic gradients",
        typography: "Mixed font weights, creative hierarchy, dynamic sizing",
        layout: "Asymmetrical, artistic compositions, creative use of negative space",
        animations: "Dynamic transitions, creative reveals, artistic effects",
    };
    const TECHNICAL_DATA_DRIVEN: StyleGuidelines = StyleGuidelines {
        colors: "Monochromatic with accent highlights, code-friendly palette",
        typography: "Monospace for code, clear hierarchy, tabular layouts",
        layout: "Structured grids, data tables, technical diagrams",
        animations: "Minimal, functional transitions, focus on content",
    };
    const MINIMAL_STORYTELLING: StyleGuidelines = StyleGuidelines {
        colors: "Restrained palette, subtle gradients, emphasis on whitespace",
        typography: "Ultra-clean fonts, dramatic size contrasts, zen-like spacing",
        layout: "Extreme whitespace, single focus points, minimalist compositions",
        animations: "Elegant fades, smooth transitions, nothing distracting",
    };

    match format!("{tone}-{style}").as_str() {
        "casual-conversational" => &CASUAL_CONVERSATIONAL,
        "creative-storytelling" => &CREATIVE_STORYTELLING,
        "technical-data-driven" => &TECHNICAL_DATA_DRIVEN,
        "minimal-storytelling" => &MINIMAL_STORYTELLING,
        _ => &PROFESSIONAL_FORMAL,
    }
}

/// System prompt describing the slide compilation contract.
#[must_use]
pub fn build_system_prompt() -> String {
    r##"You are an expert presentation designer and AI slide compiler.

## INPUT
A Markdown PRD with YAML frontmatter (title, author, tone, voice,
primary_color, secondary_color), content sections separated by "---", and
optional generation hooks of the form
<!-- @slide:generate type="{type}" style="{style}" transition="{transition}" -->.

## SLIDE TYPES
hero, bullet, list, ascii, image, summary, comparison, timeline, quote.

## STYLE VARIATIONS
dark, contrast, accent, showcase, grid, highlight, callout, closing.

## OUTPUT FORMAT - FOLLOW EXACTLY

```json manifest
{
  "meta": {
    "title": "Presentation Title",
    "author": "Author Name",
    "theme": {
      "primary": "#00E0FF",
      "secondary": "#FF00AA",
      "tone": "professional",
      "voice": "engaging"
    }
  },
  "slides": [
    {
      "id": "slide-1",
      "title": "Slide Title",
      "type": "hero",
      "style": "dark",
      "transition": "fade",
      "content_summary": "Brief description"
    }
  ]
}
```

Then one fenced block per slide:

```html slide-1
<section data-slide-id="slide-1" data-slide-type="hero" data-slide-style="dark" data-transition="fade">
  ...
</section>
```

## DESIGN RULES
- Dark backgrounds only, white text, 7:1 contrast ratio.
- Use EXACTLY the primary/secondary colors from frontmatter on every slide.
- Self-contained HTML per slide with Tailwind utility classes.
- Include data-slide-type, data-slide-style and data-transition attributes on
  each <section>."##
        .to_string()
}

/// User prompt embedding the PRD, detected frontmatter, and the expected
/// slide count computed with the same delimiter as the parser.
#[must_use]
pub fn build_user_prompt(prd_content: &str) -> String {
    let (fm, body) = frontmatter::split(prd_content);
    let meta = metadata::extract_metadata(&fm);
    let expected_slides = slides::count_sections(body).max(1);

    let guidelines = style_guidelines(&meta.voice.tone, &meta.voice.style);

    let mut prompt = String::new();
    let _ = write!(
        prompt,
        "Here is the PRD Markdown to compile into a presentation:\n\n\
         <BEGIN_MD>\n{prd_content}\n<END_MD>\n\n\
         SLIDE COUNT ANALYSIS:\n\
         - Detected {expected_slides} content sections\n\
         - You MUST generate exactly {expected_slides} slides\n\
         - Each section becomes one slide: ```html slide-1```, ```html slide-2```, ...\n\n\
         PRESENTATION CONTEXT:\n\
         - Title: {title}\n\
         - Author: {author}\n\
         - Tone: {tone}\n\
         - Voice: {style}\n\
         - Primary color: {primary}\n\
         - Secondary color: {secondary}\n\n\
         STYLE GUIDELINES FOR TONE {tone_upper} + VOICE {style_upper}:\n\
         - Colors: {colors}\n\
         - Typography: {typography}\n\
         - Layout: {layout}\n\
         - Animations: {animations}\n\n\
         Apply these guidelines consistently across all slides while keeping\n\
         the brand colors from the frontmatter and the exact output format\n\
         from the system prompt.",
        title = meta.title,
        author = meta.author,
        tone = meta.voice.tone,
        style = meta.voice.style,
        primary = meta.theme.primary_color,
        secondary = meta.theme.secondary_color,
        tone_upper = meta.voice.tone.to_uppercase(),
        style_upper = meta.voice.style.to_uppercase(),
        colors = guidelines.colors,
        typography = guidelines.typography,
        layout = guidelines.layout,
        animations = guidelines.animations,
    );

    prompt
}

/// System prompt for PRD modification requests.
#[must_use]
pub fn build_modify_system_prompt() -> String {
    "You are an expert PRD (Product Requirements Document) editor.\n\n\
     Modify the provided PRD based on the user's description while keeping:\n\
     - The original structure, markdown formatting and frontmatter\n\
     - All existing content unless specifically asked to remove it\n\
     - The same slide structure and numbering\n\n\
     Return ONLY the complete modified PRD content in markdown format, with\n\
     no explanations outside the PRD content."
        .to_string()
}

/// User prompt for a PRD modification request.
#[must_use]
pub fn build_modify_user_prompt(prd_content: &str, description: &str) -> String {
    format!(
        "Original PRD Content:\n{prd_content}\n\n\
         User's Modification Request:\n{description}\n\n\
         Please modify the PRD according to the request and return the\n\
         complete updated PRD content."
    )
}
