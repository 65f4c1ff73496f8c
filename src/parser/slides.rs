//! Slide segmentation and per-line content classification.
//!
//! The body is split into fragments on slide delimiters, then each fragment
//! is scanned line by line with a single pass (one line of lookahead for
//! diagram runs), classifying content into typed blocks. The classifier has
//! no error exits: every line lands in some block, malformed directives are
//! ignored, and empty fragments produce no slide at all.

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::slides as consts;
use crate::types::{Slide, SlideContent};

/// Delimiter matching a horizontal rule or a `# Slide`/`## slide` heading at
/// the start of a line.
#[allow(clippy::expect_used)]
static RE_DELIMITER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(?:---|#{1,2}\s+(?:Slide|slide))").expect("valid regex: RE_DELIMITER")
});

/// Inline generation directive, `<!-- @slide:generate key="value" ... -->`.
#[allow(clippy::expect_used)]
static RE_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!--\s*@slide:generate\s+(.+?)\s*-->").expect("valid regex: RE_DIRECTIVE")
});

/// Leading heading markers on a title line.
#[allow(clippy::expect_used)]
static RE_HEADING_MARK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#+\s*").expect("valid regex: RE_HEADING_MARK")
});

/// Leading quote marker.
#[allow(clippy::expect_used)]
static RE_QUOTE_MARK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^>\s*").expect("valid regex: RE_QUOTE_MARK")
});

/// Numbered list item, `1.` style.
#[allow(clippy::expect_used)]
static RE_NUMBERED_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.").expect("valid regex: RE_NUMBERED_ITEM")
});

/// Leading bullet or number marker to strip from list items.
#[allow(clippy::expect_used)]
static RE_LIST_MARK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[-*]\s*|\d+\.\s*)").expect("valid regex: RE_LIST_MARK")
});

/// Figma URL up to whitespace or a closing paren.
#[allow(clippy::expect_used)]
static RE_FIGMA_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https://[^\s]+figma\.com[^\s)]+").expect("valid regex: RE_FIGMA_URL")
});

/// Markdown link label, `[text](url)`.
#[allow(clippy::expect_used)]
static RE_LINK_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("valid regex: RE_LINK_LABEL")
});

/// Split the Markdown body into slides.
///
/// Fragments that are empty after trimming are discarded before slides are
/// created, so ids are dense and positional in the output sequence.
#[must_use]
pub fn parse_slides(body: &str) -> Vec<Slide> {
    RE_DELIMITER
        .split(body)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .enumerate()
        .map(|(index, fragment)| parse_fragment(fragment, index))
        .collect()
}

/// Count the delimiter-separated sections a body would produce.
///
/// Shares the delimiter with [`parse_slides`] so enhancement prompts and the
/// deterministic parse agree on slide counts.
#[must_use]
pub fn count_sections(body: &str) -> usize {
    RE_DELIMITER
        .split(body)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .count()
}

/// Which kind of run the accumulation buffer currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunType {
    Content,
    List,
}

/// Line-by-line scan state: the running block type, the accumulation
/// buffer, and the blocks emitted so far. The flush-on-transition rule
/// lives entirely in [`ScanState::flush`].
#[derive(Debug)]
struct ScanState {
    current_type: RunType,
    buffer: String,
    blocks: Vec<SlideContent>,
}

impl ScanState {
    const fn new() -> Self {
        Self {
            current_type: RunType::Content,
            buffer: String::new(),
            blocks: Vec::new(),
        }
    }

    /// Emit the pending buffer as one block of the running type, if it has
    /// any non-whitespace content, and clear it.
    fn flush(&mut self) {
        let text = self.buffer.trim();
        if !text.is_empty() {
            let block = match self.current_type {
                RunType::List => SlideContent::List { items: parse_list_items(text) },
                RunType::Content => SlideContent::Content { content: text.to_string() },
            };
            self.blocks.push(block);
        }
        self.buffer.clear();
    }

    fn push_line(&mut self, line: &str) {
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }
}

/// Classify one fragment's lines into a slide.
fn parse_fragment(fragment: &str, index: usize) -> Slide {
    let mut slide = Slide::new(index);
    apply_directives(&mut slide, fragment);

    let lines: Vec<&str> = fragment.split('\n').collect();
    let mut state = ScanState::new();
    let mut title_taken = false;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();

        // First heading becomes the title; later headings fall through as prose
        if line.starts_with('#') && !title_taken {
            slide.title = RE_HEADING_MARK.replace(line, "").trim().to_string();
            title_taken = true;
            i += 1;
            continue;
        }

        if is_diagram_line(line) {
            state.flush();

            // Greedily absorb diagram-like and blank lines into one block,
            // keeping the raw (untrimmed) continuation text
            let mut diagram = String::from(line);
            diagram.push('\n');
            let mut j = i + 1;
            while j < lines.len() && (is_diagram_line(lines[j]) || lines[j].trim().is_empty()) {
                diagram.push_str(lines[j]);
                diagram.push('\n');
                j += 1;
            }
            i = j;

            state.blocks.push(SlideContent::Diagram {
                ascii_diagram: diagram.trim().to_string(),
            });
            state.current_type = RunType::Content;
            continue;
        }

        if line.contains("figma.com") {
            state.flush();
            state.blocks.push(SlideContent::Image {
                figma_url: extract_figma_url(line),
                title: extract_figma_title(line),
            });
            state.current_type = RunType::Content;
            i += 1;
            continue;
        }

        if is_list_line(line) {
            if state.current_type != RunType::List {
                state.flush();
                state.current_type = RunType::List;
            }
            state.push_line(line);
            i += 1;
            continue;
        }

        if line.starts_with('>') {
            state.flush();
            state.blocks.push(SlideContent::Quote {
                content: RE_QUOTE_MARK.replace(line, "").to_string(),
                source: None,
            });
            state.current_type = RunType::Content;
            i += 1;
            continue;
        }

        // A non-list, non-blank line ends a running list; blank lines are
        // buffered without ending it
        if state.current_type == RunType::List && !line.is_empty() {
            state.flush();
            state.current_type = RunType::Content;
        }
        state.push_line(line);
        i += 1;
    }

    state.flush();
    slide.content = state.blocks;
    slide
}

/// Extract `key="value"` directive pairs and promote the recognized keys.
///
/// Malformed tokens are silently skipped; the directive line itself stays in
/// the fragment and is classified like any other line.
fn apply_directives(slide: &mut Slide, fragment: &str) {
    let Some(caps) = RE_DIRECTIVE.captures(fragment) else {
        return;
    };

    for token in caps[1].split_whitespace() {
        let mut parts = token.split('=');
        let key = parts.next().unwrap_or_default();
        let value = parts.next().unwrap_or_default().replace('"', "");
        if !key.is_empty() && !value.is_empty() {
            slide.directives.insert(key.to_string(), value);
        }
    }

    if let Some(kind) = slide.directives.get("type") {
        slide.slide_type = Some(kind.clone());
    }
    if let Some(style) = slide.directives.get("style") {
        slide.slide_style = Some(style.clone());
    }
    if let Some(transition) = slide.directives.get("transition") {
        slide.transition.clone_from(transition);
    }
}

/// A line is diagram-like if it contains a box-drawing character, both `+`
/// and `-`, or any of `+`/`-`/`|` on a line longer than ten characters.
fn is_diagram_line(line: &str) -> bool {
    if line.chars().any(|c| consts::BOX_DRAWING_CHARS.contains(&c)) {
        return true;
    }
    if line.contains('+') && line.contains('-') {
        return true;
    }
    line.chars().any(|c| matches!(c, '+' | '-' | '|'))
        && line.chars().count() > consts::DIAGRAM_MIN_LINE_LEN
}

/// A line starting with a bullet or a `1.` style number is a list item.
fn is_list_line(line: &str) -> bool {
    line.starts_with('-') || line.starts_with('*') || RE_NUMBERED_ITEM.is_match(line)
}

/// Split an accumulated list buffer into items, stripping leading markers.
/// Blank lines buffered during accumulation are discarded so items are
/// always non-empty.
fn parse_list_items(buffer: &str) -> Vec<String> {
    buffer
        .split('\n')
        .map(|item| RE_LIST_MARK.replace(item.trim(), "").to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// First `https://...figma.com...` substring, or empty when the line only
/// mentions figma.com without a full URL.
fn extract_figma_url(line: &str) -> String {
    RE_FIGMA_URL
        .find(line)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Caption for a design link: the Markdown link label if present, else the
/// text before the URL, else a placeholder.
fn extract_figma_title(line: &str) -> String {
    if let Some(caps) = RE_LINK_LABEL.captures(line) {
        return caps[1].to_string();
    }

    let before = line.split("https://").next().unwrap_or_default().trim();
    if before.is_empty() {
        consts::DEFAULT_FIGMA_TITLE.to_string()
    } else {
        before.to_string()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn body_without_delimiters_is_one_slide() {
        let slides = parse_slides("# Only\n\nSome text");
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].id, "slide-0");
        assert_eq!(slides[0].title, "Only");
    }

    #[test]
    fn empty_body_yields_no_slides() {
        assert!(parse_slides("").is_empty());
        assert!(parse_slides("   \n\n  ").is_empty());
    }

    #[test]
    fn delimiters_split_into_positional_slides() {
        let slides = parse_slides("# One\ntext\n---\n# Two\nmore\n---\n# Three\nend");
        assert_eq!(slides.len(), 3);
        let ids: Vec<&str> = slides.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["slide-0", "slide-1", "slide-2"]);
    }

    #[test]
    fn empty_fragments_are_filtered_before_id_assignment() {
        // Consecutive delimiters produce an empty fragment that must not
        // leave a gap in the id sequence
        let slides = parse_slides("# One\ntext\n---\n---\n# Two\nmore");
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[1].id, "slide-1");
        assert_eq!(slides[1].title, "Two");
    }

    #[test]
    fn slide_heading_delimiter_is_case_insensitive_on_word() {
        let slides = parse_slides("intro text\n## Slide 2\nsecond\n# slide 3\nthird");
        assert_eq!(slides.len(), 3);
    }

    #[test]
    fn pure_list_fragment_is_one_list_block() {
        let slides = parse_slides("- a\n- b\n- c");
        assert_eq!(slides.len(), 1);
        assert_eq!(
            slides[0].content,
            vec![SlideContent::List {
                items: vec!["a".to_string(), "b".to_string(), "c".to_string()]
            }]
        );
    }

    #[test]
    fn numbered_and_starred_items_are_stripped() {
        let slides = parse_slides("1. first\n2. second\n* third");
        assert_eq!(
            slides[0].content,
            vec![SlideContent::List {
                items: vec!["first".to_string(), "second".to_string(), "third".to_string()]
            }]
        );
    }

    #[test]
    fn blank_line_inside_list_accumulation() {
        // A blank line does not end the list by itself; it is buffered and
        // discarded at item-splitting time
        let slides = parse_slides("- a\n\n- b");
        assert_eq!(
            slides[0].content,
            vec![SlideContent::List {
                items: vec!["a".to_string(), "b".to_string()]
            }]
        );
    }

    #[test]
    fn prose_after_list_flushes_list_first() {
        let slides = parse_slides("- a\n- b\nclosing remark here");
        assert_eq!(slides[0].content.len(), 2);
        assert_eq!(slides[0].content[0].kind(), "list");
        assert_eq!(
            slides[0].content[1],
            SlideContent::Content { content: "closing remark here".to_string() }
        );
    }

    #[test]
    fn quote_lines_are_individual_blocks() {
        let slides = parse_slides("> first quote\n> second quote");
        assert_eq!(
            slides[0].content,
            vec![
                SlideContent::Quote { content: "first quote".to_string(), source: None },
                SlideContent::Quote { content: "second quote".to_string(), source: None },
            ]
        );
    }

    #[test]
    fn diagram_run_absorbs_blank_lines() {
        let body = "┌────┐\n│ A  │\n└────┘\n\n┌────┐\n│ B  │\n└────┘";
        let slides = parse_slides(body);
        assert_eq!(slides[0].content.len(), 1);
        match &slides[0].content[0] {
            SlideContent::Diagram { ascii_diagram } => {
                assert!(ascii_diagram.contains("│ A  │"));
                assert!(ascii_diagram.contains("│ B  │"));
            }
            other => panic!("expected diagram, got {other:?}"),
        }
    }

    #[test]
    fn diagram_text_is_never_reclassified() {
        // The boxed content looks like a quote and a list but stays one
        // diagram block
        let body = "+--------------+\n| > hey there  |\n| - item one   |\n+--------------+";
        let slides = parse_slides(body);
        assert_eq!(slides[0].content.len(), 1);
        assert_eq!(slides[0].content[0].kind(), "diagram");
    }

    #[test]
    fn plus_minus_line_is_diagram_like() {
        assert!(is_diagram_line("+--+"));
        assert!(is_diagram_line("| pipe on a longer line"));
        assert!(!is_diagram_line("- short"));
        assert!(!is_diagram_line("plain text with no markers whatsoever"));
    }

    #[test]
    fn figma_line_becomes_image_block() {
        let slides = parse_slides("Mockups: https://www.figma.com/file/abc (v2)");
        match &slides[0].content[0] {
            SlideContent::Image { figma_url, title } => {
                assert!(figma_url.contains("https://www.figma.com/file/abc"));
                assert_eq!(title, "Mockups:");
            }
            other => panic!("expected image, got {other:?}"),
        }
    }

    #[test]
    fn figma_link_label_wins_as_title() {
        let slides = parse_slides("[Design Spec](https://www.figma.com/file/xyz)");
        match &slides[0].content[0] {
            SlideContent::Image { title, .. } => assert_eq!(title, "Design Spec"),
            other => panic!("expected image, got {other:?}"),
        }
    }

    #[test]
    fn figma_without_preceding_text_uses_placeholder() {
        let slides = parse_slides("https://www.figma.com/file/abc");
        match &slides[0].content[0] {
            SlideContent::Image { title, .. } => assert_eq!(title, "Figma Design"),
            other => panic!("expected image, got {other:?}"),
        }
    }

    #[test]
    fn first_heading_sets_title_and_is_consumed() {
        let slides = parse_slides("# Hello\n\nWorld");
        assert_eq!(slides[0].title, "Hello");
        assert_eq!(
            slides[0].content,
            vec![SlideContent::Content { content: "World".to_string() }]
        );
    }

    #[test]
    fn later_headings_fall_through_as_prose() {
        let slides = parse_slides("# Title\n### Subhead\nbody text");
        assert_eq!(slides[0].title, "Title");
        assert_eq!(
            slides[0].content,
            vec![SlideContent::Content { content: "### Subhead\nbody text".to_string() }]
        );
    }

    #[test]
    fn fragment_without_heading_keeps_placeholder_title() {
        let slides = parse_slides("just prose\n---\nmore prose");
        assert_eq!(slides[0].title, "Slide 1");
        assert_eq!(slides[1].title, "Slide 2");
    }

    #[test]
    fn directive_promotes_type_style_transition() {
        let body = "# T\n<!-- @slide:generate type=\"hero\" style=\"dark\" transition=\"slide\" -->\ntext";
        let slides = parse_slides(body);
        assert_eq!(slides[0].slide_type.as_deref(), Some("hero"));
        assert_eq!(slides[0].slide_style.as_deref(), Some("dark"));
        assert_eq!(slides[0].transition, "slide");
        assert_eq!(slides[0].directives.len(), 3);
    }

    #[test]
    fn directive_subset_leaves_defaults() {
        let slides = parse_slides("# T\n<!-- @slide:generate style=\"accent\" -->\ntext");
        assert_eq!(slides[0].slide_style.as_deref(), Some("accent"));
        assert_eq!(slides[0].slide_type, None);
        assert_eq!(slides[0].transition, "fade");
    }

    #[test]
    fn malformed_directive_tokens_are_ignored()  {
        let slides = parse_slides("# T\n<!-- @slide:generate nonsense =broken type=\"hero\" -->\ntext");
        assert_eq!(slides[0].directives.get("type").map(String::as_str), Some("hero"));
        assert!(!slides[0].directives.contains_key("nonsense"));
    }

    #[test]
    fn reparsing_is_idempotent() {
        let body = "# A\n- one\n- two\n> q\n---\n# B\ntext";
        let first = parse_slides(body);
        let second = parse_slides(body);
        assert_eq!(first, second);
    }

    #[test]
    fn mixed_fragment_preserves_block_order() {
        let body = "# Mix\nintro line\n- item one\n- item two\n> a quote\noutro line";
        let slides = parse_slides(body);
        let kinds: Vec<&str> = slides[0].content.iter().map(SlideContent::kind).collect();
        assert_eq!(kinds, ["content", "list", "quote", "content"]);
    }
}
