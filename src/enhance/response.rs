//! Re-parsing of the model's slide generation output.
//!
//! The model is asked for a fenced JSON manifest plus one fenced HTML block
//! per slide, but replies drift; extraction runs a cascade of progressively
//! looser patterns and degrades to defaults instead of failing, as long as
//! at least one slide can be recovered.

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::openai;
use crate::enhance::types::{
    EnhancedPresentation, EnhancedSlide, Manifest, ManifestSlide, SlideMetadata,
};
use crate::error::{Error, Result};

/// Labelled manifest fence.
#[allow(clippy::expect_used)]
static RE_MANIFEST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```json manifest\n(.*?)\n```").expect("valid regex: RE_MANIFEST")
});

/// Any JSON fence, fallback when the manifest label is missing.
#[allow(clippy::expect_used)]
static RE_JSON_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```json\n(.*?)\n```").expect("valid regex: RE_JSON_FENCE")
});

/// Labelled slide fence, `slide-1` form.
#[allow(clippy::expect_used)]
static RE_SLIDE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```html slide-(\d+)\n(.*?)\n```").expect("valid regex: RE_SLIDE_FENCE")
});

/// Slide fence without the hyphen, `slide1` form.
#[allow(clippy::expect_used)]
static RE_SLIDE_FENCE_BARE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```html slide(\d+)\n(.*?)\n```").expect("valid regex: RE_SLIDE_FENCE_BARE")
});

/// Loosest slide fence pattern, tolerating noise around the label.
#[allow(clippy::expect_used)]
static RE_SLIDE_FENCE_LOOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```html.*?slide.*?(\d+).*?\n(.*?)\n```")
        .expect("valid regex: RE_SLIDE_FENCE_LOOSE")
});

/// `data-slide-type` attribute.
#[allow(clippy::expect_used)]
static RE_ATTR_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"data-slide-type="([^"]+)""#).expect("valid regex: RE_ATTR_TYPE")
});

/// `data-slide-style` attribute.
#[allow(clippy::expect_used)]
static RE_ATTR_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"data-slide-style="([^"]+)""#).expect("valid regex: RE_ATTR_STYLE")
});

/// `data-transition` attribute.
#[allow(clippy::expect_used)]
static RE_ATTR_TRANSITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"data-transition="([^"]+)""#).expect("valid regex: RE_ATTR_TRANSITION")
});

/// Parse a model reply into an [`EnhancedPresentation`].
///
/// Missing or malformed manifests degrade to a default manifest; zero
/// recoverable HTML slides is the only hard failure.
pub fn parse_response(response: &str) -> Result<EnhancedPresentation> {
    let mut manifest = extract_manifest(response);
    let html_slides = extract_slides(response);

    if html_slides.is_empty() {
        return Err(Error::parse(
            "AI response contained no recoverable HTML slides",
            None,
        ));
    }

    // Backfill manifest entries for slides the manifest forgot
    for slide in &html_slides {
        if !manifest.slides.iter().any(|m| m.id == slide.id) {
            manifest.slides.push(ManifestSlide {
                id: slide.id.clone(),
                title: format!("Slide {}", manifest.slides.len() + 1),
                kind: slide.metadata.kind.clone(),
                style: slide.metadata.style.clone(),
                transition: slide.metadata.transition.clone(),
                content_summary: "Generated content".to_string(),
            });
        }
    }

    Ok(EnhancedPresentation { manifest, html_slides })
}

/// Manifest extraction cascade: labelled fence, any JSON fence, default.
fn extract_manifest(response: &str) -> Manifest {
    let raw = RE_MANIFEST
        .captures(response)
        .or_else(|| RE_JSON_FENCE.captures(response))
        .map(|caps| caps[1].to_string());

    let Some(raw) = raw else {
        tracing::warn!("No manifest fence in AI response, using fallback manifest");
        return Manifest::default();
    };

    match serde_json::from_str::<Manifest>(&raw) {
        Ok(manifest) => manifest,
        Err(e) => {
            tracing::warn!("Invalid manifest JSON in AI response, using fallback: {e}");
            Manifest::default()
        }
    }
}

/// Slide extraction cascade over progressively looser fence patterns.
fn extract_slides(response: &str) -> Vec<EnhancedSlide> {
    for pattern in [&RE_SLIDE_FENCE, &RE_SLIDE_FENCE_BARE, &RE_SLIDE_FENCE_LOOSE] {
        let slides: Vec<EnhancedSlide> = pattern
            .captures_iter(response)
            .filter_map(|caps| {
                let number: usize = caps.get(1)?.as_str().parse().ok()?;
                let html = caps.get(2)?.as_str().trim().to_string();
                Some(build_slide(number, html))
            })
            .collect();

        if !slides.is_empty() {
            return slides;
        }
    }

    Vec::new()
}

/// Assemble one slide, reading metadata from data attributes with defaults.
fn build_slide(number: usize, html: String) -> EnhancedSlide {
    let attr = |re: &Regex, fallback: &str| {
        re.captures(&html)
            .map_or_else(|| fallback.to_string(), |caps| caps[1].to_string())
    };

    let metadata = SlideMetadata {
        kind: attr(&RE_ATTR_TYPE, openai::FALLBACK_SLIDE_TYPE),
        style: attr(&RE_ATTR_STYLE, openai::FALLBACK_SLIDE_STYLE),
        transition: attr(&RE_ATTR_TRANSITION, crate::constants::slides::DEFAULT_TRANSITION),
    };

    EnhancedSlide {
        id: format!("slide-{number}"),
        html_content: html,
        metadata,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    const MANIFEST_JSON: &str = r##"{
  "meta": {
    "title": "Demo",
    "author": "Ana",
    "theme": { "primary": "#111", "secondary": "#222", "tone": "technical", "voice": "formal" }
  },
  "slides": [
    { "id": "slide-1", "title": "Intro", "type": "hero", "style": "dark", "transition": "fade", "content_summary": "intro" }
  ]
}"##;

    fn reply_with(manifest_label: &str) -> String {
        format!(
            "Here you go.\n\n```{manifest_label}\n{MANIFEST_JSON}\n```\n\n\
             ```html slide-1\n<section data-slide-id=\"slide-1\" data-slide-type=\"hero\" data-slide-style=\"dark\" data-transition=\"zoom\">hi</section>\n```\n"
        )
    }

    #[test]
    fn parses_labelled_manifest_and_slide() {
        let parsed = parse_response(&reply_with("json manifest")).unwrap();
        assert_eq!(parsed.manifest.meta.title, "Demo");
        assert_eq!(parsed.html_slides.len(), 1);
        assert_eq!(parsed.html_slides[0].id, "slide-1");
        assert_eq!(parsed.html_slides[0].metadata.kind, "hero");
        assert_eq!(parsed.html_slides[0].metadata.transition, "zoom");
    }

    #[test]
    fn bare_json_fence_is_accepted_as_manifest() {
        let parsed = parse_response(&reply_with("json")).unwrap();
        assert_eq!(parsed.manifest.meta.author, "Ana");
    }

    #[test]
    fn missing_manifest_falls_back_to_default() {
        let reply = "```html slide-1\n<section>only html</section>\n```";
        let parsed = parse_response(reply).unwrap();
        assert_eq!(parsed.manifest.meta.title, "AI Generated Presentation");
        // Backfilled manifest entry for the recovered slide
        assert_eq!(parsed.manifest.slides.len(), 1);
        assert_eq!(parsed.manifest.slides[0].id, "slide-1");
    }

    #[test]
    fn attribute_defaults_apply_when_missing() {
        let reply = "```html slide-1\n<section>plain</section>\n```";
        let parsed = parse_response(reply).unwrap();
        let meta = &parsed.html_slides[0].metadata;
        assert_eq!(meta.kind, "content");
        assert_eq!(meta.style, "dark");
        assert_eq!(meta.transition, "fade");
    }

    #[test]
    fn bare_slide_label_is_recovered() {
        let reply = "```html slide2\n<section>two</section>\n```";
        let parsed = parse_response(reply).unwrap();
        assert_eq!(parsed.html_slides[0].id, "slide-2");
    }

    #[test]
    fn multiple_slides_in_order() {
        let reply = "```html slide-1\n<section>a</section>\n```\n```html slide-2\n<section>b</section>\n```";
        let parsed = parse_response(reply).unwrap();
        assert_eq!(parsed.html_slides.len(), 2);
        assert_eq!(parsed.html_slides[1].html_content, "<section>b</section>");
    }

    #[test]
    fn zero_slides_is_a_parse_error() {
        let err = parse_response("no fences at all").unwrap_err();
        match err {
            Error::Parse { message, .. } => assert!(message.contains("no recoverable")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_manifest_json_degrades_to_default() {
        let reply = "```json manifest\n{not json\n```\n```html slide-1\n<section>x</section>\n```";
        let parsed = parse_response(reply).unwrap();
        assert_eq!(parsed.manifest.meta.title, "AI Generated Presentation");
    }
}
