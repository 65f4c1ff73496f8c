//! Metadata extraction from the frontmatter mapping.
//!
//! Pure and total: every key is optional and absence falls back to a
//! default. Two historical frontmatter shapes are both accepted, a flat
//! form (`primary_color`, `tone`, `voice` as a string) and a nested form
//! (`theme: {...}`, `voice: {tone, style}`); flat keys are the newer
//! convention and win for overlapping fields.

use serde_yaml::Value;

use crate::constants::meta;
use crate::types::{Animation, FontSizes, PresentationMeta, Spacing, Theme, Voice};

/// Build a fully populated [`PresentationMeta`] from an arbitrary
/// frontmatter mapping.
#[must_use]
pub fn extract_metadata(frontmatter: &Value) -> PresentationMeta {
    let theme = extract_theme(frontmatter);
    let voice = extract_voice(frontmatter);

    PresentationMeta {
        title: scalar_string(&frontmatter["title"])
            .unwrap_or_else(|| meta::DEFAULT_TITLE.to_string()),
        subtitle: scalar_string(&frontmatter["subtitle"]),
        author: scalar_string(&frontmatter["author"])
            .unwrap_or_else(|| meta::DEFAULT_AUTHOR.to_string()),
        date: scalar_string(&frontmatter["date"]),
        version: scalar_string(&frontmatter["version"])
            .unwrap_or_else(|| meta::DEFAULT_VERSION.to_string()),
        description: scalar_string(&frontmatter["description"]),
        theme,
        voice,
    }
}

/// Layered theme resolution: defaults, then the nested `theme` mapping,
/// then flat color keys. The order is load-bearing; flat keys are
/// authoritative.
fn extract_theme(frontmatter: &Value) -> Theme {
    let mut theme = Theme::default();

    let nested = &frontmatter["theme"];
    if nested.is_mapping() {
        overlay_theme(&mut theme, nested);
    }

    if let Some(primary) = scalar_string(&frontmatter["primary_color"]) {
        theme.accent_color.clone_from(&primary);
        theme.primary_color = primary;
    }
    if let Some(secondary) = scalar_string(&frontmatter["secondary_color"]) {
        theme.secondary_color = secondary;
    }

    theme
}

/// Shallow merge of the nested theme mapping over the defaults: each
/// present key replaces the corresponding field; a present composite key
/// (`fontSize`, `spacing`, `animation`) replaces the whole sub-struct,
/// with its own missing subkeys falling back to defaults.
fn overlay_theme(theme: &mut Theme, nested: &Value) {
    let fields: [(&str, &mut String); 6] = [
        ("primaryColor", &mut theme.primary_color),
        ("secondaryColor", &mut theme.secondary_color),
        ("backgroundColor", &mut theme.background_color),
        ("textColor", &mut theme.text_color),
        ("accentColor", &mut theme.accent_color),
        ("fontFamily", &mut theme.font_family),
    ];
    for (key, slot) in fields {
        if let Some(value) = scalar_string(&nested[key]) {
            *slot = value;
        }
    }

    let font_size = &nested["fontSize"];
    if font_size.is_mapping() {
        let defaults = FontSizes::default();
        theme.font_size = FontSizes {
            title: scalar_string(&font_size["title"]).unwrap_or(defaults.title),
            subtitle: scalar_string(&font_size["subtitle"]).unwrap_or(defaults.subtitle),
            body: scalar_string(&font_size["body"]).unwrap_or(defaults.body),
            caption: scalar_string(&font_size["caption"]).unwrap_or(defaults.caption),
        };
    }

    let spacing = &nested["spacing"];
    if spacing.is_mapping() {
        let defaults = Spacing::default();
        theme.spacing = Spacing {
            section: scalar_string(&spacing["section"]).unwrap_or(defaults.section),
            paragraph: scalar_string(&spacing["paragraph"]).unwrap_or(defaults.paragraph),
        };
    }

    let animation = &nested["animation"];
    if animation.is_mapping() {
        let defaults = Animation::default();
        theme.animation = Animation {
            duration: animation["duration"].as_f64().unwrap_or(defaults.duration),
            easing: scalar_string(&animation["easing"]).unwrap_or(defaults.easing),
        };
    }
}

/// Resolve tone and style across both frontmatter conventions.
///
/// The `voice` key does historical double duty: as a flat string it means
/// the style, as a mapping it carries `{tone, style}`. The fallback order
/// is preserved exactly; downstream content may depend on either form.
fn extract_voice(frontmatter: &Value) -> Voice {
    let nested = &frontmatter["voice"];

    let tone = scalar_string(&frontmatter["tone"])
        .or_else(|| scalar_string(&nested["tone"]))
        .unwrap_or_else(|| meta::DEFAULT_TONE.to_string());

    let style = nested
        .as_str()
        .map(ToString::to_string)
        .or_else(|| scalar_string(&nested["style"]))
        .unwrap_or_else(|| meta::DEFAULT_STYLE.to_string());

    Voice { tone, style }
}

/// Coerce a YAML scalar to a string, so unquoted values like
/// `version: 1.0` still round-trip sensibly.
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn fm(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn empty_frontmatter_yields_all_defaults() {
        let meta = extract_metadata(&Value::Null);
        assert_eq!(meta.title, "Untitled Presentation");
        assert_eq!(meta.author, "Unknown Author");
        assert_eq!(meta.version, "1.0");
        assert_eq!(meta.voice.tone, "professional");
        assert_eq!(meta.voice.style, "formal");
        assert_eq!(meta.theme, Theme::default());
    }

    #[test]
    fn flat_color_keys_win_over_nested_theme() {
        let meta = extract_metadata(&fm(
            "theme:\n  accentColor: \"#111\"\nprimary_color: \"#222\"",
        ));
        assert_eq!(meta.theme.accent_color, "#222");
        assert_eq!(meta.theme.primary_color, "#222");
    }

    #[test]
    fn primary_color_sets_both_primary_and_accent() {
        let meta = extract_metadata(&fm("primary_color: \"#00E0FF\"\nsecondary_color: \"#FF00AA\""));
        assert_eq!(meta.theme.primary_color, "#00E0FF");
        assert_eq!(meta.theme.accent_color, "#00E0FF");
        assert_eq!(meta.theme.secondary_color, "#FF00AA");
    }

    #[test]
    fn nested_theme_overlays_defaults_shallowly() {
        let meta = extract_metadata(&fm(
            "theme:\n  backgroundColor: \"#000\"\n  fontSize:\n    title: 4rem",
        ));
        assert_eq!(meta.theme.background_color, "#000");
        assert_eq!(meta.theme.font_size.title, "4rem");
        // Untouched subkeys keep their defaults
        assert_eq!(meta.theme.font_size.body, "1.125rem");
        assert_eq!(meta.theme.text_color, Theme::default().text_color);
    }

    #[test]
    fn flat_tone_wins_over_nested_voice_tone() {
        let meta = extract_metadata(&fm("tone: technical\nvoice:\n  tone: casual\n  style: storytelling"));
        assert_eq!(meta.voice.tone, "technical");
        assert_eq!(meta.voice.style, "storytelling");
    }

    #[test]
    fn flat_voice_string_serves_as_style() {
        let meta = extract_metadata(&fm("voice: conversational"));
        assert_eq!(meta.voice.style, "conversational");
        assert_eq!(meta.voice.tone, "professional");
    }

    #[test]
    fn nested_voice_mapping_fills_both_fields() {
        let meta = extract_metadata(&fm("voice:\n  tone: creative\n  style: data-driven"));
        assert_eq!(meta.voice.tone, "creative");
        assert_eq!(meta.voice.style, "data-driven");
    }

    #[test]
    fn numeric_version_is_coerced_to_string() {
        let meta = extract_metadata(&fm("version: 2.1"));
        assert_eq!(meta.version, "2.1");
    }

    #[test]
    fn animation_overlay_reads_duration_and_easing() {
        let meta = extract_metadata(&fm("theme:\n  animation:\n    duration: 1.2\n    easing: ease-out"));
        assert!((meta.theme.animation.duration - 1.2).abs() < f64::EPSILON);
        assert_eq!(meta.theme.animation.easing, "ease-out");
    }
}
