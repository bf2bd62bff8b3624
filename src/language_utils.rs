use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for target-language tag handling
///
/// Target languages are identified by tags of the form `ll` or `ll-RR`
/// (an ISO 639-1 primary subtag with an optional region subtag, e.g. `vi`,
/// `en-AU`). This module validates tags and derives human-readable display
/// names for output column headers when the configuration omits them.
/// Split a language tag into its primary and optional region subtags
fn split_tag(tag: &str) -> (String, Option<String>) {
    let trimmed = tag.trim();
    match trimmed.split_once('-') {
        Some((primary, region)) => (primary.to_lowercase(), Some(region.to_uppercase())),
        None => (trimmed.to_lowercase(), None),
    }
}

/// Look up the ISO 639-1 language for a tag's primary subtag
fn primary_language(tag: &str) -> Option<Language> {
    let (primary, _) = split_tag(tag);
    if primary.len() == 2 {
        Language::from_639_1(&primary)
    } else if primary.len() == 3 {
        Language::from_639_3(&primary)
    } else {
        None
    }
}

/// Validate that a language tag has a recognized primary subtag
pub fn validate_language_tag(tag: &str) -> Result<()> {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("Empty language tag"));
    }

    let (_, region) = split_tag(trimmed);
    if let Some(region) = &region {
        // Region subtags are two letters (en-AU) or three digits (es-419)
        let alpha2 = region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic());
        let numeric3 = region.len() == 3 && region.chars().all(|c| c.is_ascii_digit());
        if !alpha2 && !numeric3 {
            return Err(anyhow!("Invalid region subtag in language tag: {}", tag));
        }
    }

    if primary_language(trimmed).is_none() {
        return Err(anyhow!("Invalid language tag: {}", tag));
    }

    Ok(())
}

/// Derive a display name for a language tag, e.g. "English (AU)" for `en-AU`
/// or "Vietnamese" for `vi`. Falls back to the raw tag for unknown codes.
pub fn default_display_name(tag: &str) -> String {
    let (_, region) = split_tag(tag);
    match primary_language(tag) {
        Some(lang) => match region {
            Some(region) => format!("{} ({})", lang.to_name(), region),
            None => lang.to_name().to_string(),
        },
        None => tag.trim().to_string(),
    }
}

/// Check whether two language tags refer to the same target
/// (case-insensitive comparison of primary and region subtags)
pub fn language_tags_match(a: &str, b: &str) -> bool {
    split_tag(a) == split_tag(b)
}
