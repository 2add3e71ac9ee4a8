use anyhow::{Result, anyhow};
use isolang::Language;
use log::warn;

// Language utilities for the codes the translation model understands.
//
// Incoming tags arrive in many shapes ("hi", "hi_IN", "HIN", "hi-IN").
// Everything downstream works on the two-letter codes listed in
// `SUPPORTED_LANGUAGES`, so every tag is folded into that set before use.

/// Language code used when an incoming tag cannot be resolved
pub const DEFAULT_LANGUAGE: &str = "en";

/// Two-letter codes understood by the translation model
pub const SUPPORTED_LANGUAGES: [&str; 9] = ["en", "hi", "ta", "ml", "bn", "mr", "ur", "ne", "si"];

/// ISO 639-2 style three-letter codes and their two-letter equivalents
const THREE_LETTER_CODES: [(&str, &str); 9] = [
    ("hin", "hi"), // Hindi
    ("tam", "ta"), // Tamil
    ("mal", "ml"), // Malayalam
    ("ben", "bn"), // Bengali
    ("mar", "mr"), // Marathi
    ("urd", "ur"), // Urdu
    ("nep", "ne"), // Nepali
    ("sin", "si"), // Sinhala
    ("eng", "en"), // English
];

/// Supported two-letter codes, English first
pub fn supported_languages() -> &'static [&'static str] {
    &SUPPORTED_LANGUAGES
}

/// Look up a two-letter code in the supported table
fn lookup_two_letter(code: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES.iter().copied().find(|supported| *supported == code)
}

/// Look up a three-letter code in the supported table
fn lookup_three_letter(code: &str) -> Option<&'static str> {
    THREE_LETTER_CODES
        .iter()
        .find(|(long, _)| *long == code)
        .map(|(_, short)| *short)
}

/// Normalize an arbitrary language tag to a supported two-letter code
///
/// Locale qualifiers ("hi_IN", "hi-IN") are dropped, three-letter codes are
/// mapped to their two-letter form, and anything whose first two letters
/// form a supported code is accepted. Unknown tags fall back to English.
/// This never fails.
pub fn normalize_language_code(code: &str) -> &'static str {
    let lowered = code.trim().to_lowercase();
    let base = lowered
        .split(['_', '-'])
        .next()
        .unwrap_or_default();

    if let Some(short) = lookup_two_letter(base) {
        return short;
    }

    if let Some(short) = lookup_three_letter(base) {
        return short;
    }

    if let Some(prefix) = base.get(..2) {
        if let Some(short) = lookup_two_letter(prefix) {
            return short;
        }
    }

    warn!("Unmapped language code '{}', defaulting to {}", code, DEFAULT_LANGUAGE);
    DEFAULT_LANGUAGE
}

/// Check whether a tag resolves to a supported language without falling back
pub fn is_supported_language(code: &str) -> bool {
    let lowered = code.trim().to_lowercase();
    let base = lowered.split(['_', '-']).next().unwrap_or_default();
    lookup_two_letter(base).is_some() || lookup_three_letter(base).is_some()
}

/// Check if two language tags resolve to the same supported language
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    normalize_language_code(code1) == normalize_language_code(code2)
}

/// Get the English language name for a supported code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = normalize_language_code(code);
    let lang = Language::from_639_1(normalized)
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", normalized))?;

    Ok(lang.to_name().to_string())
}
