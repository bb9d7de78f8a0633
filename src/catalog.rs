// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Language catalog: display name → OCR engine language code
//!
//! Static data populated once at compile time and never mutated. The
//! catalog drives the selector on the page and resolves the submitted
//! display name to the code the engine loads models by.

use thiserror::Error;

/// One selectable language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Human-readable name shown in the selector
    pub name: &'static str,
    /// Engine language code (model artifact identifier)
    pub code: &'static str,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown language name: '{0}'")]
    UnknownLanguage(String),
}

/// All supported languages. Names and codes are each unique.
pub const LANGUAGES: &[LanguageEntry] = &[
    LanguageEntry { name: "Abaza", code: "abq" },
    LanguageEntry { name: "Adyghe", code: "ady" },
    LanguageEntry { name: "Afrikaans", code: "af" },
    LanguageEntry { name: "Angina", code: "ang" },
    LanguageEntry { name: "Arabic", code: "ar" },
    LanguageEntry { name: "Assamese", code: "as" },
    LanguageEntry { name: "Avarsky", code: "ava" },
    LanguageEntry { name: "Azerbaijani", code: "az" },
    LanguageEntry { name: "Belarusian", code: "be" },
    LanguageEntry { name: "Bulgarian", code: "bg" },
    LanguageEntry { name: "Bihari", code: "bh" },
    LanguageEntry { name: "Bhojpuri", code: "bho" },
    LanguageEntry { name: "Bengali", code: "bn" },
    LanguageEntry { name: "Bosnian", code: "bs" },
    LanguageEntry { name: "Simplified Chinese", code: "ch_sim" },
    LanguageEntry { name: "Traditional Chinese", code: "ch_tra" },
    LanguageEntry { name: "Chechen", code: "che" },
    LanguageEntry { name: "Czech", code: "cs" },
    LanguageEntry { name: "Welsh", code: "cy" },
    LanguageEntry { name: "Danish", code: "da" },
    LanguageEntry { name: "Dargwa", code: "dar" },
    LanguageEntry { name: "German", code: "de" },
    LanguageEntry { name: "English", code: "en" },
    LanguageEntry { name: "Spanish", code: "es" },
    LanguageEntry { name: "Estonian", code: "et" },
    LanguageEntry { name: "Persian (Farsi)", code: "fa" },
    LanguageEntry { name: "French", code: "fr" },
    LanguageEntry { name: "Irish", code: "ga" },
    LanguageEntry { name: "Goan Konkani", code: "gom" },
    LanguageEntry { name: "Hindi", code: "hi" },
    LanguageEntry { name: "Croatian", code: "hr" },
    LanguageEntry { name: "Hungarian", code: "hu" },
    LanguageEntry { name: "Indonesian", code: "id" },
    LanguageEntry { name: "Ingush", code: "inh" },
    LanguageEntry { name: "Icelandic", code: "is" },
    LanguageEntry { name: "Italian", code: "it" },
    LanguageEntry { name: "Japanese", code: "ja" },
    LanguageEntry { name: "Kabardian", code: "kbd" },
    LanguageEntry { name: "Kannada", code: "kn" },
    LanguageEntry { name: "Korean", code: "ko" },
    LanguageEntry { name: "Kurdish", code: "ku" },
    LanguageEntry { name: "Latin", code: "la" },
    LanguageEntry { name: "Lak", code: "lbe" },
    LanguageEntry { name: "Lezghian", code: "lez" },
    LanguageEntry { name: "Lithuanian", code: "lt" },
    LanguageEntry { name: "Latvian", code: "lv" },
    LanguageEntry { name: "Magahi", code: "mah" },
    LanguageEntry { name: "Maithili", code: "mai" },
    LanguageEntry { name: "Maori", code: "mi" },
    LanguageEntry { name: "Mongolian", code: "mn" },
    LanguageEntry { name: "Marathi", code: "mr" },
    LanguageEntry { name: "Malay", code: "ms" },
    LanguageEntry { name: "Maltese", code: "mt" },
    LanguageEntry { name: "Nepali", code: "ne" },
    LanguageEntry { name: "Newari", code: "new" },
    LanguageEntry { name: "Dutch", code: "nl" },
    LanguageEntry { name: "Norwegian", code: "no" },
    LanguageEntry { name: "Occitan", code: "oc" },
    LanguageEntry { name: "Pali", code: "pi" },
    LanguageEntry { name: "Polish", code: "pl" },
    LanguageEntry { name: "Portuguese", code: "pt" },
    LanguageEntry { name: "Romanian", code: "ro" },
    LanguageEntry { name: "Russian", code: "ru" },
    LanguageEntry { name: "Serbian (cyrillic)", code: "rs_cyrillic" },
    LanguageEntry { name: "Serbian (latin)", code: "rs_latin" },
    LanguageEntry { name: "Nagpuri", code: "sck" },
    LanguageEntry { name: "Slovak", code: "sk" },
    LanguageEntry { name: "Slovenian", code: "sl" },
    LanguageEntry { name: "Albanian", code: "sq" },
    LanguageEntry { name: "Swedish", code: "sv" },
    LanguageEntry { name: "Swahili", code: "sw" },
    LanguageEntry { name: "Tamil", code: "ta" },
    LanguageEntry { name: "Tabassaran", code: "tab" },
    LanguageEntry { name: "Telugu", code: "te" },
    LanguageEntry { name: "Thai", code: "th" },
    LanguageEntry { name: "Tajik", code: "tjk" },
    LanguageEntry { name: "Tagalog", code: "tl" },
    LanguageEntry { name: "Turkish", code: "tr" },
    LanguageEntry { name: "Uyghur", code: "ug" },
    LanguageEntry { name: "Ukranian", code: "uk" },
    LanguageEntry { name: "Urdu", code: "ur" },
    LanguageEntry { name: "Uzbek", code: "uz" },
    LanguageEntry { name: "Vietnamese", code: "vi" },
];

/// Resolve a display name to its engine language code.
///
/// Fails only for names that were never in the catalog; a selector
/// populated from [`entries`] cannot produce such a name.
pub fn get_code(display_name: &str) -> Result<&'static str, CatalogError> {
    LANGUAGES
        .iter()
        .find(|entry| entry.name == display_name)
        .map(|entry| entry.code)
        .ok_or_else(|| CatalogError::UnknownLanguage(display_name.to_string()))
}

/// Enumerate the catalog for populating a selection control.
pub fn entries() -> impl Iterator<Item = &'static LanguageEntry> {
    LANGUAGES.iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_83_entries() {
        assert_eq!(LANGUAGES.len(), 83);
    }

    #[test]
    fn test_every_name_resolves() {
        for entry in entries() {
            assert_eq!(get_code(entry.name).unwrap(), entry.code);
        }
    }

    #[test]
    fn test_display_names_unique() {
        let names: HashSet<_> = LANGUAGES.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), LANGUAGES.len());
    }

    #[test]
    fn test_codes_unique() {
        let codes: HashSet<_> = LANGUAGES.iter().map(|e| e.code).collect();
        assert_eq!(codes.len(), LANGUAGES.len());
    }

    #[test]
    fn test_unknown_name_fails() {
        let err = get_code("Klingon").unwrap_err();
        assert_eq!(err, CatalogError::UnknownLanguage("Klingon".to_string()));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(get_code("english").is_err());
        assert_eq!(get_code("English").unwrap(), "en");
    }
}
