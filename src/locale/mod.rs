// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale registry for the shipped display-name tables.
//!
//! ## Shipped locales
//!
//! | Tag     | Language            | Tables                      |
//! |---------|---------------------|-----------------------------|
//! | ak      | Akan                | currency, names, time-zones |
//! | be      | Belarusian          | currency, names, time-zones |
//! | en-001  | English (World)     | time-zones                  |
//! | fo      | Faroese             | currency, names             |
//! | gsw     | Swiss German        | currency, names, time-zones |
//! | kea     | Kabuverdianu        | currency, names, time-zones |
//! | sah     | Yakut               | currency, names, time-zones |
//! | teo     | Teso                | currency, names             |
//! | zu      | Zulu                | names                       |
//!
//! Coverage is uneven on purpose: it mirrors what the upstream CLDR
//! dataset actually carries for each locale. A locale missing a table
//! kind behaves as an empty table of that kind.

mod subtags;

pub use subtags::{is_language_subtag, is_territory_code};

use serde::{Deserialize, Serialize};

/// A locale that ships at least one display-name table.
///
/// Each variant maps to a BCP-47-style tag. The enum is used by the CLI
/// locale argument and as the first axis of every lookup function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    Ak,
    Be,
    En001,
    Fo,
    Gsw,
    Kea,
    Sah,
    Teo,
    Zu,
}

impl Locale {
    /// Canonical BCP-47 tag for this locale.
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::Ak => "ak",
            Locale::Be => "be",
            Locale::En001 => "en-001",
            Locale::Fo => "fo",
            Locale::Gsw => "gsw",
            Locale::Kea => "kea",
            Locale::Sah => "sah",
            Locale::Teo => "teo",
            Locale::Zu => "zu",
        }
    }

    /// Parse a locale tag into a shipped locale.
    ///
    /// Accepts both `-` and `_` as subtag separators and any letter case
    /// (`en-001`, `en_001`, `EN-001` all resolve). Returns `None` for
    /// tags with no shipped tables.
    pub fn from_tag(tag: &str) -> Option<Locale> {
        let normalized = tag.to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "ak" => Some(Locale::Ak),
            "be" => Some(Locale::Be),
            "en-001" => Some(Locale::En001),
            "fo" => Some(Locale::Fo),
            "gsw" => Some(Locale::Gsw),
            "kea" => Some(Locale::Kea),
            "sah" => Some(Locale::Sah),
            "teo" => Some(Locale::Teo),
            "zu" => Some(Locale::Zu),
            _ => None,
        }
    }

    /// All shipped locales, in tag order.
    pub fn all() -> &'static [Locale] {
        &[
            Locale::Ak,
            Locale::Be,
            Locale::En001,
            Locale::Fo,
            Locale::Gsw,
            Locale::Kea,
            Locale::Sah,
            Locale::Teo,
            Locale::Zu,
        ]
    }

    /// English name of the locale, for listings and diagnostics.
    pub fn english_name(&self) -> &'static str {
        match self {
            Locale::Ak => "Akan",
            Locale::Be => "Belarusian",
            Locale::En001 => "English (World)",
            Locale::Fo => "Faroese",
            Locale::Gsw => "Swiss German",
            Locale::Kea => "Kabuverdianu",
            Locale::Sah => "Yakut",
            Locale::Teo => "Teso",
            Locale::Zu => "Zulu",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trip() {
        for locale in Locale::all() {
            let parsed = Locale::from_tag(locale.tag()).expect("tag should parse");
            assert_eq!(*locale, parsed);
        }
    }

    #[test]
    fn separator_and_case_normalization() {
        assert_eq!(Locale::from_tag("en_001"), Some(Locale::En001));
        assert_eq!(Locale::from_tag("EN-001"), Some(Locale::En001));
        assert_eq!(Locale::from_tag("GSW"), Some(Locale::Gsw));
    }

    #[test]
    fn unknown_tags_rejected() {
        assert_eq!(Locale::from_tag("xx"), None);
        assert_eq!(Locale::from_tag(""), None);
        assert_eq!(Locale::from_tag("zh-Hant-HK"), None);
    }
}
