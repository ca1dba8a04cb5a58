// SPDX-License-Identifier: PMPL-1.0-or-later

//! The embedded display-name tables and their lookup surface.
//!
//! All data lives in per-locale `const` tables under the per-kind
//! submodules. Lookup is O(n) on the key list per table, which is fine
//! for the at-most-a-few-hundred rows a locale carries — these are
//! reference-data lookups, not hot-loop work.
//!
//! Every lookup is strictly per-locale: a miss returns `None` and never
//! consults another locale's table. Fallback chains (parent locale,
//! root, raw code) are the caller's policy.
//!
//! ## Adding a new locale
//!
//! 1. Add a variant to [`crate::locale::Locale`] and wire up `tag()`,
//!    `from_tag()`, `all()`, and `english_name()`
//! 2. Create the per-kind data files under `currency/`, `names/`,
//!    and `zones/` for the kinds the locale translates
//! 3. Add the locale's arm to each `table_for()` (and `cities_for()`),
//!    using the shared empty table for kinds it does not ship

mod currency;
mod names;
mod zones;

use crate::locale::Locale;
use crate::types::{ZoneNames, ZoneRow};

fn lookup<V: Copy>(table: &'static [(&'static str, V)], key: &str) -> Option<V> {
    for &(k, v) in table {
        if k == key {
            return Some(v);
        }
    }
    None
}

/// Look up a currency display name for one locale.
///
/// Lowercase ISO 4217 codes map to the long display name, uppercase
/// codes to a short symbol override.
///
/// # Examples
///
/// ```
/// use cldr_names::locale::Locale;
/// use cldr_names::tables::currency_display_name;
///
/// assert_eq!(currency_display_name(Locale::Gsw, "chf"), Some("Schwiizer Franke"));
/// assert_eq!(currency_display_name(Locale::Gsw, "CHF"), Some("CHF"));
/// ```
pub fn currency_display_name(locale: Locale, code: &str) -> Option<&'static str> {
    lookup(currency::table_for(locale), code)
}

/// Look up a language, territory, or metadata-key display name for one
/// locale.
///
/// Keys are lowercase language subtags (`"de"`), uppercase territory
/// codes or three-digit area codes (`"DE"`, `"001"`), and dotted CLDR
/// metadata keys (`"key.ca"`, `"type.nu.latn"`).
pub fn display_name(locale: Locale, key: &str) -> Option<&'static str> {
    lookup(names::table_for(locale), key)
}

/// Look up the six time-zone name forms for one locale.
pub fn time_zone_names(locale: Locale, tzid: &str) -> Option<ZoneNames> {
    lookup(zones::table_for(locale), tzid).map(ZoneNames::from_row)
}

/// Look up the localized exemplar-city name for a time zone.
pub fn exemplar_city(locale: Locale, tzid: &str) -> Option<&'static str> {
    lookup(zones::cities_for(locale), tzid)
}

// Whole-table accessors, used by the export layer, the `locales` CLI
// listing, and the integrity tests. A locale that ships no table of a
// kind yields the empty slice.

pub fn currency_table(locale: Locale) -> &'static [(&'static str, &'static str)] {
    currency::table_for(locale)
}

pub fn names_table(locale: Locale) -> &'static [(&'static str, &'static str)] {
    names::table_for(locale)
}

pub fn zone_table(locale: Locale) -> &'static [(&'static str, &'static ZoneRow)] {
    zones::table_for(locale)
}

pub fn city_table(locale: Locale) -> &'static [(&'static str, &'static str)] {
    zones::cities_for(locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_and_uppercase_currency_keys_are_distinct() {
        assert_eq!(
            currency_display_name(Locale::Gsw, "ats"),
            Some("Öschtriichische Schilling")
        );
        assert_eq!(currency_display_name(Locale::Gsw, "ATS"), Some("öS"));
    }

    #[test]
    fn shared_exonym_covers_language_and_territory() {
        assert_eq!(display_name(Locale::Ak, "de"), Some("Gyaaman"));
        assert_eq!(display_name(Locale::Ak, "DE"), Some("Gyaaman"));
    }

    #[test]
    fn zone_tuple_slots_line_up() {
        let names = time_zone_names(Locale::Gsw, "Europe/Zurich").expect("gsw translates CET");
        assert_eq!(names.standard_long, "Mitteleuropäischi Schtandardziit");
        assert_eq!(names.standard_short, "MEZ");
        assert_eq!(names.daylight_short, "MESZ");
        assert_eq!(names.generic_long, "Mitteleuropäischi Ziit");
    }

    #[test]
    fn untranslated_slots_are_empty_strings() {
        let names = time_zone_names(Locale::En001, "America/Los_Angeles").expect("en-001 row");
        assert_eq!(names.standard_long, "Pacific Standard Time");
        assert_eq!(names.standard_short, "");
        assert_eq!(names.as_row().len(), 6);
    }

    #[test]
    fn zones_and_cities_are_separate_tables() {
        assert_eq!(exemplar_city(Locale::Gsw, "Europe/Zurich"), Some("Züri"));
        // Brussels has a city name but no translated tuple in gsw.
        assert_eq!(exemplar_city(Locale::Gsw, "Europe/Brussels"), Some("Brüssel"));
        assert!(time_zone_names(Locale::Gsw, "Europe/Brussels").is_none());
    }

    #[test]
    fn missing_kind_behaves_as_empty_table() {
        assert!(currency_table(Locale::Zu).is_empty());
        assert_eq!(currency_display_name(Locale::Zu, "usd"), None);
        assert!(zone_table(Locale::Fo).is_empty());
        assert_eq!(time_zone_names(Locale::Fo, "Europe/Paris"), None);
    }

    #[test]
    fn lookup_misses_return_none() {
        assert_eq!(currency_display_name(Locale::Gsw, "zzz"), None);
        assert_eq!(display_name(Locale::Be, ""), None);
        assert_eq!(exemplar_city(Locale::Sah, "Mars/Olympus_Mons"), None);
    }
}
