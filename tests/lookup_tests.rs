// SPDX-License-Identifier: PMPL-1.0-or-later

//! Lookup behavior over the public API: the concrete per-locale
//! scenarios and the strict per-locale miss semantics.

use cldr_names::locale::Locale;
use cldr_names::tables::{currency_display_name, display_name, exemplar_city, time_zone_names};

// === Currency ===

#[test]
fn gsw_franc_long_name_and_symbol() {
    assert_eq!(
        currency_display_name(Locale::Gsw, "chf"),
        Some("Schwiizer Franke"),
        "lowercase key carries the long display name"
    );
    assert_eq!(
        currency_display_name(Locale::Gsw, "CHF"),
        Some("CHF"),
        "uppercase key carries the symbol override"
    );
}

#[test]
fn schilling_symbol_keeps_its_umlaut() {
    assert_eq!(currency_display_name(Locale::Gsw, "ATS"), Some("öS"));
}

#[test]
fn currency_lookup_is_case_exact() {
    // The two key cases are distinct entries, so a mixed-case key is a miss.
    assert_eq!(currency_display_name(Locale::Gsw, "Chf"), None);
}

// === Language / territory names ===

#[test]
fn akan_shares_one_exonym_for_german_and_germany() {
    assert_eq!(display_name(Locale::Ak, "de"), Some("Gyaaman"));
    assert_eq!(display_name(Locale::Ak, "DE"), Some("Gyaaman"));
}

#[test]
fn area_codes_and_metadata_keys_resolve() {
    assert_eq!(display_name(Locale::Be, "001"), Some("Свет"));
    assert_eq!(display_name(Locale::Be, "key.ca"), Some("каляндар"));
    assert_eq!(
        display_name(Locale::Be, "type.ca.gregorian"),
        Some("грыгарыянскі каляндар")
    );
}

// === Time zones ===

#[test]
fn world_english_pacific_tuple() {
    let names = time_zone_names(Locale::En001, "America/Los_Angeles")
        .expect("en-001 ships the Pacific tuple");
    assert_eq!(names.standard_long, "Pacific Standard Time");
    assert_eq!(names.daylight_long, "Pacific Daylight Time");
    assert_eq!(names.generic_long, "Pacific Time");
    // en-001 drops the US abbreviations; the short slots stay empty.
    assert_eq!(names.standard_short, "");
    assert_eq!(names.daylight_short, "");
}

#[test]
fn zones_in_one_metazone_share_the_tuple() {
    let la = time_zone_names(Locale::En001, "America/Los_Angeles").unwrap();
    let vancouver = time_zone_names(Locale::En001, "America/Vancouver").unwrap();
    assert_eq!(la, vancouver);
}

#[test]
fn exemplar_city_is_its_own_table() {
    assert_eq!(
        exemplar_city(Locale::En001, "America/Los_Angeles"),
        Some("Los Angeles")
    );
    assert_eq!(exemplar_city(Locale::Sah, "Asia/Yakutsk"), Some("Дьокуускай"));
    // gsw names the Brussels city without translating its zone tuple.
    assert_eq!(exemplar_city(Locale::Gsw, "Europe/Brussels"), Some("Brüssel"));
    assert!(time_zone_names(Locale::Gsw, "Europe/Brussels").is_none());
}

// === Miss semantics ===

#[test]
fn misses_never_leak_across_locales() {
    // Each key resolves in the locale on the left and must miss in the
    // locale on the right, even though both ship the same table kind.
    assert!(currency_display_name(Locale::Gsw, "ats").is_some());
    assert_eq!(currency_display_name(Locale::Be, "ats"), None);

    assert!(display_name(Locale::Be, "key.ca").is_some());
    assert_eq!(display_name(Locale::Ak, "key.ca"), None);

    assert!(time_zone_names(Locale::Sah, "Asia/Yakutsk").is_some());
    assert_eq!(time_zone_names(Locale::En001, "Asia/Yakutsk"), None);

    assert!(exemplar_city(Locale::Kea, "Atlantic/Cape_Verde").is_some());
    assert_eq!(exemplar_city(Locale::Gsw, "Atlantic/Cape_Verde"), None);
}

#[test]
fn locales_without_a_kind_miss_everything() {
    assert_eq!(currency_display_name(Locale::Zu, "usd"), None);
    assert_eq!(currency_display_name(Locale::En001, "usd"), None);
    assert_eq!(display_name(Locale::En001, "DE"), None);
    assert_eq!(time_zone_names(Locale::Teo, "Africa/Kampala"), None);
}

#[test]
fn unknown_keys_miss() {
    assert_eq!(currency_display_name(Locale::Gsw, "not-a-code"), None);
    assert_eq!(display_name(Locale::Zu, "zz"), None);
    assert_eq!(time_zone_names(Locale::Be, "Europe/Atlantis"), None);
    assert_eq!(exemplar_city(Locale::Ak, ""), None);
}
