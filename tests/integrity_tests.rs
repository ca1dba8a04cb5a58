// SPDX-License-Identifier: PMPL-1.0-or-later

//! Data-integrity sweeps over every shipped table: key uniqueness,
//! deterministic reconstruction, tuple shape, and key conventions.

use cldr_names::export::dump_table;
use cldr_names::locale::Locale;
use cldr_names::tables;
use cldr_names::types::TableKind;
use std::collections::HashSet;

fn assert_unique_keys<V>(table: &[(&str, V)], context: &str) {
    let mut seen = HashSet::new();
    for &(key, _) in table {
        assert!(
            seen.insert(key),
            "duplicate key '{}' in {} table",
            key,
            context
        );
    }
}

#[test]
fn every_table_has_unique_keys() {
    for &locale in Locale::all() {
        assert_unique_keys(
            tables::currency_table(locale),
            &format!("{} currency", locale),
        );
        assert_unique_keys(tables::names_table(locale), &format!("{} names", locale));
        assert_unique_keys(tables::zone_table(locale), &format!("{} zones", locale));
        assert_unique_keys(tables::city_table(locale), &format!("{} cities", locale));
    }
}

#[test]
fn reconstructing_a_dump_is_deterministic() {
    for &locale in Locale::all() {
        for &kind in TableKind::all() {
            let first = dump_table(locale, kind);
            let second = dump_table(locale, kind);
            assert_eq!(first, second, "{} {} dump should be stable", locale, kind);
        }
    }
}

#[test]
fn zone_tuples_have_exactly_six_slots() {
    for &locale in Locale::all() {
        for &(tzid, row) in tables::zone_table(locale) {
            assert_eq!(row.len(), 6, "{} {} tuple length", locale, tzid);
            assert!(
                !row[0].is_empty() || !row[4].is_empty(),
                "{} {} should translate at least one long form",
                locale,
                tzid
            );
        }
    }
}

#[test]
fn currency_keys_follow_the_case_convention() {
    // A key is either the lowercase long-name form or the uppercase
    // symbol-override form of an ISO 4217 code; mixed case never occurs.
    for &locale in Locale::all() {
        for &(code, value) in tables::currency_table(locale) {
            let all_lower = code.bytes().all(|b| b.is_ascii_lowercase());
            let all_upper = code.bytes().all(|b| b.is_ascii_uppercase());
            assert!(
                all_lower || all_upper,
                "{} currency key '{}' is mixed-case",
                locale,
                code
            );
            assert!(
                !value.is_empty(),
                "{} currency key '{}' maps to an empty name",
                locale,
                code
            );
        }
    }
}

#[test]
fn every_city_name_is_nonempty() {
    for &locale in Locale::all() {
        for &(tzid, city) in tables::city_table(locale) {
            assert!(!city.is_empty(), "{} {} city name is empty", locale, tzid);
        }
    }
}

#[test]
fn every_locale_ships_at_least_one_table() {
    for &locale in Locale::all() {
        let rows = tables::currency_table(locale).len()
            + tables::names_table(locale).len()
            + tables::zone_table(locale).len()
            + tables::city_table(locale).len();
        assert!(rows > 0, "{} ships no data at all", locale);
    }
}
