// SPDX-License-Identifier: PMPL-1.0-or-later

//! Shape checks for the keys used by the names tables.
//!
//! Names tables key three kinds of entry: BCP-47 language subtags
//! (lowercase, two or three letters), ISO 3166 territory codes
//! (uppercase, two letters) or UN M.49 area codes (three digits), and
//! dotted CLDR metadata keys (`key.*`, `type.*`). These predicates
//! classify a key by shape only; whether a given locale actually
//! translates it is a lookup question.

/// Whether `key` has the shape of a BCP-47 primary language subtag.
///
/// # Examples
/// ```
/// assert!(cldr_names::locale::is_language_subtag("de"));
/// assert!(cldr_names::locale::is_language_subtag("gsw"));
/// assert!(!cldr_names::locale::is_language_subtag("DE"));
/// ```
pub fn is_language_subtag(key: &str) -> bool {
    (key.len() == 2 || key.len() == 3) && key.bytes().all(|b| b.is_ascii_lowercase())
}

/// Whether `key` has the shape of an ISO 3166 alpha-2 territory code or
/// a UN M.49 three-digit area code.
///
/// # Examples
/// ```
/// assert!(cldr_names::locale::is_territory_code("CH"));
/// assert!(cldr_names::locale::is_territory_code("001"));
/// assert!(!cldr_names::locale::is_territory_code("ch"));
/// ```
pub fn is_territory_code(key: &str) -> bool {
    (key.len() == 2 && key.bytes().all(|b| b.is_ascii_uppercase()))
        || (key.len() == 3 && key.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_shapes_accepted() {
        assert!(is_language_subtag("en"));
        assert!(is_language_subtag("sah"));
        assert!(is_language_subtag("kea"));
    }

    #[test]
    fn language_shapes_rejected() {
        assert!(!is_language_subtag("EN"));
        assert!(!is_language_subtag("e"));
        assert!(!is_language_subtag("engl"));
        assert!(!is_language_subtag("e1"));
    }

    #[test]
    fn territory_shapes() {
        assert!(is_territory_code("DE"));
        assert!(is_territory_code("150"));
        assert!(!is_territory_code("de"));
        assert!(!is_territory_code("D"));
        assert!(!is_territory_code("DEU"));
    }
}
