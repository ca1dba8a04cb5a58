// SPDX-License-Identifier: PMPL-1.0-or-later

//! Per-locale language/territory display-name tables.
//!
//! Keys are BCP-47 language subtags (lowercase), ISO 3166 territory
//! codes (uppercase) or UN M.49 area codes (digits), and dotted CLDR
//! metadata keys (`key.*`, `type.*`). Where one translated string is
//! the value of both a language key and its territory key, the file
//! hoists it into a local constant referenced by both rows.

mod ak;
mod be;
mod fo;
mod gsw;
mod kea;
mod sah;
mod teo;
mod zu;

use crate::locale::Locale;

/// Empty table for locales that ship no language/territory names.
const NONE: &[(&str, &str)] = &[];

pub(crate) fn table_for(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::Ak => ak::TABLE,
        Locale::Be => be::TABLE,
        Locale::En001 => NONE,
        Locale::Fo => fo::TABLE,
        Locale::Gsw => gsw::TABLE,
        Locale::Kea => kea::TABLE,
        Locale::Sah => sah::TABLE,
        Locale::Teo => teo::TABLE,
        Locale::Zu => zu::TABLE,
    }
}
