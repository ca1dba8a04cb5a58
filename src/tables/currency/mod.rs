// SPDX-License-Identifier: PMPL-1.0-or-later

//! Per-locale currency display-name tables.
//!
//! Keys are ISO 4217 codes: a lowercase key maps to the long display
//! name, an uppercase key to a short symbol override. Both live in one
//! table per locale, exactly as upstream stores them.

mod ak;
mod be;
mod fo;
mod gsw;
mod kea;
mod sah;
mod teo;

use crate::locale::Locale;

/// Empty table for locales that ship no currency names.
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
        Locale::Zu => NONE,
    }
}
