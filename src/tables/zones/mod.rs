// SPDX-License-Identifier: PMPL-1.0-or-later

//! Per-locale time-zone display-name tables.
//!
//! Each locale carries two tables keyed by IANA timezone identifier:
//! one mapping a zone to its six-slot name tuple (see
//! [`crate::types::ZoneRow`] for the slot order) and one mapping a zone
//! to its localized exemplar-city name. A metazone tuple shared by
//! several zones is hoisted into a file-local constant referenced by
//! each zone row, so one translation is stored once.

mod ak;
mod be;
mod en_001;
mod gsw;
mod kea;
mod sah;

use crate::locale::Locale;
use crate::types::ZoneRow;

/// Empty tables for locales that ship no time-zone names.
const NO_ZONES: &[(&str, &ZoneRow)] = &[];
const NO_CITIES: &[(&str, &str)] = &[];

pub(crate) fn table_for(locale: Locale) -> &'static [(&'static str, &'static ZoneRow)] {
    match locale {
        Locale::Ak => ak::ZONES,
        Locale::Be => be::ZONES,
        Locale::En001 => en_001::ZONES,
        Locale::Fo => NO_ZONES,
        Locale::Gsw => gsw::ZONES,
        Locale::Kea => kea::ZONES,
        Locale::Sah => sah::ZONES,
        Locale::Teo => NO_ZONES,
        Locale::Zu => NO_ZONES,
    }
}

pub(crate) fn cities_for(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::Ak => ak::CITIES,
        Locale::Be => be::CITIES,
        Locale::En001 => en_001::CITIES,
        Locale::Fo => NO_CITIES,
        Locale::Gsw => gsw::CITIES,
        Locale::Kea => kea::CITIES,
        Locale::Sah => sah::CITIES,
        Locale::Teo => NO_CITIES,
        Locale::Zu => NO_CITIES,
    }
}
