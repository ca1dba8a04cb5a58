// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for cldr-names.

use serde::{Deserialize, Serialize};

/// The three table kinds shipped per locale.
///
/// Every locale carries at most one table of each kind; a locale with no
/// table of a given kind behaves as an empty table (all lookups miss).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TableKind {
    /// ISO 4217 currency code to display name or symbol override.
    Currency,
    /// Language subtag / territory code / CLDR metadata key to localized name.
    Names,
    /// IANA timezone identifier to name tuple and exemplar city.
    TimeZones,
}

impl TableKind {
    /// All table kinds, in display order.
    pub fn all() -> &'static [TableKind] {
        &[TableKind::Currency, TableKind::Names, TableKind::TimeZones]
    }

    /// Stable lowercase label, used in export file names and CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            TableKind::Currency => "currency",
            TableKind::Names => "names",
            TableKind::TimeZones => "time-zones",
        }
    }
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A timezone display-name tuple in CLDR slot order:
/// standard long, standard short, daylight long, daylight short,
/// generic long, generic short.
///
/// An empty string means the slot is untranslated for that locale and the
/// consumer should fall back to a higher-priority locale or to the raw
/// offset. Every zone row has exactly these six slots.
pub type ZoneRow = [&'static str; 6];

/// Named view over a [`ZoneRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZoneNames {
    pub standard_long: &'static str,
    pub standard_short: &'static str,
    pub daylight_long: &'static str,
    pub daylight_short: &'static str,
    pub generic_long: &'static str,
    pub generic_short: &'static str,
}

impl ZoneNames {
    pub fn from_row(row: &'static ZoneRow) -> Self {
        ZoneNames {
            standard_long: row[0],
            standard_short: row[1],
            daylight_long: row[2],
            daylight_short: row[3],
            generic_long: row[4],
            generic_short: row[5],
        }
    }

    /// Positional form, matching the stored slot order.
    pub fn as_row(&self) -> ZoneRow {
        [
            self.standard_long,
            self.standard_short,
            self.daylight_long,
            self.daylight_short,
            self.generic_long,
            self.generic_short,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_names_round_trip_row() {
        static ROW: ZoneRow = ["a", "b", "c", "d", "e", "f"];
        let names = ZoneNames::from_row(&ROW);
        assert_eq!(names.standard_long, "a");
        assert_eq!(names.generic_short, "f");
        assert_eq!(names.as_row(), ROW);
    }

    #[test]
    fn kind_labels_are_stable() {
        assert_eq!(TableKind::Currency.label(), "currency");
        assert_eq!(TableKind::TimeZones.to_string(), "time-zones");
        assert_eq!(TableKind::all().len(), 3);
    }
}
