// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization and persistence for table snapshots.
//!
//! A [`TableDump`] is an owned, serde-roundtrippable snapshot of one
//! (locale, kind) table. Dumping and re-reading a table must reproduce
//! the exact key and value sets, including every non-ASCII code point,
//! so consumers can carry the data as JSON or YAML without loss.

use crate::locale::Locale;
use crate::tables;
use crate::types::TableKind;
use anyhow::Result;
use chrono::Utc;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl ExportFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "yaml" | "yml" => Some(ExportFormat::Yaml),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }

    pub fn serialize(&self, dump: &TableDump) -> Result<String> {
        match self {
            ExportFormat::Json => Ok(serde_json::to_string_pretty(dump)?),
            ExportFormat::Yaml => Ok(serde_yaml::to_string(dump)?),
        }
    }
}

/// A single dumped value: a display name, or the six time-zone name
/// slots in stored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DumpValue {
    Name(String),
    ZoneNames(Vec<String>),
}

/// Owned snapshot of one (locale, kind) table.
///
/// For the time-zones kind the name tuples land in `entries` and the
/// exemplar-city map in `cities`; the two are distinct tables and stay
/// distinct in the serialized form. For the other kinds `cities` is
/// empty and omitted from the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDump {
    pub locale: String,
    pub kind: TableKind,
    pub entries: BTreeMap<String, DumpValue>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub cities: BTreeMap<String, String>,
}

/// Snapshot one table as owned data.
pub fn dump_table(locale: Locale, kind: TableKind) -> TableDump {
    let mut entries = BTreeMap::new();
    let mut cities = BTreeMap::new();

    match kind {
        TableKind::Currency => {
            for &(code, name) in tables::currency_table(locale) {
                entries.insert(code.to_string(), DumpValue::Name(name.to_string()));
            }
        }
        TableKind::Names => {
            for &(key, name) in tables::names_table(locale) {
                entries.insert(key.to_string(), DumpValue::Name(name.to_string()));
            }
        }
        TableKind::TimeZones => {
            for &(tzid, row) in tables::zone_table(locale) {
                let slots = row.iter().map(|slot| slot.to_string()).collect();
                entries.insert(tzid.to_string(), DumpValue::ZoneNames(slots));
            }
            for &(tzid, city) in tables::city_table(locale) {
                cities.insert(tzid.to_string(), city.to_string());
            }
        }
    }

    TableDump {
        locale: locale.tag().to_string(),
        kind,
        entries,
        cities,
    }
}

/// Write a dump to a timestamped file under `directory` (default
/// `exports/`), creating the directory if needed. Returns the path
/// written.
pub fn persist_dump(
    dump: &TableDump,
    directory: Option<&Path>,
    format: ExportFormat,
) -> Result<PathBuf> {
    let base_dir = directory
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("exports"));
    fs::create_dir_all(&base_dir)?;

    let timestamp = Utc::now().format("%Y%m%d%H%M%S").to_string();
    let file_name = format!(
        "{}-{}-{}.{}",
        dump.locale,
        dump.kind.label(),
        timestamp,
        format.extension()
    );
    let path = base_dir.join(file_name);
    fs::write(&path, format.serialize(dump)?)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parse_accepts_aliases() {
        assert_eq!(ExportFormat::parse("json"), Some(ExportFormat::Json));
        assert_eq!(ExportFormat::parse("YAML"), Some(ExportFormat::Yaml));
        assert_eq!(ExportFormat::parse("yml"), Some(ExportFormat::Yaml));
        assert_eq!(ExportFormat::parse("csv"), None);
    }

    #[test]
    fn name_dump_has_no_cities_section() {
        let dump = dump_table(Locale::Be, TableKind::Names);
        assert!(dump.cities.is_empty());
        assert_eq!(
            dump.entries.get("BY"),
            Some(&DumpValue::Name("Беларусь".to_string()))
        );
    }

    #[test]
    fn zone_dump_splits_tuples_and_cities() {
        let dump = dump_table(Locale::Gsw, TableKind::TimeZones);
        match dump.entries.get("Europe/Zurich") {
            Some(DumpValue::ZoneNames(slots)) => assert_eq!(slots.len(), 6),
            other => panic!("expected a zone tuple, got {:?}", other),
        }
        assert_eq!(dump.cities.get("Europe/Zurich").map(String::as_str), Some("Züri"));
    }
}
