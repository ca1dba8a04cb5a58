// SPDX-License-Identifier: PMPL-1.0-or-later

//! Round-trip and persistence tests for the export layer.

use cldr_names::export::{dump_table, persist_dump, DumpValue, ExportFormat, TableDump};
use cldr_names::locale::Locale;
use cldr_names::types::TableKind;
use std::fs;
use tempfile::TempDir;

#[test]
fn json_round_trip_preserves_unicode() {
    let dump = dump_table(Locale::Gsw, TableKind::Currency);
    let json = ExportFormat::Json.serialize(&dump).expect("serialize");
    let restored: TableDump = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored, dump);
    // The Austrian schilling symbol must survive with its exact code point.
    assert_eq!(
        restored.entries.get("ATS"),
        Some(&DumpValue::Name("öS".to_string()))
    );
}

#[test]
fn yaml_round_trip_preserves_cyrillic() {
    let dump = dump_table(Locale::Be, TableKind::Names);
    let yaml = ExportFormat::Yaml.serialize(&dump).expect("serialize");
    let restored: TableDump = serde_yaml::from_str(&yaml).expect("deserialize");

    assert_eq!(restored, dump);
    assert_eq!(
        restored.entries.get("BY"),
        Some(&DumpValue::Name("Беларусь".to_string()))
    );
}

#[test]
fn zone_dump_round_trips_both_sections() {
    let dump = dump_table(Locale::En001, TableKind::TimeZones);
    let json = ExportFormat::Json.serialize(&dump).expect("serialize");
    let restored: TableDump = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored, dump);
    match restored.entries.get("America/Los_Angeles") {
        Some(DumpValue::ZoneNames(slots)) => {
            assert_eq!(slots.len(), 6);
            assert_eq!(slots[0], "Pacific Standard Time");
        }
        other => panic!("expected a zone tuple, got {:?}", other),
    }
    assert_eq!(
        restored.cities.get("America/Los_Angeles").map(String::as_str),
        Some("Los Angeles")
    );
}

#[test]
fn dump_key_set_matches_the_table() {
    let dump = dump_table(Locale::Ak, TableKind::Names);
    let table = cldr_names::tables::names_table(Locale::Ak);

    assert_eq!(dump.entries.len(), table.len());
    for &(key, value) in table {
        assert_eq!(
            dump.entries.get(key),
            Some(&DumpValue::Name(value.to_string())),
            "key '{}' lost or changed in the dump",
            key
        );
    }
}

#[test]
fn persist_writes_one_file_per_call() {
    let dir = TempDir::new().unwrap();
    let dump = dump_table(Locale::Sah, TableKind::Currency);

    let path = persist_dump(&dump, Some(dir.path()), ExportFormat::Json).expect("persist");
    assert!(path.exists(), "dump file should exist");
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));

    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("sah-currency-"), "file name was {}", name);

    let restored: TableDump =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).expect("parse persisted dump");
    assert_eq!(restored, dump);
}

#[test]
fn persist_yaml_uses_the_yaml_extension() {
    let dir = TempDir::new().unwrap();
    let dump = dump_table(Locale::Kea, TableKind::TimeZones);

    let path = persist_dump(&dump, Some(dir.path()), ExportFormat::Yaml).expect("persist");
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("yaml"));

    let restored: TableDump =
        serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).expect("parse persisted dump");
    assert_eq!(restored, dump);
}

#[test]
fn empty_tables_dump_as_empty_maps() {
    let dump = dump_table(Locale::Zu, TableKind::TimeZones);
    assert!(dump.entries.is_empty());
    assert!(dump.cities.is_empty());

    let json = ExportFormat::Json.serialize(&dump).expect("serialize");
    let restored: TableDump = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, dump);
}
