// SPDX-License-Identifier: PMPL-1.0-or-later

//! Time-zone display names for English (World) (`en-001`).
//!
//! Short slots are left empty for most metazones: the region-neutral
//! English locale drops the US-centric abbreviations and keeps only the
//! globally recognized GMT and UTC short forms.

use crate::types::ZoneRow;

const AMERICA_PACIFIC: ZoneRow = [
    "Pacific Standard Time",
    "",
    "Pacific Daylight Time",
    "",
    "Pacific Time",
    "",
];
const AMERICA_MOUNTAIN: ZoneRow = [
    "Mountain Standard Time",
    "",
    "Mountain Daylight Time",
    "",
    "Mountain Time",
    "",
];
const AMERICA_CENTRAL: ZoneRow = [
    "Central Standard Time",
    "",
    "Central Daylight Time",
    "",
    "Central Time",
    "",
];
const AMERICA_EASTERN: ZoneRow = [
    "Eastern Standard Time",
    "",
    "Eastern Daylight Time",
    "",
    "Eastern Time",
    "",
];
const ATLANTIC: ZoneRow = [
    "Atlantic Standard Time",
    "",
    "Atlantic Daylight Time",
    "",
    "Atlantic Time",
    "",
];
const ALASKA: ZoneRow = [
    "Alaska Standard Time",
    "",
    "Alaska Daylight Time",
    "",
    "Alaska Time",
    "",
];
const GMT: ZoneRow = ["Greenwich Mean Time", "GMT", "", "", "", ""];
const EUROPE_CENTRAL: ZoneRow = [
    "Central European Standard Time",
    "",
    "Central European Summer Time",
    "",
    "Central European Time",
    "",
];
const EUROPE_EASTERN: ZoneRow = [
    "Eastern European Standard Time",
    "",
    "Eastern European Summer Time",
    "",
    "Eastern European Time",
    "",
];
const EUROPE_WESTERN: ZoneRow = [
    "Western European Standard Time",
    "",
    "Western European Summer Time",
    "",
    "Western European Time",
    "",
];
const MOSCOW: ZoneRow = [
    "Moscow Standard Time",
    "",
    "Moscow Summer Time",
    "",
    "Moscow Time",
    "",
];
const AUSTRALIA_EASTERN: ZoneRow = [
    "Australian Eastern Standard Time",
    "",
    "Australian Eastern Daylight Time",
    "",
    "Australian Eastern Time",
    "",
];
const NEW_ZEALAND: ZoneRow = [
    "New Zealand Standard Time",
    "",
    "New Zealand Daylight Time",
    "",
    "New Zealand Time",
    "",
];

pub(super) const ZONES: &[(&str, &ZoneRow)] = &[
    ("America/Anchorage", &ALASKA),
    ("America/Chicago", &AMERICA_CENTRAL),
    ("America/Denver", &AMERICA_MOUNTAIN),
    ("America/Edmonton", &AMERICA_MOUNTAIN),
    ("America/Halifax", &ATLANTIC),
    ("America/Los_Angeles", &AMERICA_PACIFIC),
    ("America/Mexico_City", &AMERICA_CENTRAL),
    ("America/New_York", &AMERICA_EASTERN),
    ("America/Toronto", &AMERICA_EASTERN),
    ("America/Vancouver", &AMERICA_PACIFIC),
    ("America/Winnipeg", &AMERICA_CENTRAL),
    ("Asia/Kolkata", &["India Standard Time", "", "", "", "", ""]),
    ("Asia/Shanghai", &["China Standard Time", "", "China Daylight Time", "", "China Time", ""]),
    ("Asia/Tokyo", &["Japan Standard Time", "", "Japan Daylight Time", "", "Japan Time", ""]),
    ("Atlantic/Bermuda", &ATLANTIC),
    ("Atlantic/Canary", &EUROPE_WESTERN),
    ("Atlantic/Reykjavik", &GMT),
    ("Australia/Sydney", &AUSTRALIA_EASTERN),
    ("Etc/UTC", &["Coordinated Universal Time", "UTC", "", "", "", ""]),
    ("Europe/Athens", &EUROPE_EASTERN),
    ("Europe/Berlin", &EUROPE_CENTRAL),
    ("Europe/Dublin", &["Greenwich Mean Time", "GMT", "Irish Standard Time", "", "", ""]),
    ("Europe/Helsinki", &EUROPE_EASTERN),
    ("Europe/Lisbon", &EUROPE_WESTERN),
    ("Europe/London", &["Greenwich Mean Time", "GMT", "British Summer Time", "", "", ""]),
    ("Europe/Moscow", &MOSCOW),
    ("Europe/Paris", &EUROPE_CENTRAL),
    ("Europe/Zurich", &EUROPE_CENTRAL),
    ("Pacific/Auckland", &NEW_ZEALAND),
];

pub(super) const CITIES: &[(&str, &str)] = &[
    ("America/Anchorage", "Anchorage"),
    ("America/Chicago", "Chicago"),
    ("America/Denver", "Denver"),
    ("America/Halifax", "Halifax"),
    ("America/Los_Angeles", "Los Angeles"),
    ("America/Mexico_City", "Mexico City"),
    ("America/New_York", "New York"),
    ("America/Toronto", "Toronto"),
    ("America/Vancouver", "Vancouver"),
    ("Asia/Kolkata", "Kolkata"),
    ("Asia/Shanghai", "Shanghai"),
    ("Asia/Tokyo", "Tokyo"),
    ("Atlantic/Bermuda", "Bermuda"),
    ("Atlantic/Canary", "Canary"),
    ("Atlantic/Reykjavik", "Reykjavik"),
    ("Australia/Sydney", "Sydney"),
    ("Europe/Athens", "Athens"),
    ("Europe/Berlin", "Berlin"),
    ("Europe/Dublin", "Dublin"),
    ("Europe/Helsinki", "Helsinki"),
    ("Europe/Lisbon", "Lisbon"),
    ("Europe/London", "London"),
    ("Europe/Moscow", "Moscow"),
    ("Europe/Paris", "Paris"),
    ("Europe/Zurich", "Zurich"),
    ("Pacific/Auckland", "Auckland"),
];
