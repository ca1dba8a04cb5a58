// SPDX-License-Identifier: PMPL-1.0-or-later

//! Time-zone display names for Swiss German (`gsw`).

use crate::types::ZoneRow;

const EUROPE_CENTRAL: ZoneRow = [
    "Mitteleuropäischi Schtandardziit",
    "MEZ",
    "Mitteleuropäischi Summerziit",
    "MESZ",
    "Mitteleuropäischi Ziit",
    "MEZ",
];
const EUROPE_EASTERN: ZoneRow = [
    "Oschteuropäischi Schtandardziit",
    "OEZ",
    "Oschteuropäischi Summerziit",
    "OESZ",
    "Oschteuropäischi Ziit",
    "OEZ",
];
const EUROPE_WESTERN: ZoneRow = [
    "Weschteuropäischi Schtandardziit",
    "WEZ",
    "Weschteuropäischi Summerziit",
    "WESZ",
    "Weschteuropäischi Ziit",
    "WEZ",
];
const ATLANTIC: ZoneRow = [
    "Atlantik-Schtandardziit",
    "",
    "Atlantik-Summerziit",
    "",
    "Atlantik-Ziit",
    "",
];
const GMT: ZoneRow = ["Mittleri Greenwich-Ziit", "GMT", "", "", "", ""];

pub(super) const ZONES: &[(&str, &ZoneRow)] = &[
    ("Atlantic/Bermuda", &ATLANTIC),
    ("Atlantic/Canary", &EUROPE_WESTERN),
    ("Europe/Athens", &EUROPE_EASTERN),
    ("Europe/Berlin", &EUROPE_CENTRAL),
    ("Europe/Kiev", &EUROPE_EASTERN),
    ("Europe/Lisbon", &EUROPE_WESTERN),
    ("Europe/London", &GMT),
    ("Europe/Paris", &EUROPE_CENTRAL),
    ("Europe/Vienna", &EUROPE_CENTRAL),
    ("Europe/Zurich", &EUROPE_CENTRAL),
];

pub(super) const CITIES: &[(&str, &str)] = &[
    ("Europe/Athens", "Athen"),
    ("Europe/Brussels", "Brüssel"),
    ("Europe/Kiev", "Kiew"),
    ("Europe/Lisbon", "Lissabon"),
    ("Europe/London", "Londo"),
    ("Europe/Moscow", "Moskau"),
    ("Europe/Rome", "Rom"),
    ("Europe/Vienna", "Wien"),
    ("Europe/Zurich", "Züri"),
];
