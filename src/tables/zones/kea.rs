// SPDX-License-Identifier: PMPL-1.0-or-later

//! Time-zone display names for Kabuverdianu (`kea`).

use crate::types::ZoneRow;

const CAPE_VERDE: ZoneRow = [
    "Ora padron di Kabu Verdi",
    "",
    "Ora di Veron di Kabu Verdi",
    "",
    "Ora di Kabu Verdi",
    "",
];
const EUROPE_CENTRAL: ZoneRow = [
    "Ora padron di Europa Sentral",
    "",
    "Ora di Veron di Europa Sentral",
    "",
    "Ora di Europa Sentral",
    "",
];
const EUROPE_WESTERN: ZoneRow = [
    "Ora padron di Europa Osidental",
    "",
    "Ora di Veron di Europa Osidental",
    "",
    "Ora di Europa Osidental",
    "",
];
const GMT: ZoneRow = ["Ora Media di Greenwich", "GMT", "", "", "", ""];

pub(super) const ZONES: &[(&str, &ZoneRow)] = &[
    ("Africa/Abidjan", &GMT),
    ("Africa/Accra", &GMT),
    ("Atlantic/Cape_Verde", &CAPE_VERDE),
    ("Europe/Berlin", &EUROPE_CENTRAL),
    ("Europe/Lisbon", &EUROPE_WESTERN),
    ("Europe/London", &GMT),
    ("Europe/Paris", &EUROPE_CENTRAL),
];

pub(super) const CITIES: &[(&str, &str)] = &[
    ("Atlantic/Cape_Verde", "Kabu Verdi"),
    ("Europe/Lisbon", "Lisboa"),
    ("Europe/London", "Londres"),
    ("Europe/Paris", "Paris"),
];
