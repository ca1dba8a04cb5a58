// SPDX-License-Identifier: PMPL-1.0-or-later

//! Time-zone display names for Yakut (`sah`).

use crate::types::ZoneRow;

const MOSCOW: ZoneRow = [
    "Москуба сүрүн кэмэ",
    "",
    "Москуба сайыҥҥы кэмэ",
    "",
    "Москуба кэмэ",
    "",
];
const IRKUTSK: ZoneRow = [
    "Иркутскай сүрүн кэмэ",
    "",
    "Иркутскай сайыҥҥы кэмэ",
    "",
    "Иркутскай кэмэ",
    "",
];
const YAKUTSK: ZoneRow = [
    "Дьокуускай сүрүн кэмэ",
    "",
    "Дьокуускай сайыҥҥы кэмэ",
    "",
    "Дьокуускай кэмэ",
    "",
];
const VLADIVOSTOK: ZoneRow = [
    "Владивосток сүрүн кэмэ",
    "",
    "Владивосток сайыҥҥы кэмэ",
    "",
    "Владивосток кэмэ",
    "",
];
const MAGADAN: ZoneRow = [
    "Магадан сүрүн кэмэ",
    "",
    "Магадан сайыҥҥы кэмэ",
    "",
    "Магадан кэмэ",
    "",
];

pub(super) const ZONES: &[(&str, &ZoneRow)] = &[
    ("Asia/Irkutsk", &IRKUTSK),
    ("Asia/Khandyga", &YAKUTSK),
    ("Asia/Magadan", &MAGADAN),
    ("Asia/Ust-Nera", &VLADIVOSTOK),
    ("Asia/Vladivostok", &VLADIVOSTOK),
    ("Asia/Yakutsk", &YAKUTSK),
    ("Europe/Moscow", &MOSCOW),
];

pub(super) const CITIES: &[(&str, &str)] = &[
    ("Asia/Irkutsk", "Иркутскай"),
    ("Asia/Magadan", "Магадан"),
    ("Asia/Vladivostok", "Владивосток"),
    ("Asia/Yakutsk", "Дьокуускай"),
    ("Europe/Moscow", "Москуба"),
];
