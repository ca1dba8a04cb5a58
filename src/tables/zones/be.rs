// SPDX-License-Identifier: PMPL-1.0-or-later

//! Time-zone display names for Belarusian (`be`).

use crate::types::ZoneRow;

const EUROPE_CENTRAL: ZoneRow = [
    "Цэнтральнаеўрапейскі стандартны час",
    "",
    "Цэнтральнаеўрапейскі летні час",
    "",
    "Цэнтральнаеўрапейскі час",
    "",
];
const EUROPE_EASTERN: ZoneRow = [
    "Усходнееўрапейскі стандартны час",
    "",
    "Усходнееўрапейскі летні час",
    "",
    "Усходнееўрапейскі час",
    "",
];
const EUROPE_WESTERN: ZoneRow = [
    "Заходнееўрапейскі стандартны час",
    "",
    "Заходнееўрапейскі летні час",
    "",
    "Заходнееўрапейскі час",
    "",
];
// Minsk has kept Moscow time since 2011, so both zones share the tuple.
const MOSCOW: ZoneRow = [
    "Маскоўскі стандартны час",
    "",
    "Маскоўскі летні час",
    "",
    "Маскоўскі час",
    "",
];

pub(super) const ZONES: &[(&str, &ZoneRow)] = &[
    ("Europe/Berlin", &EUROPE_CENTRAL),
    ("Europe/Kiev", &EUROPE_EASTERN),
    ("Europe/Lisbon", &EUROPE_WESTERN),
    ("Europe/London", &["Час па Грынвічы", "", "", "", "", ""]),
    ("Europe/Minsk", &MOSCOW),
    ("Europe/Moscow", &MOSCOW),
    ("Europe/Prague", &EUROPE_CENTRAL),
    ("Europe/Riga", &EUROPE_EASTERN),
    ("Europe/Vilnius", &EUROPE_EASTERN),
    ("Europe/Warsaw", &EUROPE_CENTRAL),
];

pub(super) const CITIES: &[(&str, &str)] = &[
    ("Europe/Berlin", "Берлін"),
    ("Europe/Kiev", "Кіеў"),
    ("Europe/London", "Лондан"),
    ("Europe/Minsk", "Мінск"),
    ("Europe/Moscow", "Масква"),
    ("Europe/Paris", "Парыж"),
    ("Europe/Prague", "Прага"),
    ("Europe/Riga", "Рыга"),
    ("Europe/Vilnius", "Вільнюс"),
    ("Europe/Warsaw", "Варшава"),
];
