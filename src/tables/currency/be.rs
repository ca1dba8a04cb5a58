// SPDX-License-Identifier: PMPL-1.0-or-later

//! Currency display names for Belarusian (`be`).

pub(super) const TABLE: &[(&str, &str)] = &[
    // Symbol overrides
    ("BYN", "Br"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("JPY", "¥"),
    ("RUB", "₽"),
    ("USD", "$"),
    // Long display names
    ("amd", "армянскі драм"),
    ("aud", "аўстралійскі долар"),
    ("azn", "азербайджанскі манат"),
    ("bgn", "балгарскі леў"),
    ("brl", "бразільскі рэал"),
    ("byn", "беларускі рубель"),
    ("cad", "канадскі долар"),
    ("chf", "швейцарскі франк"),
    ("cny", "кітайскі юань"),
    ("czk", "чэшская крона"),
    ("dkk", "дацкая крона"),
    ("eur", "еўра"),
    ("gbp", "фунт стэрлінгаў"),
    ("gel", "грузінскі лары"),
    ("huf", "венгерскі форынт"),
    ("ils", "новы ізраільскі шэкель"),
    ("inr", "індыйская рупія"),
    ("isk", "ісландская крона"),
    ("jpy", "японская іена"),
    ("kgs", "кіргізскі сом"),
    ("krw", "паўднёвакарэйская вона"),
    ("kzt", "казахстанскі тэнге"),
    ("mdl", "малдаўскі лей"),
    ("nok", "нарвежская крона"),
    ("pln", "польскі злоты"),
    ("ron", "румынскі лей"),
    ("rsd", "сербскі дынар"),
    ("rub", "расійскі рубель"),
    ("sek", "шведская крона"),
    ("tjs", "таджыкскі самані"),
    ("tmt", "туркменскі манат"),
    ("try", "турэцкая ліра"),
    ("uah", "украінская грыўня"),
    ("usd", "долар ЗША"),
    ("uzs", "узбекскі сум"),
    ("vnd", "в’етнамскі донг"),
    ("zar", "паўднёваафрыканскі рэнд"),
];
