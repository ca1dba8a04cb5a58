// SPDX-License-Identifier: PMPL-1.0-or-later

//! Currency display names for Kabuverdianu (`kea`).

pub(super) const TABLE: &[(&str, &str)] = &[
    // Symbol overrides
    ("BRL", "R$"),
    ("CVE", "Esc"),
    ("USD", "US$"),
    // Long display names
    ("aoa", "Kuanza"),
    ("aud", "Dola australianu"),
    ("brl", "Real brazileru"),
    ("cad", "Dola kanadianu"),
    ("chf", "Franku suisu"),
    ("cny", "Iuan xines"),
    ("cve", "Skudu Kabuverdianu"),
    ("dkk", "Kuroa dinamarkeza"),
    ("dzd", "Dinar arjelinu"),
    ("egp", "Libra ejipsiu"),
    ("eur", "Euru"),
    ("gbp", "Libra esterlina"),
    ("ghs", "Sedi di Gana"),
    ("gmd", "Dalasi"),
    ("gnf", "Franku gineanu"),
    ("inr", "Rupia indianu"),
    ("jpy", "Ieni japones"),
    ("kes", "Xelin kenianu"),
    ("mad", "Diram marokinu"),
    ("mro", "Ouguia (1973–2017)"),
    ("mru", "Ouguia"),
    ("mxn", "Pezu mexikanu"),
    ("mzn", "Metikal"),
    ("ngn", "Naira"),
    ("nok", "Kuroa norueges"),
    ("pln", "Zloti polaku"),
    ("rub", "Rublu rusu"),
    ("sar", "Rial saudita"),
    ("sek", "Kuroa sueku"),
    ("sll", "Leone"),
    ("stn", "Dobra di San Tume i Prinsipi"),
    ("szl", "Lilanjeni"),
    ("thb", "Bat tailandes"),
    ("try", "Lira turku"),
    ("usd", "Dola merkanu"),
    ("xaf", "Franku CFA sentru-afrikanu"),
    ("xof", "Franku CFA osti-afrikanu"),
    ("zar", "Rand sulafrikanu"),
];
