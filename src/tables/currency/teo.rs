// SPDX-License-Identifier: PMPL-1.0-or-later

//! Currency display names for Teso (`teo`).

pub(super) const TABLE: &[(&str, &str)] = &[
    ("aed", "Ango'otol lok' Falme za Kiarabu"),
    ("aoa", "Ango'otol lok' Angola"),
    ("aud", "Ango'otol lok' Australia"),
    ("bhd", "Ango'otol lok' Bahareni"),
    ("bif", "Ango'otol lok' Burundi"),
    ("bwp", "Ango'otol lok' Botswana"),
    ("cad", "Edola lok' Kanada"),
    ("cdf", "Ango'otol lok' Kongo"),
    ("chf", "Ango'otol lok' Uswisi"),
    ("cny", "Ango'otol lok' China"),
    ("cve", "Ango'otol lok' Kepuvede"),
    ("djf", "Ango'otol lok' Jibuti"),
    ("dzd", "Ango'otol lok' Algeria"),
    ("egp", "Epaunt lok' Misri"),
    ("ern", "Ango'otol lok' Eritrea"),
    ("etb", "Ango'otol lok' Uhabeshi"),
    ("eur", "Yuro"),
    ("gbp", "Epaunt lok' Uingereza"),
    ("ghc", "Ango'otol lok' Ghana"),
    ("gmd", "Ango'otol lok' Gambia"),
    ("gns", "Ango'otol lok' Gine"),
    ("inr", "Ango'otol lok' India"),
    ("jpy", "Ango'otol lok' Japan"),
    ("kes", "Ango'otol lok' Kenya"),
    ("kmf", "Ango'otol lok' Komoro"),
    ("lrd", "Edola lok' Liberia"),
    ("lsl", "Ango'otol lok' Lesoto"),
    ("lyd", "Ango'otol lok' Libya"),
    ("mad", "Ango'otol lok' Moroko"),
    ("mga", "Ango'otol lok' Bukini"),
    ("mur", "Ango'otol lok' Morisi"),
    ("mwk", "Ango'otol lok' Malawi"),
    ("mzm", "Ango'otol lok' Msumbiji"),
    ("nad", "Edola lok' Namibia"),
    ("ngn", "Ango'otol lok' Nigeria"),
    ("rwf", "Ango'otol lok' Rwanda"),
    ("sar", "Ango'otol lok' Saudia"),
    ("scr", "Ango'otol lok' Shelisheli"),
    ("sdg", "Epaunt lok' Sudan"),
    ("shp", "Epaunt lok' Santahelena"),
    ("sll", "Leoni"),
    ("sos", "Ango'otol lok' Somalia"),
    ("szl", "Lilangeni"),
    ("tnd", "Ango'otol lok' Tunisia"),
    ("tzs", "Ango'otol lok' Tanzania"),
    ("ugx", "Ango'otol lok' Uganda"),
    ("usd", "Edola lok' Amareka"),
    ("xaf", "Ango'otol lok' CFA BEAC"),
    ("xof", "Ango'otol lok' CFA BCEAO"),
    ("zar", "Ango'otol lok' Afrika Kusini"),
    ("zmk", "Ango'otol lok' Zambia (1968–2012)"),
    ("zmw", "Ango'otol lok' Zambia"),
];
