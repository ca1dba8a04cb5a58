// SPDX-License-Identifier: PMPL-1.0-or-later

//! Currency display names for Akan (`ak`).

pub(super) const TABLE: &[(&str, &str)] = &[
    // Symbol overrides
    ("GHS", "GH₵"),
    // Long display names
    ("aed", "Ɛmirete Arab Nkabɔmu Deram"),
    ("aoa", "Angola Kwanza"),
    ("aud", "Ɔstrelia Dɔla"),
    ("bhd", "Baren Dina"),
    ("bif", "Burundi Frank"),
    ("bwp", "Botswana Pula"),
    ("cad", "Kanada Dɔla"),
    ("cdf", "Kongo Frank"),
    ("chf", "Ɛswis Frank"),
    ("cny", "Kyaena Yuan"),
    ("cve", "Ɛskudo"),
    ("djf", "Gyebuti Frank"),
    ("dzd", "Ɔlgyeria Dina"),
    ("egp", "Egypt Pɔn"),
    ("ern", "Ɛretereya Nakfa"),
    ("etb", "Itiopia Bir"),
    ("eur", "Iro"),
    ("gbp", "Breten Pɔn"),
    ("ghc", "Ghana Sidi (1979–2007)"),
    ("ghs", "Ghana Sidi"),
    ("gmd", "Gambia Dalasi"),
    ("gns", "Gini Frank"),
    ("inr", "India Rupi"),
    ("jpy", "Gyapan Yɛn"),
    ("kes", "Kenya Hyelen"),
    ("kmf", "Komoro Frank"),
    ("lrd", "Laeberia Dɔla"),
    ("lsl", "Lesoto Loti"),
    ("lyd", "Libya Dina"),
    ("mad", "Moroko Diram"),
    ("mga", "Madagasi Ariary"),
    ("mro", "Mɔretenia Ouguiya (1973–2017)"),
    ("mru", "Mɔretenia Ouguiya"),
    ("mur", "Mɔrehyeɔs Rupi"),
    ("mwk", "Malawi Kwacha"),
    ("mzm", "Mozambik Metical"),
    ("nad", "Namibia Dɔla"),
    ("ngn", "Naegyeria Naira"),
    ("rwf", "Rewanda Frank"),
    ("sar", "Saudi Riyal"),
    ("scr", "Seyhyɛl Rupi"),
    ("sdg", "Sudan Pɔn"),
    ("shp", "St Helena Pɔn"),
    ("sll", "Leone"),
    ("sos", "Somalia Hyelen"),
    ("std", "Sao Tome ne Principe Dobra (1977–2017)"),
    ("stn", "Sao Tome ne Principe Dobra"),
    ("szl", "Lilangeni"),
    ("tnd", "Tunisia Dina"),
    ("tzs", "Tanzania Hyelen"),
    ("ugx", "Uganda Hyelen"),
    ("usd", "Amɛrika Dɔla"),
    ("xaf", "Sefa"),
    ("xof", "Sefa"),
    ("zar", "Afrika Anaafo Rand"),
    ("zmw", "Zambia Kwacha"),
];
