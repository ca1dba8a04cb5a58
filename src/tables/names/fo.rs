// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language and territory display names for Faroese (`fo`).

pub(super) const TABLE: &[(&str, &str)] = &[
    // Language subtags
    ("ar", "arabiskt"),
    ("da", "danskt"),
    ("de", "týskt"),
    ("el", "grikskt"),
    ("en", "enskt"),
    ("es", "spanskt"),
    ("fi", "finskt"),
    ("fo", "føroyskt"),
    ("fr", "franskt"),
    ("ga", "írskt"),
    ("he", "hebraiskt"),
    ("hi", "hindi"),
    ("is", "íslendskt"),
    ("it", "italskt"),
    ("ja", "japanskt"),
    ("kl", "kalaallisut"),
    ("ko", "koreanskt"),
    ("nl", "hollendskt"),
    ("no", "norskt"),
    ("pl", "pólskt"),
    ("pt", "portugisiskt"),
    ("ru", "russiskt"),
    ("sv", "svenskt"),
    ("th", "tailendskt"),
    ("tr", "turkiskt"),
    ("uk", "ukrainskt"),
    ("vi", "vjetnamesiskt"),
    ("zh", "kinesiskt"),
    // Territory codes
    ("001", "heimur"),
    ("150", "Evropa"),
    ("AT", "Eysturríki"),
    ("AU", "Avstralia"),
    ("BE", "Belgia"),
    ("BR", "Brasil"),
    ("CA", "Kanada"),
    ("CH", "Sveis"),
    ("CN", "Kina"),
    ("CZ", "Kekkia"),
    ("DE", "Týskland"),
    ("DK", "Danmark"),
    ("ES", "Spania"),
    ("FI", "Finnland"),
    ("FO", "Føroyar"),
    ("FR", "Frakland"),
    ("GB", "Stórabretland"),
    ("GL", "Grønland"),
    ("GR", "Grikkaland"),
    ("IE", "Írland"),
    ("IS", "Ísland"),
    ("IT", "Italia"),
    ("JP", "Japan"),
    ("NL", "Niðurlond"),
    ("NO", "Noreg"),
    ("PL", "Pólland"),
    ("PT", "Portugal"),
    ("RU", "Russland"),
    ("SE", "Svøríki"),
    ("TR", "Turkaland"),
    ("UA", "Ukraina"),
    ("US", "Sambandsríki Amerika"),
];
