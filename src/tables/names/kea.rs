// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language, territory, and metadata-key display names for
//! Kabuverdianu (`kea`).

pub(super) const TABLE: &[(&str, &str)] = &[
    // Language subtags
    ("ar", "arabi"),
    ("de", "alemon"),
    ("en", "ingles"),
    ("es", "spanhol"),
    ("fr", "franses"),
    ("ha", "auza"),
    ("hi", "indi"),
    ("it", "italianu"),
    ("ja", "japones"),
    ("kea", "kabuverdianu"),
    ("ko", "korianu"),
    ("nl", "olandes"),
    ("pl", "polaku"),
    ("pt", "purtuges"),
    ("ru", "rusu"),
    ("sv", "sueku"),
    ("sw", "suaili"),
    ("tr", "turku"),
    ("uk", "ukranianu"),
    ("vi", "vietnamita"),
    ("yo", "ioruba"),
    ("zh", "xines"),
    ("zu", "zulu"),
    // Territory codes
    ("001", "Mundu"),
    ("150", "Europa"),
    ("AO", "Angola"),
    ("BR", "Brazil"),
    ("CA", "Kanada"),
    ("CH", "Suisa"),
    ("CN", "Xina"),
    ("CV", "Kabu Verdi"),
    ("DE", "Alimanha"),
    ("ES", "Spanha"),
    ("FR", "Fransa"),
    ("GB", "Reinu Unidu"),
    ("GN", "Gine"),
    ("GW", "Gine-Bisau"),
    ("IN", "India"),
    ("IT", "Italia"),
    ("JP", "Japon"),
    ("MZ", "Musanbiki"),
    ("NG", "Nijeria"),
    ("NL", "Olanda"),
    ("PT", "Purtugal"),
    ("RU", "Rusia"),
    ("SN", "Senegal"),
    ("ST", "San Tume i Prinsipi"),
    ("TL", "Timor Leste"),
    ("US", "Stadus Unidos di Merka"),
    ("ZA", "Afrika di Sul"),
    // CLDR metadata display names
    ("key.ca", "Kalendariu"),
    ("key.cu", "Mueda"),
    ("key.nu", "Numeru"),
    ("type.ca.gregorian", "Kalendariu gregorianu"),
    ("type.nu.latn", "Numeru arabiku"),
];
