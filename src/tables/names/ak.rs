// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language and territory display names for Akan (`ak`).

// One exonym spelling covers both the German language and Germany.
const GYAAMAN: &str = "Gyaaman";

pub(super) const TABLE: &[(&str, &str)] = &[
    // Language subtags
    ("ak", "Akan"),
    ("am", "Amarik kasa"),
    ("ar", "Arabik kasa"),
    ("be", "Belarus kasa"),
    ("bg", "Bɔlgeria kasa"),
    ("bn", "Bengali kasa"),
    ("cs", "Kyɛk kasa"),
    ("de", GYAAMAN),
    ("el", "Grik kasa"),
    ("en", "Borɔfo"),
    ("es", "Spain kasa"),
    ("fa", "Pɛɛhyia kasa"),
    ("fr", "Frɛnkye kasa"),
    ("ha", "Hausa"),
    ("hi", "Hindi"),
    ("hu", "Hangri kasa"),
    ("id", "Indonihyia kasa"),
    ("ig", "Igbo"),
    ("it", "Itali kasa"),
    ("ja", "Gyapan kasa"),
    ("jv", "Gyabanis kasa"),
    ("km", "Kambodia kasa"),
    ("ko", "Korea kasa"),
    ("ms", "Malay kasa"),
    ("my", "Bɛɛmis kasa"),
    ("ne", "Nɛpal kasa"),
    ("nl", "Dɛɛkye"),
    ("pa", "Pungyabi kasa"),
    ("pl", "Pɔland kasa"),
    ("pt", "Pɔɔtugal kasa"),
    ("ro", "Romenia kasa"),
    ("ru", "Rahyia kasa"),
    ("rw", "Rewanda kasa"),
    ("so", "Somali kasa"),
    ("sv", "Sweden kasa"),
    ("ta", "Tamil kasa"),
    ("th", "Taeland kasa"),
    ("tr", "Tɛɛki kasa"),
    ("uk", "Ukren kasa"),
    ("ur", "Urdu kasa"),
    ("vi", "Viɛtnam kasa"),
    ("yo", "Yoruba"),
    ("zh", "Kyaena kasa"),
    ("zu", "Zulu"),
    // Territory codes
    ("BF", "Bɔkina Faso"),
    ("BI", "Burundi"),
    ("BJ", "Bɛnin"),
    ("BR", "Brazil"),
    ("CA", "Kanada"),
    ("CH", "Swetzaland"),
    ("CI", "Kodivuwa"),
    ("CM", "Kamɛrun"),
    ("CN", "Kyaena"),
    ("DE", GYAAMAN),
    ("EG", "Misrim"),
    ("ES", "Spain"),
    ("ET", "Ithiopia"),
    ("FR", "Frɛnkyeman"),
    ("GB", "Ahendiman Nkabom"),
    ("GH", "Gaana"),
    ("GM", "Gambia"),
    ("GN", "Gini"),
    ("IL", "Israel"),
    ("IN", "India"),
    ("IT", "Itali"),
    ("JM", "Gyameka"),
    ("JP", "Gyapan"),
    ("KE", "Kɛnya"),
    ("LR", "Laeberia"),
    ("LY", "Libya"),
    ("MA", "Moroko"),
    ("ML", "Mali"),
    ("MX", "Mɛksiko"),
    ("NE", "Nigyɛr"),
    ("NG", "Naegyeria"),
    ("NL", "Nɛdɛlande"),
    ("NO", "Nɔɔwe"),
    ("PT", "Pɔtugal"),
    ("RU", "Rɔhyea"),
    ("RW", "Rewanda"),
    ("SA", "Saudi Arabia"),
    ("SD", "Sudan"),
    ("SL", "Sierra Leone"),
    ("SN", "Senegal"),
    ("SO", "Somalia"),
    ("TD", "Kyad"),
    ("TG", "Togo"),
    ("TZ", "Tanzania"),
    ("UG", "Uganda"),
    ("US", "Amɛrika"),
    ("ZA", "Afrika Anaafo"),
    ("ZM", "Zambia"),
    ("ZW", "Zimbabwe"),
];
