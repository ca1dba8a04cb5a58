// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language, territory, and metadata-key display names for
//! Swiss German (`gsw`).

pub(super) const TABLE: &[(&str, &str)] = &[
    // Language subtags
    ("aa", "Afar"),
    ("ab", "Abchasisch"),
    ("af", "Afrikaans"),
    ("ak", "Akan"),
    ("am", "Amharisch"),
    ("ar", "Arabisch"),
    ("az", "Aserbaidschanisch"),
    ("be", "Wiissrussisch"),
    ("bg", "Bulgaarisch"),
    ("bn", "Bengaalisch"),
    ("bs", "Bosnisch"),
    ("ca", "Katalaanisch"),
    ("cs", "Tschechisch"),
    ("cy", "Walisisch"),
    ("da", "Tänisch"),
    ("de", "Tüütsch"),
    ("el", "Griechisch"),
    ("en", "Änglisch"),
    ("eo", "Esperanto"),
    ("es", "Schpanisch"),
    ("et", "Eestnisch"),
    ("eu", "Baskisch"),
    ("fa", "Persisch"),
    ("fi", "Finnisch"),
    ("fo", "Färöisch"),
    ("fr", "Französisch"),
    ("ga", "Iirisch"),
    ("gsw", "Schwiizertüütsch"),
    ("he", "Hebräisch"),
    ("hi", "Hindi"),
    ("hr", "Kroaatisch"),
    ("hu", "Ungaarisch"),
    ("hy", "Armeenisch"),
    ("id", "Indoneesisch"),
    ("is", "Iisländisch"),
    ("it", "Italiänisch"),
    ("ja", "Japaanisch"),
    ("ka", "Georgisch"),
    ("kk", "Kasachisch"),
    ("km", "Kambodschaanisch"),
    ("ko", "Koreaanisch"),
    ("ku", "Kurdisch"),
    ("la", "Latiin"),
    ("lb", "Luxemburgisch"),
    ("lt", "Litauisch"),
    ("lv", "Lettisch"),
    ("mk", "Mazedoonisch"),
    ("mn", "Mongoolisch"),
    ("ms", "Malaiisch"),
    ("mt", "Malteesisch"),
    ("nl", "Niderländisch"),
    ("no", "Norweegisch"),
    ("pl", "Polnisch"),
    ("pt", "Portugiisisch"),
    ("rm", "Rätoromaanisch"),
    ("ro", "Rumäänisch"),
    ("ru", "Russisch"),
    ("sk", "Slowakisch"),
    ("sl", "Sloweenisch"),
    ("sq", "Albaanisch"),
    ("sr", "Serbisch"),
    ("sv", "Schweedisch"),
    ("sw", "Suaheli"),
    ("ta", "Tamilisch"),
    ("th", "Thailändisch"),
    ("tr", "Türkisch"),
    ("uk", "Ukrainisch"),
    ("ur", "Urdu"),
    ("uz", "Usbekisch"),
    ("vi", "Vietnameesisch"),
    ("yi", "Jiddisch"),
    ("zh", "Chineesisch"),
    ("zu", "Zulu"),
    // Territory codes
    ("001", "Wält"),
    ("150", "Euroopa"),
    ("AD", "Andorra"),
    ("AE", "Veräinigti Arabischi Emirate"),
    ("AF", "Afganischtan"),
    ("AL", "Albaanie"),
    ("AM", "Armeenie"),
    ("AR", "Argentiinie"),
    ("AT", "Ööschtriich"),
    ("AU", "Auschtraalie"),
    ("BA", "Bosnie und Herzegowina"),
    ("BD", "Bangladesch"),
    ("BE", "Belgie"),
    ("BG", "Bulgaarie"),
    ("BR", "Brasilie"),
    ("BY", "Wiissrussland"),
    ("CA", "Kanada"),
    ("CH", "Schwiiz"),
    ("CL", "Tschile"),
    ("CN", "Chiina"),
    ("CO", "Kolumbie"),
    ("CZ", "Tschechei"),
    ("DE", "Tüütschland"),
    ("DK", "Tänemark"),
    ("DZ", "Algeerie"),
    ("EE", "Eestland"),
    ("EG", "Ägüpte"),
    ("ES", "Schpanie"),
    ("ET", "Äthiopie"),
    ("FI", "Finnland"),
    ("FO", "Färöer"),
    ("FR", "Frankriich"),
    ("GB", "Veräinigts Chönigriich"),
    ("GE", "Geoorgie"),
    ("GH", "Gaana"),
    ("GR", "Griecheland"),
    ("HR", "Kroaazie"),
    ("HU", "Ungarn"),
    ("ID", "Indoneesie"),
    ("IE", "Irland"),
    ("IL", "Israel"),
    ("IN", "Indie"),
    ("IQ", "Iraak"),
    ("IR", "Iran"),
    ("IS", "Iisland"),
    ("IT", "Itaalie"),
    ("JP", "Japan"),
    ("KE", "Keenia"),
    ("KR", "Süüdkoreea"),
    ("KZ", "Kasachschtan"),
    ("LI", "Liächteschtäi"),
    ("LT", "Litaue"),
    ("LU", "Luxemburg"),
    ("LV", "Lettland"),
    ("MA", "Marokko"),
    ("MD", "Republik Moldau"),
    ("MK", "Mazedoonie"),
    ("MT", "Malta"),
    ("MX", "Mexiko"),
    ("MY", "Malaysia"),
    ("NG", "Nigeeria"),
    ("NL", "Holland"),
    ("NO", "Norweege"),
    ("NP", "Neepal"),
    ("NZ", "Neuseeland"),
    ("PH", "Philippiine"),
    ("PK", "Pakischtan"),
    ("PL", "Pole"),
    ("PT", "Portugal"),
    ("RO", "Rumäänie"),
    ("RS", "Serbie"),
    ("RU", "Russland"),
    ("SA", "Saudi-Araabie"),
    ("SE", "Schweede"),
    ("SG", "Singapur"),
    ("SI", "Sloweenie"),
    ("SK", "Slowakei"),
    ("TH", "Thailand"),
    ("TN", "Tuneesie"),
    ("TR", "Türkei"),
    ("UA", "Ukraiine"),
    ("US", "Veräinigti Schtaate"),
    ("UZ", "Usbeekischtan"),
    ("VN", "Vietnam"),
    ("ZA", "Süüdafrika"),
    // CLDR metadata display names
    ("key.ca", "Kaländer"),
    ("key.co", "Sortierig"),
    ("key.cu", "Wäärig"),
    ("key.nu", "Zale"),
    ("type.ca.gregorian", "Gregoriaanische Kaländer"),
    ("type.ca.islamic", "Islaamische Kaländer"),
    ("type.co.standard", "Schtandard-Sortierig"),
    ("type.nu.latn", "Arabischi Zale"),
];
