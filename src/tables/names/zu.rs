// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language and territory display names for Zulu (`zu`).

pub(super) const TABLE: &[(&str, &str)] = &[
    // Language subtags
    ("af", "isi-Afrikaans"),
    ("am", "isi-Amharic"),
    ("ar", "isi-Arabic"),
    ("bg", "isi-Bulgari"),
    ("bn", "isi-Bengali"),
    ("cs", "isi-Czech"),
    ("de", "isiJalimane"),
    ("el", "isi-Greek"),
    ("en", "isiNgisi"),
    ("es", "isiSpeyini"),
    ("fa", "isi-Persian"),
    ("fr", "isiFulentshi"),
    ("ha", "isiHawusa"),
    ("he", "isiHebheru"),
    ("hi", "isiHindi"),
    ("hu", "isi-Hungarian"),
    ("id", "isi-Indonesian"),
    ("ig", "isi-Igbo"),
    ("it", "isi-Italian"),
    ("ja", "isiJapanese"),
    ("jv", "isiJavanese"),
    ("km", "isiKhmer"),
    ("ko", "isiKorean"),
    ("ms", "isiMalay"),
    ("my", "isiBurmese"),
    ("ne", "isiNepali"),
    ("nl", "isiDashi"),
    ("pa", "isiPunjabi"),
    ("pl", "isiPolish"),
    ("pt", "isiPutukezi"),
    ("ro", "isiRomanian"),
    ("ru", "isiRashiya"),
    ("rw", "isiRuwanda"),
    ("so", "isiSomali"),
    ("sv", "isiSwidishi"),
    ("ta", "isiTamil"),
    ("th", "isiThayi"),
    ("tr", "isiTurkish"),
    ("uk", "isi-Ukrainian"),
    ("ur", "isi-Urdu"),
    ("vi", "isiVietnamese"),
    ("xh", "isiXhosa"),
    ("yo", "isiYoruba"),
    ("zh", "isiShayina"),
    ("zu", "isiZulu"),
    // Territory codes
    ("001", "umhlaba"),
    ("150", "i-Europe"),
    ("AO", "i-Angola"),
    ("AU", "i-Australia"),
    ("BR", "i-Brazil"),
    ("BW", "iBotswana"),
    ("CA", "iKhanada"),
    ("CN", "i-China"),
    ("DE", "iJalimane"),
    ("EG", "iGibhithe"),
    ("ES", "iSpeyini"),
    ("FR", "iFulansi"),
    ("GB", "i-United Kingdom"),
    ("IN", "i-India"),
    ("IT", "i-Italy"),
    ("JP", "iJapani"),
    ("KE", "iKenya"),
    ("LS", "iLesotho"),
    ("MW", "iMalawi"),
    ("MZ", "iMozambiki"),
    ("NA", "iNamibiya"),
    ("NG", "iNigeria"),
    ("RU", "iRashiya"),
    ("SZ", "iSwazilandi"),
    ("TZ", "iTanzaniya"),
    ("UG", "i-Uganda"),
    ("US", "i-United States"),
    ("ZA", "iNingizimu Afrika"),
    ("ZM", "iZambiya"),
    ("ZW", "iZimbabwe"),
];
