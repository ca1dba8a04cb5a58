// SPDX-License-Identifier: PMPL-1.0-or-later

//! Currency display names for Faroese (`fo`).

pub(super) const TABLE: &[(&str, &str)] = &[
    // Symbol overrides
    ("DKK", "kr"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("USD", "US$"),
    // Long display names
    ("aud", "avstralskur dollari"),
    ("bgn", "bulgarskt lev"),
    ("brl", "brasilianskur real"),
    ("cad", "kanadiskur dollari"),
    ("chf", "sveisiskur frankur"),
    ("cny", "kinesiskur yuan"),
    ("czk", "kekkisk króna"),
    ("dkk", "donsk króna"),
    ("eur", "Evra"),
    ("gbp", "bretskt pund"),
    ("hkd", "Hong Kong dollari"),
    ("huf", "ungarsk forint"),
    ("inr", "indisk rupi"),
    ("isk", "íslendsk króna"),
    ("jpy", "japanskur yen"),
    ("krw", "suðurkoreanskur won"),
    ("mxn", "meksikanskur peso"),
    ("nok", "norsk króna"),
    ("nzd", "nýsælendskur dollari"),
    ("pln", "pólskur zloty"),
    ("ron", "rumenskur leu"),
    ("rub", "russiskur rubul"),
    ("sek", "svensk króna"),
    ("sgd", "Singapor dollari"),
    ("thb", "tailandskur baht"),
    ("try", "turkisk líra"),
    ("usd", "US dollari"),
    ("zar", "suðurafrikanskur rand"),
];
