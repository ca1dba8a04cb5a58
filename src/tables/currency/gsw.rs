// SPDX-License-Identifier: PMPL-1.0-or-later

//! Currency display names for Swiss German (`gsw`).

/// Lowercase keys carry the long display name, uppercase keys a short
/// symbol override shown in compact contexts.
pub(super) const TABLE: &[(&str, &str)] = &[
    // Symbol overrides
    ("ATS", "öS"),
    ("AUD", "AU$"),
    ("BRL", "R$"),
    ("CAD", "CA$"),
    ("CHF", "CHF"),
    ("CNY", "CN¥"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("HKD", "HK$"),
    ("ILS", "₪"),
    ("INR", "₹"),
    ("JPY", "¥"),
    ("KRW", "₩"),
    ("MXN", "MX$"),
    ("NZD", "NZ$"),
    ("THB", "฿"),
    ("TWD", "NT$"),
    ("USD", "$"),
    ("VND", "₫"),
    ("XAF", "FCFA"),
    ("XCD", "EC$"),
    ("XOF", "F CFA"),
    ("XPF", "CFPF"),
    // Long display names
    ("aed", "UAE Dirham"),
    ("afn", "Afghani"),
    ("all", "Lek"),
    ("amd", "Dram"),
    ("ang", "Niderländischi-Antille-Gulde"),
    ("aoa", "Kwanza"),
    ("ars", "Argentinische Peso"),
    ("ats", "Öschtriichische Schilling"),
    ("aud", "Auschtralische Dollar"),
    ("azn", "Aserbeidschanische Manat"),
    ("bam", "Konvertierbari Mark vo Bosnie und Herzegowina"),
    ("bdt", "Taka"),
    ("bgn", "Bulgaarische Lew"),
    ("bhd", "Bahrain-Dinar"),
    ("bif", "Burundi-Franc"),
    ("bnd", "Brunei-Dollar"),
    ("bob", "Boliviano"),
    ("brl", "Brasilianische Real"),
    ("byn", "Wiissrussische Rubel"),
    ("cad", "Kanadische Dollar"),
    ("chf", "Schwiizer Franke"),
    ("clp", "Tschileenische Peso"),
    ("cny", "Renminbi Yuan"),
    ("cop", "Kolumbiaanische Peso"),
    ("crc", "Costa-Rica-Colón"),
    ("cup", "Kubaanische Peso"),
    ("cve", "Kap-Verde-Escudo"),
    ("czk", "Tschechischi Chroone"),
    ("djf", "Dschibuti-Franc"),
    ("dkk", "Tänischi Chroone"),
    ("dzd", "Algeerische Dinar"),
    ("egp", "Ägüptischs Pfund"),
    ("ern", "Nakfa"),
    ("etb", "Birr"),
    ("eur", "Euro"),
    ("gbp", "Pfund Schtörling"),
    ("gel", "Georgische Lari"),
    ("ghs", "Ghanaische Cedi"),
    ("gmd", "Dalasi"),
    ("gnf", "Guinea-Franc"),
    ("htg", "Gourde"),
    ("huf", "Ungarische Forint"),
    ("idr", "Indoneesischi Rupie"),
    ("ils", "Schekel"),
    ("inr", "Indischi Rupie"),
    ("iqd", "Iraakische Dinar"),
    ("irr", "Rial"),
    ("isk", "Iisländischi Chroone"),
    ("jod", "Jordaanische Dinar"),
    ("jpy", "Yen"),
    ("kes", "Keenia-Schilling"),
    ("khr", "Riel"),
    ("kmf", "Komore-Franc"),
    ("kpw", "Nordkoreaanische Won"),
    ("krw", "Süüdkoreaanische Won"),
    ("kwd", "Kuwait-Dinar"),
    ("kzt", "Tenge"),
    ("lbp", "Libaneesischs Pfund"),
    ("lkr", "Sri-Lanka-Rupie"),
    ("lyd", "Lüübische Dinar"),
    ("mad", "Marokkaanische Dirham"),
    ("mga", "Madagaskar-Ariary"),
    ("mkd", "Mazedoonische Denar"),
    ("mnt", "Tögrög"),
    ("mur", "Mauritius-Rupie"),
    ("mvr", "Rufiyaa"),
    ("mwk", "Malawi-Kwacha"),
    ("mxn", "Mexikaanische Peso"),
    ("myr", "Malaysische Ringgit"),
    ("mzn", "Metical"),
    ("nad", "Namibia-Dollar"),
    ("ngn", "Naira"),
    ("nok", "Norweegischi Chroone"),
    ("npr", "Nepaleesischi Rupie"),
    ("nzd", "Neuseeland-Dollar"),
    ("omr", "Omaanische Rial"),
    ("pab", "Balboa"),
    ("pen", "Sol"),
    ("pgk", "Kina"),
    ("php", "Philippiinische Peso"),
    ("pkr", "Pakischtaanischi Rupie"),
    ("pln", "Zloty"),
    ("pyg", "Guaraní"),
    ("qar", "Katar-Riyal"),
    ("ron", "Rumäänische Leu"),
    ("rsd", "Serbische Dinar"),
    ("rub", "Russische Rubel"),
    ("rwf", "Ruanda-Franc"),
    ("sar", "Saudi-Riyal"),
    ("sbd", "Salomone-Dollar"),
    ("scr", "Seyschelle-Rupie"),
    ("sdg", "Sudaneesischs Pfund"),
    ("sek", "Schweedischi Chroone"),
    ("sgd", "Singapur-Dollar"),
    ("sos", "Somalia-Schilling"),
    ("ssp", "Süüdsudaneesischs Pfund"),
    ("syp", "Süürischs Pfund"),
    ("szl", "Lilangeni"),
    ("thb", "Baht"),
    ("tnd", "Tuneesische Dinar"),
    ("try", "Türkischi Liira"),
    ("ttd", "Trinidad-und-Tobago-Dollar"),
    ("twd", "Neui Taiwan-Dollar"),
    ("tzs", "Tansania-Schilling"),
    ("uah", "Hrywnja"),
    ("ugx", "Uganda-Schilling"),
    ("usd", "US-Dollar"),
    ("uyu", "Uruguayische Peso"),
    ("uzs", "Usbeekische Sum"),
    ("vnd", "Dong"),
    ("xaf", "Zentraalafrikaanische CFA-Franc"),
    ("xcd", "Oschtkaribische Dollar"),
    ("xof", "Weschtafrikaanische CFA-Franc"),
    ("xpf", "CFP-Franc"),
    ("yer", "Jemen-Rial"),
    ("zar", "Süüdafrikaanische Rand"),
    ("zmw", "Sambische Kwacha"),
];
