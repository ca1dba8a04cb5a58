// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language, territory, and metadata-key display names for
//! Belarusian (`be`).

pub(super) const TABLE: &[(&str, &str)] = &[
    // Language subtags
    ("be", "беларуская"),
    ("bg", "балгарская"),
    ("cs", "чэшская"),
    ("da", "дацкая"),
    ("de", "нямецкая"),
    ("el", "грэчаская"),
    ("en", "англійская"),
    ("es", "іспанская"),
    ("et", "эстонская"),
    ("fi", "фінская"),
    ("fr", "французская"),
    ("he", "іўрыт"),
    ("hu", "венгерская"),
    ("it", "італьянская"),
    ("ja", "японская"),
    ("ka", "грузінская"),
    ("kk", "казахская"),
    ("ko", "карэйская"),
    ("lt", "літоўская"),
    ("lv", "латышская"),
    ("nl", "нідэрландская"),
    ("no", "нарвежская"),
    ("pl", "польская"),
    ("pt", "партугальская"),
    ("ro", "румынская"),
    ("ru", "руская"),
    ("sk", "славацкая"),
    ("sl", "славенская"),
    ("sr", "сербская"),
    ("sv", "шведская"),
    ("tr", "турэцкая"),
    ("uk", "украінская"),
    ("zh", "кітайская"),
    // Territory codes
    ("001", "Свет"),
    ("150", "Еўропа"),
    ("AT", "Аўстрыя"),
    ("AU", "Аўстралія"),
    ("AZ", "Азербайджан"),
    ("BE", "Бельгія"),
    ("BG", "Балгарыя"),
    ("BR", "Бразілія"),
    ("BY", "Беларусь"),
    ("CA", "Канада"),
    ("CH", "Швейцарыя"),
    ("CN", "Кітай"),
    ("CZ", "Чэхія"),
    ("DE", "Германія"),
    ("DK", "Данія"),
    ("EE", "Эстонія"),
    ("ES", "Іспанія"),
    ("FI", "Фінляндыя"),
    ("FR", "Францыя"),
    ("GB", "Вялікабрытанія"),
    ("GE", "Грузія"),
    ("GR", "Грэцыя"),
    ("HU", "Венгрыя"),
    ("IE", "Ірландыя"),
    ("IL", "Ізраіль"),
    ("IN", "Індыя"),
    ("IT", "Італія"),
    ("JP", "Японія"),
    ("KZ", "Казахстан"),
    ("LT", "Літва"),
    ("LV", "Латвія"),
    ("MD", "Малдова"),
    ("NL", "Нідэрланды"),
    ("NO", "Нарвегія"),
    ("PL", "Польшча"),
    ("PT", "Партугалія"),
    ("RO", "Румынія"),
    ("RS", "Сербія"),
    ("RU", "Расія"),
    ("SE", "Швецыя"),
    ("SK", "Славакія"),
    ("TR", "Турцыя"),
    ("UA", "Украіна"),
    ("US", "Злучаныя Штаты Амерыкі"),
    ("UZ", "Узбекістан"),
    // CLDR metadata display names
    ("key.ca", "каляндар"),
    ("key.nu", "лічбы"),
    ("type.ca.gregorian", "грыгарыянскі каляндар"),
    ("type.nu.latn", "сучасныя арабскія лічбы"),
];
