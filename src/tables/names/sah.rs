// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language and territory display names for Yakut (`sah`).

pub(super) const TABLE: &[(&str, &str)] = &[
    // Language subtags
    ("de", "ньиэмэстии"),
    ("en", "ааҥыллыы"),
    ("es", "ыспаанныы"),
    ("fi", "пииннии"),
    ("fr", "боронсуустуу"),
    ("hu", "бэҥгиэрдии"),
    ("it", "ытаалыйалыы"),
    ("ja", "дьоппуоннуу"),
    ("kk", "хаһаахтыы"),
    ("ko", "кэриэйдии"),
    ("mn", "моҕуоллуу"),
    ("pl", "пуолаллыы"),
    ("pt", "португаллыы"),
    ("ru", "нууччалыы"),
    ("sah", "саха тыла"),
    ("tr", "түүрдүү"),
    ("uk", "украйыыналыы"),
    ("zh", "кытайдыы"),
    // Territory codes
    ("001", "Аан дойду"),
    ("BY", "Бөлөрүүссүйэ"),
    ("CN", "Кытай"),
    ("DE", "Германия"),
    ("FI", "Финляндия"),
    ("FR", "Бараансыйа"),
    ("GB", "Улуу Британия"),
    ("JP", "Дьоппуон"),
    ("KG", "Кыргыстаан"),
    ("KP", "Хоту Кэриэйэ"),
    ("KR", "Соҕуруу Кэриэйэ"),
    ("KZ", "Казахстаан"),
    ("MN", "Моҕуол"),
    ("PL", "Польша"),
    ("RU", "Арассыыйа"),
    ("TR", "Турция"),
    ("UA", "Украйыына"),
    ("US", "Америка Холбоһуктаах Штааттара"),
    ("UZ", "Үзбэкистээн"),
];
