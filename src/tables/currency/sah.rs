// SPDX-License-Identifier: PMPL-1.0-or-later

//! Currency display names for Yakut (`sah`).
//!
//! Sparse by upstream design: only the currencies the locale actually
//! translates.

pub(super) const TABLE: &[(&str, &str)] = &[
    // Symbol overrides
    ("RUB", "₽"),
    // Long display names
    ("cny", "Кытай юана"),
    ("eur", "Еуро"),
    ("gbp", "Ааҥыллыы пуута"),
    ("jpy", "Дьоппуон иенэтэ"),
    ("kgs", "Кыргыстаан сомо"),
    ("kzt", "Казахстаан тэҥгэтэ"),
    ("rub", "Арассыыйа солкуобайа"),
    ("try", "Түүр лиирэтэ"),
    ("uah", "Украйыына гириибинэтэ"),
    ("usd", "АХШ дуоллара"),
];
