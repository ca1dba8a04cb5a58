// SPDX-License-Identifier: PMPL-1.0-or-later

//! Time-zone display names for Akan (`ak`).
//!
//! Upstream only translates the Greenwich metazone for this locale, so
//! the table is genuinely this small.

use crate::types::ZoneRow;

const GMT: ZoneRow = ["Greenwich Mean Berɛ", "GMT", "", "", "", ""];

pub(super) const ZONES: &[(&str, &ZoneRow)] = &[
    ("Africa/Abidjan", &GMT),
    ("Africa/Accra", &GMT),
];

pub(super) const CITIES: &[(&str, &str)] = &[
    ("Africa/Abidjan", "Abidjan"),
    ("Africa/Accra", "Nkran"),
];
