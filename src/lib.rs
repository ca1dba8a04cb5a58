// SPDX-License-Identifier: PMPL-1.0-or-later

//! cldr-names — static CLDR display-name tables.
//!
//! This crate embeds per-locale display-name tables sourced from the
//! Unicode CLDR dataset as compile-time static data, with a typed
//! lookup surface and a JSON/YAML export layer.
//!
//! TABLE KINDS:
//! 1. **Currency**: ISO 4217 code → display name (lowercase key) or
//!    short symbol override (uppercase key).
//! 2. **Names**: BCP-47 language subtag, ISO 3166 territory code, or
//!    CLDR metadata key → localized name.
//! 3. **Time zones**: IANA timezone identifier → six-slot name tuple
//!    (standard/daylight/generic, long and short), plus identifier →
//!    exemplar-city name.
//!
//! Every lookup is strictly per-locale and returns `None` on a miss.
//! Fallback chains (parent locale, root locale, raw code) are a
//! consumer policy, not something the tables impose.
//!
//! ```
//! use cldr_names::locale::Locale;
//! use cldr_names::tables::{currency_display_name, time_zone_names};
//!
//! assert_eq!(currency_display_name(Locale::Gsw, "chf"), Some("Schwiizer Franke"));
//!
//! let pacific = time_zone_names(Locale::En001, "America/Los_Angeles").unwrap();
//! assert_eq!(pacific.standard_long, "Pacific Standard Time");
//! ```

pub mod export;
pub mod locale;
pub mod tables;
pub mod types;

pub use locale::Locale;
pub use tables::{currency_display_name, display_name, exemplar_city, time_zone_names};
pub use types::{TableKind, ZoneNames, ZoneRow};
