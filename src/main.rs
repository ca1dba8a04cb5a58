// SPDX-License-Identifier: PMPL-1.0-or-later

//! cldr-names: query CLI over the embedded CLDR display-name tables.
//!
//! Resolves one locale/key pair per invocation and prints the localized
//! name, or exports a whole table as JSON or YAML. Missing keys exit
//! nonzero so scripts can drive their own fallback chain.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use cldr_names::export::{dump_table, persist_dump, ExportFormat};
use cldr_names::locale::{is_language_subtag, is_territory_code, Locale};
use cldr_names::tables;
use cldr_names::types::TableKind;

#[derive(Parser)]
#[command(name = "cldr-names")]
#[command(version = "1.0.0")]
#[command(about = "Query static CLDR display-name tables")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a currency display name or symbol override
    Currency {
        /// Locale tag (e.g. gsw, en-001)
        #[arg(value_name = "LOCALE")]
        locale: String,

        /// ISO 4217 code: lowercase for the long name, uppercase for the symbol
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Look up a language, territory, or metadata-key display name
    Name {
        /// Locale tag (e.g. ak, be)
        #[arg(value_name = "LOCALE")]
        locale: String,

        /// Language subtag (de), territory code (DE, 001), or dotted key (key.ca)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Show all six name forms and the exemplar city for a time zone
    Zone {
        /// Locale tag (e.g. en-001, sah)
        #[arg(value_name = "LOCALE")]
        locale: String,

        /// IANA timezone identifier (e.g. America/Los_Angeles)
        #[arg(value_name = "TZID")]
        tzid: String,
    },

    /// List shipped locales with per-kind entry counts
    Locales,

    /// Export one table as JSON or YAML
    Dump {
        /// Locale tag
        #[arg(value_name = "LOCALE")]
        locale: String,

        /// Table kind to export
        #[arg(value_name = "KIND", value_enum)]
        kind: TableKind,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Write to a timestamped file in this directory instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn parse_locale(tag: &str) -> Result<Locale> {
    Locale::from_tag(tag).ok_or_else(|| {
        let shipped: Vec<&str> = Locale::all().iter().map(Locale::tag).collect();
        anyhow!("unknown locale '{}' (shipped: {})", tag, shipped.join(", "))
    })
}

fn not_found(what: String) -> ! {
    eprintln!("{} {}", "not found:".red().bold(), what);
    std::process::exit(1);
}

fn slot_or_placeholder(slot: &str) -> String {
    if slot.is_empty() {
        "(untranslated)".dimmed().to_string()
    } else {
        slot.to_string()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Currency { locale, code } => {
            let locale = parse_locale(&locale)?;
            match tables::currency_display_name(locale, &code) {
                Some(name) => println!("{}", name),
                None => not_found(format!("currency '{}' in {}", code, locale)),
            }
        }

        Commands::Name { locale, key } => {
            let locale = parse_locale(&locale)?;
            match tables::display_name(locale, &key) {
                Some(name) => {
                    let category = if is_territory_code(&key) {
                        "territory"
                    } else if is_language_subtag(&key) {
                        "language"
                    } else {
                        "metadata"
                    };
                    println!("{} {}", name, format!("[{}]", category).dimmed());
                }
                None => not_found(format!("name key '{}' in {}", key, locale)),
            }
        }

        Commands::Zone { locale, tzid } => {
            let locale = parse_locale(&locale)?;
            let names = tables::time_zone_names(locale, &tzid);
            let city = tables::exemplar_city(locale, &tzid);
            if names.is_none() && city.is_none() {
                not_found(format!("time zone '{}' in {}", tzid, locale));
            }

            println!("{}", tzid.bold());
            if let Some(names) = names {
                println!(
                    "  standard  {} / {}",
                    slot_or_placeholder(names.standard_long),
                    slot_or_placeholder(names.standard_short)
                );
                println!(
                    "  daylight  {} / {}",
                    slot_or_placeholder(names.daylight_long),
                    slot_or_placeholder(names.daylight_short)
                );
                println!(
                    "  generic   {} / {}",
                    slot_or_placeholder(names.generic_long),
                    slot_or_placeholder(names.generic_short)
                );
            }
            if let Some(city) = city {
                println!("  city      {}", city);
            }
        }

        Commands::Locales => {
            println!(
                "{}",
                format!(
                    "{:8} {:18} {:>8} {:>7} {:>7} {:>7}",
                    "locale", "language", "currency", "names", "zones", "cities"
                )
                .bold()
            );
            for &locale in Locale::all() {
                println!(
                    "{:8} {:18} {:>8} {:>7} {:>7} {:>7}",
                    locale.tag(),
                    locale.english_name(),
                    tables::currency_table(locale).len(),
                    tables::names_table(locale).len(),
                    tables::zone_table(locale).len(),
                    tables::city_table(locale).len(),
                );
            }
        }

        Commands::Dump {
            locale,
            kind,
            format,
            output,
        } => {
            let locale = parse_locale(&locale)?;
            let dump = dump_table(locale, kind);
            match output {
                Some(directory) => {
                    let path = persist_dump(&dump, Some(&directory), format)?;
                    println!("{} {}", "wrote".green(), path.display());
                }
                None => println!("{}", format.serialize(&dump)?),
            }
        }
    }

    Ok(())
}
