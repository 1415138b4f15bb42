//! Fake full-name generation
//!
//! Produces "First Last" style names from small per-locale tables. Like a
//! real fake-data generator, a share of the output carries an honorific
//! prefix or suffix ("Dr. Anna Weber", "John Smith Jr."), which is exactly
//! what a full-name validator is expected to reject and retry.

use std::sync::Mutex;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde_json::Value;

use crate::validation::locale::record_locale;

/// Locale used when a record names no known table
pub const DEFAULT_LOCALE: &str = "en";

/// Name tables for one locale
#[derive(Debug, Clone, Copy)]
pub struct NameTable {
    pub locale: &'static str,
    pub first_names: &'static [&'static str],
    pub last_names: &'static [&'static str],
    pub prefixes: &'static [&'static str],
    pub suffixes: &'static [&'static str],
}

const EN: NameTable = NameTable {
    locale: "en",
    first_names: &["Andy", "John", "Mary", "Lionel", "Agatha", "Paul", "Susan", "Viktor"],
    last_names: &["Miller", "Smith", "Nicolsen", "Kristi", "Johnson", "Brown", "Davis"],
    prefixes: &["Mr.", "Mrs.", "Ms.", "Dr."],
    suffixes: &["Jr.", "Sr.", "MD", "PhD"],
};

const EN_GB: NameTable = NameTable {
    locale: "en_GB",
    first_names: &["Oliver", "Amelia", "Harry", "Isla", "George", "Emily"],
    last_names: &["Taylor", "Evans", "Wilson", "Thomas", "Roberts", "Walker"],
    prefixes: &["Mr", "Mrs", "Miss", "Dr"],
    suffixes: &["MBE"],
};

const DE_DE: NameTable = NameTable {
    locale: "de_DE",
    first_names: &["Anna", "Lukas", "Jonas", "Sophie", "Felix", "Marie"],
    last_names: &["Müller", "Schmidt", "Weber", "Fischer", "Becker", "Wagner"],
    prefixes: &["Dr.", "Prof."],
    suffixes: &[],
};

const FR_FR: NameTable = NameTable {
    locale: "fr_FR",
    first_names: &["Camille", "Hugo", "Léa", "Louis", "Chloé", "Jules"],
    last_names: &["Martin", "Bernard", "Dubois", "Lefèvre", "Moreau", "Laurent"],
    prefixes: &["M.", "Mme"],
    suffixes: &[],
};

const ES_ES: NameTable = NameTable {
    locale: "es_ES",
    first_names: &["Lucía", "Mateo", "Sofía", "Hugo", "Martina", "Pablo"],
    last_names: &["García", "Fernández", "López", "Martínez", "Sánchez", "Pérez"],
    prefixes: &["Sr.", "Sra."],
    suffixes: &[],
};

const IT_IT: NameTable = NameTable {
    locale: "it_IT",
    first_names: &["Giulia", "Marco", "Francesca", "Luca", "Chiara", "Matteo"],
    last_names: &["Rossi", "Russo", "Ferrari", "Esposito", "Bianchi", "Romano"],
    prefixes: &["Dott.", "Sig."],
    suffixes: &[],
};

const RU_RU: NameTable = NameTable {
    locale: "ru_RU",
    first_names: &["Алексей", "Мария", "Иван", "Анна", "Сергей", "Ольга"],
    last_names: &["Иванов", "Попов", "Смирнов", "Кузнецова", "Соколов", "Петрова"],
    prefixes: &[],
    suffixes: &[],
};

/// Every built-in table, keyed by locale tag
pub const NAME_TABLES: &[NameTable] = &[EN, EN_GB, DE_DE, FR_FR, ES_ES, IT_IT, RU_RU];

/// Look up the table for a locale tag; `en_US` shares the `en` table
pub fn table_for(locale: &str) -> Option<&'static NameTable> {
    let locale = if locale == "en_US" { DEFAULT_LOCALE } else { locale };
    NAME_TABLES.iter().find(|t| t.locale == locale)
}

/// Generator of fake full names.
///
/// Holds its own RNG behind a mutex so a single generator can back a
/// shared `Fn` callable.
pub struct FakeNameGenerator {
    rng: Mutex<StdRng>,
    decoration_chance: f64,
}

impl FakeNameGenerator {
    /// Create a generator seeded from the OS
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_rng(&mut rand::rng()))
    }

    /// Create a deterministic generator
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            decoration_chance: 0.2,
        }
    }

    /// Probability that a generated name carries a prefix or suffix.
    /// Out-of-range values are clamped; NaN disables decoration.
    pub fn with_decoration_chance(mut self, chance: f64) -> Self {
        self.decoration_chance = if chance.is_nan() { 0.0 } else { chance.clamp(0.0, 1.0) };
        self
    }

    /// Generate a full name for a locale record such as `{"locale": "it_IT"}`
    pub fn full_name(&self, record: &Value) -> String {
        let locale = record_locale(record).unwrap_or(DEFAULT_LOCALE);
        self.full_name_for(locale)
    }

    /// Generate a full name for a locale tag
    pub fn full_name_for(&self, locale: &str) -> String {
        let table = table_for(locale).unwrap_or(&EN);
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let first = table.first_names.choose(&mut *rng).copied().unwrap_or("John");
        let last = table.last_names.choose(&mut *rng).copied().unwrap_or("Doe");
        let mut name = format!("{} {}", first, last);

        if rng.random_bool(self.decoration_chance) {
            if rng.random_bool(0.5) {
                if let Some(prefix) = table.prefixes.choose(&mut *rng) {
                    name = format!("{} {}", prefix, name);
                }
            } else if let Some(suffix) = table.suffixes.choose(&mut *rng) {
                name = format!("{} {}", name, suffix);
            }
        }

        debug!("Generated name {:?} for locale {}", name, table.locale);
        name
    }
}

impl Default for FakeNameGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate one full name for a locale record with a fresh generator
pub fn create_fake_fullname(record: &Value) -> String {
    FakeNameGenerator::new().full_name(record)
}
