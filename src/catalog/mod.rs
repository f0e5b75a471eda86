//! Character data for the two decks
//!
//! Records are loaded from JSON files in the data directory so users can
//! edit or replace the decks. Missing or corrupt files fall back to the
//! embedded defaults, and those in turn fall back to a minimal built-in
//! set, so the session always has something to show.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::session::Mode;

/// Default letters deck, shipped with the binary
const DEFAULT_LETTERS: &str = include_str!("../../data/letters.json");

/// Default numbers deck, shipped with the binary
const DEFAULT_NUMBERS: &str = include_str!("../../data/numbers.json");

/// One flashcard: a glyph, its spoken name, and example words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    /// The glyph itself (e.g. "ب" or "٣")
    pub character: String,
    /// Pronunciation label, spoken by the narrator (e.g. "بَاء")
    pub name: String,
    /// Example words using the character
    pub examples: String,
    /// Ordinal for letters, numeric value for numbers.
    /// The numbers file uses the key "value"; both are accepted.
    #[serde(alias = "value")]
    pub position: u32,
}

/// The two ordered decks of flashcards
#[derive(Debug, Clone)]
pub struct Catalog {
    letters: Vec<CharacterRecord>,
    numbers: Vec<CharacterRecord>,
}

impl Catalog {
    /// Create a catalog from explicit decks
    pub fn new(letters: Vec<CharacterRecord>, numbers: Vec<CharacterRecord>) -> Self {
        Self { letters, numbers }
    }

    /// Load both decks from the configured data directory
    ///
    /// Load failures are absorbed: a missing data directory means the
    /// embedded defaults are used.
    pub fn load() -> Self {
        match Config::data_dir() {
            Ok(dir) => Self::load_from(&dir),
            Err(err) => {
                tracing::warn!("Could not determine data directory: {err:#}");
                Self::new(
                    parse_deck("letters", DEFAULT_LETTERS).unwrap_or_else(builtin_letters),
                    parse_deck("numbers", DEFAULT_NUMBERS).unwrap_or_else(builtin_numbers),
                )
            }
        }
    }

    /// Load both decks from a specific directory
    ///
    /// Each deck is resolved independently: `<dir>/letters.json` (or
    /// `numbers.json`) if present and valid, else the embedded default,
    /// else the built-in fallback set.
    pub fn load_from(dir: &Path) -> Self {
        Self::new(
            load_deck(&dir.join("letters.json"), DEFAULT_LETTERS).unwrap_or_else(builtin_letters),
            load_deck(&dir.join("numbers.json"), DEFAULT_NUMBERS).unwrap_or_else(builtin_numbers),
        )
    }

    /// The minimal built-in catalog (3 letters, 3 numbers)
    pub fn fallback() -> Self {
        Self::new(builtin_letters(), builtin_numbers())
    }

    /// Records for the given mode, in deck order
    pub fn records(&self, mode: Mode) -> &[CharacterRecord] {
        match mode {
            Mode::Letters => &self.letters,
            Mode::Numbers => &self.numbers,
        }
    }

    /// Deck length for the given mode
    pub fn len(&self, mode: Mode) -> usize {
        self.records(mode).len()
    }

    /// Whether the deck for the given mode has no records
    pub fn is_empty(&self, mode: Mode) -> bool {
        self.records(mode).is_empty()
    }
}

/// Read and parse a deck file, falling back to the embedded default
fn load_deck(path: &Path, embedded: &str) -> Option<Vec<CharacterRecord>> {
    if path.exists() {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(deck) => return Some(deck),
                Err(err) => {
                    tracing::warn!("Ignoring corrupt deck file {path:?}: {err}");
                }
            },
            Err(err) => {
                tracing::warn!("Could not read deck file {path:?}: {err}");
            }
        }
    }
    parse_deck("embedded", embedded)
}

fn parse_deck(label: &str, json: &str) -> Option<Vec<CharacterRecord>> {
    match serde_json::from_str(json) {
        Ok(deck) => Some(deck),
        Err(err) => {
            tracing::warn!("Could not parse {label} deck: {err}");
            None
        }
    }
}

fn record(character: &str, name: &str, examples: &str, position: u32) -> CharacterRecord {
    CharacterRecord {
        character: character.to_string(),
        name: name.to_string(),
        examples: examples.to_string(),
        position,
    }
}

/// Built-in fallback letters, used when no deck can be parsed
fn builtin_letters() -> Vec<CharacterRecord> {
    vec![
        record("ا", "أَلِف", "أَسَد - أَرَز", 1),
        record("ب", "بَاء", "بَطَة - بَيْت", 2),
        record("ت", "تَاء", "تُفَّاح - تِمْسَاح", 3),
    ]
}

/// Built-in fallback numbers
fn builtin_numbers() -> Vec<CharacterRecord> {
    vec![
        record("١", "وَاحِد", "قَلَم وَاحِد", 1),
        record("٢", "اِثْنَان", "عَيْنَان", 2),
        record("٣", "ثَلاَثَة", "ثَلاَث تُفَّاحَات", 3),
    ]
}
