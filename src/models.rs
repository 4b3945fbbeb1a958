//! Trained per-language trigram models.
//!
//! A model is just a name plus an immutable [`FrequencyTable`]. The trained
//! tables are data, not behavior: the built-in English and Russian models
//! are compiled in as static arrays, and additional models can be trained
//! offline and loaded from JSON files.

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::{
    freq::{FrequencyTable, Trigram},
    tables, Error, Result,
};

/// A named, trained, immutable trigram frequency table for one language.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LanguageModel {
    /// Human-readable language name, e.g. `"English"`.
    pub language: String,
    /// The trained trigram statistics.
    pub table: FrequencyTable,
}

impl LanguageModel {
    /// Create a model from a name and an already-built table.
    pub fn new<S: Into<String>>(language: S, table: FrequencyTable) -> LanguageModel {
        LanguageModel {
            language: language.into(),
            table,
        }
    }

    /// Load a trained model from a JSON file written by [`write_to`] (or by
    /// `encdetect train`).
    ///
    /// [`write_to`]: LanguageModel::write_to
    pub fn from_path(path: &Path) -> Result<LanguageModel> {
        let file =
            File::open(path).map_err(|err| Error::source_unavailable(path, err))?;
        serde_json::from_reader(BufReader::new(file)).map_err(|err| Error::ModelFormat {
            name: path.display().to_string(),
            source: err,
        })
    }

    /// Write this model to a JSON file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let file =
            File::create(path).map_err(|err| Error::source_unavailable(path, err))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self).map_err(|err| {
            Error::ModelFormat {
                name: path.display().to_string(),
                source: err,
            }
        })
    }

    /// Build a model from compiled-in table data.
    fn from_static(language: &str, total: u64, trigrams: &[(&str, u64)]) -> LanguageModel {
        let counts: BTreeMap<Trigram, u64> = trigrams
            .iter()
            .map(|&(tri, count)| {
                let tri = tri
                    .parse()
                    .unwrap_or_else(|_| panic!("bad built-in trigram {:?}", tri));
                (tri, count)
            })
            .collect();
        LanguageModel::new(language, FrequencyTable::from_parts(counts, total))
    }
}

lazy_static! {
    static ref ENGLISH: LanguageModel = LanguageModel::from_static(
        "English",
        tables::english::TOTAL,
        tables::english::TRIGRAMS,
    );
    static ref RUSSIAN: LanguageModel = LanguageModel::from_static(
        "Russian",
        tables::russian::TOTAL,
        tables::russian::TRIGRAMS,
    );
}

/// The built-in models used when a caller supplies none: English and
/// Russian.
pub fn default_models() -> Vec<LanguageModel> {
    vec![ENGLISH.clone(), RUSSIAN.clone()]
}
