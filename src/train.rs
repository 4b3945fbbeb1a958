//! Offline model training: turn a corpus into a trained [`LanguageModel`].
//!
//! Training is a batch job, separate from detection: scan UTF-8 corpus
//! files in full (no sampling), merge everything into one table, then prune
//! trigrams too rare to be statistically meaningful. Pruning removes the
//! counts but keeps the full observed total, so the surviving frequencies
//! come out slightly dampened; the scorer relies on this when distinguishing
//! "rare" from "absent".

use std::{collections::BTreeMap, path::Path};

use encoding::{all::UTF_8, types::DecoderTrap};
use log::{info, warn};

use crate::{
    codecs,
    extract::{extract_into, SamplePolicy},
    freq::FrequencyTable,
    models::LanguageModel,
    Error, Result,
};

/// The default pruning threshold: trigrams with less than a 0.05%
/// occurrence rate are discarded.
pub const DEFAULT_PRUNE_SHARE: f64 = 0.0005;

/// Train a model named `language` from UTF-8 corpus files.
///
/// Files that cannot be read, are not valid UTF-8, or contain fewer than 3
/// letters are logged and skipped; training fails with
/// [`Error::InsufficientText`] only if *no* file contributes anything.
pub fn train<'a, I>(language: &str, corpus: I, prune_share: f64) -> Result<LanguageModel>
where
    I: IntoIterator<Item = &'a Path>,
{
    let mut table = FrequencyTable::new();
    for path in corpus {
        match scan_file(&mut table, path) {
            Ok(()) => info!("scanned {}", path.display()),
            Err(err) => warn!("failed to scan {}: {}", path.display(), err),
        }
    }
    if table.is_empty() {
        return Err(Error::InsufficientText);
    }
    info!(
        "{}: {} distinct trigrams, {} total",
        language,
        table.distinct(),
        table.total()
    );
    Ok(LanguageModel::new(language, prune(&table, prune_share)))
}

fn scan_file(table: &mut FrequencyTable, path: &Path) -> Result<()> {
    let bytes =
        std::fs::read(path).map_err(|err| Error::source_unavailable(path, err))?;
    let text = codecs::decode(&bytes, UTF_8, DecoderTrap::Strict)?;
    extract_into(table, &text, SamplePolicy::Full)
}

/// Drop every trigram whose count is below `share` of the table's total,
/// keeping the full total as the denominator.
pub fn prune(table: &FrequencyTable, share: f64) -> FrequencyTable {
    let threshold = (table.total() as f64 * share) as u64;
    let kept: BTreeMap<_, _> = table
        .iter()
        .filter(|&(_, count)| count >= threshold)
        .collect();
    FrequencyTable::from_parts(kept, table.total())
}
