//! The detection engine and the decoder built on top of it.
//!
//! Detection works by hypothesis testing: decode a sample of the input
//! under every non-UTF-8 codec the registry offers, extract a trigram
//! frequency table from each decoding, and score it against every supplied
//! language model. The decoder then trusts the best hypothesis if it clears
//! a plausibility threshold and decodes the whole input with it.

use std::{cmp::Ordering, fs, io::Read, path::Path};

use encoding::types::{DecoderTrap, Encoding};
use log::{debug, trace};
use rayon::prelude::*;

use crate::{
    codecs,
    extract::{extract, SamplePolicy},
    freq::FrequencyTable,
    models::{default_models, LanguageModel},
    score::deviation_score,
    Error, Result,
};

/// The minimum winning score before [`decode`] trusts a detection. Scores
/// at or below this are treated as "could not confidently determine the
/// encoding".
pub const PLAUSIBLE_MATCH_THRESHOLD: f64 = 0.1;

/// One `(encoding, language)` hypothesis and its match score.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectionResult {
    /// Canonical name of the candidate encoding.
    pub encoding: &'static str,
    /// Name of the language model this score was computed against.
    pub language: String,
    /// The match score. Higher is better; the range depends on the scoring
    /// function in use.
    pub score: f64,
}

/// The final output of a successful [`decode`].
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedText {
    /// The decoded text.
    pub text: String,
    /// Canonical name of the encoding used.
    pub encoding: &'static str,
    /// Name of the best-matching language model.
    pub language: String,
}

/// Score every candidate encoding against every language model.
///
/// Returns one result per `(encoding, model)` pair, sorted by score
/// descending; ties are broken by encoding name, then language name,
/// ascending, so the ranking is fully deterministic. Codecs that cannot
/// decode the input, or whose decoding contains fewer than 3 letters,
/// contribute no results at all. An empty `models` slice is replaced by the
/// built-in defaults.
pub fn detect(bytes: &[u8], models: &[LanguageModel]) -> Vec<DetectionResult> {
    detect_with(bytes, models, deviation_score)
}

/// Like [`detect`], but with a caller-supplied scoring function. The engine
/// assumes nothing about the score's range beyond "higher is better".
pub fn detect_with<F>(bytes: &[u8], models: &[LanguageModel], score: F) -> Vec<DetectionResult>
where
    F: Fn(&FrequencyTable, &FrequencyTable) -> f64 + Sync,
{
    let defaults;
    let models = if models.is_empty() {
        defaults = default_models();
        &defaults[..]
    } else {
        models
    };

    // Each candidate owns its decoded sample and its frequency table, so
    // the sweep parallelizes cleanly; the sort below re-establishes a
    // deterministic order.
    let mut results: Vec<DetectionResult> = codecs::candidate_encodings()
        .par_iter()
        .filter_map(|&enc| {
            let text = match codecs::decode(bytes, enc, DecoderTrap::Strict) {
                Ok(text) => text,
                Err(err) => {
                    trace!("skipping candidate: {}", err);
                    return None;
                }
            };
            let table = match extract(&text, SamplePolicy::default()) {
                Ok(table) => table,
                Err(err) => {
                    trace!("skipping {}: {}", enc.name(), err);
                    return None;
                }
            };
            let scored: Vec<DetectionResult> = models
                .iter()
                .map(|model| DetectionResult {
                    encoding: enc.name(),
                    language: model.language.clone(),
                    score: score(&table, &model.table),
                })
                .collect();
            Some(scored)
        })
        .flatten()
        .collect();

    results.sort_by(compare_results);
    results
}

/// Scores descending, then encoding name, then language name.
fn compare_results(a: &DetectionResult, b: &DetectionResult) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.encoding.cmp(b.encoding))
        .then_with(|| a.language.cmp(&b.language))
}

/// Detect the encoding of `bytes` and decode all of it.
///
/// Returns `Ok(None)` when no hypothesis scores strictly above
/// [`PLAUSIBLE_MATCH_THRESHOLD`]; that is a normal outcome, not an error.
/// The final decode is permissive (invalid sequences become replacement
/// characters), matching the behavior of the detection sample's codec
/// having already been validated strictly.
pub fn decode(bytes: &[u8], models: &[LanguageModel]) -> Result<Option<DecodedText>> {
    decode_with(bytes, models, deviation_score)
}

/// Like [`decode`], but with a caller-supplied scoring function.
pub fn decode_with<F>(
    bytes: &[u8],
    models: &[LanguageModel],
    score: F,
) -> Result<Option<DecodedText>>
where
    F: Fn(&FrequencyTable, &FrequencyTable) -> f64 + Sync,
{
    let results = detect_with(bytes, models, score);
    let best = match results.first() {
        Some(best) => best,
        None => return Ok(None),
    };
    debug!(
        "best candidate: {} / {} (score {})",
        best.encoding, best.language, best.score
    );
    if best.score <= PLAUSIBLE_MATCH_THRESHOLD {
        return Ok(None);
    }

    // The winner's name came from the registry's own enumeration, so a
    // failed lookup here is a bug, not bad input.
    let enc = codecs::resolve(best.encoding).ok_or_else(|| Error::EncodingVanished {
        name: best.encoding.to_owned(),
    })?;
    let text = codecs::decode(bytes, enc, DecoderTrap::Replace)?;
    Ok(Some(DecodedText {
        text,
        encoding: best.encoding,
        language: best.language.clone(),
    }))
}

/// [`detect`] for a file on disk.
pub fn detect_path(path: &Path, models: &[LanguageModel]) -> Result<Vec<DetectionResult>> {
    Ok(detect(&read_path(path)?, models))
}

/// [`decode`] for a file on disk.
pub fn decode_path(path: &Path, models: &[LanguageModel]) -> Result<Option<DecodedText>> {
    decode(&read_path(path)?, models)
}

/// [`detect`] for an arbitrary readable stream. Reads the stream to its
/// end.
pub fn detect_reader<R: Read>(
    reader: R,
    models: &[LanguageModel],
) -> Result<Vec<DetectionResult>> {
    Ok(detect(&read_stream(reader)?, models))
}

/// [`decode`] for an arbitrary readable stream. Reads the stream to its
/// end.
pub fn decode_reader<R: Read>(
    reader: R,
    models: &[LanguageModel],
) -> Result<Option<DecodedText>> {
    decode(&read_stream(reader)?, models)
}

fn read_path(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|err| Error::source_unavailable(path, err))
}

fn read_stream<R: Read>(mut reader: R) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(Error::stream_unavailable)?;
    Ok(bytes)
}
