//! Guess the character encoding of text using letter-trigram statistics.
//!
//! The idea: decode a sample of the input under every encoding the codec
//! registry offers, count letter trigrams in each decoding, and compare the
//! resulting frequency profile against trained per-language models. The
//! right encoding produces text whose trigram statistics look like a real
//! language; the wrong one produces statistical noise.
//!
//! UTF-8 is deliberately never tested: it self-validates well enough that
//! callers should try it first and only fall back to detection.
//!
//! ```
//! use encoding_detector::{decode, extract, LanguageModel, SamplePolicy};
//!
//! // Train a model from known-good text, then use it to identify the same
//! // kind of text stored in a legacy 8-bit encoding.
//! let sample = "une idée française, répétée à l'envi par nos académiciens";
//! let table = extract(sample, SamplePolicy::Full)?;
//! let model = LanguageModel::new("French", table);
//!
//! let legacy_bytes: Vec<u8> = sample.chars().map(|ch| ch as u8).collect();
//! let decoded = decode(&legacy_bytes, &[model])?.expect("a plausible match");
//! assert_eq!(sample, decoded.text);
//! assert_eq!("French", decoded.language);
//! # Ok::<(), encoding_detector::Error>(())
//! ```
//!
//! Built-in trained models for English and Russian are used when no models
//! are supplied; `encdetect train` builds additional ones from a corpus.

#![warn(missing_docs)]

pub use crate::{
    detect::{
        decode, decode_path, decode_reader, decode_with, detect, detect_path,
        detect_reader, detect_with, DecodedText, DetectionResult,
        PLAUSIBLE_MATCH_THRESHOLD,
    },
    errors::{Error, Result},
    extract::{extract, extract_into, SamplePolicy},
    freq::{FrequencyTable, Trigram},
    models::{default_models, LanguageModel},
    score::{deviation_score, intersection_score},
};

pub mod codecs;
pub mod detect;
pub mod errors;
pub mod extract;
pub mod freq;
pub mod models;
pub mod score;
mod tables;
pub mod train;
