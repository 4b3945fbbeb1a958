//! Error-handling for this library.

use std::{io, path::Path};

use thiserror::Error;

/// Our standard result type.
pub type Result<T> = std::result::Result<T, Error>;

/// An error produced while detecting or decoding text.
///
/// Only [`Error::SourceUnavailable`], [`Error::ModelFormat`] and
/// [`Error::EncodingVanished`] ever escape the top-level detection API.
/// [`Error::InsufficientText`] and [`Error::DecodeFailed`] are absorbed
/// inside the candidate sweep (a codec that cannot produce three letters
/// simply contributes no results), and "no plausible match" is reported as
/// `Ok(None)`, not as an error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The input file or stream could not be opened or read.
    #[error("could not read {name}")]
    SourceUnavailable {
        /// The path (or `"<stream>"`) we failed to read.
        name: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Fewer than 3 letters were found in the scanned text, so no trigram
    /// could be formed.
    #[error("fewer than 3 letters in the scanned text")]
    InsufficientText,

    /// A codec rejected the byte sequence outright.
    #[error("{encoding:?} could not decode the byte sequence")]
    DecodeFailed {
        /// Canonical name of the codec that failed.
        encoding: &'static str,
    },

    /// A string that should have been a trigram wasn't one.
    #[error("{text:?} is not a trigram (expected exactly 3 letters)")]
    BadTrigram {
        /// The offending string.
        text: String,
    },

    /// A trained model file could not be parsed.
    #[error("could not parse language model {name}")]
    ModelFormat {
        /// The path of the offending file.
        name: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The winning encoding name could no longer be resolved for the final
    /// decode. The name came from the registry's own enumeration, so this
    /// indicates a bug in the registry wrapper, not bad input.
    #[error("detected encoding {name:?} disappeared from the codec registry")]
    EncodingVanished {
        /// The name we failed to resolve.
        name: String,
    },
}

impl Error {
    pub(crate) fn source_unavailable(path: &Path, source: io::Error) -> Error {
        Error::SourceUnavailable {
            name: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn stream_unavailable(source: io::Error) -> Error {
        Error::SourceUnavailable {
            name: "<stream>".to_owned(),
            source,
        }
    }
}
