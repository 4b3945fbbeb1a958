//! The codec registry: enumerating, resolving and applying text encodings.
//!
//! This is a thin wrapper around the `encoding` crate. Detection never tests
//! UTF-8 itself: callers are expected to try UTF-8 first (it self-validates
//! rather well), and everything labelled as a UTF-8 variant is excluded from
//! the candidate set here.

use std::collections::HashSet;

use encoding::{
    all,
    label::encoding_from_whatwg_label,
    types::{DecoderTrap, Encoding, EncodingRef},
};

use crate::{Error, Result};

/// Does `name` refer to UTF-8? Case-insensitive, and tolerant of missing or
/// extra separators, so `"UTF-8"`, `"utf8"` and `"Utf_8"` all match.
pub(crate) fn is_utf8_name(name: &str) -> bool {
    let folded: String = name
        .chars()
        .filter(|ch| *ch != '-' && *ch != '_')
        .collect::<String>()
        .to_ascii_lowercase();
    folded.contains("utf8")
}

/// The names of every encoding the registry knows about.
pub fn encoding_names() -> Vec<&'static str> {
    all::encodings().iter().map(|enc| enc.name()).collect()
}

/// The encodings worth testing as detection candidates: everything the
/// registry offers except UTF-8 variants and the pseudo-encoding `"error"`,
/// de-duplicated by canonical name so we never scan the same encoding twice.
pub(crate) fn candidate_encodings() -> Vec<EncodingRef> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();
    for &enc in all::encodings() {
        if enc.name() == "error" || is_utf8_name(enc.name()) {
            continue;
        }
        if seen.insert(enc.name()) {
            candidates.push(enc);
        }
    }
    candidates
}

/// Look up an encoding by name, accepting both the registry's canonical
/// names and WHATWG labels.
pub fn resolve(name: &str) -> Option<EncodingRef> {
    all::encodings()
        .iter()
        .find(|enc| enc.name().eq_ignore_ascii_case(name))
        .copied()
        .or_else(|| encoding_from_whatwg_label(&name.to_ascii_lowercase()))
}

/// Decode `bytes` with `enc`. With [`DecoderTrap::Strict`], invalid byte
/// sequences fail with [`Error::DecodeFailed`]; with
/// [`DecoderTrap::Replace`], they decode to replacement characters.
pub(crate) fn decode(bytes: &[u8], enc: EncodingRef, trap: DecoderTrap) -> Result<String> {
    enc.decode(bytes, trap).map_err(|_| Error::DecodeFailed {
        encoding: enc.name(),
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn utf8_names_are_recognized() {
        assert!(is_utf8_name("UTF-8"));
        assert!(is_utf8_name("utf8"));
        assert!(is_utf8_name("Utf-8"));
        assert!(is_utf8_name("utf_8"));
        assert!(!is_utf8_name("utf-16le"));
        assert!(!is_utf8_name("windows-1251"));
    }

    #[test]
    fn candidates_exclude_utf8_and_are_unique() {
        let candidates = candidate_encodings();
        assert!(!candidates.is_empty());
        let mut seen = HashSet::new();
        for enc in &candidates {
            assert!(!is_utf8_name(enc.name()), "{} slipped through", enc.name());
            assert_ne!("error", enc.name());
            assert!(seen.insert(enc.name()), "{} listed twice", enc.name());
        }
    }

    #[test]
    fn resolve_round_trips_candidate_names() {
        for enc in candidate_encodings() {
            let found = resolve(enc.name())
                .unwrap_or_else(|| panic!("could not re-resolve {}", enc.name()));
            assert_eq!(enc.name(), found.name());
        }
    }

    #[test]
    fn resolve_accepts_whatwg_labels() {
        assert!(resolve("latin1").is_some());
        assert!(resolve("no-such-encoding-xyz").is_none());
    }

    #[test]
    fn strict_decode_rejects_invalid_sequences() {
        let enc = resolve("utf-16be").unwrap();
        // Odd-length input cannot be UTF-16.
        assert!(decode(b"abc", enc, DecoderTrap::Strict).is_err());
        assert!(decode(b"abc", enc, DecoderTrap::Replace).is_ok());
    }
}
