//! Trigram occurrence tables, the statistic everything else is built on.

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Exactly three consecutive letters, case-folded.
///
/// Trigrams are drawn from a text stream with non-letter characters removed
/// before windowing, so a trigram may span what was originally punctuation
/// or whitespace.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Trigram([char; 3]);

impl Trigram {
    pub(crate) fn new(letters: [char; 3]) -> Trigram {
        Trigram(letters)
    }

    /// The three letters of this trigram.
    pub fn letters(&self) -> [char; 3] {
        self.0
    }
}

impl fmt::Display for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for ch in self.0 {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Trigram({:?})", self.to_string())
    }
}

impl FromStr for Trigram {
    type Err = Error;

    /// Parse a trigram from a string of exactly 3 letters, case-folding as
    /// we go.
    ///
    /// ```
    /// use encoding_detector::Trigram;
    /// assert_eq!("the", "THE".parse::<Trigram>().unwrap().to_string());
    /// assert!("th".parse::<Trigram>().is_err());
    /// assert!("t4e".parse::<Trigram>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Trigram> {
        let mut letters = s
            .chars()
            .filter(|ch| ch.is_alphabetic())
            .flat_map(char::to_lowercase);
        match (letters.next(), letters.next(), letters.next(), letters.next()) {
            (Some(a), Some(b), Some(c), None) if s.chars().count() == 3 => {
                Ok(Trigram([a, b, c]))
            }
            _ => Err(Error::BadTrigram {
                text: s.to_owned(),
            }),
        }
    }
}

impl TryFrom<String> for Trigram {
    type Error = Error;

    fn try_from(s: String) -> Result<Trigram> {
        s.parse()
    }
}

impl From<Trigram> for String {
    fn from(tri: Trigram) -> String {
        tri.to_string()
    }
}

/// A mapping from trigram to occurrence count, plus the total number of
/// occurrences observed.
///
/// `total` is the authoritative denominator for frequency ratios. For a
/// table built at runtime by the extractor it always equals the sum of the
/// counts. For a *trained* table it may be larger: the trainer drops rare
/// trigrams from `counts` but keeps the full corpus count in `total`, which
/// deliberately dampens the frequencies of everything that survives.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable {
    counts: BTreeMap<Trigram, u64>,
    total: u64,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> FrequencyTable {
        FrequencyTable::default()
    }

    /// Assemble a table from pre-computed parts. This is how trained tables
    /// enter the system, and the one place where `total` may legitimately
    /// exceed the sum of the counts.
    pub fn from_parts(counts: BTreeMap<Trigram, u64>, total: u64) -> FrequencyTable {
        FrequencyTable { counts, total }
    }

    /// Record one occurrence of `tri`.
    pub(crate) fn record(&mut self, tri: Trigram) {
        *self.counts.entry(tri).or_insert(0) += 1;
        self.total += 1;
    }

    /// The occurrence count for `tri`, if it is present at all.
    pub fn get(&self, tri: Trigram) -> Option<u64> {
        self.counts.get(&tri).copied()
    }

    /// Total number of occurrences observed, including (for trained tables)
    /// occurrences of trigrams that were later pruned.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct trigrams in the table.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Does this table contain no trigrams?
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(trigram, count)` pairs in trigram order. The stable
    /// order matters: scoring accumulates floating-point sums over this
    /// iterator, and detection promises identical scores on repeated runs.
    pub fn iter(&self) -> impl Iterator<Item = (Trigram, u64)> + '_ {
        self.counts.iter().map(|(tri, count)| (*tri, *count))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn tri(s: &str) -> Trigram {
        s.parse().unwrap()
    }

    #[test]
    fn trigram_case_folds() {
        assert_eq!(tri("ABC"), tri("abc"));
        assert_eq!("abc", tri("aBc").to_string());
    }

    #[test]
    fn trigram_rejects_wrong_lengths_and_non_letters() {
        assert!("ab".parse::<Trigram>().is_err());
        assert!("abcd".parse::<Trigram>().is_err());
        assert!("a1c".parse::<Trigram>().is_err());
        assert!("".parse::<Trigram>().is_err());
    }

    #[test]
    fn trigram_accepts_cyrillic() {
        assert_eq!("что", tri("ЧТО").to_string());
    }

    #[test]
    fn record_keeps_total_in_sync() {
        let mut table = FrequencyTable::new();
        table.record(tri("abc"));
        table.record(tri("abc"));
        table.record(tri("bcd"));
        assert_eq!(Some(2), table.get(tri("abc")));
        assert_eq!(Some(1), table.get(tri("bcd")));
        assert_eq!(None, table.get(tri("xyz")));
        assert_eq!(3, table.total());
        assert_eq!(2, table.distinct());
        assert_eq!(table.total(), table.iter().map(|(_, c)| c).sum::<u64>());
    }

    #[test]
    fn trained_table_total_may_exceed_counts() {
        let counts = BTreeMap::from_iter([(tri("the"), 90)]);
        let table = FrequencyTable::from_parts(counts, 100);
        assert_eq!(100, table.total());
        assert_eq!(Some(90), table.get(tri("the")));
    }

    #[test]
    fn serde_round_trip() {
        let counts = BTreeMap::from_iter([(tri("the"), 42), (tri("and"), 17)]);
        let table = FrequencyTable::from_parts(counts, 70);
        let json = serde_json::to_string(&table).unwrap();
        let back: FrequencyTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, back);
    }
}
