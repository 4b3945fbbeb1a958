//! Letter-trigram extraction from decoded text.

use crate::{
    freq::{FrequencyTable, Trigram},
    Error, Result,
};

/// How much of a document the extractor scans.
///
/// Detection only needs a statistically representative sample, so by default
/// we read a bounded number of characters spread across the whole document
/// rather than scanning everything. Training wants every character and uses
/// [`SamplePolicy::Full`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SamplePolicy {
    /// Scan every character.
    Full,

    /// Read up to `budget` characters, split into `chunks` evenly spaced
    /// chunks across the document. Sources shorter than `budget` degrade to
    /// a full scan.
    Chunked {
        /// Maximum number of characters to examine.
        budget: usize,
        /// Number of evenly spaced chunks to split the budget across.
        chunks: usize,
    },
}

impl Default for SamplePolicy {
    /// 10,000 characters in 10 chunks, enough to characterize letter
    /// statistics without scanning a whole book.
    fn default() -> SamplePolicy {
        SamplePolicy::Chunked {
            budget: 10_000,
            chunks: 10,
        }
    }
}

/// Scan `text` and count letter trigrams.
///
/// Non-letter characters are skipped and do *not* break the sliding window:
/// a trigram may span removed punctuation or whitespace. Letters are
/// case-folded before counting. Fails with [`Error::InsufficientText`] if
/// the scan produces no trigram at all.
///
/// ```
/// use encoding_detector::{extract, SamplePolicy};
/// let table = extract("ab1cd", SamplePolicy::Full).unwrap();
/// assert_eq!(Some(1), table.get("abc".parse().unwrap()));
/// assert_eq!(Some(1), table.get("bcd".parse().unwrap()));
/// assert_eq!(2, table.total());
/// ```
pub fn extract(text: &str, policy: SamplePolicy) -> Result<FrequencyTable> {
    let mut table = FrequencyTable::new();
    extract_into(&mut table, text, policy)?;
    Ok(table)
}

/// Like [`extract`], but accumulate into an existing table. The trainer uses
/// this to merge an entire corpus into a single table.
pub fn extract_into(
    table: &mut FrequencyTable,
    text: &str,
    policy: SamplePolicy,
) -> Result<()> {
    let before = table.total();
    match policy {
        SamplePolicy::Full => {
            let mut window = Window::new(table);
            for ch in text.chars() {
                window.push(ch);
            }
        }
        SamplePolicy::Chunked { budget, chunks } => {
            let len = text.chars().count();
            if len <= budget || chunks == 0 || budget == 0 {
                return extract_into(table, text, SamplePolicy::Full);
            }
            // Read `chunk_len` characters at the start of every `stride`.
            // The window state resets at each seam so we never count a
            // trigram that spans a skipped region.
            let chunk_len = budget / chunks;
            let stride = len / chunks;
            if chunk_len == 0 || stride == 0 {
                return extract_into(table, text, SamplePolicy::Full);
            }
            let mut window = Window::new(table);
            for (pos, ch) in text.chars().enumerate() {
                if pos % stride >= chunk_len {
                    continue;
                }
                if pos % stride == 0 {
                    window.reset();
                }
                window.push(ch);
            }
        }
    }
    if table.total() == before {
        return Err(Error::InsufficientText);
    }
    Ok(())
}

/// The sliding 3-letter window. Feeding it a non-letter is a no-op; feeding
/// it a letter shifts the window and records a trigram once 3 letters have
/// accumulated.
struct Window<'a> {
    table: &'a mut FrequencyTable,
    letters: [char; 3],
    filled: usize,
}

impl<'a> Window<'a> {
    fn new(table: &'a mut FrequencyTable) -> Window<'a> {
        Window {
            table,
            letters: ['\0'; 3],
            filled: 0,
        }
    }

    fn push(&mut self, ch: char) {
        if !ch.is_alphabetic() {
            return;
        }
        for folded in ch.to_lowercase() {
            self.letters.rotate_left(1);
            self.letters[2] = folded;
            if self.filled < 3 {
                self.filled += 1;
            }
            if self.filled == 3 {
                self.table.record(Trigram::new(self.letters));
            }
        }
    }

    fn reset(&mut self) {
        self.filled = 0;
    }
}
