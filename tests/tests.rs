//! End-to-end tests: raw bytes in legacy encodings, through detection, to
//! decoded text.

use std::io::Cursor;

use encoding::{
    all::WINDOWS_1251,
    types::{EncoderTrap, Encoding},
};
use encoding_detector::{
    decode, decode_path, detect, detect_path, detect_reader, extract, DetectionResult,
    LanguageModel, SamplePolicy,
};

/// A paragraph of ordinary Russian prose, rich in common trigrams.
const RUSSIAN_TEXT: &str = "Что же было дальше, никто не знал. Она стояла на \
    остановке около старого государственного здания и думала о том, что \
    больше всего на свете ей хотелось просто жить. Его состояние становилось \
    всё лучше, и многие говорили, что это было настоящее чудо. Как и многого \
    другого, этого никто не мог объяснить. Настроение у неё менялось с каждым \
    мгновением, но при этом она продолжала работать, потому что работа была \
    для неё важнее всего остального.";

const ENGLISH_TEXT: &str = "It was the kind of evening that made the whole \
    town stop and listen. The theatre on the corner had opened its doors for \
    the first time in years, and everyone wanted to see what all the fuss was \
    about. There were stories, of course, and there always had been, but the \
    truth of the matter was that nobody remembered the place as anything \
    other than closed.";

fn windows_1251(text: &str) -> Vec<u8> {
    WINDOWS_1251
        .encode(text, EncoderTrap::Strict)
        .expect("test text must be encodable as windows-1251")
}

fn find<'a>(
    results: &'a [DetectionResult],
    encoding: &str,
    language: &str,
) -> &'a DetectionResult {
    results
        .iter()
        .find(|r| r.encoding == encoding && r.language == language)
        .unwrap_or_else(|| panic!("no result for {}/{}", encoding, language))
}

#[test]
fn russian_beats_english_for_windows_1251_text() {
    let bytes = windows_1251(RUSSIAN_TEXT);
    let results = detect(&bytes, &[]);
    let russian = find(&results, "windows-1251", "Russian");
    let english = find(&results, "windows-1251", "English");
    assert!(
        russian.score > english.score,
        "Russian ({}) should outscore English ({})",
        russian.score,
        english.score
    );
}

#[test]
fn decode_recovers_windows_1251_russian() {
    let bytes = windows_1251(RUSSIAN_TEXT);
    let decoded = decode(&bytes, &[])
        .unwrap()
        .expect("should confidently detect windows-1251");
    assert_eq!("windows-1251", decoded.encoding);
    assert_eq!("Russian", decoded.language);
    assert_eq!(RUSSIAN_TEXT, decoded.text);
}

#[test]
fn decode_recovers_plain_english() {
    let decoded = decode(ENGLISH_TEXT.as_bytes(), &[])
        .unwrap()
        .expect("should confidently detect an ASCII-transparent encoding");
    assert_eq!("English", decoded.language);
    assert_eq!(ENGLISH_TEXT, decoded.text);
}

#[test]
fn utf8_is_never_a_candidate() {
    for result in detect(ENGLISH_TEXT.as_bytes(), &[]) {
        let folded = result.encoding.to_ascii_lowercase().replace(['-', '_'], "");
        assert!(
            !folded.contains("utf8"),
            "{} should have been excluded",
            result.encoding
        );
    }
}

#[test]
fn repeated_detection_is_identical() {
    let bytes = windows_1251(RUSSIAN_TEXT);
    let first = detect(&bytes, &[]);
    for _ in 0..3 {
        assert_eq!(first, detect(&bytes, &[]));
    }
}

#[test]
fn ranking_is_sorted_with_deterministic_ties() {
    let results = detect(ENGLISH_TEXT.as_bytes(), &[]);
    assert!(!results.is_empty());
    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.score >= b.score, "scores out of order: {:?} {:?}", a, b);
        if a.score == b.score {
            // Ties (the ASCII-transparent encodings all decode this text
            // identically) are adjacent and ordered by encoding name.
            assert!(
                (a.encoding, &a.language) < (b.encoding, &b.language),
                "tie not broken deterministically: {:?} {:?}",
                a,
                b
            );
        }
    }
}

#[test]
fn file_and_stream_sources_agree_with_bytes() {
    let bytes = windows_1251(RUSSIAN_TEXT);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.txt");
    std::fs::write(&path, &bytes).unwrap();

    let from_bytes = detect(&bytes, &[]);
    let from_path = detect_path(&path, &[]).unwrap();
    let from_stream = detect_reader(Cursor::new(bytes.clone()), &[]).unwrap();
    assert_eq!(from_bytes, from_path);
    assert_eq!(from_bytes, from_stream);

    let decoded = decode_path(&path, &[]).unwrap().expect("detectable");
    assert_eq!(RUSSIAN_TEXT, decoded.text);
}

#[test]
fn caller_supplied_models_replace_the_defaults() {
    let table = extract(RUSSIAN_TEXT, SamplePolicy::Full).unwrap();
    let model = LanguageModel::new("Sample", table);
    let results = detect(&windows_1251(RUSSIAN_TEXT), &[model]);
    assert!(results.iter().all(|r| r.language == "Sample"));
    // The self-trained model matches the windows-1251 decoding exactly.
    let best = &results[0];
    assert_eq!("windows-1251", best.encoding);
    assert_eq!(f64::MAX, best.score);
}

#[test]
fn gibberish_under_every_model_is_not_detected() {
    // Letters exist (so codecs are not skipped), but the trigram profile
    // matches neither built-in model well enough to clear the threshold.
    let text = "zq zq xv xv qk qk wj wj zzzz xxxx qqqq wwww jjjj vvvv";
    let decoded = decode(text.as_bytes(), &[]).unwrap();
    assert!(decoded.is_none());
}
