//! Comparing two trigram distributions.
//!
//! The detection engine is generic over the scoring function, so callers can
//! substitute their own. Both scorers here return "higher is better" scores;
//! nothing else about the numeric range is assumed by the engine.

use crate::freq::FrequencyTable;

/// The default scorer: inverse of the total deviation between the two
/// normalized frequency profiles.
///
/// For every trigram in the table with fewer distinct keys, we accumulate
/// the absolute difference of its relative frequencies in both tables
/// (treating a missing trigram as frequency zero). Iterating the smaller
/// key set and looking up into the larger map is purely a performance
/// reordering; the result is symmetric. A deviation at or below `1e-5` is
/// considered a perfect match and scores [`f64::MAX`]; otherwise the score
/// is `1/deviation - 1`, so smaller deviations score higher. Either table
/// being empty scores `0`.
pub fn deviation_score(a: &FrequencyTable, b: &FrequencyTable) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let (small, large) = if a.distinct() <= b.distinct() {
        (a, b)
    } else {
        (b, a)
    };

    let mut deviation = 0.0;
    for (tri, count) in small.iter() {
        let r1 = count as f64 / small.total() as f64;
        deviation += match large.get(tri) {
            Some(other) => (r1 - other as f64 / large.total() as f64).abs(),
            None => r1,
        };
    }

    if deviation > 1e-5 {
        1.0 / deviation - 1.0
    } else {
        f64::MAX
    }
}

/// An alternate, bounded scorer: the mean similarity of relative frequencies
/// over the trigrams the two tables share.
///
/// Per shared trigram we take the ratio of the two relative frequencies,
/// clipped to `[0, 1]` by taking the reciprocal when it exceeds 1, and
/// average over the number of shared trigrams. No shared trigrams (or an
/// empty table) scores `0`.
pub fn intersection_score(a: &FrequencyTable, b: &FrequencyTable) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let (small, large) = if a.distinct() <= b.distinct() {
        (a, b)
    } else {
        (b, a)
    };

    let mut sum = 0.0;
    let mut shared = 0u64;
    for (tri, count) in small.iter() {
        if let Some(other) = large.get(tri) {
            let r1 = count as f64 / small.total() as f64;
            let r2 = other as f64 / large.total() as f64;
            sum += if r1 > r2 { r2 / r1 } else { r1 / r2 };
            shared += 1;
        }
    }

    if shared == 0 {
        0.0
    } else {
        sum / shared as f64
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::extract::{extract, SamplePolicy};

    fn table(text: &str) -> FrequencyTable {
        extract(text, SamplePolicy::Full).unwrap()
    }

    #[test]
    fn empty_table_scores_zero() {
        let empty = FrequencyTable::new();
        let full = table("hello there");
        assert_eq!(0.0, deviation_score(&empty, &full));
        assert_eq!(0.0, deviation_score(&full, &empty));
        assert_eq!(0.0, deviation_score(&empty, &empty));
        assert_eq!(0.0, intersection_score(&empty, &full));
    }

    #[test]
    fn self_match_maximizes_score() {
        let t = table("the quick brown fox jumps over the lazy dog");
        assert_eq!(f64::MAX, deviation_score(&t, &t.clone()));
    }

    #[test]
    fn deviation_score_is_symmetric() {
        let a = table("a completely ordinary english sentence of some length");
        let b = table("kurzer satz");
        let ab = deviation_score(&a, &b);
        let ba = deviation_score(&b, &a);
        assert_eq!(ab, ba);
        assert!(ab.is_finite());
        assert!(ab >= 0.0);
    }

    #[test]
    fn disjoint_tables_score_low_but_not_nan() {
        let a = table("aaab");
        let b = table("cccd");
        let score = deviation_score(&a, &b);
        // All of `a`'s frequency mass is unmatched: deviation 1.0, score 0.
        assert_eq!(0.0, score);
        assert_eq!(0.0, intersection_score(&a, &b));
    }

    #[test]
    fn closer_profiles_score_higher() {
        let model = table("the theme of the thesis is the theatre");
        let close = table("the theory of the theft at the theatre");
        let far = table("zzyzx qwrk vvgh mmnp");
        assert!(
            deviation_score(&close, &model) > deviation_score(&far, &model),
            "closer profile should outscore the distant one"
        );
    }

    #[test]
    fn intersection_score_is_bounded_and_symmetric() {
        let a = table("the theme of the thesis is the theatre");
        let b = table("the theory of theft");
        let ab = intersection_score(&a, &b);
        assert_eq!(ab, intersection_score(&b, &a));
        assert!(ab > 0.0 && ab <= 1.0);
        let aa = intersection_score(&a, &a.clone());
        assert!((aa - 1.0).abs() < 1e-12);
    }
}
