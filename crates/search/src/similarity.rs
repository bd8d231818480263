//! Similarity scoring between normalized strings.
//!
//! This is a coarse heuristic, not an edit distance: containment earns a flat
//! bonus, otherwise the score is the fraction of words on the shorter side
//! that overlap some word on the longer side. It favours recall, which is
//! what a catalog of a few dozen products needs.

/// Score returned when the longer string contains the shorter one.
pub const CONTAINMENT_SCORE: f64 = 0.9;

/// Score two normalized strings, returning a value in `[0.0, 1.0]`.
///
/// `longer` is `a` only when `a` is strictly longer than `b`. On equal
/// lengths `b` is taken as the longer side, so the word-overlap branch can
/// give different results when the arguments are swapped.
///
/// # Example
/// ```
/// use ecrist_search::similarity;
///
/// assert_eq!(similarity("bambu", "cepillo de bambu"), 0.9);
/// assert_eq!(similarity("jabon natural", "aceite natural puro"), 0.5);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let (longer, shorter) = if a.len() > b.len() { (a, b) } else { (b, a) };

    if longer.is_empty() {
        return 1.0;
    }

    if longer.contains(shorter) {
        return CONTAINMENT_SCORE;
    }

    let longer_words: Vec<&str> = longer.split(' ').collect();
    let mut total = 0usize;
    let mut matched = 0usize;

    for word in shorter.split(' ') {
        total += 1;
        if longer_words
            .iter()
            .any(|candidate| candidate.contains(word) || word.contains(candidate))
        {
            matched += 1;
        }
    }

    if total == 0 {
        return 0.0;
    }

    matched as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use proptest::prelude::*;

    #[test]
    fn test_both_empty() {
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn test_one_side_empty_is_contained() {
        assert_eq!(similarity("", "vela"), CONTAINMENT_SCORE);
        assert_eq!(similarity("vela", ""), CONTAINMENT_SCORE);
    }

    #[test]
    fn test_self_similarity() {
        assert_eq!(similarity("vela de soja", "vela de soja"), CONTAINMENT_SCORE);
    }

    #[test]
    fn test_containment_is_flat() {
        assert_eq!(similarity("te", "termo de acero inoxidable"), CONTAINMENT_SCORE);
        assert_eq!(similarity("termo de acero", "termo de acero inoxidable"), CONTAINMENT_SCORE);
    }

    #[test]
    fn test_word_overlap_ratio() {
        // "natural" overlaps, "jabon" does not
        assert_eq!(similarity("jabon natural", "aceite natural puro"), 0.5);
    }

    #[test]
    fn test_word_overlap_is_bidirectional_substring() {
        // "bolsas" contains "bolsa"; "algodon" is contained in "algodones"
        assert_eq!(similarity("bolsas algodon", "bolsa de algodones"), 1.0);
    }

    #[test]
    fn test_no_overlap() {
        assert_eq!(similarity("termo", "vela de soja"), 0.0);
    }

    #[test]
    fn test_typo_does_not_word_match() {
        assert_eq!(similarity("sostenivle", "bambu sostenible"), 0.0);
    }

    #[test]
    fn test_word_branch_can_exceed_containment_bonus() {
        // Shorter by characters but more words; each word sits inside the longer one.
        assert_eq!(similarity("ab cd ef", "abcdefghij"), 1.0);
    }

    #[test]
    fn test_equal_length_is_order_dependent() {
        // Equal lengths: the second argument is treated as the longer side.
        assert_eq!(similarity("aa bb", "aaccc"), 0.5);
        assert_eq!(similarity("aaccc", "aa bb"), 1.0);
    }

    #[test]
    fn test_unequal_length_is_order_independent() {
        assert_eq!(
            similarity("jabon natural", "aceite natural puro"),
            similarity("aceite natural puro", "jabon natural")
        );
    }

    #[test]
    fn test_score_in_unit_range() {
        let pairs = [
            ("a", "b"),
            ("vela soja", "cera de soja natural"),
            ("x y z", "xx"),
            ("  ", "a"),
        ];
        for (a, b) in pairs {
            let score = similarity(a, b);
            assert!((0.0..=1.0).contains(&score), "{a:?} vs {b:?} gave {score}");
        }
    }

    proptest! {
        #[test]
        fn prop_self_similarity(s in "[a-zA-Z0-9áéíóúüñÁÉÍÓÚÑ ,.!]{1,40}") {
            let text = normalize(&s);
            prop_assume!(!text.is_empty());
            prop_assert!(similarity(&text, &text) >= CONTAINMENT_SCORE);
        }
    }
}
