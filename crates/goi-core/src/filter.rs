use std::collections::HashSet;

/// Keeps the tokens worth counting.
///
/// A token survives iff it is not a stopword, it appears in the dictionary
/// when one is configured (`None` runs dictionary-free), it is not made of
/// digits only, and it is strictly longer than `min_len`. Relative order of
/// survivors is preserved.
pub fn filter(
    tokens: Vec<String>,
    dictionary: Option<&HashSet<String>>,
    stopwords: &HashSet<String>,
    min_len: usize,
) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|token| {
            !stopwords.contains(token)
                && dictionary.is_none_or(|dict| dict.contains(token))
                && !token.chars().all(|c| c.is_ascii_digit())
                && token.len() > min_len
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn drops_stopwords_and_short_tokens() {
        let stopwords = set(&["the", "and"]);
        let out = filter(
            toks(&["the", "elephant", "and", "ant", "runs"]),
            None,
            &stopwords,
            3,
        );
        assert_eq!(out, toks(&["elephant", "runs"]));
    }

    #[test]
    fn dictionary_is_exact_match_only() {
        let dict = set(&["cat", "run", "quick"]);
        let stopwords = set(&[]);
        // "cats" is not literally in the dictionary, so it is dropped; no stemming here.
        let out = filter(toks(&["cats", "quick"]), Some(&dict), &stopwords, 3);
        assert_eq!(out, toks(&["quick"]));
    }

    #[test]
    fn dictionary_free_mode_keeps_unknown_words() {
        let stopwords = set(&[]);
        let out = filter(toks(&["zyzzyva"]), None, &stopwords, 3);
        assert_eq!(out, toks(&["zyzzyva"]));
    }

    #[test]
    fn drops_pure_digit_tokens_but_keeps_mixed() {
        let stopwords = set(&[]);
        let out = filter(toks(&["2024", "12345", "abc123"]), None, &stopwords, 3);
        assert_eq!(out, toks(&["abc123"]));
    }

    #[test]
    fn min_len_is_strict() {
        let stopwords = set(&[]);
        assert!(filter(toks(&["dog"]), None, &stopwords, 3).is_empty());
        assert_eq!(filter(toks(&["dogs"]), None, &stopwords, 3), toks(&["dogs"]));
    }

    #[test]
    fn preserves_relative_order() {
        let stopwords = set(&["some"]);
        let out = filter(
            toks(&["delta", "some", "alpha", "gamma"]),
            None,
            &stopwords,
            3,
        );
        assert_eq!(out, toks(&["delta", "alpha", "gamma"]));
    }
}
