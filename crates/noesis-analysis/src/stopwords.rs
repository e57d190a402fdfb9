//! English stopword list used by concept extraction. Words here never
//! become concepts regardless of frequency.

static STOPWORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "along", "also", "always", "among", "another",
    "anything", "around", "because", "been", "before", "being", "below", "between", "both",
    "cannot", "come", "comes", "could", "does", "doing", "down", "during", "each", "either",
    "else", "even", "ever", "every", "everything", "first", "form", "from", "give", "goes",
    "going", "have", "having", "here", "however", "into", "itself", "just", "know", "like",
    "long", "made", "make", "makes", "many", "might", "more", "most", "much", "must", "need",
    "never", "nothing", "often", "once", "only", "other", "others", "over", "part", "perhaps",
    "rather", "really", "said", "same", "says", "seem", "seems", "shall", "should", "since",
    "some", "something", "still", "such", "take", "takes", "than", "that", "their", "them",
    "then", "there", "these", "they", "thing", "things", "this", "those", "though", "three",
    "through", "thus", "time", "times", "together", "toward", "under", "until", "upon", "very",
    "ways", "well", "were", "what", "when", "where", "which", "while", "whole", "will", "with",
    "within", "without", "word", "words", "would", "your", "yourself",
];

/// Whether `word` is a stopword. Callers pass lowercased words.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.binary_search(&word).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_is_sorted_for_binary_search() {
        assert!(STOPWORDS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn common_words_are_stopwords() {
        assert!(is_stopword("because"));
        assert!(is_stopword("something"));
        assert!(!is_stopword("attention"));
        assert!(!is_stopword("ecology"));
    }
}
