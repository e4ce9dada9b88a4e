//! Sentence splitting on literal `.`.
//!
//! Abbreviations ("e.g.") and decimals ("3.5") are split apart too.

/// Yields trimmed, non-empty `.`-delimited fragments of `text`, in order.
pub fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split('.').map(str::trim).filter(|s| !s.is_empty())
}

/// Number of fragments [`split_sentences`] yields.
pub fn sentence_count(text: &str) -> usize {
    split_sentences(text).count()
}
