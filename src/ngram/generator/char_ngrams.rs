// src/ngram/generator/char_ngrams.rs

use std::ops::Range;

/// Byte range of the current character window over a string.
///
/// Windows are measured in characters, so multi-byte text is never cut
/// inside a code point.
#[derive(Debug, Clone)]
pub(crate) struct CharWindow {
    start: usize,
    end: Option<usize>,
}

impl CharWindow {
    pub(crate) fn new(text: &str, ngram_size: usize) -> Self {
        // Byte offset just past the first `ngram_size` characters, None if the text is shorter
        let end = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .nth(ngram_size);
        Self { start: 0, end }
    }

    pub(crate) fn advance(&mut self, text: &str) -> Option<Range<usize>> {
        let end = self.end?;
        let current = self.start..end;

        match text[end..].chars().next() {
            Some(next) => {
                // Window is non-empty, so there is always a first char to drop
                let first = text[self.start..].chars().next().map_or(0, char::len_utf8);
                self.start += first;
                self.end = Some(end + next.len_utf8());
            }
            None => self.end = None,
        }
        Some(current)
    }

    pub(crate) fn remaining(&self, text: &str) -> usize {
        match self.end {
            Some(end) => text[end..].chars().count() + 1,
            None => 0,
        }
    }
}

/// Borrowing iterator over the n-grams of an already padded string.
#[derive(Debug, Clone)]
pub struct NGrams<'a> {
    text: &'a str,
    window: CharWindow,
}

impl<'a> NGrams<'a> {
    pub(crate) fn new(text: &'a str, ngram_size: usize) -> Self {
        Self {
            text,
            window: CharWindow::new(text, ngram_size),
        }
    }
}

impl<'a> Iterator for NGrams<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let range = self.window.advance(self.text)?;
        Some(&self.text[range])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.window.remaining(self.text);
        (n, Some(n))
    }
}

impl ExactSizeIterator for NGrams<'_> {}

/// Owning iterator produced by [`NGramGenerator::split`](super::NGramGenerator::split).
///
/// Holds the padded string and yields each n-gram as an owned `String`.
#[derive(Debug, Clone)]
pub struct Split {
    padded: String,
    window: CharWindow,
}

impl Split {
    pub(crate) fn new(padded: String, ngram_size: usize) -> Self {
        let window = CharWindow::new(&padded, ngram_size);
        Self { padded, window }
    }

    /// The padded string being split.
    pub fn padded(&self) -> &str {
        &self.padded
    }
}

impl Iterator for Split {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let range = self.window.advance(&self.padded)?;
        Some(self.padded[range].to_string())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.window.remaining(&self.padded);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Split {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ngrams_ascii() {
        let grams: Vec<&str> = NGrams::new("hamegg", 3).collect();
        assert_eq!(grams, vec!["ham", "ame", "meg", "egg"]);
    }

    #[test]
    fn test_ngrams_exact_and_short() {
        assert_eq!(NGrams::new("abc", 3).collect::<Vec<_>>(), vec!["abc"]);
        assert_eq!(NGrams::new("ab", 3).count(), 0);
        assert_eq!(NGrams::new("", 1).count(), 0);
    }

    #[test]
    fn test_ngrams_multibyte() {
        let grams: Vec<&str> = NGrams::new("çaé€", 2).collect();
        assert_eq!(grams, vec!["ça", "aé", "é€"]);
    }

    #[test]
    fn test_size_hint_matches_count() {
        let iter = NGrams::new("$$spam$$", 3);
        assert_eq!(iter.len(), 6);
        assert_eq!(iter.count(), 6);

        let mut split = Split::new("日本語です".to_string(), 2);
        assert_eq!(split.len(), 4);
        split.next();
        assert_eq!(split.len(), 3);
    }

    #[test]
    fn test_split_is_restartable() {
        let split = Split::new("$ab$".to_string(), 2);
        let first: Vec<String> = split.clone().collect();
        let second: Vec<String> = split.collect();
        assert_eq!(first, second);
        assert_eq!(first, vec!["$a", "ab", "b$"]);
    }
}
