//! Word tokenization
//!
//! Splits free text into lowercase alphabetic words. Any non-alphabetic
//! character is a boundary, so punctuation, digits, and whitespace never
//! appear inside a token. Tokens shorter than the configured minimum are
//! dropped during the scan.

/// Default minimum token length in characters.
pub const DEFAULT_MIN_TOKEN_LEN: usize = 3;

/// Extracts lowercase alphabetic words from text.
///
/// Matching is restricted to ASCII letters, so the output is stable for
/// the English review text this crate operates on; words containing other
/// scripts are split at the non-ASCII character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    min_len: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a tokenizer with the default minimum token length.
    pub fn new() -> Self {
        Self {
            min_len: DEFAULT_MIN_TOKEN_LEN,
        }
    }

    /// Set the minimum token length.
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Split `text` into lowercase words of at least the minimum length,
    /// in order of appearance.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();

        for c in text.chars() {
            if c.is_ascii_alphabetic() {
                current.push(c.to_ascii_lowercase());
            } else if !current.is_empty() {
                self.flush(&mut current, &mut tokens);
            }
        }
        self.flush(&mut current, &mut tokens);

        tokens
    }

    fn flush(&self, current: &mut String, tokens: &mut Vec<String>) {
        if current.len() >= self.min_len && !current.is_empty() {
            tokens.push(std::mem::take(current));
        } else {
            current.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_whitespace_and_punctuation() {
        let tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("Great pedal, great sound!"),
            vec!["great", "pedal", "great", "sound"]
        );
    }

    #[test]
    fn test_lowercases_tokens() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.tokenize("LOUD Amp"), vec!["loud", "amp"]);
    }

    #[test]
    fn test_drops_short_tokens() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.tokenize("a an the amp"), vec!["the", "amp"]);
    }

    #[test]
    fn test_digits_are_boundaries() {
        let tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("guitar123strings"),
            vec!["guitar", "strings"]
        );
    }

    #[test]
    fn test_apostrophes_split_words() {
        let tokenizer = Tokenizer::new();
        // "don't" splits into "don" and "t"; the single letter is dropped.
        assert_eq!(tokenizer.tokenize("don't"), vec!["don"]);
    }

    #[test]
    fn test_non_ascii_is_a_boundary() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.tokenize("naïve"), Vec::<String>::new());
        assert_eq!(tokenizer.tokenize("touché pick"), vec!["touch", "pick"]);
    }

    #[test]
    fn test_empty_and_symbol_only_input() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("!!! 123 ...").is_empty());
    }

    #[test]
    fn test_custom_min_len() {
        let tokenizer = Tokenizer::new().with_min_len(5);
        assert_eq!(tokenizer.tokenize("great amp sound"), vec!["great", "sound"]);
    }

    #[test]
    fn test_trailing_token_is_kept() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.tokenize("good strings"), vec!["good", "strings"]);
    }
}
