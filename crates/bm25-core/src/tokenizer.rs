use regex::Regex;

use crate::Bm25Error;

/// Trait for turning a document or query string into ordered term tokens.
///
/// The scoring core never decides tokenization policy; callers supply an
/// implementation when building an index. Any `Fn(&str) -> Vec<String>`
/// closure is a tokenizer.
pub trait Tokenizer: Send + Sync {
    /// Split `text` into terms, preserving order and duplicates.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn tokenize(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// Splits on Unicode whitespace.
#[derive(Debug, Clone, Default)]
pub struct WhitespaceTokenizer {
    lowercase: bool,
}

impl WhitespaceTokenizer {
    /// Create a tokenizer that keeps tokens exactly as written.
    pub fn new() -> Self {
        Self { lowercase: false }
    }

    /// Lowercase every token.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|term| {
                if self.lowercase {
                    term.to_lowercase()
                } else {
                    term.to_string()
                }
            })
            .collect()
    }
}

/// Emits every non-overlapping match of a regex as a token.
#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    pattern: Regex,
    lowercase: bool,
}

impl RegexTokenizer {
    /// Create a tokenizer from a token pattern such as `\w+`.
    ///
    /// Returns an error if the pattern is not a valid regex.
    pub fn new(pattern: &str) -> Result<Self, Bm25Error> {
        let pattern =
            Regex::new(pattern).map_err(|e| Bm25Error::InvalidTokenPattern(e.to_string()))?;
        Ok(Self {
            pattern,
            lowercase: false,
        })
    }

    /// Lowercase every token.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|m| {
                if self.lowercase {
                    m.as_str().to_lowercase()
                } else {
                    m.as_str().to_string()
                }
            })
            .collect()
    }
}
