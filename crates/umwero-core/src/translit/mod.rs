//! Latin <-> Umwero transliteration.
//!
//! Both directions tokenize greedily, longest match first, over the shared
//! [`MappingRegistry`] and [`NumeralCodec`]. Nothing is dropped: characters
//! with no mapping pass through unchanged.

mod forward;
mod reverse;

#[cfg(test)]
mod tests;

use serde::Serialize;

use crate::numeral::NumeralCodec;
use crate::registry::{ClusterKind, MappingRegistry};
use crate::settings::settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    Vowel,
    Ligature,
    Consonant,
    Numeral,
    Punctuation,
    Unmapped,
    Separator,
}

impl From<ClusterKind> for TokenKind {
    fn from(kind: ClusterKind) -> Self {
        match kind {
            ClusterKind::Vowel => TokenKind::Vowel,
            ClusterKind::Ligature => TokenKind::Ligature,
            ClusterKind::Consonant => TokenKind::Consonant,
        }
    }
}

/// One unit of a conversion: the text consumed and the text emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub input: String,
    pub output: String,
    pub kind: TokenKind,
    /// Umwero -> Latin only: the glyph has more than one Latin cluster and
    /// `output` is the canonical pick.
    pub ambiguous: bool,
}

impl Token {
    fn new(input: String, output: String, kind: TokenKind) -> Self {
        Self {
            input,
            output,
            kind,
            ambiguous: false,
        }
    }

    fn verbatim(text: String, kind: TokenKind) -> Self {
        Self::new(text.clone(), text, kind)
    }
}

/// A configured converter over a registry and numeral codec.
#[derive(Clone, Copy)]
pub struct Transliterator<'a> {
    registry: &'a MappingRegistry,
    numerals: NumeralCodec,
    collapse_whitespace: bool,
    lowercase_output: bool,
}

impl<'a> Transliterator<'a> {
    pub fn new(registry: &'a MappingRegistry, numerals: NumeralCodec) -> Self {
        Self {
            registry,
            numerals,
            collapse_whitespace: false,
            lowercase_output: false,
        }
    }

    pub fn with_collapse_whitespace(mut self, collapse: bool) -> Self {
        self.collapse_whitespace = collapse;
        self
    }

    pub fn with_lowercase_output(mut self, lowercase: bool) -> Self {
        self.lowercase_output = lowercase;
        self
    }

    fn passthrough(&self, c: char) -> Token {
        let kind = if self.registry.is_passthrough(c) {
            TokenKind::Punctuation
        } else {
            TokenKind::Unmapped
        };
        Token::verbatim(c.to_string(), kind)
    }
}

impl Transliterator<'static> {
    /// Converter over the global registry and settings.
    pub fn global() -> Self {
        let s = settings();
        Self::new(MappingRegistry::global(), NumeralCodec::from_settings())
            .with_collapse_whitespace(s.text.collapse_whitespace)
            .with_lowercase_output(s.reverse.lowercase_output)
    }
}

/// Latin Kinyarwanda -> Umwero with the global registry and settings.
pub fn transliterate_forward(text: &str) -> String {
    Transliterator::global().forward(text)
}

/// Umwero -> Latin Kinyarwanda with the global registry and settings.
pub fn transliterate_reverse(text: &str) -> String {
    Transliterator::global().reverse(text)
}

pub fn tokenize_forward(text: &str) -> Vec<Token> {
    Transliterator::global().tokenize_forward(text)
}

pub fn tokenize_reverse(text: &str) -> Vec<Token> {
    Transliterator::global().tokenize_reverse(text)
}
