use tracing::{debug, debug_span};

use crate::normalize::{normalize, normalize_word, split_words, Piece, SegmentKind, Word};
use crate::registry::MAX_CLUSTER_LEN;

use super::{Token, TokenKind, Transliterator};

impl Transliterator<'_> {
    /// Latin Kinyarwanda -> Umwero.
    pub fn forward(&self, text: &str) -> String {
        self.tokenize_forward(text)
            .into_iter()
            .map(|t| t.output)
            .collect()
    }

    /// Latin -> Umwero token stream. Token inputs are the source text with
    /// ASCII letters uppercased; separators are kept (or collapsed) per
    /// configuration.
    pub fn tokenize_forward(&self, text: &str) -> Vec<Token> {
        let _span = debug_span!("forward", bytes = text.len()).entered();
        let mut tokens = Vec::new();

        if self.collapse_whitespace {
            for (idx, word) in normalize(text).into_iter().enumerate() {
                if idx > 0 {
                    tokens.push(Token::verbatim(" ".to_string(), TokenKind::Separator));
                }
                self.forward_word(word, &mut tokens);
            }
        } else {
            for piece in split_words(text, false) {
                match piece {
                    Piece::Separator(s) => {
                        tokens.push(Token::verbatim(s.to_string(), TokenKind::Separator));
                    }
                    Piece::Word(w) => self.forward_word(normalize_word(w), &mut tokens),
                }
            }
        }

        debug!(token_count = tokens.len());
        tokens
    }

    fn forward_word(&self, word: Word, tokens: &mut Vec<Token>) {
        for seg in word.segments {
            match seg.kind {
                SegmentKind::Letters => self.forward_letters(&seg.text, tokens),
                SegmentKind::Digits => self.forward_digits(seg.text, tokens),
                SegmentKind::Other => {
                    tokens.extend(seg.text.chars().map(|c| self.passthrough(c)));
                }
            }
        }
    }

    /// Greedy longest-match over an uppercased letter run.
    fn forward_letters(&self, letters: &str, tokens: &mut Vec<Token>) {
        let chars: Vec<char> = letters.chars().collect();
        let mut i = 0;

        'scan: while i < chars.len() {
            let longest = MAX_CLUSTER_LEN.min(chars.len() - i);
            for len in (1..=longest).rev() {
                let key: String = chars[i..i + len].iter().collect();
                if let Some(m) = self.registry.lookup(&key) {
                    let glyph = m.glyph.to_string();
                    tokens.push(Token::new(key, glyph, m.kind.into()));
                    i += len;
                    continue 'scan;
                }
            }
            tokens.push(self.passthrough(chars[i]));
            i += 1;
        }
    }

    /// Encode a digit run as one numeral. Runs with a leading zero, runs too
    /// large for `u64` and runs above the configured place ceiling are kept
    /// as typed.
    fn forward_digits(&self, digits: String, tokens: &mut Vec<Token>) {
        if digits.len() > 1 && digits.starts_with('0') {
            debug!(digits = %digits, "leading zero, numeral kept as typed");
            tokens.push(Token::verbatim(digits, TokenKind::Unmapped));
            return;
        }

        let encoded = digits
            .parse::<u64>()
            .map_err(|e| e.to_string())
            .and_then(|n| self.numerals.encode_str(n).map_err(|e| e.to_string()));
        match encoded {
            Ok(glyphs) => tokens.push(Token::new(digits, glyphs, TokenKind::Numeral)),
            Err(e) => {
                debug!(digits = %digits, "numeral kept as typed: {e}");
                tokens.push(Token::verbatim(digits, TokenKind::Unmapped));
            }
        }
    }
}
