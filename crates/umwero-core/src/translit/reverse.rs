use tracing::{debug, debug_span};

use crate::normalize::{split_words, Piece};
use crate::unicode::is_numeral_char;

use super::{Token, TokenKind, Transliterator};

impl Transliterator<'_> {
    /// Umwero -> Latin Kinyarwanda.
    ///
    /// Several clusters can share a glyph (L and R, for instance), so this is
    /// not an exact inverse of [`forward`](Self::forward): an ambiguous glyph
    /// always yields the registry's canonical cluster.
    pub fn reverse(&self, text: &str) -> String {
        self.tokenize_reverse(text)
            .into_iter()
            .map(|t| t.output)
            .collect()
    }

    pub fn tokenize_reverse(&self, text: &str) -> Vec<Token> {
        let _span = debug_span!("reverse", bytes = text.len()).entered();
        let mut tokens = Vec::new();

        for piece in split_words(text, self.collapse_whitespace) {
            match piece {
                Piece::Separator(s) => {
                    tokens.push(Token::verbatim(s.to_string(), TokenKind::Separator));
                }
                Piece::Word(w) => self.reverse_word(w, &mut tokens),
            }
        }

        debug!(
            token_count = tokens.len(),
            ambiguous = tokens.iter().filter(|t| t.ambiguous).count()
        );
        tokens
    }

    fn reverse_word(&self, word: &str, tokens: &mut Vec<Token>) {
        let chars: Vec<char> = word.chars().collect();
        let max_glyph_len = self.registry.reverse_index().max_glyph_len();
        let mut i = 0;

        'scan: while i < chars.len() {
            if is_numeral_char(chars[i]) {
                let end = numeral_end(&chars[i..]) + i;
                let run: String = chars[i..end].iter().collect();
                tokens.push(self.reverse_numeral(run));
                i = end;
                continue;
            }

            let longest = max_glyph_len.min(chars.len() - i);
            for len in (1..=longest).rev() {
                let glyph: String = chars[i..i + len].iter().collect();
                let candidates = self.registry.candidates(&glyph);
                if let Some(first) = candidates.first() {
                    let cluster = if self.lowercase_output {
                        first.cluster.to_ascii_lowercase()
                    } else {
                        first.cluster.clone()
                    };
                    tokens.push(Token {
                        input: glyph,
                        output: cluster,
                        kind: first.kind.into(),
                        ambiguous: candidates.len() > 1,
                    });
                    i += len;
                    continue 'scan;
                }
            }

            tokens.push(self.passthrough(chars[i]));
            i += 1;
        }
    }

    /// Decode a numeral run, or keep it literally when it is malformed.
    fn reverse_numeral(&self, run: String) -> Token {
        match self.numerals.decode_str(&run) {
            Ok(n) => Token::new(run, n.to_string(), TokenKind::Numeral),
            Err(e) => {
                debug!(run = %run, "numeral run kept as typed: {e}");
                Token::verbatim(run, TokenKind::Unmapped)
            }
        }
    }
}

/// End of the numeral starting at `chars[0]`: the first unmarked digit closes
/// it, since the ones digit is always last. A run with no unmarked digit
/// extends to the last numeral char and is left for the decoder to reject.
fn numeral_end(chars: &[char]) -> usize {
    let mut marked = false;
    for (idx, &c) in chars.iter().enumerate() {
        if !is_numeral_char(c) {
            return idx;
        }
        if c.is_ascii_digit() {
            if !marked {
                return idx + 1;
            }
            marked = false;
        } else {
            marked = true;
        }
    }
    chars.len()
}
