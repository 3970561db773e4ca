//! Umwero positional numerals.
//!
//! A number is written most-significant place first. The ones digit stands
//! alone; every other nonzero digit is preceded by the place marker for its
//! power of ten, and zero digits above the ones place are omitted:
//!
//! - `25`  -> `[tens marker, "2", "5"]`
//! - `100` -> `[hundreds marker, "1"]`
//! - `0`   -> `["0"]`
//!
//! Digit glyphs are the ASCII digits (the Umwero font draws them); markers
//! live in the Private Use Area starting at U+F300 for the tens place.

use crate::settings::settings;
use crate::unicode::{marker_place, place_marker, MAX_PLACE};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumeralError {
    #[error("place 10^{place} exceeds the configured maximum 10^{max_place}")]
    UnsupportedMagnitude { place: u32, max_place: u32 },
    #[error("unknown numeral glyph {glyph:?} at position {position}")]
    UnknownMarker { glyph: String, position: usize },
    #[error("malformed numeral at position {position}")]
    TrailingGarbage { position: usize },
}

/// Encoder/decoder for numerals up to a configured highest place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumeralCodec {
    max_place: u32,
}

impl Default for NumeralCodec {
    fn default() -> Self {
        Self::new(MAX_PLACE)
    }
}

impl NumeralCodec {
    /// `max_place` is clamped to 1..=19 (the range a `u64` can fill).
    pub fn new(max_place: u32) -> Self {
        Self {
            max_place: max_place.clamp(1, MAX_PLACE),
        }
    }

    /// Codec using `numerals.max_place` from the global settings.
    pub fn from_settings() -> Self {
        Self::new(settings().numerals.max_place)
    }

    pub fn max_place(&self) -> u32 {
        self.max_place
    }

    /// Marker glyph for 10^place, if the place is within the ceiling.
    pub fn marker(&self, place: u32) -> Option<char> {
        if place > self.max_place {
            return None;
        }
        place_marker(place)
    }

    fn place_of(&self, c: char) -> Option<u32> {
        marker_place(c).filter(|&p| p <= self.max_place)
    }

    pub fn encode(&self, n: u64) -> Result<Vec<String>, NumeralError> {
        let digits = n.to_string();
        let top_place = digits.len() as u32 - 1;
        if top_place > self.max_place {
            return Err(NumeralError::UnsupportedMagnitude {
                place: top_place,
                max_place: self.max_place,
            });
        }
        if n == 0 {
            return Ok(vec!["0".to_string()]);
        }

        let mut glyphs = Vec::with_capacity(digits.len() * 2);
        for (idx, d) in digits.chars().enumerate() {
            let place = top_place - idx as u32;
            if d == '0' {
                continue;
            }
            if place > 0 {
                let marker = self.marker(place).ok_or(NumeralError::UnsupportedMagnitude {
                    place,
                    max_place: self.max_place,
                })?;
                glyphs.push(marker.to_string());
            }
            glyphs.push(d.to_string());
        }
        Ok(glyphs)
    }

    /// [`encode`](Self::encode) joined into one string.
    pub fn encode_str(&self, n: u64) -> Result<String, NumeralError> {
        self.encode(n).map(|g| g.concat())
    }

    /// Decode a glyph sequence produced by [`encode`](Self::encode).
    ///
    /// A marker sets the place of the digit right after it. A digit without a
    /// marker is the ones digit and must come last. Places must strictly
    /// descend, and a marked digit cannot be zero.
    pub fn decode<S: AsRef<str>>(&self, glyphs: &[S]) -> Result<u64, NumeralError> {
        if glyphs.is_empty() {
            return Err(NumeralError::TrailingGarbage { position: 0 });
        }

        let mut total: u64 = 0;
        let mut pending: Option<u32> = None;
        let mut last_place: Option<u32> = None;

        for (position, glyph) in glyphs.iter().enumerate() {
            let glyph = glyph.as_ref();
            let mut chars = glyph.chars();
            let c = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(NumeralError::UnknownMarker {
                        glyph: glyph.to_string(),
                        position,
                    })
                }
            };

            if let Some(d) = c.to_digit(10) {
                let place = match pending.take() {
                    Some(place) => {
                        if d == 0 {
                            return Err(NumeralError::TrailingGarbage { position });
                        }
                        place
                    }
                    None => {
                        if position + 1 != glyphs.len() {
                            return Err(NumeralError::TrailingGarbage {
                                position: position + 1,
                            });
                        }
                        if d == 0 && position != 0 {
                            return Err(NumeralError::TrailingGarbage { position });
                        }
                        0
                    }
                };
                total = 10u64
                    .checked_pow(place)
                    .and_then(|p| p.checked_mul(u64::from(d)))
                    .and_then(|v| total.checked_add(v))
                    .ok_or(NumeralError::UnsupportedMagnitude {
                        place,
                        max_place: self.max_place,
                    })?;
            } else if let Some(place) = self.place_of(c) {
                if pending.is_some() {
                    return Err(NumeralError::TrailingGarbage { position });
                }
                if last_place.is_some_and(|last| place >= last) {
                    return Err(NumeralError::UnknownMarker {
                        glyph: glyph.to_string(),
                        position,
                    });
                }
                last_place = Some(place);
                pending = Some(place);
            } else {
                return Err(NumeralError::UnknownMarker {
                    glyph: glyph.to_string(),
                    position,
                });
            }
        }

        if pending.is_some() {
            return Err(NumeralError::TrailingGarbage {
                position: glyphs.len(),
            });
        }
        Ok(total)
    }

    /// Decode a string where every char is one numeral glyph.
    pub fn decode_str(&self, s: &str) -> Result<u64, NumeralError> {
        let glyphs: Vec<String> = s.chars().map(String::from).collect();
        self.decode(&glyphs)
    }
}
