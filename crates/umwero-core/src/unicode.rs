//! Character-level classification for Latin Kinyarwanda and Umwero text.

/// First code point of the numeral place-marker block. The marker for
/// 10^place is `PLACE_MARKER_BASE + (place - 1)`.
pub const PLACE_MARKER_BASE: u32 = 0xF300;

/// Highest place a `u64` can carry (10^19).
pub const MAX_PLACE: u32 = 19;

/// Check the Basic Multilingual Plane Private Use Area (U+E000..U+F8FF).
/// Umwero ligatures and numeral markers live here; the font supplies glyphs.
pub fn is_pua(c: char) -> bool {
    ('\u{E000}'..='\u{F8FF}').contains(&c)
}

/// Check whether `c` falls in the place-marker block for any place a `u64`
/// can reach, regardless of the configured ceiling.
pub fn is_place_marker(c: char) -> bool {
    let cp = c as u32;
    (PLACE_MARKER_BASE..PLACE_MARKER_BASE + MAX_PLACE).contains(&cp)
}

/// Place-marker character for 10^place. `None` for place 0 or above `MAX_PLACE`.
pub fn place_marker(place: u32) -> Option<char> {
    if place == 0 || place > MAX_PLACE {
        return None;
    }
    char::from_u32(PLACE_MARKER_BASE + place - 1)
}

/// Inverse of [`place_marker`].
pub fn marker_place(c: char) -> Option<u32> {
    if is_place_marker(c) {
        Some(c as u32 - PLACE_MARKER_BASE + 1)
    } else {
        None
    }
}

/// A character that may appear in an Umwero numeral run.
pub fn is_numeral_char(c: char) -> bool {
    c.is_ascii_digit() || is_place_marker(c)
}

pub fn is_latin_vowel(c: char) -> bool {
    matches!(c.to_ascii_uppercase(), 'A' | 'E' | 'I' | 'O' | 'U')
}

/// Letters that take part in cluster matching. Non-ASCII letters (é, ñ, ...)
/// are passed through like punctuation.
pub fn is_cluster_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}
