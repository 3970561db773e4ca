//! Word and segment boundaries shared by both conversion directions.
//!
//! Text is split into words and whitespace separators. For Latin -> Umwero,
//! each word is uppercased and cut into letter, digit and other segments so
//! that numerals and punctuation never reach the cluster matcher.
//!
//! Case folding is ASCII only. Full Unicode uppercasing can expand one char
//! into several (`ß` -> `SS`), which would then match Kinyarwanda clusters.

use crate::unicode::is_cluster_letter;

/// A word or the whitespace between words, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    Word(&'a str),
    Separator(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// ASCII letter run (cluster matching applies).
    Letters,
    /// ASCII digit run (numeral encoding applies).
    Digits,
    /// Punctuation, symbols, non-ASCII letters and anything else.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
}

/// One uppercased word cut into segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub segments: Vec<Segment>,
}

impl Word {
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Split `input` into words and separators.
///
/// With `collapse` every separator becomes a single space and leading or
/// trailing whitespace is dropped. Without it each whitespace run is kept
/// verbatim, so concatenating the pieces reproduces `input`.
pub fn split_words(input: &str, collapse: bool) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut in_space: Option<bool> = None;

    for (idx, c) in input.char_indices() {
        let space = c.is_whitespace();
        match in_space {
            Some(prev) if prev != space => {
                pieces.push(piece(&input[start..idx], prev));
                start = idx;
            }
            _ => {}
        }
        in_space = Some(space);
    }
    if let Some(prev) = in_space {
        pieces.push(piece(&input[start..], prev));
    }

    if collapse {
        let mut collapsed = Vec::with_capacity(pieces.len());
        for word in pieces.into_iter().filter(|p| matches!(p, Piece::Word(_))) {
            if !collapsed.is_empty() {
                collapsed.push(Piece::Separator(" "));
            }
            collapsed.push(word);
        }
        return collapsed;
    }
    pieces
}

fn piece(text: &str, space: bool) -> Piece<'_> {
    if space {
        Piece::Separator(text)
    } else {
        Piece::Word(text)
    }
}

fn classify(c: char) -> SegmentKind {
    if c.is_ascii_digit() {
        SegmentKind::Digits
    } else if is_cluster_letter(c) {
        SegmentKind::Letters
    } else {
        SegmentKind::Other
    }
}

/// Uppercase one word (ASCII letters only) and cut it into segments. Every
/// input char yields exactly one output char.
pub fn normalize_word(word: &str) -> Word {
    let mut segments: Vec<Segment> = Vec::new();
    for c in word.chars().map(|c| c.to_ascii_uppercase()) {
        let kind = classify(c);
        match segments.last_mut() {
            Some(seg) if seg.kind == kind => seg.text.push(c),
            _ => segments.push(Segment {
                kind,
                text: c.to_string(),
            }),
        }
    }
    Word { segments }
}

/// Split on whitespace and normalize every word for Latin -> Umwero matching.
pub fn normalize(input: &str) -> Vec<Word> {
    input.split_whitespace().map(normalize_word).collect()
}
